//! Office Open XML (OOXML) package support.
//!
//! Only the Open Packaging Conventions layer is provided here: the relationship
//! parts that link one package part to the others it depends on.

pub mod opc;
