//! Common utilities shared by the package layers.

pub mod xml;
