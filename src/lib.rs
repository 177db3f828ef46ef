//! Relationship parts for Office Open XML packages.
//!
//! Each part of an `.xlsx`/`.docx`/`.pptx` package records its links to other
//! parts (worksheets, styles, shared strings, themes, external links, ...) in
//! a companion `.rels` part. This crate reads those parts, allocates the
//! `rId<N>` identifiers other parts use to address the links, and writes the
//! part back after every change.
//!
//! # Example - Editing a workbook's relationships
//!
//! ```
//! use opc_rels::ooxml::opc::{MemoryStorage, RelationshipType, Relationships};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
//! <Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
//!   <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
//! </Relationships>"#;
//!
//! let storage = MemoryStorage::new().with_part("xl/_rels/workbook.xml.rels", &xml[..]);
//! let mut rels = Relationships::open("xl/_rels/workbook.xml.rels", storage)?;
//!
//! let change = rels.add(RelationshipType::Worksheet, "worksheets/sheet2.xml")?;
//! println!("added {}", change.r_id());
//!
//! let _ = rels.delete("rId1")?;
//! assert_eq!(rels.len(), 1);
//! # Ok(())
//! # }
//! ```

/// Shared helpers
pub mod common;

/// OOXML (Office Open XML) package support
///
/// Only the relationship layer of the Open Packaging Conventions is provided.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use ooxml::opc::{OpcError, RelationshipType, Relationship, Relationships};
