//! Open Packaging Conventions (OPC) relationship parts.
//!
//! Every part of an OOXML package may have a companion relationships part
//! (`_rels/<part>.rels`) listing its typed links to other parts. This module
//! provides:
//!
//! - A closed set of relationship types with their canonical URIs
//! - Relationship entries bound to the elements of the backing XML tree
//! - A registry that allocates `rId<N>` ids and keeps the tree, the index and
//!   the stored part consistent on every change
//!
//! # Example
//!
//! ```
//! use opc_rels::ooxml::opc::{MemoryStorage, RelationshipType, Relationships};
//!
//! let mut rels = Relationships::new("xl/_rels/workbook.xml.rels", MemoryStorage::new());
//! let sheet = rels.add(RelationshipType::Worksheet, "worksheets/sheet1.xml")?;
//! assert_eq!(sheet.r_id(), "rId1");
//!
//! let styles = rels.add(RelationshipType::Styles, "styles.xml")?;
//! assert_eq!(styles.r_id(), "rId2");
//!
//! assert_eq!(rels.by_target("styles.xml")?.reltype(), RelationshipType::Styles);
//! # Ok::<(), opc_rels::ooxml::opc::OpcError>(())
//! ```

pub mod constants;
pub mod error;
pub mod rel;
pub mod relationships;
pub mod reltype;
pub mod storage;
pub mod tree;

// Re-export commonly used types
pub use error::{OpcError, Result};
pub use rel::Relationship;
pub use relationships::{Change, ChangeKind, Relationships};
pub use reltype::RelationshipType;
pub use storage::{DirStorage, MemoryStorage, PartStorage};
pub use tree::{XmlNode, XmlTree, XmlWriteOptions};
