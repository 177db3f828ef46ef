//! Relationship registry of a single relationships part.
//!
//! [`Relationships`] indexes the `<Relationship>` elements of a `.rels` part by
//! id and keeps that index in step with the backing [`XmlTree`]. Every `add`
//! and `delete` edits the tree, updates the index and writes the serialized
//! part back to its [`PartStorage`] before returning.
//!
//! Ids are allocated as `rId1`, `rId2`, ... from a counter that only grows, so
//! an id is never handed out twice by the same registry, even after the entry
//! it named has been deleted.

use crate::ooxml::opc::constants::{R_ID_PREFIX, namespace, target_mode, xml_name};
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::rel::Relationship;
use crate::ooxml::opc::reltype::RelationshipType;
use crate::ooxml::opc::storage::PartStorage;
use crate::ooxml::opc::tree::{XmlTree, XmlWriteOptions};
use std::collections::BTreeMap;
use std::ops::Deref;
use tracing::{debug, warn};

/// What a mutating registry call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
}

/// Result of a successful `add` or `delete`.
///
/// The owning document uses this to track that it has been modified.
/// Dereferences to the wrapped value.
#[must_use = "the owning document should be marked as modified"]
#[derive(Debug)]
pub struct Change<T> {
    kind: ChangeKind,
    r_id: String,
    value: T,
}

impl<T> Change<T> {
    fn new(kind: ChangeKind, r_id: String, value: T) -> Self {
        Self { kind, r_id, value }
    }

    #[inline]
    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// Id of the added or removed relationship.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Change<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

/// Extract N from an "rId<N>" id.
fn r_id_number(r_id: &str) -> Option<u32> {
    let digits = r_id.strip_prefix(R_ID_PREFIX)?;
    atoi_simd::parse::<u32, false, false>(digits.as_bytes()).ok()
}

/// The relationships of one source part, backed by its `.rels` XML tree.
///
/// Entries are kept in a `BTreeMap`, so iteration follows the lexicographic
/// order of the ids (`rId1`, `rId10`, `rId2`, ...).
#[derive(Debug)]
pub struct Relationships<S: PartStorage> {
    /// Partname of the relationships part (e.g. "xl/_rels/workbook.xml.rels")
    partname: String,

    /// Backing tree, also the persisted form
    tree: XmlTree,

    /// Map of relationship ID to Relationship
    rels: BTreeMap<String, Relationship>,

    /// Last allocated id number
    count: u32,

    storage: S,
    write_options: XmlWriteOptions,
}

impl<S: PartStorage> Relationships<S> {
    /// Create an empty relationships part.
    ///
    /// Nothing is written to `storage` until the first change or [`save`](Self::save).
    pub fn new(partname: impl Into<String>, storage: S) -> Self {
        Self {
            partname: partname.into(),
            tree: XmlTree::with_namespace(xml_name::RELATIONSHIPS, namespace::OPC_RELATIONSHIPS),
            rels: BTreeMap::new(),
            count: 0,
            storage,
            write_options: XmlWriteOptions::default(),
        }
    }

    /// Load the part from `storage`, or start an empty one if it does not exist.
    pub fn open(partname: impl Into<String>, storage: S) -> Result<Self> {
        let partname = partname.into();
        match storage.load(&partname)? {
            Some(blob) => Self::from_xml(partname, &blob, storage),
            None => Ok(Self::new(partname, storage)),
        }
    }

    /// Parse a serialized relationships part.
    pub fn from_xml(partname: impl Into<String>, xml: &[u8], storage: S) -> Result<Self> {
        let tree = XmlTree::parse(xml)?;
        Self::from_tree(partname, tree, storage)
    }

    /// Build the registry from an already parsed tree.
    ///
    /// Each child of the root becomes one entry, in document order. When two
    /// elements share an id, the later one is indexed and the earlier element
    /// is removed from the tree. Unknown type URIs load as
    /// [`RelationshipType::Unknown`] and keep their raw URI.
    ///
    /// # Errors
    /// Returns [`OpcError::InvalidRelationship`] for an element without an
    /// `Id`, `Type` or `Target` attribute.
    pub fn from_tree(partname: impl Into<String>, mut tree: XmlTree, storage: S) -> Result<Self> {
        let partname = partname.into();
        let mut rels: BTreeMap<String, Relationship> = BTreeMap::new();
        let mut shadowed = Vec::new();
        let mut highest = 0u32;

        for node in tree.children(tree.root()) {
            let data = tree.node(node)?;
            let attr = |name: &str| {
                data.attribute(name).ok_or_else(|| {
                    OpcError::InvalidRelationship(format!(
                        "<{}> in {} has no {} attribute",
                        data.name, partname, name
                    ))
                })
            };

            let r_id = attr(xml_name::ID)?;
            let type_uri = attr(xml_name::TYPE)?;
            let target_ref = attr(xml_name::TARGET)?;
            let is_external = data.attribute(xml_name::TARGET_MODE) == Some(target_mode::EXTERNAL);

            let rel = Relationship::new(
                node,
                r_id.to_string(),
                type_uri.to_string(),
                target_ref.to_string(),
                is_external,
            );
            if !rel.reltype().is_known() {
                warn!(partname = %partname, r_id, type_uri, "unrecognized relationship type");
            }
            if let Some(n) = r_id_number(r_id) {
                highest = highest.max(n);
            }
            if let Some(earlier) = rels.insert(r_id.to_string(), rel) {
                warn!(partname = %partname, r_id, "duplicate relationship id, dropping the earlier entry");
                shadowed.extend(earlier.node());
            }
        }

        // Unindexed elements would resurface on the next load
        for node in shadowed {
            tree.delete(node);
        }

        let parsed = u32::try_from(rels.len()).unwrap_or(u32::MAX);
        let count = highest.max(parsed);
        debug!(partname = %partname, entries = rels.len(), last_id = count, "loaded relationships");

        Ok(Self {
            partname,
            tree,
            rels,
            count,
            storage,
            write_options: XmlWriteOptions::default(),
        })
    }

    /// Set the options used when the part is serialized.
    pub fn with_write_options(mut self, options: XmlWriteOptions) -> Self {
        self.write_options = options;
        self
    }

    /// Get a relationship by its ID.
    ///
    /// # Errors
    /// Returns [`OpcError::IdNotFound`] if no entry has this id.
    pub fn by_id(&self, r_id: &str) -> Result<&Relationship> {
        self.rels
            .get(r_id)
            .ok_or_else(|| OpcError::IdNotFound(r_id.to_string()))
    }

    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.get(r_id)
    }

    /// Get the first relationship, in id order, pointing at `target_ref`.
    ///
    /// Targets need not be unique; with duplicates the lowest id wins.
    ///
    /// # Errors
    /// Returns [`OpcError::TargetNotFound`] if no entry has this target.
    pub fn by_target(&self, target_ref: &str) -> Result<&Relationship> {
        self.rels
            .values()
            .find(|rel| rel.target_ref() == target_ref)
            .ok_or_else(|| OpcError::TargetNotFound(target_ref.to_string()))
    }

    /// Iterate the relationships of a given type, in id order.
    pub fn by_type(&self, reltype: RelationshipType) -> impl Iterator<Item = &Relationship> + '_ {
        self.rels.values().filter(move |rel| rel.reltype() == reltype)
    }

    /// Get the relationship of a specific type.
    ///
    /// Returns an error if no relationship of the type is found,
    /// or if multiple relationships of the type exist.
    pub fn part_with_reltype(&self, reltype: RelationshipType) -> Result<&Relationship> {
        let mut matching = self.by_type(reltype);
        match (matching.next(), matching.next()) {
            (Some(rel), None) => Ok(rel),
            (None, _) => Err(OpcError::TypeNotFound(reltype)),
            (Some(_), Some(_)) => Err(OpcError::AmbiguousType(reltype)),
        }
    }

    /// Add a relationship and persist the part.
    ///
    /// The new entry gets the next unused `rId<N>` id. Only
    /// [`RelationshipType::ExternalLinkPath`] entries are written with
    /// `TargetMode="External"`.
    ///
    /// # Errors
    /// Returns [`OpcError::UnrecognizedType`] for [`RelationshipType::Unknown`],
    /// and [`OpcError::IdSpaceExhausted`] once `rId4294967295` has been used;
    /// nothing is changed in either case.
    pub fn add(
        &mut self,
        reltype: RelationshipType,
        target_ref: &str,
    ) -> Result<Change<&Relationship>> {
        let type_uri = reltype.to_uri()?;
        let is_external = reltype == RelationshipType::ExternalLinkPath;
        let r_id = self.next_r_id()?;

        let node = self.tree.create_element(xml_name::RELATIONSHIP);
        self.tree.set_attribute(node, xml_name::ID, &r_id)?;
        self.tree.set_attribute(node, xml_name::TYPE, type_uri)?;
        self.tree.set_attribute(node, xml_name::TARGET, target_ref)?;
        if is_external {
            self.tree
                .set_attribute(node, xml_name::TARGET_MODE, target_mode::EXTERNAL)?;
        }
        let root = self.tree.root();
        self.tree.append(root, node)?;

        let rel = Relationship::new(
            node,
            r_id.clone(),
            type_uri.to_string(),
            target_ref.to_string(),
            is_external,
        );
        self.rels.insert(r_id.clone(), rel);
        debug!(partname = %self.partname, r_id = %r_id, %reltype, target_ref, "added relationship");

        self.save()?;

        let rel = self.by_id(&r_id)?;
        Ok(Change::new(ChangeKind::Added, r_id, rel))
    }

    /// Delete a relationship and persist the part.
    ///
    /// The returned change carries the removed entry, already in its deleted
    /// state. The id is not reused by later `add` calls.
    ///
    /// # Errors
    /// Returns [`OpcError::IdNotFound`] if no entry has this id.
    pub fn delete(&mut self, r_id: &str) -> Result<Change<Relationship>> {
        let mut rel = self
            .rels
            .remove(r_id)
            .ok_or_else(|| OpcError::IdNotFound(r_id.to_string()))?;
        rel.delete(&mut self.tree);
        debug!(partname = %self.partname, r_id, "deleted relationship");

        self.save()?;

        Ok(Change::new(ChangeKind::Removed, r_id.to_string(), rel))
    }

    /// Write the serialized part to storage.
    ///
    /// `add` and `delete` call this themselves; it is only needed to write a
    /// part that has not been changed, such as a freshly created empty one.
    pub fn save(&mut self) -> Result<()> {
        let xml = self.to_xml();
        self.storage.save(&self.partname, xml.as_bytes())?;
        debug!(partname = %self.partname, bytes = xml.len(), "saved relationships part");
        Ok(())
    }

    /// Allocate the next id. Skips ids still held by entries that were loaded
    /// with out-of-sequence numbering.
    ///
    /// Leaves the counter untouched when no larger id number is left.
    fn next_r_id(&mut self) -> Result<String> {
        let mut buf = itoa::Buffer::new();
        let mut next = self.count;
        loop {
            next = next.checked_add(1).ok_or(OpcError::IdSpaceExhausted)?;
            let r_id = [R_ID_PREFIX, buf.format(next)].concat();
            if !self.rels.contains_key(&r_id) {
                self.count = next;
                return Ok(r_id);
            }
        }
    }

    /// Serialize the backing tree.
    pub fn to_xml(&self) -> String {
        self.tree.to_xml_with(&self.write_options)
    }

    /// Get an iterator over all relationships, in id order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.values()
    }

    /// Get the number of relationships in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    #[inline]
    pub fn contains(&self, r_id: &str) -> bool {
        self.rels.contains_key(r_id)
    }

    #[inline]
    pub fn partname(&self) -> &str {
        &self.partname
    }

    #[inline]
    pub fn tree(&self) -> &XmlTree {
        &self.tree
    }

    #[inline]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
