use crate::ooxml::opc::constants::{target_mode, xml_name};
use crate::ooxml::opc::reltype::RelationshipType;
use crate::ooxml::opc::tree::XmlTree;
/// A single relationship entry of a relationships part.
///
/// An entry mirrors one `<Relationship>` element of the backing tree. It does
/// not own that element: it keeps a stamped handle into the tree, which the
/// entry gives up when it is deleted.
use indextree::NodeId;

/// One (id, type, target) link from a source part, bound to its backing node.
///
/// While live, `r_id`, `type_uri` and `target_ref` equal the `Id`, `Type` and
/// `Target` attributes of the bound node. Deleting the entry removes the node
/// and resets every field to an empty value; the deleted state is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Resolved relationship type
    reltype: RelationshipType,

    /// Type URI exactly as found in (or written to) the part
    type_uri: String,

    /// Target reference, never resolved
    target_ref: String,

    /// Whether the node carries `TargetMode="External"`
    is_external: bool,

    /// Backing node; `None` once deleted
    node: Option<NodeId>,
}

impl Relationship {
    pub(crate) fn new(
        node: NodeId,
        r_id: String,
        type_uri: String,
        target_ref: String,
        is_external: bool,
    ) -> Self {
        Self {
            reltype: RelationshipType::from_uri(&type_uri),
            r_id,
            type_uri,
            target_ref,
            is_external,
            node: Some(node),
        }
    }

    /// Get the relationship ID. Empty once deleted.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type. `Unknown` once deleted.
    #[inline]
    pub fn reltype(&self) -> RelationshipType {
        self.reltype
    }

    /// Get the raw relationship type URI.
    ///
    /// Kept for types this crate does not recognize, so their URIs survive a
    /// load/save cycle.
    #[inline]
    pub fn type_uri(&self) -> &str {
        &self.type_uri
    }

    /// Get the target reference. Empty once deleted.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Check if this is an external relationship.
    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.node.is_none()
    }

    /// Get the handle of the backing node, if the entry is live.
    #[inline]
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Check that this live entry still agrees with its backing node.
    pub fn mirrors(&self, tree: &XmlTree) -> bool {
        let Some(node) = self.node else {
            return false;
        };
        let Ok(data) = tree.node(node) else {
            return false;
        };
        data.attribute(xml_name::ID) == Some(self.r_id.as_str())
            && data.attribute(xml_name::TYPE) == Some(self.type_uri.as_str())
            && data.attribute(xml_name::TARGET) == Some(self.target_ref.as_str())
            && (data.attribute(xml_name::TARGET_MODE) == Some(target_mode::EXTERNAL))
                == self.is_external
    }

    /// Remove the backing node from `tree` and reset this entry.
    ///
    /// Calling this on a deleted entry does nothing.
    pub fn delete(&mut self, tree: &mut XmlTree) {
        let Some(node) = self.node.take() else {
            return;
        };
        tree.delete(node);

        self.r_id.clear();
        self.reltype = RelationshipType::Unknown;
        self.type_uri.clear();
        self.target_ref.clear();
        self.is_external = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    fn bound_entry(tree: &mut XmlTree) -> Relationship {
        let node = tree.create_element(xml_name::RELATIONSHIP);
        tree.set_attribute(node, xml_name::ID, "rId1").unwrap();
        tree.set_attribute(node, xml_name::TYPE, rt::STYLES).unwrap();
        tree.set_attribute(node, xml_name::TARGET, "styles.xml").unwrap();
        tree.append(tree.root(), node).unwrap();
        Relationship::new(
            node,
            "rId1".to_string(),
            rt::STYLES.to_string(),
            "styles.xml".to_string(),
            false,
        )
    }

    #[test]
    fn test_relationship_creation() {
        let mut tree = XmlTree::new(xml_name::RELATIONSHIPS);
        let rel = bound_entry(&mut tree);

        assert_eq!(rel.r_id(), "rId1");
        assert_eq!(rel.reltype(), RelationshipType::Styles);
        assert_eq!(rel.target_ref(), "styles.xml");
        assert!(!rel.is_external());
        assert!(!rel.is_deleted());
        assert!(rel.mirrors(&tree));
    }

    #[test]
    fn test_unknown_type_keeps_uri() {
        let mut tree = XmlTree::new(xml_name::RELATIONSHIPS);
        let node = tree.create_element(xml_name::RELATIONSHIP);
        let rel = Relationship::new(
            node,
            "rId7".to_string(),
            "urn:vendor:thing".to_string(),
            "thing.xml".to_string(),
            false,
        );
        assert_eq!(rel.reltype(), RelationshipType::Unknown);
        assert_eq!(rel.type_uri(), "urn:vendor:thing");
    }

    #[test]
    fn test_delete_resets_entry() {
        let mut tree = XmlTree::new(xml_name::RELATIONSHIPS);
        let mut rel = bound_entry(&mut tree);
        let node = rel.node().unwrap();

        rel.delete(&mut tree);

        assert!(rel.is_deleted());
        assert_eq!(rel.r_id(), "");
        assert_eq!(rel.reltype(), RelationshipType::Unknown);
        assert_eq!(rel.type_uri(), "");
        assert_eq!(rel.target_ref(), "");
        assert_eq!(rel.node(), None);
        assert!(!tree.contains(node));
        assert!(!rel.mirrors(&tree));
    }

    #[test]
    fn test_delete_twice_is_noop() {
        let mut tree = XmlTree::new(xml_name::RELATIONSHIPS);
        let mut rel = bound_entry(&mut tree);

        // A sibling created after the first delete may reuse the freed slot.
        rel.delete(&mut tree);
        let sibling = tree.create_element(xml_name::RELATIONSHIP);
        tree.append(tree.root(), sibling).unwrap();

        rel.delete(&mut tree);
        assert!(tree.contains(sibling));
        assert_eq!(tree.children(tree.root()).count(), 1);
    }
}
