//! Relationship types and their canonical URIs.
//!
//! The set of relationship types understood by this crate is closed. Every
//! known type maps to exactly one URI through a single static table, which is
//! queried in both directions:
//!
//! - [`RelationshipType::to_uri`] is strict and fails for [`RelationshipType::Unknown`],
//!   since writing an unmapped type is a caller bug.
//! - [`RelationshipType::from_uri`] is permissive and yields `Unknown` for URIs
//!   it does not recognize, so parts written by newer producers still load.

use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::error::{OpcError, Result};
use std::fmt;

/// The semantics of a relationship between two package parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationshipType {
    Workbook,
    Worksheet,
    Styles,
    SharedStrings,
    Theme,
    Drawing,
    Image,
    Chart,
    ChartStyle,
    ChartColorStyle,
    ExternalLink,
    ExternalLinkPath,
    PrinterSettings,
    VmlDrawing,
    ControlProperties,
    CalculationChain,
    CoreProperties,
    ExtendedProperties,
    CustomProperties,
    VbaProject,
    ChartSheet,
    /// A type URI this crate does not know. Only produced while parsing.
    Unknown,
}

/// Known relationship types paired with their canonical URIs.
static URI_TABLE: [(RelationshipType, &str); 21] = [
    (RelationshipType::Workbook, rt::OFFICE_DOCUMENT),
    (RelationshipType::Worksheet, rt::WORKSHEET),
    (RelationshipType::Styles, rt::STYLES),
    (RelationshipType::SharedStrings, rt::SHARED_STRINGS),
    (RelationshipType::Theme, rt::THEME),
    (RelationshipType::Drawing, rt::DRAWING),
    (RelationshipType::Image, rt::IMAGE),
    (RelationshipType::Chart, rt::CHART),
    (RelationshipType::ChartStyle, rt::CHART_STYLE),
    (RelationshipType::ChartColorStyle, rt::CHART_COLOR_STYLE),
    (RelationshipType::ExternalLink, rt::EXTERNAL_LINK),
    (RelationshipType::ExternalLinkPath, rt::EXTERNAL_LINK_PATH),
    (RelationshipType::PrinterSettings, rt::PRINTER_SETTINGS),
    (RelationshipType::VmlDrawing, rt::VML_DRAWING),
    (RelationshipType::ControlProperties, rt::CTRL_PROP),
    (RelationshipType::CalculationChain, rt::CALC_CHAIN),
    (RelationshipType::CoreProperties, rt::CORE_PROPERTIES),
    (RelationshipType::ExtendedProperties, rt::EXTENDED_PROPERTIES),
    (RelationshipType::CustomProperties, rt::CUSTOM_PROPERTIES),
    (RelationshipType::VbaProject, rt::VBA_PROJECT),
    (RelationshipType::ChartSheet, rt::CHARTSHEET),
];

impl RelationshipType {
    /// Every known relationship type, in table order. Excludes `Unknown`.
    pub const ALL: [RelationshipType; 21] = [
        RelationshipType::Workbook,
        RelationshipType::Worksheet,
        RelationshipType::Styles,
        RelationshipType::SharedStrings,
        RelationshipType::Theme,
        RelationshipType::Drawing,
        RelationshipType::Image,
        RelationshipType::Chart,
        RelationshipType::ChartStyle,
        RelationshipType::ChartColorStyle,
        RelationshipType::ExternalLink,
        RelationshipType::ExternalLinkPath,
        RelationshipType::PrinterSettings,
        RelationshipType::VmlDrawing,
        RelationshipType::ControlProperties,
        RelationshipType::CalculationChain,
        RelationshipType::CoreProperties,
        RelationshipType::ExtendedProperties,
        RelationshipType::CustomProperties,
        RelationshipType::VbaProject,
        RelationshipType::ChartSheet,
    ];

    /// Get the canonical URI for this relationship type.
    ///
    /// # Errors
    /// Returns [`OpcError::UnrecognizedType`] for types outside the known set.
    pub fn to_uri(self) -> Result<&'static str> {
        URI_TABLE
            .iter()
            .find(|(reltype, _)| *reltype == self)
            .map(|(_, uri)| *uri)
            .ok_or(OpcError::UnrecognizedType(self))
    }

    /// Resolve a relationship type URI.
    ///
    /// Never fails: URIs not in the table resolve to [`RelationshipType::Unknown`].
    pub fn from_uri(uri: &str) -> Self {
        URI_TABLE
            .iter()
            .find(|(_, known)| *known == uri)
            .map_or(RelationshipType::Unknown, |(reltype, _)| *reltype)
    }

    /// Check whether this type has a canonical URI.
    #[inline]
    pub fn is_known(self) -> bool {
        self != RelationshipType::Unknown
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_types_resolve_both_ways() {
        for reltype in RelationshipType::ALL {
            let uri = reltype.to_uri().unwrap();
            assert_eq!(RelationshipType::from_uri(uri), reltype, "{uri}");
        }
    }

    #[test]
    fn test_table_is_a_bijection() {
        let types: HashSet<_> = URI_TABLE.iter().map(|(t, _)| *t).collect();
        let uris: HashSet<_> = URI_TABLE.iter().map(|(_, u)| *u).collect();
        assert_eq!(types.len(), URI_TABLE.len());
        assert_eq!(uris.len(), URI_TABLE.len());
        assert!(!types.contains(&RelationshipType::Unknown));
    }

    #[test]
    fn test_unknown_is_rejected_on_write() {
        match RelationshipType::Unknown.to_uri() {
            Err(OpcError::UnrecognizedType(RelationshipType::Unknown)) => {},
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_uri_is_unknown() {
        assert_eq!(
            RelationshipType::from_uri("http://example.com/relationships/future"),
            RelationshipType::Unknown
        );
        assert_eq!(RelationshipType::from_uri(""), RelationshipType::Unknown);
    }

    #[test]
    fn test_selected_uris() {
        assert_eq!(
            RelationshipType::Workbook.to_uri().unwrap(),
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument"
        );
        assert_eq!(
            RelationshipType::ControlProperties.to_uri().unwrap(),
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/ctrlProp"
        );
        assert_eq!(
            RelationshipType::VbaProject.to_uri().unwrap(),
            "http://schemas.microsoft.com/office/2006/relationships/vbaProject"
        );
        assert_eq!(
            RelationshipType::CoreProperties.to_uri().unwrap(),
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties"
        );
    }

    #[test]
    fn test_display_uses_variant_name() {
        assert_eq!(RelationshipType::SharedStrings.to_string(), "SharedStrings");
    }
}
