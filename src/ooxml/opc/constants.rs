/// Constant values used by relationship parts.
///
/// XML namespaces, element and attribute names, target modes, and the
/// relationship type URIs known to this crate.

/// XML namespace URIs
pub mod namespace {
    /// OPC relationships namespace, the default namespace of every `.rels` part
    pub const OPC_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships";
}

/// Element and attribute names of a relationships part
pub mod xml_name {
    pub const RELATIONSHIPS: &str = "Relationships";
    pub const RELATIONSHIP: &str = "Relationship";
    pub const ID: &str = "Id";
    pub const TYPE: &str = "Type";
    pub const TARGET: &str = "Target";
    pub const TARGET_MODE: &str = "TargetMode";
}

/// Open XML relationship target modes
pub mod target_mode {
    /// Internal relationship target mode (default)
    pub const INTERNAL: &str = "Internal";

    /// External relationship target mode (e.g., paths to linked workbooks)
    pub const EXTERNAL: &str = "External";
}

/// Prefix of every allocated relationship id
pub const R_ID_PREFIX: &str = "rId";

/// Relationship type URIs
pub mod relationship_type {
    // Package properties
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const CUSTOM_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/custom-properties";

    // Office document
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

    // Workbook parts
    pub const WORKSHEET: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
    pub const CHARTSHEET: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/chartsheet";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const SHARED_STRINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings";
    pub const CALC_CHAIN: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/calcChain";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const VBA_PROJECT: &str = "http://schemas.microsoft.com/office/2006/relationships/vbaProject";

    // External links
    pub const EXTERNAL_LINK: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/externalLink";
    pub const EXTERNAL_LINK_PATH: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/externalLinkPath";

    // Chart and drawing
    pub const CHART: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/chart";
    pub const CHART_STYLE: &str = "http://schemas.microsoft.com/office/2011/relationships/chartStyle";
    pub const CHART_COLOR_STYLE: &str =
        "http://schemas.microsoft.com/office/2011/relationships/chartColorStyle";
    pub const DRAWING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/drawing";
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    pub const VML_DRAWING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/vmlDrawing";

    // Worksheet extras
    pub const PRINTER_SETTINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/printerSettings";
    pub const CTRL_PROP: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/ctrlProp";
}
