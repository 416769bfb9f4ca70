use serde::{Deserialize, Serialize};

/// External representation of a layout problem: a container and an ordered list of items
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub container: ExtContainer,
    /// Items to lay out, in order
    pub items: Vec<ExtItem>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtContainer {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub gap: f64,
}

/// External representation of an item
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtItem {
    /// Unique identifier of the item within the instance
    pub key: String,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub flexible_aspect_ratio: bool,
    /// Legacy field, accepted but ignored by the layout engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<u8>,
    /// Legacy field, accepted but ignored by the layout engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    /// Legacy field, accepted but ignored by the layout engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    /// Legacy field, accepted but ignored by the layout engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximize_width: Option<bool>,
}

/// External representation of a layout
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayout {
    pub width: f64,
    pub height: f64,
    pub rows: Vec<ExtRow>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRow {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub cells: Vec<ExtCell>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCell {
    /// Key of the item placed in this cell
    pub key: String,
    /// One-based row number
    pub row: usize,
    /// One-based position within the row
    pub order: usize,
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

fn is_false(b: &bool) -> bool {
    !*b
}
