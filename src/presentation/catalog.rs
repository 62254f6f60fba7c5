use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Ingredient as returned by the ingredient search
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Ingredient {
    /// Ingredient identifier
    pub id: u64,
    /// Ingredient name
    pub name: String,
    /// Unit the amount is expressed in (g, ml, pcs...)
    pub measurement_unit: String,
}

/// Recipe tag
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Tag {
    /// Tag identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Hex colour code, e.g. `#E26C2D`
    #[serde(default)]
    pub color: Option<String>,
    /// URL slug
    pub slug: String,
}
