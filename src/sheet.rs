//! Vocabulary of the flattened export format: column contract, the
//! building/unit sentinel pattern, and wall-designation detection.

use crate::domain::models::UnitKey;
use regex::Regex;
use std::sync::LazyLock;

pub const COL_GROUP: &str = "Group";
pub const COL_ASSEMBLY: &str = "Assembly name";
pub const COL_ITEM: &str = "Item name";
pub const COL_QTY: &str = "QTY";

/// Fixed contract strings; input missing any of these is fatal.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_GROUP, COL_ASSEMBLY, COL_ITEM, COL_QTY];

#[derive(thiserror::Error, Debug)]
pub enum SheetError {
    #[error("input is missing required columns: {0}")]
    MissingColumns(String),
    #[error("catalog has duplicate product name: {0}")]
    DuplicateProduct(String),
    #[error("catalog is empty")]
    EmptyCatalog,
}

static SENTINEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Building|Bld)\s+(\d+)\s+Unit\s+(\w+)").expect("sentinel pattern compiles")
});

/// Cheap pre-check: does this group value claim to be a building/unit marker?
/// A match here that fails [`parse_building_unit`] is a malformed sentinel.
pub fn looks_like_sentinel(group: &str) -> bool {
    group.contains("Bld") || group.contains("Building")
}

/// Extracts (building id, unit id) from a sentinel group value, e.g.
/// "Building 1 Unit A" or "Bld 12 Unit B3".
pub fn parse_building_unit(group: &str) -> Option<UnitKey> {
    SENTINEL.captures(group).map(|c| UnitKey {
        building: c[2].to_string(),
        unit: c[3].to_string(),
    })
}

/// An item name textually denotes a wall when it contains "Wall" but is not
/// a wall clip product. Ignorable wall-length buckets are excluded by the
/// caller via the catalog denylist.
pub fn denotes_wall(item_name: &str) -> bool {
    item_name.contains("Wall") && !item_name.contains("Clip")
}

/// Composite room-segment label. Components may be empty when no code or
/// wall designation has been seen yet.
pub fn segment_label(group: &str, code: Option<&str>, wall_designation: &str) -> String {
    format!("{} - {} - {}", group, code.unwrap_or(""), wall_designation)
}
