use indexmap::IndexMap;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One record of the flattened input table, after forward-fill of `Group`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub group: String,
    pub assembly_name: Option<String>,
    pub item_name: String,
    pub quantity: f64,
}

/// Identifiers parsed from a building/unit sentinel. Opaque strings; the
/// building id happens to be numeric in practice but is never used as a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UnitKey {
    pub building: String,
    pub unit: String,
}

/// Reconstructed data for one (building, unit): room-segment labels and
/// index-aligned aggregated quantity maps, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnitBundle {
    pub labels: Vec<String>,
    pub quantities: Vec<IndexMap<String, f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnKind {
    MalformedSentinel,
    DuplicateUnit,
    IndexMisalignment,
}

/// A locally-recovered anomaly. Never fatal; carried alongside results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    pub kind: WarnKind,
    pub message: String,
}

impl Warning {
    pub fn malformed_sentinel(group: &str) -> Self {
        Self {
            kind: WarnKind::MalformedSentinel,
            message: format!(
                "group '{}' looks like a building/unit marker but did not parse; row skipped",
                group
            ),
        }
    }

    pub fn duplicate_unit(key: &UnitKey) -> Self {
        Self {
            kind: WarnKind::DuplicateUnit,
            message: format!(
                "duplicate data for Building {}, Unit {}; keeping the first occurrence",
                key.building, key.unit
            ),
        }
    }

    pub fn index_misalignment(key: &UnitKey, index: usize) -> Self {
        Self {
            kind: WarnKind::IndexMisalignment,
            message: format!(
                "no segment label for Building {}, Unit {} at room index {}; dropping unaligned tail",
                key.building, key.unit, index
            ),
        }
    }
}

/// Output of the hierarchy reconstruction pass.
#[derive(Debug, Default)]
pub struct Reconstruction {
    pub units: IndexMap<UnitKey, UnitBundle>,
    pub warnings: Vec<Warning>,
}

/// One priced product line within a report segment. Amounts are cents.
#[derive(Debug, Clone, Serialize)]
pub struct ProductLine {
    pub product: String,
    pub quantity: f64,
    pub unit_price_cents: i64,
    pub total_cents: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentBlock {
    pub label: String,
    pub lines: Vec<ProductLine>,
}

/// One report section: a single unit's priced rooms plus its summary total.
#[derive(Debug, Clone, Serialize)]
pub struct UnitSection {
    pub unit: String,
    pub segments: Vec<SegmentBlock>,
    pub list_price_cents: i64,
}

/// One per-building report document, one section per unit.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub building: String,
    pub sections: Vec<UnitSection>,
}

/// Output of report assembly: documents keyed by building id, in first-seen order.
#[derive(Debug, Default)]
pub struct Assembly {
    pub documents: IndexMap<String, ReportDocument>,
    pub warnings: Vec<Warning>,
}

#[derive(Serialize)]
pub struct ProcessReport {
    pub input: String,
    pub units: usize,
    pub documents: usize,
    pub files: Vec<String>,
    pub warnings: Vec<Warning>,
}

#[derive(Serialize)]
pub struct InspectSegment {
    pub label: String,
    pub quantities: IndexMap<String, f64>,
}

#[derive(Serialize)]
pub struct InspectUnit {
    pub building: String,
    pub unit: String,
    pub segments: Vec<InspectSegment>,
}

#[derive(Serialize)]
pub struct CatalogEntry {
    pub product: String,
    pub price: String,
}
