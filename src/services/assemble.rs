use crate::domain::models::{
    Assembly, ProductLine, ReportDocument, SegmentBlock, UnitBundle, UnitKey, UnitSection, Warning,
};
use crate::services::catalog::Catalog;
use indexmap::IndexMap;

/// Turns reconstructed unit bundles into per-building report documents.
pub fn assemble(units: &IndexMap<UnitKey, UnitBundle>, catalog: &Catalog) -> Assembly {
    let mut out = Assembly::default();
    assemble_into(&mut out, units, catalog);
    out
}

/// Appends unit sections into an existing set of building documents.
///
/// Bundles are read-only here. One document per building id, one section per
/// unit in bundle order; a unit id already present in a building's document
/// (possible when bundles from a later reconstruction call are appended) is
/// skipped with a warning, never overwritten or merged. A bundle with more
/// quantity maps than labels loses only the unaligned tail.
pub fn assemble_into(
    out: &mut Assembly,
    units: &IndexMap<UnitKey, UnitBundle>,
    catalog: &Catalog,
) {
    for (key, bundle) in units {
        let doc = out
            .documents
            .entry(key.building.clone())
            .or_insert_with(|| ReportDocument {
                building: key.building.clone(),
                sections: Vec::new(),
            });
        if doc.sections.iter().any(|s| s.unit == key.unit) {
            out.warnings.push(Warning::duplicate_unit(key));
            continue;
        }
        doc.sections
            .push(price_section(key, bundle, catalog, &mut out.warnings));
    }
}

fn price_section(
    key: &UnitKey,
    bundle: &UnitBundle,
    catalog: &Catalog,
    warnings: &mut Vec<Warning>,
) -> UnitSection {
    let mut section = UnitSection {
        unit: key.unit.clone(),
        segments: Vec::new(),
        list_price_cents: 0,
    };
    for (index, quantities) in bundle.quantities.iter().enumerate() {
        let Some(label) = bundle.labels.get(index) else {
            warnings.push(Warning::index_misalignment(key, index));
            break;
        };
        let mut block = SegmentBlock {
            label: label.clone(),
            lines: Vec::new(),
        };
        for product in catalog.products() {
            let quantity = quantities.get(product).copied().unwrap_or(0.0);
            let unit_price_cents = catalog.price_cents(product).unwrap_or(0);
            let total_cents = extended_total(quantity, unit_price_cents);
            section.list_price_cents += total_cents;
            block.lines.push(ProductLine {
                product: product.to_string(),
                quantity,
                unit_price_cents,
                total_cents,
            });
        }
        section.segments.push(block);
    }
    section
}

/// Extended total in cents, rounded to currency precision.
pub fn extended_total(quantity: f64, unit_price_cents: i64) -> i64 {
    (quantity * unit_price_cents as f64).round() as i64
}
