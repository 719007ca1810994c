use crate::domain::models::{Reconstruction, Row, UnitBundle, UnitKey, Warning};
use crate::services::catalog::Catalog;
use crate::sheet;
use indexmap::IndexMap;

/// Per-pass scan state threaded through the forward scan.
///
/// `code` deliberately persists across unit boundaries; `wall` and the
/// segment accumulators are unit-scoped.
struct Scan {
    active: Option<UnitKey>,
    code: Option<String>,
    wall: String,
    labels: Vec<String>,
    maps: Vec<IndexMap<String, f64>>,
    current: IndexMap<String, f64>,
}

/// Rebuilds the building -> unit -> room-segment hierarchy from an ordered
/// flat row stream.
///
/// Single forward pass with one row of lookahead: a segment closes on the row
/// where the next row's `group` differs, or on the last row. A building/unit
/// sentinel closes the previous unit and starts a new one from empty segment
/// state. The trailing unit is flushed exactly once at end of input, so every
/// returned bundle has label and quantity lists of equal length, and every
/// quantity map carries exactly the catalog product set.
pub fn reconstruct(rows: &[Row], catalog: &Catalog) -> Reconstruction {
    let mut out = Reconstruction::default();
    let mut scan = Scan {
        active: None,
        code: None,
        wall: String::new(),
        labels: Vec::new(),
        maps: Vec::new(),
        current: catalog.empty_quantities(),
    };

    let mut iter = rows.iter().peekable();
    while let Some(row) = iter.next() {
        if sheet::looks_like_sentinel(&row.group) {
            match sheet::parse_building_unit(&row.group) {
                Some(key) => {
                    close_unit(&mut scan, &mut out, catalog);
                    scan.active = Some(key);
                }
                // Keep prior context active; the row carries no data.
                None => out.warnings.push(Warning::malformed_sentinel(&row.group)),
            }
            continue;
        }

        if let Some(code) = &row.assembly_name {
            scan.code = Some(code.clone());
        }
        if sheet::denotes_wall(&row.item_name) && !catalog.is_ignored(&row.item_name) {
            scan.wall = row.item_name.clone();
        }
        if let Some(qty) = scan.current.get_mut(&row.item_name) {
            *qty += row.quantity;
        }

        let closes = match iter.peek() {
            Some(next) => next.group != row.group,
            None => true,
        };
        if closes {
            scan.labels
                .push(sheet::segment_label(&row.group, scan.code.as_deref(), &scan.wall));
            scan.maps
                .push(std::mem::replace(&mut scan.current, catalog.empty_quantities()));
        }
    }

    close_unit(&mut scan, &mut out, catalog);
    out
}

/// Records the active unit's accumulated segments, then resets unit-scoped
/// state. A unit that saw no segments is dropped; a key seen before is
/// skipped with a warning, never overwritten.
fn close_unit(scan: &mut Scan, out: &mut Reconstruction, catalog: &Catalog) {
    let labels = std::mem::take(&mut scan.labels);
    let maps = std::mem::take(&mut scan.maps);
    scan.wall.clear();
    scan.current = catalog.empty_quantities();

    let Some(key) = scan.active.take() else {
        return;
    };
    if maps.is_empty() {
        return;
    }
    if out.units.contains_key(&key) {
        out.warnings.push(Warning::duplicate_unit(&key));
        return;
    }
    out.units.insert(
        key,
        UnitBundle {
            labels,
            quantities: maps,
        },
    );
}
