use crate::domain::models::Row;
use crate::sheet::{self, SheetError};
use anyhow::Context;
use std::path::Path;

/// Reads the flattened export and normalizes it into [`Row`] values:
/// blank `Group` cells are forward-filled from the nearest preceding
/// non-blank value, blank `Assembly name` becomes `None`, and a blank or
/// unparseable `QTY` counts as zero.
///
/// Missing required columns is the one fatal precondition failure and is
/// reported before any row is processed.
pub fn read_rows(path: &Path) -> anyhow::Result<Vec<Row>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("open input file {}", path.display()))?;
    read_rows_from(file)
}

pub fn read_rows_from(reader: impl std::io::Read) -> anyhow::Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers().context("read input header row")?.clone();

    let position = |name: &str| headers.iter().position(|h| h.trim() == name);
    let found: Vec<(&str, Option<usize>)> = sheet::REQUIRED_COLUMNS
        .iter()
        .map(|c| (*c, position(c)))
        .collect();
    let (gi, ai, ii, qi) = match found.as_slice() {
        [(_, Some(g)), (_, Some(a)), (_, Some(i)), (_, Some(q))] => (*g, *a, *i, *q),
        _ => {
            let missing: Vec<&str> = found
                .iter()
                .filter(|(_, p)| p.is_none())
                .map(|(name, _)| *name)
                .collect();
            return Err(SheetError::MissingColumns(missing.join(", ")).into());
        }
    };

    let mut rows = Vec::new();
    let mut last_group = String::new();
    for record in rdr.records() {
        let record = record.context("read input record")?;
        let cell = |i: usize| record.get(i).unwrap_or("").trim();

        let group = cell(gi);
        if !group.is_empty() {
            last_group = group.to_string();
        }
        let assembly = cell(ai);
        rows.push(Row {
            group: last_group.clone(),
            assembly_name: (!assembly.is_empty()).then(|| assembly.to_string()),
            item_name: cell(ii).to_string(),
            quantity: cell(qi).parse::<f64>().unwrap_or(0.0),
        });
    }
    Ok(rows)
}
