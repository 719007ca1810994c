use crate::domain::models::{ReportDocument, UnitSection};
use crate::services::catalog::format_cents;
use anyhow::Context;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Writes each building document as a tabular CSV file named
/// `Building_<id>_<ts>.csv` under `out_dir`, creating the directory as
/// needed. An existing file for the same building (same timestamp within a
/// run) gets the new unit sections appended rather than overwritten. Writes
/// are sequential, so there is a single writer per building document.
///
/// Returns the ordered hand-off list of written paths for downstream
/// packaging.
pub fn write_documents(
    documents: &IndexMap<String, ReportDocument>,
    out_dir: &Path,
    timestamp: u64,
) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;
    let mut written = Vec::new();
    for doc in documents.values() {
        let path = out_dir.join(format!("Building_{}_{}.csv", doc.building, timestamp));
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open report file {}", path.display()))?;
        let mut writer = csv::Writer::from_writer(file);
        for section in &doc.sections {
            write_section(&mut writer, section)?;
        }
        writer.flush().context("flush report file")?;
        written.push(path);
    }
    Ok(written)
}

fn write_section<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    section: &UnitSection,
) -> anyhow::Result<()> {
    writer.write_record([
        format!("Unit {}", section.unit),
        String::new(),
        String::new(),
        String::new(),
    ])?;
    writer.write_record(["Product", "Quantity", "List Price", "Total"])?;
    for segment in &section.segments {
        writer.write_record([segment.label.as_str(), "", "", ""])?;
        for line in &segment.lines {
            writer.write_record([
                line.product.clone(),
                format_quantity(line.quantity),
                format_cents(line.unit_price_cents),
                format_cents(line.total_cents),
            ])?;
        }
        writer.write_record(["", "", "", ""])?;
    }
    let total = format_cents(section.list_price_cents);
    writer.write_record(["", "", "List Price>>>", total.as_str()])?;
    writer.write_record(["", "", "Discounted Price>>>", ""])?;
    writer.write_record(["", "", "Asking Price>>>", total.as_str()])?;
    Ok(())
}

fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

/// Seconds since the epoch, used to stamp report file names.
pub fn timestamp_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Best-effort append-only run log; failures are swallowed.
pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/unitquote/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": timestamp_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}
