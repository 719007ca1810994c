use crate::cli::{Cli, Commands};
use crate::domain::models::{InspectSegment, InspectUnit, JsonOut, ProcessReport};
use crate::services::catalog::Catalog;
use crate::services::output::{print_one, print_warnings};
use crate::services::{assemble, ingest, reconstruct, storage};
use std::path::Path;

pub fn handle_runtime_commands(cli: &Cli, catalog: &Catalog) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Process { input, out_dir } => {
            let rows = ingest::read_rows(Path::new(input))?;
            let recon = reconstruct::reconstruct(&rows, catalog);
            let assembly = assemble::assemble(&recon.units, catalog);
            let files = storage::write_documents(
                &assembly.documents,
                Path::new(out_dir),
                storage::timestamp_now(),
            )?;

            let mut warnings = recon.warnings;
            warnings.extend(assembly.warnings);
            storage::audit(
                "process",
                serde_json::json!({
                    "input": input,
                    "units": recon.units.len(),
                    "files": files.len(),
                    "warnings": warnings.len()
                }),
            );
            print_warnings(cli.json, &warnings);

            let report = ProcessReport {
                input: input.clone(),
                units: recon.units.len(),
                documents: assembly.documents.len(),
                files: files.iter().map(|p| p.display().to_string()).collect(),
                warnings,
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                println!(
                    "processed {} units into {} building documents",
                    report.units, report.documents
                );
                for f in &report.files {
                    println!("{}", f);
                }
            }
        }
        Commands::Inspect { input } => {
            let rows = ingest::read_rows(Path::new(input))?;
            let recon = reconstruct::reconstruct(&rows, catalog);
            print_warnings(cli.json, &recon.warnings);

            let units: Vec<InspectUnit> = recon
                .units
                .iter()
                .map(|(key, bundle)| InspectUnit {
                    building: key.building.clone(),
                    unit: key.unit.clone(),
                    segments: bundle
                        .labels
                        .iter()
                        .zip(&bundle.quantities)
                        .map(|(label, quantities)| InspectSegment {
                            label: label.clone(),
                            quantities: quantities
                                .iter()
                                .filter(|(_, q)| **q != 0.0)
                                .map(|(p, q)| (p.clone(), *q))
                                .collect(),
                        })
                        .collect(),
                })
                .collect();

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: units
                    })?
                );
            } else {
                for u in &units {
                    println!("Building {} Unit {}", u.building, u.unit);
                    for s in &u.segments {
                        println!("  {}", s.label);
                        for (product, qty) in &s.quantities {
                            println!("    {}\t{}", product, qty);
                        }
                    }
                }
            }
        }
        Commands::Validate { input } => {
            ingest::read_rows(Path::new(input))?;
            print_one(cli.json, "valid", |_| "input valid".to_string())?;
        }
        // handled by the catalog command tree
        Commands::Catalog { .. } => {}
    }
    Ok(())
}
