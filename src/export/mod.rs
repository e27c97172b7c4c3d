// CSV export of the full catalog plus recorded responses

use crate::models::ProcessCatalog;
use crate::state::ResponseStore;
use crate::view::classify;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Quote a field for CSV, doubling embedded quotes
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render the export table.
///
/// One row per process in catalog order, regardless of the current stage
/// filter. The priority column reflects the current stage; missing
/// scores are empty cells; all of a process's notes collapse into one
/// quoted cell joined with "; ".
pub fn render_csv(
    catalog: &ProcessCatalog,
    current_stage: &str,
    responses: &ResponseStore,
) -> String {
    let mut header = vec!["Process ID".to_string(), "Process Title".to_string(), "Stage Priority".to_string()];
    header.extend(catalog.dimensions.iter().map(|d| d.label.clone()));
    header.push("Notes".to_string());

    let mut csv = header.join(",");
    csv.push('\n');

    for process in &catalog.processes {
        let response = responses.get(&process.id);
        let mut row = vec![
            process.id.clone(),
            quote(&process.title),
            classify(process, current_stage).as_str().to_string(),
        ];
        for dimension in &catalog.dimensions {
            row.push(match response.scores.get(&dimension.id) {
                Some(score) => score.to_string(),
                None => String::new(),
            });
        }
        // The notes cell covers the current catalog's dimensions only,
        // in column order. Notes persisted under dimension ids the
        // catalog no longer carries stay in the snapshot but are not
        // exported; cleared (empty) notes add no separator.
        let notes: Vec<&str> = catalog
            .dimensions
            .iter()
            .filter_map(|d| response.notes.get(&d.id))
            .map(String::as_str)
            .filter(|n| !n.is_empty())
            .collect();
        row.push(quote(&notes.join("; ")));
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}

/// `ops-checklist-<stage>-<ISO date>.csv`
pub fn export_file_name(current_stage: &str, date: NaiveDate) -> String {
    format!("ops-checklist-{}-{}.csv", current_stage, date.format("%Y-%m-%d"))
}

/// Write the export into `dir`, named for the current stage and today's
/// local date. Returns the written path.
pub fn write_export(
    dir: &Path,
    catalog: &ProcessCatalog,
    current_stage: &str,
    responses: &ResponseStore,
) -> Result<PathBuf> {
    let csv = render_csv(catalog, current_stage, responses);
    let path = dir.join(export_file_name(
        current_stage,
        chrono::Local::now().date_naive(),
    ));
    std::fs::write(&path, csv)
        .with_context(|| format!("Failed to write export: {}", path.display()))?;
    Ok(path)
}
