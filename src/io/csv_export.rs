use crate::error::Result;
use crate::model::Milestone;
use std::path::Path;

/// Export the milestone schedule to a semicolon-delimited CSV file.
///
/// Columns: Milestone ; Offset (months) ; Date
/// Dates are formatted as YYYY-MM-DD.
/// Returns the number of milestones written.
pub fn export_milestones(milestones: &[Milestone], path: &Path) -> Result<usize> {
    let wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path)?;
    write_milestones(milestones, wtr)
}

fn write_milestones<W: std::io::Write>(milestones: &[Milestone], mut wtr: csv::Writer<W>) -> Result<usize> {
    wtr.write_record(["Milestone", "Offset (months)", "Date"])?;
    for milestone in milestones {
        let offset = milestone.offset.to_string();
        let date = milestone.date.format("%Y-%m-%d").to_string();
        wtr.write_record([milestone.name.as_str(), offset.as_str(), date.as_str()])?;
    }
    wtr.flush()?;
    tracing::info!("Exported {} milestones", milestones.len());
    Ok(milestones.len())
}
