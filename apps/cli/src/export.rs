//! Curve export for plotting outside the simulator.

use anyhow::{Context, Result};
use event_core::{CurvePoint, Simulation, SimulationParameters, SimulationSummary};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct Report<'a> {
    parameters: &'a SimulationParameters,
    summary: &'a SimulationSummary,
    points: Vec<CurvePoint>,
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

/// Write the curves to `path`: CSV rows for a `.csv` extension, otherwise a
/// JSON report with the parameters and summary.
pub fn write_export(
    path: &Path,
    params: &SimulationParameters,
    sim: &Simulation,
    summary: &SimulationSummary,
) -> Result<()> {
    if is_csv(path) {
        let mut w = csv::Writer::from_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        for point in sim.points() {
            w.serialize(point)?;
        }
        w.flush()?;
    } else {
        let report = Report {
            parameters: params,
            summary,
            points: sim.points().collect(),
        };
        let text = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, text)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}
