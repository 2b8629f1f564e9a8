#![deny(warnings)]

//! Headless event profit simulator: loads a scenario, runs the model and
//! prints break-even points and summary figures.

mod config;
mod export;

use anyhow::Result;
use config::{parse_args, Scenario, USAGE};
use event_core::{validate_parameters, validate_range, SimulationSummary};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn money(v: Option<Decimal>) -> String {
    v.map(|d| format!("${:.2}", d))
        .unwrap_or_else(|| "n/a".to_string())
}

fn percent(v: Option<Decimal>) -> String {
    v.map(|d| format!("{:.2}%", d))
        .unwrap_or_else(|| "n/a".to_string())
}

fn report(s: &SimulationSummary) -> String {
    let be = &s.break_even;
    let mark = |reached: bool| if reached { "" } else { " (not reached)" };
    format!(
        "Break-even | small venue: {} people{} | large venue: {} people{}\n\
         Profit | {} people: {} ({}) | {} people: {} ({})\n\
         Mean profit | {}",
        be.small_band,
        mark(be.small_band_reached),
        be.large_band,
        mark(be.large_band_reached),
        s.small_venue_attendance,
        money(s.profit_small_venue),
        percent(s.margin_small_venue),
        s.large_venue_attendance,
        money(s.profit_large_venue),
        percent(s.margin_large_venue),
        money(s.mean_profit),
    )
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }
    if args.version {
        println!(
            "event-sim {} ({} {})",
            env!("CARGO_PKG_VERSION"),
            env!("GIT_SHA"),
            env!("BUILD_DATE")
        );
        return Ok(());
    }
    info!(scenario = ?args.scenario, export = ?args.export, "starting simulator");

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    }
    .with_range_overrides(args.min, args.max);
    let params = scenario.parameters();
    validate_parameters(&params)?;
    validate_range(&scenario.range)?;

    let sim = event_econ::simulate(&params, &scenario.range);
    let summary = event_econ::summarize(&sim);
    info!(
        points = sim.attendance.len(),
        start = scenario.range.start,
        end = scenario.range.end,
        "simulation finished"
    );

    println!("{}", report(&summary));

    if let Some(path) = &args.export {
        export::write_export(path, &params, &sim, &summary)?;
        info!(path = %path.display(), "curves exported");
    }
    Ok(())
}
