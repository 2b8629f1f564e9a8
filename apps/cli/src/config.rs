//! Command-line arguments and YAML scenario files.

use anyhow::{bail, Context, Result};
use event_core::{AttendanceRange, SimulationParameters};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Parsed command-line arguments.
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub scenario: Option<PathBuf>,
    pub export: Option<PathBuf>,
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub version: bool,
    pub help: bool,
}

pub const USAGE: &str = "\
usage: event-sim [--scenario <file.yaml>] [--min <n>] [--max <n>] [--export <file.json|file.csv>]
       event-sim --version";

fn value<I: Iterator<Item = String>>(it: &mut I, flag: &str) -> Result<String> {
    it.next()
        .with_context(|| format!("missing value for {flag}"))
}

fn number<I: Iterator<Item = String>>(it: &mut I, flag: &str) -> Result<u32> {
    let raw = value(it, flag)?;
    raw.parse()
        .with_context(|| format!("invalid value for {flag}: {raw}"))
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut out = Args::default();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--scenario" => out.scenario = Some(value(&mut it, "--scenario")?.into()),
            "--export" => out.export = Some(value(&mut it, "--export")?.into()),
            "--min" => out.min = Some(number(&mut it, "--min")?),
            "--max" => out.max = Some(number(&mut it, "--max")?),
            "--version" | "-V" => out.version = true,
            "--help" | "-h" => out.help = true,
            other => bail!("unknown argument: {other}\n{USAGE}"),
        }
    }
    Ok(out)
}

/// Scenario file contents. Every key is optional; missing keys take the
/// defaults of the simulator's input form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub venue_cost_small: Decimal,
    pub venue_cost_large: Decimal,
    pub lineup_cost: Decimal,
    pub staff_unit_cost: Decimal,
    pub promotion_cost: Decimal,
    pub open_bar_hours: f64,
    pub open_bar_price: Decimal,
    pub initial_price: Decimal,
    pub price_increment: Decimal,
    pub tier_count: u32,
    /// Bar margin in percent (250 = 2.5x the spend).
    pub bar_margin_pct: Decimal,
    pub avg_bar_spend: Decimal,
    pub range: AttendanceRange,
}

impl Default for Scenario {
    fn default() -> Self {
        let p = SimulationParameters::default();
        Self {
            venue_cost_small: p.venue_cost_small,
            venue_cost_large: p.venue_cost_large,
            lineup_cost: p.lineup_cost,
            staff_unit_cost: p.staff_unit_cost,
            promotion_cost: p.promotion_cost,
            open_bar_hours: p.open_bar_hours,
            open_bar_price: p.open_bar_price,
            initial_price: p.initial_price,
            price_increment: p.price_increment,
            tier_count: p.tier_count,
            bar_margin_pct: p.bar_margin * Decimal::ONE_HUNDRED,
            avg_bar_spend: p.avg_bar_spend,
            range: AttendanceRange::default(),
        }
    }
}

impl Scenario {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("invalid scenario")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("parsing scenario {}", path.display()))
    }

    /// Apply `--min`/`--max` overrides to the attendance range.
    pub fn with_range_overrides(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        if let Some(start) = min {
            self.range.start = start;
        }
        if let Some(end) = max {
            self.range.end = end;
        }
        self
    }

    pub fn parameters(&self) -> SimulationParameters {
        SimulationParameters {
            venue_cost_small: self.venue_cost_small,
            venue_cost_large: self.venue_cost_large,
            lineup_cost: self.lineup_cost,
            staff_unit_cost: self.staff_unit_cost,
            promotion_cost: self.promotion_cost,
            open_bar_hours: self.open_bar_hours,
            open_bar_price: self.open_bar_price,
            initial_price: self.initial_price,
            price_increment: self.price_increment,
            tier_count: self.tier_count,
            bar_margin: self.bar_margin_pct / Decimal::ONE_HUNDRED,
            avg_bar_spend: self.avg_bar_spend,
        }
    }
}
