#![deny(warnings)]

//! Economic model of a single event: revenue, expense and profit as
//! functions of total attendance, plus break-even search.
//!
//! This crate provides:
//! - An arrival model driven by a fixed Beta(2.5, 4) time profile
//! - Ticket revenue over staged price tiers weighted by a Beta(2, 5) density
//! - Band-dependent venue and security costs and an arrival-based open bar
//! - Break-even points for the small (<= 300) and large (> 300) venue bands
//!
//! Every function is pure and total over non-negative inputs.

pub mod arrival;
pub mod breakeven;
pub mod distribution;
pub mod expense;
pub mod revenue;

pub use arrival::{arrivals, arrivals_by};
pub use breakeven::{break_even, profit, profit_curve};
pub use distribution::{arrival_fraction, tier_proportions};
pub use expense::{expenses, open_bar_cost};
pub use revenue::{bar_revenue, paid_attendees, revenue, ticket_revenue};

use event_core::{
    AttendanceRange, Simulation, SimulationParameters, SimulationSummary, DEFAULT_MAX_ATTENDANCE,
    SMALL_VENUE_CAPACITY,
};
use tracing::debug;

/// Run the model once over `range`.
pub fn simulate(params: &SimulationParameters, range: &AttendanceRange) -> Simulation {
    let attendance = range.values();
    let revenue = revenue(&attendance, params);
    let expense = expenses(&attendance, params);
    let profit = profit_curve(&revenue, &expense);
    let break_even = break_even(&profit, &attendance);
    debug!(
        points = attendance.len(),
        small_band = break_even.small_band,
        large_band = break_even.large_band,
        "simulation complete"
    );
    Simulation {
        attendance,
        revenue,
        expense,
        profit,
        break_even,
    }
}

/// Headline figures: break-even points, profit and margin at the small-venue
/// capacity and at the top of the range, and mean profit.
pub fn summarize(sim: &Simulation) -> SimulationSummary {
    let large = sim
        .attendance
        .last()
        .copied()
        .unwrap_or(DEFAULT_MAX_ATTENDANCE);
    SimulationSummary {
        break_even: sim.break_even,
        small_venue_attendance: SMALL_VENUE_CAPACITY,
        profit_small_venue: sim.profit_at(SMALL_VENUE_CAPACITY),
        margin_small_venue: sim.margin_at(SMALL_VENUE_CAPACITY),
        large_venue_attendance: large,
        profit_large_venue: sim.profit_at(large),
        margin_large_venue: sim.margin_at(large),
        mean_profit: sim.mean_profit(),
    }
}
