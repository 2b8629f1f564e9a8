#![deny(warnings)]

//! Core domain models and invariants for the event profit simulator.
//!
//! This crate defines the serializable value types exchanged between the
//! model and its presentation layer, the fixed constants of the model, and
//! validation helpers that enforce the input ranges a caller must respect.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attendance at or below this value is served by the small venue.
pub const SMALL_VENUE_CAPACITY: u32 = 300;
/// Length of the event in hours; arrival times are normalized against it.
pub const EVENT_HOURS: f64 = 8.0;
/// Share of attendees admitted for free.
pub const COURTESY_FRACTION: f64 = 0.05;
/// Security headcount for the small venue.
pub const SMALL_VENUE_STAFF: u32 = 3;
/// Security headcount for the large venue.
pub const LARGE_VENUE_STAFF: u32 = 4;
/// Default upper end of the attendance range.
pub const DEFAULT_MAX_ATTENDANCE: u32 = 700;
/// Largest attendance a range may reach.
pub const MAX_ATTENDANCE: u32 = 100_000;
/// Largest accepted cost or price.
pub const MAX_MONEY: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);
/// Largest accepted bar margin multiplier (10 000 %).
pub const MAX_BAR_MARGIN: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
/// Largest accepted number of ticket tiers.
pub const MAX_TIERS: u32 = 1000;

/// Shape parameters of a Beta distribution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BetaShape {
    pub alpha: f64,
    pub beta: f64,
}

/// Cumulative arrival profile over the normalized event time.
pub const ARRIVAL_SHAPE: BetaShape = BetaShape {
    alpha: 2.5,
    beta: 4.0,
};

/// Density used to split paid attendees across pricing tiers.
pub const TIER_SHAPE: BetaShape = BetaShape {
    alpha: 2.0,
    beta: 5.0,
};

/// Attendance band; each band has its own venue and staffing cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    /// Up to and including [`SMALL_VENUE_CAPACITY`].
    Small,
    /// Above [`SMALL_VENUE_CAPACITY`].
    Large,
}

impl Band {
    /// Band a given total attendance falls into. The threshold is inclusive
    /// on the small side.
    pub fn of(attendance: u32) -> Band {
        if attendance <= SMALL_VENUE_CAPACITY {
            Band::Small
        } else {
            Band::Large
        }
    }

    /// Security headcount hired for this band.
    pub fn staff_headcount(self) -> u32 {
        match self {
            Band::Small => SMALL_VENUE_STAFF,
            Band::Large => LARGE_VENUE_STAFF,
        }
    }
}

/// Cost and pricing inputs for one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Venue rental for up to 300 attendees.
    pub venue_cost_small: Decimal,
    /// Venue rental for more than 300 attendees.
    pub venue_cost_large: Decimal,
    /// Flat cost of the artist lineup.
    pub lineup_cost: Decimal,
    /// Cost per security/first-aid staff member.
    pub staff_unit_cost: Decimal,
    /// Flat promotion spend.
    pub promotion_cost: Decimal,
    /// Hours elapsed since opening when the open bar closes.
    pub open_bar_hours: f64,
    /// Open-bar cost per arrived person.
    pub open_bar_price: Decimal,
    /// Price of the first ticket tier.
    pub initial_price: Decimal,
    /// Price increase from one tier to the next.
    pub price_increment: Decimal,
    /// Number of ticket tiers.
    pub tier_count: u32,
    /// Bar revenue multiplier (2.5 means 250 %).
    pub bar_margin: Decimal,
    /// Average bar spend per attendee.
    pub avg_bar_spend: Decimal,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            venue_cost_small: Decimal::new(5000, 0),
            venue_cost_large: Decimal::new(10_000, 0),
            lineup_cost: Decimal::new(1000, 0),
            staff_unit_cost: Decimal::new(150, 0),
            promotion_cost: Decimal::new(1000, 0),
            open_bar_hours: 2.0,
            open_bar_price: Decimal::new(25, 0),
            initial_price: Decimal::new(25, 0),
            price_increment: Decimal::new(10, 0),
            tier_count: 5,
            bar_margin: Decimal::new(25, 1),
            avg_bar_spend: Decimal::ZERO,
        }
    }
}

impl SimulationParameters {
    /// Venue rental for the band `attendance` falls into.
    pub fn venue_cost(&self, attendance: u32) -> Decimal {
        match Band::of(attendance) {
            Band::Small => self.venue_cost_small,
            Band::Large => self.venue_cost_large,
        }
    }

    /// Security cost for the band `attendance` falls into.
    pub fn security_cost(&self, attendance: u32) -> Decimal {
        let headcount = Decimal::from(Band::of(attendance).staff_headcount());
        self.staff_unit_cost.saturating_mul(headcount)
    }
}

/// Inclusive range of candidate total attendance values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRange {
    pub start: u32,
    pub end: u32,
}

impl Default for AttendanceRange {
    fn default() -> Self {
        Self {
            start: 1,
            end: DEFAULT_MAX_ATTENDANCE,
        }
    }
}

impl AttendanceRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of candidate values; zero when `start > end`.
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, attendance: u32) -> bool {
        (self.start..=self.end).contains(&attendance)
    }

    /// Candidate values in ascending order.
    pub fn values(&self) -> Vec<u32> {
        (self.start..=self.end).collect()
    }
}

/// Break-even attendance per band.
///
/// `small_band` and `large_band` always hold a value. When a band never
/// reaches non-negative profit, `small_band` is the first attendance of its
/// band and `large_band` repeats `small_band`; the `*_reached` flags tell
/// the two situations apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    pub small_band: u32,
    pub large_band: u32,
    pub small_band_reached: bool,
    pub large_band_reached: bool,
}

/// One row of the simulated curves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub attendance: u32,
    pub revenue: Decimal,
    pub expense: Decimal,
    pub profit: Decimal,
}

/// Output of one simulation pass. All curves share the indexing of
/// `attendance`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub attendance: Vec<u32>,
    pub revenue: Vec<Decimal>,
    pub expense: Vec<Decimal>,
    pub profit: Vec<Decimal>,
    pub break_even: BreakEvenResult,
}

impl Simulation {
    fn index_of(&self, attendance: u32) -> Option<usize> {
        self.attendance.iter().position(|&n| n == attendance)
    }

    /// Profit at an exact attendance, if it is part of the simulated range.
    pub fn profit_at(&self, attendance: u32) -> Option<Decimal> {
        let i = self.index_of(attendance)?;
        self.profit.get(i).copied()
    }

    /// Revenue at an exact attendance, if it is part of the simulated range.
    pub fn revenue_at(&self, attendance: u32) -> Option<Decimal> {
        let i = self.index_of(attendance)?;
        self.revenue.get(i).copied()
    }

    /// Profit as a percentage of revenue at `attendance`.
    /// Returns None when the attendance is absent, revenue is zero or the
    /// ratio does not fit a `Decimal`.
    pub fn margin_at(&self, attendance: u32) -> Option<Decimal> {
        let profit = self.profit_at(attendance)?;
        let revenue = self.revenue_at(attendance)?;
        let ratio = profit.checked_div(revenue)?;
        ratio.checked_mul(Decimal::ONE_HUNDRED)
    }

    /// Mean profit over the whole curve.
    pub fn mean_profit(&self) -> Option<Decimal> {
        if self.profit.is_empty() {
            return None;
        }
        let len = Decimal::from(self.profit.len() as u64);
        match checked_total(self.profit.iter().copied()) {
            Some(total) => Some(total / len),
            // saturated curves: average the scaled terms instead
            None => checked_total(self.profit.iter().map(|p| *p / len)),
        }
    }

    /// Rows of the curves in attendance order.
    pub fn points(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.attendance
            .iter()
            .zip(&self.revenue)
            .zip(&self.expense)
            .zip(&self.profit)
            .map(|(((&attendance, &revenue), &expense), &profit)| CurvePoint {
                attendance,
                revenue,
                expense,
                profit,
            })
    }
}

fn checked_total(values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    let mut total = Decimal::ZERO;
    for v in values {
        total = total.checked_add(v)?;
    }
    Some(total)
}

/// Headline figures reported next to the profit curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub break_even: BreakEvenResult,
    /// Attendance used for the small-venue figures (the venue capacity).
    pub small_venue_attendance: u32,
    pub profit_small_venue: Option<Decimal>,
    pub margin_small_venue: Option<Decimal>,
    /// Attendance used for the large-venue figures (top of the range).
    pub large_venue_attendance: u32,
    pub profit_large_venue: Option<Decimal>,
    pub margin_large_venue: Option<Decimal>,
    pub mean_profit: Option<Decimal>,
}

/// Validation errors for simulation inputs.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Cost or price must be non-negative.
    #[error("{0} must not be negative")]
    NegativeMoney(&'static str),
    /// Cost, price or multiplier above the accepted maximum.
    #[error("{field} exceeds the maximum of {max}")]
    TooLarge { field: &'static str, max: Decimal },
    /// The first tier must cost at least the minimum ticket price.
    #[error("initial ticket price {0} is below the minimum of 10")]
    InitialPriceTooLow(Decimal),
    /// Consecutive tiers must differ by at least one unit.
    #[error("price increment {0} is below the minimum of 1")]
    IncrementTooLow(Decimal),
    /// At least one tier is required.
    #[error("tier count must be at least 1")]
    NoTiers,
    /// Tier count above [`MAX_TIERS`].
    #[error("tier count {0} exceeds the maximum of 1000")]
    TooManyTiers(u32),
    /// Open-bar hours must be finite and within one day.
    #[error("open-bar hours {0} must be within [0, 24]")]
    OpenBarHoursOutOfRange(f64),
    /// Attendance range must start at 1 or above, not be empty and end at
    /// or below [`MAX_ATTENDANCE`].
    #[error("attendance range {start}..={end} is invalid")]
    InvalidRange { start: u32, end: u32 },
}

/// Validate simulation parameters against the accepted input ranges.
pub fn validate_parameters(p: &SimulationParameters) -> Result<(), ValidationError> {
    let money = [
        ("venue cost (small)", p.venue_cost_small, MAX_MONEY),
        ("venue cost (large)", p.venue_cost_large, MAX_MONEY),
        ("lineup cost", p.lineup_cost, MAX_MONEY),
        ("staff unit cost", p.staff_unit_cost, MAX_MONEY),
        ("promotion cost", p.promotion_cost, MAX_MONEY),
        ("open-bar price", p.open_bar_price, MAX_MONEY),
        ("initial ticket price", p.initial_price, MAX_MONEY),
        ("price increment", p.price_increment, MAX_MONEY),
        ("bar margin", p.bar_margin, MAX_BAR_MARGIN),
        ("average bar spend", p.avg_bar_spend, MAX_MONEY),
    ];
    for (field, value, max) in money {
        if value < Decimal::ZERO {
            return Err(ValidationError::NegativeMoney(field));
        }
        if value > max {
            return Err(ValidationError::TooLarge { field, max });
        }
    }
    if p.initial_price < Decimal::TEN {
        return Err(ValidationError::InitialPriceTooLow(p.initial_price));
    }
    if p.price_increment < Decimal::ONE {
        return Err(ValidationError::IncrementTooLow(p.price_increment));
    }
    if p.tier_count == 0 {
        return Err(ValidationError::NoTiers);
    }
    if p.tier_count > MAX_TIERS {
        return Err(ValidationError::TooManyTiers(p.tier_count));
    }
    if !p.open_bar_hours.is_finite() || !(0.0..=24.0).contains(&p.open_bar_hours) {
        return Err(ValidationError::OpenBarHoursOutOfRange(p.open_bar_hours));
    }
    Ok(())
}

/// Validate an attendance range.
pub fn validate_range(r: &AttendanceRange) -> Result<(), ValidationError> {
    if r.start == 0 || r.is_empty() || r.end > MAX_ATTENDANCE {
        return Err(ValidationError::InvalidRange {
            start: r.start,
            end: r.end,
        });
    }
    Ok(())
}
