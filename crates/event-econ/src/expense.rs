//! Expense model: venue, security, open bar and flat costs.

use crate::arrival::arrivals_by;
use event_core::SimulationParameters;
use rust_decimal::Decimal;

/// Open-bar cost per candidate attendance: the per-person price times the
/// attendees already inside when the open bar closes.
pub fn open_bar_cost(
    attendance: &[u32],
    open_bar_hours: f64,
    open_bar_price: Decimal,
) -> Vec<Decimal> {
    arrivals_by(attendance, open_bar_hours)
        .into_iter()
        .map(|arrived| open_bar_price.saturating_mul(Decimal::from(arrived)))
        .collect()
}

/// Total expense per candidate attendance.
///
/// Venue and security costs step up above the small-venue capacity; lineup
/// and promotion are flat. Totals saturate at `Decimal::MAX`.
pub fn expenses(attendance: &[u32], params: &SimulationParameters) -> Vec<Decimal> {
    let flat = params.lineup_cost.saturating_add(params.promotion_cost);
    let open_bar = open_bar_cost(attendance, params.open_bar_hours, params.open_bar_price);
    attendance
        .iter()
        .zip(open_bar)
        .map(|(&n, open_bar)| {
            params
                .venue_cost(n)
                .saturating_add(params.security_cost(n))
                .saturating_add(open_bar)
                .saturating_add(flat)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_event_pays_fixed_costs_only() {
        let p = SimulationParameters::default();
        let expected = p.venue_cost_small
            + p.staff_unit_cost * Decimal::from(3u32)
            + p.lineup_cost
            + p.promotion_cost;
        assert_eq!(expenses(&[0], &p), vec![expected]);
        assert_eq!(expected, Decimal::new(7450, 0));
    }

    #[test]
    fn step_at_small_venue_capacity() {
        let p = SimulationParameters::default();
        let e = expenses(&[299, 300, 301, 302], &p);
        let bar = open_bar_cost(&[299, 300, 301, 302], p.open_bar_hours, p.open_bar_price);
        let fixed: Vec<Decimal> = e.iter().zip(&bar).map(|(e, b)| e - b).collect();
        assert_eq!(fixed[0], fixed[1]);
        assert_eq!(fixed[2], fixed[3]);
        assert_eq!(fixed[2] - fixed[1], Decimal::new(5000 + 150, 0));
    }

    #[test]
    fn no_open_bar_costs_nothing() {
        let zero_hours = open_bar_cost(&[100, 700], 0.0, Decimal::new(25, 0));
        assert_eq!(zero_hours, vec![Decimal::ZERO, Decimal::ZERO]);
        let free = open_bar_cost(&[100, 700], 4.0, Decimal::ZERO);
        assert_eq!(free, vec![Decimal::ZERO, Decimal::ZERO]);
    }

    #[test]
    fn huge_costs_saturate() {
        let p = SimulationParameters {
            venue_cost_large: Decimal::MAX,
            open_bar_price: Decimal::MAX,
            ..Default::default()
        };
        let e = expenses(&[1, 700], &p);
        assert!(e[0] < Decimal::MAX);
        assert_eq!(e[1], Decimal::MAX);
    }

    #[test]
    fn open_bar_follows_arrivals() {
        let n = [700u32];
        let arrived = arrivals_by(&n, 2.0)[0];
        assert_eq!(
            open_bar_cost(&n, 2.0, Decimal::new(25, 0)),
            vec![Decimal::new(25, 0) * Decimal::from(arrived)]
        );
    }
}
