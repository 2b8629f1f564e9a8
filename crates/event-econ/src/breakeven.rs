//! Profit curve and break-even search per attendance band.

use crate::expense::expenses;
use crate::revenue::revenue;
use event_core::{Band, BreakEvenResult, SimulationParameters};
use rust_decimal::Decimal;
use tracing::debug;

/// Profit per candidate attendance: revenue minus expense.
pub fn profit(attendance: &[u32], params: &SimulationParameters) -> Vec<Decimal> {
    profit_curve(&revenue(attendance, params), &expenses(attendance, params))
}

/// Elementwise `revenue - expense`, saturating at the `Decimal` bounds.
pub fn profit_curve(revenue: &[Decimal], expense: &[Decimal]) -> Vec<Decimal> {
    revenue
        .iter()
        .zip(expense)
        .map(|(r, e)| r.saturating_sub(*e))
        .collect()
}

fn first_break_even(band: &[(u32, Decimal)]) -> Option<u32> {
    band.iter()
        .find(|(_, p)| *p >= Decimal::ZERO)
        .map(|&(n, _)| n)
}

/// Smallest attendance with non-negative profit in each band.
///
/// Never fails. A small band without any non-negative profit reports its
/// first attendance (0 if the band is empty); a large band without one
/// reports the small band's value. The `*_reached` flags are false in those
/// cases. `profit` and `attendance` are paired index by index; extra entries
/// in the longer slice are ignored.
pub fn break_even(profit: &[Decimal], attendance: &[u32]) -> BreakEvenResult {
    let (small, large): (Vec<(u32, Decimal)>, Vec<(u32, Decimal)>) = attendance
        .iter()
        .copied()
        .zip(profit.iter().copied())
        .partition(|&(n, _)| Band::of(n) == Band::Small);

    let small_hit = first_break_even(&small);
    let small_band = small_hit
        .or_else(|| small.first().map(|&(n, _)| n))
        .unwrap_or(0);
    let large_hit = first_break_even(&large);
    let large_band = large_hit.unwrap_or(small_band);

    if small_hit.is_none() || large_hit.is_none() {
        debug!(
            small_band,
            large_band,
            small_reached = small_hit.is_some(),
            large_reached = large_hit.is_some(),
            "break-even not reached in every band"
        );
    }

    BreakEvenResult {
        small_band,
        large_band,
        small_band_reached: small_hit.is_some(),
        large_band_reached: large_hit.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn curve(values: &[i64]) -> Vec<Decimal> {
        values.iter().map(|&v| Decimal::new(v, 0)).collect()
    }

    #[test]
    fn finds_first_non_negative_per_band() {
        let attendance = [298, 299, 300, 301, 302, 303];
        let p = curve(&[-5, 0, 7, -3, 2, 9]);
        let be = break_even(&p, &attendance);
        assert_eq!(be.small_band, 299);
        assert_eq!(be.large_band, 302);
        assert!(be.small_band_reached && be.large_band_reached);
    }

    #[test]
    fn negative_small_band_reports_first_attendance() {
        let attendance = [1, 2, 3, 301, 302];
        let p = curve(&[-9, -8, -7, -1, 4]);
        let be = break_even(&p, &attendance);
        assert_eq!(be.small_band, 1);
        assert_eq!(be.large_band, 302);
        assert!(!be.small_band_reached);
        assert!(be.large_band_reached);
    }

    #[test]
    fn negative_large_band_falls_back_to_small_band() {
        let attendance = [1, 2, 3, 301, 302];
        let p = curve(&[-9, 1, 7, -1, -4]);
        let be = break_even(&p, &attendance);
        assert_eq!(be.small_band, 2);
        assert_eq!(be.large_band, 2);
        assert!(!be.large_band_reached);
    }

    #[test]
    fn all_negative_curve_still_answers() {
        let attendance: Vec<u32> = (1..=700).collect();
        let p = vec![Decimal::new(-1, 0); 700];
        let be = break_even(&p, &attendance);
        assert_eq!(be.small_band, 1);
        assert_eq!(be.large_band, 1);
        assert!(!be.small_band_reached && !be.large_band_reached);
    }

    #[test]
    fn empty_bands() {
        let be = break_even(&[], &[]);
        assert_eq!((be.small_band, be.large_band), (0, 0));

        let be = break_even(&curve(&[-1, 3]), &[400, 401]);
        assert_eq!((be.small_band, be.large_band), (0, 401));

        let be = break_even(&curve(&[-1, -3]), &[400, 401]);
        assert_eq!((be.small_band, be.large_band), (0, 0));
    }

    #[test]
    fn mismatched_lengths_pair_shortest() {
        let be = break_even(&curve(&[-1, 5]), &[10, 20, 30]);
        assert_eq!(be.small_band, 20);
        let be = break_even(&curve(&[-1, -2, 5]), &[10, 20]);
        assert_eq!(be.small_band, 10);
        assert!(!be.small_band_reached);
    }

    #[test]
    fn profit_is_revenue_minus_expense() {
        let p = SimulationParameters::default();
        let n: Vec<u32> = (1..=700).collect();
        let r = revenue(&n, &p);
        let e = expenses(&n, &p);
        let pr = profit(&n, &p);
        assert_eq!(pr.len(), 700);
        for i in 0..n.len() {
            assert_eq!(pr[i], r[i] - e[i]);
        }
    }

    proptest! {
        #[test]
        fn reported_values_come_from_the_range(
            values in proptest::collection::vec(-1000i64..1000, 1..700),
        ) {
            let attendance: Vec<u32> = (1..=values.len() as u32).collect();
            let be = break_even(&curve(&values), &attendance);
            prop_assert!(attendance.contains(&be.small_band));
            prop_assert!(attendance.contains(&be.large_band));
            if !be.large_band_reached {
                prop_assert_eq!(be.large_band, be.small_band);
            }
            if be.small_band_reached {
                let i = (be.small_band - 1) as usize;
                prop_assert!(values[i] >= 0);
                prop_assert!(values[..i].iter().all(|&v| v < 0));
            }
        }
    }
}
