//! Arrival model: how many attendees are inside after a given time.

use crate::distribution::arrival_fraction;
use event_core::EVENT_HOURS;

/// Attendees arrived after `elapsed_hours`, per candidate total.
///
/// Each count is `total * CDF(elapsed / event_hours)` truncated toward
/// zero. Callers guarantee non-negative hours and `event_hours > 0`.
pub fn arrivals(total: &[u32], elapsed_hours: f64, event_hours: f64) -> Vec<u32> {
    let fraction = arrival_fraction(elapsed_hours / event_hours);
    total
        .iter()
        .map(|&n| (n as f64 * fraction) as u32)
        .collect()
}

/// [`arrivals`] over the standard event length.
pub fn arrivals_by(total: &[u32], elapsed_hours: f64) -> Vec<u32> {
    arrivals(total, elapsed_hours, EVENT_HOURS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nobody_at_opening() {
        let total: Vec<u32> = (0..=700).collect();
        assert!(arrivals_by(&total, 0.0).iter().all(|&a| a == 0));
    }

    #[test]
    fn everybody_at_closing() {
        let total: Vec<u32> = (0..=700).collect();
        assert_eq!(arrivals_by(&total, 8.0), total);
        assert_eq!(arrivals_by(&total, 12.0), total);
        assert_eq!(arrivals(&total, 3.0, 3.0), total);
    }

    #[test]
    fn two_hours_is_a_partial_crowd() {
        let a = arrivals_by(&[1000], 2.0);
        assert!(a[0] > 0 && a[0] < 1000);
    }

    proptest! {
        #[test]
        fn monotonic_in_elapsed_hours(n in 0u32..100_000, h1 in 0.0f64..10.0, h2 in 0.0f64..10.0) {
            let (lo, hi) = if h1 <= h2 { (h1, h2) } else { (h2, h1) };
            prop_assert!(arrivals_by(&[n], lo)[0] <= arrivals_by(&[n], hi)[0]);
        }

        #[test]
        fn monotonic_in_total_and_bounded(n in 0u32..100_000, h in 0.0f64..10.0) {
            let a = arrivals_by(&[n, n + 1], h);
            prop_assert!(a[0] <= a[1]);
            prop_assert!(a[0] <= n);
        }
    }
}
