//! Revenue model: staged ticket sales plus bar sales.

use crate::distribution::tier_proportions;
use event_core::{SimulationParameters, COURTESY_FRACTION};
use rust_decimal::Decimal;

/// Attendees who pay for a ticket out of `attendance`, courtesy list removed.
pub fn paid_attendees(attendance: u32) -> u64 {
    (attendance as f64 * (1.0 - COURTESY_FRACTION)) as u64
}

/// Ticket revenue per candidate attendance.
///
/// Paid attendees are split across `tier_count` tiers by the tier density;
/// tier `i` is sold at `initial_price + i * price_increment`. Tier sizes are
/// truncated one by one, so a few tickets per run can go unaccounted.
/// Amounts saturate at `Decimal::MAX` instead of overflowing.
pub fn ticket_revenue(
    attendance: &[u32],
    tier_count: u32,
    price_increment: Decimal,
    initial_price: Decimal,
) -> Vec<Decimal> {
    let weights = tier_proportions(tier_count);
    attendance
        .iter()
        .map(|&n| {
            let paid = paid_attendees(n) as f64;
            let mut price = initial_price;
            let mut total = Decimal::ZERO;
            for w in &weights {
                let sold = Decimal::from((w * paid) as u64);
                total = total.saturating_add(sold.saturating_mul(price));
                price = price.saturating_add(price_increment);
            }
            total
        })
        .collect()
}

/// Bar revenue: linear in attendance, no tiers and no cap.
pub fn bar_revenue(
    attendance: &[u32],
    avg_bar_spend: Decimal,
    bar_margin: Decimal,
) -> Vec<Decimal> {
    let per_person = avg_bar_spend.saturating_mul(bar_margin);
    attendance
        .iter()
        .map(|&n| Decimal::from(n).saturating_mul(per_person))
        .collect()
}

/// Total revenue per candidate attendance.
pub fn revenue(attendance: &[u32], params: &SimulationParameters) -> Vec<Decimal> {
    let tickets = ticket_revenue(
        attendance,
        params.tier_count,
        params.price_increment,
        params.initial_price,
    );
    let bar = bar_revenue(attendance, params.avg_bar_spend, params.bar_margin);
    tickets
        .into_iter()
        .zip(bar)
        .map(|(t, b)| t.saturating_add(b))
        .collect()
}
