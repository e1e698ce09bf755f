use chrono::Datelike;
use serde::Serialize;

use crate::domain::models::{booking::Booking, custom_booking::CustomBooking};
use crate::domain::services::lifecycle::BookingStatus;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MonthlyRevenue {
    pub month: u32,
    pub online: i64,
    pub offline: i64,
    pub total: i64,
    pub bookings: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RevenueReport {
    pub year: i32,
    pub months: Vec<MonthlyRevenue>,
    pub online_total: i64,
    pub offline_total: i64,
    pub total: i64,
    pub booking_count: i64,
    pub custom_booking_count: i64,
}

/// Only approved and completed stays earn revenue.
fn counts_as_revenue(booking: &Booking) -> bool {
    matches!(booking.status(), Ok(BookingStatus::Approved | BookingStatus::Completed))
}

/// Buckets revenue by check-in month for `year`. Custom bookings have no
/// status and always count.
pub fn build_report(year: i32, bookings: &[Booking], custom: &[CustomBooking]) -> RevenueReport {
    let mut months: Vec<MonthlyRevenue> = (1..=12)
        .map(|month| MonthlyRevenue { month, ..Default::default() })
        .collect();

    let mut booking_count: i64 = 0;
    for booking in bookings.iter().filter(|b| b.check_in.year() == year && counts_as_revenue(b)) {
        let slot = &mut months[booking.check_in.month0() as usize];
        slot.online += booking.total_price;
        slot.bookings += 1;
        booking_count += 1;
    }

    let mut custom_booking_count: i64 = 0;
    for entry in custom.iter().filter(|c| c.check_in.year() == year) {
        let slot = &mut months[entry.check_in.month0() as usize];
        slot.offline += entry.amount;
        slot.bookings += 1;
        custom_booking_count += 1;
    }

    for slot in months.iter_mut() {
        slot.total = slot.online + slot.offline;
    }

    let online_total: i64 = months.iter().map(|m| m.online).sum();
    let offline_total: i64 = months.iter().map(|m| m.offline).sum();

    RevenueReport {
        year,
        months,
        online_total,
        offline_total,
        total: online_total + offline_total,
        booking_count,
        custom_booking_count,
    }
}
