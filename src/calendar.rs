use crate::loan::Schedule;
use chrono::{Months, NaiveDate};

/// Due dates for `count` monthly payments starting at `first_payment`.
///
/// Each date is computed from `first_payment` rather than the previous due
/// date so a loan starting on the 31st returns to the 31st whenever the month
/// has one. Stops early if a date falls outside chrono's range.
pub fn payment_dates(first_payment: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count)
        .map_while(|n| {
            u32::try_from(n)
                .ok()
                .and_then(|n| first_payment.checked_add_months(Months::new(n)))
        })
        .collect()
}

/// Due date of the final scheduled payment.
pub fn payoff_date(schedule: &Schedule, first_payment: NaiveDate) -> Option<NaiveDate> {
    let last = schedule.payment_count().checked_sub(1)?;
    let last = u32::try_from(last).ok()?;
    first_payment.checked_add_months(Months::new(last))
}
