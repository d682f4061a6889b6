//! Fixed-term loan amortization with voluntary extra payments.

pub mod calendar;
pub mod error;
pub mod export;
pub mod format;
pub mod input;
pub mod loan;
pub mod report;

pub use error::{ErrorKind, FormError, LoanError};
pub use loan::{compute_schedule, LoanRequest, Schedule, ScheduleRow, Summary};
