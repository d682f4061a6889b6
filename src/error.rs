use std::fmt;
use thiserror::Error;

/// Reasons the amortization engine refuses to produce a schedule.
///
/// Every variant is caused by the caller's input and can be fixed by
/// changing it; no partial schedule is ever returned alongside one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "monthly payment ${payment:.2} is too low to cover monthly interest of ${interest:.2}; \
         increase the payment or extend the term"
    )]
    PaymentTooLow { payment: f64, interest: f64 },

    #[error("payment does not cover interest in month {month}; the balance would increase")]
    NonDecreasingBalance { month: u32 },

    #[error(
        "loan not paid off after {months} months (remaining balance ${balance:.2}); \
         the payment may be too small"
    )]
    SimulationCapReached { months: u32, balance: f64 },
}

/// Fieldless category of a [`LoanError`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    InvalidInput,
    PaymentTooLow,
    NonDecreasingBalance,
    SimulationCapReached,
}

impl LoanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoanError::InvalidInput(_) => ErrorKind::InvalidInput,
            LoanError::PaymentTooLow { .. } => ErrorKind::PaymentTooLow,
            LoanError::NonDecreasingBalance { .. } => ErrorKind::NonDecreasingBalance,
            LoanError::SimulationCapReached { .. } => ErrorKind::SimulationCapReached,
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        LoanError::InvalidInput(reason.into())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::PaymentTooLow => "payment too low",
            ErrorKind::NonDecreasingBalance => "non-decreasing balance",
            ErrorKind::SimulationCapReached => "simulation cap reached",
        };
        write!(f, "{}", name)
    }
}

/// Failures turning raw, user-typed strings into numbers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{field}: '{value}' is not a valid number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("term of {years} years and {months} months is too long")]
    TermTooLong { years: i64, months: i64 },
}
