use crate::error::LoanError;
use log::{debug, info, trace, warn};
use std::fmt;

pub const MONTHS_PER_YEAR: u32 = 12;
pub const DAYS_PER_YEAR: f64 = 365.;

/// Monthly rates at or below this are treated as interest free.
pub const ZERO_RATE_TOLERANCE: f64 = 1e-12;
/// Slack used when comparing a payment against the interest it must cover.
pub const PAYMENT_EPSILON: f64 = 1e-9;
/// A balance at or below this is paid off.
pub const PAYOFF_TOLERANCE: f64 = 1e-8;

/// Upper bound on simulated months for a loan of `term_months`.
pub fn max_months(term_months: u32) -> u32 {
    term_months.saturating_mul(2).saturating_add(120)
}

/// Parameters of one amortization run. All amounts are in currency units,
/// the rate is an annual percentage (i.e., 7.0 for 7%).
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoanRequest {
    pub principal: f64,
    pub annual_rate: f64,
    /// Recurring payment chosen by the borrower; zero means "use the base payment".
    pub fixed_payment: f64,
    /// Voluntary amount added to every payment.
    pub extra_payment: f64,
    pub term_months: u32,
}

impl LoanRequest {
    pub fn new(
        principal: f64,
        annual_rate: f64,
        fixed_payment: f64,
        extra_payment: f64,
        term_months: u32,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            fixed_payment,
            extra_payment,
            term_months,
        }
    }

    pub fn with_term(
        principal: f64,
        annual_rate: f64,
        fixed_payment: f64,
        extra_payment: f64,
        years: u32,
        months: u32,
    ) -> Self {
        let term_months = years
            .saturating_mul(MONTHS_PER_YEAR)
            .saturating_add(months);
        Self::new(
            principal,
            annual_rate,
            fixed_payment,
            extra_payment,
            term_months,
        )
    }

    pub fn schedule(&self) -> Result<Schedule, LoanError> {
        compute_schedule(self)
    }

    fn validate(&self) -> Result<(), LoanError> {
        let finite = [
            ("principal", self.principal),
            ("rate", self.annual_rate),
            ("monthly payment", self.fixed_payment),
            ("additional payment", self.extra_payment),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LoanError::invalid(format!("{} must be a finite number", field)));
        }

        if self.principal <= 0. {
            return Err(LoanError::invalid("principal must be greater than zero"));
        }
        if self.term_months == 0 {
            return Err(LoanError::invalid("term must be at least one month"));
        }
        if self.annual_rate < 0. {
            return Err(LoanError::invalid("rate cannot be negative"));
        }
        if self.extra_payment < 0. {
            return Err(LoanError::invalid("additional payment cannot be negative"));
        }
        Ok(())
    }
}

/// One month of the amortization schedule.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub remaining_balance: f64,
}

impl ScheduleRow {
    pub fn new(month: u32, payment: f64, interest: f64, principal: f64, remaining_balance: f64) -> Self {
        Self {
            month,
            payment,
            interest,
            principal,
            remaining_balance,
        }
    }
}

impl fmt::Display for ScheduleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "month {}, payment ${:.2}, interest ${:.2}, principal ${:.2}, remaining balance ${:.2}",
            self.month, self.payment, self.interest, self.principal, self.remaining_balance
        )
    }
}

/// Totals derived from a finished schedule.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub total_months: u32,
    pub total_interest_paid: f64,
    /// Baseline interest minus interest actually paid, never negative.
    pub interest_saved: f64,
    pub initial_daily_interest: f64,
    pub final_daily_interest: f64,
    /// Interest over the full term paying only the base payment.
    pub original_interest: f64,
    pub base_payment: f64,
    /// Recurring payment used by the schedule, before the extra payment.
    pub actual_payment: f64,
}

impl Summary {
    pub fn years_and_months(&self) -> (u32, u32) {
        (
            self.total_months / MONTHS_PER_YEAR,
            self.total_months % MONTHS_PER_YEAR,
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} months, interest paid ${:.2}, interest saved ${:.2}, original interest ${:.2}",
            self.total_months, self.total_interest_paid, self.interest_saved, self.original_interest
        )
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    rows: Vec<ScheduleRow>,
    summary: Summary,
}

impl Schedule {
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn payment_count(&self) -> usize {
        self.rows.len()
    }

    /// Row for a 1-based month number.
    pub fn get_row(&self, month: usize) -> Option<&ScheduleRow> {
        month.checked_sub(1).and_then(|idx| self.rows.get(idx))
    }

    pub fn into_parts(self) -> (Vec<ScheduleRow>, Summary) {
        (self.rows, self.summary)
    }
}

pub fn round(amt: f64, dec_places: i32) -> f64 {
    if amt == 0. {
        0.
    } else {
        (amt * 10_f64.powi(dec_places)).round() / 10_f64.powi(dec_places)
    }
}

pub fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / MONTHS_PER_YEAR as f64 / 100.
}

pub fn daily_rate(annual_rate: f64) -> f64 {
    annual_rate / DAYS_PER_YEAR / 100.
}

/// Level payment that retires `principal` in exactly `term_months` at `monthly_rate`.
pub fn base_payment(principal: f64, monthly_rate: f64, term_months: u32) -> f64 {
    if monthly_rate.abs() < ZERO_RATE_TOLERANCE {
        principal / term_months as f64
    } else {
        (monthly_rate * principal) / (1. - (1. + monthly_rate).powf(-(term_months as f64)))
    }
}

struct MonthlyStep {
    payment: f64,
    interest: f64,
    principal: f64,
}

// split one month's payment between interest and principal
fn amortize_month(
    month: u32,
    balance: f64,
    monthly_rate: f64,
    payment: f64,
    force_payoff: bool,
) -> Result<MonthlyStep, LoanError> {
    let interest = balance * monthly_rate;

    if force_payoff {
        return Ok(MonthlyStep {
            payment: interest + balance,
            interest,
            principal: balance,
        });
    }

    let mut payment = payment;
    let mut principal = payment - interest;
    if principal <= 0. && monthly_rate > 0. {
        return Err(LoanError::NonDecreasingBalance { month });
    }

    // last payment only covers what is left
    if principal > balance {
        principal = balance;
        payment = interest + principal;
    }

    Ok(MonthlyStep {
        payment,
        interest,
        principal,
    })
}

/// Builds the month-by-month schedule and its summary for `request`.
///
/// When neither a fixed nor an extra payment is given, the base payment is
/// used and the loan is forced to pay off in exactly `term_months`, absorbing
/// any floating point residue in the final row.
pub fn compute_schedule(request: &LoanRequest) -> Result<Schedule, LoanError> {
    if let Err(e) = request.validate() {
        warn!("rejected loan request: {}", e);
        return Err(e);
    }

    let principal = request.principal;
    let term_months = request.term_months;
    let monthly_rate = monthly_rate(request.annual_rate);
    let daily_rate = daily_rate(request.annual_rate);

    let base_payment = base_payment(principal, monthly_rate, term_months);
    let actual_payment = if request.fixed_payment > 0. {
        request.fixed_payment
    } else {
        base_payment
    };
    // a payment within epsilon of zero still gets the exact payoff at term
    let use_base_no_extra =
        request.fixed_payment <= PAYMENT_EPSILON && request.extra_payment <= PAYMENT_EPSILON;
    debug!(
        "monthly rate {}, daily rate {}, base payment {}, actual payment {}",
        monthly_rate, daily_rate, base_payment, actual_payment
    );

    let first_interest = principal * monthly_rate;
    if monthly_rate > 0. && actual_payment <= first_interest + PAYMENT_EPSILON {
        warn!(
            "payment {} does not cover first month interest {}",
            actual_payment, first_interest
        );
        return Err(LoanError::PaymentTooLow {
            payment: actual_payment,
            interest: first_interest,
        });
    }

    let original_interest = (base_payment * term_months as f64 - principal).max(0.);
    debug!("baseline interest without extra payments {}", original_interest);

    let cap = max_months(term_months);
    let payment = actual_payment + request.extra_payment;
    let mut rows: Vec<ScheduleRow> = Vec::new();
    let mut balance = principal;
    let mut month = 0;
    let mut total_interest_paid = 0.;

    loop {
        month += 1;
        let force_payoff = use_base_no_extra && month == term_months;
        let step = match amortize_month(month, balance, monthly_rate, payment, force_payoff) {
            Ok(step) => step,
            Err(e) => {
                warn!("{}", e);
                return Err(e);
            }
        };

        balance -= step.principal;
        if balance <= PAYOFF_TOLERANCE {
            balance = 0.;
        }
        total_interest_paid += step.interest;
        trace!(
            "month {}, payment {}, interest {}, principal {}, end bal {}",
            month,
            step.payment,
            step.interest,
            step.principal,
            balance
        );

        rows.push(ScheduleRow::new(
            month,
            step.payment,
            step.interest,
            step.principal,
            balance,
        ));

        if balance == 0. || month >= cap {
            break;
        }
    }

    if balance > 0. {
        let e = LoanError::SimulationCapReached {
            months: month,
            balance,
        };
        warn!("{}", e);
        return Err(e);
    }

    let summary = Summary {
        total_months: month,
        total_interest_paid,
        interest_saved: (original_interest - total_interest_paid).max(0.),
        initial_daily_interest: principal * daily_rate,
        final_daily_interest: balance * daily_rate,
        original_interest,
        base_payment,
        actual_payment,
    };
    info!("{}", summary);

    Ok(Schedule { rows, summary })
}
