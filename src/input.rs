use crate::error::FormError;
use crate::loan::{LoanRequest, MONTHS_PER_YEAR};

/// Parses a currency amount such as `$12,500.00`. Blank input is zero.
pub fn parse_money(field: &'static str, value: &str) -> Result<f64, FormError> {
    let cleaned: String = value
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    parse_number(field, value, cleaned.trim())
}

/// Parses a percentage such as `6.5%`. Blank input is zero.
pub fn parse_percent(field: &'static str, value: &str) -> Result<f64, FormError> {
    let cleaned = value.replace('%', "");
    parse_number(field, value, cleaned.trim())
}

/// Parses a whole number of years or months. Blank input is zero.
pub fn parse_count(field: &'static str, value: &str) -> Result<i64, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<i64>().map_err(|_| FormError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_number(field: &'static str, raw: &str, cleaned: &str) -> Result<f64, FormError> {
    if cleaned.is_empty() {
        return Ok(0.);
    }
    cleaned.parse::<f64>().map_err(|_| FormError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Loan parameters exactly as a user typed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoanForm {
    pub principal: String,
    pub annual_rate: String,
    pub fixed_payment: String,
    pub extra_payment: String,
    pub years: String,
    pub months: String,
}

impl LoanForm {
    pub fn to_request(&self) -> Result<LoanRequest, FormError> {
        let principal = parse_money("principal", &self.principal)?;
        let annual_rate = parse_percent("rate", &self.annual_rate)?;
        let fixed_payment = parse_money("monthly payment", &self.fixed_payment)?;
        let extra_payment = parse_money("additional payment", &self.extra_payment)?;
        let years = parse_count("years", &self.years)?;
        let months = parse_count("months", &self.months)?;

        let term = years
            .saturating_mul(MONTHS_PER_YEAR as i64)
            .saturating_add(months);
        // a negative term becomes 0 so the engine reports it
        let term_months = if term < 0 {
            0
        } else {
            u32::try_from(term).map_err(|_| FormError::TermTooLong { years, months })?
        };

        Ok(LoanRequest::new(
            principal,
            annual_rate,
            fixed_payment,
            extra_payment,
            term_months,
        ))
    }
}
