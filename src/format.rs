use crate::loan::{ScheduleRow, Summary, MONTHS_PER_YEAR};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    English,
    #[default]
    Spanish,
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Language::English => "en",
            Language::Spanish => "es",
        };
        write!(f, "{}", code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language '{0}', expected 'en' or 'es'")]
pub struct UnknownLanguage(String);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Label {
    TotalTime,
    OriginalInterest,
    TotalInterestPaid,
    TotalInterestSaved,
    InitialDailyInterest,
    FinalDailyInterest,
    MonthlyPaymentDetails,
    Month,
    TotalMonthlyPayment,
    InterestPayment,
    PrincipalPayment,
    RemainingPrincipal,
    Years,
    Months,
    MonthsInTotal,
    PayoffDate,
}

impl Language {
    pub fn label(self, label: Label) -> &'static str {
        match self {
            Language::English => match label {
                Label::TotalTime => "Total Time",
                Label::OriginalInterest => "Original Interest Without Additional Payments",
                Label::TotalInterestPaid => "Total Interest Paid",
                Label::TotalInterestSaved => "Total Interest Saved",
                Label::InitialDailyInterest => "Initial Daily Interest",
                Label::FinalDailyInterest => "Final Daily Interest",
                Label::MonthlyPaymentDetails => "Monthly Payment Details",
                Label::Month => "Month",
                Label::TotalMonthlyPayment => "Total Monthly Payment",
                Label::InterestPayment => "Interest Payment",
                Label::PrincipalPayment => "Principal Payment",
                Label::RemainingPrincipal => "Remaining Principal",
                Label::Years => "years",
                Label::Months => "months",
                Label::MonthsInTotal => "months in total",
                Label::PayoffDate => "Payoff Date",
            },
            Language::Spanish => match label {
                Label::TotalTime => "Tiempo Total",
                Label::OriginalInterest => "Interés Original Sin Pagos Adicionales",
                Label::TotalInterestPaid => "Total Intereses Pagados",
                Label::TotalInterestSaved => "Total Intereses Ahorrados",
                Label::InitialDailyInterest => "Interés Diario Inicial",
                Label::FinalDailyInterest => "Interés Diario Final",
                Label::MonthlyPaymentDetails => "Detalles de Pagos Mensuales",
                Label::Month => "Mes",
                Label::TotalMonthlyPayment => "Pago Mensual Total",
                Label::InterestPayment => "Pago Intereses",
                Label::PrincipalPayment => "Pago Principal",
                Label::RemainingPrincipal => "Principal Restante",
                Label::Years => "años",
                Label::Months => "meses",
                Label::MonthsInTotal => "meses en total",
                Label::PayoffDate => "Fecha de Liquidación",
            },
        }
    }
}

/// `$1,234.56` style rendering, two decimals.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.).round();
    let whole = (cents / 100.).trunc() as u64;
    let frac = (cents % 100.) as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0. && cents > 0. { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

pub fn format_total_time(total_months: u32, lang: Language) -> String {
    format!(
        "{} {}, {} {} ({} {})",
        total_months / MONTHS_PER_YEAR,
        lang.label(Label::Years),
        total_months % MONTHS_PER_YEAR,
        lang.label(Label::Months),
        total_months,
        lang.label(Label::MonthsInTotal)
    )
}

pub fn summary_lines(summary: &Summary, lang: Language) -> Vec<(&'static str, String)> {
    vec![
        (
            lang.label(Label::TotalTime),
            format_total_time(summary.total_months, lang),
        ),
        (
            lang.label(Label::TotalInterestPaid),
            format_currency(summary.total_interest_paid),
        ),
        (
            lang.label(Label::TotalInterestSaved),
            format_currency(summary.interest_saved),
        ),
        (
            lang.label(Label::InitialDailyInterest),
            format_currency(summary.initial_daily_interest),
        ),
        (
            lang.label(Label::FinalDailyInterest),
            format_currency(summary.final_daily_interest),
        ),
        (
            lang.label(Label::OriginalInterest),
            format_currency(summary.original_interest),
        ),
    ]
}

pub fn column_headers(lang: Language) -> [&'static str; 5] {
    [
        lang.label(Label::Month),
        lang.label(Label::TotalMonthlyPayment),
        lang.label(Label::InterestPayment),
        lang.label(Label::PrincipalPayment),
        lang.label(Label::RemainingPrincipal),
    ]
}

pub fn row_cells(row: &ScheduleRow) -> [String; 5] {
    [
        row.month.to_string(),
        format_currency(row.payment),
        format_currency(row.interest),
        format_currency(row.principal),
        format_currency(row.remaining_balance),
    ]
}
