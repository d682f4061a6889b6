use crate::calendar::payoff_date;
use crate::format::{column_headers, row_cells, summary_lines, Label, Language};
use crate::loan::Schedule;
use chrono::NaiveDate;
use tabled::{builder::Builder, Table};

/// Two-column table of the summary, with the payoff date when a first
/// payment date is known.
pub fn summary_table(schedule: &Schedule, lang: Language, first_payment: Option<NaiveDate>) -> Table {
    let mut lines = summary_lines(schedule.summary(), lang);
    if let Some(date) = first_payment.and_then(|first| payoff_date(schedule, first)) {
        lines.push((lang.label(Label::PayoffDate), date.to_string()));
    }

    let mut builder = Builder::default();
    for (label, value) in &lines {
        builder.push_record([*label, value.as_str()]);
    }
    Table::from(builder)
}

pub fn schedule_table(schedule: &Schedule, lang: Language) -> Table {
    let mut builder = Builder::default();
    builder.push_record(column_headers(lang));
    for row in schedule.rows() {
        let cells = row_cells(row);
        builder.push_record(cells.iter().map(String::as_str));
    }
    Table::from(builder)
}

#[cfg(test)]
mod tests {
    use super::{schedule_table, summary_table};
    use crate::format::Language;
    use crate::loan::{compute_schedule, LoanRequest};
    use chrono::NaiveDate;
    use test_log::test;

    fn assert_aligned(text: &str) {
        let widths: Vec<usize> = text.lines().map(|l| l.chars().count()).collect();
        assert!(!widths.is_empty());
        assert!(widths.iter().all(|w| *w == widths[0]), "ragged table:\n{}", text);
    }

    #[test]
    fn test_summary_table() {
        let schedule = compute_schedule(&LoanRequest::new(10000., 12., 0., 100., 24)).unwrap();
        let first = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

        let text = summary_table(&schedule, Language::English, Some(first)).to_string();
        assert!(text.contains("Total Interest Paid"));
        assert!(text.contains("$1,049.58"));
        assert!(text.contains("Payoff Date"));
        assert!(text.contains("2025-11-01"));
        assert_aligned(&text);

        let text = summary_table(&schedule, Language::Spanish, None).to_string();
        assert!(text.contains("Interés Original Sin Pagos Adicionales"));
        assert!(!text.contains("Fecha de Liquidación"));
        assert_aligned(&text);
    }

    #[test]
    fn test_schedule_table() {
        let schedule = compute_schedule(&LoanRequest::new(1200., 0., 100., 20., 12)).unwrap();
        let text = schedule_table(&schedule, Language::Spanish).to_string();

        assert!(text.contains("Principal Restante"));
        assert!(text.contains("$1,080.00"));
        // one line per payment
        assert_eq!(text.lines().filter(|l| l.contains('$')).count(), 10);
        assert_aligned(&text);
    }

    #[test]
    fn test_wide_amounts_stay_aligned() {
        let schedule =
            compute_schedule(&LoanRequest::new(987654321098., 9.5, 0., 0., 360)).unwrap();
        let text = schedule_table(&schedule, Language::English).to_string();

        assert!(text.contains("$987,"));
        assert_aligned(&text);
    }
}
