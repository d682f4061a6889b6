use crate::format::{column_headers, row_cells, Language};
use crate::loan::Schedule;
use std::io::Write;

/// Writes the schedule as CSV: a localized header, then one record per month.
pub fn write_csv<W: Write>(schedule: &Schedule, lang: Language, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(column_headers(lang))?;
    for row in schedule.rows() {
        wtr.write_record(row_cells(row))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_csv;
    use crate::format::Language;
    use crate::loan::{compute_schedule, LoanRequest};
    use test_log::test;

    #[test]
    fn test_write_csv() {
        let schedule = compute_schedule(&LoanRequest::new(1200., 0., 100., 20., 12)).unwrap();
        let mut out = Vec::new();
        write_csv(&schedule, Language::English, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(
            lines[0],
            "Month,Total Monthly Payment,Interest Payment,Principal Payment,Remaining Principal"
        );
        assert_eq!(lines[1], "1,$120.00,$0.00,$120.00,\"$1,080.00\"");
        assert_eq!(lines[10], "10,$120.00,$0.00,$120.00,$0.00");
    }

    #[test]
    fn test_write_csv_spanish_header() {
        let schedule = compute_schedule(&LoanRequest::new(500., 5., 0., 0., 6)).unwrap();
        let mut out = Vec::new();
        write_csv(&schedule, Language::Spanish, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Mes,Pago Mensual Total,Pago Intereses,Pago Principal,Principal Restante\n"));
        assert_eq!(text.lines().count(), 7);
    }
}
