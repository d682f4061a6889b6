use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use log::error;
use payoff::error::{FormError, LoanError};
use payoff::export::write_csv;
use payoff::format::{Label, Language};
use payoff::input::LoanForm;
use payoff::loan::{compute_schedule, Schedule};
use payoff::report::{schedule_table, summary_table};
use simple_logger::SimpleLogger;
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

/// Amortization schedule for a fixed-term loan with optional extra payments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Loan principal, e.g. "$10,000.00"
    #[arg(long, allow_hyphen_values = true)]
    principal: String,

    /// Annual interest rate in percent, e.g. "12%"
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    rate: String,

    /// Fixed monthly payment; 0 uses the payment that retires the loan over the term
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    payment: String,

    /// Additional payment applied to principal every month
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    extra: String,

    /// Term, whole years
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    years: String,

    /// Term, additional months
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    months: String,

    /// Label language: en or es
    #[arg(long, default_value_t = Language::Spanish)]
    lang: Language,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Date of the first payment (YYYY-MM-DD); adds the payoff date to the summary
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Error
    };
    if let Err(e) = SimpleLogger::new().with_level(level).env().init() {
        eprintln!("could not initialize logging: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is::<LoanError>() || e.is::<FormError>() {
                eprintln!("error: {}", e);
            } else {
                error!("unexpected failure: {}", e);
                eprintln!("error: an unexpected error occurred, please try again");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let form = LoanForm {
        principal: cli.principal.clone(),
        annual_rate: cli.rate.clone(),
        fixed_payment: cli.payment.clone(),
        extra_payment: cli.extra.clone(),
        years: cli.years.clone(),
        months: cli.months.clone(),
    };
    let request = form.to_request()?;
    let schedule = compute_schedule(&request)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Csv => write_csv(&schedule, cli.lang, out)?,
        OutputFormat::Table => print_report(&mut out, &schedule, cli)?,
    }
    Ok(())
}

fn print_report<W: Write>(out: &mut W, schedule: &Schedule, cli: &Cli) -> io::Result<()> {
    let lang = cli.lang;
    writeln!(out, "{}", summary_table(schedule, lang, cli.start))?;

    if cli.quiet {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", lang.label(Label::MonthlyPaymentDetails))?;
    writeln!(out, "{}", schedule_table(schedule, lang))?;
    Ok(())
}

// verifies that types can implement the gated traits below
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<Schedule>();
    is_normal::<LoanError>();
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
