use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rust_decimal::Decimal;
use salary_core::{AgeBand, CalculationInput, RateSchedule, calculate};
use salary_data::finland::{
    self, CHURCH_TAX_RATE, DEFAULT_MUNICIPAL_TAX_RATE, MUNICIPALITIES_2025,
};
use salary_data::logging::init_logging;
use salary_data::{ScheduleLoader, report};
use tracing::debug;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Finnish salary calculator.
///
/// Converts a gross monthly salary into yearly and monthly net income using
/// the progressive state tax, flat municipal and church taxes, mandatory
/// employee contributions and the work income credit.
#[derive(Debug, Parser)]
#[command(name = "salary-calc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Gross monthly base salary.
    #[arg(long, required_unless_present = "list_municipalities")]
    monthly: Option<Decimal>,

    /// Yearly extra income that is not annualized (bonuses, commissions).
    #[arg(long, default_value = "0")]
    extra: Decimal,

    /// Age band selecting the pension contribution rate: 17-52, 53-62 or 63+.
    #[arg(long, default_value = "17-52", value_parser = parse_age_band)]
    age_band: AgeBand,

    /// Municipality whose tax rate is used (case-insensitive).
    #[arg(long, conflicts_with = "municipal_rate")]
    municipality: Option<String>,

    /// Municipal tax rate in percent. Defaults to the national average.
    #[arg(long)]
    municipal_rate: Option<Decimal>,

    /// Pay church tax.
    #[arg(long, default_value_t = false)]
    church: bool,

    /// Church tax rate in percent. Implies --church.
    #[arg(long)]
    church_rate: Option<Decimal>,

    /// Number of dependent children.
    #[arg(long, default_value_t = 0)]
    dependents: u32,

    /// Claim the single-parent child bonus instead of the ordinary one.
    #[arg(long, default_value_t = false)]
    single_parent: bool,

    /// TOML file with schedule parameters. Replaces the built-in 2025 tables.
    #[arg(long, requires = "brackets")]
    parameters: Option<PathBuf>,

    /// CSV file with state tax brackets. Used together with --parameters.
    #[arg(long, requires = "parameters")]
    brackets: Option<PathBuf>,

    /// Print the result as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// List the built-in municipalities and their tax rates, then exit.
    #[arg(long, default_value_t = false)]
    list_municipalities: bool,

    /// Log debug output unless RUST_LOG is set.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn parse_age_band(value: &str) -> Result<AgeBand, String> {
    AgeBand::parse(value).ok_or_else(|| {
        let known: Vec<_> = AgeBand::ALL.iter().map(AgeBand::as_str).collect();
        format!("unknown age band '{value}', expected one of: {}", known.join(", "))
    })
}

// ─── helpers ─────────────────────────────────────────────────────────────────

fn load_schedule(cli: &Cli) -> Result<RateSchedule> {
    match (&cli.parameters, &cli.brackets) {
        (Some(parameters), Some(brackets)) => {
            debug!(
                parameters = %parameters.display(),
                brackets = %brackets.display(),
                "loading schedule from files"
            );
            ScheduleLoader::load_from_paths(parameters, brackets).with_context(|| {
                format!(
                    "Failed to load schedule from {} and {}",
                    parameters.display(),
                    brackets.display()
                )
            })
        }
        _ => finland::schedule_2025().context("Built-in 2025 schedule is invalid"),
    }
}

fn municipal_rate(cli: &Cli) -> Result<Decimal> {
    if let Some(rate) = cli.municipal_rate {
        return Ok(rate);
    }
    match &cli.municipality {
        Some(name) => match finland::municipality_rate(name) {
            Some(rate) => Ok(rate),
            None => bail!("Unknown municipality '{name}'. Use --list-municipalities or --municipal-rate."),
        },
        None => Ok(DEFAULT_MUNICIPAL_TAX_RATE),
    }
}

fn build_input(
    cli: &Cli,
    monthly: Decimal,
) -> Result<CalculationInput> {
    let mut input = CalculationInput::new(monthly, municipal_rate(cli)?)
        .with_yearly_extra(cli.extra)
        .with_age_band(cli.age_band)
        .with_dependents(cli.dependents, cli.single_parent);

    match (cli.church, cli.church_rate) {
        (_, Some(rate)) => input = input.with_membership(rate),
        (true, None) => input = input.with_membership(CHURCH_TAX_RATE),
        (false, None) => {}
    }

    Ok(input)
}

fn print_municipalities() {
    for municipality in MUNICIPALITIES_2025 {
        println!("{:<16}{:>6}%", municipality.name, format!("{:.2}", municipality.rate));
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_municipalities {
        print_municipalities();
        return Ok(());
    }

    let Some(monthly) = cli.monthly else {
        bail!("--monthly is required");
    };

    let schedule = load_schedule(&cli)?;
    let input = build_input(&cli, monthly)?;
    let result = calculate(&schedule, &input).context("Calculation failed")?;

    if cli.json {
        println!("{}", report::render_json(&result).context("Failed to serialize result")?);
    } else {
        print!("{}", report::render_table(&result));
    }

    Ok(())
}
