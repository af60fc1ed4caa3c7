use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;
use std::str::FromStr;
use synastry::{
    natal_interpretation, AspectCalculator, BirthData, ChartBuilder, ChartSettings,
    LongitudeStrategy, NatalChart, SynastryReport,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Sun from sign-entry dates, other bodies seeded filler.
    Calendar,
    /// Every body from the Swiss Ephemeris.
    Ephemeris,
}

impl From<Strategy> for LongitudeStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Calendar => LongitudeStrategy::Calendar,
            Strategy::Ephemeris => LongitudeStrategy::Ephemeris,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Natal charts and synastry from birth data")]
struct Args {
    /// Config file (default: configs/synastry.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured longitude strategy.
    #[arg(long, value_enum, global = true)]
    strategy: Option<Strategy>,

    /// Print JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build one natal chart.
    Chart {
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// H:MM or HH:MM, read as UTC
        #[arg(long)]
        time: String,
        #[arg(long)]
        place: String,
    },
    /// Compare two charts, each given as "name;YYYY-MM-DD;HH:MM;place".
    Compare { first: BirthArg, second: BirthArg },
}

#[derive(Clone, Debug)]
struct BirthArg(BirthData);

impl FromStr for BirthArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(';').map(str::trim).collect();
        match fields.as_slice() {
            [name, date, time, place] if !name.is_empty() && !place.is_empty() => {
                Ok(BirthArg(BirthData::new(*name, *date, *time, *place)))
            }
            _ => Err(format!("expected \"name;YYYY-MM-DD;HH:MM;place\", got {s:?}")),
        }
    }
}

fn load_settings(args: &Args) -> anyhow::Result<ChartSettings> {
    let mut settings = match &args.config {
        Some(path) => synastry_config::load_settings_from(path)?,
        None => synastry_config::load_settings()?,
    };
    if let Some(strategy) = args.strategy {
        settings.longitude_strategy = strategy.into();
    }
    debug!("Chart settings: {:?}", settings);
    Ok(settings)
}

fn build(builder: &ChartBuilder, birth: &BirthData) -> anyhow::Result<NatalChart> {
    builder
        .build(birth)
        .with_context(|| format!("Could not build chart for {}", birth.name))
}

fn print_chart(chart: &NatalChart) {
    println!("{} ({} {} UTC, {})", chart.name, chart.birth_date, chart.birth_time, chart.birth_place);
    println!(
        "Ascendant: {:.1}° {}",
        chart.ascendant - chart.rising_sign().start_degree(),
        chart.rising_sign()
    );
    for p in &chart.placements {
        println!(
            "{} {:<8} {:>5.1}° {} {:<11} house {:>2}  {}",
            p.planet.symbol(),
            p.planet.name(),
            p.degree_in_sign(),
            p.sign.symbol(),
            p.sign.name(),
            p.house,
            natal_interpretation(p.planet, p.sign)
        );
    }
}

fn print_report(report: &SynastryReport) {
    println!("{} × {}", report.chart1_name, report.chart2_name);
    println!("Harmony: {}%", report.score);
    println!("{}", report.summary);
    if report.aspects.is_empty() {
        println!("No major aspects found.");
    }
    for item in &report.aspects {
        let a = &item.aspect;
        println!(
            "  {:<8} {:<11} {:<8} {:>4.1}°  {}",
            a.planet1.name(),
            a.aspect_type.name(),
            a.planet2.name(),
            a.orb,
            item.interpretation
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let settings = load_settings(&args)?;
    let builder = ChartBuilder::new(&settings);
    info!(
        "Building charts with {} longitudes at latitude {}",
        builder.provider_name(),
        builder.latitude()
    );

    match &args.command {
        Command::Chart { name, date, time, place } => {
            let chart = build(&builder, &BirthData::new(name, date, time, place))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_chart(&chart);
            }
        }
        Command::Compare { first, second } => {
            let chart_a = build(&builder, &first.0)?;
            let chart_b = build(&builder, &second.0)?;
            let calculator = AspectCalculator::with_limit(settings.max_aspects);
            debug!("Keeping at most {} aspects", calculator.max_aspects());
            let report = SynastryReport::compare(&calculator, &chart_a, &chart_b);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_arg_parse() {
        let BirthArg(birth) = "Ada ; 1815-12-10; 13:00 ;London".parse().unwrap();
        assert_eq!(birth, BirthData::new("Ada", "1815-12-10", "13:00", "London"));
        assert!("Ada;1815-12-10;13:00".parse::<BirthArg>().is_err());
        assert!(";1815-12-10;13:00;London".parse::<BirthArg>().is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "synastry",
            "--strategy",
            "ephemeris",
            "compare",
            "A;2000-01-01;12:00;X",
            "B;1999-05-05;6:30;Y",
        ])
        .unwrap();
        assert!(matches!(args.strategy, Some(Strategy::Ephemeris)));
        assert!(matches!(args.command, Command::Compare { .. }));
    }
}
