use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::{anyhow, bail};
use bigdecimal::BigDecimal;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use tally::exact::{Config, Engine};
use tally::file::{FromJsonFile, Scenario};
use tally::parse::parse_probabilities;
use tally::precision::Precision;
use tally::print::tabulate_distribution;

const TABLE_DIGITS: u64 = 10;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// minimum number of events that must occur
    #[clap(short = 'n', long, allow_negative_numbers = true)]
    threshold: Option<isize>,

    /// file to source the scenario from
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// significant digits to retain, or 'exact'
    #[clap(short = 'p', long, default_value_t = Precision::default())]
    precision: Precision,

    /// update every cell of the table for every event
    #[clap(long)]
    no_prune: bool,

    /// print the distribution of the number of occurring events
    #[clap(short = 't', long)]
    table: bool,

    /// probabilities of the individual events, as decimal literals
    #[clap(allow_negative_numbers = true)]
    probabilities: Vec<String>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.file.is_none() && self.probabilities.is_empty()
            || self.file.is_some() && !self.probabilities.is_empty()
        {
            bail!("either the -f flag or a list of probabilities must be specified");
        }
        if self.file.is_none() && self.threshold.is_none() {
            bail!("the -n flag must be specified when probabilities are given inline");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let (threshold, probs) = read_scenario(&args)?;
    let engine = Engine::try_from(Config {
        precision: args.precision,
        prune: !args.no_prune,
    })?;
    debug!("config: {:?}, events: {}", engine.config(), probs.len());

    let prob = engine.at_least_n(threshold, &probs);
    info!(
        "probability of at least {threshold} of {} events: {prob}",
        probs.len()
    );

    if args.table {
        let distribution = engine.distribution(&probs);
        let table = tabulate_distribution(&distribution, TABLE_DIGITS);
        info!("\n{}", Console::default().render(&table));
    }
    Ok(())
}

fn read_scenario(args: &Args) -> anyhow::Result<(isize, Vec<BigDecimal>)> {
    if let Some(path) = args.file.as_ref() {
        let scenario = Scenario::from_json_file(path)
            .map_err(|err| anyhow!("cannot read scenario from {}: {err}", path.display()))?;
        let threshold = match args.threshold {
            Some(threshold) => threshold,
            None => isize::try_from(scenario.threshold)?,
        };
        return Ok((threshold, scenario.parse_probabilities()?));
    }
    match args.threshold {
        Some(threshold) => Ok((threshold, parse_probabilities(&args.probabilities[..])?)),
        None => unreachable!(),
    }
}
