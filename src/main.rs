//! Mastermind Solver - CLI
//!
//! Builds strategy decision trees over the full codeword universe, plays
//! single games step by step and lists non-equivalent guesses.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{TreeConfig, enumerate_canonical, random_secret, run_tree_analysis, simulate_game},
    core::{Codeword, Engine},
    equivalence::FilterType,
    output::{print_canonical, print_settings, print_simulations, print_tree_reports},
    solver::{SearchOptions, StrategyType},
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind strategy analyzer with symmetry pruning and full decision trees",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pegs
    #[arg(short, long, global = true, default_value_t = 4)]
    pegs: usize,

    /// Number of colors
    #[arg(short, long, global = true, default_value_t = 6)]
    colors: usize,

    /// Forbid repeated colors in a codeword
    #[arg(long, global = true)]
    no_repeat: bool,

    /// Strategies, comma separated: simple, minmax, minavg, entropy, entropy*, parts, or all
    #[arg(short, long, global = true, default_value = "all")]
    strategy: String,

    /// Only guess codewords that can still be the secret
    #[arg(long, global = true)]
    possibility_only: bool,

    /// Disable the shortcut for obvious guesses
    #[arg(long, global = true)]
    no_obvious: bool,

    /// Disable symmetry pruning of equivalent guesses
    #[arg(long, global = true)]
    no_symmetry: bool,

    /// Worker threads (default: one per core)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build each strategy's tree and print the depth frequency table (default)
    Tree {
        /// Depth buckets; deeper secrets are counted in the last one
        #[arg(short = 'm', long, default_value_t = 10)]
        max_depth: usize,
    },

    /// Play one game per strategy against a secret
    Simulate {
        /// Secret codeword, one digit per peg (random when omitted)
        #[arg(long)]
        secret: Option<String>,
    },

    /// List non-equivalent guesses level by level
    Canonical {
        /// Guesses played before the last listed level
        #[arg(short, long, default_value_t = 1)]
        depth: usize,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

/// Parse the `--strategy` list
fn parse_strategies(list: &str) -> Result<Vec<StrategyType>> {
    if list.eq_ignore_ascii_case("all") {
        return Ok(StrategyType::all());
    }
    let strategies = list
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(StrategyType::from_name)
        .collect::<Result<Vec<_>, _>>()?;
    if strategies.is_empty() {
        anyhow::bail!("no strategy given");
    }
    Ok(strategies)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let engine = Engine::try_new(cli.pegs, cli.colors, !cli.no_repeat)?;
    let strategies = parse_strategies(&cli.strategy)?;
    let options = SearchOptions {
        optimize_obvious: !cli.no_obvious,
        possibility_only: cli.possibility_only,
    };
    let symmetry = !cli.no_symmetry;
    debug!(
        pegs = cli.pegs,
        colors = cli.colors,
        repeatable = !cli.no_repeat,
        universe = engine.universe().len(),
        "engine ready"
    );

    // Default to the tree analysis if no command given
    let command = cli.command.unwrap_or(Commands::Tree { max_depth: 10 });

    match command {
        Commands::Tree { max_depth } => {
            run_tree_command(&engine, &strategies, options, symmetry, max_depth)
        }
        Commands::Simulate { secret } => {
            run_simulate_command(&engine, &strategies, options, symmetry, secret.as_deref())
        }
        Commands::Canonical { depth } => {
            run_canonical_command(&engine, symmetry, depth);
            Ok(())
        }
    }
}

fn run_tree_command(
    engine: &Engine,
    strategies: &[StrategyType],
    options: SearchOptions,
    symmetry: bool,
    max_depth: usize,
) -> Result<()> {
    let filter = FilterType::new(engine.rules(), symmetry);
    print_settings(engine.rules(), &options, filter.name());

    let config = TreeConfig {
        max_depth,
        symmetry,
        options,
    };
    let reports = run_tree_analysis(engine, strategies, &config)?;
    print_tree_reports(&reports, config.max_depth);
    Ok(())
}

fn run_simulate_command(
    engine: &Engine,
    strategies: &[StrategyType],
    options: SearchOptions,
    symmetry: bool,
    secret: Option<&str>,
) -> Result<()> {
    let secret = match secret {
        Some(text) => Codeword::parse(text, engine.rules())?,
        None => random_secret(engine)?,
    };

    let mut results = Vec::with_capacity(strategies.len());
    for &strategy in strategies {
        let filter = FilterType::new(engine.rules(), symmetry);
        results.push(simulate_game(engine, strategy, filter, options, &secret)?);
    }

    print_simulations(&results, engine.rules());
    Ok(())
}

fn run_canonical_command(engine: &Engine, symmetry: bool, depth: usize) {
    let filter = FilterType::new(engine.rules(), symmetry);
    print_canonical(&enumerate_canonical(engine, &filter, depth));
}

#[cfg(test)]
mod tests {
    use super::*;
    use mastermind_solver::solver::Strategy;

    #[test]
    fn strategy_lists() {
        assert_eq!(parse_strategies("all").unwrap().len(), StrategyType::NAMES.len());
        let picked = parse_strategies("minmax, entropy*").unwrap();
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[1].name(), "entropy*");
        assert!(parse_strategies("minmax,bogus").is_err());
        assert!(parse_strategies(",").is_err());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["mastermind"]);
        assert_eq!((cli.pegs, cli.colors), (4, 6));
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["mastermind", "canonical", "--pegs", "3", "-d", "2"]);
        assert_eq!(cli.pegs, 3);
        assert!(matches!(cli.command, Some(Commands::Canonical { depth: 2 })));
    }
}
