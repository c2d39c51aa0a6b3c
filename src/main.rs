use clap::{Parser, Subcommand};
use nqueens::board::format_columns;
use nqueens::menu::{DEFAULT_SIZES, Menu};
use nqueens::search::{
    EstimateConfig, ParallelConfig, count_nodes, n_queens, run_estimates, run_parallel_estimate,
};
use std::io::{self, Write};
use std::time::Duration;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "nqueens")]
#[command(about = "N-Queens backtracking search and Monte Carlo tree-size estimation")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Enable verbose (debug) logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every solution with backtracking
    Solve {
        /// Board size N
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Print only the number of solutions
        #[arg(long)]
        count_only: bool,
        /// Print search statistics after the solutions
        #[arg(long)]
        stats: bool,
    },
    /// Estimate the backtracking tree size with Knuth's Monte Carlo method
    Estimate {
        /// Board size N
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Number of independent trials to average
        #[arg(long, short, default_value = "20", allow_negative_numbers = true)]
        trials: i64,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
        /// Number of worker threads (runs sequentially when omitted)
        #[arg(long, short = 'j')]
        cores: Option<usize>,
        /// Stop starting new trials after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Print every trial's estimate
        #[arg(long)]
        each: bool,
    },
    /// Count the nodes the exhaustive search visits
    Nodes {
        /// Board size N
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Interactive menu
    Menu {
        /// Random seed for the estimator
        #[arg(long)]
        seed: Option<u64>,
        /// Board sizes offered by the solve prompt
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
        sizes: Vec<i64>,
    },
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result: Result<(), Box<dyn std::error::Error>> = match args.command {
        Commands::Solve {
            n,
            count_only,
            stats,
        } => solve(n, count_only, stats),
        Commands::Estimate {
            n,
            trials,
            seed,
            cores,
            timeout,
            each,
        } => {
            let options = EstimateOptions {
                n,
                trials,
                seed,
                cores,
                timeout: timeout.map(Duration::from_secs),
                each,
                verbose: args.verbose,
            };
            estimate(&options)
        }
        Commands::Nodes { n } => count_nodes(n)
            .map(|nodes| println!("{}", nodes))
            .map_err(Into::into),
        Commands::Menu { seed, sizes } => {
            let stdin = io::stdin();
            let mut menu = Menu::new(stdin.lock(), io::stdout())
                .with_sizes(sizes)
                .with_seed_option(seed);
            menu.run().map_err(Into::into)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// --- Exhaustive Search ---

fn solve(n: i64, count_only: bool, show_stats: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut write_error = None;

    let stats = n_queens(n, |cols| {
        if count_only || write_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(out, "{}", format_columns(cols)) {
            write_error = Some(e);
        }
    })?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    if count_only {
        writeln!(out, "{}", stats.solutions_found)?;
    }
    if show_stats {
        writeln!(out, "\nSearch Statistics:")?;
        for line in stats.format_summary().lines() {
            writeln!(out, "  {}", line)?;
        }
    }
    out.flush()?;
    Ok(())
}

// --- Monte Carlo Estimation ---

/// Options for the estimate command
struct EstimateOptions {
    n: i64,
    trials: i64,
    seed: Option<u64>,
    cores: Option<usize>,
    timeout: Option<Duration>,
    each: bool,
    verbose: bool,
}

fn estimate(options: &EstimateOptions) -> Result<(), Box<dyn std::error::Error>> {
    let report = match options.cores {
        Some(cores) => {
            let config = ParallelConfig::default()
                .with_workers(cores)
                .with_seed_option(options.seed)
                .with_timeout_option(options.timeout);
            run_parallel_estimate(options.n, options.trials, &config)?
        }
        None => {
            let config = EstimateConfig::default()
                .with_trials(options.trials)
                .with_seed_option(options.seed)
                .with_timeout_option(options.timeout)
                .with_verbose(options.verbose);
            run_estimates(options.n, &config)?
        }
    };

    if options.each {
        for (i, estimate) in report.estimates.iter().enumerate() {
            println!("{}. Estimate was: {}.", i, estimate);
        }
    }
    if report.timed_out() {
        eprintln!(
            "Timed out: {} of {} trials completed",
            report.trials_completed(),
            report.trials_requested
        );
    }
    println!("Average was: {}.", report.mean());

    if options.verbose {
        println!("\nEstimate Report:");
        for line in report.format_summary().lines() {
            println!("  {}", line);
        }
    }
    Ok(())
}
