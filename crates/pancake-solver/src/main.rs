//! CLI entry point for the pancake solver.
//!
//! Usage:
//!   pancake-solver solve <PROBLEM> [options]
//!   pancake-solver solve --stdin [options]
//!
//! A problem is the start stack followed by a mode token, e.g. `1b2b3b4b-a`
//! (`-a` best-first A*, `-b` breadth-first).
//!
//! Options:
//!   --costs            Always print g and h on each line
//!   --no-costs         Never print g and h
//!   --format <FORMAT>  text (default) or json
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default: warn).

use std::io::{self, Read};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pancake_solver::{Problem, SearchStats, Solution, Strategy, Trace};

#[derive(Parser)]
#[command(name = "pancake-solver")]
#[command(about = "Breadth-first and A* solver for the burnt pancake problem")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a problem such as 1b2b3b4b-a
    Solve {
        /// Start stack followed by -a (A*) or -b (breadth-first)
        #[arg(value_name = "PROBLEM")]
        problem: Option<String>,

        /// Read the problem from stdin instead
        #[arg(long)]
        stdin: bool,

        /// Print g and h on every line, whatever the strategy
        #[arg(long, conflicts_with = "no_costs")]
        costs: bool,

        /// Never print g and h
        #[arg(long)]
        no_costs: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON document printed with `--format json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Trace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<SearchStats>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            problem,
            stdin,
            costs,
            no_costs,
            format,
        } => {
            let text = if stdin {
                let mut buffer = String::new();
                if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                    eprintln!("Error reading from stdin: {}", e);
                    process::exit(1);
                }
                buffer
            } else if let Some(problem) = problem {
                problem
            } else {
                eprintln!("Error: Must provide either a problem string or --stdin");
                process::exit(1);
            };

            let problem: Problem = match text.parse() {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error parsing problem: {}", e);
                    process::exit(1);
                }
            };

            let mut config = problem.config();
            if costs || no_costs {
                config = config.with_costs(costs);
            }

            let result = pancake_solver::solve(&problem.stack, &config);

            match format {
                OutputFormat::Text => match &result {
                    Ok(solution) => {
                        println!("solution:\n");
                        println!("{}", solution.render(config.show_costs));
                    }
                    Err(e) => eprintln!("Error: {}", e),
                },
                OutputFormat::Json => {
                    let output = match &result {
                        Ok(solution) => format_solution(solution, config.show_costs),
                        Err(e) => SolveOutput {
                            solved: false,
                            strategy: config.strategy,
                            reason: Some(e.to_string()),
                            lines: Vec::new(),
                            moves: None,
                            cost: None,
                            trace: None,
                            stats: None,
                        },
                    };
                    match serde_json::to_string_pretty(&output) {
                        Ok(json) => println!("{}", json),
                        Err(e) => {
                            eprintln!("Error writing JSON output: {}", e);
                            process::exit(1);
                        }
                    }
                }
            }

            if result.is_err() {
                process::exit(1);
            }
        }
    }
}

fn format_solution(solution: &Solution, show_costs: bool) -> SolveOutput {
    SolveOutput {
        solved: true,
        strategy: solution.strategy,
        reason: None,
        lines: solution.trace.lines(show_costs),
        moves: Some(solution.move_count()),
        cost: Some(solution.total_cost()),
        trace: Some(solution.trace.clone()),
        stats: Some(solution.stats.clone()),
    }
}
