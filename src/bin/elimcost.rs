use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use elimcost::report::{write_comparison, write_estimate, write_estimates, write_table, TableOptsBuilder};
use elimcost::{Comparison, Method};
use std::io::{self, Write};

const DEFAULT_N: i64 = 100;

/// Operation count estimates for solving Ax = b.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimated operations for one system size
    Estimate(EstimateArgs),

    /// Estimates plus a comparison of the two methods
    Compare(SizeArgs),

    /// Sweep over a range of system sizes
    Table(TableArgs),
}

#[derive(Args)]
struct SizeArgs {
    /// Matrix dimension.
    #[arg(default_value_t = DEFAULT_N, allow_negative_numbers = true)]
    n: i64,
}

#[derive(Args)]
struct EstimateArgs {
    #[command(flatten)]
    size: SizeArgs,

    /// Only report this method.
    #[arg(short, long)]
    method: Option<Method>,
}

#[derive(Args)]
struct TableArgs {
    /// First dimension.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    start: i64,

    /// Last dimension (inclusive).
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    end: i64,

    /// Increment between dimensions.
    #[arg(long, default_value_t = 1)]
    step: i64,
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_level(false)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match execute(&cli, &mut io::stdout().lock()) {
        Ok(_) => {
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(2);
        }
    }
}

fn execute(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        None => write_estimates(out, DEFAULT_N)?,
        Some(Commands::Estimate(args)) => match args.method {
            Some(method) => write_estimate(out, method, args.size.n)?,
            None => write_estimates(out, args.size.n)?,
        },
        Some(Commands::Compare(args)) => {
            write_estimates(out, args.n)?;
            write_comparison(out, &Comparison::new(args.n))?;
        }
        Some(Commands::Table(args)) => {
            let opts = TableOptsBuilder::default()
                .start(args.start)
                .end(args.end)
                .step(args.step)
                .build()?;
            log::debug!("table sweep: {:?}", opts);
            write_table(out, &opts)?;
        }
    }
    out.flush()?;
    Ok(())
}
