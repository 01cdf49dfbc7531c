use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use judgekit::{logging, random};
use tracing::info;
use tree_gen::RandomTree;

/// Prints a random tree: `n`, then `n - 1` lines with the endpoints of an
/// edge.
#[derive(Parser, Debug)]
#[command(name = "tree-gen", version)]
struct Args {
    /// Number of vertices
    #[arg(short = 'n')]
    n: usize,

    /// Seed for the random source. Derived from the command line when absent,
    /// so the same command always gives the same tree
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter, in `RUST_LOG` syntax
    #[arg(long, default_value = logging::DEFAULT_LEVEL, env = "RUST_LOG")]
    log_level: String,
}

// Spelling of `log_level` on the command line
const LOG_LEVEL_FLAG: &str = "--log-level";

impl Args {
    /// The explicit seed, or a digest of `raw` (the arguments after the
    /// program name) leaving out options that don't change the tree.
    fn seed<I, S>(&self, raw: I) -> u64
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.seed.unwrap_or_else(|| {
            let generating = random::without_flags(raw, &[LOG_LEVEL_FLAG]);
            random::seed_from_args(generating)
        })
    }
}

fn generate<W: Write>(args: &Args, seed: u64, out: W) -> Result<()> {
    info!(n = args.n, seed, "generating tree");
    let tree = RandomTree::generate(&mut random::seeded(seed), args.n)
        .with_context(|| format!("generating a tree with n = {}", args.n))?;

    let mut out = BufWriter::new(out);
    write!(out, "{}", tree).context("writing tree")?;
    out.flush().context("writing tree")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let seed = args.seed(std::env::args().skip(1));
    generate(&args, seed, io::stdout().lock())
}
