use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use judgekit::{
    logging,
    stream::{InStream, StreamKind},
    verdict::Verdict,
};
use tracing::error;

/// Checks that the participant printed a topological order of the input graph.
#[derive(Parser, Debug)]
#[command(name = "topo-checker", version)]
struct Args {
    /// Test input: `n m` followed by `m` directed edges
    input: PathBuf,

    /// Jury answer. Opened, but any valid order is accepted so it's not read
    answer: PathBuf,

    /// Participant output
    output: PathBuf,

    /// File that also receives the verdict line
    result: Option<PathBuf>,

    /// Log filter, in `RUST_LOG` syntax
    #[arg(long, default_value = logging::DEFAULT_LEVEL, env = "RUST_LOG")]
    log_level: String,
}

fn run(args: &Args) -> Result<Verdict> {
    let inf = InStream::open(StreamKind::Input, &args.input)
        .with_context(|| format!("opening input {}", args.input.display()))?;
    let _ans = InStream::open(StreamKind::Answer, &args.answer)
        .with_context(|| format!("opening answer {}", args.answer.display()))?;
    let ouf = InStream::open(StreamKind::Output, &args.output)
        .with_context(|| format!("opening output {}", args.output.display()))?;
    Ok(topo_checker::judge(inf, ouf))
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            Verdict::Fail("invalid arguments".to_string()).quit(None)
        }
        Err(e) => e.exit(),
    };
    logging::init(&args.log_level);

    let verdict = run(&args).unwrap_or_else(|e| {
        error!("{:#}", e);
        Verdict::Fail(format!("{:#}", e))
    });
    verdict.quit(args.result.as_deref())
}
