//! The result a checker ends with.

use std::{
    fmt::{self, Display},
    fs,
    io::{self, Write},
    path::Path,
    process,
};

use tracing::info;

use crate::stream::{StreamError, StreamKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Ok(String),
    WrongAnswer(String),
    /// The participant's output could not even be read as the expected tokens
    PresentationError(String),
    /// Something is wrong on the jury side, e.g. an unreadable test input
    Fail(String),
}

impl Verdict {
    /// An error on the participant's output is their presentation error,
    /// anywhere else it's a failure of the judge.
    pub fn from_stream_error(err: &StreamError) -> Self {
        match err.stream() {
            StreamKind::Output => Verdict::PresentationError(err.to_string()),
            StreamKind::Input | StreamKind::Answer => Verdict::Fail(err.to_string()),
        }
    }

    /// Process exit code the judge expects for this verdict
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Ok(_) => 0,
            Verdict::WrongAnswer(_) => 1,
            Verdict::PresentationError(_) => 2,
            Verdict::Fail(_) => 3,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Verdict::Ok(m)
            | Verdict::WrongAnswer(m)
            | Verdict::PresentationError(m)
            | Verdict::Fail(m) => m.as_str(),
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Verdict::Ok(_) => "ok",
            Verdict::WrongAnswer(_) => "wrong answer",
            Verdict::PresentationError(_) => "wrong output format",
            Verdict::Fail(_) => "FAIL",
        }
    }

    /// Write the verdict line to `log`, and to the file `result` if given.
    /// Returns the exit code to end with; a result file that can't be
    /// written turns any verdict into a failure.
    pub fn report<W: Write>(&self, mut log: W, result: Option<&Path>) -> i32 {
        info!(verdict = self.tag(), exit_code = self.exit_code(), "checker finished");
        let _ = writeln!(log, "{}", self);
        if let Some(path) = result {
            if let Err(e) = fs::write(path, format!("{}\n", self)) {
                let _ = writeln!(log, "FAIL could not write result file {}: {}", path.display(), e);
                return Verdict::Fail(String::new()).exit_code();
            }
        }
        self.exit_code()
    }

    /// [`report`](Verdict::report) on stderr, then exit the process.
    pub fn quit(self, result: Option<&Path>) -> ! {
        let code = self.report(io::stderr(), result);
        process::exit(code)
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tag(), self.message())
    }
}
