//! Tokenized reading of the streams a judge tool works with.
//!
//! A token is a maximal run of non-whitespace bytes. Streams are read lazily,
//! so a checker that stops early never looks at the rest of a participant's
//! output.

use std::{
    fmt::{self, Display},
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use thiserror::Error;
use tracing::debug;

/// Which of the judge's streams a reader is attached to. Errors on the
/// participant's stream are their fault, errors on the others are ours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamKind {
    /// The test input, as given to the participant
    Input,
    /// The jury's reference answer
    Answer,
    /// The participant's output
    Output,
}

impl Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StreamKind::Input => "input",
            StreamKind::Answer => "answer",
            StreamKind::Output => "output",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Unexpected end of file in {stream}: expected {expected}")]
    UnexpectedEof { stream: StreamKind, expected: &'static str },

    #[error("Expected {expected} in {stream}, found \"{token}\"")]
    Malformed { stream: StreamKind, expected: &'static str, token: String },

    #[error("Failed to read {stream}: {source}")]
    Io {
        stream: StreamKind,
        #[source]
        source: io::Error,
    },
}

impl StreamError {
    /// The stream the error happened on
    pub fn stream(&self) -> StreamKind {
        match self {
            StreamError::UnexpectedEof { stream, .. }
            | StreamError::Malformed { stream, .. }
            | StreamError::Io { stream, .. } => *stream,
        }
    }
}

#[inline]
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

pub struct InStream<R> {
    kind: StreamKind,
    reader: R,
}

impl InStream<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(kind: StreamKind, path: P) -> Result<Self, StreamError> {
        let path = path.as_ref();
        debug!(stream = %kind, path = %path.display(), "opening stream");
        let file = File::open(path).map_err(|source| StreamError::Io { stream: kind, source })?;
        Ok(InStream { kind, reader: BufReader::new(file) })
    }
}

impl<R: BufRead> InStream<R> {
    pub fn from_reader(kind: StreamKind, reader: R) -> Self {
        InStream { kind, reader }
    }

    // Consume whitespace. Returns `false` if the stream ended before any
    // other byte was found.
    fn skip_whitespace(&mut self) -> Result<bool, StreamError> {
        let stream = self.kind;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => return Err(StreamError::Io { stream, source }),
            };
            if available.is_empty() {
                return Ok(false);
            }
            let blank = available.iter().take_while(|&&c| is_whitespace(c)).count();
            let found = blank < available.len();
            self.reader.consume(blank);
            if found {
                return Ok(true);
            }
        }
    }

    /// Skips whitespace and reports whether the stream is exhausted.
    pub fn seek_eof(&mut self) -> Result<bool, StreamError> {
        Ok(!self.skip_whitespace()?)
    }

    /// Read the next token, failing with `UnexpectedEof` if there is none.
    pub fn read_token(&mut self) -> Result<String, StreamError> {
        if !self.skip_whitespace()? {
            return Err(StreamError::UnexpectedEof { stream: self.kind, expected: "a token" });
        }
        let stream = self.kind;
        let mut token = Vec::new();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => return Err(StreamError::Io { stream, source }),
            };
            if available.is_empty() {
                break;
            }
            let len = available.iter().take_while(|&&c| !is_whitespace(c)).count();
            let done = len < available.len();
            token.extend_from_slice(&available[..len]);
            self.reader.consume(len);
            if done {
                break;
            }
        }
        Ok(String::from_utf8_lossy(&token).into_owned())
    }

    /// Read the next token as an integer of type `T`.
    pub fn read_int<T: FromStr>(&mut self) -> Result<T, StreamError> {
        let token = match self.read_token() {
            Ok(token) => token,
            Err(StreamError::UnexpectedEof { stream, .. }) => {
                return Err(StreamError::UnexpectedEof { stream, expected: "an integer" });
            }
            Err(e) => return Err(e),
        };
        token.parse().or(Err(StreamError::Malformed {
            stream: self.kind,
            expected: "an integer",
            token,
        }))
    }
}
