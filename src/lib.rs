//! Support code shared by judge tools: tokenized reading of named input
//! streams, a seeded random source and the verdict a checker ends with.
//!
//! Example usage:
//! ```
//! use judgekit::stream::{InStream, StreamKind};
//!
//! let mut inf = InStream::from_reader(StreamKind::Input, "3 2\n1 2\n".as_bytes());
//! let n: usize = inf.read_int().unwrap();
//! let m: usize = inf.read_int().unwrap();
//! assert_eq!((n, m), (3, 2));
//! assert!(!inf.seek_eof().unwrap());
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod logging;
pub mod random;
pub mod stream;
#[cfg(feature = "quickcheck")]
pub mod testing;
pub mod verdict;
