//! Checker for problems whose answer is any topological order of a directed
//! graph.
//!
//! The test input is `n m` followed by `m` directed edges `u v` (vertices are
//! numbered `1..=n`, and `u` must come before `v`). The participant prints a
//! permutation of `1..=n`; anything after the first `n` integers is ignored.
//!
//! Checks stop at the first problem found:
//! 1. the output has fewer than `n` integers,
//! 2. a value is outside `1..=n`,
//! 3. a value is repeated,
//! 4. a value is missing,
//! 5. an edge goes backwards in the order (edges are checked in input order).
//!
//! ```
//! use judgekit::stream::{InStream, StreamKind};
//! use topo_checker::judge;
//!
//! let inf = InStream::from_reader(StreamKind::Input, "3 2\n1 2\n2 3\n".as_bytes());
//! let ouf = InStream::from_reader(StreamKind::Output, "2 1 3\n".as_bytes());
//! let verdict = judge(inf, ouf);
//! assert_eq!(
//!     verdict.message(),
//!     "Edge (1 -> 2) violates topological order: pos[1]=1 >= pos[2]=0"
//! );
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

use std::io::BufRead;

use judgekit::{
    stream::{InStream, StreamError},
    verdict::Verdict,
};
use thiserror::Error;
use tracing::{debug, trace};

pub const ACCEPTED: &str = "Valid topological order";

/// Why a participant's answer is wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Participant output ended early: expected {expected} integers for permutation, got {got}")]
    EndedEarly { expected: usize, got: usize },

    /// `position` is 1-based
    #[error("Value out of range in permutation at position {position}: {value} (should be 1..{n})")]
    OutOfRange { position: usize, value: i64, n: usize },

    #[error("Duplicate value {0} in permutation")]
    Duplicate(usize),

    #[error("Missing value {0} in permutation")]
    Missing(usize),

    /// Positions are 0-based
    #[error("Edge ({u} -> {v}) violates topological order: pos[{u}]={pu} >= pos[{v}]={pv}")]
    EdgeOrder { u: usize, v: usize, pu: usize, pv: usize },
}

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error("Edge {index} ({u} -> {v}) has an endpoint outside 1..{n}")]
    InvalidEdge { index: usize, u: usize, v: usize, n: usize },
}

impl CheckError {
    pub fn verdict(&self) -> Verdict {
        match self {
            CheckError::Rejected(r) => Verdict::WrongAnswer(r.to_string()),
            CheckError::Stream(e) => Verdict::from_stream_error(e),
            CheckError::InvalidEdge { .. } => Verdict::Fail(self.to_string()),
        }
    }
}

/// The directed graph from the test input. Read once and never changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    vertices: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Fails if an edge has an endpoint outside `1..=vertices`.
    pub fn new(vertices: usize, edges: Vec<(usize, usize)>) -> Result<Self, CheckError> {
        let valid = |v: usize| (1..=vertices).contains(&v);
        let invalid = edges.iter().enumerate().find(|&(_, &(u, v))| !valid(u) || !valid(v));
        if let Some((i, &(u, v))) = invalid {
            return Err(CheckError::InvalidEdge { index: i + 1, u, v, n: vertices });
        }
        Ok(Graph { vertices, edges })
    }

    /// Read `n m` and `m` edges. The test input is trusted, but an endpoint
    /// outside `1..=n` is still reported instead of being used as an index.
    pub fn read<R: BufRead>(inf: &mut InStream<R>) -> Result<Self, CheckError> {
        let vertices: usize = inf.read_int()?;
        let m: usize = inf.read_int()?;
        let mut edges = Vec::with_capacity(m);
        for _ in 0..m {
            let u: usize = inf.read_int()?;
            let v: usize = inf.read_int()?;
            edges.push((u, v));
        }
        debug!(vertices, edges = edges.len(), "read graph");
        Graph::new(vertices, edges)
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

/// Read the first `n` integers of the participant's output. Stops as soon as
/// the output runs out, without trying to read past it.
pub fn read_candidate<R: BufRead>(ouf: &mut InStream<R>, n: usize) -> Result<Vec<i64>, CheckError> {
    let mut values = Vec::with_capacity(n);
    for got in 0..n {
        if ouf.seek_eof()? {
            return Err(Rejection::EndedEarly { expected: n, got }.into());
        }
        values.push(ouf.read_int()?);
    }
    Ok(values)
}

/// A sequence known to contain every vertex `1..=n` exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    order: Vec<usize>,
}

impl Permutation {
    pub fn positions(&self) -> PositionMap {
        PositionMap::new(self)
    }
}

/// Check that `values` is a permutation of `1..=n`.
///
/// Values are scanned in order, so the first out of range or repeated value
/// is the one reported. Missing values are only looked for after the scan.
pub fn validate_permutation(values: &[i64], n: usize) -> Result<Permutation, Rejection> {
    let mut seen = vec![false; n + 1];
    let mut order = Vec::with_capacity(values.len());
    for (i, &value) in values.iter().enumerate() {
        let v = match usize::try_from(value) {
            Ok(v) if (1..=n).contains(&v) => v,
            _ => return Err(Rejection::OutOfRange { position: i + 1, value, n }),
        };
        if seen[v] {
            return Err(Rejection::Duplicate(v));
        }
        seen[v] = true;
        order.push(v);
    }
    if let Some(v) = (1..=n).find(|&v| !seen[v]) {
        return Err(Rejection::Missing(v));
    }
    Ok(Permutation { order })
}

/// Maps every vertex to its 0-based index in a permutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionMap {
    // Index 0 is unused, vertices start at 1
    pos: Vec<usize>,
}

impl PositionMap {
    pub fn new(p: &Permutation) -> Self {
        let mut pos = vec![0; p.order.len() + 1];
        for (i, &v) in p.order.iter().enumerate() {
            pos[v] = i;
        }
        PositionMap { pos }
    }

    pub fn get(&self, vertex: usize) -> usize {
        self.pos[vertex]
    }
}

/// Every edge must go forward in the order. The first edge, in input order,
/// that doesn't is reported.
pub fn check_edges(graph: &Graph, positions: &PositionMap) -> Result<(), Rejection> {
    for &(u, v) in &graph.edges {
        let (pu, pv) = (positions.get(u), positions.get(v));
        trace!(u, v, pu, pv, "edge");
        if pu >= pv {
            return Err(Rejection::EdgeOrder { u, v, pu, pv });
        }
    }
    Ok(())
}

/// Check the participant's output against an already read graph.
pub fn check<R: BufRead>(graph: &Graph, ouf: &mut InStream<R>) -> Result<(), CheckError> {
    let values = read_candidate(ouf, graph.vertices)?;
    let permutation = validate_permutation(&values, graph.vertices)?;
    check_edges(graph, &permutation.positions())?;
    Ok(())
}

/// Read the graph from `inf`, check `ouf` against it and decide the verdict.
pub fn judge<I: BufRead, O: BufRead>(mut inf: InStream<I>, mut ouf: InStream<O>) -> Verdict {
    let result = Graph::read(&mut inf).and_then(|graph| check(&graph, &mut ouf));
    match result {
        Ok(()) => Verdict::Ok(ACCEPTED.to_string()),
        Err(e) => {
            debug!(error = %e, "answer not accepted");
            e.verdict()
        }
    }
}
