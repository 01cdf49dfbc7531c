//! Random trees for judge tests.
//!
//! Vertices `1..=n` are placed in a random order, and every vertex after the
//! first is attached to a uniformly random vertex placed before it. This
//! always gives a tree, but it is not a uniform sample over all labeled trees
//! on `n` vertices: the result is biased towards shallow trees. Edges are then
//! listed in random order, each with a random direction.
//!
//! ```
//! use judgekit::random::seeded;
//! use tree_gen::RandomTree;
//!
//! let tree = RandomTree::generate(&mut seeded(7), 4).unwrap();
//! assert_eq!(tree.edges().len(), 3);
//! assert!(tree.is_tree());
//! assert_eq!(RandomTree::generate(&mut seeded(7), 1).unwrap().to_string(), "1\n");
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

use std::fmt::{self, Display};

use rand::{seq::SliceRandom, Rng};
use rand_distr::Uniform;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    #[error("A tree needs at least one vertex")]
    NoVertices,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomTree {
    vertices: usize,
    edges: Vec<(usize, usize)>,
}

impl RandomTree {
    pub fn generate<R: Rng>(rng: &mut R, n: usize) -> Result<Self, GenerateError> {
        if n == 0 {
            return Err(GenerateError::NoVertices);
        }
        let mut edges = Vec::with_capacity(n - 1);
        if n > 1 {
            let mut p: Vec<usize> = (1..=n).collect();
            p.shuffle(rng);

            // p[i] hangs from some p[j] placed before it
            for i in 1..n {
                let j = rng.sample(Uniform::new(0, i));
                edges.push((p[i], p[j]));
            }

            edges.shuffle(rng);
            for edge in edges.iter_mut() {
                if rng.gen::<bool>() {
                    *edge = (edge.1, edge.0);
                }
            }
        }
        debug!(vertices = n, edges = edges.len(), "generated tree");
        let tree = RandomTree { vertices: n, edges };
        debug_assert!(tree.is_tree());
        Ok(tree)
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Exactly `n - 1` edges between vertices in `1..=n`, with no self-loops,
    /// that together connect every vertex.
    pub fn is_tree(&self) -> bool {
        if self.vertices == 0 || self.edges.len() != self.vertices - 1 {
            return false;
        }
        let mut sets = DisjointSet::new(self.vertices + 1);
        for &(u, v) in &self.edges {
            if u == v || !(1..=self.vertices).contains(&u) || !(1..=self.vertices).contains(&v) {
                return false;
            }
            // `n - 1` merges that never close a cycle leave one component
            if !sets.merge(u, v) {
                return false;
            }
        }
        true
    }
}

impl Display for RandomTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vertices)?;
        for (a, b) in &self.edges {
            writeln!(f, "{} {}", a, b)?;
        }
        Ok(())
    }
}

struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        DisjointSet { parent: (0..n).collect() }
    }

    fn find_root(&mut self, mut u: usize) -> usize {
        while self.parent[u] != u {
            self.parent[u] = self.parent[self.parent[u]];
            u = self.parent[u];
        }
        u
    }

    // Returns whether the two sets were different
    fn merge(&mut self, u: usize, v: usize) -> bool {
        let (u, v) = (self.find_root(u), self.find_root(v));
        if u == v {
            return false;
        }
        self.parent[v] = u;
        true
    }
}
