use crate::config::{check_damping, check_tolerance, DanglingPolicy};
use crate::error::{EngineError, Result};
use crate::DocId;
use serde::Serialize;
use std::cmp::Ordering;

/// Anything that can report the current importance of a document.
pub trait RankSource {
    fn rank_of(&self, doc_id: DocId) -> Option<f64>;
}

/// Parameters for a single PageRank run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankParams {
    pub damping: f64,
    pub iterations: usize,
    pub tolerance: Option<f64>,
    pub dangling: DanglingPolicy,
}

impl PageRankParams {
    /// Fixed-iteration run with the rank-leaking dangling behaviour.
    pub fn new(damping: f64, iterations: usize) -> Self {
        Self { damping, iterations, tolerance: None, dangling: DanglingPolicy::Leak }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageRankReport {
    pub iterations: usize,
    /// L1 distance between the last two vectors (0 when no iteration ran).
    pub delta: f64,
    pub converged: bool,
}

/// Directed multigraph over `[0, num_docs)` with a PageRank score per vertex.
#[derive(Debug, Default, Clone)]
pub struct LinkGraph {
    // Stored in discovery order; exposed most-recent-first.
    adjacency: Vec<Vec<DocId>>,
    scores: Vec<f64>,
    edges: usize,
    capacity: Option<usize>,
}

impl LinkGraph {
    pub fn new() -> Self { Self::default() }

    /// A graph that refuses to be initialized with more than `capacity` vertices.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self { capacity: Some(capacity), ..Self::default() }
    }

    /// Reset to `num_docs` vertices, no edges and zeroed scores.
    pub fn initialize(&mut self, num_docs: usize) -> Result<()> {
        if let Some(capacity) = self.capacity {
            if num_docs > capacity {
                return Err(EngineError::CapacityExceeded { requested: num_docs, capacity });
            }
        }
        self.adjacency = vec![Vec::new(); num_docs];
        self.scores = vec![0.0; num_docs];
        self.edges = 0;
        Ok(())
    }

    pub fn num_docs(&self) -> usize { self.adjacency.len() }

    pub fn edge_count(&self) -> usize { self.edges }

    /// Append `source -> target`. Duplicates and self-loops are kept.
    pub fn add_edge(&mut self, source: DocId, target: DocId) -> Result<()> {
        self.check(source)?;
        self.check(target)?;
        self.adjacency[source as usize].push(target);
        self.edges += 1;
        Ok(())
    }

    /// Outgoing targets of `source`, most recently added first.
    pub fn out_links(&self, source: DocId) -> Result<impl Iterator<Item = DocId> + '_> {
        self.check(source)?;
        Ok(self.adjacency[source as usize].iter().rev().copied())
    }

    /// Vertices without outgoing edges, ascending.
    pub fn dangling(&self) -> Vec<DocId> {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, out)| out.is_empty())
            .map(|(i, _)| i as DocId)
            .collect()
    }

    pub fn score(&self, doc_id: DocId) -> Result<f64> {
        self.check(doc_id)?;
        Ok(self.scores[doc_id as usize])
    }

    pub fn scores(&self) -> &[f64] { &self.scores }

    /// Fixed-iteration PageRank: exactly `iterations` rounds, rank leaks at dangling vertices.
    pub fn compute_pagerank(&mut self, damping: f64, iterations: usize) -> Result<PageRankReport> {
        self.compute_pagerank_with(&PageRankParams::new(damping, iterations))
    }

    /// Power iteration. Every call restarts from the uniform vector.
    ///
    /// Each edge `u -> v` forwards the whole of `score[u]` (no division by
    /// out-degree), then `score[i] = d * next[i] + (1 - d) / N`.
    pub fn compute_pagerank_with(&mut self, params: &PageRankParams) -> Result<PageRankReport> {
        check_damping(params.damping)?;
        if let Some(tol) = params.tolerance {
            check_tolerance(tol)?;
        }

        let n = self.num_docs();
        if n == 0 {
            return Ok(PageRankReport { iterations: 0, delta: 0.0, converged: true });
        }
        let d = params.damping;
        let teleport = (1.0 - d) / n as f64;
        let dangling = match params.dangling {
            DanglingPolicy::Leak => Vec::new(),
            DanglingPolicy::Redistribute => self.dangling(),
        };

        let mut score = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut report = PageRankReport { iterations: 0, delta: 0.0, converged: false };

        for _ in 0..params.iterations {
            next.iter_mut().for_each(|x| *x = 0.0);
            for (u, out) in self.adjacency.iter().enumerate() {
                for &v in out.iter().rev() {
                    next[v as usize] += score[u];
                }
            }
            if !dangling.is_empty() {
                let share = dangling.iter().map(|&u| score[u as usize]).sum::<f64>() / n as f64;
                next.iter_mut().for_each(|x| *x += share);
            }

            let mut delta = 0.0;
            for (s, nx) in score.iter_mut().zip(next.iter()) {
                let updated = d * nx + teleport;
                delta += (updated - *s).abs();
                *s = updated;
            }
            report.iterations += 1;
            report.delta = delta;

            if let Some(tol) = params.tolerance {
                if delta < tol {
                    report.converged = true;
                    break;
                }
            }
        }

        self.scores = score;
        tracing::debug!(
            num_docs = n,
            edges = self.edges,
            iterations = report.iterations,
            delta = report.delta,
            converged = report.converged,
            "pagerank computed"
        );
        Ok(report)
    }

    /// The `n` best documents by score, descending, ties by ascending id.
    pub fn top_n(&self, n: usize) -> Vec<(DocId, f64)> {
        let mut ranked: Vec<(DocId, f64)> =
            self.scores.iter().enumerate().map(|(i, &s)| (i as DocId, s)).collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then(a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }

    fn check(&self, doc_id: DocId) -> Result<()> {
        if (doc_id as usize) < self.num_docs() {
            Ok(())
        } else {
            Err(EngineError::DocOutOfRange { doc_id: doc_id as i64, num_docs: self.num_docs() })
        }
    }

    #[cfg(test)]
    pub(crate) fn set_scores(&mut self, scores: Vec<f64>) {
        assert_eq!(scores.len(), self.num_docs());
        self.scores = scores;
    }
}

impl RankSource for LinkGraph {
    fn rank_of(&self, doc_id: DocId) -> Option<f64> {
        self.scores.get(doc_id as usize).copied()
    }
}
