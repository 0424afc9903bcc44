use crate::error::{EngineError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// What happens to the rank held by documents without outgoing links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingPolicy {
    /// Mass is not forwarded; scores may sum to less than 1.
    #[default]
    Leak,
    /// Mass is spread uniformly over every document before damping.
    Redistribute,
}

/// Ordering applied to search hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitOrder {
    /// Descending PageRank, ties by first appearance in the postings.
    #[default]
    Score,
    /// Postings order as indexed.
    Postings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub damping: f64,
    pub iterations: usize,
    /// Stop iterating once the L1 change between rounds drops below this.
    pub tolerance: Option<f64>,
    pub dangling: DanglingPolicy,
    pub max_documents: Option<usize>,
    pub dedup_hits: bool,
    pub hit_order: HitOrder,
    pub stats_top_n: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 20,
            tolerance: None,
            dangling: DanglingPolicy::Leak,
            max_documents: None,
            dedup_hits: true,
            hit_order: HitOrder::Score,
            stats_top_n: 5,
        }
    }
}

impl EngineConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
        let cfg: EngineConfig = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parsing config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        if let Some(tol) = self.tolerance {
            check_tolerance(tol)?;
        }
        Ok(())
    }
}

pub(crate) fn check_damping(d: f64) -> Result<()> {
    if d.is_finite() && d > 0.0 && d < 1.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidDamping(d))
    }
}

pub(crate) fn check_tolerance(tol: f64) -> Result<()> {
    if tol.is_finite() && tol > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidTolerance(tol))
    }
}
