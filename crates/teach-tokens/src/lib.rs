//! Prompt token estimation

use std::sync::Arc;

use anyhow::{Context, Result};
use tiktoken_rs::CoreBPE;

/// Token estimator using tiktoken (cl100k_base encoding).
///
/// Counts are estimates for budgeting only; the target model may tokenize
/// differently.
#[derive(Clone)]
pub struct TokenEstimator {
    bpe: Arc<CoreBPE>,
}

impl TokenEstimator {
    pub fn new() -> Result<Self> {
        let bpe = tiktoken_rs::cl100k_base().context("Failed to load cl100k_base encoding")?;
        Ok(Self { bpe: Arc::new(bpe) })
    }

    /// Estimate token count for a single string
    pub fn estimate(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

impl std::fmt::Debug for TokenEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEstimator")
            .field("encoding", &"cl100k_base")
            .finish()
    }
}
