//! Configuration for moisture propagation.

use serde::{Deserialize, Serialize};

/// Configuration for the moisture flood fill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoistureConfig {
    /// Fraction of moisture lost per hop (0..1).
    pub decay: f32,
}

impl Default for MoistureConfig {
    fn default() -> Self {
        Self { decay: 0.15 }
    }
}
