use log::debug;
use serde::{Deserialize, Serialize};
use word_align::BuiltinNormalizer;

use crate::consts::DEFAULT_CONTEXT_RADIUS;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    #[serde(default = "default_normalizer")]
    pub normalizer: BuiltinNormalizer,

    /// Words shown on either side of a discrepancy.
    #[serde(default = "default_context_radius")]
    pub context_radius: usize,
}

fn default_normalizer() -> BuiltinNormalizer {
    let normalizer = BuiltinNormalizer::default();
    debug!("Using default normalizer: {normalizer}");
    normalizer
}

fn default_context_radius() -> usize {
    debug!("Using default context radius: {DEFAULT_CONTEXT_RADIUS}");
    DEFAULT_CONTEXT_RADIUS
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            normalizer: default_normalizer(),
            context_radius: default_context_radius(),
        }
    }
}
