/**
 * @file config.rs
 * @author Krisna Pranav
 * @brief lazy-iter[config]
 * @version 1.0
 * @date 2024-11-25
 *
 * @copyright Copyright (c) 2024 Doodle Developers, Krisna Pranav
 *
 */
use crate::SizeHint;

fn max_preallocation() -> usize {
    1 << 16
}

fn trust_size_hint() -> bool {
    true
}

/// Controls how terminal collects size their output container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct CollectConfig {
    #[serde(default = "max_preallocation")]
    pub max_preallocation: usize,

    #[serde(default = "trust_size_hint")]
    pub trust_size_hint: bool,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            max_preallocation: max_preallocation(),
            trust_size_hint: trust_size_hint(),
        }
    }
}

impl CollectConfig {
    /// Number of slots to reserve up front for an iterator with `hint`.
    pub fn capacity_for(&self, hint: SizeHint) -> usize {
        if !self.trust_size_hint {
            return 0;
        }

        if hint.lower_bound > self.max_preallocation {
            tracing::debug!(
                lower_bound = hint.lower_bound,
                max_preallocation = self.max_preallocation,
                "clamping collect preallocation"
            );
            return self.max_preallocation;
        }

        hint.lower_bound
    }
}
