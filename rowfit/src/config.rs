use serde::{Deserialize, Serialize};

/// Configuration of the layout engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Remaining height budgets are bucketed to multiples of this value when deduplicating graph states.
    /// Two states starting at the same item whose budgets fall in the same bucket are merged.
    pub budget_resolution: f64,
}

impl LayoutConfig {
    /// Maps a remaining height budget to the bucket used as part of a state's identity.
    /// Truncates towards zero, budgets of graph states are never negative.
    pub fn budget_bucket(&self, remaining_height: f64) -> i64 {
        (remaining_height / self.budget_resolution).trunc() as i64
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            budget_resolution: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1.0, 505.75, 505; "whole units")]
    #[test_case(1.0, 0.75, 0; "below one unit")]
    #[test_case(10.0, 505.75, 50; "coarse buckets")]
    #[test_case(0.5, 505.75, 1011; "fine buckets")]
    fn budget_bucket(resolution: f64, remaining: f64, expected: i64) {
        let config = LayoutConfig {
            budget_resolution: resolution,
        };
        assert_eq!(config.budget_bucket(remaining), expected);
    }
}
