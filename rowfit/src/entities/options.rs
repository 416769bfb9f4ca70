use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Dimensions of the container to fill and the spacing between cells.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    pub container_width: f64,
    pub container_height: f64,
    /// Space inserted between adjacent cells of a row and between adjacent rows
    pub gap: f64,
}

impl LayoutOptions {
    /// Creates new options, panics if the container is not positive and finite or the gap is negative.
    pub fn new(container_width: f64, container_height: f64, gap: f64) -> Self {
        LayoutOptions::try_new(container_width, container_height, gap)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(container_width: f64, container_height: f64, gap: f64) -> Result<Self> {
        let options = LayoutOptions {
            container_width,
            container_height,
            gap,
        };
        options.validate()?;
        Ok(options)
    }

    /// Checks the invariants of the options, fields are public so they may have been altered after construction.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.container_width.is_finite() && self.container_width > 0.0,
            "invalid container width: {}",
            self.container_width
        );
        ensure!(
            self.container_height.is_finite() && self.container_height > 0.0,
            "invalid container height: {}",
            self.container_height
        );
        ensure!(
            self.gap.is_finite() && self.gap >= 0.0,
            "invalid gap: {}",
            self.gap
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 100.0, 5.0; "zero width")]
    #[test_case(100.0, f64::NAN, 5.0; "nan height")]
    #[test_case(100.0, 100.0, -1.0; "negative gap")]
    #[test_case(100.0, 100.0, f64::INFINITY; "infinite gap")]
    fn rejects_invalid_options(w: f64, h: f64, gap: f64) {
        assert!(LayoutOptions::try_new(w, h, gap).is_err());
    }

    #[test]
    fn zero_gap_is_allowed() {
        assert!(LayoutOptions::try_new(800.0, 600.0, 0.0).is_ok());
    }
}
