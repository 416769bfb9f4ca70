use rowfit::config::LayoutConfig;
use rowfit::io::svg::svg_util::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration for the rowfit command line driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RowfitConfig {
    /// Configuration of the layout engine itself
    #[serde(default)]
    pub layout_config: LayoutConfig,
    /// Seed for the PRNG used to generate random instances. If undefined, entropy is used
    pub prng_seed: Option<u64>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for RowfitConfig {
    fn default() -> Self {
        Self {
            layout_config: LayoutConfig::default(),
            prng_seed: Some(0),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
