use rowfit::io::ext_repr::{ExtInstance, ExtLayout};
use serde::{Deserialize, Serialize};

use crate::config::RowfitConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RowfitOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: RowfitConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// The resulting layout, `None` if no feasible layout exists
    pub layout: Option<ExtLayout>,
    /// Time it took to compute the layout, in milliseconds
    pub run_time_ms: u64,
}
