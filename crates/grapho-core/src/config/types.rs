//! Configuration type definitions

use crate::graph::{MstAlgorithm, SearchAlgorithm};
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "grapho.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphoConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Defaults for path queries
    #[serde(default)]
    pub search: SearchConfig,

    /// Defaults for spanning tree construction
    #[serde(default)]
    pub mst: MstConfig,
}

impl Default for GraphoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            search: SearchConfig::default(),
            mst: MstConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub algorithm: SearchAlgorithm,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MstConfig {
    #[serde(default)]
    pub algorithm: MstAlgorithm,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}
