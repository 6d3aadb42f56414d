//! Configuration type definitions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::IngestPolicy;
use crate::links::Locale;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Tagpath configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagpathConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Graph query defaults
    #[serde(default)]
    pub graph: GraphConfig,

    /// Catalog ingestion settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Tag aliases: alias names mapped to canonical tag names
    #[serde(default)]
    pub tag_aliases: HashMap<String, String>,

    /// Problem link settings
    #[serde(default)]
    pub links: LinksConfig,

    /// Tag statistics settings
    #[serde(default)]
    pub stats: StatsConfig,
}

/// Defaults for graph queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Minimum shared tags for a neighbor when `--threshold` is not given
    #[serde(default = "default_tag_threshold")]
    pub default_tag_threshold: u32,
}

/// Catalog ingestion settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Default catalog file when `--catalog` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Policy for malformed records
    #[serde(default)]
    pub ingest_policy: IngestPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinksConfig {
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Number of tags at each end of the acceptance ranking
    #[serde(default = "default_stats_top")]
    pub top: usize,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_tag_threshold() -> u32 {
    1
}

fn default_stats_top() -> usize {
    10
}

impl Default for TagpathConfig {
    fn default() -> Self {
        TagpathConfig {
            version: CONFIG_FORMAT_VERSION,
            graph: GraphConfig::default(),
            catalog: CatalogConfig::default(),
            tag_aliases: HashMap::new(),
            links: LinksConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            default_tag_threshold: default_tag_threshold(),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            top: default_stats_top(),
        }
    }
}
