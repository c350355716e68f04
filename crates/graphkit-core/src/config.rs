//! Configuration for graphs assembled from command-line edge lists.
//!
//! Load order: `.graphkit/config.toml` → environment variables → defaults.

use crate::graph::GraphOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".graphkit";
const CONFIG_FILE: &str = "config.toml";

/// Top-level graphkit configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphkitConfig {
    pub graph: GraphConfig,
    pub input: InputConfig,
}

/// Structural flags for graphs built from edge lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Treat `a:b` as a directed edge. When false, `a:b` and `b:a` are the same edge.
    pub directed: bool,
    /// Accept `a:a` edges.
    pub allow_self_loops: bool,
}

/// How edge and mapping arguments are split.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Separator between source and target in an edge argument, e.g. `a:b`.
    pub edge_delimiter: String,
    /// Separator between node and image in a mapping argument, e.g. `a=x`.
    pub mapping_delimiter: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: true,
            allow_self_loops: true,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            edge_delimiter: ":".to_string(),
            mapping_delimiter: "=".to_string(),
        }
    }
}

impl GraphConfig {
    pub fn options(&self) -> GraphOptions {
        GraphOptions {
            directed: self.directed,
            allow_self_loops: self.allow_self_loops,
        }
    }
}

/// Path of the config file for a given project root.
pub fn config_file(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl GraphkitConfig {
    /// Load config from `.graphkit/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = config_file(project_root);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        env_override("GRAPHKIT_DIRECTED", &mut config.graph.directed);
        env_override(
            "GRAPHKIT_ALLOW_SELF_LOOPS",
            &mut config.graph.allow_self_loops,
        );
        env_override(
            "GRAPHKIT_EDGE_DELIMITER",
            &mut config.input.edge_delimiter,
        );
        env_override(
            "GRAPHKIT_MAPPING_DELIMITER",
            &mut config.input.mapping_delimiter,
        );

        config.validate()?;
        Ok(config)
    }

    /// Reject delimiters that would make argument parsing ambiguous.
    pub fn validate(&self) -> Result<()> {
        if self.input.edge_delimiter.is_empty() {
            anyhow::bail!("input.edge_delimiter must not be empty");
        }
        if self.input.mapping_delimiter.is_empty() {
            anyhow::bail!("input.mapping_delimiter must not be empty");
        }
        if self.input.edge_delimiter == self.input.mapping_delimiter {
            anyhow::bail!(
                "input.edge_delimiter and input.mapping_delimiter must differ (both are {:?})",
                self.input.edge_delimiter
            );
        }
        Ok(())
    }
}
