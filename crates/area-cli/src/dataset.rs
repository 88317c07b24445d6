//! Tenant dataset files: the flat node list, the type catalog and options.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use area_model::{AreaNode, IndexError, LevelType, ResolverOptions};
use area_resolver::Snapshot;

/// One tenant's hierarchy as supplied by the data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Tenant label, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,

    #[serde(default)]
    pub types: Vec<LevelType>,

    pub nodes: Vec<AreaNode>,

    #[serde(default)]
    pub options: ResolverOptions,
}

impl Dataset {
    /// Build indices and catalog with the dataset's options.
    ///
    /// # Errors
    ///
    /// Returns the fatal [`IndexError`] when the node set is unusable.
    pub fn snapshot(&self) -> std::result::Result<Snapshot, IndexError> {
        Snapshot::build(&self.nodes, self.types.clone(), &self.options)
    }

    pub fn label(&self) -> &str {
        self.tenant.as_deref().unwrap_or("-")
    }
}

pub fn parse_dataset(text: &str) -> Result<Dataset> {
    serde_json::from_str(text).context("parse dataset json")
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read dataset {}", path.display()))?;
    let dataset = parse_dataset(&text).with_context(|| format!("load {}", path.display()))?;
    debug!(
        path = %path.display(),
        nodes = dataset.nodes.len(),
        types = dataset.types.len(),
        "Loaded dataset"
    );
    Ok(dataset)
}
