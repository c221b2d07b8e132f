// src/reader.rs
//! Turns user-selected files into byte sizes and decoded text.
//!
//! Read and decode failures surface as `Err`; the metrics never see them.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, error};
use tokio::fs;
use tokio::task::JoinSet;

use crate::metrics;
use crate::report::FileStats;

/// Opaque token that ties a result back to the selection it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Resource {
    pub id: ResourceId,
    pub path: PathBuf,
}

impl Resource {
    /// A file resource identified by the path exactly as the user gave it.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            path: PathBuf::from(&path),
            id: ResourceId::from(path),
        }
    }
}

pub async fn read_byte_size(resource: &Resource) -> Result<u64> {
    let meta = fs::metadata(&resource.path)
        .await
        .with_context(|| format!("Failed to read file at '{}'", resource.path.display()))?;
    Ok(metrics::byte_size(&meta))
}

/// Reads and decodes a resource as UTF-8. A leading byte-order mark is not
/// part of the text and is dropped.
pub async fn read_text(resource: &Resource) -> Result<String> {
    let raw = fs::read(&resource.path)
        .await
        .with_context(|| format!("Failed to read file at '{}'", resource.path.display()))?;
    let text = String::from_utf8(raw)
        .with_context(|| format!("File at '{}' is not valid UTF-8", resource.path.display()))?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_owned(),
        None => text,
    })
}

/// Reads one resource and computes all of its metrics.
pub async fn measure(resource: Resource) -> Result<FileStats> {
    debug!("Measuring {}", resource.path.display());
    let bytes = read_byte_size(&resource).await?;
    let text = read_text(&resource).await?;
    Ok(FileStats::from_text(resource.id, bytes, Some(&text)))
}

/// Measures every resource concurrently. Results keep the input order and a
/// failed resource does not affect the others.
pub async fn measure_all(resources: Vec<Resource>) -> Vec<(ResourceId, Result<FileStats>)> {
    let ids: Vec<ResourceId> = resources.iter().map(|r| r.id.clone()).collect();

    let mut tasks = JoinSet::new();
    for (index, resource) in resources.into_iter().enumerate() {
        tasks.spawn(async move { (index, measure(resource).await) });
    }

    let mut slots: Vec<Option<Result<FileStats>>> = ids.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => slots[index] = Some(result),
            Err(e) => error!("Measuring task did not complete: {e}"),
        }
    }

    ids.into_iter()
        .zip(slots)
        .map(|(id, slot)| {
            let result = slot.unwrap_or_else(|| {
                Err(anyhow::anyhow!("Measuring '{id}' did not complete"))
            });
            if let Err(e) = &result {
                debug!("{id}: {e:#}");
            }
            (id, result)
        })
        .collect()
}
