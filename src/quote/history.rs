//! Duplicate-avoidance history for quotation references, persisted as a
//! small JSON file in the platform data directory.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Most recent references kept; older entries are trimmed on insert.
pub const HISTORY_CAP: usize = 50;

/// Ordered list of previously seen quotation references, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceHistory {
    #[serde(default)]
    references: Vec<String>,
}

impl ReferenceHistory {
    /// Record a reference as seen. A repeat moves to the newest position
    /// instead of duplicating, and the list is trimmed to [`HISTORY_CAP`].
    pub fn record(&mut self, reference: &str) {
        self.references.retain(|r| r != reference);
        self.references.push(reference.to_string());
        if self.references.len() > HISTORY_CAP {
            let excess = self.references.len() - HISTORY_CAP;
            self.references.drain(..excess);
        }
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.references.iter().any(|r| r == reference)
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn clear(&mut self) {
        self.references.clear();
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn history_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "taqwim")
            .context("Could not determine project directories")?;
        Ok(dirs.data_dir().join("history.json"))
    }

    /// Load from `path`. A missing or unreadable file yields an empty
    /// history; losing the exclusion list must never block the card.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("could not read history file {:?}: {}", path, e);
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(history) => history,
            Err(e) => {
                warn!("history file {:?} is malformed ({}), starting fresh", path, e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self).context("Serializing history")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::history_path()?))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::history_path()?)
    }
}
