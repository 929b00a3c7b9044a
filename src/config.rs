use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::size::{ICON_SIZE_16X16, ICON_SIZE_64X64};

/// One size-indexed icon variant: a label and the bundled resource
/// holding its image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconSource {
    pub label: String,
    pub path: String,
}

/// Resource paths for a protocol's icon set.
///
/// Paths are logical, relative to the resource bundle root. They are
/// configuration, not code: a client can ship them as a JSON file next
/// to its other settings and load them with [`IconSources::from_file`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconSources {
    pub protocol: String,
    pub sizes: Vec<IconSource>,
    pub connecting: String,
}

impl IconSources {
    /// The stock ICQ icon set layout.
    pub fn icq() -> Self {
        Self {
            protocol: "icq".to_string(),
            sizes: vec![
                IconSource {
                    label: ICON_SIZE_16X16.to_string(),
                    path: "resources/images/icq/icq16x16-online.png".to_string(),
                },
                IconSource {
                    label: ICON_SIZE_64X64.to_string(),
                    path: "resources/images/icq/icq64x64.png".to_string(),
                },
            ],
            connecting: "resources/images/icq/cr16-action-icq_connecting-1.gif".to_string(),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read(path)?;
        let sources: IconSources = serde_json::from_slice(&content)?;
        Ok(sources)
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn path_for(&self, label: &str) -> Option<&str> {
        self.sizes.iter().find(|s| s.label == label).map(|s| s.path.as_str())
    }
}
