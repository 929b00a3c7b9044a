use log::{debug, error};
use std::collections::HashMap;

use crate::config::IconSources;
use crate::resources::{ResourceBundle, ResourceError};

/// Serves a protocol's status icons to the UI by size label.
///
/// The size-indexed registry is filled once at construction and never
/// mutated afterward, so a shared provider can be read from any number
/// of threads without locking. The connecting-state icon is deliberately
/// not part of the registry and is re-read on every call.
pub struct ProtocolIconProvider {
    bundle: Box<dyn ResourceBundle>,
    sources: IconSources,
    icons: HashMap<String, Vec<u8>>,
}

impl ProtocolIconProvider {
    /// Builds the provider, loading every configured size exactly once.
    ///
    /// A size whose resource cannot be read is logged and left out of
    /// the registry; its label then reads as unsupported.
    pub fn new(bundle: Box<dyn ResourceBundle>, sources: IconSources) -> Self {
        let mut icons = HashMap::new();

        for source in &sources.sizes {
            match bundle.read(&source.path) {
                Ok(data) => {
                    debug!(
                        "Loaded {} {} icon from {} ({} bytes)",
                        sources.protocol,
                        source.label,
                        source.path,
                        data.len()
                    );
                    icons.insert(source.label.clone(), data);
                },
                Err(e) => {
                    error!("Failed to load icon {}: {e}", source.path);
                },
            }
        }

        Self { bundle, sources, icons }
    }

    pub fn protocol(&self) -> &str {
        &self.sources.protocol
    }

    /// Labels with a successfully loaded image, in no particular order.
    pub fn supported_sizes(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    pub fn is_size_supported(&self, label: &str) -> bool {
        self.icons.contains_key(label)
    }

    /// The cached icon bytes for a label, or `None` when the label was
    /// never registered or its resource failed to load.
    pub fn icon(&self, label: &str) -> Option<&[u8]> {
        self.icons.get(label).map(Vec::as_slice)
    }

    /// The connecting-state icon, read fresh from the bundle on every
    /// call. Failures are logged and yield `None`.
    pub fn connecting_icon(&self) -> Option<Vec<u8>> {
        match self.bundle.read(&self.sources.connecting) {
            Ok(data) => Some(data),
            Err(e) => {
                error!("Failed to load connecting icon {}: {e}", self.sources.connecting);
                None
            },
        }
    }

    /// Reads an arbitrary bundled resource into a byte buffer.
    pub fn load_resource(&self, path: &str) -> Result<Vec<u8>, ResourceError> {
        self.bundle.read(path)
    }
}

impl std::fmt::Debug for ProtocolIconProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProtocolIconProvider")
            .field("protocol", &self.sources.protocol)
            .field("sizes", &self.icons.keys().collect::<Vec<_>>())
            .finish()
    }
}
