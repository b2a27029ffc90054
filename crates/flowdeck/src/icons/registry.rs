use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, warn};

/// Icons of one loaded collection, keyed by icon name.
pub type IconSet = HashMap<String, Arc<[u8]>>;

/// Lifecycle of a named collection inside the registry.
#[derive(Debug, Clone)]
pub enum CollectionState {
    NotLoaded,
    Loading,
    Loaded(IconSet),
    Failed,
}

impl CollectionState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotLoaded => "not loaded",
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::Failed => "failed",
        }
    }
}

/// Capability for bringing a collection into memory. Injected so the
/// registry never touches ambient global state and tests can stub it.
pub trait CollectionLoad {
    fn load(&self, collection: &str) -> Result<IconSet>;
}

/// Loads collections from `<root>/<collection>/*.svg`, keyed by file stem.
pub struct FsCollectionLoader {
    root: PathBuf,
}

impl FsCollectionLoader {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl CollectionLoad for FsCollectionLoader {
    fn load(&self, collection: &str) -> Result<IconSet> {
        let dir = self.root.join(collection);
        let entries = std::fs::read_dir(&dir)
            .with_context(|| format!("Failed to read icon collection {}", dir.display()))?;

        let mut set = IconSet::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "svg") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            set.insert(stem.to_string(), Arc::from(bytes.into_boxed_slice()));
        }
        Ok(set)
    }
}

/// Per-collection icon cache with explicit load states.
///
/// Collections move NotLoaded -> Loading -> Loaded/Failed on first lookup.
/// A failed collection stays Failed and serves nothing; callers fall back to
/// the placeholder.
pub struct CollectionRegistry {
    loader: Box<dyn CollectionLoad>,
    collections: HashMap<String, CollectionState>,
}

impl CollectionRegistry {
    pub fn new(loader: Box<dyn CollectionLoad>) -> Self {
        Self {
            loader,
            collections: HashMap::new(),
        }
    }

    pub fn state(&self, collection: &str) -> &CollectionState {
        self.collections
            .get(collection)
            .unwrap_or(&CollectionState::NotLoaded)
    }

    /// Look up an icon, loading its collection on first use.
    pub fn icon(&mut self, collection: &str, name: &str) -> Option<Arc<[u8]>> {
        self.ensure_loaded(collection);
        match self.collections.get(collection) {
            Some(CollectionState::Loaded(set)) => set.get(name).cloned(),
            _ => None,
        }
    }

    fn ensure_loaded(&mut self, collection: &str) {
        match self.state(collection) {
            CollectionState::NotLoaded => {}
            _ => return,
        }

        self.collections
            .insert(collection.to_string(), CollectionState::Loading);
        let state = match self.loader.load(collection) {
            Ok(set) => {
                debug!("loaded icon collection {collection} ({} icons)", set.len());
                CollectionState::Loaded(set)
            }
            Err(err) => {
                warn!("failed to load icon collection {collection}: {err:#}");
                CollectionState::Failed
            }
        };
        debug!("icon collection {collection} is now {}", state.label());
        self.collections.insert(collection.to_string(), state);
    }
}
