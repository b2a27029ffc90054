pub mod builtin;
pub mod registry;
pub mod upload;

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use registry::{CollectionLoad, CollectionRegistry};

/// Where a node icon comes from.
///
/// The serde tags keep the wire form of saved diagrams
/// (`{"type": "...", "name": "...", "collection": "..."}`) stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IconDescriptor {
    /// Fixed SVG library compiled into the binary.
    #[serde(rename = "svg")]
    Builtin { name: String },
    /// Vector-icon registry; collections load lazily from disk.
    #[serde(rename = "iconify")]
    Collection { collection: String, name: String },
    /// Fixed glyph library rendered from the emoji font.
    #[serde(rename = "lucide")]
    Glyph { name: String },
    /// User-uploaded SVG set, keyed by name.
    #[serde(rename = "custom")]
    Custom { name: String },
}

impl Default for IconDescriptor {
    fn default() -> Self {
        Self::Builtin {
            name: "default".to_string(),
        }
    }
}

impl IconDescriptor {
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin { name }
            | Self::Collection { name, .. }
            | Self::Glyph { name }
            | Self::Custom { name } => name,
        }
    }

    /// Short source label, shown in the node details panel.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Builtin { .. } => "svg",
            Self::Collection { .. } => "iconify",
            Self::Glyph { .. } => "lucide",
            Self::Custom { .. } => "custom",
        }
    }
}

/// A resolved icon the canvas can draw.
#[derive(Debug, Clone)]
pub enum RenderIcon {
    /// Inline SVG bytes, drawn through egui's image loader. The uri keys the
    /// loader cache, so equal uris must mean equal bytes.
    Svg { uri: String, bytes: Arc<[u8]> },
    /// A single glyph from the built-in font table.
    Glyph(&'static str),
}

/// Capability interface for icon resolution. A miss is `None`, never an
/// error.
pub trait IconResolve {
    fn resolve(&mut self, descriptor: &IconDescriptor) -> Option<RenderIcon>;
}

/// Multi-source icon lookup over the four descriptor kinds.
///
/// Owns the lazy collection registry and the user-uploaded custom set.
pub struct IconLibrary {
    registry: CollectionRegistry,
    custom: HashMap<String, Arc<[u8]>>,
}

impl IconLibrary {
    pub fn new(loader: Box<dyn CollectionLoad>) -> Self {
        Self {
            registry: CollectionRegistry::new(loader),
            custom: HashMap::new(),
        }
    }

    /// Resolve with fallback: any miss yields the placeholder glyph, so a
    /// node always has something to draw. Misses are logged, not surfaced.
    pub fn icon(&mut self, descriptor: &IconDescriptor) -> RenderIcon {
        self.resolve(descriptor).unwrap_or_else(|| {
            warn!(
                "icon {}/{} not found, using placeholder",
                descriptor.kind(),
                descriptor.name()
            );
            RenderIcon::Svg {
                uri: "bytes://builtin/placeholder.svg".to_string(),
                bytes: Arc::from(builtin::PLACEHOLDER.as_bytes()),
            }
        })
    }

    /// Validate and add a user-uploaded SVG icon. The error message is meant
    /// for the upload dialog.
    pub fn upload_custom(&mut self, name: &str, svg: &str) -> anyhow::Result<()> {
        upload::validate_svg(svg)?;
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("Icon name must not be empty");
        }
        self.custom
            .insert(name.to_string(), Arc::from(svg.as_bytes()));
        Ok(())
    }

    /// Names of uploaded icons, in sorted order for the palette.
    pub fn custom_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn registry(&self) -> &CollectionRegistry {
        &self.registry
    }
}

impl IconResolve for IconLibrary {
    fn resolve(&mut self, descriptor: &IconDescriptor) -> Option<RenderIcon> {
        match descriptor {
            IconDescriptor::Builtin { name } => builtin::svg(name).map(|svg| RenderIcon::Svg {
                uri: format!("bytes://builtin/{name}.svg"),
                bytes: Arc::from(svg.as_bytes()),
            }),
            IconDescriptor::Collection { collection, name } => self
                .registry
                .icon(collection, name)
                .map(|bytes| RenderIcon::Svg {
                    uri: format!("bytes://{collection}/{name}.svg"),
                    bytes,
                }),
            IconDescriptor::Glyph { name } => builtin::glyph(name).map(RenderIcon::Glyph),
            IconDescriptor::Custom { name } => {
                self.custom.get(name).map(|bytes| RenderIcon::Svg {
                    uri: format!("bytes://custom/{name}.svg"),
                    bytes: Arc::clone(bytes),
                })
            }
        }
    }
}
