//! The icon palette: fixed categories, display names, search, and the drag
//! payload contract between palette and canvas.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::icons::IconDescriptor;

/// The single droppable element type carried in drag payloads.
pub const ELEMENT_TYPE: &str = "iconNode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

pub const CATEGORIES: [Category; 6] = [
    Category {
        id: "cloud",
        name: "Cloud Services",
    },
    Category {
        id: "devops",
        name: "DevOps",
    },
    Category {
        id: "programming",
        name: "Programming",
    },
    Category {
        id: "ui",
        name: "UI Elements",
    },
    Category {
        id: "database",
        name: "Databases",
    },
    Category {
        id: "custom",
        name: "Custom Icons",
    },
];

/// One draggable palette tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub descriptor: IconDescriptor,
    pub display_name: String,
}

fn builtin(name: &str) -> PaletteEntry {
    entry(IconDescriptor::Builtin {
        name: name.to_string(),
    })
}

fn collection(collection: &str, name: &str) -> PaletteEntry {
    entry(IconDescriptor::Collection {
        collection: collection.to_string(),
        name: name.to_string(),
    })
}

fn glyph(name: &str) -> PaletteEntry {
    entry(IconDescriptor::Glyph {
        name: name.to_string(),
    })
}

fn entry(descriptor: IconDescriptor) -> PaletteEntry {
    PaletteEntry {
        display_name: display_name(descriptor.name()),
        descriptor,
    }
}

/// All entries of one category. Custom entries come from the live icon
/// library.
pub fn entries(category_id: &str, custom_names: &[String]) -> Vec<PaletteEntry> {
    match category_id {
        "cloud" => [
            "EC2",
            "S3",
            "Lambda",
            "DynamoDB",
            "CloudWatch",
            "SNS",
            "SQS",
            "API Gateway",
            "CloudFront",
            "Virtual Machine",
            "Storage",
            "Function",
            "Cosmos DB",
            "Compute Engine",
            "Cloud Storage",
            "Cloud Functions",
        ]
        .iter()
        .map(|name| builtin(name))
        .collect(),
        "devops" => {
            let mut list: Vec<PaletteEntry> = [
                "docker",
                "kubernetes",
                "jenkins",
                "gitlab",
                "github",
                "terraform",
            ]
            .iter()
            .map(|name| collection("simple-icons", name))
            .collect();
            list.extend(
                ["GitBranch", "GitCommit", "GitMerge", "GitPullRequest"]
                    .iter()
                    .map(|name| glyph(name)),
            );
            list
        }
        "programming" => {
            let mut list: Vec<PaletteEntry> =
                ["javascript", "typescript", "python", "java", "csharp", "go"]
                    .iter()
                    .map(|name| collection("devicon", name))
                    .collect();
            list.extend(
                ["react", "vue", "angular", "svelte", "nextdotjs"]
                    .iter()
                    .map(|name| collection("simple-icons", name)),
            );
            list
        }
        "ui" => [
            "Layout",
            "Layers",
            "LayoutGrid",
            "LayoutList",
            "LayoutTemplate",
            "Table",
        ]
        .iter()
        .map(|name| glyph(name))
        .collect(),
        "database" => {
            let mut list: Vec<PaletteEntry> =
                ["mongodb", "postgresql", "mysql", "redis", "elasticsearch"]
                    .iter()
                    .map(|name| collection("simple-icons", name))
                    .collect();
            list.extend(
                ["Database", "Table", "TableProperties"]
                    .iter()
                    .map(|name| glyph(name)),
            );
            list
        }
        "custom" => custom_names
            .iter()
            .map(|name| {
                entry(IconDescriptor::Custom {
                    name: name.clone(),
                })
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Entries of a category matching a case-insensitive search term.
pub fn filtered_entries(
    category_id: &str,
    custom_names: &[String],
    search: &str,
) -> Vec<PaletteEntry> {
    let mut list = entries(category_id, custom_names);
    let term = search.trim().to_lowercase();
    if !term.is_empty() {
        list.retain(|e| e.display_name.to_lowercase().contains(&term));
    }
    list
}

/// Split camel-cased icon names into words for display.
pub fn display_name(name: &str) -> String {
    static CAMEL: OnceLock<Regex> = OnceLock::new();
    let camel = CAMEL.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));
    camel.replace_all(name, "$1 $2").trim().to_string()
}

/// The contract between palette (producer) and canvas drop handler
/// (consumer): three string fields, with the icon descriptor JSON-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub element_type: String,
    pub icon: String,
    pub label: String,
}

impl DragPayload {
    pub fn for_entry(entry: &PaletteEntry) -> Self {
        Self {
            element_type: ELEMENT_TYPE.to_string(),
            icon: serde_json::to_string(&entry.descriptor).unwrap_or_default(),
            label: entry.display_name.clone(),
        }
    }

    /// Decode the icon descriptor. Malformed JSON falls back to the default
    /// descriptor instead of failing the drop.
    pub fn icon_descriptor(&self) -> IconDescriptor {
        serde_json::from_str(&self.icon).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_splits_camel_case() {
        assert_eq!(display_name("CloudWatch"), "Cloud Watch");
        assert_eq!(display_name("GitPullRequest"), "Git Pull Request");
        assert_eq!(display_name("docker"), "docker");
        assert_eq!(display_name("API Gateway"), "API Gateway");
    }

    #[test]
    fn payload_round_trips_descriptor() {
        let entry = collection("simple-icons", "docker");
        let payload = DragPayload::for_entry(&entry);
        assert_eq!(payload.element_type, ELEMENT_TYPE);
        assert_eq!(payload.icon_descriptor(), entry.descriptor);
    }

    #[test]
    fn malformed_icon_json_falls_back_to_default() {
        let payload = DragPayload {
            element_type: ELEMENT_TYPE.to_string(),
            icon: "not json at all".to_string(),
            label: "Broken".to_string(),
        };
        assert_eq!(payload.icon_descriptor(), IconDescriptor::default());
    }

    #[test]
    fn search_is_case_insensitive() {
        let hits = filtered_entries("cloud", &[], "cloud");
        assert!(!hits.is_empty());
        assert!(
            hits.iter()
                .all(|e| e.display_name.to_lowercase().contains("cloud"))
        );
        let all = filtered_entries("cloud", &[], "");
        assert!(all.len() > hits.len());
    }

    #[test]
    fn custom_category_reflects_uploaded_names() {
        let names = vec!["first".to_string(), "second".to_string()];
        let list = entries("custom", &names);
        assert_eq!(list.len(), 2);
        assert!(matches!(
            &list[0].descriptor,
            IconDescriptor::Custom { name } if name == "first"
        ));
    }

    #[test]
    fn every_category_id_yields_entries() {
        for category in CATEGORIES {
            if category.id == "custom" {
                continue;
            }
            assert!(
                !entries(category.id, &[]).is_empty(),
                "empty category {}",
                category.id
            );
        }
    }
}
