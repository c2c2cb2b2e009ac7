use serde::{Deserialize, Serialize};

/// A single generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginFile {
    /// Path relative to the plugin output root.
    pub path: String,
    /// Raw file contents, written byte-for-byte.
    pub content: String,
}

/// The structured reply the model is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub name: String,
    pub description: String,
    pub files: Vec<PluginFile>,
}

impl Plugin {
    /// File paths in generation order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|file| file.path.as_str())
    }
}

/// Format the human-readable summary printed before writing files.
///
/// Name, description, then one path per line.
pub fn format_summary(plugin: &Plugin) -> String {
    let mut lines = vec![plugin.name.clone(), plugin.description.clone()];
    lines.extend(plugin.paths().map(str::to_string));
    lines.join("\n")
}
