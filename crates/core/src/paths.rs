//! Confinement of model-supplied file paths to the output root.
//!
//! Paths arrive from a remote model and are untrusted. They are normalized
//! lexically: no filesystem access, so symlinks already present under the
//! root are not resolved.

use std::path::{Component, Path, PathBuf};

use crate::plugin::Plugin;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    Empty,
    Absolute(String),
    EscapesRoot(String),
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::Empty => write!(f, "File path is empty"),
            PathError::Absolute(path) => write!(f, "File path is absolute: {}", path),
            PathError::EscapesRoot(path) => {
                write!(f, "File path escapes the output directory: {}", path)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Normalize a relative path, rejecting anything outside the root.
///
/// `.` components are dropped and `..` pops the previous component. A path
/// that normalizes to nothing (`""`, `"."`, `"a/.."`) is rejected as empty.
pub fn confine(relative: &str) -> Result<PathBuf, PathError> {
    let mut normalized = PathBuf::new();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return Err(PathError::EscapesRoot(relative.to_string()));
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(PathError::Absolute(relative.to_string()));
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(PathError::Empty);
    }

    Ok(normalized)
}

/// A validated write: where to put it and what to put there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite<'a> {
    pub relative: PathBuf,
    pub content: &'a str,
}

/// Validate every file path of a plugin before anything is written.
///
/// Fails on the first unsafe path; order and duplicates are preserved.
pub fn plan_writes(plugin: &Plugin) -> Result<Vec<PlannedWrite<'_>>, PathError> {
    plugin
        .files
        .iter()
        .map(|file| {
            Ok(PlannedWrite {
                relative: confine(&file.path)?,
                content: &file.content,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::PluginFile;

    fn plugin_with(paths: &[&str]) -> Plugin {
        Plugin {
            name: "p".to_string(),
            description: "d".to_string(),
            files: paths
                .iter()
                .map(|path| PluginFile {
                    path: path.to_string(),
                    content: format!("content of {path}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_plain_relative_paths() {
        assert_eq!(confine("plugin.php").unwrap(), PathBuf::from("plugin.php"));
        assert_eq!(
            confine("inc/helper.php").unwrap(),
            PathBuf::from("inc/helper.php")
        );
    }

    #[test]
    fn test_current_dir_components_dropped() {
        assert_eq!(
            confine("./acme/./acme.php").unwrap(),
            PathBuf::from("acme/acme.php")
        );
    }

    #[test]
    fn test_interior_parent_dir_stays_inside() {
        assert_eq!(
            confine("acme/assets/../acme.php").unwrap(),
            PathBuf::from("acme/acme.php")
        );
    }

    #[test]
    fn test_traversal_rejected() {
        assert_eq!(
            confine("../../etc/passwd"),
            Err(PathError::EscapesRoot("../../etc/passwd".to_string()))
        );
        assert_eq!(
            confine("acme/../../x.php"),
            Err(PathError::EscapesRoot("acme/../../x.php".to_string()))
        );
    }

    #[test]
    fn test_absolute_rejected() {
        assert_eq!(
            confine("/etc/passwd"),
            Err(PathError::Absolute("/etc/passwd".to_string()))
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(confine(""), Err(PathError::Empty));
        assert_eq!(confine("."), Err(PathError::Empty));
        assert_eq!(confine("acme/.."), Err(PathError::Empty));
    }

    #[test]
    fn test_plan_preserves_order_and_duplicates() {
        let plugin = plugin_with(&["a.php", "inc/b.php", "a.php"]);
        let plan = plan_writes(&plugin).unwrap();

        let relatives: Vec<PathBuf> = plan.iter().map(|w| w.relative.clone()).collect();
        assert_eq!(
            relatives,
            vec![
                PathBuf::from("a.php"),
                PathBuf::from("inc/b.php"),
                PathBuf::from("a.php")
            ]
        );
        assert_eq!(plan[1].content, "content of inc/b.php");
    }

    #[test]
    fn test_plan_fails_on_any_unsafe_path() {
        let plugin = plugin_with(&["a.php", "../evil.php", "b.php"]);
        assert_eq!(
            plan_writes(&plugin),
            Err(PathError::EscapesRoot("../evil.php".to_string()))
        );
    }

    #[test]
    fn test_plan_empty_plugin() {
        assert!(plan_writes(&plugin_with(&[])).unwrap().is_empty());
    }
}
