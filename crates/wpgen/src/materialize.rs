use crate::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use wpgen_core::paths::plan_writes;
use wpgen_core::plugin::Plugin;

/// Write every plugin file under `base`, returning the paths written.
///
/// `base` must already be a directory. All paths are validated before the
/// first write, so an unsafe path leaves the directory untouched. Existing
/// files are overwritten; duplicate paths resolve to the last entry.
pub fn materialize(base: &Path, plugin: &Plugin) -> Result<Vec<PathBuf>> {
    if !base.is_dir() {
        return Err(Error::OutputDirMissing(base.to_path_buf()).into());
    }

    let plan = plan_writes(plugin).map_err(Error::from)?;
    let mut written = Vec::with_capacity(plan.len());

    for write in plan {
        let path = base.join(&write.relative);

        if let Some(parent) = path.parent() {
            if !parent.is_dir() {
                fs::create_dir_all(parent)
                    .with_context(|| f!("Failed to create directory {}", parent.display()))?;
            }
        }

        fs::write(&path, write.content)
            .with_context(|| f!("Failed to write {}", path.display()))?;
        log::debug!("wrote {} ({} bytes)", path.display(), write.content.len());

        written.push(path);
    }

    Ok(written)
}
