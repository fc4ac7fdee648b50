//! Recursive glob copy between directory trees
//!
//! Stand-in for a CI host's "copy everything matching this ant-style glob"
//! primitive: walks the source tree, matches relative paths against the
//! pattern, and copies matches into the target preserving relative structure.

use std::fs;
use std::path::Path;

use glob::Pattern;
use walkdir::WalkDir;

/// Copy all files under `source_root` whose relative path matches `pattern`
/// into `target_root`, preserving relative structure.
///
/// A full copy every time: existing targets are overwritten byte-for-byte,
/// nothing is deduplicated. Returns the number of files copied; matching
/// nothing is not an error.
pub fn copy_matching(
    source_root: &Path,
    pattern: &str,
    target_root: &Path,
) -> anyhow::Result<usize> {
    let matcher = Pattern::new(pattern)
        .map_err(|e| anyhow::anyhow!("invalid file pattern {pattern:?}: {e}"))?;

    let mut copied = 0;
    for entry in WalkDir::new(source_root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(source_root)?;
        // Glob patterns always use forward slashes
        let candidate = relative.to_string_lossy().replace('\\', "/");
        if !matcher.matches(&candidate) {
            continue;
        }

        let target = target_root.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target).map_err(|e| {
            anyhow::anyhow!("failed to copy {} to {}: {e}", entry.path().display(), target.display())
        })?;
        log::debug!("copied {candidate}");
        copied += 1;
    }

    Ok(copied)
}
