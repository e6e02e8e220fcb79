use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

/// Recreate every subdirectory of `source_dir` under `output_dir`.
///
/// Runs to completion before any conversion starts, so every destination
/// directory exists by the time the batch driver writes its first file.
/// Any walk or creation failure here is fatal to the run.
pub fn mirror_directory_structure(source_dir: &Path, output_dir: &Path) -> Result<()> {
    for entry_result in WalkDir::new(source_dir).min_depth(1) {
        let entry = entry_result
            .with_context(|| format!("Failed to walk {}", source_dir.display()))?;

        if !entry.file_type().is_dir() {
            continue;
        }

        let rel_path = entry
            .path()
            .strip_prefix(source_dir)
            .with_context(|| format!("Failed to relativize {}", entry.path().display()))?;
        let target_dir = output_dir.join(rel_path);

        fs::create_dir_all(&target_dir)
            .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;
        info!("Created directory: {}", target_dir.display());
    }

    info!("Directory structure recreation completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrors_nested_and_empty_directories() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::create_dir_all(source.path().join("a/b")).unwrap();
        fs::create_dir(source.path().join("empty")).unwrap();
        fs::write(source.path().join("a/x.mp4"), b"").unwrap();

        mirror_directory_structure(source.path(), output.path()).unwrap();

        assert!(output.path().join("a").is_dir());
        assert!(output.path().join("a/b").is_dir());
        assert!(output.path().join("empty").is_dir());
        // Files are not copied by the mirroring pass.
        assert!(!output.path().join("a/x.mp4").exists());
    }

    #[test]
    fn test_empty_source_creates_nothing() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        mirror_directory_structure(source.path(), output.path()).unwrap();

        assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_pre_existing_target_directory_is_tolerated() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::create_dir(source.path().join("a")).unwrap();
        fs::create_dir(output.path().join("a")).unwrap();

        mirror_directory_structure(source.path(), output.path()).unwrap();

        assert!(output.path().join("a").is_dir());
    }
}
