use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Derive and create the output root next to the source directory.
///
/// The name is `<source_name>_audio`; if that path is already taken, a
/// `YYYYMMDD_HHMMSS` local timestamp is appended instead. Creation is
/// idempotent, so a collision surviving the timestamp (two runs within the
/// same second) still succeeds.
pub fn create_output_dir(source_dir: &Path) -> Result<PathBuf> {
    let parent = source_dir.parent().unwrap_or_else(|| Path::new(""));
    let base_name = source_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut output_dir = parent.join(format!("{base_name}_audio"));
    if output_dir.exists() {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        output_dir = parent.join(format!("{base_name}_audio_{timestamp}"));
    }

    fs::create_dir_all(&output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;
    info!("Created output directory: {}", output_dir.display());

    Ok(output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_audio_suffixed_sibling() {
        let parent = tempfile::tempdir().unwrap();
        let source = parent.path().join("clips");
        fs::create_dir(&source).unwrap();

        let output = create_output_dir(&source).unwrap();

        assert_eq!(output, parent.path().join("clips_audio"));
        assert!(output.is_dir());
    }

    #[test]
    fn test_collision_appends_timestamp() {
        let parent = tempfile::tempdir().unwrap();
        let source = parent.path().join("clips");
        fs::create_dir(&source).unwrap();

        let first = create_output_dir(&source).unwrap();
        let second = create_output_dir(&source).unwrap();

        assert_ne!(first, second);
        assert!(first.is_dir());
        assert!(second.is_dir());

        let name = second.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("clips_audio_"));
        // Suffix is YYYYMMDD_HHMMSS: 15 chars of digits and one underscore.
        let suffix = name.strip_prefix("clips_audio_").unwrap();
        assert_eq!(suffix.len(), 15);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c == '_'));
    }

    #[test]
    fn test_first_output_left_untouched_by_second_run() {
        let parent = tempfile::tempdir().unwrap();
        let source = parent.path().join("clips");
        fs::create_dir(&source).unwrap();

        let first = create_output_dir(&source).unwrap();
        let marker = first.join("keep.mp3");
        fs::write(&marker, b"audio").unwrap();

        let _second = create_output_dir(&source).unwrap();

        assert_eq!(fs::read(&marker).unwrap(), b"audio");
    }
}
