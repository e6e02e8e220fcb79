use anyhow::{Context, Result};
use std::path::Path;
use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::transcode::Transcoder;

/// Extensions classified as video candidates, matched case-insensitively.
/// Classification is by extension string only; there is no content sniffing.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "flv", "wmv", "webm"];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub total_videos: usize,
    pub successful_conversions: usize,
}

/// Whether a file's extension is on the video allow-list.
pub fn is_video_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| VIDEO_EXTENSIONS.iter().any(|v| ext.eq_ignore_ascii_case(v)))
        .unwrap_or(false)
}

/// Walk `source_dir` and convert every video candidate into an MP3 at the
/// corresponding relative path under `output_dir`, one file at a time.
///
/// A failed conversion is logged and never aborts the walk; the returned
/// stats carry the total-vs-successful tally for the final summary.
pub fn process_videos<T: Transcoder>(
    source_dir: &Path,
    output_dir: &Path,
    transcoder: &T,
) -> Result<BatchStats> {
    let mut stats = BatchStats::default();

    for entry_result in WalkDir::new(source_dir) {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Failed to access an entry during the walk: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let video_path = entry.path();
        if !is_video_candidate(video_path) {
            continue;
        }
        stats.total_videos += 1;

        let rel_path = video_path
            .strip_prefix(source_dir)
            .with_context(|| format!("Failed to relativize {}", video_path.display()))?;
        let mut audio_path = output_dir.join(rel_path);
        audio_path.set_extension("mp3");

        info!(
            "Converting: {} -> {}",
            video_path.display(),
            audio_path.display()
        );
        match transcoder.convert(video_path, &audio_path) {
            Ok(()) => {
                stats.successful_conversions += 1;
                info!("Conversion successful: {}", audio_path.display());
            }
            Err(err) => {
                error!("Conversion failed: {err}");
            }
        }
    }

    info!(
        "Processing completed. Total videos: {}, Successfully converted: {}",
        stats.total_videos, stats.successful_conversions
    );
    Ok(stats)
}
