use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use extract_audio::args::Args;
use extract_audio::batch;
use extract_audio::mirror;
use extract_audio::output;
use extract_audio::transcode::FfmpegTranscoder;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse and validate the source directory argument
    let args = Args::from_cli()?;

    info!(
        "Starting video to audio conversion from: {}",
        args.source_dir.display()
    );

    // Create the output root, mirror the tree, then convert file by file.
    // Individual conversion failures only show up in the summary counts.
    let output_dir = output::create_output_dir(&args.source_dir)?;
    mirror::mirror_directory_structure(&args.source_dir, &output_dir)?;
    batch::process_videos(&args.source_dir, &output_dir, &FfmpegTranscoder::new())?;

    info!("All operations completed successfully");
    Ok(())
}
