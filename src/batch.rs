use indicatif::ProgressBar;
use log::{error, info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

use crate::config::Args;
use crate::conversion::convert;
use crate::io::{collect_json_files, output_path_for, write_openlabel};
use crate::types::{BatchPaths, FileOutcome, ProcessingStats};
use crate::utils::{
    create_io_thread_pool, create_output_directory, create_progress_bar, read_and_parse_json,
};

/// Convert a single Kognic file and write the OpenLABEL result
pub fn process_file(json_path: &Path, output_dir: &Path, pretty: bool) -> FileOutcome {
    let Some(kognic) = read_and_parse_json(json_path) else {
        return FileOutcome::ReadFailed;
    };

    let openlabel = match convert(&kognic) {
        Ok(openlabel) => openlabel,
        Err(e) => {
            error!("Failed to convert {}: {}", json_path.display(), e);
            return FileOutcome::ConversionFailed;
        }
    };

    let output_path = output_path_for(json_path, output_dir);
    if let Err(e) = write_openlabel(&output_path, &openlabel, pretty) {
        error!("Failed to write {}: {}", output_path.display(), e);
        return FileOutcome::WriteFailed;
    }

    FileOutcome::Converted
}

/// Convert every file in parallel, advancing the progress bar per file
pub fn process_files_in_parallel(
    json_files: &[std::path::PathBuf],
    output_dir: &Path,
    pretty: bool,
    pb: &ProgressBar,
) -> ProcessingStats {
    json_files
        .par_iter()
        .map(|json_path| {
            let outcome = process_file(json_path, output_dir, pretty);
            pb.inc(1);
            outcome
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Main batch conversion pipeline
pub fn process_batch(
    paths: &BatchPaths,
    args: &Args,
) -> Result<ProcessingStats, Box<dyn std::error::Error>> {
    let json_files = collect_json_files(&paths.input, &paths.output_dir);
    info!("Found {} JSON files.", json_files.len());
    if json_files.is_empty() {
        warn!("No JSON files found in {}", paths.input.display());
    }

    if paths.recreate_output {
        create_output_directory(&paths.output_dir)?;
    } else {
        fs::create_dir_all(&paths.output_dir)?;
    }

    let thread_pool = create_io_thread_pool(args.workers)?;
    let pb = create_progress_bar(json_files.len() as u64, "Convert");
    let stats = thread_pool.install(|| {
        process_files_in_parallel(&json_files, &paths.output_dir, args.pretty, &pb)
    });
    pb.finish_with_message("Conversion complete");

    stats.print_summary();
    Ok(stats)
}
