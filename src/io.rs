use jwalk::WalkDir;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Args;
use crate::types::{BatchPaths, OUTPUT_DIR_NAME};

/// Work out the input and output locations of a batch run.
///
/// The default `OpenLabelDataset` directory is owned by the tool and recreated
/// on every run. A user-supplied output directory is only created, never
/// cleared, and may not be the input or one of its ancestors.
pub fn resolve_batch_paths(args: &Args) -> io::Result<BatchPaths> {
    let input = PathBuf::from(&args.input);
    if !input.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("The specified input does not exist: {}", args.input),
        ));
    }

    let (output_dir, recreate_output) = match &args.output_dir {
        Some(dir) => (PathBuf::from(dir), false),
        None if input.is_dir() => (input.join(OUTPUT_DIR_NAME), true),
        None => (
            input
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(OUTPUT_DIR_NAME),
            true,
        ),
    };

    if normalize_path(&input)?.starts_with(normalize_path(&output_dir)?) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "The output directory {} must not contain the input {}",
                output_dir.display(),
                input.display()
            ),
        ));
    }

    Ok(BatchPaths {
        input,
        output_dir,
        recreate_output,
    })
}

// Absolute, symlink-free form of a path whose tail may not exist yet
fn normalize_path(path: &Path) -> io::Result<PathBuf> {
    if path.exists() {
        return path.canonicalize();
    }
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => Ok(normalize_path(parent)?.join(name)),
        _ => Ok(absolute),
    }
}

/// Collect the Kognic JSON files to convert.
///
/// A file input is returned as is. A directory is walked recursively, skipping
/// the output directory so earlier results are never read back as input.
pub fn collect_json_files(input: &Path, output_dir: &Path) -> Vec<PathBuf> {
    if input.is_file() {
        return vec![input.to_path_buf()];
    }

    let skip_dir = output_dir.to_path_buf();
    let mut json_files: Vec<PathBuf> = WalkDir::new(input)
        .skip_hidden(false)
        .process_read_dir(move |_, _, _, children| {
            children.retain(|entry| {
                entry
                    .as_ref()
                    .map_or(true, |e| !(e.file_type().is_dir() && e.path() == skip_dir))
            });
        })
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file() && e.path().extension().is_some_and(|ext| ext == "json")
        })
        .map(|e| e.path())
        .filter(|path| !path.starts_with(output_dir))
        .collect();

    json_files.sort();
    json_files
}

/// Output location of a converted file: the sanitized input stem with a `.json` extension
pub fn output_path_for(json_path: &Path, output_dir: &Path) -> PathBuf {
    let stem = json_path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    output_dir
        .join(sanitize_filename::sanitize(stem))
        .with_extension("json")
}

/// Write an OpenLABEL document to disk
pub fn write_openlabel(path: &Path, document: &Value, pretty: bool) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, document)?;
    } else {
        serde_json::to_writer(&mut writer, document)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()
}
