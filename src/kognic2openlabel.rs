use clap::Parser;
use log::{error, info};

use kognic2openlabel::{process_batch, resolve_batch_paths, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let paths = match resolve_batch_paths(&args) {
        Ok(paths) => paths,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Starting the conversion process...");

    match process_batch(&paths, &args) {
        Ok(stats) if stats.total_failed() == 0 => {
            info!(
                "Conversion process completed successfully. Output: {}",
                paths.output_dir.display()
            );
        }
        Ok(stats) => {
            error!("{} files failed to convert", stats.total_failed());
            std::process::exit(1);
        }
        Err(e) => {
            error!("Failed to process batch: {}", e);
            std::process::exit(1);
        }
    }
}
