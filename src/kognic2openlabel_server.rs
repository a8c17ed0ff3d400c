use clap::Parser;
use log::error;

use kognic2openlabel::{server, ServeArgs};

#[tokio::main]
async fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ServeArgs::parse();

    if let Err(e) = server::serve(&args.host, args.port).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }
}
