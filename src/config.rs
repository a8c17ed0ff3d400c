use clap::Parser;
use std::str::FromStr;

/// Command-line arguments parser for converting Kognic JSON to OpenLABEL.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Kognic JSON file, or a directory searched recursively for JSON files
    #[arg(short = 'i', long = "input")]
    pub input: String,

    /// Directory for the converted files (default: OpenLabelDataset next to the input)
    #[arg(short = 'o', long = "output_dir")]
    pub output_dir: Option<String>,

    /// Pretty-print the OpenLABEL JSON
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Number of worker threads (0 uses one per CPU)
    #[arg(long = "workers", default_value_t = 0)]
    pub workers: usize,
}

/// Command-line arguments for the conversion HTTP server.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long = "host", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long = "port", default_value_t = 3000, value_parser = validate_port)]
    pub port: u16,
}

// Validate that the port is a non-zero u16
fn validate_port(s: &str) -> Result<u16, String> {
    match u16::from_str(s) {
        Ok(port) if port > 0 => Ok(port),
        _ => Err("PORT must be between 1 and 65535".to_string()),
    }
}
