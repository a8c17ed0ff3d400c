//! Kognic to OpenLABEL annotation converter
//!
//! This library converts Kognic `ExtremePointBox` annotations into OpenLABEL
//! documents, either one record at a time through [`convert`] or in bulk
//! through the batch pipeline and the HTTP server.

pub mod batch;
pub mod config;
pub mod conversion;
pub mod error;
pub mod io;
pub mod kognic;
pub mod mapping;
pub mod openlabel;
pub mod server;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use batch::process_batch;
pub use config::{Args, ServeArgs};
pub use conversion::{convert, convert_annotation, extreme_box_to_cxcywh};
pub use error::ConvertError;
pub use io::resolve_batch_paths;
pub use kognic::KognicAnnotation;
pub use openlabel::OpenLabelRoot;
pub use types::{BatchPaths, ProcessingStats};
