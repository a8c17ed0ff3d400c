use std::path::PathBuf;

// Name of the directory converted files go to when no output directory is given
pub const OUTPUT_DIR_NAME: &str = "OpenLabelDataset";

// Where a batch run reads from and writes to
#[derive(Debug, Clone)]
pub struct BatchPaths {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    // Only the default output directory is cleared before a run
    pub recreate_output: bool,
}

// Outcome of converting one input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Converted,
    ReadFailed,
    ConversionFailed,
    WriteFailed,
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total_files_processed: usize,
    pub successful_conversions: usize,
    pub failed_reads: usize,
    pub failed_conversions: usize,
    pub failed_writes: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.total_files_processed += 1;
        match outcome {
            FileOutcome::Converted => self.successful_conversions += 1,
            FileOutcome::ReadFailed => self.failed_reads += 1,
            FileOutcome::ConversionFailed => self.failed_conversions += 1,
            FileOutcome::WriteFailed => self.failed_writes += 1,
        }
    }

    pub fn total_failed(&self) -> usize {
        self.failed_reads + self.failed_conversions + self.failed_writes
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Total files processed: {}", self.total_files_processed);
        log::info!("Successful conversions: {}", self.successful_conversions);
        log::info!("Failed reads: {}", self.failed_reads);
        log::info!("Failed conversions: {}", self.failed_conversions);
        log::info!("Failed writes: {}", self.failed_writes);

        let total_failed = self.total_failed();
        if total_failed > 0 {
            log::warn!(
                "Total failed files: {} (read: {}, conversion: {}, write: {})",
                total_failed,
                self.failed_reads,
                self.failed_conversions,
                self.failed_writes
            );
        }
    }
}

impl FromIterator<FileOutcome> for ProcessingStats {
    fn from_iter<I: IntoIterator<Item = FileOutcome>>(iter: I) -> Self {
        let mut stats = ProcessingStats::new();
        for outcome in iter {
            stats.record(outcome);
        }
        stats
    }
}
