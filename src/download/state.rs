//! Batch outcome tracking.

use std::path::PathBuf;

/// Result of processing a single tweet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Media was written to the given path.
    Downloaded(PathBuf),

    /// The destination file already existed; nothing was fetched.
    Skipped(PathBuf),
}

impl DownloadOutcome {
    /// The destination path of this outcome.
    pub fn path(&self) -> &PathBuf {
        match self {
            DownloadOutcome::Downloaded(path) | DownloadOutcome::Skipped(path) => path,
        }
    }
}

/// Aggregate statistics across all inputs of a run.
#[derive(Debug, Default)]
pub struct BatchState {
    pub downloaded_count: u64,
    pub skipped_count: u64,
    pub failed_count: u64,
}

impl BatchState {
    /// Record the outcome of a successfully processed input.
    pub fn record(&mut self, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Downloaded(_) => self.downloaded_count += 1,
            DownloadOutcome::Skipped(_) => self.skipped_count += 1,
        }
    }

    /// Mark an input as failed.
    pub fn mark_failed(&mut self) {
        self.failed_count += 1;
    }

    /// Total number of inputs processed.
    pub fn total_processed(&self) -> u64 {
        self.downloaded_count + self.skipped_count + self.failed_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        let mut state = BatchState::default();
        state.record(&DownloadOutcome::Downloaded(PathBuf::from("1.mp4")));
        state.record(&DownloadOutcome::Skipped(PathBuf::from("2.mp4")));
        state.mark_failed();

        assert_eq!(state.downloaded_count, 1);
        assert_eq!(state.skipped_count, 1);
        assert_eq!(state.failed_count, 1);
        assert_eq!(state.total_processed(), 3);
    }
}
