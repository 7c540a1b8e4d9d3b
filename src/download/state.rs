//! Download outcome tracking.

/// Classification of a single record after the download step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    /// Fetched and renamed into place.
    Downloaded,
    /// Already present and non-empty; no request issued.
    Skipped,
    /// Failed after exhausting retries.
    Failed,
}

/// Aggregate counts over one download batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub downloaded: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl DownloadOutcome {
    pub fn record(&mut self, status: DownloadStatus) {
        match status {
            DownloadStatus::Downloaded => self.downloaded += 1,
            DownloadStatus::Skipped => self.skipped += 1,
            DownloadStatus::Failed => self.failed += 1,
        }
    }

    /// Records processed so far.
    pub fn completed(&self) -> u64 {
        self.downloaded + self.skipped + self.failed
    }

    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}
