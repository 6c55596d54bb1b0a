use appwrite_uploader::upload::{BatchReport, BatchStatus, FileStatus, UploadError};
use std::sync::mpsc::Receiver;

/// Where the current (or last) batch stands.
#[derive(Clone, Default)]
pub enum BatchPhase {
    #[default]
    NotStarted,
    Uploading {
        total: usize,
        completed: usize,
    },
    Completed {
        total: usize,
        completed: usize,
        status: BatchStatus,
    },
}

/// Everything the UI renders about the batch in flight, fed by draining the
/// two channels each frame.
#[derive(Default)]
pub struct BatchState {
    pub phase: BatchPhase,
    pub current_file: Option<String>,
    pub file_statuses: Vec<FileStatus>,
    pub error_message: Option<String>,
    pub show_details: bool,
    pub is_uploading: bool,
    pub status_receiver: Option<Receiver<FileStatus>>,
    pub result_receiver: Option<Receiver<Result<BatchReport, UploadError>>>,
}

impl BatchState {
    /// Fraction of the batch done, completed/total in [0, 1].
    pub fn progress_fraction(&self) -> f32 {
        match self.phase {
            BatchPhase::NotStarted => 0.0,
            BatchPhase::Uploading { total, completed }
            | BatchPhase::Completed {
                total, completed, ..
            } => {
                if total == 0 {
                    0.0
                } else {
                    completed as f32 / total as f32
                }
            }
        }
    }

    pub fn status_line(&self) -> String {
        match self.phase {
            BatchPhase::NotStarted => String::new(),
            BatchPhase::Uploading { total, completed } => {
                format!("Uploading {}/{} files", completed, total)
            }
            BatchPhase::Completed {
                total,
                completed,
                status,
            } => match status {
                BatchStatus::Success => format!("Uploaded {}/{} files", completed, total),
                BatchStatus::Error => {
                    format!("Stored {} of {} files before failing", completed, total)
                }
            },
        }
    }

    pub fn terminal_status(&self) -> Option<BatchStatus> {
        match self.phase {
            BatchPhase::Completed { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Resets everything for a fresh submit.
    pub fn clear(&mut self) {
        *self = BatchState::default();
    }
}
