mod state;
mod ui;

use appwrite_uploader::config::ConnectionConfig;
use appwrite_uploader::selection::FileSelection;
use appwrite_uploader::upload::{BatchStatus, BatchUploader, FileState, UploadError};
use eframe::{egui, App};
use state::{BatchPhase, BatchState};
use std::sync::mpsc;

#[derive(Default)]
pub struct AppwriteUploader {
    config: ConnectionConfig,
    selection: FileSelection,
    state: BatchState,
}

impl AppwriteUploader {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        tracing::info!("starting Appwrite file uploader");
        Self::default()
    }

    pub fn start_upload(&mut self) {
        // One batch at a time.
        if self.state.is_uploading {
            return;
        }

        self.state.clear();

        let uploader = match BatchUploader::from_config(&self.config) {
            Ok(uploader) => uploader,
            Err(error) => {
                self.fail_before_start(error);
                return;
            }
        };
        if self.selection.is_empty() {
            self.fail_before_start(UploadError::EmptySelection);
            return;
        }

        let files = self.selection.files().to_vec();
        let total = files.len();

        let (status_sender, status_receiver) = mpsc::channel();
        let (result_sender, result_receiver) = mpsc::channel();
        self.state.status_receiver = Some(status_receiver);
        self.state.result_receiver = Some(result_receiver);
        self.state.phase = BatchPhase::Uploading {
            total,
            completed: 0,
        };
        self.state.is_uploading = true;

        tracing::info!(total, bucket = %self.config.bucket_id, "starting upload batch");

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let outcome = uploader.run(&files, &status_sender).await;
                let _ = result_sender.send(outcome);
            });
        });
    }

    fn fail_before_start(&mut self, error: UploadError) {
        tracing::warn!(%error, "batch rejected before any upload");
        self.state.error_message = Some(error.to_string());
        self.state.phase = BatchPhase::Completed {
            total: 0,
            completed: 0,
            status: BatchStatus::Error,
        };
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &self.state.status_receiver {
            let mut had_updates = false;
            while let Ok(status) = receiver.try_recv() {
                had_updates = true;
                if matches!(status.state, FileState::Stored) {
                    if let BatchPhase::Uploading { completed, .. } = &mut self.state.phase {
                        *completed += 1;
                    }
                }
                self.state.current_file = Some(status.name.clone());
                self.state.file_statuses.push(status);
            }
            if had_updates {
                ctx.request_repaint();
            }
        }

        // The terminal result arrives after every status event is queued, so
        // the drain above has already run for this batch.
        if let Some(receiver) = &self.state.result_receiver {
            if let Ok(outcome) = receiver.try_recv() {
                let (total, completed) = match self.state.phase {
                    BatchPhase::Uploading { total, completed } => (total, completed),
                    _ => (0, 0),
                };
                match outcome {
                    Ok(report) => {
                        tracing::info!(uploaded = report.uploaded.len(), "batch succeeded");
                        self.selection.clear();
                        self.state.phase = BatchPhase::Completed {
                            total,
                            completed,
                            status: BatchStatus::Success,
                        };
                    }
                    Err(error) => {
                        tracing::error!(%error, "batch failed");
                        self.state.error_message = Some(error.to_string());
                        self.state.phase = BatchPhase::Completed {
                            total,
                            completed,
                            status: BatchStatus::Error,
                        };
                    }
                }
                self.state.is_uploading = false;
                self.state.status_receiver = None;
                self.state.result_receiver = None;
                ctx.request_repaint();
            }
        }
    }

    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = file.path {
                tracing::debug!(path = %path.display(), "file dropped");
                self.selection.add_path(&path);
            }
        }
    }
}

impl App for AppwriteUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.collect_dropped_files(ctx);
        self.render(ctx);
    }
}
