use super::AppwriteUploader;
use appwrite_uploader::upload::{BatchStatus, FileState};
use appwrite_uploader::utils::file_size::human_size;
use eframe::egui::{self, Align, Color32, RichText};
use rfd::FileDialog;

const ACCENT: Color32 = Color32::from_rgb(253, 54, 110);
const SUCCESS_GREEN: Color32 = Color32::from_rgb(0, 180, 0);
const ERROR_RED: Color32 = Color32::from_rgb(220, 50, 50);
const MUTED_GREY: Color32 = Color32::from_rgb(150, 150, 150);

impl AppwriteUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("Appwrite File Uploader");
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Upload files to an Appwrite storage bucket")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);
                    self.render_config_form(ui);
                    ui.add_space(10.0);
                    self.render_drop_zone(ctx, ui);

                    if !self.selection.is_empty() {
                        ui.add_space(10.0);
                        self.render_file_list(ui);
                    }

                    ui.add_space(20.0);

                    ui.vertical_centered(|ui| {
                        let can_upload = !self.selection.is_empty() && !self.state.is_uploading;
                        ui.add_enabled_ui(can_upload, |ui| {
                            let label = if self.state.is_uploading {
                                "⏳ Uploading..."
                            } else {
                                "📤 Upload Files"
                            };
                            let button =
                                egui::Button::new(label).min_size(egui::vec2(200.0, 40.0));
                            if ui.add(button).clicked() {
                                self.start_upload();
                            }
                        });
                    });

                    if self.state.is_uploading {
                        ui.add_space(20.0);
                        self.render_progress(ui);
                    }
                    self.render_banner(ui);

                    if !self.state.file_statuses.is_empty() {
                        ui.add_space(10.0);
                        self.render_details(ui);
                    }

                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui);
            });
        });
    }

    fn render_config_form(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Appwrite Endpoint");
            ui.add(
                egui::TextEdit::singleline(&mut self.config.endpoint)
                    .desired_width(ui.available_width())
                    .hint_text("https://cloud.appwrite.io/v1"),
            );
            ui.add_space(8.0);

            ui.label("Project ID");
            ui.add(
                egui::TextEdit::singleline(&mut self.config.project_id)
                    .desired_width(ui.available_width())
                    .hint_text("Your Appwrite Project ID"),
            );
            ui.add_space(8.0);

            ui.label("Bucket ID");
            ui.add(
                egui::TextEdit::singleline(&mut self.config.bucket_id)
                    .desired_width(ui.available_width())
                    .hint_text("Your Appwrite Bucket ID"),
            );
        });
    }

    fn render_drop_zone(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let hovering_files = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let fill = if hovering_files {
            ui.visuals().selection.bg_fill.gamma_multiply(0.3)
        } else {
            ui.visuals().extreme_bg_color
        };

        let response = egui::Frame::group(ui.style())
            .fill(fill)
            .inner_margin(egui::Margin::same(24.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("📂").size(32.0));
                    ui.add_space(4.0);
                    ui.label("Drag & drop files here, or click to select files");
                });
            })
            .response;

        if response.interact(egui::Sense::click()).clicked() {
            if let Some(paths) = FileDialog::new().pick_files() {
                for path in paths {
                    self.selection.add_path(&path);
                }
            }
        }
    }

    fn render_file_list(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Selected files:");
            ui.add_space(4.0);

            let mut remove_index = None;
            for (index, file) in self.selection.files().iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(&file.name);
                    ui.label(
                        RichText::new(human_size(file.size))
                            .color(ui.visuals().text_color().gamma_multiply(0.6)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        if ui.small_button("❌").clicked() {
                            remove_index = Some(index);
                        }
                    });
                });
            }
            if let Some(index) = remove_index {
                self.selection.remove_at(index);
            }
        });
    }

    fn render_progress(&self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            if let Some(current_file) = &self.state.current_file {
                ui.label(format!("📤 Uploading: {}", current_file));
            }

            let progress_bar = egui::ProgressBar::new(self.state.progress_fraction())
                .show_percentage()
                .animate(true)
                .fill(ACCENT);
            ui.add(progress_bar);

            ui.label(self.state.status_line());
        });
    }

    fn render_banner(&self, ui: &mut egui::Ui) {
        let Some(status) = self.state.terminal_status() else {
            return;
        };

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            match status {
                BatchStatus::Success => {
                    ui.colored_label(SUCCESS_GREEN, "✅ Files uploaded successfully!");
                }
                BatchStatus::Error => {
                    ui.colored_label(
                        ERROR_RED,
                        "❌ Upload failed. Please check your Appwrite details and try again.",
                    );
                }
            }
            let status_line = self.state.status_line();
            if !status_line.is_empty() {
                ui.label(
                    RichText::new(status_line)
                        .color(ui.visuals().text_color().gamma_multiply(0.6)),
                );
            }
        });
    }

    fn render_details(&mut self, ui: &mut egui::Ui) {
        if ui
            .button(if self.state.show_details {
                "Hide Details"
            } else {
                "Show Details"
            })
            .clicked()
        {
            self.state.show_details = !self.state.show_details;
        }

        if self.state.show_details {
            egui::ScrollArea::vertical()
                .max_height(200.0)
                .show(ui, |ui| {
                    egui::Frame::none()
                        .fill(ui.style().visuals.extreme_bg_color)
                        .show(ui, |ui| {
                            ui.add_space(8.0);
                            for status in &self.state.file_statuses {
                                match &status.state {
                                    FileState::Uploading => {
                                        ui.horizontal(|ui| {
                                            ui.label("⏳");
                                            ui.colored_label(
                                                MUTED_GREY,
                                                format!("{} - Uploading...", status.name),
                                            );
                                        });
                                    }
                                    FileState::Stored => {
                                        ui.horizontal(|ui| {
                                            ui.label("✅");
                                            ui.colored_label(SUCCESS_GREEN, &status.name);
                                        });
                                    }
                                    FileState::Failed(message) => {
                                        ui.horizontal(|ui| {
                                            ui.label("❌");
                                            ui.colored_label(
                                                ERROR_RED,
                                                format!("{} - {}", status.name, message),
                                            );
                                        });
                                    }
                                }
                                ui.add_space(4.0);
                            }
                            ui.add_space(8.0);
                        });
                });
        }
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let footer_width = 200.0;
            let indent = (ui.available_width() - footer_width) / 2.0;
            ui.add_space(indent);
            ui.scope(|ui| {
                ui.set_width(footer_width);
                ui.horizontal_centered(|ui| {
                    ui.label("Built for");
                    if ui
                        .add(
                            egui::Label::new(RichText::new("Appwrite").color(ACCENT))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        let _ = open::that("https://appwrite.io");
                    }
                });
            });
        });

        if let Some(error) = &self.state.error_message {
            ui.add_space(5.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(ERROR_RED, error);
            });
        }
    }
}
