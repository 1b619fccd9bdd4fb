use std::sync::Arc;

use client_logging::client_warn;
use eframe::egui;
use retouch_core::{ImageStatsView, Msg, OutputView};

/// Right-hand output surface. Owns the texture uploaded for the current
/// processed image so it is decoded once, not every frame. The cache keeps
/// the source buffer alive, which is what makes keying on pointer identity
/// sound: a dropped buffer's address could be reused by the next image.
pub struct OutputPanel {
    texture: Option<(Arc<[u8]>, egui::TextureHandle)>,
}

impl OutputPanel {
    pub fn new() -> Self {
        Self { texture: None }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, output: &OutputView, msgs: &mut Vec<Msg>) {
        match output {
            OutputView::Placeholder { text } => {
                ui.weak(*text);
            }
            OutputView::Loading { message } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(message);
                });
            }
            OutputView::Error { message } => {
                ui.colored_label(ui.visuals().error_fg_color, message);
            }
            OutputView::Text {
                heading,
                body,
                copy_note,
            } => {
                ui.heading(heading);
                ui.separator();
                if *copy_note {
                    ui.label(egui::RichText::new(body).italics());
                } else {
                    ui.label(body);
                }
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Copy Text").clicked() {
                        msgs.push(Msg::CopyClicked);
                    }
                    if ui.button("Clear").clicked() {
                        msgs.push(Msg::ClearClicked);
                    }
                });
            }
            OutputView::Image {
                heading,
                stats,
                bytes,
            } => {
                ui.heading(heading);
                ui.separator();
                match self.texture_for(ui.ctx(), bytes) {
                    Some(texture) => {
                        ui.add(
                            egui::Image::new(&texture)
                                .max_width(ui.available_width())
                                .shrink_to_fit(),
                        );
                    }
                    None => {
                        ui.weak("Preview unavailable");
                    }
                }
                show_stats(ui, stats);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Download Processed Image").clicked() {
                        msgs.push(Msg::DownloadClicked);
                    }
                    if ui.button("Clear").clicked() {
                        msgs.push(Msg::ClearClicked);
                    }
                });
            }
        }
    }

    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        bytes: &Arc<[u8]>,
    ) -> Option<egui::TextureHandle> {
        if let Some((cached, texture)) = &self.texture {
            if Arc::ptr_eq(cached, bytes) {
                return Some(texture.clone());
            }
        }
        let color_image = decode_to_color_image(bytes)?;
        let texture = ctx.load_texture("processed_image", color_image, egui::TextureOptions::LINEAR);
        self.texture = Some((bytes.clone(), texture.clone()));
        Some(texture)
    }
}

fn decode_to_color_image(bytes: &[u8]) -> Option<egui::ColorImage> {
    let decoded = match image::load_from_memory(bytes) {
        Ok(decoded) => decoded,
        Err(err) => {
            client_warn!("could not decode processed image for preview: {}", err);
            return None;
        }
    };
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(egui::ColorImage::from_rgba_unmultiplied(
        [width as usize, height as usize],
        &rgba,
    ))
}

fn show_stats(ui: &mut egui::Ui, stats: &ImageStatsView) {
    ui.add_space(8.0);
    ui.strong("Processing Results:");
    egui::Grid::new("image_stats").num_columns(2).show(ui, |ui| {
        stat_row(ui, "Action:", &stats.action);
        stat_row(ui, "Original Size:", &stats.original_size);
        stat_row(ui, "Processed Size:", &stats.processed_size);
        stat_row(ui, "Original File Size:", &stats.original_file_size);
        stat_row(ui, "Processed File Size:", &stats.processed_file_size);
        stat_row(ui, "Size Change:", &stats.size_change);
        stat_row(ui, "Format:", &stats.format);
    });
}

fn stat_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.strong(label);
    ui.label(value);
    ui.end_row();
}
