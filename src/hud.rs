//! Text overlay drawn with egui.

use crate::render::HudStatus;

const PANEL_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 150);
const TEXT: egui::Color32 = egui::Color32::from_rgb(230, 230, 230);
const FPS_TEXT: egui::Color32 = egui::Color32::from_rgb(0, 228, 48);

/// Lay out the instructions panel and the FPS counter.
pub(crate) fn draw(ctx: &egui::Context, status: &HudStatus, instructions: &[String]) {
    egui::Area::new(egui::Id::new("hud_panel"))
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(PANEL_FILL)
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(90)))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    for line in instructions {
                        ui.label(egui::RichText::new(line).color(TEXT).monospace());
                    }
                    ui.separator();
                    ui.label(egui::RichText::new(status.status_line()).color(TEXT).monospace());
                    ui.label(egui::RichText::new(status.particles_line()).color(TEXT).monospace());
                });
        });

    egui::Area::new(egui::Id::new("hud_fps"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(status.fps_line()).color(FPS_TEXT).strong());
        });
}
