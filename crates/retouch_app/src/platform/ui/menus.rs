use eframe::egui;
use retouch_core::{MenuView, Msg};

/// Renders whichever menu is open and returns its screen rect so the shell
/// can tell menu presses from outside presses.
pub fn show(ctx: &egui::Context, menu: &MenuView, msgs: &mut Vec<Msg>) -> Option<egui::Rect> {
    match menu {
        MenuView::Hidden => None,
        MenuView::Text { anchor, actions } => {
            let area = egui::Area::new(egui::Id::new("text_action_menu"))
                .order(egui::Order::Foreground)
                .fixed_pos(egui::pos2(anchor.x, anchor.y))
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            for button in actions {
                                if ui.button(button.label).clicked() {
                                    msgs.push(Msg::TextActionChosen(button.action));
                                }
                            }
                        });
                    });
                });
            Some(area.response.rect)
        }
        MenuView::Image { url, actions } => {
            let area = egui::Area::new(egui::Id::new("image_action_menu"))
                .order(egui::Order::Foreground)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.heading("Process Image");
                        ui.label(egui::RichText::new(url.as_str()).small().weak());
                        ui.separator();
                        egui::Grid::new("image_action_grid")
                            .num_columns(2)
                            .show(ui, |ui| {
                                for pair in actions.chunks(2) {
                                    for button in pair {
                                        if ui.button(button.label).clicked() {
                                            msgs.push(Msg::ImageActionChosen(button.action));
                                        }
                                    }
                                    ui.end_row();
                                }
                            });
                        ui.separator();
                        if ui.button("Close").clicked() {
                            msgs.push(Msg::MenuDismissed);
                        }
                    });
                });
            Some(area.response.rect)
        }
    }
}
