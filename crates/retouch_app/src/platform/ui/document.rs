use eframe::egui;
use retouch_core::{BlockView, DocumentView, ImageView, MenuAnchor, Msg, PageView};

use super::constants::MENU_BELOW_SELECTION_OFFSET;

pub fn show(ui: &mut egui::Ui, page: &PageView, msgs: &mut Vec<Msg>) {
    match page {
        PageView::Blank => {
            ui.weak("Enter a URL above and press Fetch.");
        }
        PageView::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Scraping website...");
            });
        }
        PageView::Error(message) => {
            ui.colored_label(ui.visuals().error_fg_color, message);
        }
        PageView::Document(document) => show_document(ui, document, msgs),
    }
}

fn show_document(ui: &mut egui::Ui, document: &DocumentView, msgs: &mut Vec<Msg>) {
    ui.horizontal_wrapped(|ui| {
        ui.strong("Source:");
        ui.hyperlink(&document.source_url);
    });
    ui.heading(&document.title);
    if !document.meta_description.is_empty() {
        ui.label(egui::RichText::new(&document.meta_description).italics().weak());
    }
    ui.separator();

    if let Some(heading) = &document.gallery_heading {
        ui.strong(heading);
        ui.add_space(4.0);
        for image in &document.gallery {
            image_tile(ui, image, msgs);
        }
        ui.separator();
    }

    if document.no_content {
        ui.weak("No content blocks found");
        return;
    }

    for block in &document.blocks {
        show_block(ui, block, msgs);
    }
}

fn show_block(ui: &mut egui::Ui, block: &BlockView, msgs: &mut Vec<Msg>) {
    ui.push_id(&block.id, |ui| {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong(&block.label);
                ui.label(egui::RichText::new(&block.kind_label).small().weak());
            });
            selectable_text(ui, &block.text, msgs);
            for image in &block.images {
                image_tile(ui, image, msgs);
            }
        });
    });
    ui.add_space(6.0);
}

/// Read-only text whose selection opens the edit menu once the pointer
/// settles, either after a drag or a double-click word select.
fn selectable_text(ui: &mut egui::Ui, text: &str, msgs: &mut Vec<Msg>) {
    let mut buffer: &str = text;
    let output = egui::TextEdit::multiline(&mut buffer)
        .desired_width(f32::INFINITY)
        .frame(false)
        .show(ui);

    let selection_ended =
        output.response.drag_stopped() || output.response.double_clicked();
    if !selection_ended {
        return;
    }
    let Some(range) = output.cursor_range else {
        return;
    };
    let (start, end) = sorted_char_range(
        range.primary.ccursor.index,
        range.secondary.ccursor.index,
    );
    if start == end {
        return;
    }
    let selected: String = text.chars().skip(start).take(end - start).collect();

    let anchor = selection_anchor(
        output.galley.pos_from_cursor(&range.primary),
        output.galley.pos_from_cursor(&range.secondary),
        output.galley_pos,
    );
    msgs.push(Msg::TextSelected {
        text: selected,
        anchor,
    });
}

fn sorted_char_range(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

/// Menu position just below the selection's bounding box. The cursor rects
/// are galley-local and the drag may run in either direction, so take the
/// leftmost edge and the lower bottom before converting to window space.
fn selection_anchor(
    primary: egui::Rect,
    secondary: egui::Rect,
    galley_pos: egui::Pos2,
) -> MenuAnchor {
    let bounds = primary.union(secondary);
    MenuAnchor {
        x: galley_pos.x + bounds.left(),
        y: galley_pos.y + bounds.bottom() + MENU_BELOW_SELECTION_OFFSET,
    }
}

fn image_tile(ui: &mut egui::Ui, image: &ImageView, msgs: &mut Vec<Msg>) {
    let response = ui
        .group(|ui| {
            ui.horizontal(|ui| {
                ui.label("🖼");
                ui.vertical(|ui| {
                    if image.alt.is_empty() {
                        ui.weak("(no caption)");
                    } else {
                        ui.strong(&image.alt);
                    }
                    ui.label(egui::RichText::new(&image.url).small().weak());
                });
            });
        })
        .response
        .interact(egui::Sense::click());

    if response.on_hover_text("Click to process this image").clicked() {
        msgs.push(Msg::ImageClicked {
            url: image.url.clone(),
            target: image.target,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{selection_anchor, sorted_char_range, MENU_BELOW_SELECTION_OFFSET};
    use eframe::egui::{pos2, Rect};

    #[test]
    fn anchor_sits_below_the_selection_regardless_of_drag_direction() {
        // Selection spanning two lines; one cursor sits on each.
        let upper = Rect::from_min_max(pos2(40.0, 10.0), pos2(41.0, 24.0));
        let lower = Rect::from_min_max(pos2(5.0, 52.0), pos2(6.0, 66.0));
        let galley_pos = pos2(100.0, 200.0);

        let downward = selection_anchor(upper, lower, galley_pos);
        let upward = selection_anchor(lower, upper, galley_pos);

        assert_eq!(downward, upward);
        assert_eq!(downward.x, 105.0);
        assert_eq!(downward.y, 266.0 + MENU_BELOW_SELECTION_OFFSET);
    }

    #[test]
    fn char_range_is_ordered() {
        assert_eq!(sorted_char_range(7, 2), (2, 7));
        assert_eq!(sorted_char_range(2, 7), (2, 7));
    }
}
