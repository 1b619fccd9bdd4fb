use std::sync::Arc;

use crate::action::{ImageAction, TextAction};
use crate::document::{Document, ImageTarget};
use crate::state::{AppState, MenuAnchor, MenuState, OutputState, PageState, ProcessedImage};

/// Shown on the output surface before anything has been dispatched.
pub const OUTPUT_PLACEHOLDER: &str = "Select text from the left panel to edit";

/// Transient confirmation shown in place of the result after a copy.
pub const COPY_NOTE_TEXT: &str = "Text copied to clipboard!";

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub input: String,
    pub page: PageView,
    pub menu: MenuView,
    pub output: OutputView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Blank,
    Loading,
    /// Scrape failed; nothing but the message is rendered.
    Error(String),
    Document(DocumentView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentView {
    pub source_url: String,
    pub title: String,
    pub meta_description: String,
    /// `Images Found (<n>)`; absent when the page has no gallery images.
    pub gallery_heading: Option<String>,
    pub gallery: Vec<ImageView>,
    pub blocks: Vec<BlockView>,
    /// True when the scrape yielded no content blocks.
    pub no_content: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
    pub target: ImageTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockView {
    pub id: String,
    /// `Block 1`, `Block 2`, ... in document order.
    pub label: String,
    /// The block kind, uppercased for the header tag.
    pub kind_label: String,
    pub text: String,
    pub images: Vec<ImageView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuButton<A> {
    pub action: A,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuView {
    Hidden,
    /// Anchored just below the selection bounds.
    Text {
        anchor: MenuAnchor,
        actions: Vec<MenuButton<TextAction>>,
    },
    /// Centered on the viewport, independent of the clicked image.
    Image {
        url: String,
        actions: Vec<MenuButton<ImageAction>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutputView {
    Placeholder {
        text: &'static str,
    },
    Loading {
        message: String,
    },
    Text {
        heading: String,
        /// The copy confirmation while `copy_note` is up, else the result.
        body: String,
        copy_note: bool,
    },
    Image {
        heading: String,
        stats: ImageStatsView,
        bytes: Arc<[u8]>,
    },
    Error {
        message: String,
    },
}

/// Pre-formatted stats block for a processed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStatsView {
    pub action: String,
    pub original_size: String,
    pub processed_size: String,
    pub original_file_size: String,
    pub processed_file_size: String,
    /// Sign flipped from the wire value: growth positive, shrinkage negative.
    pub size_change: String,
    pub format: String,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        Self {
            input: state.input.clone(),
            page: page_view(&state.page),
            menu: menu_view(&state.menu),
            output: output_view(&state.output),
            dirty: state.is_dirty(),
        }
    }
}

fn page_view(page: &PageState) -> PageView {
    match page {
        PageState::Blank => PageView::Blank,
        PageState::Loading => PageView::Loading,
        PageState::Failed(message) => PageView::Error(message.clone()),
        PageState::Ready(document) => PageView::Document(document_view(document)),
    }
}

fn document_view(document: &Document) -> DocumentView {
    let gallery: Vec<ImageView> = document
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| ImageView {
            url: image.url.clone(),
            alt: image.alt.clone(),
            target: ImageTarget::Gallery { index },
        })
        .collect();

    let blocks: Vec<BlockView> = document
        .blocks
        .iter()
        .enumerate()
        .map(|(block_index, block)| BlockView {
            id: block.id.clone(),
            label: format!("Block {}", block_index + 1),
            kind_label: block.kind.to_uppercase(),
            text: block.text.clone(),
            images: block
                .images
                .iter()
                .enumerate()
                .map(|(image_index, image)| ImageView {
                    url: image.url.clone(),
                    alt: image.alt.clone(),
                    target: ImageTarget::Inline {
                        block: block_index,
                        image: image_index,
                    },
                })
                .collect(),
        })
        .collect();

    DocumentView {
        source_url: document.source_url.clone(),
        title: document.title.clone(),
        meta_description: document.meta_description.clone(),
        gallery_heading: (!gallery.is_empty())
            .then(|| format!("Images Found ({})", gallery.len())),
        gallery,
        no_content: blocks.is_empty(),
        blocks,
    }
}

fn menu_view(menu: &MenuState) -> MenuView {
    match menu {
        MenuState::Hidden => MenuView::Hidden,
        MenuState::Text { anchor, .. } => MenuView::Text {
            anchor: *anchor,
            actions: TextAction::ALL
                .iter()
                .map(|&action| MenuButton {
                    action,
                    label: action.label(),
                })
                .collect(),
        },
        MenuState::Image { url, .. } => MenuView::Image {
            url: url.clone(),
            actions: ImageAction::ALL
                .iter()
                .map(|&action| MenuButton {
                    action,
                    label: action.label(),
                })
                .collect(),
        },
    }
}

fn output_view(output: &OutputState) -> OutputView {
    match output {
        OutputState::Empty => OutputView::Placeholder {
            text: OUTPUT_PLACEHOLDER,
        },
        OutputState::Loading { pending } => OutputView::Loading {
            message: match pending {
                crate::state::PendingAction::Edit(action) => {
                    format!("Editing text with {}...", action.name())
                }
                crate::state::PendingAction::Process(action) => {
                    format!("Processing image with {}...", action.name())
                }
            },
        },
        OutputState::Text {
            action,
            body,
            copy_note,
        } => OutputView::Text {
            heading: format!("Edited Text - {}", headline(action.name())),
            body: if *copy_note {
                COPY_NOTE_TEXT.to_owned()
            } else {
                body.clone()
            },
            copy_note: *copy_note,
        },
        OutputState::Image { action, image } => OutputView::Image {
            heading: format!("Processed Image - {}", headline(action.name())),
            stats: image_stats(*action, image),
            bytes: image.bytes.clone(),
        },
        OutputState::Error { message } => OutputView::Error {
            message: message.clone(),
        },
    }
}

fn image_stats(action: ImageAction, image: &ProcessedImage) -> ImageStatsView {
    ImageStatsView {
        action: action.name().replace('_', " "),
        original_size: format_dimensions(image.original_size),
        processed_size: format_dimensions(image.processed_size),
        original_file_size: format_kb(image.original_bytes),
        processed_file_size: format_kb(image.processed_bytes),
        size_change: format_size_change(image.size_reduction_percent),
        format: image.format.clone(),
    }
}

fn headline(name: &str) -> String {
    name.replace('_', " ").to_uppercase()
}

fn format_dimensions((width, height): (u32, u32)) -> String {
    format!("{width} × {height}px")
}

fn format_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// The backend reports reductions as positive. Flip the sign so growth shows
/// as positive and shrinkage as negative.
fn format_size_change(reduction_percent: f64) -> String {
    let sign = if reduction_percent > 0.0 { "-" } else { "+" };
    format!("{sign}{:.1}%", reduction_percent.abs())
}

#[cfg(test)]
mod tests {
    use super::{format_kb, format_size_change, headline};

    #[test]
    fn headline_uppercases_and_splits() {
        assert_eq!(headline("tone_formal"), "TONE FORMAL");
        assert_eq!(headline("blur"), "BLUR");
    }

    #[test]
    fn kb_formatting_keeps_one_decimal() {
        assert_eq!(format_kb(10 * 1024), "10.0 KB");
        assert_eq!(format_kb(1234), "1.2 KB");
    }

    #[test]
    fn size_change_sign_is_flipped() {
        assert_eq!(format_size_change(30.0), "-30.0%");
        assert_eq!(format_size_change(-12.5), "+12.5%");
        assert_eq!(format_size_change(0.0), "+0.0%");
    }
}
