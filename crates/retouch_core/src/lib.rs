//! Retouch core: pure state machine and view-model helpers.
mod action;
mod document;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use action::{ImageAction, TextAction};
pub use document::{ContentBlock, Document, ImageRef, ImageTarget};
pub use effect::{Effect, COPY_NOTE_MILLIS};
pub use msg::Msg;
pub use state::{
    AppState, MenuAnchor, MenuState, OutputState, PageState, PendingAction, ProcessedImage,
    RequestToken,
};
pub use update::update;
pub use view_model::{
    AppViewModel, BlockView, DocumentView, ImageStatsView, ImageView, MenuButton, MenuView,
    OutputView, PageView, COPY_NOTE_TEXT, OUTPUT_PLACEHOLDER,
};
