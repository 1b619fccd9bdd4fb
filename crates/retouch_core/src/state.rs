use std::sync::Arc;

use crate::action::{ImageAction, TextAction};
use crate::document::{Document, ImageTarget};
use crate::view_model::AppViewModel;

/// Monotonically increasing marker attached to every dispatched request.
/// A response is accepted only if its token matches the latest dispatch for
/// the surface it targets; stale responses are discarded.
pub type RequestToken = u64;

/// Position of a selection's visible bounding box, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuAnchor {
    pub x: f32,
    pub y: f32,
}

/// The single ephemeral overlay. Holding it as one value guarantees that at
/// most one menu is open regardless of which interaction created it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MenuState {
    #[default]
    Hidden,
    Text {
        text: String,
        anchor: MenuAnchor,
    },
    Image {
        url: String,
        target: ImageTarget,
    },
}

/// Lifecycle of the rendered document tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Blank,
    Loading,
    /// Scrape failed; only the message is rendered.
    Failed(String),
    Ready(Document),
}

/// Which dispatch the output surface is waiting on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendingAction {
    Edit(TextAction),
    Process(ImageAction),
}

impl PendingAction {
    pub fn name(self) -> &'static str {
        match self {
            PendingAction::Edit(action) => action.name(),
            PendingAction::Process(action) => action.name(),
        }
    }
}

/// Outcome of an image process request, with the payload already decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    pub bytes: Arc<[u8]>,
    pub original_size: (u32, u32),
    pub processed_size: (u32, u32),
    pub original_bytes: u64,
    pub processed_bytes: u64,
    /// Positive when the processed file shrank, as reported by the backend.
    pub size_reduction_percent: f64,
    pub format: String,
}

/// The secondary output surface fed by dispatched actions.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OutputState {
    #[default]
    Empty,
    Loading {
        pending: PendingAction,
    },
    Text {
        action: TextAction,
        body: String,
        copy_note: bool,
    },
    Image {
        action: ImageAction,
        image: ProcessedImage,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) input: String,
    pub(crate) page: PageState,
    pub(crate) menu: MenuState,
    pub(crate) output: OutputState,
    pub(crate) next_token: RequestToken,
    /// URL of the in-flight scrape, stamped onto the arriving document.
    pub(crate) pending_url: Option<String>,
    pub(crate) page_token: Option<RequestToken>,
    pub(crate) output_token: Option<RequestToken>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    /// Returns the dirty flag and clears it; the shell re-renders when true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn fresh_token(&mut self) -> RequestToken {
        self.next_token += 1;
        self.next_token
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }
}
