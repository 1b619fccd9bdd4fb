use std::sync::Arc;

use crate::action::{ImageAction, TextAction};
use crate::state::RequestToken;

/// How long the copy confirmation stays up before the result is restored.
pub const COPY_NOTE_MILLIS: u64 = 2000;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    DispatchScrape {
        token: RequestToken,
        url: String,
    },
    DispatchTextEdit {
        token: RequestToken,
        text: String,
        action: TextAction,
    },
    DispatchImageProcess {
        token: RequestToken,
        image_url: String,
        target_id: String,
        action: ImageAction,
    },
    /// Write the plain result text to the system clipboard.
    CopyToClipboard {
        text: String,
    },
    /// Deliver `Msg::CopyNoteExpired` after `COPY_NOTE_MILLIS`.
    ScheduleCopyNoteDismiss,
    /// Save the processed image under a name derived from the action kind.
    SaveImage {
        bytes: Arc<[u8]>,
        action: ImageAction,
        format: String,
    },
}
