use crate::action::{ImageAction, TextAction};
use crate::document::{Document, ImageTarget};
use crate::state::{MenuAnchor, ProcessedImage, RequestToken};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL input for scraping.
    UrlSubmitted,
    /// Scrape response arrived for the dispatch tagged with `token`.
    ScrapeFinished {
        token: RequestToken,
        result: Result<Document, String>,
    },
    /// End-of-selection inside a text region; `text` is the raw selection.
    TextSelected { text: String, anchor: MenuAnchor },
    /// Pointer click on a rendered image element.
    ImageClicked { url: String, target: ImageTarget },
    /// User picked an action from the open text menu.
    TextActionChosen(TextAction),
    /// User picked an action from the open image menu.
    ImageActionChosen(ImageAction),
    /// Outside interaction while a menu was open.
    MenuDismissed,
    /// Edit response; `Ok(None)` means the backend reported no change.
    EditFinished {
        token: RequestToken,
        result: Result<Option<String>, String>,
    },
    /// Image process response for the dispatch tagged with `token`.
    ProcessFinished {
        token: RequestToken,
        result: Result<ProcessedImage, String>,
    },
    /// Copy button on a settled text result.
    CopyClicked,
    /// The 2-second copy confirmation elapsed.
    CopyNoteExpired,
    /// Clear button on the output surface.
    ClearClicked,
    /// Download button on a settled image result.
    DownloadClicked,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
