use crate::state::{MenuState, OutputState, PageState, PendingAction};
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.input = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::UrlSubmitted => {
            let url = state.input.trim().to_owned();
            if url.is_empty() {
                return (state, Vec::new());
            }
            if !is_fetchable_url(&url) {
                state.page = PageState::Failed(format!("Invalid URL: {url}"));
                state.menu = MenuState::Hidden;
                state.page_token = None;
                state.mark_dirty();
                return (state, Vec::new());
            }
            let token = state.fresh_token();
            state.page = PageState::Loading;
            // The new render replaces the tree; any open menu goes with it.
            state.menu = MenuState::Hidden;
            state.page_token = Some(token);
            state.pending_url = Some(url.clone());
            state.mark_dirty();
            vec![Effect::DispatchScrape { token, url }]
        }
        Msg::ScrapeFinished { token, result } => {
            if state.page_token != Some(token) {
                return (state, Vec::new());
            }
            state.page_token = None;
            state.menu = MenuState::Hidden;
            let pending_url = state.pending_url.take();
            state.page = match result {
                Ok(mut document) => {
                    if let Some(url) = pending_url {
                        document.source_url = url;
                    }
                    PageState::Ready(document)
                }
                Err(message) => PageState::Failed(message),
            };
            state.mark_dirty();
            Vec::new()
        }
        Msg::TextSelected { text, anchor } => {
            let trimmed = text.trim();
            if trimmed.is_empty() || !matches!(state.page, PageState::Ready(_)) {
                return (state, Vec::new());
            }
            state.menu = MenuState::Text {
                text: trimmed.to_owned(),
                anchor,
            };
            state.mark_dirty();
            Vec::new()
        }
        Msg::ImageClicked { url, target } => {
            if !matches!(state.page, PageState::Ready(_)) {
                return (state, Vec::new());
            }
            state.menu = MenuState::Image { url, target };
            state.mark_dirty();
            Vec::new()
        }
        Msg::TextActionChosen(action) => {
            let MenuState::Text { text, .. } = std::mem::take(&mut state.menu) else {
                return (state, Vec::new());
            };
            let token = state.fresh_token();
            state.output = OutputState::Loading {
                pending: PendingAction::Edit(action),
            };
            state.output_token = Some(token);
            state.mark_dirty();
            vec![Effect::DispatchTextEdit {
                token,
                text,
                action,
            }]
        }
        Msg::ImageActionChosen(action) => {
            let MenuState::Image { url, target } = std::mem::take(&mut state.menu) else {
                return (state, Vec::new());
            };
            let token = state.fresh_token();
            state.output = OutputState::Loading {
                pending: PendingAction::Process(action),
            };
            state.output_token = Some(token);
            state.mark_dirty();
            vec![Effect::DispatchImageProcess {
                token,
                image_url: url,
                target_id: target.composite_id(),
                action,
            }]
        }
        Msg::MenuDismissed => {
            if matches!(state.menu, MenuState::Hidden) {
                return (state, Vec::new());
            }
            state.menu = MenuState::Hidden;
            state.mark_dirty();
            Vec::new()
        }
        Msg::EditFinished { token, result } => {
            if state.output_token != Some(token) {
                return (state, Vec::new());
            }
            state.output_token = None;
            let action = match state.output {
                OutputState::Loading {
                    pending: PendingAction::Edit(action),
                } => action,
                // Token matched but the surface is no longer waiting on an
                // edit; treat the response as stale.
                _ => return (state, Vec::new()),
            };
            state.output = match result {
                Ok(body) => OutputState::Text {
                    action,
                    body: body.unwrap_or_else(|| "No changes made".to_owned()),
                    copy_note: false,
                },
                Err(message) => OutputState::Error { message },
            };
            state.mark_dirty();
            Vec::new()
        }
        Msg::ProcessFinished { token, result } => {
            if state.output_token != Some(token) {
                return (state, Vec::new());
            }
            state.output_token = None;
            let action = match state.output {
                OutputState::Loading {
                    pending: PendingAction::Process(action),
                } => action,
                _ => return (state, Vec::new()),
            };
            state.output = match result {
                Ok(image) => OutputState::Image { action, image },
                Err(message) => OutputState::Error { message },
            };
            state.mark_dirty();
            Vec::new()
        }
        Msg::CopyClicked => {
            let OutputState::Text {
                body, copy_note, ..
            } = &mut state.output
            else {
                return (state, Vec::new());
            };
            if *copy_note {
                return (state, Vec::new());
            }
            *copy_note = true;
            let text = body.clone();
            state.mark_dirty();
            vec![
                Effect::CopyToClipboard { text },
                Effect::ScheduleCopyNoteDismiss,
            ]
        }
        Msg::CopyNoteExpired => {
            if let OutputState::Text { copy_note, .. } = &mut state.output {
                if *copy_note {
                    *copy_note = false;
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::ClearClicked => {
            if matches!(state.output, OutputState::Empty) && state.output_token.is_none() {
                return (state, Vec::new());
            }
            state.output = OutputState::Empty;
            // A cleared surface accepts no late responses.
            state.output_token = None;
            state.mark_dirty();
            Vec::new()
        }
        Msg::DownloadClicked => {
            let OutputState::Image { action, image } = &state.output else {
                return (state, Vec::new());
            };
            vec![Effect::SaveImage {
                bytes: image.bytes.clone(),
                action: *action,
                format: image.format.clone(),
            }]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn is_fetchable_url(raw: &str) -> bool {
    match url::Url::parse(raw) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
