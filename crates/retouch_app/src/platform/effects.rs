use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use client_logging::client_debug;
use retouch_client::{ApiError, BackendSettings, ClientEvent, ClientHandle};
use retouch_core::{Document, Effect, Msg};

/// Bridges core effects to the backend client and client events back to the
/// core's message channel. Clipboard, timers, and file dialogs stay in the
/// UI shell; this runner owns only the network path.
pub struct EffectRunner {
    client: Arc<ClientHandle>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: BackendSettings) -> Result<Self, ApiError> {
        let client = Arc::new(ClientHandle::new(settings)?);
        let runner = Self { client };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    /// Executes a network effect. Non-network effects are the shell's job
    /// and are ignored here.
    pub fn run(&self, effect: Effect) {
        match effect {
            Effect::DispatchScrape { token, url } => {
                self.client.scrape(token, url);
            }
            Effect::DispatchTextEdit {
                token,
                text,
                action,
            } => {
                self.client.edit_text(token, text, map_text_action(action));
            }
            Effect::DispatchImageProcess {
                token,
                image_url,
                target_id,
                action,
            } => {
                self.client
                    .process_image(token, image_url, target_id, map_image_action(action));
            }
            Effect::CopyToClipboard { .. }
            | Effect::ScheduleCopyNoteDismiss
            | Effect::SaveImage { .. } => {}
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                if msg_tx.send(event_to_msg(event)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn event_to_msg(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::ScrapeFinished { token, result } => Msg::ScrapeFinished {
            token,
            result: result
                .map(document_from_page)
                .map_err(|err| err.to_string()),
        },
        ClientEvent::EditFinished { token, result } => Msg::EditFinished {
            token,
            result: result.map_err(|err| err.to_string()),
        },
        ClientEvent::ProcessFinished { token, result } => {
            if let Err(err) = &result {
                client_debug!("process failure surfaced to output: {}", err);
            }
            Msg::ProcessFinished {
                token,
                result: result.map(image_from_wire).map_err(|err| err.to_string()),
            }
        }
    }
}

fn document_from_page(page: retouch_client::ScrapedPage) -> Document {
    Document {
        // Filled in by the core from the submitted URL.
        source_url: String::new(),
        title: non_empty_or(page.title, "No title found"),
        meta_description: non_empty_or(page.meta_description, "No meta description found"),
        images: page.images.into_iter().map(image_ref_from_wire).collect(),
        blocks: page
            .content_blocks
            .into_iter()
            .map(|block| retouch_core::ContentBlock {
                id: block.id,
                kind: block.kind,
                text: block.text,
                images: block.images.into_iter().map(image_ref_from_wire).collect(),
            })
            .collect(),
    }
}

fn image_ref_from_wire(image: retouch_client::ScrapedImage) -> retouch_core::ImageRef {
    retouch_core::ImageRef {
        url: image.url,
        alt: image.alt,
    }
}

fn image_from_wire(image: retouch_client::ProcessedImage) -> retouch_core::ProcessedImage {
    retouch_core::ProcessedImage {
        bytes: Arc::from(image.bytes),
        original_size: image.original_size,
        processed_size: image.processed_size,
        original_bytes: image.original_file_size,
        processed_bytes: image.processed_file_size,
        size_reduction_percent: image.size_reduction_percent,
        format: image.format,
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

pub fn map_text_action(action: retouch_core::TextAction) -> retouch_client::TextAction {
    match action {
        retouch_core::TextAction::Rephrase => retouch_client::TextAction::Rephrase,
        retouch_core::TextAction::Simplify => retouch_client::TextAction::Simplify,
        retouch_core::TextAction::Lengthen => retouch_client::TextAction::Lengthen,
        retouch_core::TextAction::ToneFormal => retouch_client::TextAction::ToneFormal,
        retouch_core::TextAction::ToneFunny => retouch_client::TextAction::ToneFunny,
        retouch_core::TextAction::ToneSerious => retouch_client::TextAction::ToneSerious,
        retouch_core::TextAction::ToneSad => retouch_client::TextAction::ToneSad,
    }
}

pub fn map_image_action(action: retouch_core::ImageAction) -> retouch_client::ImageAction {
    match action {
        retouch_core::ImageAction::Resize => retouch_client::ImageAction::Resize,
        retouch_core::ImageAction::Compress => retouch_client::ImageAction::Compress,
        retouch_core::ImageAction::EnhanceBrightness => {
            retouch_client::ImageAction::EnhanceBrightness
        }
        retouch_core::ImageAction::EnhanceContrast => {
            retouch_client::ImageAction::EnhanceContrast
        }
        retouch_core::ImageAction::Blur => retouch_client::ImageAction::Blur,
        retouch_core::ImageAction::Sharpen => retouch_client::ImageAction::Sharpen,
        retouch_core::ImageAction::Grayscale => retouch_client::ImageAction::Grayscale,
        retouch_core::ImageAction::Sepia => retouch_client::ImageAction::Sepia,
    }
}

#[cfg(test)]
mod tests {
    use super::{document_from_page, map_image_action, map_text_action};
    use retouch_client::{ScrapedBlock, ScrapedImage, ScrapedPage};

    #[test]
    fn action_names_survive_the_mapping() {
        for action in retouch_core::TextAction::ALL {
            assert_eq!(action.name(), map_text_action(action).as_str());
        }
        for action in retouch_core::ImageAction::ALL {
            assert_eq!(action.name(), map_image_action(action).as_str());
        }
    }

    #[test]
    fn sparse_page_gets_placeholders() {
        let document = document_from_page(ScrapedPage::default());
        assert_eq!(document.title, "No title found");
        assert_eq!(document.meta_description, "No meta description found");
        assert!(document.blocks.is_empty());
    }

    #[test]
    fn blocks_and_images_carry_over() {
        let page = ScrapedPage {
            title: "T".to_string(),
            meta_description: "M".to_string(),
            images: vec![ScrapedImage {
                url: "https://example.com/a.png".to_string(),
                alt: "A".to_string(),
            }],
            content_blocks: vec![ScrapedBlock {
                id: "b1".to_string(),
                kind: "paragraph".to_string(),
                text: "Body".to_string(),
                images: Vec::new(),
            }],
        };
        let document = document_from_page(page);
        assert_eq!(document.images[0].alt, "A");
        assert_eq!(document.blocks[0].kind, "paragraph");
    }
}
