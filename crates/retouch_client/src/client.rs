use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use client_logging::{client_info, client_warn};

use crate::actions::{ImageAction, TextAction};
use crate::api::{BackendApi, BackendSettings, ReqwestBackend};
use crate::types::{ApiError, ProcessedImage, ScrapedPage};

/// Generation token supplied by the caller with every dispatch and echoed
/// back on the matching event, so stale responses can be discarded.
pub type RequestToken = u64;

enum ClientCommand {
    Scrape {
        token: RequestToken,
        url: String,
    },
    EditText {
        token: RequestToken,
        text: String,
        action: TextAction,
    },
    ProcessImage {
        token: RequestToken,
        image_url: String,
        image_id: String,
        action: ImageAction,
    },
}

#[derive(Debug)]
pub enum ClientEvent {
    ScrapeFinished {
        token: RequestToken,
        result: Result<ScrapedPage, ApiError>,
    },
    EditFinished {
        token: RequestToken,
        result: Result<Option<String>, ApiError>,
    },
    ProcessFinished {
        token: RequestToken,
        result: Result<ProcessedImage, ApiError>,
    },
}

/// Owns a tokio runtime on a worker thread; commands in, events out.
/// The event receiver sits behind a mutex so the handle can be shared
/// between the dispatching thread and the event-polling thread.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Mutex<mpsc::Receiver<ClientEvent>>,
}

impl ClientHandle {
    pub fn new(settings: BackendSettings) -> Result<Self, ApiError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ReqwestBackend::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        })
    }

    pub fn scrape(&self, token: RequestToken, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Scrape {
            token,
            url: url.into(),
        });
    }

    pub fn edit_text(&self, token: RequestToken, text: impl Into<String>, action: TextAction) {
        let _ = self.cmd_tx.send(ClientCommand::EditText {
            token,
            text: text.into(),
            action,
        });
    }

    pub fn process_image(
        &self,
        token: RequestToken,
        image_url: impl Into<String>,
        image_id: impl Into<String>,
        action: ImageAction,
    ) {
        let _ = self.cmd_tx.send(ClientCommand::ProcessImage {
            token,
            image_url: image_url.into(),
            image_id: image_id.into(),
            action,
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|rx| rx.try_recv().ok())
    }
}

async fn handle_command(
    api: &dyn BackendApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Scrape { token, url } => {
            client_info!("scrape token={} url={}", token, url);
            let result = api.scrape(&url).await;
            if let Err(err) = &result {
                client_warn!("scrape token={} failed: {} ({})", token, err, err.kind);
            }
            let _ = event_tx.send(ClientEvent::ScrapeFinished { token, result });
        }
        ClientCommand::EditText {
            token,
            text,
            action,
        } => {
            client_info!(
                "edit token={} action={} text_len={}",
                token,
                action.as_str(),
                text.len()
            );
            let result = api.edit_text(&text, action).await;
            if let Err(err) = &result {
                client_warn!("edit token={} failed: {} ({})", token, err, err.kind);
            }
            let _ = event_tx.send(ClientEvent::EditFinished { token, result });
        }
        ClientCommand::ProcessImage {
            token,
            image_url,
            image_id,
            action,
        } => {
            client_info!(
                "process token={} action={} image_id={} url={}",
                token,
                action.as_str(),
                image_id,
                image_url
            );
            let result = api.process_image(&image_url, action).await;
            if let Err(err) = &result {
                client_warn!("process token={} failed: {} ({})", token, err, err.kind);
            }
            let _ = event_tx.send(ClientEvent::ProcessFinished { token, result });
        }
    }
}
