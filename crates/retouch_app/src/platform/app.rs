use std::sync::mpsc;
use std::time::{Duration, Instant};

use client_logging::{client_error, client_info};
use eframe::egui;
use retouch_client::BackendSettings;
use retouch_core::{update, AppState, AppViewModel, Effect, ImageAction, MenuView, Msg,
    COPY_NOTE_MILLIS};

use super::effects::{map_image_action, EffectRunner};
use super::ui;

pub fn run_app() -> eframe::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = match EffectRunner::new(msg_tx.clone(), BackendSettings::default()) {
        Ok(runner) => runner,
        Err(err) => {
            client_error!("failed to start backend client: {}", err);
            eprintln!("Failed to start backend client: {err}");
            return Ok(());
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Retouch")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Retouch",
        options,
        Box::new(move |_cc| Ok(Box::new(RetouchApp::new(runner, msg_tx, msg_rx)))),
    )
}

struct RetouchApp {
    state: AppState,
    /// Rebuilt only when the state reports itself dirty.
    view: AppViewModel,
    url_input: String,
    runner: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
    copy_note_deadline: Option<Instant>,
    output_panel: ui::output::OutputPanel,
}

impl RetouchApp {
    fn new(runner: EffectRunner, msg_tx: mpsc::Sender<Msg>, msg_rx: mpsc::Receiver<Msg>) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            url_input: String::new(),
            runner,
            msg_tx,
            msg_rx,
            copy_note_deadline: None,
            output_panel: ui::output::OutputPanel::new(),
        }
    }

    fn dispatch_msg(&mut self, ctx: &egui::Context, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(ctx, effect);
        }
        if self.state.consume_dirty() {
            self.view = self.state.view();
        }
    }

    fn run_effect(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::CopyToClipboard { text } => {
                ctx.copy_text(text);
            }
            Effect::ScheduleCopyNoteDismiss => {
                self.copy_note_deadline =
                    Some(Instant::now() + Duration::from_millis(COPY_NOTE_MILLIS));
            }
            Effect::SaveImage {
                bytes,
                action,
                format,
            } => save_image(&bytes, action, &format),
            network => self.runner.run(network),
        }
    }

    fn show_url_bar(&mut self, ctx: &egui::Context, msgs: &mut Vec<Msg>) {
        egui::TopBottomPanel::top("url_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("URL:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.url_input)
                        .hint_text("https://example.com")
                        .desired_width(ui.available_width() - 80.0),
                );
                if response.changed() {
                    msgs.push(Msg::InputChanged(self.url_input.clone()));
                }
                let submitted = response.lost_focus()
                    && ui.input(|input| input.key_pressed(egui::Key::Enter));
                if ui.button("Fetch").clicked() || submitted {
                    msgs.push(Msg::UrlSubmitted);
                }
            });
            ui.add_space(4.0);
        });
    }

    fn show_panels(&mut self, ctx: &egui::Context, msgs: &mut Vec<Msg>) {
        egui::SidePanel::left("document_panel")
            .resizable(true)
            .default_width(ui::constants::DOCUMENT_PANEL_DEFAULT_WIDTH)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("document_scroll")
                    .show(ui, |ui| {
                        ui::document::show(ui, &self.view.page, msgs);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("output_scroll")
                .show(ui, |ui| {
                    self.output_panel.show(ui, &self.view.output, msgs);
                });
        });
    }

    /// A pointer press anywhere outside the open menu dismisses it without
    /// dispatching anything.
    fn detect_outside_press(
        &self,
        ctx: &egui::Context,
        menu_rect: Option<egui::Rect>,
        msgs: &mut Vec<Msg>,
    ) {
        if matches!(self.view.menu, MenuView::Hidden) {
            return;
        }
        let pressed_at = ctx.input(|input| {
            if input.pointer.any_pressed() {
                input.pointer.press_origin()
            } else {
                None
            }
        });
        let Some(pos) = pressed_at else {
            return;
        };
        if !menu_rect.is_some_and(|rect| rect.contains(pos)) {
            msgs.push(Msg::MenuDismissed);
        }
    }
}

impl eframe::App for RetouchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(deadline) = self.copy_note_deadline {
            if Instant::now() >= deadline {
                self.copy_note_deadline = None;
                let _ = self.msg_tx.send(Msg::CopyNoteExpired);
            }
        }

        // Apply everything queued since the last frame, including events
        // forwarded from the backend client.
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch_msg(ctx, msg);
        }

        let mut msgs = Vec::new();
        self.show_url_bar(ctx, &mut msgs);
        self.show_panels(ctx, &mut msgs);
        let menu_rect = ui::menus::show(ctx, &self.view.menu, &mut msgs);
        self.detect_outside_press(ctx, menu_rect, &mut msgs);

        for msg in msgs {
            let _ = self.msg_tx.send(msg);
        }

        // Keep pumping while background responses may still arrive.
        ctx.request_repaint_after(Duration::from_millis(
            ui::constants::EVENT_PUMP_INTERVAL_MS,
        ));
    }
}

fn save_image(bytes: &[u8], action: ImageAction, format: &str) {
    let timestamp = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let filename =
        retouch_client::download_filename(map_image_action(action), format, timestamp);
    let Some(path) = rfd::FileDialog::new().set_file_name(&filename).save_file() else {
        client_info!("download cancelled");
        return;
    };
    match std::fs::write(&path, bytes) {
        Ok(()) => client_info!("saved processed image to {}", path.display()),
        Err(err) => client_error!("failed to save image to {}: {}", path.display(), err),
    }
}
