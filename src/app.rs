use crate::ai::client::AiClient;
use crate::ai::context::{compose_prompt, format_canvas};
use crate::ai::conversation::Conversation;
use crate::event::AppEvent;
use crate::search::SearchIndex;
use crate::state::store::{StateChanged, Store};
use crate::theme::Theme;
use crate::ui::{self, FrameOutput, ViewState};
use chrono::Local;
use eframe::egui;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

const SAVED_FLASH: Duration = Duration::from_secs(2);
const MAX_DIAGNOSTICS: usize = 200;

pub struct StratkitApp {
    store: Store,
    changes: Receiver<StateChanged>,
    rx: Receiver<AppEvent>,
    ai: Option<AiClient>,
    theme: Theme,
    search: SearchIndex,
    conversation: Conversation,
    view: ViewState,
    diagnostics_log: Vec<String>,
}

impl StratkitApp {
    pub fn new(mut store: Store, rx: Receiver<AppEvent>, ai: Option<AiClient>, theme: Theme) -> Self {
        let changes = store.subscribe();
        let search = SearchIndex::build(store.state());
        let ai_status = match &ai {
            Some(client) if client.is_configured() => {
                format!("AI assistant ready (model {})", client.model())
            }
            Some(_) => "AI assistant has no API key; replies will fail".to_string(),
            None => "AI assistant unavailable".to_string(),
        };
        let mut app = Self {
            store,
            changes,
            rx,
            ai,
            theme,
            search,
            conversation: Conversation::default(),
            view: ViewState::default(),
            diagnostics_log: Vec::new(),
        };

        app.log_diagnostic(ai_status);
        app
    }

    fn log_diagnostic(&mut self, message: impl Into<String>) {
        self.diagnostics_log.push(format!(
            "[{}] {}",
            Local::now().format("%H:%M:%S"),
            message.into()
        ));
        if self.diagnostics_log.len() > MAX_DIAGNOSTICS {
            let excess = self.diagnostics_log.len() - MAX_DIAGNOSTICS;
            self.diagnostics_log.drain(..excess);
        }
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        loop {
            match self.rx.try_recv() {
                Ok(event) => self.apply_event(event, ctx),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.log_diagnostic("event channel disconnected");
                    break;
                }
            }
        }
    }

    fn apply_event(&mut self, event: AppEvent, ctx: &egui::Context) {
        match event {
            AppEvent::AiReply { request, text } => {
                if !self.conversation.complete(request, text) {
                    self.log_diagnostic(format!("discarded stale AI reply #{}", request.value()));
                }
            }
            AppEvent::AiFailed { request, error } => {
                let translator = self.store.translator();
                if self.conversation.fail(request, &translator) {
                    self.log_diagnostic(format!("AI request failed: {error}"));
                }
            }
        }
        ctx.request_repaint();
    }

    /// Rebuilds derived view data after committed state changes.
    fn drain_state_changes(&mut self) {
        let mut changed = None;
        while let Ok(StateChanged { revision }) = self.changes.try_recv() {
            changed = Some(revision);
        }
        let Some(revision) = changed else {
            return;
        };

        self.search = SearchIndex::build(self.store.state());
        tracing::debug!(
            revision,
            language = self.store.translator().language().code(),
            search_entries = self.search.len(),
            "state changed; refreshing views"
        );
        if !self.view.dialog.is_valid_for(self.store.state()) {
            self.view.dialog = ui::Dialog::None;
        }
    }

    fn ask(&mut self, question: &str) {
        let Some((request, question)) = self.conversation.begin(question) else {
            return;
        };

        let translator = self.store.translator();
        let state = self.store.state();
        let context = format_canvas(state.current_canvas(), &translator);
        let prompt = compose_prompt(
            state.current_project().map(|project| project.name.as_str()),
            &context,
            &question,
        );

        if let Some(client) = &self.ai {
            client.send(request, prompt);
            return;
        }
        self.conversation.fail(request, &translator);
        self.log_diagnostic("AI assistant unavailable; question not sent");
    }

    fn apply_output(&mut self, out: FrameOutput) {
        for action in out.actions {
            self.store.dispatch(action);
        }

        if let Some(question) = out.question {
            self.ask(&question);
        }

        if out.save_requested {
            match self.store.persist() {
                Ok(()) => {
                    self.view.saved_until = Some(Instant::now() + SAVED_FLASH);
                    self.view.save_failed = false;
                }
                Err(err) => {
                    self.view.save_failed = true;
                    self.log_diagnostic(format!("save failed: {err}"));
                }
            }
        }

        if out.reload_requested {
            if self.store.reload() {
                let revision = self.store.revision();
                self.log_diagnostic(format!("reloaded saved state (revision {revision})"));
            } else {
                self.log_diagnostic("reload left state unchanged");
            }
        }
    }
}

impl eframe::App for StratkitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);
        self.drain_state_changes();

        let translator = self.store.translator();
        if self.view.ai_panel_open {
            self.conversation.ensure_welcome(&translator);
        }

        let mut out = FrameOutput::default();
        let state = self.store.state();
        ui::header::show(
            ctx,
            &self.theme,
            state,
            &translator,
            &mut self.view,
            &self.search,
            &mut out,
        );
        if self.view.sidebar_open {
            ui::sidebar::show(
                ctx,
                &self.theme,
                state,
                &translator,
                &mut self.view,
                &self.diagnostics_log,
                &mut out,
            );
        }
        if self.view.ai_panel_open {
            ui::ai_panel::show(
                ctx,
                &self.theme,
                &translator,
                &self.conversation,
                &mut self.view,
                &mut out,
            );
        }
        ui::board::show(ctx, &self.theme, state, &translator, &mut self.view);
        ui::dialogs::show(
            ctx,
            &self.theme,
            state,
            &translator,
            &mut self.view.dialog,
            &mut out,
        );

        self.apply_output(out);

        if self.conversation.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
        if let Some(until) = self.view.saved_until {
            match until.checked_duration_since(Instant::now()) {
                Some(remaining) => ctx.request_repaint_after(remaining),
                None => self.view.saved_until = None,
            }
        }
    }
}
