use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use chrono::{DateTime, Utc};
use eframe::egui::{self, Context};
use log::error;

use uraban_core::{BoardService, RestStore, Thread};

mod messages;
mod spawners;
mod state;
mod tasks;
mod ui;

use messages::AppMessage;
use state::{CreateThreadState, ThreadPhase, ThreadState, ViewState};
use ui::thread::ThreadAction;

/// How long a thread view waits between background polls of the store.
const POLL_INTERVAL: Duration = Duration::from_secs(15);

pub struct BoardApp {
    board: BoardService,
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,
    threads: Vec<Thread>,
    threads_loading: bool,
    threads_error: Option<String>,
    view: ViewState,
    create_thread: CreateThreadState,
    base_url_input: String,
    info_banner: Option<String>,
}

impl BoardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let default_url = std::env::var("URABAN_STORE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
        let store = RestStore::new(default_url.clone()).unwrap_or_else(|err| {
            error!("failed to initialise store client: {err}");
            RestStore::new("http://127.0.0.1:8080").expect("fallback store client")
        });
        let mut app = Self::with_board(BoardService::new(store), default_url);
        app.spawn_load_threads();
        app
    }

    pub(crate) fn with_board(board: BoardService, base_url_input: String) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            board,
            tx,
            rx,
            threads: Vec::new(),
            threads_loading: false,
            threads_error: None,
            view: ViewState::Listing,
            create_thread: CreateThreadState::default(),
            base_url_input,
            info_banner: None,
        }
    }

    fn process_messages(&mut self) {
        messages::process_messages(self);
    }

    fn apply_base_url(&mut self) {
        match RestStore::new(self.base_url_input.clone()) {
            Ok(store) => {
                self.board = BoardService::new(store);
                self.info_banner = Some("Store URL updated".into());
                self.view = ViewState::Listing;
                self.spawn_load_threads();
            }
            Err(err) => {
                self.info_banner = Some(format!("Failed to update URL: {err}"));
            }
        }
    }

    /// Keeps an open thread loosely in sync with the shared post log while
    /// nothing else is talking to the store.
    fn maybe_poll_thread(&mut self) {
        let ViewState::Thread(state) = &self.view else {
            return;
        };
        if state.phase != ThreadPhase::Ready || state.refreshing || state.compose.sending {
            return;
        }
        let due = state
            .last_refresh
            .map_or(true, |at| at.elapsed() >= POLL_INTERVAL);
        if due {
            let thread_id = state.thread_id;
            self.spawn_refresh_thread(thread_id, false);
        }
    }
}

pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.process_messages();
        self.maybe_poll_thread();

        egui::TopBottomPanel::top("top_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Store URL");
                ui.text_edit_singleline(&mut self.base_url_input);
                if ui.button("Apply").clicked() {
                    self.apply_base_url();
                }
                if ui.button("Refresh").clicked() {
                    self.spawn_load_threads();
                }
            });

            if let Some(message) = self.info_banner.clone() {
                let mut dismiss = false;
                egui::Frame::group(ui.style())
                    .fill(ui.visuals().extreme_bg_color)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(message.as_str());
                            if ui.button("Dismiss").clicked() {
                                dismiss = true;
                            }
                        });
                    });
                if dismiss {
                    self.info_banner = None;
                }
            }
        });

        let mut go_back = false;

        // Detach the thread state while rendering to avoid double-borrowing
        // self inside the CentralPanel closure.
        let temp_state = if let ViewState::Thread(state) = &mut self.view {
            Some(std::mem::replace(
                state,
                ThreadState::loading(0, String::new()),
            ))
        } else {
            None
        };

        if let Some(mut state) = temp_state {
            let mut action = ThreadAction::None;
            egui::CentralPanel::default().show(ctx, |ui| {
                action = self.render_thread(ui, &mut state);
            });
            if let ViewState::Thread(slot) = &mut self.view {
                *slot = state;
            }
            if matches!(action, ThreadAction::GoBack) {
                go_back = true;
            }
        } else {
            egui::CentralPanel::default().show(ctx, |ui| {
                self.render_listing(ui);
            });
        }

        if go_back {
            self.view = ViewState::Listing;
            // Re-entering the listing re-fetches (and so re-sweeps) it.
            self.spawn_load_threads();
        }

        // Keep the poll timer ticking even when the user is idle.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
