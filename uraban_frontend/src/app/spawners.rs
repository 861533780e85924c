use uraban_core::normalize;
use uraban_core::Thread;

use super::state::{ThreadState, ViewState};
use super::tasks;
use super::BoardApp;

impl BoardApp {
    pub(super) fn spawn_load_threads(&mut self) {
        if self.threads_loading {
            return;
        }
        self.threads_loading = true;
        tasks::load_threads(self.board.clone(), self.tx.clone());
    }

    pub(super) fn spawn_create_thread(&mut self) {
        let title = self.create_thread.title.trim().to_string();
        if title.is_empty() {
            self.create_thread.error = Some("Title cannot be empty".into());
            return;
        }
        self.create_thread.submitting = true;
        self.create_thread.error = None;
        tasks::create_thread(self.board.clone(), self.tx.clone(), title);
    }

    pub(super) fn open_thread(&mut self, thread: &Thread) {
        self.view = ViewState::Thread(ThreadState::loading(thread.id, thread.title.clone()));
        tasks::load_thread_view(self.board.clone(), self.tx.clone(), thread.id, false);
    }

    /// Refresh whichever thread the view currently shows. No-op when the view
    /// moved on or a refresh is already in flight.
    pub(super) fn spawn_refresh_thread(&mut self, thread_id: i64, scroll_to_bottom: bool) {
        let board = self.board.clone();
        let tx = self.tx.clone();
        let ViewState::Thread(state) = &mut self.view else {
            return;
        };
        if state.thread_id != thread_id || state.refreshing {
            return;
        }
        state.refreshing = true;
        tasks::load_thread_view(board, tx, thread_id, scroll_to_bottom);
    }

    /// Same as `spawn_refresh_thread` but for a thread state the render loop
    /// has temporarily detached from the view.
    pub(super) fn refresh_thread_state(&mut self, state: &mut ThreadState, scroll_to_bottom: bool) {
        if state.refreshing {
            return;
        }
        state.refreshing = true;
        tasks::load_thread_view(
            self.board.clone(),
            self.tx.clone(),
            state.thread_id,
            scroll_to_bottom,
        );
    }

    pub(super) fn spawn_create_post(&mut self, state: &mut ThreadState) {
        let content = normalize::normalize(&state.compose.content);
        if content.is_empty() {
            state.compose.error = Some("Post body cannot be empty".into());
            return;
        }
        state.compose.sending = true;
        state.compose.error = None;
        tasks::create_post(
            self.board.clone(),
            self.tx.clone(),
            state.thread_id,
            state.compose.name.clone(),
            content,
        );
    }
}
