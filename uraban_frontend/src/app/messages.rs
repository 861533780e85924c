use std::time::Instant;

use log::error;
use uraban_core::{Post, StoreError, Thread, ThreadView};

use super::state::{ScrollRequest, ThreadPhase, ViewState};
use super::BoardApp;

pub enum AppMessage {
    ThreadsLoaded(Result<Vec<Thread>, StoreError>),
    ThreadCreated(Result<Thread, StoreError>),
    ThreadViewLoaded {
        thread_id: i64,
        scroll_to_bottom: bool,
        result: Result<Option<ThreadView>, StoreError>,
    },
    PostCreated {
        thread_id: i64,
        result: Result<Post, StoreError>,
    },
}

pub(super) fn process_messages(app: &mut BoardApp) {
    while let Ok(message) = app.rx.try_recv() {
        match message {
            AppMessage::ThreadsLoaded(result) => {
                app.threads_loading = false;
                match result {
                    Ok(threads) => {
                        app.threads = threads;
                        app.threads_error = None;
                    }
                    Err(err) => {
                        error!("failed to load threads: {err}");
                        app.threads_error = Some(err.to_string());
                    }
                }
            }
            AppMessage::ThreadCreated(result) => {
                app.create_thread.submitting = false;
                match result {
                    Ok(thread) => {
                        app.create_thread.title.clear();
                        app.create_thread.error = None;
                        app.info_banner = Some(format!("Thread \"{}\" created", thread.title));
                        app.spawn_load_threads();
                    }
                    Err(err) => {
                        app.create_thread.error = Some(err.to_string());
                    }
                }
            }
            AppMessage::ThreadViewLoaded {
                thread_id,
                scroll_to_bottom,
                result,
            } => {
                let ViewState::Thread(state) = &mut app.view else {
                    continue;
                };
                if state.thread_id != thread_id {
                    continue;
                }
                state.refreshing = false;
                state.last_refresh = Some(Instant::now());
                match result {
                    Ok(Some(view)) => {
                        state.phase = ThreadPhase::Ready;
                        state.title = view.thread.title.clone();
                        state.thread = Some(view.thread);
                        state.posts = view.posts;
                        state.error = None;
                        if scroll_to_bottom {
                            state.scroll = ScrollRequest::Bottom;
                        }
                    }
                    Ok(None) => {
                        // The thread is gone, most likely swept; not an error.
                        state.phase = ThreadPhase::NotFound;
                        state.thread = None;
                        state.posts.clear();
                        state.error = None;
                    }
                    Err(err) => {
                        error!("failed to load thread {thread_id}: {err}");
                        if state.phase == ThreadPhase::Loading {
                            // Initial load: an unreachable thread renders the
                            // same empty state as a missing one.
                            state.phase = ThreadPhase::NotFound;
                        } else {
                            // Refresh: keep the stale snapshot; the next poll
                            // or a manual reload can recover.
                            state.error = Some(err.to_string());
                        }
                    }
                }
            }
            AppMessage::PostCreated { thread_id, result } => {
                let ViewState::Thread(state) = &mut app.view else {
                    continue;
                };
                if state.thread_id != thread_id {
                    continue;
                }
                state.compose.sending = false;
                match result {
                    Ok(_) => {
                        state.compose.content.clear();
                        state.compose.error = None;
                        app.spawn_refresh_thread(thread_id, true);
                    }
                    Err(err) => {
                        // Leave the form populated so the user can retry.
                        state.compose.error = Some(err.to_string());
                    }
                }
            }
        }
    }
}
