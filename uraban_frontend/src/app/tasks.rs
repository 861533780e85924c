use std::sync::mpsc::Sender;
use std::thread;

use log::error;
use uraban_core::BoardService;

use super::messages::AppMessage;

pub fn load_threads(board: BoardService, tx: Sender<AppMessage>) {
    thread::spawn(move || {
        let result = board.list_threads();
        if tx.send(AppMessage::ThreadsLoaded(result)).is_err() {
            error!("failed to send ThreadsLoaded message");
        }
    });
}

pub fn create_thread(board: BoardService, tx: Sender<AppMessage>, title: String) {
    thread::spawn(move || {
        let result = board.create_thread(&title);
        if tx.send(AppMessage::ThreadCreated(result)).is_err() {
            error!("failed to send ThreadCreated message");
        }
    });
}

pub fn load_thread_view(
    board: BoardService,
    tx: Sender<AppMessage>,
    thread_id: i64,
    scroll_to_bottom: bool,
) {
    thread::spawn(move || {
        let result = board.get_thread(thread_id);
        let message = AppMessage::ThreadViewLoaded {
            thread_id,
            scroll_to_bottom,
            result,
        };
        if tx.send(message).is_err() {
            error!("failed to send ThreadViewLoaded message");
        }
    });
}

pub fn create_post(
    board: BoardService,
    tx: Sender<AppMessage>,
    thread_id: i64,
    name: String,
    content: String,
) {
    thread::spawn(move || {
        let result = board.create_post(thread_id, &name, &content);
        let message = AppMessage::PostCreated { thread_id, result };
        if tx.send(message).is_err() {
            error!("failed to send PostCreated message");
        }
    });
}
