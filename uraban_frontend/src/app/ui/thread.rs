use std::time::{Duration, Instant};

use eframe::egui::{self, Align, Color32, RichText};

use uraban_core::anchor::{self, Segment};
use uraban_core::Post;

use super::super::state::{Highlight, ScrollRequest, ThreadPhase, ThreadState};
use super::super::{format_timestamp, BoardApp};

/// How long a reference target stays highlighted after a jump.
const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1000);

pub enum ThreadAction {
    None,
    GoBack,
}

/// Renders a post body as text and `>>N` links. Returns the display index of
/// a reference the user activated this frame, if any. References that do not
/// resolve against the snapshot render as dead text.
fn render_post_body(ui: &mut egui::Ui, body: &str, posts: &[Post]) -> Option<usize> {
    let mut clicked = None;
    for line in body.lines() {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for segment in anchor::parse(line) {
                match segment {
                    Segment::Text(text) => {
                        ui.label(text);
                    }
                    Segment::Reference(target) => {
                        let label = format!(">>{target}");
                        if anchor::resolve(target, posts).is_some() {
                            if ui.link(label).clicked() {
                                clicked = Some(target);
                            }
                        } else {
                            ui.label(RichText::new(label).weak());
                        }
                    }
                }
            }
        });
    }
    clicked
}

impl BoardApp {
    pub(crate) fn render_thread(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut ThreadState,
    ) -> ThreadAction {
        let mut action = ThreadAction::None;
        let mut reload = false;

        ui.horizontal(|ui| {
            if ui.button("← Back to board").clicked() {
                action = ThreadAction::GoBack;
            }
            ui.separator();
            ui.label(RichText::new(&state.title).heading());
            if let Some(thread) = &state.thread {
                ui.label(RichText::new(format_timestamp(&thread.created_at)).weak());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Jump to latest").clicked() {
                    state.scroll = ScrollRequest::Bottom;
                }
                if state.refreshing {
                    ui.add(egui::Spinner::new());
                } else if ui.button("Reload").clicked() {
                    reload = true;
                }
            });
        });
        if reload {
            self.refresh_thread_state(state, true);
        }

        match state.phase {
            ThreadPhase::Loading => {
                ui.add(egui::Spinner::new());
                return action;
            }
            ThreadPhase::NotFound => {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("This thread could not be found.").strong());
                    ui.label("It may have expired after twelve quiet hours.");
                    if ui.button("Back to the board").clicked() {
                        action = ThreadAction::GoBack;
                    }
                });
                return action;
            }
            ThreadPhase::Ready => {}
        }

        if let Some(err) = state.error.clone() {
            // Stale snapshot below; the banner offers a retry.
            let mut retry = false;
            ui.horizontal(|ui| {
                ui.colored_label(Color32::LIGHT_RED, &err);
                if ui.button("Retry").clicked() {
                    retry = true;
                }
            });
            if retry {
                state.error = None;
                self.refresh_thread_state(state, false);
            }
        }

        // Drop the highlight once its moment has passed.
        if let Some(highlight) = &state.highlight {
            if highlight.since.elapsed() >= HIGHLIGHT_DURATION {
                state.highlight = None;
            } else {
                ui.ctx().request_repaint();
            }
        }

        let mut clicked_reference = None;
        let mut quote_target = None;

        egui::ScrollArea::vertical()
            .id_salt("thread-posts")
            .show(ui, |ui| {
                if state.posts.is_empty() {
                    ui.label("No posts yet. Claim the first reply!");
                }
                for (idx, post) in state.posts.iter().enumerate() {
                    let display_index = idx + 1;
                    let highlighted = state
                        .highlight
                        .as_ref()
                        .map_or(false, |h| h.index == display_index);
                    let fill = if highlighted {
                        ui.visuals().selection.bg_fill
                    } else {
                        ui.visuals().extreme_bg_color
                    };
                    let frame = egui::Frame::group(ui.style())
                        .fill(fill)
                        .inner_margin(egui::vec2(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                if ui
                                    .button(RichText::new(format!("{display_index}.")).monospace())
                                    .clicked()
                                {
                                    quote_target = Some(display_index);
                                }
                                ui.label(RichText::new(&post.name).strong());
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(format_timestamp(&post.created_at));
                                    },
                                );
                            });
                            ui.separator();
                            if let Some(target) =
                                render_post_body(ui, &post.content, &state.posts)
                            {
                                clicked_reference = Some(target);
                            }
                        });
                    if state.scroll == ScrollRequest::Post(display_index) {
                        frame.response.scroll_to_me(Some(Align::Center));
                    }
                }
                if state.scroll == ScrollRequest::Bottom {
                    ui.scroll_to_cursor(Some(Align::BOTTOM));
                }
            });
        state.scroll = ScrollRequest::None;

        if let Some(target) = clicked_reference {
            state.scroll = ScrollRequest::Post(target);
            state.highlight = Some(Highlight {
                index: target,
                since: Instant::now(),
            });
        }
        if let Some(index) = quote_target {
            let quote = format!(">>{index} ");
            if !state.compose.content.starts_with(&quote) {
                state.compose.content = format!("{quote}{}", state.compose.content);
            }
        }

        if self.render_floating_composer(ui.ctx(), state) {
            self.spawn_create_post(state);
        }

        action
    }

    fn render_floating_composer(&mut self, ctx: &egui::Context, state: &mut ThreadState) -> bool {
        let mut should_post = false;

        egui::Window::new("Reply")
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-10.0, -10.0))
            .default_width(320.0)
            .collapsible(true)
            .resizable(true)
            .show(ctx, |ui| {
                if let Some(err) = &state.compose.error {
                    ui.colored_label(Color32::LIGHT_RED, err);
                }
                ui.add(
                    egui::TextEdit::singleline(&mut state.compose.name)
                        .hint_text("Name (blank posts as Anonymous)"),
                );
                ui.add(
                    egui::TextEdit::multiline(&mut state.compose.content)
                        .desired_rows(4)
                        .hint_text("Write a reply..."),
                );
                ui.horizontal(|ui| {
                    if state.compose.sending {
                        ui.add(egui::Spinner::new());
                        ui.label("Sending...");
                    } else if ui.button("Post").clicked() {
                        should_post = true;
                    }
                });
            });

        should_post
    }
}
