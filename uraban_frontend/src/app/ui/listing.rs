use eframe::egui::{self, Color32, RichText};

use uraban_core::Thread;

use super::super::{format_timestamp, BoardApp};

impl BoardApp {
    pub(crate) fn render_listing(&mut self, ui: &mut egui::Ui) {
        ui.heading("Anonymous board");
        ui.add_space(8.0);

        let mut submit = false;
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(egui::vec2(12.0, 8.0))
            .show(ui, |ui| {
                ui.label(RichText::new("Start a new thread").strong());
                if let Some(err) = &self.create_thread.error {
                    ui.colored_label(Color32::LIGHT_RED, err);
                }
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.create_thread.title)
                            .hint_text("Thread title"),
                    );
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                    if self.create_thread.submitting {
                        ui.add(egui::Spinner::new());
                    } else if ui.button("Create").clicked() {
                        submit = true;
                    }
                });
                ui.label(
                    RichText::new("Threads idle for 12 hours are removed automatically.")
                        .weak()
                        .small(),
                );
            });
        if submit {
            self.spawn_create_thread();
        }

        ui.add_space(12.0);

        if self.threads_loading && self.threads.is_empty() {
            ui.add(egui::Spinner::new());
        }
        if let Some(err) = self.threads_error.clone() {
            ui.horizontal(|ui| {
                ui.colored_label(Color32::LIGHT_RED, &err);
                if ui.button("Retry").clicked() {
                    self.spawn_load_threads();
                }
            });
            ui.separator();
        }

        egui::ScrollArea::vertical()
            .id_salt("thread-listing")
            .show(ui, |ui| {
                if self.threads.is_empty() && !self.threads_loading {
                    ui.label("No threads yet. Create one to get started.");
                }

                let mut thread_to_open: Option<Thread> = None;

                for thread in &self.threads {
                    egui::Frame::group(ui.style())
                        .fill(ui.visuals().extreme_bg_color)
                        .inner_margin(egui::vec2(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                if ui.button(RichText::new(&thread.title).strong()).clicked() {
                                    thread_to_open = Some(thread.clone());
                                }
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(format_timestamp(&thread.created_at));
                                    },
                                );
                            });
                        });
                }

                if let Some(thread) = thread_to_open {
                    self.open_thread(&thread);
                }
            });
    }
}
