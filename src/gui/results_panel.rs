//! Results Panel
//! Title and description above a block of output content.

use crate::theme::Theme;
use egui::RichText;

pub struct ResultsPanel;

impl ResultsPanel {
    pub fn show<R>(
        ui: &mut egui::Ui,
        title: &str,
        description: &str,
        theme: &Theme,
        content: impl FnOnce(&mut egui::Ui) -> R,
    ) -> R {
        egui::Frame::none()
            .inner_margin(20.0)
            .show(ui, |ui| {
                ui.label(RichText::new(title).size(theme.title_size).strong());
                if !description.is_empty() {
                    ui.label(RichText::new(description).size(theme.subtitle_size));
                }
                ui.add_space(10.0);
                content(ui)
            })
            .inner
    }
}
