//! Impact Viewer Widget
//! Relative change in net income by decile, with its headline.

use super::results_panel::ResultsPanel;
use crate::charts::ChartPlotter;
use crate::impact::Impact;
use crate::theme::Theme;
use egui::{RichText, ScrollArea};

/// Shows the impact results currently loaded, if any.
#[derive(Default)]
pub struct ImpactViewer {
    pub impact: Option<Impact>,
}

impl ImpactViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_impact(&mut self, impact: Impact) {
        self.impact = Some(impact);
    }

    pub fn clear(&mut self) {
        self.impact = None;
    }

    pub fn show(&self, ui: &mut egui::Ui, policy_label: &str, theme: &Theme) {
        let Some(impact) = &self.impact else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No impact results loaded").size(20.0));
            });
            return;
        };

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ResultsPanel::show(
                ui,
                "Relative impact by decile",
                "The chart below shows the relative change in income for each income decile.",
                theme,
                |ui| {
                    if let Some(headline) = impact.decile.headline(policy_label) {
                        ui.label(RichText::new(headline).size(20.0).strong());
                        ui.add_space(10.0);
                    }
                    ChartPlotter::draw_decile_chart(ui, &impact.decile, theme);
                    ui.add_space(10.0);
                    ui.label(
                        "Households are sorted into ten equally-populated groups according to \
                         their equivalised household net income.",
                    );
                },
            );
        });
    }
}
