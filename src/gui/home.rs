//! Home Page
//! Entry cards leading to the household and policy pages.

use crate::theme::Theme;
use egui::{RichText, Sense};

/// Pages of the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Household,
    Policy,
    Impact,
}

pub struct HomePage;

impl HomePage {
    /// Draw the home page. Returns the page picked, if any.
    pub fn show(ui: &mut egui::Ui, theme: &Theme) -> Option<Page> {
        let mut picked = None;

        ui.vertical_centered(|ui| {
            ui.add_space(70.0);
            ui.label(
                RichText::new("We compute the impact of public policy.")
                    .size(theme.title_size + 6.0)
                    .strong(),
            );
            ui.label(
                RichText::new("Free, open-source software that turns law into code.")
                    .size(theme.subtitle_size + 3.0)
                    .color(theme.dark_gray),
            );
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let cards = [
                    (
                        Page::Household,
                        "Compute my household income",
                        "Calculate your taxes and benefits, and explore how they'd change under different scenarios and policies.",
                    ),
                    (
                        Page::Policy,
                        "Compute the impact of policy reforms",
                        "Design a reform to the tax-benefit system and see how it changes incomes across the population.",
                    ),
                ];
                for (page, title, body) in cards {
                    if Self::card(ui, title, body, theme) {
                        picked = Some(page);
                    }
                    ui.add_space(20.0);
                }
            });
        });

        picked
    }

    fn card(ui: &mut egui::Ui, title: &str, body: &str, theme: &Theme) -> bool {
        let response = egui::Frame::none()
            .fill(theme.light_gray)
            .rounding(5.0)
            .inner_margin(20.0)
            .show(ui, |ui| {
                ui.set_width(300.0);
                ui.label(RichText::new(title).size(20.0).strong().color(theme.black));
                ui.add_space(5.0);
                ui.label(RichText::new(body).color(theme.black));
            })
            .response
            .interact(Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        response.clicked()
    }
}
