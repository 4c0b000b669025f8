//! Household Panel Page
//! Asks how many children the household has.

use crate::household::{ChildRules, Household, MAX_CHILDREN};
use crate::theme::Theme;
use egui::RichText;

const CHOICE_LABELS: [&str; MAX_CHILDREN + 1] = ["None", "1", "2", "3", "4", "5"];

/// Actions triggered by the household page
#[derive(Debug, Clone, PartialEq)]
pub enum HouseholdAction {
    None,
    SetChildren(usize),
}

pub struct HouseholdPanel;

impl HouseholdPanel {
    /// Draw the child count question for `household`.
    pub fn show(
        ui: &mut egui::Ui,
        rules: &ChildRules,
        household: &Household,
        year: &str,
        theme: &Theme,
    ) -> HouseholdAction {
        let mut action = HouseholdAction::None;
        let current = rules.count_children(household, year);

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new(rules.title()).size(theme.title_size).strong());
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                for (count, label) in CHOICE_LABELS.iter().enumerate() {
                    let button = egui::Button::new(RichText::new(*label).size(16.0))
                        .selected(count == current)
                        .min_size(egui::vec2(60.0, 35.0));
                    if ui.add(button).clicked() && count != current {
                        action = HouseholdAction::SetChildren(count);
                    }
                }
            });

            ui.add_space(10.0);
            ui.label(
                RichText::new(format!("{} people in this household", household.people.len()))
                    .size(11.0)
                    .color(theme.dark_gray),
            );
        });

        action
    }
}
