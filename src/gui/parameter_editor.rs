//! Parameter Editor Page
//! Date range and value controls for one policy parameter, plus its history.

use crate::charts::ChartPlotter;
use crate::policy::{parse_numeric_input, Parameter, ParameterValue, Period, Reform};
use crate::theme::Theme;
use chrono::NaiveDate;
use egui::RichText;

/// A value the user committed for a parameter over a period.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterEdit {
    pub parameter: String,
    pub period: Period,
    pub value: ParameterValue,
}

impl ParameterEdit {
    /// The reform with this edit merged in.
    pub fn apply(&self, reform: &Reform) -> Reform {
        reform.with_value(&self.parameter, self.period, self.value)
    }
}

/// Actions triggered by the editor
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    None,
    Submit(ParameterEdit),
}

/// Editor state that survives between frames.
pub struct ParameterEditor {
    pub start: String,
    pub end: String,
    pub value_input: String,
    pub error: Option<String>,
}

impl ParameterEditor {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.format("%Y-%m-%d").to_string(),
            end: end.format("%Y-%m-%d").to_string(),
            value_input: String::new(),
            error: None,
        }
    }

    /// Current period, or the reason it is invalid.
    pub fn period(&self) -> Result<Period, String> {
        Period::parse_range(&self.start, &self.end).map_err(|e| e.to_string())
    }

    /// Turn typed input into an edit for a numeric parameter.
    pub fn numeric_edit(&self, parameter: &Parameter) -> Result<ParameterEdit, String> {
        let period = self.period()?;
        let value = parse_numeric_input(&self.value_input).map_err(|e| e.to_string())?;
        Ok(ParameterEdit {
            parameter: parameter.parameter.clone(),
            period,
            value: ParameterValue::Number(value),
        })
    }

    /// Edit setting a switch parameter to `checked`.
    pub fn switch_edit(&self, parameter: &Parameter, checked: bool) -> Result<ParameterEdit, String> {
        Ok(ParameterEdit {
            parameter: parameter.parameter.clone(),
            period: self.period()?,
            value: ParameterValue::Bool(checked),
        })
    }

    /// Draw the editor page for `parameter` under `reform`.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        parameter: &Parameter,
        reform: &Reform,
        theme: &Theme,
    ) -> EditorAction {
        let mut action = EditorAction::None;
        let reformed = parameter.reformed(reform);
        let period = self.period();
        let current = period
            .as_ref()
            .ok()
            .and_then(|p| reformed.value_at(p.start));

        ui.add_space(10.0);
        ui.label(RichText::new(&parameter.label).size(theme.title_size).strong());
        if let Some(description) = &parameter.description {
            ui.label(RichText::new(description).size(theme.subtitle_size));
        }
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut self.start).desired_width(100.0));
            ui.label("→");
            ui.add(egui::TextEdit::singleline(&mut self.end).desired_width(100.0));
            ui.add_space(20.0);

            if parameter.is_boolean() {
                let mut checked = current.map(|v| v.as_bool()).unwrap_or(false);
                if ui.checkbox(&mut checked, "").changed() {
                    match self.switch_edit(parameter, checked) {
                        Ok(edit) => action = EditorAction::Submit(edit),
                        Err(e) => self.error = Some(e),
                    }
                }
            } else {
                let hint = current
                    .map(|v| parameter.format_value(v))
                    .unwrap_or_default();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.value_input)
                        .hint_text(hint)
                        .desired_width(200.0),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    match self.numeric_edit(parameter) {
                        Ok(edit) => {
                            self.value_input.clear();
                            self.error = None;
                            action = EditorAction::Submit(edit);
                        }
                        Err(e) => self.error = Some(e),
                    }
                }
            }
        });

        if let Err(e) = &period {
            ui.label(RichText::new(e).size(11.0).color(theme.error));
        } else if let Some(error) = &self.error {
            ui.label(RichText::new(error).size(11.0).color(theme.error));
        }

        ui.add_space(20.0);
        let last_change = reformed.values.keys().next_back().copied();
        let until = period
            .map(|p| p.end)
            .unwrap_or_else(|_| last_change.unwrap_or(NaiveDate::MIN));
        let touched = reform.get(&parameter.parameter).is_some();
        ChartPlotter::draw_parameter_chart(
            ui,
            parameter,
            touched.then_some(&reformed),
            until,
            theme,
        );

        action
    }
}
