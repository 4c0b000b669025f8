//! Chart Plotter Module
//! Decile impact bars and parameter histories using egui_plot.

use crate::impact::DecileImpact;
use crate::policy::{Parameter, ParameterValue};
use crate::theme::Theme;
use chrono::{Datelike, NaiveDate};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Text};
use std::collections::BTreeMap;

const CHART_HEIGHT: f32 = 320.0;

/// Draws the explorer's charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Date as a fractional year, e.g. 2022-07-02 -> ~2022.5
    pub fn year_fraction(date: NaiveDate) -> f64 {
        let days_in_year = if NaiveDate::from_ymd_opt(date.year(), 2, 29).is_some() {
            366.0
        } else {
            365.0
        };
        date.year() as f64 + date.ordinal0() as f64 / days_in_year
    }

    /// Step-line points for a value history, held flat until `until`.
    pub fn step_points(
        values: &BTreeMap<NaiveDate, ParameterValue>,
        until: NaiveDate,
    ) -> Vec<[f64; 2]> {
        let mut points = Vec::with_capacity(values.len() * 2 + 1);
        let mut previous: Option<f64> = None;

        for (date, value) in values {
            let x = Self::year_fraction(*date);
            if let Some(prev) = previous {
                points.push([x, prev]);
            }
            let y = value.as_f64();
            points.push([x, y]);
            previous = Some(y);
        }

        if let (Some(prev), Some((last, _))) = (previous, values.iter().next_back()) {
            if until > *last {
                points.push([Self::year_fraction(until), prev]);
            }
        }

        points
    }

    /// Bar chart of relative change per decile, gray for losses and green
    /// for gains, with a whole-percent label above each bar.
    pub fn draw_decile_chart(ui: &mut egui::Ui, impact: &DecileImpact, theme: &Theme) {
        let bars = impact.bars();

        Plot::new("relative_impact_by_decile")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_grid([false, true])
            .x_axis_label("Income decile")
            .y_axis_label("Relative change")
            .x_axis_formatter(|mark, _range| {
                let v = mark.value;
                if v.fract() == 0.0 && (1.0..=10.0).contains(&v) {
                    format!("{}", v as u32)
                } else {
                    String::new()
                }
            })
            .y_axis_formatter(|mark, _range| format!("{:+.1}%", mark.value * 100.0))
            .show(ui, |plot_ui| {
                let chart_bars: Vec<Bar> = bars
                    .iter()
                    .map(|bar| {
                        Bar::new(bar.decile as f64, bar.value)
                            .width(0.7)
                            .fill(theme.change_color(bar.value))
                            .name(format!("Decile {}", bar.decile))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(chart_bars));

                for bar in &bars {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(bar.decile as f64, bar.value),
                            egui::RichText::new(&bar.label).size(12.0),
                        )
                        .color(theme.black)
                        .anchor(if bar.value < 0.0 {
                            egui::Align2::CENTER_TOP
                        } else {
                            egui::Align2::CENTER_BOTTOM
                        }),
                    );
                }
            });
    }

    /// History of a parameter, with the reformed history drawn over it when
    /// a reform touches the parameter.
    pub fn draw_parameter_chart(
        ui: &mut egui::Ui,
        baseline: &Parameter,
        reformed: Option<&Parameter>,
        until: NaiveDate,
        theme: &Theme,
    ) {
        Plot::new(format!("parameter_{}", baseline.parameter))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label("Year")
            .y_axis_label(baseline.label.clone())
            .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(
                        Self::step_points(&baseline.values, until).into_iter(),
                    ))
                    .color(theme.dark_gray)
                    .width(2.0)
                    .name("Current law"),
                );

                if let Some(reformed) = reformed {
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(
                            Self::step_points(&reformed.values, until).into_iter(),
                        ))
                        .color(theme.dark_green)
                        .width(2.0)
                        .name("Reform"),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn year_fraction_starts_at_the_year() {
        assert_eq!(ChartPlotter::year_fraction(date("2022-01-01")), 2022.0);
        let mid = ChartPlotter::year_fraction(date("2024-07-02"));
        assert!((mid - 2024.5).abs() < 0.01);
    }

    #[test]
    fn step_points_hold_each_value_until_the_next() {
        let values = BTreeMap::from([
            (date("2020-01-01"), ParameterValue::Number(1.0)),
            (date("2022-01-01"), ParameterValue::Number(2.0)),
        ]);
        let points = ChartPlotter::step_points(&values, date("2025-01-01"));
        assert_eq!(
            points,
            vec![[2020.0, 1.0], [2022.0, 1.0], [2022.0, 2.0], [2025.0, 2.0]]
        );
    }

    #[test]
    fn step_points_empty_history() {
        assert!(ChartPlotter::step_points(&BTreeMap::new(), date("2025-01-01")).is_empty());
    }
}
