//! Weight progression chart.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::data::series::SeriesPoint;

/// Line chart of weight against date for one exercise.
///
/// Dates are plotted as evenly spaced categories in series order, so gaps
/// between sessions are not drawn to scale.
pub struct ProgressChart<'a> {
    series: &'a [SeriesPoint],
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> ProgressChart<'a> {
    pub fn new(series: &'a [SeriesPoint], title: &'a str, theme: &'a Theme) -> Self {
        ProgressChart {
            series,
            title,
            theme,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title_style(self.theme.title_style());

        if self.series.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let message = Paragraph::new("No data available")
                .style(Style::default().add_modifier(Modifier::DIM))
                .alignment(Alignment::Center);
            frame.render_widget(message, inner);
            return;
        }

        let points = chart_points(self.series);
        let (y_min, y_max) = y_bounds(self.series);
        let x_max = (points.len().saturating_sub(1) as f64).max(1.0);

        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(self.theme.chart_line))
            .data(&points);

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .title(Span::styled("Date", Style::default().add_modifier(Modifier::DIM)))
                    .style(self.theme.normal_style())
                    .bounds([0.0, x_max])
                    .labels(x_labels(self.series)),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled("Weight (kg)", Style::default().add_modifier(Modifier::DIM)))
                    .style(self.theme.normal_style())
                    .bounds([y_min, y_max])
                    .labels(vec![
                        Span::raw(format!("{y_min:.1}")),
                        Span::raw(format!("{:.1}", (y_min + y_max) / 2.0)),
                        Span::raw(format!("{y_max:.1}")),
                    ]),
            );

        frame.render_widget(chart, area);
    }
}

/// Series position on x, weight on y
fn chart_points(series: &[SeriesPoint]) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, (_, weight))| (i as f64, *weight))
        .collect()
}

/// Y axis range with 5% padding, widened when every point is equal
fn y_bounds(series: &[SeriesPoint]) -> (f64, f64) {
    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;
    for (_, weight) in series {
        y_min = y_min.min(*weight);
        y_max = y_max.max(*weight);
    }
    if y_min >= y_max {
        y_min -= 1.0;
        y_max += 1.0;
    }
    let pad = (y_max - y_min) * 0.05;
    (y_min - pad, y_max + pad)
}

/// First, middle and last date labels
fn x_labels(series: &[SeriesPoint]) -> Vec<Span<'static>> {
    match series.len() {
        0 => Vec::new(),
        1 => vec![Span::raw(series[0].0.clone())],
        2 => vec![Span::raw(series[0].0.clone()), Span::raw(series[1].0.clone())],
        n => vec![
            Span::raw(series[0].0.clone()),
            Span::raw(series[n / 2].0.clone()),
            Span::raw(series[n - 1].0.clone()),
        ],
    }
}
