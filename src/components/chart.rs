//! Theme-styled wrappers over the ratatui chart widgets.
//!
//! Series colors fall back to the theme's primary token, so a chart restyles
//! with the rest of the component set.

use crate::core::Component;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, BarChart, Block, Borders, Chart as ChartWidget, Dataset, GraphType, Sparkline},
    Frame,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Sparkline,
}

/// One named data series
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub points: Vec<f64>,
    pub color: Option<Color>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            points,
            color: None,
        }
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Chart over one or more series
pub struct Chart {
    kind: ChartKind,
    series: Vec<Series>,
    labels: Vec<String>,
    title: Option<String>,
}

impl Chart {
    #[must_use]
    pub fn new(kind: ChartKind, series: Vec<Series>) -> Self {
        Self {
            kind,
            series,
            labels: Vec::new(),
            title: None,
        }
    }

    /// X-axis / bar labels
    #[must_use]
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_series(&mut self, series: Vec<Series>) {
        self.series = series;
    }

    fn block<'a>(&self, theme: &Theme) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type.border_type())
            .border_style(theme.border_style(false));
        if let Some(title) = &self.title {
            block = block.title(Span::styled(format!(" {title} "), theme.accent_style()));
        }
        block
    }

    fn y_bounds(&self) -> [f64; 2] {
        let mut max = f64::MIN;
        let mut min = f64::MAX;
        for series in &self.series {
            for &p in &series.points {
                max = max.max(p);
                min = min.min(p);
            }
        }
        if min > max {
            return [0.0, 1.0];
        }
        [min.min(0.0), if max <= 0.0 { 1.0 } else { max }]
    }

    fn render_line(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let point_sets: Vec<Vec<(f64, f64)>> = self
            .series
            .iter()
            .map(|s| s.points.iter().enumerate().map(|(i, &p)| (i as f64, p)).collect())
            .collect();

        let datasets: Vec<Dataset> = self
            .series
            .iter()
            .zip(point_sets.iter())
            .map(|(series, points)| {
                Dataset::default()
                    .name(series.name.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(series.color.unwrap_or(theme.primary)))
                    .data(points)
            })
            .collect();

        let x_max = self
            .series
            .iter()
            .map(|s| s.points.len().saturating_sub(1))
            .max()
            .unwrap_or(0) as f64;
        let [y_min, y_max] = self.y_bounds();

        let x_labels: Vec<Span> = if self.labels.is_empty() {
            Vec::new()
        } else {
            vec![
                Span::styled(self.labels.first().cloned().unwrap_or_default(), theme.muted_style()),
                Span::styled(self.labels.last().cloned().unwrap_or_default(), theme.muted_style()),
            ]
        };

        let chart = ChartWidget::new(datasets)
            .block(self.block(theme))
            .x_axis(
                Axis::default()
                    .style(theme.muted_style())
                    .bounds([0.0, x_max.max(1.0)])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(theme.muted_style())
                    .bounds([y_min, y_max])
                    .labels(vec![
                        Span::styled(format!("{y_min:.0}"), theme.muted_style()),
                        Span::styled(format!("{y_max:.0}"), theme.muted_style()),
                    ]),
            );

        f.render_widget(chart, area);
    }

    fn render_bar(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(series) = self.series.first() else {
            f.render_widget(self.block(theme), area);
            return;
        };

        let data: Vec<(&str, u64)> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let label = self.labels.get(i).map(String::as_str).unwrap_or("");
                (label, p.max(0.0) as u64)
            })
            .collect();

        let chart = BarChart::default()
            .block(self.block(theme))
            .data(&data)
            .bar_width(5)
            .bar_gap(1)
            .bar_style(Style::default().fg(series.color.unwrap_or(theme.primary)))
            .value_style(Style::default().fg(theme.surface).bg(series.color.unwrap_or(theme.primary)));

        f.render_widget(chart, area);
    }

    fn render_sparkline(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(series) = self.series.first() else {
            f.render_widget(self.block(theme), area);
            return;
        };

        let data: Vec<u64> = series.points.iter().map(|&p| p.max(0.0) as u64).collect();

        let sparkline = Sparkline::default()
            .block(self.block(theme))
            .data(&data)
            .style(Style::default().fg(series.color.unwrap_or(theme.primary)));

        f.render_widget(sparkline, area);
    }
}

impl Component for Chart {
    type Event = ();

    fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        match self.kind {
            ChartKind::Line => self.render_line(f, area, theme),
            ChartKind::Bar => self.render_bar(f, area, theme),
            ChartKind::Sparkline => self.render_sparkline(f, area, theme),
        }
    }
}
