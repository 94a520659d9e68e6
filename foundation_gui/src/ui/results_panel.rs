//! Results Panel (Right Side)
//!
//! Shows the drawing for the selected view, its legend and the
//! read-only metrics. Everything here is derived from the session on
//! each render.

use iced::widget::{column, container, row, scrollable, text, Canvas, Column, Space};
use iced::{Alignment, Background, Color, Element, Length};

use foundation_core::drawing::{Drawing, LegendEntry};
use foundation_core::metrics::FoundationMetrics;
use foundation_core::section::SectionLayout;

use crate::{App, Message};
use super::shared::drawing_canvas::{layer_color, DrawingCanvas};

/// Render the results panel for the current session
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let drawing = app.session.drawing();
    let metrics = app.session.metrics();
    let section = app.session.section();

    let title = text(drawing.title.clone()).size(14);
    let legend = view_legend(&drawing);

    let canvas_widget: Element<'_, Message> = Canvas::new(DrawingCanvas::new(drawing))
        .width(Length::Fill)
        .height(Length::Fixed(460.0))
        .into();

    let content = column![
        title,
        Space::new().height(8),
        canvas_widget,
        Space::new().height(8),
        legend,
        Space::new().height(12),
        view_metrics(&metrics, &section),
    ]
    .padding(8);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_legend(drawing: &Drawing) -> Column<'static, Message> {
    drawing
        .legend
        .iter()
        .fold(Column::new().spacing(4), |col, entry| col.push(legend_row(entry)))
}

fn legend_row(entry: &LegendEntry) -> Element<'static, Message> {
    let swatch_color = entry
        .layer
        .fill()
        .map(layer_color)
        .unwrap_or_else(|| layer_color(entry.layer.stroke()));

    let swatch = container(Space::new().width(12).height(12)).style(
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(swatch_color)),
            border: iced::Border {
                color: Color::from_rgb(0.3, 0.3, 0.3),
                width: 1.0,
                radius: 0.0.into(),
            },
            ..container::Style::default()
        },
    );

    row![swatch, text(entry.label.clone()).size(11)]
        .spacing(6)
        .align_y(Alignment::Center)
        .into()
}

fn view_metrics<'a>(metrics: &FoundationMetrics, section: &SectionLayout) -> Column<'a, Message> {
    column![
        text("Quantities").size(14),
        Space::new().height(4),
        metric_row("Concrete volume:", format!("{} m³", metrics.volume_display())),
        metric_row(
            "Rebar count:",
            format!(
                "{} ({} horizontal, {} vertical)",
                metrics.rebar_count, metrics.horizontal_count, metrics.vertical_count
            ),
        ),
        metric_row(
            "Total rebar length:",
            format!("{} m (single layer)", metrics.total_length_display()),
        ),
        metric_row(
            "Section:",
            format!(
                "{} layers x {} bars, {} stirrups",
                section.layer_count(),
                section.bars_per_layer(),
                section.stirrups.len()
            ),
        ),
    ]
    .spacing(4)
}

fn metric_row<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(130.0)),
        text(value).size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
