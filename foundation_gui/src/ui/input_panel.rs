//! Input Panel (Left)
//!
//! One row per parameter: label, text field, step buttons, the stored
//! (clamped) value and the valid range with its step.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use foundation_core::config::Parameter;

use crate::{field_index, App, Message};

/// Render the parameter input panel
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let fields = Parameter::ALL
        .iter()
        .fold(Column::new().spacing(10), |col, &param| {
            col.push(parameter_field(
                param,
                &app.inputs[field_index(param)],
                app.session.config.get(param),
            ))
        });

    let panel = column![
        text("Design Parameters").size(14),
        Space::new().height(8),
        fields,
    ]
    .padding(8);

    container(scrollable(panel))
        .width(Length::Fixed(340.0))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn parameter_field(param: Parameter, value: &str, stored: f64) -> Element<'_, Message> {
    let range = param.range();

    column![
        row![
            text(format!("{} (mm):", param.label())).size(11).width(Length::Fixed(120.0)),
            text_input("", value)
                .on_input(move |s| Message::InputChanged(param, s))
                .width(Length::Fill)
                .padding(4)
                .size(11),
            button(text("-").size(11))
                .on_press(Message::StepDown(param))
                .padding(Padding::from([2, 8]))
                .style(button::secondary),
            button(text("+").size(11))
                .on_press(Message::StepUp(param))
                .padding(Padding::from([2, 8]))
                .style(button::secondary),
        ]
        .spacing(4)
        .align_y(Alignment::Center),
        row![
            Space::new().width(Length::Fixed(120.0)),
            text(format!(
                "= {} mm   [{}-{}, step {}]",
                stored, range.min, range.max, range.step
            ))
            .size(10)
            .color([0.5, 0.5, 0.5]),
        ],
    ]
    .spacing(2)
    .into()
}
