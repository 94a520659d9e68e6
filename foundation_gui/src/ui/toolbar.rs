//! Toolbar component
//!
//! Contains the plan/section view selector, Reset and the theme toggle.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use foundation_core::view::ViewMode;

use crate::Message;

/// Render the toolbar
pub fn view_toolbar(current_view: ViewMode, dark_mode: bool) -> Element<'static, Message> {
    let view_buttons = ViewMode::ALL.iter().fold(row![].spacing(4), |buttons, &view| {
        let style = if view == current_view {
            button::primary
        } else {
            button::secondary
        };
        buttons.push(
            button(text(view.display_name()).size(11))
                .on_press(Message::ViewSelected(view))
                .padding(Padding::from([4, 8]))
                .style(style),
        )
    });

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    row![
        text("Foundation Layout").size(20),
        Space::new().width(16),
        view_buttons,
        Space::new().width(Length::Fill),
        button(text("Reset").size(11))
            .on_press(Message::ResetDefaults)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(4)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
