//! Status Bar (Bottom)
//!
//! Displays:
//! - Current view
//! - Last status message (clamp notices, view changes)

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use foundation_core::session::DesignSession;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(session: &DesignSession, status: &'a str) -> Element<'a, Message> {
    let config = &session.config;
    let summary = format!(
        "{} | {} x {} x {} mm",
        session.view.display_name(),
        config.length(),
        config.width(),
        config.depth()
    );

    row![
        text(summary).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
