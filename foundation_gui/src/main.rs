//! # Foundation Layout GUI Application
//!
//! Interactive editor for a single foundation: seven numeric fields on the
//! left, the plan or section drawing with its metrics on the right.
//! Built with the Iced framework.
//!
//! The only state is the [`DesignSession`] plus the raw text of each
//! field. Every edit produces a new session snapshot; the grid, metrics
//! and drawing are recomputed from it during `view`.

use iced::widget::{column, container, row};
use iced::{Element, Length, Size, Theme};
use tracing::{debug, info};

use foundation_core::config::{parse_lenient, Parameter};
use foundation_core::session::DesignSession;
use foundation_core::view::ViewMode;

mod ui;

/// Application state
pub struct App {
    /// Configuration and selected view
    pub session: DesignSession,
    /// Raw field text, indexed like `Parameter::ALL`
    pub inputs: [String; 7],
    /// Last status message
    pub status: String,
    pub dark_mode: bool,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(Parameter, String),
    StepDown(Parameter),
    StepUp(Parameter),
    ViewSelected(ViewMode),
    ResetDefaults,
    ToggleDarkMode,
}

/// Position of a parameter in `Parameter::ALL`
pub fn field_index(param: Parameter) -> usize {
    Parameter::ALL
        .iter()
        .position(|&p| p == param)
        .unwrap_or_default()
}

/// Text shown in a field for a stored value
fn format_value(value: f64) -> String {
    format!("{}", value)
}

impl Default for App {
    fn default() -> Self {
        let session = DesignSession::default();
        let inputs = Parameter::ALL.map(|p| format_value(session.config.get(p)));
        Self {
            session,
            inputs,
            status: "Ready".to_string(),
            dark_mode: false,
        }
    }
}

impl App {
    fn title(&self) -> String {
        format!("Foundation Layout - {}", self.session.view.display_name())
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) {
        debug!(?message, "update");
        match message {
            Message::InputChanged(param, text) => {
                self.session = self.session.with_input(param, &text);
                let stored = self.session.config.get(param);
                self.status = clamp_status(param, parse_lenient(&text), stored);
                self.inputs[field_index(param)] = text;
            }
            Message::StepDown(param) => self.step(param, -1.0),
            Message::StepUp(param) => self.step(param, 1.0),
            Message::ViewSelected(view) => {
                self.session = self.session.with_view(view);
                self.status = format!("Showing {}", view.display_name());
            }
            Message::ResetDefaults => {
                let view = self.session.view;
                *self = Self {
                    dark_mode: self.dark_mode,
                    ..Self::default()
                };
                self.session = self.session.with_view(view);
                self.status = "Parameters reset to defaults".to_string();
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
    }

    /// Move a parameter by one step; the field text follows the stored value
    fn step(&mut self, param: Parameter, direction: f64) {
        let current = self.session.config.get(param);
        let requested = current + direction * param.step();
        let config = self.session.config.with_value(param, requested);
        self.session = DesignSession {
            config,
            view: self.session.view,
        };
        self.inputs[field_index(param)] = format_value(config.get(param));
        self.status = clamp_status(param, requested, config.get(param));
    }

    fn view(&self) -> Element<'_, Message> {
        let toolbar = ui::toolbar::view_toolbar(self.session.view, self.dark_mode);
        let input_panel = ui::input_panel::view_input_panel(self);
        let results_panel = ui::results_panel::view_results_panel(self);
        let status_bar = ui::status_bar::view_status_bar(&self.session, &self.status);

        let content = column![
            toolbar,
            row![input_panel, results_panel].spacing(10).height(Length::Fill),
            status_bar,
        ]
        .spacing(6)
        .padding(10);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Status line for an edit: mention the clamp when the stored value differs
fn clamp_status(param: Parameter, requested: f64, stored: f64) -> String {
    if requested == stored {
        format!("{} = {} mm", param.label(), stored)
    } else {
        format!(
            "{} clamped to {} mm (range {}-{})",
            param.label(),
            stored,
            param.min(),
            param.max()
        )
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_tracing();
    info!("starting foundation layout GUI");

    iced::application(App::default, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size::new(1280.0, 820.0))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_is_clamped_but_text_kept() {
        let mut app = App::default();
        app.update(Message::InputChanged(Parameter::Depth, "999999".to_string()));
        assert_eq!(app.session.config.depth(), 5000.0);
        assert_eq!(app.inputs[field_index(Parameter::Depth)], "999999");
        assert!(app.status.contains("clamped"));
    }

    #[test]
    fn test_unparseable_input() {
        let mut app = App::default();
        app.update(Message::InputChanged(Parameter::Length, "abc".to_string()));
        assert_eq!(app.session.config.length(), 1000.0);
    }

    #[test]
    fn test_step_buttons() {
        let mut app = App::default();
        app.update(Message::StepUp(Parameter::RebarSpacing));
        assert_eq!(app.session.config.rebar_spacing(), 225.0);
        assert_eq!(app.inputs[field_index(Parameter::RebarSpacing)], "225");

        for _ in 0..10 {
            app.update(Message::StepDown(Parameter::RebarSpacing));
        }
        assert_eq!(app.session.config.rebar_spacing(), 100.0);
    }

    #[test]
    fn test_view_switch_keeps_config() {
        let mut app = App::default();
        app.update(Message::InputChanged(Parameter::Width, "7000".to_string()));
        app.update(Message::ViewSelected(ViewMode::Section));
        assert_eq!(app.session.view, ViewMode::Section);
        assert_eq!(app.session.config.width(), 7000.0);
    }

    #[test]
    fn test_reset_keeps_view_and_theme() {
        let mut app = App::default();
        app.update(Message::ToggleDarkMode);
        app.update(Message::ViewSelected(ViewMode::Section));
        app.update(Message::InputChanged(Parameter::Depth, "1200".to_string()));
        app.update(Message::ResetDefaults);
        assert_eq!(app.session.config.depth(), 600.0);
        assert_eq!(app.session.view, ViewMode::Section);
        assert!(app.dark_mode);
        assert_eq!(app.inputs[field_index(Parameter::Depth)], "600");
    }
}
