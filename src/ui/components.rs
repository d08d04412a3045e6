// UI component factory.
// Builds styled text, buttons, input fields and checkboxes for screens.

use ratatui::style::Color;

use super::theme::{AppColors, AppInputs, TextSize};

/// What a button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Login,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
    pub size: TextSize,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub text: String,
    pub action: Action,
    pub bgcolor: Color,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub label: String,
    pub hint_text: String,
    pub value: String,
    pub password: bool,
    pub can_reveal_password: bool,
    /// Password is currently shown in clear text.
    pub revealed: bool,
    pub width: u16,
}

impl InputField {
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Toggle password visibility. Returns false if the field cannot reveal.
    pub fn toggle_reveal(&mut self) -> bool {
        if !(self.password && self.can_reveal_password) {
            return false;
        }
        self.revealed = !self.revealed;
        true
    }

    /// Text to draw: the hint when empty, masked when a hidden password.
    pub fn display_value(&self) -> String {
        if self.value.is_empty() {
            self.hint_text.clone()
        } else if self.password && !self.revealed {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub label: String,
    pub value: bool,
}

impl Checkbox {
    pub fn toggle(&mut self) {
        self.value = !self.value;
    }
}

/// A renderable element on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Text(TextField),
    Button(Button),
    Input(InputField),
    Checkbox(Checkbox),
    Spacer(u16),
}

impl Widget {
    /// Whether the widget can take keyboard focus.
    pub fn is_focusable(&self) -> bool {
        matches!(
            self,
            Widget::Button(_) | Widget::Input(_) | Widget::Checkbox(_)
        )
    }

    /// Rows the widget occupies.
    pub fn height(&self) -> u16 {
        match self {
            Widget::Text(_) | Widget::Checkbox(_) => 1,
            Widget::Button(_) | Widget::Input(_) => 3,
            Widget::Spacer(height) => *height,
        }
    }
}

/// Settings for [`UiComponents::create_input_field`].
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub label: String,
    pub hint_text: String,
    pub password: bool,
    pub can_reveal_password: bool,
    pub width: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            hint_text: String::new(),
            password: false,
            can_reveal_password: false,
            width: AppInputs::FIELD_WIDTH,
        }
    }
}

/// Factory for styled widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiComponents;

impl UiComponents {
    pub fn new() -> Self {
        Self
    }

    pub fn create_text_field(&self, value: impl Into<String>, size: TextSize, color: Color) -> Widget {
        Widget::Text(TextField {
            value: value.into(),
            size,
            color,
        })
    }

    /// Body-sized primary text.
    pub fn create_text(&self, value: impl Into<String>) -> Widget {
        self.create_text_field(value, TextSize::Body, AppColors::TEXT_PRIMARY)
    }

    pub fn create_button(
        &self,
        text: impl Into<String>,
        action: Action,
        bgcolor: Color,
        color: Color,
    ) -> Widget {
        Widget::Button(Button {
            text: text.into(),
            action,
            bgcolor,
            color,
        })
    }

    pub fn create_input_field(&self, config: InputConfig) -> Widget {
        Widget::Input(InputField {
            label: config.label,
            hint_text: config.hint_text,
            value: String::new(),
            password: config.password,
            can_reveal_password: config.can_reveal_password,
            revealed: false,
            width: config.width,
        })
    }

    pub fn create_checkbox(&self, label: impl Into<String>, value: bool) -> Widget {
        Widget::Checkbox(Checkbox {
            label: label.into(),
            value,
        })
    }

    pub fn spacer(&self, height: u16) -> Widget {
        Widget::Spacer(height)
    }
}
