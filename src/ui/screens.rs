// Tab screens.
// Render callbacks that fill the page with each tab's widgets.

use super::components::{Action, InputConfig, UiComponents};
use super::page::Page;
use super::theme::{AppColors, AppInputs, AppSpacing, AppTypography};

/// Welcome tab: greeting, Start button and backend placeholder text.
pub fn render_welcome(page: &mut Page, app_title: &str, placeholders: &[String]) {
    let ui = UiComponents::new();
    page.clear();

    page.extend([
        ui.create_text_field(
            format!("Welcome to {}", app_title),
            AppTypography::HEADER_SIZE,
            AppColors::TEXT_PRIMARY,
        ),
        ui.create_text_field(
            "A template you can customize for many different purposes",
            AppTypography::BODY_SIZE,
            AppColors::TEXT_SECONDARY,
        ),
        ui.spacer(AppSpacing::LARGE),
        ui.create_button("Start", Action::Start, AppColors::PRIMARY, AppColors::TEXT_PRIMARY),
    ]);

    if !placeholders.is_empty() {
        page.add(ui.spacer(AppSpacing::MEDIUM));
        page.add(ui.create_text_field(
            format!("Backend: {}", placeholders.join(" · ")),
            AppTypography::CAPTION_SIZE,
            AppColors::MUTED,
        ));
    }
}

/// Authorization tab: login form with Back button.
pub fn render_authorization(page: &mut Page) {
    let ui = UiComponents::new();
    page.clear();

    page.extend([
        ui.create_text_field(
            "Authorization",
            AppTypography::HEADER_SIZE,
            AppColors::TEXT_PRIMARY,
        ),
        ui.create_input_field(InputConfig {
            label: "Username".to_string(),
            hint_text: "Enter your username".to_string(),
            width: AppInputs::FIELD_WIDTH,
            ..InputConfig::default()
        }),
        ui.create_input_field(InputConfig {
            label: "Password".to_string(),
            hint_text: "Enter your password".to_string(),
            password: true,
            can_reveal_password: true,
            width: AppInputs::FIELD_WIDTH,
        }),
        ui.create_checkbox("Save credentials", true),
        ui.spacer(AppSpacing::SMALL),
        ui.create_button("Login", Action::Login, AppColors::PRIMARY, AppColors::TEXT_PRIMARY),
        ui.create_button("Back", Action::Back, AppColors::PRIMARY, AppColors::TEXT_PRIMARY),
    ]);
}

/// About me tab: profile lines with Back button.
pub fn render_about_me(page: &mut Page) {
    let ui = UiComponents::new();
    page.clear();

    page.extend([
        ui.create_text_field("About Me", AppTypography::HEADER_SIZE, AppColors::TEXT_PRIMARY),
        ui.create_text("Name: Bauyrzhan Zhanuzakov"),
        ui.create_text("Position: Python Developer"),
        ui.create_text("Hobbies: programming, football, books"),
        ui.create_text("Email: bauyrzhan@zhanuzakov.com"),
        ui.create_button("Back", Action::Back, AppColors::PRIMARY, AppColors::TEXT_PRIMARY),
    ]);
}
