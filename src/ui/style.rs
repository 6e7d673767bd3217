use iced::gradient::{self, Gradient};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Radians, Theme};

const ROSE: Color = Color::from_rgb(1.0, 0.30, 0.49);
const PEACH: Color = Color::from_rgb(1.0, 0.82, 0.65);

fn rounded(radius: f32, width: f32, color: Color) -> Border {
    Border {
        color,
        width,
        radius: radius.into(),
    }
}

pub fn tile_button(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color { a: 0.9, ..ROSE },
        _ => Color::from_rgba(1.0, 1.0, 1.0, 0.10),
    };
    button::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.04))),
        text_color: Color::WHITE,
        border: rounded(16.0, 1.0, border_color),
        ..button::Style::default()
    }
}

pub fn control_button(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.32,
        button::Status::Pressed => 0.45,
        button::Status::Disabled => 0.08,
        button::Status::Active => 0.20,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..ROSE })),
        text_color: Color::WHITE,
        border: rounded(999.0, 1.0, Color::from_rgba(1.0, 1.0, 1.0, 0.14)),
        ..button::Style::default()
    }
}

pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.9)),
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.08))),
        border: rounded(999.0, 1.0, Color::from_rgba(1.0, 1.0, 1.0, 0.12)),
        ..container::Style::default()
    }
}

pub fn placeholder(_theme: &Theme) -> container::Style {
    let fill = Gradient::Linear(
        gradient::Linear::new(Radians(3.0 * std::f32::consts::FRAC_PI_4))
            .add_stop(0.0, Color { a: 0.20, ..ROSE })
            .add_stop(1.0, Color { a: 0.14, ..PEACH }),
    );
    container::Style {
        text_color: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.86)),
        background: Some(Background::Gradient(fill)),
        border: rounded(16.0, 1.0, Color::from_rgba(1.0, 1.0, 1.0, 0.12)),
        ..container::Style::default()
    }
}

pub fn loading_block(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.4)),
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.05))),
        border: rounded(16.0, 0.0, Color::TRANSPARENT),
        ..container::Style::default()
    }
}

pub fn gate_screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.05, 0.02, 0.05, 0.96))),
        ..container::Style::default()
    }
}

pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.06))),
        border: rounded(22.0, 1.0, Color::from_rgba(1.0, 1.0, 1.0, 0.14)),
        ..container::Style::default()
    }
}

pub fn error_text(_theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(PEACH),
    }
}
