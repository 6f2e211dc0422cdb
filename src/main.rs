//! Pixelfolio - a personal portfolio desktop application
//! Built with iced, with a pixel-art cursor and scroll-driven reveals

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod content;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(1280.0, 860.0),
            min_size: Some(iced::Size::new(960.0, 640.0)),
            ..Default::default()
        })
        .antialiasing(true)
        .run()
}
