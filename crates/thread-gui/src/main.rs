//! Recursive Comment Tree - desktop application.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::{Size, window};
use thread_gui::app::App;
use thread_gui::state::Settings;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Settings are loaded before logging starts so their level applies from the
/// first line. `RUST_LOG` overrides it.
pub fn main() -> iced::Result {
    let path = Settings::config_path();
    let settings = match Settings::load_from(&path) {
        Ok(settings) => {
            init_logging(&settings.logging.level);
            settings
        }
        Err(err) => {
            let settings = Settings::default();
            init_logging(&settings.logging.level);
            tracing::warn!(path = %path.display(), %err, "using default settings");
            settings
        }
    };

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(900.0, 720.0),
            min_size: Some(Size::new(480.0, 360.0)),
            ..Default::default()
        })
        .run()
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
