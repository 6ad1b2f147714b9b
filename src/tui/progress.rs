use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::style::SPINNER_TEMPLATE;

/// Spinner drawn on stderr while the extractors run
pub fn spinner(msg: &str) -> ProgressBar {
    let style =
        ProgressStyle::with_template(SPINNER_TEMPLATE).unwrap_or(ProgressStyle::default_spinner());

    let pb = ProgressBar::new_spinner().with_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}
