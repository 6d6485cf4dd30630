//! A minimal stand-in for the control panel layer: focuses whatever
//! application is frontmost and drives a short arcade start-up sequence
//! through the key injection API.

use ::tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(windows)]
pub fn main() {
    use ::keystrike::input::keyboard::KeySender;
    use ::std::{thread, time::Duration};
    use ::tracing::info;

    ::tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // MAME polls input rather than consuming key events, so zero-length
    // presses are unreliable. Hold each key briefly.
    const HOLD: Duration = Duration::from_millis(50);

    let panel = KeySender::new();

    info!("Focus the target application; injecting in 3 seconds");
    thread::sleep(Duration::from_secs(3));

    // Two coins, player-one start, then toggle fullscreen.
    for _ in 0..2 {
        panel.send_key_press("N5", HOLD).expect("coin press failed");
        thread::sleep(Duration::from_millis(200));
    }
    panel.send_key_press("N1", HOLD).expect("start press failed");
    panel
        .send_key_press_with_modifier("RETURN", "ALT", HOLD)
        .expect("fullscreen toggle failed");
}

#[cfg(not(windows))]
pub fn main() {
    ::tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    ::tracing::error!("this example drives the system input stream and only runs on Windows");
}
