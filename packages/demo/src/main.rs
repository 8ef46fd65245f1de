//! Run with:
//!
//! ```sh
//! dx serve --package reactive-button-demo
//! ```

use dioxus::logger::tracing::Level;
use reactive_button_demo::App;

fn main() {
    // Debug builds log every settings update.
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus::logger::init(level).expect("Failed to initialize logger");

    dioxus::launch(App);
}
