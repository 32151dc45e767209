use leptos::prelude::*;
use portfolio::config::Config;
use portfolio::App;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize tracing for logging
    tracing_wasm::set_as_global_default();

    // Missing gateway configuration is fatal at startup.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(message) => {
            tracing::error!("{message}");
            panic!("{message}");
        }
    };

    // Mount the app
    mount_to_body(move || view! { <App config=config.clone() /> });
}
