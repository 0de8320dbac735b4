/// Bundled config for packaged builds (mobile/web)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_env() {
    // Prefer a .env file next to the binary (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
fn load_env() {
    load_bundled_config();
}

fn load_bundled_config() {
    for line in BUNDLED_CONFIG.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            // Real environment wins over bundled defaults
            if std::env::var(key).is_err() {
                // SAFETY: set at startup before any threads are spawned
                unsafe {
                    std::env::set_var(key, value);
                }
            }
        }
    }
}

fn main() {
    load_env();
    tracing_subscriber::fmt().with_target(false).init();
    dioxus::launch(dailysnip::ui::App);
}
