use referral_sheet::app::App;
use referral_sheet::config::AppConfig;
use referral_sheet::logging;

fn main() {
    let (config, config_error) = match AppConfig::load_default() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::init(&config.log_filter);
    if let Some(err) = config_error {
        tracing::warn!("using default config: {err:#}");
    }

    launch(config);
}

#[cfg(feature = "desktop")]
fn launch(config: AppConfig) {
    use referral_sheet::platform::desktop::paths::default_webview_data_dir;

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Referral Sheet"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch(config: AppConfig) {
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
