use pacific_pages::{App, AppConfig};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = AppConfig::from_env();
    log::info!("pacific pages starting, api base {}", config.api_base);
    if config.api_key.is_none() {
        log::warn!("PACIFIC_API_KEY not set at build time; requests go out without X-API-KEY");
    }

    yew::Renderer::<App>::new().render();
}
