use adgenius::SiteConfig;
use adgenius_ui::App;
use leptos::prelude::*;

fn main() {
    // set up logging
    let config = SiteConfig::default();
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();
    log::info!("starting {}", config.version_line());

    mount_to_body(|| {
        view! { <App /> }
    })
}
