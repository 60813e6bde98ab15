use adgenius::button::ButtonSize;
use adgenius::content::{
    ALL_RIGHTS_RESERVED, CALL_TO_ACTION, FEATURES, FEATURES_TITLE, HERO_SUBTITLE, HERO_TITLE,
    TAGLINE,
};
use adgenius::SiteConfig;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::Button;

/// Landing page: brand header, hero, feature grid and footer. Nothing on it
/// is interactive; the call-to-action button has no handler.
#[component]
pub fn Home() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let features = FEATURES
        .iter()
        .map(|f| {
            view! {
                <div class="feature-card">
                    <h3>{f.title}</h3>
                    <p>{f.body}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Title text=config.page_title("") />
        <div class="adgenius-app">
            <header class="app-header">
                <h1>{config.product_name}</h1>
                <p>{TAGLINE}</p>
            </header>

            <div class="app-main">
                <section class="hero-section">
                    <div class="hero-content">
                        <h2>{HERO_TITLE}</h2>
                        <p>{HERO_SUBTITLE}</p>
                        <Button size=ButtonSize::Large class="cta-button">
                            {CALL_TO_ACTION}
                        </Button>
                    </div>
                </section>

                <section class="features-section">
                    <h2>{FEATURES_TITLE}</h2>
                    <div class="features-grid">{features}</div>
                </section>
            </div>

            <footer class="app-footer">
                <p>{format!("{}. {}", config.copyright_line(), ALL_RIGHTS_RESERVED)}</p>
            </footer>
        </div>
    }
}
