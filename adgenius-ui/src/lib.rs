//! AdGenius AI dashboard shell, rendered with Leptos.

use adgenius::SiteConfig;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

pub mod components;
pub mod pages;

use self::components::shell::Shell;
use self::pages::home::Home;
use self::pages::{Analytics, Campaigns, Creative, NotFound, Settings, Targeting};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::default());

    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/campaigns") view=Campaigns />
                    <Route path=path!("/targeting") view=Targeting />
                    <Route path=path!("/creative") view=Creative />
                    <Route path=path!("/analytics") view=Analytics />
                    <Route path=path!("/settings") view=Settings />
                </Routes>
            </Shell>
        </Router>
    }
}
