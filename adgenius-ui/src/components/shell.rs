use adgenius::Visibility;
use leptos::prelude::*;

use super::{Header, Sidebar};

/// Page frame. Owns the sidebar's open flag and hands the reader to the
/// sidebar and the writer to both the sidebar and the header.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let (open, set_open) = signal(Visibility::default());
    view! {
        <div class="shell">
            <Sidebar open set_open />
            <div class="shell-main">
                <Header set_open />
                <main class="content">{children()}</main>
            </div>
        </div>
    }
}
