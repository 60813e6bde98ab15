use adgenius::nav::entry_for;
use adgenius::SiteConfig;
use leptos::prelude::*;
use leptos_meta::Title;

pub mod home;

/// Title bar and an empty body for a section that has no content yet.
#[component]
fn Section(path: &'static str) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let title = entry_for(path).map(|e| e.label()).unwrap_or_default();
    view! {
        <Title text=config.page_title(title) />
        <div class="section">
            <header>
                <span id="title">{title}</span>
            </header>
            <div class="section-body"></div>
        </div>
    }
}

#[component]
pub fn Campaigns() -> impl IntoView {
    view! { <Section path="/campaigns" /> }
}

#[component]
pub fn Targeting() -> impl IntoView {
    view! { <Section path="/targeting" /> }
}

#[component]
pub fn Creative() -> impl IntoView {
    view! { <Section path="/creative" /> }
}

#[component]
pub fn Analytics() -> impl IntoView {
    view! { <Section path="/analytics" /> }
}

#[component]
pub fn Settings() -> impl IntoView {
    view! { <Section path="/settings" /> }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    view! {
        <Title text=config.page_title("404") />
        <div class="section">
            <header>
                <span id="title">"404"</span>
            </header>
            <div class="section-body">
                <p>"ไม่พบหน้าที่คุณต้องการ"</p>
            </div>
        </div>
    }
}
