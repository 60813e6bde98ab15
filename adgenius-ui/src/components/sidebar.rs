use adgenius::button::{variant_for, ButtonSize, ButtonVariant};
use adgenius::{Glyph, SidebarEvent, SiteConfig, Visibility, NAV_ENTRIES};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::{Button, Icon};

/// Side navigation bound to the router's current location.
#[component]
pub fn Sidebar(open: ReadSignal<Visibility>, set_open: WriteSignal<Visibility>) -> impl IntoView {
    let location = use_location();
    let current_path = Signal::derive(move || location.pathname.get());
    view! { <SidebarPanel open set_open current_path /> }
}

/// Markup of the sidebar. The entry whose path equals `current_path` is drawn
/// filled, all others ghosted.
#[component]
pub fn SidebarPanel(
    #[prop(into)] open: Signal<Visibility>,
    set_open: WriteSignal<Visibility>,
    #[prop(into)] current_path: Signal<String>,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let close = Callback::new(move |_: MouseEvent| {
        set_open.update(|v| *v = v.apply(SidebarEvent::Close));
        log::debug!("sidebar closed");
    });

    let items = NAV_ENTRIES
        .iter()
        .copied()
        .map(move |entry| {
            let active = Signal::derive(move || current_path.with(|p| entry.is_active(p)));
            let variant = Signal::derive(move || variant_for(active.get()));
            view! {
                <li class:active=move || active.get()>
                    <a href=entry.path() aria-current=move || active.get().then_some("page")>
                        <Button variant class="nav-button">
                            <Icon glyph=entry.icon() />
                            <span class="nav-label">{entry.label()}</span>
                        </Button>
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class=move || open.get().class_name()>
            <div class="sidebar-inner">
                <div class="sidebar-title">
                    <h1>{config.product_name}</h1>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class="mobile-only sidebar-close"
                        label="Close navigation"
                        on_click=close
                    >
                        <Icon glyph=Glyph::Close />
                    </Button>
                </div>
                <nav class="sidebar-nav">
                    <ul>{items}</ul>
                </nav>
                <div class="sidebar-footer">
                    <p>{config.version_line()}</p>
                    <p>{config.copyright_line()}</p>
                </div>
            </div>
        </aside>
    }
}
