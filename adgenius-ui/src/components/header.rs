use adgenius::button::{ButtonSize, ButtonVariant};
use adgenius::{Glyph, SidebarEvent, SiteConfig, Visibility};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::{Button, Icon};

/// Top bar with the menu toggle and the notification, settings and profile
/// buttons. Only the menu toggle does anything.
#[component]
pub fn Header(set_open: WriteSignal<Visibility>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toggle = Callback::new(move |_: MouseEvent| {
        set_open.update(|v| *v = v.apply(SidebarEvent::Toggle));
        log::debug!("sidebar toggled");
    });

    view! {
        <header class="header">
            <div class="header-start">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    class="mobile-only menu-toggle"
                    label="Toggle navigation"
                    on_click=toggle
                >
                    <Icon glyph=Glyph::Menu />
                </Button>
                <h2 class="header-title">{config.product_name}</h2>
            </div>
            <div class="header-end">
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Icon label="Notifications">
                    <Icon glyph=Glyph::Bell />
                </Button>
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Icon label="Settings">
                    <Icon glyph=Glyph::Settings />
                </Button>
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Icon label="Profile">
                    <Icon glyph=Glyph::User />
                </Button>
            </div>
        </header>
    }
}
