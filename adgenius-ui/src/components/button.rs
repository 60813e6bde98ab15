use adgenius::button::{self, ButtonSize, ButtonVariant};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Generic clickable control. Without `on_click` the button does nothing.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<ButtonVariant>,
    #[prop(optional)] size: ButtonSize,
    /// Extra classes appended after the variant and size classes.
    #[prop(optional)]
    class: &'static str,
    /// Accessible name, for buttons that only hold an icon.
    #[prop(optional)]
    label: Option<&'static str>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || button::classes(variant.get().unwrap_or_default(), size, class);
    view! {
        <button
            type="button"
            class=classes
            aria-label=label
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
