use super::*;

#[component]
/// Full-viewport modal overlay. Clicks on the backdrop itself reach `on_backdrop_click`.
pub fn Overlay(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_backdrop_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("ui-overlay", layout_class)
            role="dialog"
            aria-modal="true"
            aria-label=move || aria_label.get()
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="overlay"
            on:click=move |ev| {
                if ev.target() != ev.current_target() {
                    return;
                }
                if let Some(on_backdrop_click) = on_backdrop_click.as_ref() {
                    on_backdrop_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}
