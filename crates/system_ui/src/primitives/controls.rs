use super::*;

#[component]
/// Shared button primitive. Renders icon-only when `children` is omitted.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let icon_only = children.is_none();
    let icon_size = match size {
        ButtonSize::Sm => IconSize::Xs,
        ButtonSize::Md => IconSize::Sm,
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-icon-only=bool_token(icon_only)
            on:click=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {icon.map(|icon| view! { <Icon icon size=icon_size /> })}
            {children.map(|children| children())}
        </button>
    }
}

#[component]
/// Previous/next stepper with an `i / n` counter between the arrows.
///
/// The arrows disable themselves at either end; callers decide whether the control shows at all.
pub fn GalleryNav(
    #[prop(into)] has_prev: MaybeSignal<bool>,
    #[prop(into)] has_next: MaybeSignal<bool>,
    #[prop(into)] counter: MaybeSignal<String>,
    on_prev: Callback<MouseEvent>,
    on_next: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <nav
            class="ui-gallery-nav"
            aria-label="Gallery"
            data-ui-primitive="true"
            data-ui-kind="gallery-nav"
        >
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                aria_label="Previous media"
                ui_slot="gallery-prev"
                icon=IconName::ChevronLeft
                disabled=Signal::derive(move || !has_prev.get())
                on_click=on_prev
            />
            <span class="ui-gallery-counter" aria-live="polite">
                {move || counter.get()}
            </span>
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                aria_label="Next media"
                ui_slot="gallery-next"
                icon=IconName::ChevronRight
                disabled=Signal::derive(move || !has_next.get())
                on_click=on_next
            />
        </nav>
    }
}
