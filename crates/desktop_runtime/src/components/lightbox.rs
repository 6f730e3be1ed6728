use super::*;
use crate::host::LIGHTBOX_DOM_ID;
use portfolio_content::MediaKind;
use system_ui::{Button, ButtonSize, ButtonVariant, IconName, Overlay};

/// Keys that dismiss the viewer while it holds focus.
fn closes_lightbox(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[component]
/// Full-screen media viewer shown above the canvas while `DesktopState::lightbox` is set.
pub(super) fn Lightbox() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let src = create_memo(move |_| runtime.state.with(|state| state.lightbox.clone()));
    let close = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::CloseLightbox);
    });
    let close_on_key = Callback::new(move |ev: web_sys::KeyboardEvent| {
        if closes_lightbox(&ev.key()) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseLightbox);
        }
    });

    move || {
        src.get().map(|src| {
            let media = match MediaKind::from_path(&src) {
                MediaKind::Video => view! {
                    <video class="lightbox-media" src=src controls=true autoplay=true></video>
                }
                .into_view(),
                MediaKind::Image => {
                    view! { <img class="lightbox-media" src=src alt="Enlarged project media" /> }
                        .into_view()
                }
            };

            view! {
                <Overlay
                    id=LIGHTBOX_DOM_ID
                    layout_class="lightbox"
                    aria_label="Media viewer"
                    on_backdrop_click=close
                    on_keydown=close_on_key
                >
                    <div class="lightbox-content">
                        {media}
                        <Button
                            variant=ButtonVariant::Quiet
                            size=ButtonSize::Sm
                            layout_class="lightbox-close"
                            aria_label="Close media viewer"
                            icon=IconName::Dismiss
                            on_click=close
                        />
                    </div>
                </Overlay>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_escape_closes_the_viewer() {
        assert!(closes_lightbox("Escape"));
        assert!(closes_lightbox("Esc"));
        assert!(!closes_lightbox("Enter"));
        assert!(!closes_lightbox(" "));
    }
}
