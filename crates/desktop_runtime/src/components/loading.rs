use super::*;

#[component]
/// Splash shown before the desktop mounts.
pub(super) fn LoadingSplash() -> impl IntoView {
    view! {
        <div class="desktop-loading" role="status" aria-label="Loading">
            <span class="desktop-loading-dot"></span>
            <span class="desktop-loading-dot"></span>
            <span class="desktop-loading-dot"></span>
        </div>
    }
}
