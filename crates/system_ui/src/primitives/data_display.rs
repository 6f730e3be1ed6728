use super::*;

#[component]
/// Inline text run.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Section heading. `Title` renders an `h2`; every other role renders an `h3`.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    let children = children();
    match role {
        TextRole::Title => view! {
            <h2
                class="ui-heading"
                data-ui-primitive="true"
                data-ui-kind="heading"
                data-ui-variant=role.token()
                data-ui-tone=tone.token()
            >
                {children}
            </h2>
        }
        .into_view(),
        _ => view! {
            <h3
                class="ui-heading"
                data-ui-primitive="true"
                data-ui-kind="heading"
                data-ui-variant=role.token()
                data-ui-tone=tone.token()
            >
                {children}
            </h3>
        }
        .into_view(),
    }
}

#[component]
/// Compact tag.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-badge"
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Wrapping row of [`Badge`]s, one per tag. Renders nothing for an empty list.
pub fn TagList(
    tags: Vec<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    (!tags.is_empty()).then(|| {
        view! {
            <div
                class=merge_layout_class("ui-tag-list", layout_class)
                data-ui-primitive="true"
                data-ui-kind="tag-list"
            >
                {tags.into_iter().map(|tag| view! { <Badge>{tag}</Badge> }).collect_view()}
            </div>
        }
    })
}

#[component]
/// Placeholder block for missing content.
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! {
        <div
            class="ui-empty-state"
            role="status"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {message}
        </div>
    }
}

#[component]
/// Stand-in for a project with no media or thumbnail.
pub fn MediaPlaceholder(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-media-placeholder", layout_class)
            data-ui-primitive="true"
            data-ui-kind="media-placeholder"
        >
            "No Image"
        </div>
    }
}
