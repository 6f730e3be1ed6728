use super::*;
use portfolio_content::{primary_media, GalleryCursor, MediaKind, Project, ProjectContent};
use system_ui::{
    EmptyState, GalleryNav, Heading, MediaPlaceholder, TagList, Text, TextRole, TextTone,
};

fn media_view(src: String, layout_class: &'static str) -> View {
    match MediaKind::from_path(&src) {
        MediaKind::Video => view! {
            <video
                class=layout_class
                src=src
                autoplay=true
                muted=true
                loop=true
                playsinline=true
            ></video>
        }
        .into_view(),
        MediaKind::Image => view! { <img class=layout_class src=src alt="" draggable="false" /> }
            .into_view(),
    }
}

#[component]
/// Project window body: a compact card while collapsed, a gallery with details once expanded.
pub(super) fn ProjectWindowContent(
    window_id: WindowId,
    project_id: String,
    expanded: Signal<bool>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(project) = runtime
        .catalog
        .with_value(|catalog| catalog.get(&project_id).cloned())
    else {
        logging::debug_warn!("window {window_id} references unknown project `{project_id}`");
        return view! { <EmptyState message="Project not found" /> }.into_view();
    };
    let project = store_value(project);

    view! {
        <Show
            when=move || expanded.get()
            fallback=move || view! { <ProjectCard project=project.get_value() /> }
        >
            <ProjectDetail project=project.get_value() />
        </Show>
    }
    .into_view()
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let media = runtime.catalog.with_value(|catalog| {
        primary_media(catalog, &project).map(str::to_string)
    });

    view! {
        <div class="project-card">
            {match media {
                Some(src) => media_view(src, "project-card-media"),
                None => view! { <MediaPlaceholder /> }.into_view(),
            }}
            <div class="project-card-overlay">
                <Heading role=TextRole::Label tone=TextTone::Inverse>{project.title}</Heading>
                <Text role=TextRole::Caption tone=TextTone::Inverse>
                    {project.short_description}
                </Text>
            </div>
        </div>
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let media = store_value(
        runtime
            .catalog
            .with_value(|catalog| catalog.media_for(&project.id).to_vec()),
    );
    let fallback = store_value(project.thumbnail.clone());
    let cursor = create_rw_signal(GalleryCursor::new(media.with_value(Vec::len)));

    let current = Signal::derive(move || {
        let cursor = cursor.get();
        media.with_value(|media| {
            fallback.with_value(|fallback| {
                cursor
                    .current(media, fallback.as_deref())
                    .map(str::to_string)
            })
        })
    });

    let previous = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        cursor.update(|c| *c = c.prev());
    });
    let next = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        cursor.update(|c| *c = c.next());
    });
    let open_lightbox = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(src) = current.get_untracked() {
            runtime.dispatch_action(DesktopAction::OpenLightbox { src });
        }
    };

    let ProjectContent {
        description,
        role,
        technologies,
    } = project.content;

    view! {
        <div class="project-detail">
            <div class="project-gallery">
                <div class="project-gallery-stage" on:click=open_lightbox>
                    {move || match current.get() {
                        Some(src) => media_view(src, "project-gallery-media"),
                        None => view! { <MediaPlaceholder /> }.into_view(),
                    }}
                </div>
                <Show when=move || cursor.get().shows_navigation()>
                    <GalleryNav
                        has_prev=Signal::derive(move || cursor.get().has_prev())
                        has_next=Signal::derive(move || cursor.get().has_next())
                        counter=Signal::derive(move || cursor.get().counter_label())
                        on_prev=previous
                        on_next=next
                    />
                </Show>
            </div>
            <div class="project-details">
                <Heading>{project.title}</Heading>
                <Text tone=TextTone::Secondary>{project.short_description}</Text>
                <section>
                    <Heading role=TextRole::Label>"Role"</Heading>
                    <p>{role}</p>
                </section>
                <section>
                    <Heading role=TextRole::Label>"Technologies"</Heading>
                    <TagList tags=technologies layout_class="project-technologies" />
                </section>
                <section>
                    <Heading role=TextRole::Label>"Description"</Heading>
                    <p>{description}</p>
                </section>
            </div>
        </div>
    }
}
