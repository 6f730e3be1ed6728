use super::*;
use crate::model::WindowKind;
use portfolio_content::{Award, Contact, Experience, LocationMap, Profile};
use system_ui::{EmptyState, Heading, Icon, IconName, IconSize, TagList, Text, TextRole, TextTone};

#[component]
/// Body of a non-project window.
pub(super) fn StaticWindowContent(kind: WindowKind) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(content) = runtime.profile.get_value() else {
        return view! { <EmptyState message="Content unavailable" /> }.into_view();
    };

    match kind {
        WindowKind::Profile => view! { <ProfileBody profile=content.profile /> }.into_view(),
        WindowKind::Awards => view! { <AwardsBody awards=content.awards /> }.into_view(),
        WindowKind::Contact => view! { <ContactBody contact=content.contact /> }.into_view(),
        WindowKind::Experience => {
            view! { <ExperienceBody experience=content.experience /> }.into_view()
        }
        WindowKind::Location => view! { <LocationBody location=content.location /> }.into_view(),
        WindowKind::Project { .. } => ().into_view(),
    }
}

#[component]
fn ProfileBody(profile: Profile) -> impl IntoView {
    let Profile {
        name,
        title,
        intro,
        photo,
        education,
        skills,
    } = profile;

    view! {
        <div class="profile-window">
            <div class="profile-header">
                {photo.map(|src| view! { <img class="profile-photo" src=src alt=name.clone() /> })}
                <div>
                    <Heading>{name}</Heading>
                    <Text tone=TextTone::Secondary>{title}</Text>
                </div>
            </div>
            <p class="profile-intro">{intro}</p>
            <section class="profile-skills">
                {skills
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="skill-group">
                                <Text role=TextRole::Label>{group.label}</Text>
                                <TagList tags=group.skills />
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="profile-education">
                <Heading role=TextRole::Label>"Education"</Heading>
                <ul>
                    {education
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <li>
                                    <Text role=TextRole::Label>{entry.school}</Text>
                                    <Text>{entry.degree}</Text>
                                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                                        {entry.years}
                                    </Text>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}

#[component]
fn AwardsBody(awards: Vec<Award>) -> impl IntoView {
    view! {
        <ul class="awards-list">
            {awards
                .into_iter()
                .map(|award| {
                    view! {
                        <li>
                            <Text>{award.title}</Text>
                            <Text role=TextRole::Caption tone=TextTone::Accent>{award.year}</Text>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn ContactBody(contact: Contact) -> impl IntoView {
    let mailto = contact.mailto_href();
    view! {
        <div class="contact-window">
            <Heading>{contact.heading}</Heading>
            <Text tone=TextTone::Secondary>{contact.blurb}</Text>
            <a class="contact-link" href=mailto>
                <Icon icon=IconName::Mail size=IconSize::Sm />
                <span>{contact.email}</span>
            </a>
            <a
                class="contact-link"
                href=contact.linkedin_url
                target="_blank"
                rel="noopener noreferrer"
            >
                <Icon icon=IconName::Link size=IconSize::Sm />
                <span>"LinkedIn"</span>
            </a>
        </div>
    }
}

#[component]
fn ExperienceBody(experience: Vec<Experience>) -> impl IntoView {
    view! {
        <ol class="experience-timeline">
            {experience
                .into_iter()
                .map(|entry| {
                    view! {
                        <li>
                            <Text role=TextRole::Caption tone=TextTone::Accent>{entry.period}</Text>
                            <Heading role=TextRole::Label>{entry.role}</Heading>
                            <Text tone=TextTone::Secondary>{entry.company}</Text>
                            <p>{entry.description}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
fn LocationBody(location: LocationMap) -> impl IntoView {
    view! {
        <div class="location-map">
            <img src=location.map_image alt="World map" />
            {location
                .pins
                .into_iter()
                .map(|pin| {
                    view! {
                        <span
                            class="map-pin"
                            style=pin.style()
                            title=pin.name.clone()
                            aria-label=pin.name.clone()
                            data-pin=pin.id
                        >
                            <span class="map-pin-tooltip" role="tooltip">{pin.name}</span>
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
