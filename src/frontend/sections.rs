use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use super::card::ProjectCard;
use super::Route;
use crate::catalog::{Catalog, Project, ProjectType};
use crate::sections::SectionId;

const ABOUT_TAGS: [&str; 6] = ["React", "Next.js", "TypeScript", "WebGL", "After Effects", "Figma"];
const CONTACT_EMAIL: &str = "hello@example.com";
const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://www.linkedin.com"),
    ("Twitter", "https://twitter.com"),
    ("Instagram", "https://www.instagram.com"),
];

pub fn section_body(
    section: SectionId,
    catalog: &Catalog,
    on_select: &Callback<Rc<Project>>,
) -> Html {
    let projects = section
        .project_type()
        .map(|project_type| catalog.of_type(project_type))
        .unwrap_or_default();
    let on_select = on_select.clone();

    match section {
        SectionId::Home => html! { <HomeSection /> },
        SectionId::Work => html! { <WorkSection {projects} {on_select} /> },
        SectionId::Graphics => html! { <GraphicsSection {projects} {on_select} /> },
        SectionId::Videos => html! { <VideosSection {projects} {on_select} /> },
        SectionId::About => html! { <AboutSection /> },
        SectionId::Contact => html! { <ContactSection /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub projects: Vec<Rc<Project>>,
    pub on_select: Callback<Rc<Project>>,
}

#[derive(Properties, PartialEq)]
struct SeeMoreProps {
    project_type: ProjectType,
}

#[function_component(SeeMore)]
fn see_more(props: &SeeMoreProps) -> Html {
    let navigator = use_navigator();
    let project_type = props.project_type;
    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::listing(project_type));
        }
    });

    html! {
        <button
            class="see-more"
            type="button"
            aria-label={format!("See all {}", project_type.plural())}
            {onclick}
        >
            <span>{"SEE MORE"}</span>
            <span class="see-more-rule" aria-hidden="true" />
            <span aria-hidden="true">{"›"}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct MarqueeProps {
    #[prop_or_default]
    vertical: bool,
    #[prop_or(2)]
    repeat: usize,
    #[prop_or(20)]
    duration_seconds: u32,
    #[prop_or_default]
    children: Html,
}

/// Repeats its children in identical tracks; the stylesheet scrolls them and
/// pauses on hover.
#[function_component(Marquee)]
fn marquee(props: &MarqueeProps) -> Html {
    let style = format!("--marquee-duration: {}s;", props.duration_seconds);

    html! {
        <div class={classes!("marquee", props.vertical.then_some("is-vertical"))} {style}>
            { for (0..props.repeat).map(|track| html! {
                <div key={track} class="marquee-track" aria-hidden={(track > 0).to_string()}>
                    {props.children.clone()}
                </div>
            }) }
        </div>
    }
}

#[function_component(HomeSection)]
fn home_section() -> Html {
    html! {
        <div class="home-section">
            <h1 class="hero-title">
                <span class="hero-title-line">{"ARCHITECTING"}</span>
                <span class="hero-title-gradient">{"DIGITAL REALITIES."}</span>
            </h1>
            <div class="hero-copy">
                <p class="hero-lead">
                    {"A "}<span class="accent">{"web developer"}</span>
                    {" passionate about crafting modern, responsive applications."}
                </p>
                <p class="hero-note">
                    {"Specialized in Next.js and React development, with a creative side in graphic design and video editing as hobbies that fuel my visual storytelling."}
                </p>
            </div>
        </div>
    }
}

#[function_component(WorkSection)]
fn work_section(props: &ShowcaseProps) -> Html {
    let featured = props.projects.first().cloned();
    let on_select = props.on_select.clone();

    html! {
        <div class="showcase work-section">
            <h2 class="section-watermark" aria-hidden="true">{"| PROJECTS"}</h2>
            <div class="work-layout">
                <div class="work-featured">
                    if let Some(project) = featured {
                        <ProjectCard {project} on_select={on_select.clone()} featured={true} />
                    }
                </div>
                <div class="work-stream">
                    <Marquee vertical={true} repeat={4}>
                        { for props.projects.iter().map(|project| html! {
                            <div key={project.id.clone()} class="marquee-item">
                                <ProjectCard project={project.clone()} on_select={on_select.clone()} />
                            </div>
                        }) }
                    </Marquee>
                </div>
            </div>
            <SeeMore project_type={ProjectType::Website} />
        </div>
    }
}

#[function_component(GraphicsSection)]
fn graphics_section(props: &ShowcaseProps) -> Html {
    html! {
        <div class="showcase graphics-section">
            <h2 class="section-watermark" aria-hidden="true">{"| GRAPHIC ARTS"}</h2>
            <div class="showcase-grid">
                { for props.projects.iter().take(2).map(|project| html! {
                    <ProjectCard key={project.id.clone()} project={project.clone()} on_select={props.on_select.clone()} />
                }) }
            </div>
            <div class="showcase-actions">
                <Link<Route> classes={classes!("gallery-link")} to={Route::Gallery}>{"OPEN GALLERY"}</Link<Route>>
                <SeeMore project_type={ProjectType::Graphic} />
            </div>
        </div>
    }
}

#[function_component(VideosSection)]
fn videos_section(props: &ShowcaseProps) -> Html {
    html! {
        <div class="showcase videos-section">
            <h2 class="section-watermark" aria-hidden="true">{"| MOTION"}</h2>
            if props.projects.is_empty() {
                <p class="empty-note">{"No videos published yet."}</p>
            } else {
                <div class="showcase-grid">
                    { for props.projects.iter().take(2).map(|project| html! {
                        <ProjectCard key={project.id.clone()} project={project.clone()} on_select={props.on_select.clone()} />
                    }) }
                </div>
            }
            <SeeMore project_type={ProjectType::Video} />
        </div>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <div class="about-section">
            <p>
                {"I'm a multi-disciplinary creative developer passionate about the intersection of design and technology. My work is driven by the belief that the web should be an immersive extension of reality."}
            </p>
            <p>
                {"With a background in both traditional design and modern engineering, I bring a unique perspective to every project, whether it's a complex web application, a brand identity, or a motion graphic piece."}
            </p>
            <ul class="tag-row">
                { for ABOUT_TAGS.iter().map(|tag| html! { <li key={*tag} class="tag is-outlined">{*tag}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <div class="contact-section">
            <a class="contact-email" href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
            <ul class="contact-socials">
                { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                    <li key={*label}>
                        <a href={*href} target="_blank" rel="noopener noreferrer">{*label}</a>
                    </li>
                }) }
            </ul>
        </div>
    }
}
