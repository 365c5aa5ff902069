use std::rc::Rc;
use yew::prelude::*;

use crate::catalog::{CardMedia, Project, ProjectKind};

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: Option<Rc<Project>>,
    pub on_close: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct GalleryTileProps {
    src: AttrValue,
    position: usize,
}

#[function_component(GalleryTile)]
fn gallery_tile(props: &GalleryTileProps) -> Html {
    let failed = use_state(|| false);
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    if *failed {
        return html! {
            <div class="modal-tile is-placeholder">{format!("Image {} Placeholder", props.position)}</div>
        };
    }

    html! {
        <div class="modal-tile">
            <img src={props.src.clone()} alt={format!("Image {}", props.position)} loading="lazy" {onerror} />
        </div>
    }
}

fn fallback_media(project: &Project) -> Html {
    let swatch = match project.card_media(true) {
        CardMedia::Placeholder(swatch) => swatch,
        CardMedia::Image(_) => project.placeholder_swatch().to_string(),
    };

    html! {
        <div class={classes!("modal-fallback", format!("swatch-{swatch}"))}>
            <span>{"No Preview Available"}</span>
        </div>
    }
}

fn media(project: &Project) -> Html {
    match &project.kind {
        ProjectKind::Video(details) => match details.embed_url.as_deref() {
            Some(embed_url) => html! {
                <div class="modal-video">
                    <iframe
                        src={embed_url.to_string()}
                        title={format!("Video: {}", project.title)}
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen="true"
                    />
                </div>
            },
            None => fallback_media(project),
        },
        ProjectKind::Graphic(details) if !details.images.is_empty() => html! {
            <div class="modal-gallery">
                { for details.images.iter().enumerate().map(|(index, src)| html! {
                    <GalleryTile key={index} src={src.clone()} position={index + 1} />
                }) }
            </div>
        },
        ProjectKind::Website(details) => match details.live_url.as_deref() {
            Some(live_url) => html! {
                <div class="modal-live">
                    <iframe
                        src={live_url.to_string()}
                        title={format!("Preview of {}", project.title)}
                        sandbox="allow-scripts allow-same-origin allow-popups allow-forms"
                    />
                    <span class="modal-live-badge">{"LIVE PREVIEW"}</span>
                </div>
            },
            None => fallback_media(project),
        },
        ProjectKind::Graphic(_) => fallback_media(project),
    }
}

fn video_duration(project: &Project) -> Option<String> {
    match &project.kind {
        ProjectKind::Video(details) => details.duration.clone(),
        _ => None,
    }
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let Some(project) = props.project.clone() else {
        return html! {};
    };

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let project_type = project.project_type();
    let tags = project.tags();

    html! {
        <>
            <div class="modal-backdrop" onclick={on_backdrop} />
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
            >
                <button class="modal-close" type="button" aria-label="Close" onclick={on_close_button}>
                    {"✕"}
                </button>

                <div class="modal-media">{media(&project)}</div>

                <div class="modal-details">
                    <span class="chip">{project.category.clone()}</span>
                    <h2 id="modal-title" class="modal-title">{project.title.clone()}</h2>
                    <p class="modal-description">{project.description.clone()}</p>

                    if project.live_url().is_some() || project.source_url().is_some() {
                        <div class="modal-links">
                            if let Some(url) = project.live_url() {
                                <a class="modal-link is-primary" href={url.to_string()} target="_blank" rel="noopener noreferrer">
                                    {"↗ Visit Live"}
                                </a>
                            }
                            if let Some(url) = project.source_url() {
                                <a class="modal-link" href={url.to_string()} target="_blank" rel="noopener noreferrer">
                                    {"</> Source"}
                                </a>
                            }
                        </div>
                    }

                    <dl class="modal-meta">
                        <div>
                            <dt>{"YEAR"}</dt>
                            <dd>{project.year.clone()}</dd>
                        </div>
                        <div>
                            <dt>{"TYPE"}</dt>
                            <dd>{project_type.label()}</dd>
                        </div>
                        if let Some(duration) = video_duration(&project) {
                            <div>
                                <dt>{"DURATION"}</dt>
                                <dd>{duration}</dd>
                            </div>
                        }
                    </dl>

                    if !tags.is_empty() {
                        <div class="modal-tags">
                            <h3>{project.tags_heading()}</h3>
                            <ul>
                                { for tags.iter().map(|tag| html! { <li key={tag.clone()} class="tag">{tag.clone()}</li> }) }
                            </ul>
                        </div>
                    }
                </div>
            </div>
        </>
    }
}

