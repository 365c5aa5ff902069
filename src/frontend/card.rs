use log::debug;
use std::rc::Rc;
use yew::prelude::*;

use super::open_in_new_context;
use crate::catalog::{CardMedia, Project, ThumbnailState};

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Rc<Project>,
    pub on_select: Callback<Rc<Project>>,
    #[prop_or_default]
    pub featured: bool,
}

#[derive(Properties, PartialEq)]
struct CardActionProps {
    url: AttrValue,
    label: AttrValue,
    icon: AttrValue,
}

/// Hover affordance for an external link. It must not also open the modal.
#[function_component(CardAction)]
fn card_action(props: &CardActionProps) -> Html {
    let onclick = {
        let url = props.url.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            open_in_new_context(&url);
        })
    };
    let onkeydown = Callback::from(|event: KeyboardEvent| event.stop_propagation());

    html! {
        <button class="card-action" type="button" aria-label={props.label.clone()} {onclick} {onkeydown}>
            <span aria-hidden="true">{props.icon.clone()}</span>
        </button>
    }
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let thumbnail = use_state(ThumbnailState::default);
    let project = props.project.clone();
    let project_type = project.project_type();

    let onclick = {
        let project = project.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(project.clone()))
    };

    let onkeydown = {
        let project = project.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |event: KeyboardEvent| {
            if matches!(event.key().as_str(), "Enter" | " ") {
                event.prevent_default();
                on_select.emit(project.clone());
            }
        })
    };

    let onerror = {
        let thumbnail = thumbnail.clone();
        let id = project.id.clone();
        Callback::from(move |_: Event| {
            if thumbnail.has_failed() {
                return;
            }
            debug!("thumbnail failed for {id}, switching to placeholder");
            let mut next = *thumbnail;
            next.fail();
            thumbnail.set(next);
        })
    };

    let media = match thumbnail.media(&project) {
        CardMedia::Image(url) => html! {
            <img
                class="project-card-image"
                src={url}
                alt={project.title.clone()}
                loading="lazy"
                {onerror}
            />
        },
        CardMedia::Placeholder(swatch) => html! {
            <div class={classes!("project-card-swatch", format!("swatch-{swatch}"))} aria-hidden="true" />
        },
    };

    let live_url = project.live_url().map(|url| AttrValue::from(url.to_string()));
    let source_url = project.source_url().map(|url| AttrValue::from(url.to_string()));

    html! {
        <article
            class={classes!("project-card", props.featured.then_some("is-featured"))}
            role="button"
            tabindex="0"
            aria-label={format!("Open {}", project.title)}
            {onclick}
            {onkeydown}
        >
            {media}
            <div class="project-card-shade" />
            <div class="project-card-body">
                <div class="project-card-row">
                    <span class="chip">{project.category.clone()}</span>
                    <span class="project-card-icon" aria-hidden="true">{project_type.icon()}</span>
                </div>
                <h3 class="project-card-title">{project.title.clone()}</h3>
                <p class="project-card-meta">
                    <span>{project.year.clone()}</span>
                    <span aria-hidden="true">{"•"}</span>
                    <span>{project_type.label()}</span>
                </p>
            </div>
            if live_url.is_some() || source_url.is_some() {
                <div class="project-card-actions">
                    if let Some(url) = source_url {
                        <CardAction {url} label="View source" icon="</>" />
                    }
                    if let Some(url) = live_url {
                        <CardAction {url} label="Open live site" icon="↗" />
                    }
                </div>
            }
        </article>
    }
}
