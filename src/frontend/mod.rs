mod card;
mod chrome;
mod modal;
mod pages;
mod sections;

use log::{error, info, Level};
use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{Catalog, ProjectType};
use pages::{GalleryPage, HomePage, NotFoundPage, ProjectsPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/projects/:kind")]
    ProjectsByType { kind: String },
    #[at("/gallery")]
    Gallery,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn listing(project_type: ProjectType) -> Self {
        Self::ProjectsByType {
            kind: project_type.plural().to_string(),
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Projects => html! { <ProjectsPage project_type={ProjectType::Website} /> },
        Route::ProjectsByType { kind } => match ProjectType::from_slug(&kind) {
            Some(project_type) => html! {
                <ProjectsPage key={project_type.slug()} {project_type} />
            },
            None => html! { <NotFoundPage /> },
        },
        Route::Gallery => html! { <GalleryPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

fn load_catalog() -> Catalog {
    match Catalog::embedded() {
        Ok(catalog) => {
            info!("catalog loaded: {} projects", catalog.len());
            catalog
        }
        Err(err) => {
            error!("catalog rejected, rendering without projects: {err}");
            Catalog::default()
        }
    }
}

#[hook]
pub(crate) fn use_catalog() -> Rc<Catalog> {
    use_context::<Rc<Catalog>>().unwrap_or_default()
}

pub(crate) fn open_in_new_context(url: &str) {
    if let Some(win) = window() {
        if win
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .is_err()
        {
            error!("could not open {url}");
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_motion_preference() {
    if !prefers_reduced_motion() {
        return;
    }

    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-motion", "reduced");
    }
}

#[function_component(App)]
fn app() -> Html {
    let catalog = use_memo((), |_| load_catalog());

    use_effect_with((), |_| {
        apply_motion_preference();
        || ()
    });

    html! {
        <ContextProvider<Rc<Catalog>> context={catalog}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<Catalog>>>
    }
}

pub fn run() {
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
