use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;
use yew_router::prelude::*;

use super::card::ProjectCard;
use super::chrome::{BackButton, GridBackground, Navbar, PageIndicator, RightNav, SectionHeader};
use super::modal::ProjectModal;
use super::sections::section_body;
use super::{use_catalog, Route};
use crate::catalog::{Project, ProjectType};
use crate::gallery::{self, GALLERY_IMAGES};
use crate::navigation::{wheel_delta_pixels, NavKey, Pager, PagerAction};
use crate::sections::SectionId;


impl Reducible for Pager {
    type Action = PagerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

const FALLBACK_PAGE_HEIGHT_PX: f64 = 800.0;

fn page_height() -> f64 {
    window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(FALLBACK_PAGE_HEIGHT_PX)
}

/// Closes a listing page's modal on Escape. The home pager routes Escape
/// through its own reducer instead.
#[hook]
fn use_cancel_key(selected: UseStateHandle<Option<Rc<Project>>>) {
    use_effect_with((), move |_| {
        let listener = window().map(|win| {
            EventListener::new(&win, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if NavKey::from_key(&event.key()) == NavKey::Cancel {
                    selected.set(None);
                }
            })
        });
        move || drop(listener)
    });
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let catalog = use_catalog();
    let pager = use_reducer_eq(|| Pager::new(SectionId::ALL.len()));
    let timing = pager.timing();

    {
        let dispatcher = pager.dispatcher();
        use_effect_with(pager.is_animating(), move |animating| {
            let settle = (*animating).then(|| {
                Timeout::new(timing.settle_delay_ms, move || {
                    dispatcher.dispatch(PagerAction::Settle)
                })
            });
            move || drop(settle)
        });
    }

    {
        let dispatcher = pager.dispatcher();
        use_effect_with(pager.is_wheel_cooling(), move |cooling| {
            let cooldown = (*cooling).then(|| {
                Timeout::new(timing.wheel_cooldown_ms, move || {
                    dispatcher.dispatch(PagerAction::WheelCooled)
                })
            });
            move || drop(cooldown)
        });
    }

    {
        let dispatcher = pager.dispatcher();
        use_effect_with((), move |_| {
            let listeners = window().map(|win| {
                let keys = {
                    let dispatcher = dispatcher.clone();
                    EventListener::new(&win, "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        let key = NavKey::from_key(&event.key());
                        if key != NavKey::Other {
                            dispatcher.dispatch(PagerAction::Key(key));
                        }
                    })
                };
                let wheel = EventListener::new(&win, "wheel", move |event| {
                    if let Some(event) = event.dyn_ref::<WheelEvent>() {
                        let delta_y =
                            wheel_delta_pixels(event.delta_y(), event.delta_mode(), page_height());
                        dispatcher.dispatch(PagerAction::Wheel {
                            delta_y,
                            at_ms: event.time_stamp(),
                        });
                    }
                });
                (keys, wheel)
            });
            move || drop(listeners)
        });
    }

    let on_select = {
        let dispatcher = pager.dispatcher();
        Callback::from(move |project: Rc<Project>| dispatcher.dispatch(PagerAction::Select(project)))
    };
    let on_close = {
        let dispatcher = pager.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(PagerAction::ClearSelection))
    };
    let on_next = {
        let dispatcher = pager.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(PagerAction::Next))
    };
    let on_prev = {
        let dispatcher = pager.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(PagerAction::Prev))
    };
    let on_jump = {
        let dispatcher = pager.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(PagerAction::GoTo(index)))
    };

    let direction = pager.direction().as_str();
    let slide = |index: usize, class: Classes| -> Html {
        let Some(section) = SectionId::from_index(index) else {
            return html! {};
        };

        html! {
            <div key={section.anchor()} id={section.anchor()} class={class}>
                <div class="slide-inner">
                    <SectionHeader {section} />
                    {section_body(section, &catalog, &on_select)}
                </div>
            </div>
        }
    };

    let leaving = pager.leaving().map(|index| {
        slide(
            index,
            classes!("slide", "is-leaving", format!("slide-exit-{direction}")),
        )
    });
    let current = slide(
        pager.current(),
        classes!(
            "slide",
            pager
                .is_animating()
                .then(|| format!("slide-enter-{direction}"))
        ),
    );

    html! {
        <main class="home-page">
            <GridBackground />
            <Navbar on_jump={on_jump} current={Some(pager.current())} />
            <RightNav
                {on_next}
                {on_prev}
                can_go_next={pager.can_go_next()}
                can_go_prev={pager.can_go_prev()}
            />
            <div class="slide-stage">
                { for leaving }
                {current}
            </div>
            <PageIndicator count={pager.section_count()} current={pager.current()} />
            <ProjectModal project={pager.selected().cloned()} {on_close} />
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsPageProps {
    pub project_type: ProjectType,
}

#[function_component(ProjectsPage)]
pub fn projects_page(props: &ProjectsPageProps) -> Html {
    let catalog = use_catalog();
    let selected = use_state(|| None::<Rc<Project>>);
    use_cancel_key(selected.clone());

    let project_type = props.project_type;
    let projects = catalog.of_type(project_type);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |project: Rc<Project>| selected.set(Some(project)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <main class="listing-page">
            <GridBackground />
            <Navbar />
            <div class="listing-content">
                <BackButton />
                <header class="listing-header">
                    <h1>{project_type.listing_heading()}</h1>
                    <p>{format!("All {}", project_type.plural())}</p>
                </header>
                if projects.is_empty() {
                    <p class="empty-note">{format!("No {} available yet.", project_type.plural())}</p>
                } else {
                    <div class="listing-grid">
                        { for projects.iter().enumerate().map(|(position, project)| html! {
                            <div
                                key={project.id.clone()}
                                class="listing-item"
                                style={format!("animation-delay: {}ms;", position * 100)}
                            >
                                <ProjectCard project={project.clone()} on_select={on_select.clone()} />
                            </div>
                        }) }
                    </div>
                }
            </div>
            <ProjectModal project={(*selected).clone()} {on_close} />
        </main>
    }
}

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    let scroll_offset = use_state(|| 0.0_f64);

    let onscroll = {
        let scroll_offset = scroll_offset.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                scroll_offset.set(f64::from(target.scroll_top()));
            }
        })
    };

    let columns = gallery::columns(&GALLERY_IMAGES);

    html! {
        <main class="gallery-page" {onscroll}>
            <GridBackground />
            <Navbar />
            <div class="listing-content">
                <BackButton />
                <header class="listing-header">
                    <h1>{"GRAPHICS & BRANDING"}</h1>
                    <p>{"Visual exploration and design gallery"}</p>
                </header>
                <div class="gallery-columns">
                    { for columns.iter().enumerate().map(|(column, images)| html! {
                        <div
                            key={column}
                            class="gallery-column"
                            style={format!("transform: translateY({:.1}px);", gallery::column_offset(*scroll_offset, column))}
                        >
                            { for images.iter().map(|&(position, src)| html! {
                                <img
                                    key={position}
                                    class="gallery-image"
                                    src={src}
                                    alt={format!("Gallery piece {}", position + 1)}
                                    loading="lazy"
                                />
                            }) }
                        </div>
                    }) }
                </div>
            </div>
        </main>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="listing-page">
            <GridBackground />
            <Navbar />
            <div class="listing-content not-found">
                <h1>{"404"}</h1>
                <p>{"This page drifted off the grid."}</p>
                <Link<Route> classes={classes!("back-button")} to={Route::Home}>{"← HOME"}</Link<Route>>
            </div>
        </main>
    }
}
