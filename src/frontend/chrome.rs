use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;
use crate::sections::SectionId;

#[function_component(GridBackground)]
pub fn grid_background() -> Html {
    html! {
        <div class="grid-background" aria-hidden="true">
            <div class="grid-spotlight" />
            <div class="grid-lines" />
            <div class="grid-drift" />
            <div class="grid-floor-glow" />
            <div class="grid-vignette" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Present only on the home pager; other views link back to it instead.
    #[prop_or_default]
    pub on_jump: Option<Callback<usize>>,
    #[prop_or_default]
    pub current: Option<usize>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let logo = html! {
        <>
            <span class="accent">{"<"}</span>
            {"PORTFOLIO"}
            <span class="accent">{"/>"}</span>
        </>
    };

    let brand = match props.on_jump.clone() {
        Some(on_jump) => html! {
            <button class="navbar-brand" type="button" onclick={move |_: MouseEvent| on_jump.emit(0)}>
                {logo}
            </button>
        },
        None => html! {
            <Link<Route> classes={classes!("navbar-brand")} to={Route::Home}>{logo}</Link<Route>>
        },
    };

    let items = SectionId::ALL.into_iter().skip(1).map(|section| {
        let index = section.index();
        match props.on_jump.clone() {
            Some(on_jump) => {
                let is_current = props.current == Some(index);
                html! {
                    <li key={section.anchor()}>
                        <button
                            class={classes!("navbar-link", is_current.then_some("is-current"))}
                            type="button"
                            disabled={is_current}
                            aria-current={is_current.to_string()}
                            onclick={move |_: MouseEvent| on_jump.emit(index)}
                        >
                            {section.nav_label()}
                        </button>
                    </li>
                }
            }
            None => html! {
                <li key={section.anchor()}>
                    <Link<Route> classes={classes!("navbar-link")} to={Route::Home}>{section.nav_label()}</Link<Route>>
                </li>
            },
        }
    });

    html! {
        <nav class="navbar" aria-label="Sections">
            {brand}
            <ul class="navbar-links">{ for items }</ul>
            <span class="navbar-menu-hint">{"MENU"}</span>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct RightNavProps {
    pub on_next: Callback<()>,
    pub on_prev: Callback<()>,
    pub can_go_next: bool,
    pub can_go_prev: bool,
}

#[function_component(RightNav)]
pub fn right_nav(props: &RightNavProps) -> Html {
    let on_prev = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_: MouseEvent| on_prev.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="right-nav">
            <button
                class={classes!("right-nav-button", (!props.can_go_prev).then_some("is-disabled"))}
                type="button"
                disabled={!props.can_go_prev}
                aria-label="Previous section"
                onclick={on_prev}
            >
                <span aria-hidden="true">{"︿"}</span>
            </button>
            <button
                class={classes!("right-nav-button", (!props.can_go_next).then_some("is-disabled"))}
                type="button"
                disabled={!props.can_go_next}
                aria-label="Next section"
                onclick={on_next}
            >
                <span aria-hidden="true">{"﹀"}</span>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageIndicatorProps {
    pub count: usize,
    pub current: usize,
}

#[function_component(PageIndicator)]
pub fn page_indicator(props: &PageIndicatorProps) -> Html {
    html! {
        <div
            class="page-indicator"
            role="progressbar"
            aria-valuemin="1"
            aria-valuemax={props.count.to_string()}
            aria-valuenow={(props.current + 1).to_string()}
        >
            { for (0..props.count).map(|index| html! {
                <span
                    key={index}
                    class={classes!("page-indicator-bar", (index == props.current).then_some("is-active"))}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub section: SectionId,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <span>{props.section.counter_label()}</span>
            <span class="section-header-rule" />
            <span>{props.section.subtitle()}</span>
        </div>
    }
}

#[function_component(BackButton)]
pub fn back_button() -> Html {
    let navigator = use_navigator();
    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.back();
        }
    });

    html! {
        <button class="back-button" type="button" {onclick}>
            <span class="back-button-arrow" aria-hidden="true">{"←"}</span>
            <span>{"BACK"}</span>
        </button>
    }
}
