//! Section pager state.
//!
//! Everything that decides whether a navigation request is honoured lives here
//! as plain data, so the browser layer only has to forward events and run the
//! two timers (`Settle` after a committed move, `WheelCooled` after a wheel
//! gesture fires).
//!
//! Requests are never errors. Out-of-range targets, requests during a
//! transition and requests while a project is open are all dropped.

use log::debug;
use std::rc::Rc;

use crate::catalog::Project;

pub const SETTLE_DELAY_MS: u32 = 600;
pub const WHEEL_COOLDOWN_MS: u32 = 800;
pub const WHEEL_DELTA_THRESHOLD: f64 = 30.0;
/// A pause longer than this ends a wheel gesture.
pub const WHEEL_IDLE_RESET_MS: u32 = 200;
pub const DEFAULT_LINE_HEIGHT_PX: f64 = 16.0;

const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;

/// UX tuning for the pager. The two delays are tuned independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationTiming {
    pub settle_delay_ms: u32,
    pub wheel_cooldown_ms: u32,
    pub wheel_delta_threshold: f64,
    pub wheel_idle_reset_ms: u32,
}

impl Default for NavigationTiming {
    fn default() -> Self {
        Self {
            settle_delay_ms: SETTLE_DELAY_MS,
            wheel_cooldown_ms: WHEEL_COOLDOWN_MS,
            wheel_delta_threshold: WHEEL_DELTA_THRESHOLD,
            wheel_idle_reset_ms: WHEEL_IDLE_RESET_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Converts a DOM wheel delta to pixels. Line and page deltas depend on the
/// device; pixel deltas pass through.
pub fn wheel_delta_pixels(delta: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        DOM_DELTA_LINE => delta * DEFAULT_LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => delta * page_height,
        _ => delta,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Cancel,
    Other,
}

impl NavKey {
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowDown" | "PageDown" => Self::Down,
            "ArrowUp" | "PageUp" => Self::Up,
            "Escape" | "Esc" => Self::Cancel,
            _ => Self::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PagerAction {
    Next,
    Prev,
    GoTo(usize),
    Settle,
    /// Vertical delta in pixels, stamped with the event time in milliseconds.
    Wheel { delta_y: f64, at_ms: f64 },
    WheelCooled,
    Key(NavKey),
    Select(Rc<Project>),
    ClearSelection,
}

#[derive(Clone, Debug)]
pub struct Pager {
    section_count: usize,
    current: usize,
    direction: Direction,
    leaving: Option<usize>,
    animating: bool,
    wheel_cooling: bool,
    wheel_accumulated: f64,
    wheel_last_at_ms: Option<f64>,
    timing: NavigationTiming,
    selected: Option<Rc<Project>>,
}

/// Equality covers what the page draws. The wheel gesture in progress is left
/// out so that sub-threshold ticks don't re-render.
impl PartialEq for Pager {
    fn eq(&self, other: &Self) -> bool {
        self.section_count == other.section_count
            && self.current == other.current
            && self.direction == other.direction
            && self.leaving == other.leaving
            && self.animating == other.animating
            && self.wheel_cooling == other.wheel_cooling
            && self.timing == other.timing
            && self.selected == other.selected
    }
}

impl Pager {
    pub fn new(section_count: usize) -> Self {
        Self::with_timing(section_count, NavigationTiming::default())
    }

    pub fn with_timing(section_count: usize, timing: NavigationTiming) -> Self {
        Self {
            section_count,
            current: 0,
            direction: Direction::Forward,
            leaving: None,
            animating: false,
            wheel_cooling: false,
            wheel_accumulated: 0.0,
            wheel_last_at_ms: None,
            timing,
            selected: None,
        }
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Index of the section still playing its exit animation, if any.
    pub fn leaving(&self) -> Option<usize> {
        self.leaving
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_wheel_cooling(&self) -> bool {
        self.wheel_cooling
    }

    pub fn timing(&self) -> NavigationTiming {
        self.timing
    }

    pub fn selected(&self) -> Option<&Rc<Project>> {
        self.selected.as_ref()
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.section_count
    }

    pub fn can_go_prev(&self) -> bool {
        self.current > 0
    }

    /// Returns `true` when the action changed any state.
    pub fn apply(&mut self, action: PagerAction) -> bool {
        match action {
            PagerAction::Next => self.next(),
            PagerAction::Prev => self.prev(),
            PagerAction::GoTo(index) => self.go_to(index),
            PagerAction::Settle => self.settle(),
            PagerAction::Wheel { delta_y, at_ms } => self.wheel(delta_y, at_ms),
            PagerAction::WheelCooled => self.cool_wheel(),
            PagerAction::Key(key) => self.key(key),
            PagerAction::Select(project) => self.select(project),
            PagerAction::ClearSelection => self.clear_selection(),
        }
    }

    pub fn next(&mut self) -> bool {
        self.step(Direction::Forward)
    }

    pub fn prev(&mut self) -> bool {
        self.step(Direction::Backward)
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if self.is_blocked() || index == self.current || index >= self.section_count {
            return false;
        }

        let direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.commit(index, direction);
        true
    }

    pub fn settle(&mut self) -> bool {
        if !self.animating && self.leaving.is_none() {
            return false;
        }

        self.animating = false;
        self.leaving = None;
        true
    }

    /// Feeds one wheel event into the current gesture. A gesture ends on a
    /// direction flip or after `wheel_idle_reset_ms` without events.
    pub fn wheel(&mut self, delta_y: f64, at_ms: f64) -> bool {
        if self.selected.is_some() || self.wheel_cooling || delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }

        let idle = self.wheel_last_at_ms.is_some_and(|last| {
            !(0.0..=f64::from(self.timing.wheel_idle_reset_ms)).contains(&(at_ms - last))
        });
        let reversed =
            self.wheel_accumulated != 0.0 && self.wheel_accumulated.signum() != delta_y.signum();
        if idle || reversed {
            self.wheel_accumulated = 0.0;
        }
        self.wheel_last_at_ms = Some(at_ms);
        self.wheel_accumulated += delta_y;

        if self.wheel_accumulated.abs() <= self.timing.wheel_delta_threshold {
            return true;
        }

        let forward = self.wheel_accumulated > 0.0;
        self.wheel_accumulated = 0.0;
        self.wheel_cooling = true;

        if forward {
            self.next();
        } else {
            self.prev();
        }
        true
    }

    pub fn cool_wheel(&mut self) -> bool {
        if !self.wheel_cooling {
            return false;
        }

        self.wheel_cooling = false;
        true
    }

    pub fn key(&mut self, key: NavKey) -> bool {
        if self.selected.is_some() {
            return key == NavKey::Cancel && self.clear_selection();
        }

        match key {
            NavKey::Down => self.next(),
            NavKey::Up => self.prev(),
            NavKey::Cancel | NavKey::Other => false,
        }
    }

    pub fn select(&mut self, project: Rc<Project>) -> bool {
        if self.selected.as_ref().is_some_and(|current| current.id == project.id) {
            return false;
        }

        debug!("project selected: {}", project.id);
        self.selected = Some(project);
        self.wheel_accumulated = 0.0;
        self.wheel_last_at_ms = None;
        true
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    fn is_blocked(&self) -> bool {
        self.animating || self.selected.is_some()
    }

    fn step(&mut self, direction: Direction) -> bool {
        if self.is_blocked() {
            return false;
        }

        let target = match direction {
            Direction::Forward => self.current.checked_add(1),
            Direction::Backward => self.current.checked_sub(1),
        };

        match target {
            Some(target) if target < self.section_count => {
                self.commit(target, direction);
                true
            }
            _ => false,
        }
    }

    fn commit(&mut self, target: usize, direction: Direction) {
        debug!(
            "section {} -> {} ({})",
            self.current,
            target,
            direction.as_str()
        );
        self.leaving = Some(self.current);
        self.current = target;
        self.direction = direction;
        self.animating = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use proptest::prelude::*;

    const SECTIONS: usize = 6;

    fn pager_at(index: usize) -> Pager {
        let mut pager = Pager::new(SECTIONS);
        if index != 0 {
            assert!(pager.go_to(index));
            pager.settle();
        }
        pager
    }

    fn project(id: &str) -> Rc<Project> {
        Catalog::embedded()
            .expect("embedded catalog is valid")
            .find(id)
            .expect("project exists")
    }

    #[test]
    fn next_and_prev_move_by_one_and_stop_at_the_ends() {
        for start in 0..SECTIONS {
            let mut pager = pager_at(start);
            let moved = pager.next();
            assert_eq!(moved, start + 1 < SECTIONS);
            assert_eq!(pager.current(), (start + 1).min(SECTIONS - 1));

            let mut pager = pager_at(start);
            let moved = pager.prev();
            assert_eq!(moved, start > 0);
            assert_eq!(pager.current(), start.saturating_sub(1));
        }
    }

    #[test]
    fn lock_swallows_requests_until_settled() {
        let mut pager = pager_at(2);

        assert!(pager.next());
        assert!(!pager.next());
        assert!(!pager.prev());
        assert!(!pager.go_to(0));
        assert_eq!(pager.current(), 3);

        assert!(pager.settle());
        assert!(pager.prev());
        assert_eq!(pager.current(), 2);
    }

    #[test]
    fn go_to_sets_direction_from_the_sign_of_the_jump() {
        let mut pager = pager_at(3);
        assert!(pager.go_to(5));
        assert_eq!(pager.direction(), Direction::Forward);
        assert_eq!(pager.direction().sign(), 1);

        pager.settle();
        assert!(pager.go_to(1));
        assert_eq!(pager.direction(), Direction::Backward);
        assert_eq!(pager.direction().sign(), -1);
    }

    #[test]
    fn go_to_ignores_current_and_out_of_range_targets() {
        let mut pager = pager_at(2);

        assert!(!pager.go_to(2));
        assert!(!pager.go_to(SECTIONS));
        assert!(!pager.go_to(usize::MAX));
        assert_eq!(pager.current(), 2);
        assert!(!pager.is_animating());
    }

    #[test]
    fn commit_records_the_leaving_section_until_settle() {
        let mut pager = pager_at(1);

        pager.next();
        assert_eq!(pager.leaving(), Some(1));

        pager.settle();
        assert_eq!(pager.leaving(), None);
        assert!(!pager.settle());
    }

    #[test]
    fn selection_suppresses_every_navigation_request() {
        let mut pager = pager_at(2);
        pager.select(project("gfx-1"));

        assert!(!pager.next());
        assert!(!pager.prev());
        assert!(!pager.go_to(4));
        assert!(!pager.key(NavKey::Down));
        assert!(!pager.wheel(200.0, 0.0));
        assert_eq!(pager.current(), 2);

        assert!(pager.clear_selection());
        assert!(pager.next());
        assert_eq!(pager.current(), 3);
    }

    #[test]
    fn three_wheel_events_inside_the_cooldown_change_one_section() {
        let mut pager = pager_at(0);

        pager.wheel(120.0, 0.0);
        pager.settle();
        pager.wheel(120.0, 16.0);
        pager.wheel(120.0, 32.0);

        assert_eq!(pager.current(), 1);
        assert!(pager.is_wheel_cooling());

        assert!(pager.cool_wheel());
        pager.wheel(120.0, 900.0);
        assert_eq!(pager.current(), 2);
    }

    #[test]
    fn small_wheel_deltas_accumulate_until_the_threshold() {
        let mut pager = pager_at(3);

        pager.wheel(-12.0, 0.0);
        pager.wheel(-12.0, 16.0);
        assert_eq!(pager.current(), 3);
        assert!(!pager.is_wheel_cooling());

        pager.wheel(-12.0, 32.0);
        assert_eq!(pager.current(), 2);
        assert!(pager.is_wheel_cooling());
    }

    #[test]
    fn wheel_reversal_restarts_accumulation() {
        let mut pager = pager_at(3);

        pager.wheel(25.0, 0.0);
        pager.wheel(-25.0, 16.0);
        pager.wheel(25.0, 32.0);

        assert_eq!(pager.current(), 3);
        assert!(!pager.is_wheel_cooling());
    }

    #[test]
    fn separate_small_scrolls_do_not_add_up() {
        let mut pager = pager_at(0);
        let idle = f64::from(pager.timing().wheel_idle_reset_ms);

        pager.wheel(20.0, 0.0);
        pager.wheel(15.0, idle + 1.0);
        assert_eq!(pager.current(), 0);
        assert!(!pager.is_wheel_cooling());

        pager.wheel(20.0, 60_000.0);
        pager.wheel(15.0, 60_000.0 + idle);
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn wheel_clock_going_backwards_starts_a_new_gesture() {
        let mut pager = pager_at(0);

        pager.wheel(20.0, 500.0);
        pager.wheel(15.0, 100.0);
        assert_eq!(pager.current(), 0);
    }

    #[test]
    fn sub_threshold_wheel_ticks_leave_the_rendered_state_equal() {
        let mut pager = pager_at(2);
        let before = pager.clone();

        assert!(pager.apply(PagerAction::Wheel { delta_y: 10.0, at_ms: 0.0 }));
        assert_eq!(pager, before);

        assert!(pager.apply(PagerAction::Wheel { delta_y: 25.0, at_ms: 16.0 }));
        assert_ne!(pager, before);
        assert_eq!(pager.current(), 3);
    }

    #[test]
    fn wheel_deltas_convert_to_pixels() {
        assert_eq!(wheel_delta_pixels(42.0, 0, 900.0), 42.0);
        assert_eq!(wheel_delta_pixels(3.0, 1, 900.0), 3.0 * DEFAULT_LINE_HEIGHT_PX);
        assert_eq!(wheel_delta_pixels(-1.0, 2, 900.0), -900.0);
        assert_eq!(wheel_delta_pixels(5.0, 7, 900.0), 5.0);
    }

    #[test]
    fn wheel_cooldown_starts_even_when_the_pager_refuses() {
        let mut pager = pager_at(SECTIONS - 1);

        assert!(pager.wheel(80.0, 0.0));
        assert_eq!(pager.current(), SECTIONS - 1);
        assert!(pager.is_wheel_cooling());
    }

    #[test]
    fn wheel_cooldown_is_independent_of_the_animation_lock() {
        let mut pager = pager_at(0);

        pager.wheel(60.0, 0.0);
        pager.settle();
        assert!(pager.is_wheel_cooling());
        assert!(pager.next());

        pager.settle();
        pager.cool_wheel();
        pager.next();
        assert!(pager.is_animating());
        assert!(!pager.is_wheel_cooling());
    }

    #[test]
    fn keys_map_to_pager_operations() {
        assert_eq!(NavKey::from_key("ArrowDown"), NavKey::Down);
        assert_eq!(NavKey::from_key("ArrowUp"), NavKey::Up);
        assert_eq!(NavKey::from_key("Escape"), NavKey::Cancel);
        assert_eq!(NavKey::from_key("Enter"), NavKey::Other);

        let mut pager = pager_at(1);
        assert!(pager.key(NavKey::Down));
        pager.settle();
        assert!(pager.key(NavKey::Up));
        pager.settle();
        assert!(!pager.key(NavKey::Cancel));
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn six_sections_walk_to_the_end_and_stop() {
        let mut pager = Pager::new(SECTIONS);

        for _ in 0..5 {
            assert!(pager.apply(PagerAction::Next));
            assert!(pager.apply(PagerAction::Settle));
        }
        assert_eq!(pager.current(), 5);
        assert!(!pager.can_go_next());

        assert!(!pager.apply(PagerAction::Next));
        assert_eq!(pager.current(), 5);
    }

    #[test]
    fn cancel_key_closes_the_selected_project_and_frees_navigation() {
        let mut pager = Pager::new(SECTIONS);

        assert!(pager.apply(PagerAction::Select(project("web-1"))));
        assert_eq!(pager.selected().map(|p| p.id.as_str()), Some("web-1"));
        assert!(!pager.apply(PagerAction::Next));

        assert!(pager.apply(PagerAction::Key(NavKey::Cancel)));
        assert!(pager.selected().is_none());

        assert!(pager.apply(PagerAction::Next));
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn reselecting_the_same_project_is_not_a_change() {
        let mut pager = Pager::new(SECTIONS);

        assert!(pager.select(project("vid-1")));
        assert!(!pager.select(project("vid-1")));
        assert!(pager.select(project("vid-2")));
    }

    fn action_strategy() -> impl Strategy<Value = PagerAction> {
        prop_oneof![
            Just(PagerAction::Next),
            Just(PagerAction::Prev),
            (0usize..SECTIONS + 3).prop_map(PagerAction::GoTo),
            Just(PagerAction::Settle),
            (-150.0f64..150.0, 0.0f64..1_000.0)
                .prop_map(|(delta_y, at_ms)| PagerAction::Wheel { delta_y, at_ms }),
            Just(PagerAction::WheelCooled),
            Just(PagerAction::Key(NavKey::Down)),
            Just(PagerAction::Key(NavKey::Up)),
        ]
    }

    proptest! {
        #[test]
        fn index_stays_in_bounds_and_moves_by_policy(actions in prop::collection::vec(action_strategy(), 0..64)) {
            let mut pager = Pager::new(SECTIONS);

            for action in actions {
                let before = pager.clone();
                pager.apply(action.clone());

                prop_assert!(pager.current() < SECTIONS);

                let moved = pager.current() != before.current();
                if before.is_animating() && moved {
                    prop_assert!(false, "index moved while locked: {:?}", action);
                }
                if moved {
                    prop_assert!(pager.is_animating());
                    prop_assert_eq!(pager.leaving(), Some(before.current()));
                }
                if moved && !matches!(action, PagerAction::GoTo(_)) {
                    prop_assert_eq!(pager.current().abs_diff(before.current()), 1);
                }
            }
        }
    }
}
