//! Navbar State Machine
//!
//! Scroll and toggle rules for the top navigation bar, written as pure
//! transitions over explicit state so they can be tested without a page.
//!
//! The bar stays pinned (`fixed-top`) until the user scrolls down past
//! `SCROLL_LIMIT` with the menu closed. The scroll-to-top button appears
//! once the page is past the same limit, and never while the menu is open.

/// Scroll offset above which the bar unpins and the to-top button appears.
pub const SCROLL_LIMIT: f64 = 150.0;

/// Viewport width below which the menu collapses after following a link.
pub const MOBILE_LIMIT: f64 = 992.0;

/// Navbar state carried between events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavState {
    /// Last seen scroll offset, clamped at zero.
    pub last_scroll_top: f64,
    /// Whether the mobile menu is expanded.
    pub open: bool,
}

/// Class changes produced by a scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEffect {
    /// Bar keeps its `fixed-top` class.
    pub bar_pinned: bool,
    /// To-top button gets `fixed-bottom`.
    pub to_top_anchored: bool,
    /// To-top button gets `d-none`.
    pub to_top_hidden: bool,
}

/// Class changes produced by the menu toggler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleEffect {
    pub open: bool,
    pub to_top_hidden: bool,
}

/// Class changes produced by following a nav link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkClickEffect {
    /// Collapse loses its `show` class and the open state clears.
    pub close_menu: bool,
}

/// Scroll handler: unpin the bar when moving down past the limit with the
/// menu closed, and recompute the to-top button classes.
pub fn on_scroll(state: NavState, scroll_y: f64) -> (NavState, ScrollEffect) {
    let scrolling_down = scroll_y > state.last_scroll_top && scroll_y > SCROLL_LIMIT;

    let effect = ScrollEffect {
        bar_pinned: !(scrolling_down && !state.open),
        to_top_anchored: scroll_y > SCROLL_LIMIT && !state.open,
        to_top_hidden: scroll_y < SCROLL_LIMIT || state.open,
    };

    let next = NavState {
        last_scroll_top: scroll_y.max(0.0),
        ..state
    };
    (next, effect)
}

/// Toggler handler: flip the open state and recompute button visibility.
pub fn on_toggle(state: NavState, scroll_y: f64) -> (NavState, ToggleEffect) {
    let open = !state.open;
    let effect = ToggleEffect {
        open,
        to_top_hidden: open || scroll_y < SCROLL_LIMIT,
    };
    (NavState { open, ..state }, effect)
}

/// Link handler: on narrow viewports the menu closes behind the navigation.
pub fn on_link_click(state: NavState, viewport_width: f64) -> (NavState, LinkClickEffect) {
    if viewport_width < MOBILE_LIMIT {
        let next = NavState {
            open: false,
            ..state
        };
        (next, LinkClickEffect { close_menu: true })
    } else {
        (state, LinkClickEffect { close_menu: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_down_past_limit_unpins_and_shows_button() {
        let (state, effect) = on_scroll(NavState::default(), 200.0);

        assert!(!effect.bar_pinned);
        assert!(effect.to_top_anchored);
        assert!(!effect.to_top_hidden);
        assert_eq!(state.last_scroll_top, 200.0);
    }

    #[test]
    fn scrolling_back_up_repins_the_bar() {
        let (state, _) = on_scroll(NavState::default(), 200.0);
        let (_, effect) = on_scroll(state, 100.0);

        assert!(effect.bar_pinned);
        assert!(effect.to_top_hidden);
    }

    #[test]
    fn bar_stays_pinned_below_the_limit() {
        let (_, effect) = on_scroll(NavState::default(), 100.0);

        assert!(effect.bar_pinned);
        assert!(!effect.to_top_anchored);
        assert!(effect.to_top_hidden);
    }

    #[test]
    fn open_menu_keeps_the_bar_pinned_and_hides_the_button() {
        let state = NavState {
            last_scroll_top: 0.0,
            open: true,
        };
        let (_, effect) = on_scroll(state, 200.0);

        assert!(effect.bar_pinned);
        assert!(!effect.to_top_anchored);
        assert!(effect.to_top_hidden);
    }

    #[test]
    fn last_scroll_top_never_goes_negative() {
        let (state, _) = on_scroll(NavState::default(), -30.0);
        assert_eq!(state.last_scroll_top, 0.0);
    }

    #[test]
    fn double_toggle_restores_button_visibility() {
        let (state, _) = on_scroll(NavState::default(), 200.0);

        let (state, opened) = on_toggle(state, 200.0);
        assert!(opened.open);
        assert!(opened.to_top_hidden);

        let (state, closed) = on_toggle(state, 200.0);
        assert!(!closed.open);
        assert!(!closed.to_top_hidden);
        assert!(!state.open);
    }

    #[test]
    fn toggle_below_the_limit_keeps_button_hidden_either_way() {
        let (state, opened) = on_toggle(NavState::default(), 0.0);
        assert!(opened.to_top_hidden);

        let (_, closed) = on_toggle(state, 0.0);
        assert!(closed.to_top_hidden);
    }

    #[test]
    fn link_click_on_narrow_viewport_closes_the_menu() {
        let state = NavState {
            last_scroll_top: 0.0,
            open: true,
        };
        let (next, effect) = on_link_click(state, 500.0);

        assert!(effect.close_menu);
        assert!(!next.open);
    }

    #[test]
    fn link_click_on_wide_viewport_is_a_no_op() {
        let state = NavState {
            last_scroll_top: 0.0,
            open: true,
        };
        let (next, effect) = on_link_click(state, 1280.0);

        assert!(!effect.close_menu);
        assert!(next.open);
    }
}
