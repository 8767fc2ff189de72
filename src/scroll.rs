use std::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::NodeRef;

use crate::motion::Ease;

/// Viewport-intersection pair that frames a tracked element's progress.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Trigger {
    /// 0 when the element's top enters at the viewport bottom, 1 when its
    /// center reaches the viewport center. Entrance animations.
    EnterToCenter,
    /// 0 when the element's top reaches the viewport top, 1 once the element
    /// has scrolled fully past it. Parallax on full-height sections.
    TopOut,
}

/// Normalized scroll progress for an element at `top` (bounding-rect top in
/// viewport coordinates) with the given height. Clamped to [0, 1]; 0 before
/// the start trigger, 1 past the end trigger, monotonic in between.
pub fn progress(top: f64, height: f64, viewport: f64, trigger: Trigger) -> f64 {
    let raw = match trigger {
        Trigger::EnterToCenter => {
            let span = (viewport + height) / 2.0;
            if span <= 0.0 {
                return 1.0;
            }
            (viewport - top) / span
        }
        Trigger::TopOut => {
            if height <= 0.0 {
                return 1.0;
            }
            -top / height
        }
    };
    raw.clamp(0.0, 1.0)
}

/// One output channel derived from progress: a domain segment of [0, 1]
/// mapped onto an output range through an easing. Progress outside the
/// domain clamps to the nearer endpoint.
#[derive(Clone, Copy, Debug)]
pub struct Channel {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub ease: Ease,
}

impl Channel {
    pub const fn linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            ease: Ease::Linear,
        }
    }

    pub const fn eased(domain: (f64, f64), range: (f64, f64), ease: Ease) -> Self {
        Self {
            domain,
            range,
            ease,
        }
    }

    pub fn map(&self, progress: f64) -> f64 {
        let (d0, d1) = self.domain;
        let t = if (d1 - d0).abs() < f64::EPSILON {
            if progress >= d1 {
                1.0
            } else {
                0.0
            }
        } else {
            ((progress - d0) / (d1 - d0)).clamp(0.0, 1.0)
        };
        let t = self.ease.apply(t);
        let (r0, r1) = self.range;
        r0 + (r1 - r0) * t
    }
}

struct TriggerEntry {
    id: u32,
    listener: Closure<dyn FnMut()>,
}

thread_local! {
    static TRIGGERS: RefCell<Vec<TriggerEntry>> = RefCell::new(Vec::new());
    static NEXT_ID: Cell<u32> = Cell::new(1);
}

/// Registers `on_frame` against window scroll and resize, firing it once
/// immediately so elements already in view settle without a first scroll.
/// Returns a handle for `kill`. Every live trigger is also torn down in bulk
/// by `kill_all` when the active view changes.
pub fn watch(mut on_frame: impl FnMut() + 'static) -> u32 {
    on_frame();
    let listener = Closure::wrap(Box::new(on_frame) as Box<dyn FnMut()>);
    if let Some(win) = window() {
        let _ = win.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        let _ = win.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
    }
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id.wrapping_add(1));
        id
    });
    TRIGGERS.with(|t| t.borrow_mut().push(TriggerEntry { id, listener }));
    id
}

pub fn kill(id: u32) {
    TRIGGERS.with(|t| {
        let mut triggers = t.borrow_mut();
        if let Some(pos) = triggers.iter().position(|entry| entry.id == id) {
            detach(&triggers.remove(pos));
        }
    });
}

/// Detaches every live trigger. Called on view transitions so no handler
/// outlives the elements it animates.
pub fn kill_all() {
    TRIGGERS.with(|t| {
        for entry in t.borrow_mut().drain(..) {
            detach(&entry);
        }
    });
}

pub fn active_count() -> usize {
    TRIGGERS.with(|t| t.borrow().len())
}

fn detach(entry: &TriggerEntry) {
    if let Some(win) = window() {
        let _ =
            win.remove_event_listener_with_callback("scroll", entry.listener.as_ref().unchecked_ref());
        let _ =
            win.remove_event_listener_with_callback("resize", entry.listener.as_ref().unchecked_ref());
    }
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Entrance reveal: tags the node with a `visible` class once its top
/// crosses 88% of the viewport height. The class is never removed, so the
/// transition plays once; the stylesheet owns the actual animation.
pub fn reveal_on_entry(node: NodeRef) -> u32 {
    watch(move || {
        if let Some(el) = node.cast::<web_sys::Element>() {
            let rect = el.get_bounding_client_rect();
            if rect.top() < viewport_height() * 0.88 {
                let _ = el.class_list().add_1("visible");
            }
        }
    })
}

/// Progress for a rendered node, measured off its bounding rect.
pub fn node_progress(node: &NodeRef, trigger: Trigger) -> Option<f64> {
    let el = node.cast::<web_sys::Element>()?;
    let rect = el.get_bounding_client_rect();
    Some(progress(rect.top(), rect.height(), viewport_height(), trigger))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 900.0;
    const HEIGHT: f64 = 600.0;

    #[test]
    fn progress_clamps_before_and_after_the_triggers() {
        // Element below the fold: not started.
        assert_eq!(
            progress(VIEWPORT + 400.0, HEIGHT, VIEWPORT, Trigger::EnterToCenter),
            0.0
        );
        // Element top exactly at the viewport bottom: start trigger.
        assert_eq!(
            progress(VIEWPORT, HEIGHT, VIEWPORT, Trigger::EnterToCenter),
            0.0
        );
        // Element center at viewport center: end trigger.
        let centered_top = (VIEWPORT - HEIGHT) / 2.0;
        assert!(
            (progress(centered_top, HEIGHT, VIEWPORT, Trigger::EnterToCenter) - 1.0).abs() < 1e-9
        );
        // Scrolled well past: still 1.
        assert_eq!(
            progress(-2000.0, HEIGHT, VIEWPORT, Trigger::EnterToCenter),
            1.0
        );
    }

    #[test]
    fn progress_is_monotonic_as_the_page_scrolls() {
        for trigger in [Trigger::EnterToCenter, Trigger::TopOut] {
            let mut last = -1.0;
            // Scrolling down moves the rect top upward through the viewport.
            let mut top = VIEWPORT + 200.0;
            while top > -(HEIGHT + 200.0) {
                let p = progress(top, HEIGHT, VIEWPORT, trigger);
                assert!(p >= last, "progress regressed at top={top} for {trigger:?}");
                assert!((0.0..=1.0).contains(&p));
                last = p;
                top -= 7.0;
            }
            assert_eq!(last, 1.0);
        }
    }

    #[test]
    fn top_out_tracks_the_exit_span() {
        assert_eq!(progress(0.0, HEIGHT, VIEWPORT, Trigger::TopOut), 0.0);
        assert_eq!(progress(-HEIGHT / 2.0, HEIGHT, VIEWPORT, Trigger::TopOut), 0.5);
        assert_eq!(progress(-HEIGHT, HEIGHT, VIEWPORT, Trigger::TopOut), 1.0);
    }

    #[test]
    fn channels_map_their_domain_onto_their_range() {
        // The portfolio image channels.
        let slide = Channel::linear((0.0, 1.0), (150.0, 0.0));
        let fade = Channel::linear((0.0, 0.6), (0.2, 1.0));
        let scale = Channel::linear((0.0, 1.0), (0.95, 1.0));

        assert_eq!(slide.map(0.0), 150.0);
        assert_eq!(slide.map(1.0), 0.0);
        assert_eq!(slide.map(0.5), 75.0);

        assert_eq!(fade.map(0.0), 0.2);
        assert!((fade.map(0.3) - 0.6).abs() < 1e-9);
        assert_eq!(fade.map(0.6), 1.0);
        // Past the channel's domain the output stays pinned.
        assert_eq!(fade.map(0.9), 1.0);

        assert_eq!(scale.map(0.0), 0.95);
        assert_eq!(scale.map(1.0), 1.0);
    }

    #[test]
    fn degenerate_domains_snap_instead_of_dividing_by_zero() {
        let step = Channel::linear((0.5, 0.5), (0.0, 10.0));
        assert_eq!(step.map(0.2), 0.0);
        assert_eq!(step.map(0.7), 10.0);
    }

    #[test]
    fn eased_channels_keep_their_endpoints() {
        let eased = Channel::eased((0.0, 1.0), (0.0, 100.0), Ease::CubicInOut);
        assert_eq!(eased.map(0.0), 0.0);
        assert_eq!(eased.map(1.0), 100.0);
        assert!(eased.map(0.25) < 25.0);
        assert!(eased.map(0.75) > 75.0);
    }
}
