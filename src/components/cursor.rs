use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::motion::{Spring, SpringPoint};

const DOT_HALF: f64 = 8.0;
const RING_HALF: f64 = 24.0;
const STIFFNESS: f64 = 200.0;
const MASS: f64 = 0.5;
// Frames longer than this (tab switch, debugger pause) step as one slow frame
// instead of launching the ring across the screen.
const MAX_DT: f64 = 1.0 / 30.0;

/// Two offset markers trailing the pointer: the dot snaps to it, the ring
/// follows on a critically damped spring. Mounted only on wide pointers and
/// never while the preview frame is up; the app root owns that decision.
#[function_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let dot = use_node_ref();
    let ring = use_node_ref();

    {
        let dot = dot.clone();
        let ring = ring.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                // Markers start parked off-screen until the first move event.
                let target = Rc::new(Cell::new((-100.0f64, -100.0f64)));
                let hovering = Rc::new(Cell::new(false));

                let move_target = target.clone();
                let move_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    move_target.set((f64::from(e.client_x()), f64::from(e.client_y())));
                }) as Box<dyn FnMut(MouseEvent)>);
                window
                    .add_event_listener_with_callback(
                        "mousemove",
                        move_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Re-classified on every mouseover: anchors, buttons and
                // anything tagged data-clickable count as actionable.
                let over_hovering = hovering.clone();
                let over_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let actionable = e
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                        .and_then(|el| el.closest("a, button, [data-clickable]").ok().flatten())
                        .is_some();
                    over_hovering.set(actionable);
                }) as Box<dyn FnMut(MouseEvent)>);
                window
                    .add_event_listener_with_callback(
                        "mouseover",
                        over_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                let alive = Rc::new(Cell::new(true));
                let raf_id = Rc::new(Cell::new(0));
                let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));
                let scheduler = frame.clone();

                let spring = Spring::critically_damped(STIFFNESS, MASS);
                let mut ring_pos = SpringPoint::at(-100.0, -100.0);
                let mut last_stamp = f64::NAN;

                let loop_alive = alive.clone();
                let loop_raf_id = raf_id.clone();
                let loop_window = window.clone();
                let loop_target = target;
                let loop_hovering = hovering;
                *scheduler.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                    if !loop_alive.get() {
                        return;
                    }
                    let dt = if last_stamp.is_nan() {
                        1.0 / 60.0
                    } else {
                        ((now - last_stamp) / 1000.0).clamp(0.001, MAX_DT)
                    };
                    last_stamp = now;

                    let (tx, ty) = loop_target.get();
                    let hover = loop_hovering.get();
                    ring_pos.step(&spring, tx, ty, dt);

                    if let Some(el) = dot.cast::<web_sys::HtmlElement>() {
                        let scale = if hover { 0.5 } else { 1.0 };
                        let _ = el.set_attribute(
                            "style",
                            &format!(
                                "transform: translate({:.1}px, {:.1}px) scale({scale});",
                                tx - DOT_HALF,
                                ty - DOT_HALF,
                            ),
                        );
                    }
                    if let Some(el) = ring.cast::<web_sys::HtmlElement>() {
                        let (scale, opacity) = if hover { (2.0, 0.5) } else { (1.0, 1.0) };
                        let _ = el.set_attribute(
                            "style",
                            &format!(
                                "transform: translate({:.1}px, {:.1}px) scale({scale}); opacity: {opacity};",
                                ring_pos.x - RING_HALF,
                                ring_pos.y - RING_HALF,
                            ),
                        );
                    }

                    if let Ok(id) = loop_window.request_animation_frame(
                        frame.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    ) {
                        loop_raf_id.set(id);
                    }
                })
                    as Box<dyn FnMut(f64)>));

                if let Ok(id) = window.request_animation_frame(
                    scheduler.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                ) {
                    raf_id.set(id);
                }

                move || {
                    alive.set(false);
                    let _ = window.cancel_animation_frame(raf_id.get());
                    let _ = window.remove_event_listener_with_callback(
                        "mousemove",
                        move_callback.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "mouseover",
                        over_callback.as_ref().unchecked_ref(),
                    );
                    scheduler.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <>
            <div ref={dot} class="cursor-dot"></div>
            <div ref={ring} class="cursor-ring"></div>

            <style>
                {r#"
                .cursor-dot {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 16px;
                    height: 16px;
                    background: #ffffff;
                    border-radius: 50%;
                    pointer-events: none;
                    z-index: 100;
                    mix-blend-mode: difference;
                }

                .cursor-ring {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 48px;
                    height: 48px;
                    border: 1px solid #ffffff;
                    border-radius: 50%;
                    pointer-events: none;
                    z-index: 99;
                    mix-blend-mode: difference;
                }
                "#}
            </style>
        </>
    }
}
