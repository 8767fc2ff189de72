use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::motion::Ease;

const SHOW_AFTER_PX: f64 = 500.0;
const THROW_MS: u32 = 600;
const SNAP_PAUSE_MS: u32 = 150;
const PULL_MS: f64 = 800.0;

/// Grappling-hook stages: the rope is thrown, snaps taut, then hauls the
/// page back up.
#[derive(Clone, Copy, PartialEq, Eq)]
enum HookStage {
    Idle,
    Throwing,
    Taut,
}

/// Eased scroll ramp back to the top, driven by animation frames. Runs to
/// completion once started; `on_done` fires after the final frame.
fn pull_to_top(on_done: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        on_done();
        return;
    };
    let start_y = window.scroll_y().unwrap_or(0.0);
    if start_y <= 0.0 {
        on_done();
        return;
    }

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let scheduler = frame.clone();
    let started = Rc::new(Cell::new(f64::NAN));
    let mut on_done = Some(on_done);
    let raf_window = window.clone();

    *scheduler.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if started.get().is_nan() {
            started.set(now);
        }
        let t = ((now - started.get()) / PULL_MS).min(1.0);
        let eased = Ease::CubicInOut.apply(t);
        raf_window.scroll_to_with_x_and_y(0.0, start_y * (1.0 - eased));

        if t < 1.0 {
            let _ = raf_window
                .request_animation_frame(frame.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        } else {
            if let Some(done) = on_done.take() {
                done();
            }
            frame.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));

    let _ = window
        .request_animation_frame(scheduler.borrow().as_ref().unwrap().as_ref().unchecked_ref());
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);
    let stage = use_state(|| HookStage::Idle);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_for_cb = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let y = window_for_cb.scroll_y().unwrap_or(0.0);
                    visible.set(y > SHOW_AFTER_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let trigger_hook = {
        let stage = stage.clone();
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            if *stage != HookStage::Idle {
                return;
            }
            stage.set(HookStage::Throwing);

            let stage = stage.clone();
            let visible = visible.clone();
            Timeout::new(THROW_MS, move || {
                stage.set(HookStage::Taut);

                let stage = stage.clone();
                let visible = visible.clone();
                Timeout::new(SNAP_PAUSE_MS, move || {
                    pull_to_top(move || {
                        stage.set(HookStage::Idle);
                        visible.set(false);
                    });
                })
                .forget();
            })
            .forget();
        })
    };

    let active = *stage != HookStage::Idle;

    html! {
        <>
            {
                if active {
                    html! {
                        <div class="hook-rig" aria-hidden="true">
                            <svg viewBox="0 0 30 100" preserveAspectRatio="none">
                                <path
                                    class={classes!("hook-rope", (*stage == HookStage::Taut).then_some("taut"))}
                                    d={ if *stage == HookStage::Taut { "M 15 100 Q 15 50 15 0" } else { "M 15 100 Q 45 60 15 0" } }
                                    fill="none"
                                />
                                <path
                                    class={classes!("hook-claw", (*stage == HookStage::Taut).then_some("taut"))}
                                    d="M 10 1 L 15 0 L 20 1 M 15 0 L 15 3"
                                    fill="none"
                                />
                            </svg>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if *visible || active {
                    html! {
                        <button
                            class={classes!("back-to-top", active.then_some("active"))}
                            onclick={trigger_hook}
                            disabled={active}
                            data-clickable="true"
                            aria-label="Back to top"
                        >
                            { "↑" }
                        </button>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .hook-rig {
                    position: fixed;
                    top: 0;
                    right: 45px;
                    width: 30px;
                    height: calc(100vh - 60px);
                    pointer-events: none;
                    z-index: 20;
                }

                .hook-rig svg {
                    width: 100%;
                    height: 100%;
                    overflow: visible;
                }

                .hook-rope {
                    stroke: var(--ink);
                    stroke-width: 0.5;
                    opacity: 0;
                    animation: rope-appear 0.6s ease-out forwards;
                }

                .hook-rope.taut {
                    opacity: 1;
                    animation: none;
                }

                @keyframes rope-appear {
                    from { opacity: 0; stroke-dashoffset: 200; }
                    to { opacity: 1; stroke-dashoffset: 0; }
                }

                .hook-claw {
                    stroke: var(--ink);
                    stroke-width: 1;
                    transform: translateY(100%);
                    animation: claw-rise 0.6s cubic-bezier(0.34, 1.56, 0.64, 1) forwards;
                }

                .hook-claw.taut {
                    transform: translateY(0);
                    animation: claw-settle 0.2s ease;
                }

                @keyframes claw-rise {
                    from { transform: translateY(100%); }
                    to { transform: translateY(0); }
                }

                @keyframes claw-settle {
                    0% { transform: translateY(0); }
                    50% { transform: translateY(2%); }
                    100% { transform: translateY(0); }
                }

                .back-to-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 30;
                    width: 3.25rem;
                    height: 3.25rem;
                    font-size: 1.1rem;
                    background: var(--ink);
                    color: var(--bg);
                    border: 1px solid var(--line);
                    cursor: pointer;
                    box-shadow: 0 20px 40px rgba(0,0,0,0.4);
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .back-to-top:hover {
                    transform: translateY(-2px);
                }

                .back-to-top.active {
                    transform: scale(0.9);
                    cursor: default;
                }
                "#}
            </style>
        </>
    }
}
