use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::i18n::{self, Language, LanguageContext};
use crate::view::View;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current_view: View,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let lang = use_context::<LanguageContext>().expect(i18n::MISSING_PROVIDER);
    let text = lang.text();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_for_cb = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let y = window_for_cb.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(y > 50.0);
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go = {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |target: &'static str| {
            menu_open.set(false);
            on_navigate.emit(target);
        })
    };

    let nav_links: [(&'static str, &'static str); 4] = [
        ("works", text.nav.work),
        ("services", text.nav.services),
        ("agency", text.nav.agency),
        ("contact", text.nav.contact),
    ];

    let link_row = |mobile: bool| -> Html {
        nav_links
            .iter()
            .map(|(target, label)| {
                let go = go.clone();
                let target = *target;
                let active = props.current_view == View::from_target(target);
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    go.emit(target);
                });
                let class = classes!(
                    if mobile { "mobile-nav-link" } else { "nav-link" },
                    active.then_some("active")
                );
                html! {
                    <a href="#" {onclick} {class}>{ *label }</a>
                }
            })
            .collect::<Html>()
    };

    let lang_switch = {
        let set = lang.set.clone();
        let active = lang.language;
        Language::ALL
            .iter()
            .map(|candidate| {
                let candidate = *candidate;
                let set = set.clone();
                let onclick = Callback::from(move |_| set.emit(candidate));
                let label = match candidate {
                    Language::Sl => "SLO",
                    Language::En => "ENG",
                };
                let class = classes!("lang-button", (active == candidate).then_some("active"));
                html! { <button {onclick} {class}>{ label }</button> }
            })
            .collect::<Html>()
    };

    let home = {
        let go = go.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            go.emit("home");
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-wordmark" onclick={home}>{"DIZAIN"}</a>

                <div class="nav-links">
                    { link_row(false) }
                    <div class="lang-switch">{ lang_switch.clone() }</div>
                </div>

                <button
                    class={classes!("burger-menu", (*menu_open).then_some("open"))}
                    onclick={toggle_menu}
                    aria-label="Menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { link_row(true) }
                            <div class="lang-switch">{ lang_switch }</div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 40;
                    padding: 2rem 0;
                    border-bottom: 1px solid transparent;
                    transition: padding 0.5s ease, background 0.5s ease, border-color 0.5s ease;
                }

                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: color-mix(in srgb, var(--bg) 80%, transparent);
                    backdrop-filter: blur(12px);
                    border-bottom-color: var(--line);
                }

                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-wordmark {
                    font-family: var(--font-display);
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    color: var(--ink);
                    text-decoration: none;
                    font-size: 0.9rem;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }

                .nav-link {
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-weight: 700;
                    color: var(--muted);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover,
                .nav-link.active {
                    color: var(--ink);
                }

                .lang-switch {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-left: 1px solid var(--line);
                    padding-left: 1.5rem;
                }

                .lang-button {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.65rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    color: var(--muted);
                    padding: 0.25rem;
                    transition: color 0.3s ease;
                }

                .lang-button.active {
                    color: var(--accent);
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                    z-index: 50;
                }

                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    background: var(--ink);
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }

                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }

                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }

                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    background: var(--bg);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    z-index: 45;
                }

                .mobile-nav-link {
                    font-family: var(--font-display);
                    font-size: 1.6rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: var(--ink);
                    text-decoration: none;
                }

                .mobile-nav-link:hover,
                .mobile-nav-link.active {
                    color: var(--muted);
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }

                    .burger-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
