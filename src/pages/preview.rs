use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::i18n::{self, LanguageContext};
use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct PreviewPageProps {
    pub url: AttrValue,
    pub on_back: Callback<()>,
}

/// Full-viewport frame around an external deployment. Connecting until the
/// frame reports load; there is no timeout, so a dead URL stays in the
/// connecting state until the visitor backs out, which unmounts the frame.
#[function_component(PreviewPage)]
pub fn preview_page(props: &PreviewPageProps) -> Html {
    let lang = use_context::<LanguageContext>().expect(i18n::MISSING_PROVIDER);
    let text = lang.text();
    let loading = use_state(|| true);
    let menu_open = use_state(|| false);

    // Any scroll-trigger still alive would fire against unmounted sections
    // once the frame takes over the viewport.
    use_effect_with_deps(
        |_| {
            scroll::kill_all();
            || ()
        },
        (),
    );

    let on_frame_load = {
        let loading = loading.clone();
        Callback::from(move |_: Event| {
            info!("preview frame live");
            loading.set(false);
        })
    };

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <div class="preview-shell">
            {
                if !*menu_open {
                    html! {
                        <button class="drawer-trigger" onclick={open_menu} aria-label="Menu">
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    }
                } else {
                    html! {
                        <>
                            <div class="drawer-backdrop" onclick={close_menu.clone()}></div>

                            <div class="preview-drawer">
                                <div class="drawer-header">
                                    <span class="drawer-brand">{ "MENU" }</span>
                                    <button class="drawer-close" onclick={close_menu}>{ "✕" }</button>
                                </div>

                                <div class="drawer-body">
                                    <div class="drawer-section">
                                        <div class="section-label">{ "Status" }</div>
                                        <div class="status-box">
                                            <div class={classes!("status-lamp", (!*loading).then_some("live"))}></div>
                                            <span>
                                                { if *loading { text.preview.connecting } else { text.preview.live } }
                                            </span>
                                        </div>
                                    </div>

                                    <div class="drawer-section">
                                        <div class="section-label">{ "Source" }</div>
                                        <a
                                            class="source-link"
                                            href={props.url.clone()}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            { props.url.to_string() }
                                        </a>
                                    </div>
                                </div>

                                <button class="drawer-back" onclick={back}>
                                    { "← " }{ text.preview.back }
                                </button>
                            </div>
                        </>
                    }
                }
            }

            {
                if *loading {
                    html! {
                        <div class="connect-veil">
                            <div class="veil-spinner"></div>
                            <span class="veil-brand">{ "DIZAIN PREVIEW" }</span>
                            <span class="veil-note">{ text.preview.loading_env }</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <iframe
                src={props.url.clone()}
                class="preview-frame"
                title="Project live preview"
                onload={on_frame_load}
                allowfullscreen="true"
                sandbox="allow-scripts allow-same-origin allow-forms allow-pointer-lock allow-popups"
            />

            <style>
                {r#"
                .preview-shell {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: var(--bg);
                    display: flex;
                    flex-direction: column;
                }

                .drawer-trigger {
                    position: absolute;
                    top: 8rem;
                    left: 1.5rem;
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    padding: 1.1rem;
                    background: rgba(0,0,0,0.8);
                    border: 1px solid var(--line);
                    border-radius: 50%;
                    cursor: pointer;
                    box-shadow: 0 20px 40px rgba(0,0,0,0.5);
                    backdrop-filter: blur(8px);
                    transition: background 0.3s ease;
                }

                .drawer-trigger span {
                    display: block;
                    width: 20px;
                    height: 2px;
                    background: #ffffff;
                }

                .drawer-trigger:hover {
                    background: rgba(255,255,255,0.15);
                }

                .drawer-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0,0,0,0.4);
                    backdrop-filter: blur(4px);
                    z-index: 40;
                    cursor: pointer;
                }

                .preview-drawer {
                    position: absolute;
                    top: 0;
                    left: 0;
                    height: 100%;
                    width: 100%;
                    max-width: 24rem;
                    background: color-mix(in srgb, var(--bg) 95%, transparent);
                    backdrop-filter: blur(16px);
                    border-right: 1px solid var(--line);
                    z-index: 50;
                    padding: 3rem;
                    display: flex;
                    flex-direction: column;
                    box-shadow: 0 0 80px rgba(0,0,0,0.6);
                    animation: drawer-in 0.35s cubic-bezier(0.22, 1, 0.36, 1);
                }

                @keyframes drawer-in {
                    from { transform: translateX(-100%); }
                    to { transform: translateX(0); }
                }

                .drawer-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 4rem;
                }

                .drawer-brand {
                    font-family: var(--font-display);
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    font-size: 1.2rem;
                    color: var(--ink);
                }

                .drawer-close {
                    background: none;
                    border: none;
                    color: var(--ink);
                    font-size: 1.5rem;
                    cursor: pointer;
                    padding: 0.5rem;
                    transition: transform 0.3s ease;
                }

                .drawer-close:hover {
                    transform: rotate(90deg);
                }

                .drawer-body {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }

                .section-label {
                    font-size: 0.7rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: var(--muted);
                    margin-bottom: 1rem;
                }

                .status-box {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: rgba(0,0,0,0.4);
                    border: 1px solid var(--line);
                    border-radius: 4px;
                    padding: 1rem;
                    color: var(--ink);
                    font-family: var(--font-display);
                    font-weight: 700;
                    font-size: 0.85rem;
                    letter-spacing: 0.15em;
                }

                .status-lamp {
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                    background: #eab308;
                    animation: lamp-pulse 1.2s ease infinite;
                }

                .status-lamp.live {
                    background: #22c55e;
                    box-shadow: 0 0 10px rgba(34, 197, 94, 0.5);
                    animation: none;
                }

                @keyframes lamp-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }

                .source-link {
                    display: block;
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    word-break: break-all;
                    color: color-mix(in srgb, var(--ink) 50%, transparent);
                    border-left: 2px solid var(--line);
                    padding: 0.5rem 0 0.5rem 1rem;
                    text-decoration: none;
                    transition: color 0.3s ease, border-color 0.3s ease;
                }

                .source-link:hover {
                    color: var(--ink);
                    border-left-color: var(--ink);
                }

                .drawer-back {
                    margin-top: auto;
                    width: 100%;
                    padding: 1.5rem;
                    background: var(--ink);
                    color: var(--bg);
                    border: none;
                    font-family: var(--font-display);
                    font-weight: 700;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    cursor: pointer;
                    transition: opacity 0.3s ease;
                }

                .drawer-back:hover {
                    opacity: 0.85;
                }

                .connect-veil {
                    position: absolute;
                    inset: 0;
                    z-index: 30;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: var(--bg);
                    pointer-events: none;
                }

                .veil-spinner {
                    width: 3rem;
                    height: 3rem;
                    border: 2px solid color-mix(in srgb, var(--ink) 15%, transparent);
                    border-top-color: var(--ink);
                    border-radius: 50%;
                    margin-bottom: 2rem;
                    animation: veil-spin 0.9s linear infinite;
                }

                @keyframes veil-spin {
                    to { transform: rotate(360deg); }
                }

                .veil-brand {
                    font-family: var(--font-display);
                    font-weight: 700;
                    letter-spacing: 0.3em;
                    font-size: 1.1rem;
                    color: var(--ink);
                    animation: lamp-pulse 1.5s ease infinite;
                }

                .veil-note {
                    margin-top: 0.75rem;
                    font-family: var(--font-mono);
                    font-size: 0.75rem;
                    color: var(--muted);
                }

                .preview-frame {
                    width: 100%;
                    height: 100%;
                    border: 0;
                    background: #ffffff;
                }
                "#}
            </style>
        </div>
    }
}
