use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::i18n::{self, LanguageContext};
use crate::motion::Ease;
use crate::scroll::{self, Channel, Trigger};

const TITLE: &str = "DIZAIN";
const LETTER_STAGGER_MS: u32 = 90;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let lang = use_context::<LanguageContext>().expect(i18n::MISSING_PROVIDER);
    let text = lang.text();
    let section = use_node_ref();
    let inner = use_node_ref();
    let revealed = use_state(|| 0usize);

    // Letters flip in one by one after mount.
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    for count in 1..=TITLE.chars().count() {
                        TimeoutFuture::new(LETTER_STAGGER_MS).await;
                        revealed.set(count);
                    }
                });
                || ()
            },
            (),
        );
    }

    // Parallax: as the hero scrolls out, the content drifts down and fades.
    // The style is written straight to the node each tick.
    {
        let section = section.clone();
        let inner = inner.clone();
        use_effect_with_deps(
            move |_| {
                let drift = Channel::linear((0.0, 1.0), (0.0, 50.0));
                let fade = Channel::eased((0.0, 0.5), (1.0, 0.0), Ease::CubicOut);
                let id = scroll::watch(move || {
                    if let Some(p) = scroll::node_progress(&section, Trigger::TopOut) {
                        if let Some(el) = inner.cast::<web_sys::HtmlElement>() {
                            let _ = el.set_attribute(
                                "style",
                                &format!(
                                    "transform: translateY({:.2}%); opacity: {:.3};",
                                    drift.map(p),
                                    fade.map(p)
                                ),
                            );
                        }
                    }
                });
                move || scroll::kill(id)
            },
            (),
        );
    }

    let on_cta = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit("works");
        })
    };

    let on_scroll_cue = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("portfolio"))
        {
            let mut options = web_sys::ScrollIntoViewOptions::new();
            options.behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    html! {
        <section ref={section} class="hero">
            <div class="hero-backdrop">
                <div class="hero-spotlight"></div>
            </div>

            <div ref={inner} class="hero-content">
                <div class="hero-rule left"></div>
                <div class="hero-rule right"></div>

                <h1 class="hero-title" aria-label={TITLE}>
                    {
                        TITLE.chars().enumerate().map(|(i, ch)| {
                            let class = classes!(
                                "hero-letter",
                                (i < *revealed).then_some("revealed")
                            );
                            html! { <span {class} aria-hidden="true">{ ch }</span> }
                        }).collect::<Html>()
                    }
                </h1>

                <p class="hero-subtitle">{ text.hero.subtitle }</p>

                <a href="#" class="hero-cta" data-clickable="true" onclick={on_cta}>
                    { text.hero.cta }
                </a>

                <a href="#portfolio" class="hero-scroll-cue" onclick={on_scroll_cue}>
                    <span>{ text.hero.scroll }</span>
                    <div class="cue-line">
                        <div class="cue-pulse"></div>
                    </div>
                </a>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: var(--bg);
                }

                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    background: linear-gradient(to bottom, transparent, rgba(0,0,0,0.2) 60%, rgba(0,0,0,0.8));
                }

                .hero-spotlight {
                    position: absolute;
                    top: -50%;
                    left: -50%;
                    width: 200%;
                    height: 200%;
                    background: radial-gradient(circle at center, color-mix(in srgb, var(--accent) 8%, transparent) 0%, transparent 50%);
                    pointer-events: none;
                    animation: spotlight-drift 20s linear infinite;
                }

                @keyframes spotlight-drift {
                    0% { transform: translate(-10%, -10%); }
                    50% { transform: translate(10%, 10%); }
                    100% { transform: translate(-10%, -10%); }
                }

                .hero-content {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 0 1.5rem;
                    will-change: transform, opacity;
                }

                .hero-rule {
                    position: absolute;
                    top: -50vh;
                    bottom: -50vh;
                    width: 1px;
                    background: var(--line);
                }

                .hero-rule.left { left: 1.5rem; }
                .hero-rule.right { right: 1.5rem; }

                .hero-title {
                    display: flex;
                    font-family: var(--font-display);
                    font-size: 14vw;
                    font-weight: 700;
                    line-height: 0.8;
                    letter-spacing: -0.04em;
                    margin: 0;
                    user-select: none;
                    background: linear-gradient(to bottom, var(--ink), var(--muted));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    perspective: 1000px;
                }

                .hero-letter {
                    display: inline-block;
                    opacity: 0;
                    transform: translateY(100px) rotateX(-90deg);
                    transform-origin: bottom;
                    transition: transform 1.2s cubic-bezier(0.22, 1.2, 0.36, 1), opacity 0.8s ease;
                }

                .hero-letter.revealed {
                    opacity: 1;
                    transform: translateY(0) rotateX(0);
                }

                .hero-subtitle {
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid var(--line);
                    color: var(--muted);
                    font-size: 1rem;
                    font-weight: 300;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    text-align: center;
                    max-width: 36rem;
                }

                .hero-cta {
                    margin-top: 2.5rem;
                    padding: 1rem 2.5rem;
                    border: 1px solid var(--line);
                    color: var(--ink);
                    font-size: 0.7rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    text-decoration: none;
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .hero-cta:hover {
                    background: var(--accent);
                    color: var(--bg);
                }

                .hero-scroll-cue {
                    position: absolute;
                    bottom: -18vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    color: color-mix(in srgb, var(--ink) 50%, transparent);
                    text-decoration: none;
                    font-size: 0.6rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    transition: color 0.3s ease;
                }

                .hero-scroll-cue:hover {
                    color: var(--ink);
                }

                .cue-line {
                    position: relative;
                    width: 1px;
                    height: 6rem;
                    background: linear-gradient(to bottom, color-mix(in srgb, var(--ink) 50%, transparent), transparent);
                    overflow: hidden;
                }

                .cue-pulse {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 50%;
                    background: var(--ink);
                    animation: cue-slide 1.5s linear infinite;
                }

                @keyframes cue-slide {
                    from { top: -100%; }
                    to { top: 100%; }
                }

                @media (max-width: 768px) {
                    .hero-title { font-size: 18vw; }
                    .hero-subtitle { font-size: 0.8rem; }
                }
                "#}
            </style>
        </section>
    }
}
