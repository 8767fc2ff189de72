use yew::prelude::*;

use crate::i18n::{self, LanguageContext};
use crate::scroll;

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    let lang = use_context::<LanguageContext>().expect(i18n::MISSING_PROVIDER);
    let text = lang.text();
    let section = use_node_ref();

    {
        let section = section.clone();
        use_effect_with_deps(
            move |_| {
                let id = scroll::reveal_on_entry(section);
                move || scroll::kill(id)
            },
            (),
        );
    }

    html! {
        <section id="why-us" ref={section} class="why-us">
            <div class="why-us-inner">
                <div class="why-us-header">
                    <h2 class="why-us-title">
                        { "The" }<br />{ "DIZAIN" }<br />{ text.why_us.title }
                    </h2>
                    <div class="title-rule"></div>
                    <p class="why-us-desc">{ text.why_us.desc }</p>
                </div>

                <div class="value-grid">
                    {
                        text.why_us.items.iter().enumerate().map(|(index, item)| {
                            let wide = index == text.why_us.items.len() - 1;
                            html! {
                                <div
                                    class={classes!("value-tile", wide.then_some("wide"))}
                                    style={format!("transition-delay: {}ms;", index * 100)}
                                >
                                    <h3 class="value-title">{ item.title }</h3>
                                    <p class="value-desc">{ item.desc }</p>
                                    <span class="value-index">{ format!("0{}", index + 1) }</span>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .why-us {
                    padding: 8rem 0;
                    background: var(--bg-raised);
                    border-top: 1px solid var(--line);
                }

                .why-us-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 3rem;
                }

                .why-us-header {
                    position: sticky;
                    top: 8rem;
                    align-self: start;
                }

                .why-us-title {
                    font-family: var(--font-display);
                    font-size: clamp(2.5rem, 4vw, 3.75rem);
                    font-weight: 700;
                    text-transform: uppercase;
                    line-height: 1.1;
                    color: var(--ink);
                    margin: 0 0 2rem;
                }

                .title-rule {
                    width: 5rem;
                    height: 4px;
                    background: var(--accent);
                    margin-bottom: 2rem;
                }

                .why-us-desc {
                    color: var(--muted);
                    font-size: 1.1rem;
                    line-height: 1.7;
                }

                .value-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1px;
                    background: var(--line);
                    border: 1px solid var(--line);
                }

                .value-tile {
                    position: relative;
                    background: var(--bg-raised);
                    padding: 3rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    aspect-ratio: 1;
                    opacity: 0;
                    transform: scale(0.97);
                    transition: opacity 0.5s ease, transform 0.5s ease, background 0.5s ease;
                }

                .why-us.visible .value-tile {
                    opacity: 1;
                    transform: scale(1);
                }

                .value-tile:hover {
                    background: var(--bg-deep);
                }

                .value-tile.wide {
                    grid-column: span 2;
                    aspect-ratio: 2 / 1;
                }

                .value-title {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: var(--ink);
                    margin: 0 0 1rem;
                }

                .value-desc {
                    color: var(--muted);
                    line-height: 1.7;
                    max-width: 24rem;
                    margin: 0;
                }

                .value-index {
                    align-self: flex-end;
                    font-family: var(--font-display);
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: color-mix(in srgb, var(--ink) 5%, transparent);
                }

                @media (max-width: 768px) {
                    .why-us-inner {
                        grid-template-columns: 1fr;
                    }

                    .why-us-header {
                        position: static;
                    }

                    .value-grid {
                        grid-template-columns: 1fr;
                    }

                    .value-tile.wide {
                        grid-column: auto;
                        aspect-ratio: auto;
                    }
                }
                "#}
            </style>
        </section>
    }
}
