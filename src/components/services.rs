use yew::prelude::*;

use crate::i18n::{self, LanguageContext};
use crate::scroll;

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
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
        <section id="services" ref={section} class="services">
            <div class="services-inner">
                <div class="services-header">
                    <div>
                        <span class="services-kicker">{ text.services.expertise }</span>
                        <h2 class="services-title">{ text.services.title }</h2>
                    </div>
                    <span class="services-est">{ "EST. 2024" }</span>
                </div>

                <div class="services-list">
                    {
                        text.services.items.iter().enumerate().map(|(index, item)| html! {
                            <div class="service-row" style={format!("transition-delay: {}ms;", index * 100)}>
                                <div class="row-main">
                                    <span class="row-index">{ format!("0{}", index + 1) }</span>
                                    <h3 class="row-name">{ *item }</h3>
                                </div>
                                <span class="row-arrow">{ "↗" }</span>
                                <div class="row-sheen"></div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .services {
                    position: relative;
                    padding: 8rem 0;
                    background: var(--bg-deep);
                    overflow: hidden;
                }

                .services-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .services-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    border-bottom: 1px solid var(--line);
                    padding-bottom: 2rem;
                    margin-bottom: 6rem;
                }

                .services-kicker {
                    display: block;
                    font-size: 0.7rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: var(--muted);
                    margin-bottom: 1rem;
                }

                .services-title {
                    font-family: var(--font-display);
                    font-size: 3rem;
                    font-weight: 700;
                    color: var(--ink);
                    margin: 0;
                }

                .services-est {
                    color: var(--muted);
                    font-size: 0.85rem;
                }

                .service-row {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 4rem 2rem;
                    border-bottom: 1px solid var(--line);
                    cursor: pointer;
                    overflow: hidden;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease, background 0.5s ease;
                }

                .services.visible .service-row {
                    opacity: 1;
                    transform: translateY(0);
                }

                .service-row:hover {
                    background: color-mix(in srgb, var(--bg-raised) 30%, transparent);
                }

                .row-main {
                    display: flex;
                    align-items: baseline;
                    gap: 2rem;
                }

                .row-index {
                    font-family: var(--font-mono);
                    font-size: 0.9rem;
                    color: var(--muted);
                    transition: color 0.5s ease;
                }

                .service-row:hover .row-index {
                    color: var(--ink);
                }

                .row-name {
                    font-family: var(--font-display);
                    font-size: clamp(2rem, 5vw, 4.5rem);
                    font-weight: 700;
                    color: var(--muted);
                    margin: 0;
                    transition: color 0.5s ease, transform 0.5s ease;
                }

                .service-row:hover .row-name {
                    color: var(--ink);
                    transform: translateX(1rem);
                }

                .row-arrow {
                    font-size: 1.5rem;
                    color: var(--ink);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .service-row:hover .row-arrow {
                    opacity: 1;
                }

                .row-sheen {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, transparent, color-mix(in srgb, var(--ink) 2%, transparent), transparent);
                    transform: translateX(-100%);
                    transition: transform 1s ease-in-out;
                    pointer-events: none;
                }

                .service-row:hover .row-sheen {
                    transform: translateX(100%);
                }
                "#}
            </style>
        </section>
    }
}
