use yew::prelude::*;

use crate::components::tech_specs::TechSpecs;
use crate::i18n::{self, LanguageContext};
use crate::scroll;

#[function_component(AgencyPage)]
pub fn agency_page() -> Html {
    let lang = use_context::<LanguageContext>().expect(i18n::MISSING_PROVIDER);
    let text = lang.text();
    let values = use_node_ref();

    {
        let values = values.clone();
        use_effect_with_deps(
            move |_| {
                let id = scroll::reveal_on_entry(values);
                move || scroll::kill(id)
            },
            (),
        );
    }

    html! {
        <div class="agency-page">
            <div class="agency-inner">
                <header class="agency-header">
                    <h1>{ text.nav.agency }</h1>
                    <div class="agency-rule"></div>

                    <div class="agency-manifesto">
                        <div>
                            <h2>{ text.why_us.title }</h2>
                            <p>{ text.why_us.desc }</p>
                        </div>
                        <blockquote class="agency-quote">
                            { format!("\u{201c}{}\u{201d}", text.why_us.quote) }
                        </blockquote>
                    </div>
                </header>

                <div ref={values} class="agency-values">
                    {
                        text.why_us.items.iter().enumerate().map(|(index, item)| html! {
                            <div class="agency-value" style={format!("transition-delay: {}ms;", index * 100)}>
                                <span class="value-ordinal">{ format!("0{}", index + 1) }</span>
                                <h3>{ item.title }</h3>
                                <p>{ item.desc }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <TechSpecs />

            <style>
                {r#"
                .agency-page {
                    min-height: 100vh;
                    background: var(--bg);
                    padding-top: 8rem;
                    overflow: hidden;
                }

                .agency-inner {
                    max-width: 1280px;
                    margin: 0 auto 6rem;
                    padding: 0 1.5rem;
                }

                .agency-header h1 {
                    font-family: var(--font-display);
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 700;
                    text-transform: uppercase;
                    line-height: 0.9;
                    color: var(--ink);
                    margin: 0 0 2rem;
                }

                .agency-rule {
                    width: 100%;
                    height: 1px;
                    background: linear-gradient(to right, color-mix(in srgb, var(--ink) 50%, transparent), transparent);
                    margin-bottom: 3rem;
                }

                .agency-manifesto {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }

                .agency-manifesto h2 {
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: var(--ink);
                    margin: 0 0 1.5rem;
                }

                .agency-manifesto p {
                    color: var(--muted);
                    font-size: 1.1rem;
                    line-height: 1.7;
                    margin: 0;
                }

                .agency-quote {
                    border-left: 1px solid var(--line);
                    padding-left: 2rem;
                    margin: 0;
                    display: flex;
                    align-items: center;
                    font-size: 1.4rem;
                    font-style: italic;
                    color: color-mix(in srgb, var(--ink) 80%, transparent);
                    line-height: 1.6;
                }

                .agency-values {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-top: 6rem;
                }

                .agency-value {
                    border-top: 1px solid color-mix(in srgb, var(--ink) 20%, transparent);
                    padding-top: 1.5rem;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }

                .agency-values.visible .agency-value {
                    opacity: 1;
                    transform: translateY(0);
                }

                .value-ordinal {
                    display: block;
                    font-size: 0.7rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: var(--muted);
                    margin-bottom: 1rem;
                }

                .agency-value h3 {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: var(--ink);
                    margin: 0 0 0.75rem;
                }

                .agency-value p {
                    color: var(--muted);
                    font-size: 0.95rem;
                    line-height: 1.7;
                    margin: 0;
                }

                @media (max-width: 768px) {
                    .agency-manifesto,
                    .agency-values {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
