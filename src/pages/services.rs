use yew::prelude::*;

use crate::i18n::{self, LanguageContext};
use crate::scroll;

const GLYPHS: [&str; 4] = ["▣", "✎", "▦", "↯"];

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    let lang = use_context::<LanguageContext>().expect(i18n::MISSING_PROVIDER);
    let text = lang.text();
    let grid = use_node_ref();

    {
        let grid = grid.clone();
        use_effect_with_deps(
            move |_| {
                let id = scroll::reveal_on_entry(grid);
                move || scroll::kill(id)
            },
            (),
        );
    }

    html! {
        <div class="services-page">
            <div class="services-glow"></div>

            <div class="services-page-inner">
                <header class="services-page-header">
                    <h1>{ text.nav.services }</h1>
                    <p>{ text.services.expertise }</p>
                </header>

                <div ref={grid} class="capability-grid">
                    {
                        text.services.items.iter().enumerate().map(|(index, item)| {
                            let detail = text.services.details.get(index).copied().unwrap_or("");
                            html! {
                                <div class="capability-cell" style={format!("transition-delay: {}ms;", index * 100)}>
                                    <div class="cell-top">
                                        <span class="cell-glyph">{ GLYPHS.get(index).copied().unwrap_or("▣") }</span>
                                        <span class="cell-index">{ format!("0{}", index + 1) }</span>
                                    </div>
                                    <div>
                                        <h3 class="cell-title">{ *item }</h3>
                                        <p class="cell-detail">{ detail }</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="services-cta">
                    <h3>{ text.services.cta }</h3>
                    <div class="cta-plumb"></div>
                </div>
            </div>

            <style>
                {r#"
                .services-page {
                    position: relative;
                    min-height: 100vh;
                    background: var(--bg-deep);
                    padding: 8rem 0 6rem;
                    overflow: hidden;
                }

                .services-glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 600px;
                    height: 600px;
                    background: var(--bg-raised);
                    border-radius: 50%;
                    filter: blur(120px);
                    opacity: 0.2;
                    pointer-events: none;
                }

                .services-page-inner {
                    position: relative;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    z-index: 10;
                }

                .services-page-header {
                    margin-bottom: 6rem;
                    border-bottom: 1px solid var(--line);
                    padding-bottom: 3rem;
                }

                .services-page-header h1 {
                    font-family: var(--font-display);
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 700;
                    text-transform: uppercase;
                    color: var(--ink);
                    margin: 0 0 1.5rem;
                }

                .services-page-header p {
                    color: var(--muted);
                    font-size: 1.25rem;
                    max-width: 42rem;
                    margin: 0;
                }

                .capability-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1px;
                    background: var(--line);
                    border: 1px solid var(--line);
                }

                .capability-cell {
                    background: var(--bg-raised);
                    padding: 3rem;
                    min-height: 300px;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.5s ease, transform 0.5s ease, background 0.5s ease;
                }

                .capability-grid.visible .capability-cell {
                    opacity: 1;
                    transform: translateY(0);
                }

                .capability-cell:hover {
                    background: var(--bg);
                }

                .cell-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 2rem;
                }

                .cell-glyph {
                    font-size: 1.75rem;
                    color: var(--muted);
                    transition: color 0.3s ease;
                }

                .capability-cell:hover .cell-glyph {
                    color: var(--accent);
                }

                .cell-index {
                    font-family: var(--font-mono);
                    font-size: 0.85rem;
                    color: color-mix(in srgb, var(--muted) 60%, transparent);
                }

                .cell-title {
                    font-family: var(--font-display);
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: var(--ink);
                    margin: 0 0 1rem;
                    transition: transform 0.3s ease;
                }

                .capability-cell:hover .cell-title {
                    transform: translateX(0.5rem);
                }

                .cell-detail {
                    color: var(--muted);
                    line-height: 1.7;
                    border-left: 2px solid var(--line);
                    padding-left: 1rem;
                    margin: 0;
                    transition: border-color 0.3s ease;
                }

                .capability-cell:hover .cell-detail {
                    border-left-color: var(--accent);
                }

                .services-cta {
                    margin-top: 6rem;
                    text-align: center;
                }

                .services-cta h3 {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: var(--ink);
                    margin: 0 0 1.5rem;
                }

                .cta-plumb {
                    width: 4px;
                    height: 3rem;
                    background: var(--accent);
                    margin: 0 auto;
                }

                @media (max-width: 768px) {
                    .capability-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
