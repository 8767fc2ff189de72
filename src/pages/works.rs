use web_sys::MouseEvent;
use yew::prelude::*;

use crate::i18n::{self, LanguageContext};
use crate::projects::PROJECTS;
use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct WorksPageProps {
    pub on_preview: Callback<String>,
}

#[function_component(WorksPage)]
pub fn works_page(props: &WorksPageProps) -> Html {
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
        <div class="works-page">
            <div class="works-backwash"></div>

            <div class="works-inner">
                <header class="works-header">
                    <h1>{ text.portfolio.works }</h1>
                    <div class="header-rule"></div>
                    <p>{ text.why_us.desc }</p>
                </header>

                <div ref={grid} class="works-grid">
                    {
                        PROJECTS.iter().enumerate().map(|(index, project)| {
                            let open = {
                                let on_preview = props.on_preview.clone();
                                let link = project.link;
                                Callback::from(move |_: MouseEvent| {
                                    if let Some(link) = link {
                                        on_preview.emit(link.to_string());
                                    }
                                })
                            };
                            let previewable = project.link.is_some();
                            html! {
                                <div
                                    key={project.id}
                                    class={classes!("work-tile", previewable.then_some("previewable"))}
                                    style={format!("transition-delay: {}ms;", index * 100)}
                                    data-clickable={previewable.then_some("true")}
                                    onclick={open}
                                >
                                    <div class="tile-frame">
                                        <img src={project.image} alt={project.title} loading="lazy" />
                                        <div class="tile-scrim"></div>
                                        <div class="tile-hover">
                                            <span class="hover-badge">
                                                { if previewable { "◉" } else { "↗" } }
                                            </span>
                                        </div>
                                    </div>

                                    <div class="tile-meta">
                                        <div>
                                            <span class="tile-category">{ project.category }</span>
                                            <h3 class="tile-title">{ project.title }</h3>
                                        </div>
                                        <span class="tile-index">{ format!("0{}", index + 1) }</span>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .works-page {
                    position: relative;
                    min-height: 100vh;
                    background: var(--bg);
                    padding: 8rem 0 6rem;
                    overflow: hidden;
                }

                .works-backwash {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 500px;
                    background: linear-gradient(to bottom, var(--bg-raised), transparent);
                    pointer-events: none;
                }

                .works-inner {
                    position: relative;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    z-index: 10;
                }

                .works-header {
                    margin-bottom: 6rem;
                }

                .works-header h1 {
                    font-family: var(--font-display);
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 700;
                    text-transform: uppercase;
                    color: var(--ink);
                    margin: 0 0 1.5rem;
                }

                .header-rule {
                    width: 6rem;
                    height: 4px;
                    background: var(--accent);
                    margin-bottom: 2rem;
                }

                .works-header p {
                    color: var(--muted);
                    font-size: 1.25rem;
                    line-height: 1.7;
                    max-width: 42rem;
                    margin: 0;
                }

                .works-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 4rem;
                }

                .work-tile {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .works-grid.visible .work-tile {
                    opacity: 1;
                    transform: translateY(0);
                }

                .work-tile.previewable {
                    cursor: pointer;
                }

                .tile-frame {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    border: 1px solid var(--line);
                    background: var(--bg-raised);
                    overflow: hidden;
                    margin-bottom: 1.5rem;
                }

                .tile-frame img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.8;
                    transition: transform 0.7s ease, opacity 0.3s ease;
                }

                .work-tile:hover .tile-frame img {
                    transform: scale(1.05);
                    opacity: 1;
                }

                .tile-scrim {
                    position: absolute;
                    inset: 0;
                    background: rgba(0,0,0,0.2);
                    transition: background 0.3s ease;
                }

                .work-tile:hover .tile-scrim {
                    background: transparent;
                }

                .tile-hover {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .work-tile:hover .tile-hover {
                    opacity: 1;
                }

                .hover-badge {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    background: var(--ink);
                    color: var(--bg);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                    transform: scale(0.5);
                    transition: transform 0.3s ease;
                    box-shadow: 0 20px 40px rgba(0,0,0,0.4);
                }

                .work-tile:hover .hover-badge {
                    transform: scale(1);
                }

                .tile-meta {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                }

                .tile-category {
                    display: block;
                    font-size: 0.7rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: var(--muted);
                    margin-bottom: 0.5rem;
                }

                .tile-title {
                    font-family: var(--font-display);
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: var(--ink);
                    margin: 0;
                    transition: color 0.3s ease;
                }

                .work-tile:hover .tile-title {
                    color: var(--muted);
                }

                .tile-index {
                    font-family: var(--font-mono);
                    color: color-mix(in srgb, var(--muted) 60%, transparent);
                }

                @media (max-width: 768px) {
                    .works-grid {
                        grid-template-columns: 1fr;
                        gap: 2.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
