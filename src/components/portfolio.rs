use web_sys::MouseEvent;
use yew::prelude::*;

use crate::i18n::{self, LanguageContext};
use crate::projects::{Project, PROJECTS};
use crate::scroll::{self, Channel, Trigger};

/// Derived animation state for one card at one scroll tick. All three
/// channels read the same progress value; even-indexed cards slide in from
/// the right, odd-indexed from the left.
pub struct CardFrame {
    pub offset: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl CardFrame {
    const SLIDE: Channel = Channel::linear((0.0, 1.0), (150.0, 0.0));
    const FADE: Channel = Channel::linear((0.0, 0.6), (0.2, 1.0));
    const SCALE: Channel = Channel::linear((0.0, 1.0), (0.95, 1.0));

    pub fn at(progress: f64, even: bool) -> Self {
        let direction = if even { 1.0 } else { -1.0 };
        Self {
            offset: direction * Self::SLIDE.map(progress),
            opacity: Self::FADE.map(progress),
            scale: Self::SCALE.map(progress),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateX({:.2}px) scale({:.4}); opacity: {:.3};",
            self.offset, self.opacity, self.scale
        )
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    project: Project,
    index: usize,
    on_preview: Callback<String>,
}

#[function_component(ProjectCard)]
fn project_card(props: &CardProps) -> Html {
    let lang = use_context::<LanguageContext>().expect(i18n::MISSING_PROVIDER);
    let text = lang.text();
    let container = use_node_ref();
    let image_wrap = use_node_ref();
    let even = props.index % 2 == 0;

    {
        let container = container.clone();
        let image_wrap = image_wrap.clone();
        use_effect_with_deps(
            move |_| {
                let id = scroll::watch(move || {
                    if let Some(p) = scroll::node_progress(&container, Trigger::EnterToCenter) {
                        if let Some(el) = image_wrap.cast::<web_sys::HtmlElement>() {
                            let _ = el.set_attribute("style", &CardFrame::at(p, even).style());
                        }
                    }
                });
                move || scroll::kill(id)
            },
            (),
        );
    }

    let open = {
        let on_preview = props.on_preview.clone();
        let link = props.project.link;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(link) = link {
                on_preview.emit(link.to_string());
            }
        })
    };

    let project = &props.project;

    html! {
        <div ref={container} class={classes!("project-card", (!even).then_some("reversed"))}>
            <div ref={image_wrap} class="card-visual">
                <div class="card-image-frame">
                    <img src={project.image} alt={project.title} loading="lazy" />
                    <span class="card-number">{ format!("0{}", props.index + 1) }</span>
                </div>
                <div class="card-specs">
                    { project.specs.iter().map(|spec| html! {
                        <span class="spec-tag">{ *spec }</span>
                    }).collect::<Html>() }
                </div>
            </div>

            <div class="card-info">
                <span class="card-category">{ project.category }</span>
                <h3 class="card-title">{ project.title }</h3>
                <p class="card-description">{ project.description }</p>
                {
                    if project.link.is_some() {
                        html! {
                            <a href="#" class="card-view" data-clickable="true" onclick={open}>
                                <span class="view-rule"></span>
                                <span>{ text.portfolio.view_project }</span>
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub on_preview: Callback<String>,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let lang = use_context::<LanguageContext>().expect(i18n::MISSING_PROVIDER);
    let text = lang.text();

    let view_all = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit("works");
        })
    };

    html! {
        <section id="portfolio" class="portfolio">
            <div class="portfolio-inner">
                <h2 class="portfolio-heading">
                    { text.portfolio.featured }
                    <br />
                    <span class="heading-ghost">{ text.portfolio.works }</span>
                </h2>

                <div class="portfolio-list">
                    {
                        PROJECTS.iter().enumerate().map(|(index, project)| html! {
                            <ProjectCard
                                key={project.id}
                                project={*project}
                                {index}
                                on_preview={props.on_preview.clone()}
                            />
                        }).collect::<Html>()
                    }
                </div>

                <a href="#" class="portfolio-view-all" data-clickable="true" onclick={view_all}>
                    { text.portfolio.view_all }
                </a>
            </div>

            <style>
                {r#"
                .portfolio {
                    position: relative;
                    background: var(--bg);
                    padding: 6rem 0;
                    overflow: hidden;
                }

                .portfolio-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .portfolio-heading {
                    font-family: var(--font-display);
                    font-size: clamp(2.5rem, 8vw, 6rem);
                    font-weight: 700;
                    text-transform: uppercase;
                    line-height: 1;
                    color: var(--ink);
                    margin: 0 0 8rem;
                }

                .heading-ghost {
                    color: transparent;
                    -webkit-text-stroke: 1px var(--muted);
                }

                .portfolio-list {
                    display: flex;
                    flex-direction: column;
                    gap: 10rem;
                }

                .project-card {
                    display: flex;
                    gap: 3rem;
                    align-items: center;
                }

                .project-card.reversed {
                    flex-direction: row-reverse;
                }

                .card-visual {
                    width: 66%;
                    will-change: transform, opacity;
                }

                .card-image-frame {
                    position: relative;
                    height: 70vh;
                    border: 1px solid var(--line);
                    background: var(--bg-raised);
                    overflow: hidden;
                    box-shadow: 0 30px 60px rgba(0,0,0,0.4);
                }

                .card-image-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.9;
                    transition: transform 0.7s ease, opacity 0.7s ease;
                }

                .card-image-frame:hover img {
                    transform: scale(1.05);
                    opacity: 1;
                }

                .card-number {
                    position: absolute;
                    top: -1rem;
                    left: 1rem;
                    font-family: var(--font-display);
                    font-size: 8rem;
                    font-weight: 700;
                    color: var(--ink);
                    mix-blend-mode: difference;
                    pointer-events: none;
                    line-height: 1;
                }

                .reversed .card-number {
                    left: auto;
                    right: 1rem;
                }

                .card-specs {
                    display: flex;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }

                .reversed .card-specs {
                    justify-content: flex-end;
                }

                .spec-tag {
                    font-size: 0.6rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    border: 1px solid var(--line);
                    padding: 0.25rem 0.5rem;
                    color: color-mix(in srgb, var(--ink) 60%, transparent);
                }

                .card-info {
                    width: 33%;
                    display: flex;
                    flex-direction: column;
                }

                .reversed .card-info {
                    align-items: flex-end;
                    text-align: right;
                }

                .card-category {
                    font-size: 0.7rem;
                    font-weight: 700;
                    color: var(--muted);
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    margin-bottom: 1rem;
                }

                .card-title {
                    font-family: var(--font-display);
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: var(--ink);
                    margin: 0 0 1.5rem;
                }

                .card-description {
                    color: var(--muted);
                    font-size: 1.1rem;
                    line-height: 1.7;
                    max-width: 24rem;
                    margin: 0 0 2rem;
                }

                .card-view {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    text-decoration: none;
                    color: var(--ink);
                    font-size: 0.7rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }

                .reversed .card-view {
                    flex-direction: row-reverse;
                }

                .view-rule {
                    width: 3rem;
                    height: 1px;
                    background: color-mix(in srgb, var(--ink) 30%, transparent);
                    transition: width 0.3s ease;
                }

                .card-view:hover .view-rule {
                    width: 6rem;
                }

                .portfolio-view-all {
                    display: inline-block;
                    margin-top: 8rem;
                    padding: 1.25rem 3rem;
                    border: 1px solid var(--line);
                    color: var(--ink);
                    font-size: 0.7rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    text-decoration: none;
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .portfolio-view-all:hover {
                    background: var(--accent);
                    color: var(--bg);
                }

                @media (max-width: 768px) {
                    .project-card,
                    .project-card.reversed {
                        flex-direction: column;
                    }

                    .card-visual,
                    .card-info {
                        width: 100%;
                    }

                    .card-image-frame {
                        height: 50vh;
                    }

                    .card-title {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_start_offset_and_dimmed() {
        let even = CardFrame::at(0.0, true);
        assert_eq!(even.offset, 150.0);
        assert_eq!(even.opacity, 0.2);
        assert_eq!(even.scale, 0.95);

        let odd = CardFrame::at(0.0, false);
        assert_eq!(odd.offset, -150.0);
    }

    #[test]
    fn cards_settle_centered_and_opaque() {
        for even in [true, false] {
            let frame = CardFrame::at(1.0, even);
            assert_eq!(frame.offset, 0.0);
            assert_eq!(frame.opacity, 1.0);
            assert_eq!(frame.scale, 1.0);
        }
    }

    #[test]
    fn opacity_saturates_at_sixty_percent_progress() {
        let frame = CardFrame::at(0.6, true);
        assert_eq!(frame.opacity, 1.0);
        assert!(frame.offset > 0.0);
    }

    #[test]
    fn frame_style_is_a_single_declaration_list() {
        let style = CardFrame::at(0.5, true).style();
        assert!(style.contains("translateX("));
        assert!(style.contains("scale("));
        assert!(style.contains("opacity:"));
    }
}
