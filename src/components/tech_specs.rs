use gloo_timers::future::TimeoutFuture;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::i18n::{self, LanguageContext};
use crate::motion::Ease;
use crate::scroll;

struct Bar {
    name: &'static str,
    score: i32,
    color: RGBColor,
}

const BARS: [Bar; 3] = [
    Bar {
        name: "Others",
        score: 65,
        color: RGBColor(51, 51, 51),
    },
    Bar {
        name: "Avg",
        score: 80,
        color: RGBColor(85, 85, 85),
    },
    Bar {
        name: "DIZAIN",
        score: 99,
        color: RGBColor(255, 255, 255),
    },
];

const GROW_FRAMES: u32 = 45;

const AXIS_COLOR: RGBColor = RGBColor(60, 60, 60);
const LABEL_COLOR: RGBColor = RGBColor(140, 140, 140);
const PANEL_COLOR: RGBColor = RGBColor(12, 12, 14);

#[function_component(TechSpecs)]
pub fn tech_specs() -> Html {
    let lang = use_context::<LanguageContext>().expect(i18n::MISSING_PROVIDER);
    let text = lang.text();
    let section = use_node_ref();
    let canvas_ref = use_node_ref();
    let grow = use_state(|| 0.0f64);

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

    // Bars grow over ~3/4 of a second after mount, eased so the tips land
    // softly instead of snapping.
    {
        let grow = grow.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    for frame in 1..=GROW_FRAMES {
                        TimeoutFuture::new(16).await;
                        grow.set(Ease::CubicOut.apply(f64::from(frame) / f64::from(GROW_FRAMES)));
                    }
                });
                || ()
            },
            (),
        );
    }

    // Redraw the histogram whenever the growth factor advances.
    {
        let canvas_ref = canvas_ref.clone();
        let factor = *grow;
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let context = canvas
                        .get_context("2d")
                        .unwrap()
                        .unwrap()
                        .dyn_into::<web_sys::CanvasRenderingContext2d>()
                        .unwrap();
                    context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

                    canvas.set_width(600);
                    canvas.set_height(360);

                    let backend = CanvasBackend::with_canvas_object(canvas).unwrap();
                    let root = backend.into_drawing_area();
                    root.fill(&PANEL_COLOR).unwrap();

                    let mut chart = ChartBuilder::on(&root)
                        .margin(16)
                        .x_label_area_size(28)
                        .y_label_area_size(80)
                        .build_cartesian_2d(0i32..110i32, 0i32..(BARS.len() as i32))
                        .unwrap();

                    chart
                        .configure_mesh()
                        .disable_x_mesh()
                        .disable_y_mesh()
                        .y_labels(BARS.len())
                        .y_label_formatter(&|y| {
                            BARS.get(*y as usize)
                                .map(|bar| bar.name.to_string())
                                .unwrap_or_default()
                        })
                        .label_style(("sans-serif", 13).into_font().color(&LABEL_COLOR))
                        .axis_style(&AXIS_COLOR)
                        .draw()
                        .unwrap();

                    chart
                        .draw_series(BARS.iter().enumerate().map(|(i, bar)| {
                            let tip = (f64::from(bar.score) * factor).round() as i32;
                            Rectangle::new([(0, i as i32), (tip, i as i32 + 1)], bar.color.filled())
                        }))
                        .unwrap();
                }
                || ()
            },
            factor,
        );
    }

    let tiles: [(&'static str, &'static str); 4] = [
        ("99", text.tech_specs.seo),
        ("< 0.8s", text.tech_specs.load),
        ("100%", text.tech_specs.resp),
        ("A++", text.tech_specs.sec),
    ];

    html! {
        <section ref={section} class="tech-specs">
            <div class="specs-inner">
                <div class="specs-copy">
                    <h2 class="specs-title">{ text.tech_specs.title }</h2>
                    <p class="specs-desc">{ text.tech_specs.desc }</p>

                    <div class="stat-grid">
                        {
                            tiles.iter().map(|(value, label)| html! {
                                <div class="stat-tile">
                                    <div class="stat-value">{ *value }</div>
                                    <div class="stat-label">{ *label }</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="specs-chart">
                    <h3 class="chart-title">{ text.tech_specs.chart_title }</h3>
                    <canvas ref={canvas_ref} width="600" height="360" />
                </div>
            </div>

            <style>
                {r#"
                .tech-specs {
                    padding: 8rem 0;
                    background: var(--bg-deep);
                    border-top: 1px solid var(--line);
                    border-bottom: 1px solid var(--line);
                }

                .specs-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .specs-title {
                    font-family: var(--font-display);
                    font-size: 2.5rem;
                    color: var(--ink);
                    margin: 0 0 1.5rem;
                    opacity: 0;
                    transition: opacity 0.8s ease;
                }

                .tech-specs.visible .specs-title {
                    opacity: 1;
                }

                .specs-desc {
                    color: var(--muted);
                    line-height: 1.7;
                    max-width: 28rem;
                    margin: 0 0 3rem;
                }

                .stat-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .stat-tile {
                    padding: 1.5rem;
                    border: 1px solid var(--line);
                    background: color-mix(in srgb, var(--bg-raised) 50%, transparent);
                }

                .stat-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: var(--ink);
                    margin-bottom: 0.5rem;
                }

                .stat-label {
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: var(--muted);
                }

                .specs-chart {
                    padding: 2rem;
                    border: 1px solid var(--line);
                    border-radius: 0.75rem;
                    background: color-mix(in srgb, var(--bg-raised) 20%, transparent);
                }

                .chart-title {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: var(--muted);
                    margin: 0 0 2rem;
                }

                .specs-chart canvas {
                    max-width: 100%;
                }

                @media (max-width: 768px) {
                    .specs-inner {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
