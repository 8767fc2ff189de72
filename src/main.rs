use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

mod config;
mod i18n;
mod motion;
mod projects;
mod scroll;
mod theme;
mod view;

mod components {
    pub mod back_to_top;
    pub mod contact;
    pub mod cursor;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod portfolio;
    pub mod services;
    pub mod tech_specs;
    pub mod why_us;
}

mod pages {
    pub mod agency;
    pub mod contact;
    pub mod preview;
    pub mod services;
    pub mod works;
}

use components::{
    back_to_top::BackToTop, contact::ContactSection, cursor::CursorFollower, footer::Footer,
    hero::Hero, navbar::Navbar, portfolio::Portfolio, services::ServicesSection,
    tech_specs::TechSpecs, why_us::WhyUs,
};
use i18n::{Language, LanguageContext};
use pages::{
    agency::AgencyPage, contact::ContactPage, preview::PreviewPage, services::ServicesPage,
    works::WorksPage,
};
use theme::{Theme, ThemeContext};
use view::{Router, View};

fn switch(
    router: &Router,
    on_navigate: &Callback<&'static str>,
    on_preview: &Callback<String>,
    on_close_preview: &Callback<()>,
) -> Html {
    match router.view() {
        View::Preview => {
            info!("rendering preview view");
            match router.preview_url() {
                Some(url) => html! {
                    <PreviewPage url={url.to_string()} on_back={on_close_preview.clone()} />
                },
                None => html! {},
            }
        }
        View::Works => {
            info!("rendering works view");
            html! { <WorksPage on_preview={on_preview.clone()} /> }
        }
        View::Services => {
            info!("rendering services view");
            html! { <ServicesPage /> }
        }
        View::Agency => {
            info!("rendering agency view");
            html! { <AgencyPage /> }
        }
        View::Contact => {
            info!("rendering contact view");
            html! { <ContactPage /> }
        }
        View::Home => {
            info!("rendering home view");
            html! {
                <>
                    <Hero on_navigate={on_navigate.clone()} />
                    <Portfolio
                        on_preview={on_preview.clone()}
                        on_navigate={on_navigate.clone()}
                    />
                    <ServicesSection />
                    <div id="agency">
                        <WhyUs />
                        <TechSpecs />
                    </div>
                    <ContactSection />
                </>
            }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let router = use_state(Router::new);
    let language = use_state(|| Language::Sl);
    let theme = use_state(|| Theme::Minimalist);
    let mobile = use_state(|| view::is_mobile(scroll::viewport_width()));

    // Mobile/desktop classification tracks window resizes.
    {
        let mobile = mobile.clone();
        use_effect_with_deps(
            move |_| {
                let window = window().unwrap();
                let window_for_cb = window.clone();
                let resize_callback = Closure::wrap(Box::new(move || {
                    let width = window_for_cb
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    mobile.set(view::is_mobile(width));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // The theme lives on the document root so static rules can key off it.
    {
        let current = *theme;
        use_effect_with_deps(
            move |_| {
                theme::apply(current);
                || ()
            },
            *theme,
        );
    }

    // Mirror the active locale onto the root element.
    {
        let current = *language;
        use_effect_with_deps(
            move |_| {
                if let Some(root) = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("lang", current.code());
                }
                || ()
            },
            *language,
        );
    }

    // Per-view side effects: the preview frame locks background scroll, and
    // the teardown kills every scroll trigger so none outlive their view.
    {
        let current_view = router.view();
        use_effect_with_deps(
            move |_| {
                if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                    let _ = body
                        .style()
                        .set_property("overflow", view::body_overflow(current_view));
                }
                move || {
                    let live = scroll::active_count();
                    if live > 0 {
                        info!("view change: killing {live} scroll triggers");
                    }
                    scroll::kill_all();
                }
            },
            router.view(),
        );
    }

    let on_navigate = {
        let router = router.clone();
        Callback::from(move |target: &'static str| {
            let mut next = (*router).clone();
            next.navigate(target);
            info!("navigate -> {}", next.view());
            router.set(next);
            if let Some(win) = window() {
                win.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let on_preview = {
        let router = router.clone();
        Callback::from(move |url: String| {
            let mut next = (*router).clone();
            info!("opening preview: {url}");
            next.open_preview(url);
            router.set(next);
        })
    };

    let on_close_preview = {
        let router = router.clone();
        Callback::from(move |_| {
            let mut next = (*router).clone();
            next.close_preview();
            info!("closing preview -> {}", next.view());
            router.set(next);
        })
    };

    let set_language = {
        let language = language.clone();
        Callback::from(move |lang| language.set(lang))
    };

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |next| theme.set(next))
    };

    let lang_ctx = LanguageContext {
        language: *language,
        set: set_language,
    };
    let theme_ctx = ThemeContext {
        theme: *theme,
        set: set_theme,
    };

    let in_preview = router.view() == View::Preview;

    html! {
        <ContextProvider<LanguageContext> context={lang_ctx}>
        <ContextProvider<ThemeContext> context={theme_ctx}>
            <div class="site">
                <div class="noise-overlay"></div>

                {
                    if !*mobile && !in_preview {
                        html! { <CursorFollower /> }
                    } else {
                        html! {}
                    }
                }

                {
                    if !in_preview {
                        html! {
                            <Navbar
                                current_view={router.view()}
                                on_navigate={on_navigate.clone()}
                            />
                        }
                    } else {
                        html! {}
                    }
                }

                <main class={classes!("site-main", in_preview.then_some("preview-active"))}>
                    { switch(&router, &on_navigate, &on_preview, &on_close_preview) }
                </main>

                {
                    if !in_preview {
                        html! {
                            <>
                                <BackToTop />
                                <Footer />
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <style>{ GLOBAL_CSS }</style>
        </ContextProvider<ThemeContext>>
        </ContextProvider<LanguageContext>>
    }
}

const GLOBAL_CSS: &str = r#"
:root,
.theme-minimalist {
    --bg: #121214;
    --bg-raised: #1a1a1e;
    --bg-deep: #0a0a0c;
    --ink: #f4f4f2;
    --muted: #9b9b97;
    --line: rgba(255, 255, 255, 0.1);
    --accent: #ffffff;
    --font-display: 'Montserrat', 'Helvetica Neue', Arial, sans-serif;
    --font-body: 'Inter', 'Helvetica Neue', Arial, sans-serif;
    --font-mono: 'JetBrains Mono', 'Courier New', monospace;
}

.theme-neon {
    --bg: #05090e;
    --bg-raised: #0a1420;
    --bg-deep: #030609;
    --ink: #e8fffb;
    --muted: #5f7d78;
    --line: rgba(0, 255, 213, 0.15);
    --accent: #00ffd5;
}

.theme-arcade {
    --bg: #0e0518;
    --bg-raised: #1a0b2b;
    --bg-deep: #070210;
    --ink: #f7ecff;
    --muted: #8d7ba6;
    --line: rgba(255, 46, 136, 0.18);
    --accent: #ff2e88;
}

.theme-nature {
    --bg: #0c120c;
    --bg-raised: #152015;
    --bg-deep: #060a06;
    --ink: #eef5ea;
    --muted: #7f917a;
    --line: rgba(156, 203, 134, 0.16);
    --accent: #9ccb86;
}

.theme-glass {
    --bg: #0f1218;
    --bg-raised: #171c26;
    --bg-deep: #0a0d12;
    --ink: #f0f4fa;
    --muted: #8d99ad;
    --line: rgba(188, 212, 255, 0.16);
    --accent: #bcd4ff;
}

* {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--ink);
    font-family: var(--font-body);
    -webkit-font-smoothing: antialiased;
}

::selection {
    background: var(--ink);
    color: var(--bg);
}

.site {
    position: relative;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    background: var(--bg);
    transition: background 0.6s ease;
}

.noise-overlay {
    position: fixed;
    inset: 0;
    pointer-events: none;
    opacity: 0.04;
    z-index: 50;
    background-image: url('https://grainy-gradients.vercel.app/noise.svg');
    mix-blend-mode: overlay;
}

.site-main {
    position: relative;
    z-index: 10;
    width: 100%;
    flex-grow: 1;
    display: flex;
    flex-direction: column;
}

.site-main.preview-active {
    height: 100vh;
    overflow: hidden;
}
"#;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("starting dizain-web");
    yew::Renderer::<App>::new().render();
}
