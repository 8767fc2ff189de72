use yew::prelude::*;

use crate::theme::{self, ThemeContext};

#[function_component(Footer)]
pub fn footer() -> Html {
    let theme_ctx = use_context::<ThemeContext>().expect(theme::MISSING_PROVIDER);

    let rotate_theme = {
        let set = theme_ctx.set.clone();
        let current = theme_ctx.theme;
        Callback::from(move |_| set.emit(current.next()))
    };

    let socials = [
        ("Instagram", "IG"),
        ("Twitter", "TW"),
        ("LinkedIn", "IN"),
        ("GitHub", "GH"),
    ];

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <span>{ "DIZAIN" }</span>
                    </div>
                    <p class="footer-copyright">{ "© 2024 Lignotie d.o.o. All rights reserved." }</p>
                </div>

                <div class="footer-side">
                    <div class="footer-socials">
                        {
                            socials.iter().map(|(name, short)| html! {
                                <a href="#" title={*name} data-clickable="true">{ *short }</a>
                            }).collect::<Html>()
                        }
                    </div>
                    <button
                        class="theme-cycle"
                        data-clickable="true"
                        onclick={rotate_theme}
                        title="Cycle visual theme"
                    >
                        { "◑ " }{ theme_ctx.theme.label() }
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: var(--bg-deep);
                    padding: 3rem 0;
                    border-top: 1px solid var(--line);
                }

                .footer-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                }

                .footer-logo {
                    display: inline-block;
                    border: 2px solid var(--ink);
                    padding: 0.4rem 0.8rem;
                    margin-bottom: 1.5rem;
                }

                .footer-logo span {
                    font-family: var(--font-display);
                    font-weight: 700;
                    font-size: 1.25rem;
                    letter-spacing: 0.2em;
                    color: var(--ink);
                }

                .footer-copyright {
                    color: var(--muted);
                    font-size: 0.85rem;
                    margin: 0;
                }

                .footer-side {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                    gap: 1.25rem;
                }

                .footer-socials {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-socials a {
                    color: var(--muted);
                    text-decoration: none;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    transition: color 0.3s ease;
                }

                .footer-socials a:hover {
                    color: var(--ink);
                }

                .theme-cycle {
                    background: none;
                    border: 1px solid var(--line);
                    color: var(--muted);
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                    transition: color 0.3s ease, border-color 0.3s ease;
                }

                .theme-cycle:hover {
                    color: var(--ink);
                    border-color: var(--accent);
                }

                @media (max-width: 768px) {
                    .footer-inner {
                        flex-direction: column;
                        text-align: center;
                    }

                    .footer-side {
                        align-items: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
