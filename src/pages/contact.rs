use yew::prelude::*;

use crate::i18n::{self, LanguageContext};

/// Standalone contact view. Like the home-page band, the form has no submit
/// handler; only the layout differs.
#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let lang = use_context::<LanguageContext>().expect(i18n::MISSING_PROVIDER);
    let text = lang.text();

    html! {
        <div class="contact-page">
            <div class="contact-halo"></div>

            <div class="contact-page-inner">
                <div class="contact-columns">
                    <div class="contact-intro">
                        <h1>{ text.nav.contact }</h1>
                        <p class="contact-lede">{ text.contact.subtitle }</p>

                        <div class="contact-block">
                            <h3>{ text.contact.location_label }</h3>
                            <p>{ "Tehnološki Park 19" }<br />{ "1000 Ljubljana" }<br />{ "Slovenija" }</p>
                        </div>

                        <div class="contact-block">
                            <h3>{ text.contact.contact_label }</h3>
                            <p>{ "hello@dizain.agency" }<br />{ "+386 1 234 5678" }</p>
                        </div>
                    </div>

                    <div class="contact-panel">
                        <form class="panel-form">
                            <div class="panel-pair">
                                <label>
                                    <span>{ text.contact.name }</span>
                                    <input type="text" />
                                </label>
                                <label>
                                    <span>{ text.contact.email }</span>
                                    <input type="email" />
                                </label>
                            </div>

                            <label>
                                <span>{ text.contact.project }</span>
                                <input type="text" />
                            </label>

                            <label>
                                <span>{ text.contact.details }</span>
                                <textarea rows="4"></textarea>
                            </label>

                            <button type="submit" data-clickable="true">
                                { text.contact.send }{ " ↗" }
                            </button>
                        </form>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact-page {
                    position: relative;
                    min-height: 100vh;
                    background: var(--bg-deep);
                    padding: 8rem 0 6rem;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                }

                .contact-halo {
                    position: absolute;
                    left: 0;
                    top: 50%;
                    width: 400px;
                    height: 400px;
                    background: color-mix(in srgb, var(--ink) 5%, transparent);
                    border-radius: 50%;
                    filter: blur(100px);
                    pointer-events: none;
                }

                .contact-page-inner {
                    position: relative;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    flex-grow: 1;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    z-index: 10;
                }

                .contact-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: start;
                }

                .contact-intro h1 {
                    font-family: var(--font-display);
                    font-size: clamp(3.5rem, 8vw, 6rem);
                    font-weight: 700;
                    line-height: 0.9;
                    color: var(--ink);
                    margin: 0 0 2rem;
                }

                .contact-lede {
                    color: var(--muted);
                    font-size: 1.25rem;
                    line-height: 1.7;
                    max-width: 26rem;
                    border-left: 1px solid var(--line);
                    padding-left: 1.5rem;
                    margin: 0 0 3rem;
                }

                .contact-block {
                    margin-bottom: 3rem;
                }

                .contact-block h3 {
                    font-size: 0.8rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: var(--ink);
                    margin: 0 0 1rem;
                }

                .contact-block p {
                    color: var(--muted);
                    line-height: 1.7;
                    margin: 0;
                }

                .contact-panel {
                    background: var(--bg-raised);
                    border: 1px solid var(--line);
                    padding: 3rem;
                    box-shadow: 0 30px 60px rgba(0,0,0,0.4);
                }

                .panel-form {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .panel-pair {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }

                .panel-form label span {
                    display: block;
                    font-size: 0.7rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: var(--ink);
                    margin-bottom: 0.75rem;
                }

                .panel-form input,
                .panel-form textarea {
                    width: 100%;
                    background: var(--bg-deep);
                    border: 1px solid color-mix(in srgb, var(--ink) 12%, transparent);
                    padding: 1rem;
                    color: var(--ink);
                    font-family: inherit;
                    font-size: 1rem;
                    resize: none;
                    transition: border-color 0.3s ease, background 0.3s ease;
                }

                .panel-form input:focus,
                .panel-form textarea:focus {
                    outline: none;
                    border-color: color-mix(in srgb, var(--ink) 50%, transparent);
                    background: color-mix(in srgb, var(--ink) 5%, var(--bg-deep));
                }

                .panel-form button {
                    margin-top: 1rem;
                    padding: 1.5rem;
                    background: var(--accent);
                    color: var(--bg);
                    border: none;
                    font-family: var(--font-display);
                    font-weight: 700;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    cursor: pointer;
                    transition: opacity 0.3s ease;
                }

                .panel-form button:hover {
                    opacity: 0.85;
                }

                @media (max-width: 768px) {
                    .contact-columns,
                    .panel-pair {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
