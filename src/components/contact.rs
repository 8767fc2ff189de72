use yew::prelude::*;

use crate::i18n::{self, LanguageContext};
use crate::scroll;

/// The home-page contact band. The form intentionally has no submit
/// handler; inquiries are routed elsewhere and this surface is visual only.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
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
        <section id="contact" ref={section} class="contact-band">
            <div class="contact-band-inner">
                <div class="contact-band-header">
                    <h2>{ text.contact.title }</h2>
                    <p>{ text.contact.subtitle }</p>
                </div>

                <form class="contact-form">
                    <div class="form-pair">
                        <input type="text" placeholder={text.contact.name} />
                        <input type="email" placeholder={text.contact.email} />
                    </div>
                    <input type="text" placeholder={text.contact.project} />
                    <textarea rows="4" placeholder={text.contact.details}></textarea>
                    <div class="form-actions">
                        <button type="submit" data-clickable="true">{ text.contact.send }</button>
                    </div>
                </form>
            </div>

            <style>
                {r#"
                .contact-band {
                    padding: 8rem 0;
                    background: var(--bg);
                }

                .contact-band-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .contact-band-header {
                    text-align: center;
                    margin-bottom: 4rem;
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }

                .contact-band.visible .contact-band-header {
                    opacity: 1;
                    transform: translateY(0);
                }

                .contact-band-header h2 {
                    font-family: var(--font-display);
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 700;
                    color: var(--ink);
                    margin: 0 0 1.5rem;
                }

                .contact-band-header p {
                    color: var(--muted);
                    font-size: 1.25rem;
                    margin: 0;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }

                .form-pair {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }

                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid color-mix(in srgb, var(--ink) 25%, transparent);
                    padding: 1rem 0;
                    color: var(--ink);
                    font-size: 1rem;
                    font-family: inherit;
                    resize: none;
                    transition: border-color 0.3s ease;
                }

                .contact-form input::placeholder,
                .contact-form textarea::placeholder {
                    color: color-mix(in srgb, var(--muted) 70%, transparent);
                }

                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-bottom-color: var(--accent);
                }

                .form-actions {
                    text-align: center;
                    padding-top: 2rem;
                }

                .form-actions button {
                    padding: 1.25rem 3rem;
                    background: var(--accent);
                    color: var(--bg);
                    border: none;
                    font-weight: 700;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    cursor: pointer;
                    transition: opacity 0.3s ease;
                }

                .form-actions button:hover {
                    opacity: 0.85;
                }

                @media (max-width: 768px) {
                    .form-pair {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
