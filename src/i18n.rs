use yew::prelude::*;

/// Supported locales. Slovene is the launch language, English the secondary.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Language {
    Sl,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Sl, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Sl => "sl",
            Language::En => "en",
        }
    }

    /// Every language resolves to a complete table; there is no partial
    /// fallback between locales.
    pub fn table(self) -> &'static Translations {
        match self {
            Language::Sl => &SL,
            Language::En => &EN,
        }
    }
}

pub struct NavText {
    pub work: &'static str,
    pub services: &'static str,
    pub agency: &'static str,
    pub contact: &'static str,
}

pub struct HeroText {
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub scroll: &'static str,
}

pub struct PortfolioText {
    pub featured: &'static str,
    pub works: &'static str,
    pub view_all: &'static str,
    pub view_project: &'static str,
}

pub struct ServicesText {
    pub title: &'static str,
    pub expertise: &'static str,
    pub items: &'static [&'static str],
    pub details: &'static [&'static str],
    pub cta: &'static str,
}

pub struct ValueItem {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct WhyUsText {
    pub title: &'static str,
    pub desc: &'static str,
    pub quote: &'static str,
    pub items: &'static [ValueItem],
}

pub struct TechSpecsText {
    pub title: &'static str,
    pub desc: &'static str,
    pub chart_title: &'static str,
    pub seo: &'static str,
    pub load: &'static str,
    pub resp: &'static str,
    pub sec: &'static str,
}

pub struct ContactText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub location_label: &'static str,
    pub contact_label: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub project: &'static str,
    pub details: &'static str,
    pub send: &'static str,
}

pub struct PreviewText {
    pub back: &'static str,
    pub connecting: &'static str,
    pub live: &'static str,
    pub loading_env: &'static str,
}

pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub portfolio: PortfolioText,
    pub services: ServicesText,
    pub why_us: WhyUsText,
    pub tech_specs: TechSpecsText,
    pub contact: ContactText,
    pub preview: PreviewText,
}

pub static SL: Translations = Translations {
    nav: NavText {
        work: "Reference",
        services: "Storitve",
        agency: "Agencija",
        contact: "Kontakt",
    },
    hero: HeroText {
        subtitle: "Kjer inovacija sreča arhitekturo",
        cta: "Poglej v Prihodnost",
        scroll: "Drsite za raziskovanje",
    },
    portfolio: PortfolioText {
        featured: "Izbrane",
        works: "Reference",
        view_all: "Poglej Vse Projekte",
        view_project: "Ogled Projekta",
    },
    services: ServicesText {
        title: "Sposobnosti",
        expertise: "Naše Znanje",
        items: &["Strategija", "Oblikovanje", "Razvoj", "Marketing"],
        details: &[
            "Celostna digitalna strategija, ki združuje poslovne cilje z uporabniško izkušnjo.",
            "Oblikovanje vmesnikov, ki niso le lepi, ampak funkcionalno dovršeni in intuitivni.",
            "Razvoj po meri z uporabo najsodobnejših tehnologij.",
            "Digitalni marketing in SEO optimizacija za maksimalno vidnost na spletu.",
        ],
        cta: "Imate specifičen izziv?",
    },
    why_us: WhyUsText {
        title: "Standard",
        desc: "Delujemo na stičišču oblikovanja in inženiringa. Naša filozofija je preprosta: gradimo čudovite stvari, ki delujejo brezhibno.",
        quote: "Arhitektura ni le o zgradbah. Je o strukturi informacij, občutku prostora in toku interakcije v digitalnem svetu.",
        items: &[
            ValueItem {
                title: "Natančnost",
                desc: "Implementacija kompleksnih dizajnov do zadnjega piksla. Kodo obravnavamo kot arhitekturo.",
            },
            ValueItem {
                title: "Hitrost",
                desc: "Optimizirano za takojšnje nalaganje z uporabo naprednega predpomnjenja in 'edge' računalništva.",
            },
            ValueItem {
                title: "Razširljivost",
                desc: "Modularni sistemi, zgrajeni za rast z vašim podjetjem, od startupa do korporacije.",
            },
        ],
    },
    tech_specs: TechSpecsText {
        title: "Zmogljivost na Prvem Mestu",
        desc: "Vizualna podoba ne pomeni nič, če uporabnik čaka. Inženiramo za hitrost in dosegamo skoraj popolne rezultate na vseh področjih.",
        chart_title: "Google Lighthouse Zmogljivost",
        seo: "SEO Ocena",
        load: "Čas Nalaganja",
        resp: "Odzivnost",
        sec: "Varnost",
    },
    contact: ContactText {
        title: "Gradimo Skupaj",
        subtitle: "Ste pripravljeni na digitalno prihodnost?",
        location_label: "Lokacija",
        contact_label: "Kontakt",
        name: "Ime",
        email: "E-pošta",
        project: "Kaj gradite?",
        details: "Povejte nam več o podrobnostih...",
        send: "Pošlji Povpraševanje",
    },
    preview: PreviewText {
        back: "Nazaj",
        connecting: "Povezovanje...",
        live: "Predogled v živo",
        loading_env: "Nalaganje zunanjega okolja...",
    },
};

pub static EN: Translations = Translations {
    nav: NavText {
        work: "Work",
        services: "Services",
        agency: "Agency",
        contact: "Contact",
    },
    hero: HeroText {
        subtitle: "Where innovation meets architecture",
        cta: "See the Future",
        scroll: "Scroll to Explore",
    },
    portfolio: PortfolioText {
        featured: "Featured",
        works: "Works",
        view_all: "View All Projects",
        view_project: "View Project",
    },
    services: ServicesText {
        title: "Capabilities",
        expertise: "Our Expertise",
        items: &["Strategy", "Design", "Development", "Marketing"],
        details: &[
            "End-to-end digital strategy that aligns business goals with the user experience.",
            "Interface design that is not just beautiful but functionally complete and intuitive.",
            "Bespoke development on the most current technology stack.",
            "Digital marketing and SEO tuned for maximum visibility.",
        ],
        cta: "Have a specific challenge?",
    },
    why_us: WhyUsText {
        title: "Standard",
        desc: "We operate at the intersection of design and engineering. Our philosophy is simple: build beautiful things that work flawlessly.",
        quote: "Architecture is not only about buildings. It is about the structure of information, the feeling of space and the flow of interaction in a digital world.",
        items: &[
            ValueItem {
                title: "Precision",
                desc: "Pixel-perfect implementation of complex designs. We treat code as architecture.",
            },
            ValueItem {
                title: "Speed",
                desc: "Optimized for sub-second load times using advanced caching and edge computing.",
            },
            ValueItem {
                title: "Scale",
                desc: "Modular systems built to grow with your business, from startup to enterprise.",
            },
        ],
    },
    tech_specs: TechSpecsText {
        title: "Performance First",
        desc: "Visuals mean nothing if the user waits. We engineer for speed, achieving near-perfect Lighthouse scores across the board.",
        chart_title: "Google Lighthouse Performance",
        seo: "SEO Score",
        load: "Load Time",
        resp: "Responsive",
        sec: "Security",
    },
    contact: ContactText {
        title: "Let's Build",
        subtitle: "Ready to future-proof your digital presence?",
        location_label: "Location",
        contact_label: "Contact",
        name: "Name",
        email: "Email",
        project: "What are you building?",
        details: "Tell us about the details...",
        send: "Send Request",
    },
    preview: PreviewText {
        back: "Back",
        connecting: "Connecting...",
        live: "Live Preview",
        loading_env: "Loading External Environment...",
    },
};

/// Shared language state, provided once by the app root. Components read the
/// active table through it and switch languages via the callback.
#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set: Callback<Language>,
}

impl LanguageContext {
    pub fn text(&self) -> &'static Translations {
        self.language.table()
    }
}

/// Message for the fail-fast guard when a component reads the context
/// outside the provider. An integration mistake, not a runtime condition.
pub const MISSING_PROVIDER: &str =
    "LanguageContext is not mounted; wrap the component tree in the provider";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_resolves_to_a_complete_table() {
        for lang in Language::ALL {
            let t = lang.table();
            assert!(!t.nav.work.is_empty());
            assert!(!t.hero.subtitle.is_empty());
            assert_eq!(t.services.items.len(), 4);
            assert_eq!(t.services.details.len(), t.services.items.len());
            assert_eq!(t.why_us.items.len(), 3);
            assert!(!t.preview.connecting.is_empty());
        }
    }

    #[test]
    fn reselecting_the_active_language_changes_nothing() {
        let active = Language::Sl;
        let before = active.table() as *const Translations;
        let after = Language::Sl.table() as *const Translations;
        assert_eq!(before, after);
        assert_eq!(active.table().hero.subtitle, SL.hero.subtitle);
    }

    #[test]
    fn language_codes_are_distinct() {
        assert_eq!(Language::Sl.code(), "sl");
        assert_eq!(Language::En.code(), "en");
    }
}
