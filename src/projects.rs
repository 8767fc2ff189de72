/// Reference dataset shared by the Portfolio section and the Works page.
/// Projects with a live deployment carry a link and open in the preview
/// frame; the rest render as plain case studies.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub specs: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Nourish",
        category: "3D E-Commerce",
        image: "https://picsum.photos/800/600?random=1",
        description: "WebGL powered skincare experience.",
        specs: &["Three.js", "React", "GSAP"],
        link: Some("https://nourish-demo.vercel.app"),
    },
    Project {
        id: 2,
        title: "Vortex",
        category: "FinTech",
        image: "https://picsum.photos/800/600?random=2",
        description: "Next-gen banking interface.",
        specs: &["Security", "Real-time", "App"],
        link: None,
    },
    Project {
        id: 3,
        title: "Aeon",
        category: "Architecture",
        image: "https://picsum.photos/800/600?random=3",
        description: "Minimalist portfolio platform.",
        specs: &["Minimal", "Gallery", "CMS"],
        link: Some("https://aeon-studio.vercel.app"),
    },
    Project {
        id: 4,
        title: "Zenith",
        category: "Automotive",
        image: "https://picsum.photos/800/600?random=4",
        description: "Electric vehicle configurator.",
        specs: &["3D", "Configurator", "Vue"],
        link: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn at_least_one_project_is_previewable() {
        assert!(PROJECTS.iter().any(|p| p.link.is_some()));
    }
}
