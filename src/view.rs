use std::fmt;

/// Which screen the app is showing. Exactly one is active at a time and
/// `Preview` always carries a target URL in the router.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Home,
    Works,
    Services,
    Agency,
    Contact,
    Preview,
}

impl View {
    /// Maps a navigation target to a view. Unrecognized targets land on Home.
    pub fn from_target(target: &str) -> Self {
        match target {
            "works" => View::Works,
            "services" => View::Services,
            "agency" => View::Agency,
            "contact" => View::Contact,
            _ => View::Home,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Works => "works",
            View::Services => "services",
            View::Agency => "agency",
            View::Contact => "contact",
            View::Preview => "preview",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory view router. No URL or history integration: transitions happen
/// only through the explicit operations below.
#[derive(Clone, PartialEq, Debug)]
pub struct Router {
    view: View,
    previous: View,
    preview_url: Option<String>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            view: View::Home,
            previous: View::Home,
            preview_url: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    /// Switches to the view named by `target`, falling back to Home for
    /// anything unrecognized. Leaving Preview this way drops the target URL.
    pub fn navigate(&mut self, target: &str) {
        self.view = View::from_target(target);
        self.preview_url = None;
    }

    /// Enters the preview view for `url`, remembering where we came from.
    /// The URL is stored as given; an unreachable address simply leaves the
    /// frame connecting until the visitor backs out.
    pub fn open_preview(&mut self, url: String) {
        if self.view != View::Preview {
            self.previous = self.view;
        }
        self.preview_url = Some(url);
        self.view = View::Preview;
    }

    /// Leaves the preview view, restoring the view that was active when it
    /// was opened. A no-op outside Preview.
    pub fn close_preview(&mut self) {
        if self.view != View::Preview {
            return;
        }
        self.preview_url = None;
        self.view = self.previous;
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// What `body.style.overflow` should be while a view is active. The preview
/// frame owns the viewport, so background scrolling is locked there.
pub fn body_overflow(view: View) -> &'static str {
    match view {
        View::Preview => "hidden",
        _ => "",
    }
}

/// Viewports narrower than this are treated as touch-primary: no custom
/// cursor, burger navigation instead of the link row.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_targets_map_to_their_views() {
        assert_eq!(View::from_target("works"), View::Works);
        assert_eq!(View::from_target("services"), View::Services);
        assert_eq!(View::from_target("agency"), View::Agency);
        assert_eq!(View::from_target("contact"), View::Contact);
        assert_eq!(View::from_target("home"), View::Home);
    }

    #[test]
    fn unknown_targets_fall_back_to_home() {
        let mut router = Router::new();
        router.navigate("works");
        assert_eq!(router.view(), View::Works);
        router.navigate("bogus");
        assert_eq!(router.view(), View::Home);
    }

    #[test]
    fn preview_round_trip_restores_every_starting_view() {
        for start in ["home", "works", "services", "agency", "contact"] {
            let mut router = Router::new();
            router.navigate(start);
            let before = router.view();
            router.open_preview("https://example.com".into());
            assert_eq!(router.view(), View::Preview);
            assert_eq!(router.preview_url(), Some("https://example.com"));
            router.close_preview();
            assert_eq!(router.view(), before);
            assert_eq!(router.preview_url(), None);
        }
    }

    #[test]
    fn chained_previews_restore_the_last_real_view() {
        let mut router = Router::new();
        router.navigate("works");
        router.open_preview("https://a.example".into());
        router.open_preview("https://b.example".into());
        assert_eq!(router.preview_url(), Some("https://b.example"));
        router.close_preview();
        assert_eq!(router.view(), View::Works);
    }

    #[test]
    fn navigating_out_of_preview_clears_the_target() {
        let mut router = Router::new();
        router.open_preview("https://a.example".into());
        router.navigate("contact");
        assert_eq!(router.view(), View::Contact);
        assert_eq!(router.preview_url(), None);
    }

    #[test]
    fn close_preview_outside_preview_is_a_no_op() {
        let mut router = Router::new();
        router.navigate("agency");
        router.close_preview();
        assert_eq!(router.view(), View::Agency);
    }

    #[test]
    fn preview_locks_body_scroll() {
        assert_eq!(body_overflow(View::Preview), "hidden");
        assert_eq!(body_overflow(View::Home), "");
        assert_eq!(body_overflow(View::Works), "");
    }

    #[test]
    fn mobile_boundary_sits_at_768() {
        assert!(is_mobile(500.0));
        assert!(is_mobile(767.0));
        assert!(!is_mobile(768.0));
        assert!(!is_mobile(1200.0));
    }
}
