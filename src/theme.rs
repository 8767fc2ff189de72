use web_sys::window;
use yew::prelude::*;

/// The fixed, ordered set of visual themes. Rotation walks this order and
/// wraps around.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Minimalist,
    Neon,
    Arcade,
    Nature,
    Glass,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Minimalist,
        Theme::Neon,
        Theme::Arcade,
        Theme::Nature,
        Theme::Glass,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Minimalist => "theme-minimalist",
            Theme::Neon => "theme-neon",
            Theme::Arcade => "theme-arcade",
            Theme::Nature => "theme-nature",
            Theme::Glass => "theme-glass",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Minimalist => "Minimalist",
            Theme::Neon => "Neon",
            Theme::Arcade => "Arcade",
            Theme::Nature => "Nature",
            Theme::Glass => "Glass",
        }
    }

    pub fn next(self) -> Theme {
        let index = Theme::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Theme::ALL[(index + 1) % Theme::ALL.len()]
    }
}

/// Swaps the `theme-*` class on the document root. The stylesheet keys its
/// custom properties off that class; nothing else reads it.
pub fn apply(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        for candidate in Theme::ALL {
            let _ = classes.remove_1(candidate.class_name());
        }
        let _ = classes.add_1(theme.class_name());
    }
}

/// Shared theme state, provided once by the app root.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub set: Callback<Theme>,
}

/// Fail-fast guard message for reads outside the provider.
pub const MISSING_PROVIDER: &str =
    "ThemeContext is not mounted; wrap the component tree in the provider";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_is_cyclic_with_period_equal_to_theme_count() {
        for start in Theme::ALL {
            let mut theme = start;
            for _ in 0..Theme::ALL.len() {
                theme = theme.next();
            }
            assert_eq!(theme, start);
        }
    }

    #[test]
    fn rotation_visits_every_theme_once_per_cycle() {
        let mut theme = Theme::Minimalist;
        let mut seen = Vec::new();
        for _ in 0..Theme::ALL.len() {
            seen.push(theme);
            theme = theme.next();
        }
        for candidate in Theme::ALL {
            assert!(seen.contains(&candidate));
        }
    }

    #[test]
    fn class_names_are_prefixed_and_unique() {
        for (i, a) in Theme::ALL.iter().enumerate() {
            assert!(a.class_name().starts_with("theme-"));
            for b in &Theme::ALL[i + 1..] {
                assert_ne!(a.class_name(), b.class_name());
            }
        }
    }
}
