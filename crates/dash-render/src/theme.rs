// File: crates/dash-render/src/theme.rs
// Summary: Light/Dark theming for dashboard chart colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub line_stroke: skia::Color,
    pub bar_fill: skia::Color,
    pub scatter_dot: skia::Color,
    pub histogram: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 210, 210, 220),
            title: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            bar_fill: skia::Color::from_argb(255, 40, 200, 120),
            scatter_dot: skia::Color::from_argb(200, 255, 170, 60),
            histogram: skia::Color::from_argb(255, 96, 156, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 40, 40, 50),
            title: skia::Color::from_argb(255, 20, 20, 30),
            line_stroke: skia::Color::from_argb(255, 32, 120, 200),
            bar_fill: skia::Color::from_argb(255, 20, 160, 90),
            scatter_dot: skia::Color::from_argb(200, 220, 110, 20),
            histogram: skia::Color::from_argb(255, 40, 120, 200),
        }
    }
}

/// Built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(|| {
            log::warn!("unknown theme {name:?}, using dark");
            Theme::dark()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("dark").name, "dark");
    }

    #[test]
    fn unknown_falls_back_to_dark() {
        assert_eq!(find("neon").name, "dark");
    }
}
