//! services/tui/src/ui/theme.rs
//!
//! Maps the core's category color tokens onto terminal colors and provides
//! small display helpers shared by the render functions.

use ratatui::style::Color;

/// Resolves a category color token to a terminal color. Unknown tokens get
/// the default foreground, matching the category fallback semantics.
pub fn color_for(token: &str) -> Color {
    match token {
        "cyan" => Color::Cyan,
        "green" => Color::Green,
        "red" => Color::Red,
        "magenta" => Color::Magenta,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "gray" => Color::Gray,
        "lightred" => Color::LightRed,
        "lightcyan" => Color::LightCyan,
        "lightmagenta" => Color::LightMagenta,
        "lightgreen" => Color::LightGreen,
        _ => Color::White,
    }
}

/// Five-star rating bar, whole stars filled.
pub fn stars(rating: f32) -> String {
    let filled = (rating.floor().max(0.0) as usize).min(5);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_whole_points_only() {
        assert_eq!(stars(4.8), "★★★★☆");
        assert_eq!(stars(5.0), "★★★★★");
        assert_eq!(stars(0.2), "☆☆☆☆☆");
    }

    #[test]
    fn stars_tolerate_out_of_range_ratings() {
        assert_eq!(stars(9.0), "★★★★★");
        assert_eq!(stars(-1.0), "☆☆☆☆☆");
    }
}
