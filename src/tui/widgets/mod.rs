// TUI widget modules for the two table views.

pub mod grades;
pub mod prospects;

use ratatui::style::{Color, Modifier, Style};

use crate::grade::Tier;

/// Terminal color for a tier, mirroring the original badge palette
/// (green/blue/yellow/orange/red, gray for unrated).
pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Elite => Color::Green,
        Tier::Good => Color::Blue,
        Tier::Average => Color::Yellow,
        Tier::BelowAverage => Color::LightRed,
        Tier::Poor => Color::Red,
        Tier::Unrated => Color::DarkGray,
    }
}

/// Style for a tier-colored stat cell.
pub fn tier_style(tier: Tier) -> Style {
    Style::default()
        .fg(tier_color(tier))
        .add_modifier(Modifier::BOLD)
}

/// Style for the row under the cursor.
pub fn cursor_style() -> Style {
    Style::default().bg(Color::DarkGray)
}
