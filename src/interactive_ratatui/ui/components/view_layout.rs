use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
};

// Helper struct for consistent color scheme
pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const LINK: Color = Color::LightBlue;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SELECTION: Color = Color::DarkGray;
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
}

// Helper struct for consistent styling
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn link() -> Style {
        Style::default().fg(ColorScheme::LINK)
    }

    pub fn label() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(ColorScheme::SELECTION)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn action_key() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(ColorScheme::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(ColorScheme::ERROR)
            .add_modifier(Modifier::BOLD)
    }
}

/// A `width` x `height` rectangle centred in `area`, shrunk to leave
/// `margin` cells on every side.
pub fn centered_rect(area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(margin * 2)).max(1);
    let height = height.min(area.height.saturating_sub(margin * 2)).max(1);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 30, 10, 2);
        assert_eq!(rect, Rect::new(25, 7, 30, 10));
    }

    #[test]
    fn test_centered_rect_respects_margin() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(area, 40, 40, 2);
        assert_eq!(rect, Rect::new(2, 2, 16, 6));
    }

    #[test]
    fn test_centered_rect_in_tiny_area() {
        let area = Rect::new(0, 0, 2, 2);
        let rect = centered_rect(area, 40, 40, 2);
        assert!(rect.width <= 2 && rect.height <= 2);
    }
}
