//! Layout definitions for the editor
//!
//! The grid fills the screen above a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the editor
pub struct AppLayout {
    /// Record grid
    pub grid: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Grid
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            grid: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_split() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.grid.height, 39);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.status_bar.height, 1);
    }

    #[test]
    fn test_centered_rect_clamped_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(70, 5, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 2);
    }
}
