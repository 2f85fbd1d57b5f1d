use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminals wider than this show the department menu permanently
pub const MOBILE_BREAKPOINT_COLS: u16 = 100;

const MENU_WIDTH: u16 = 30;
const CART_BADGE_WIDTH: u16 = 16;

/// Storefront screen regions
pub struct StoreLayout {
    pub search_area: Rect,
    pub cart_area: Rect,
    pub menu_area: Option<Rect>,
    pub products_area: Rect,
    pub status_area: Rect,
}

impl StoreLayout {
    /// - Header: search bar + cart badge (3 rows)
    /// - Body: optional menu panel (left) + product list
    /// - Status bar: bottom row
    pub fn new(area: Rect, show_menu: bool) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let header_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(CART_BADGE_WIDTH)])
            .split(vertical_chunks[0]);

        let (menu_area, products_area) = if show_menu {
            let body_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(10)])
                .split(vertical_chunks[1]);
            (Some(body_chunks[0]), body_chunks[1])
        } else {
            (None, vertical_chunks[1])
        };

        Self {
            search_area: header_chunks[0],
            cart_area: header_chunks[1],
            menu_area,
            products_area,
            status_area: vertical_chunks[2],
        }
    }

    /// Dropdown directly under the search bar, sized for `count` suggestions and
    /// clipped to the screen
    pub fn suggestions_area(&self, count: usize, screen: Rect) -> Rect {
        let top = self.search_area.y + self.search_area.height;
        let available = screen.bottom().saturating_sub(top);
        let wanted = u16::try_from(count).unwrap_or(u16::MAX).saturating_add(2);
        Rect::new(self.search_area.x, top, self.search_area.width, wanted.min(available))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_menu() {
        let layout = StoreLayout::new(Rect::new(0, 0, 80, 24), false);

        assert_eq!(layout.search_area.height, 3);
        assert_eq!(layout.cart_area.width, CART_BADGE_WIDTH);
        assert_eq!(layout.search_area.width, 80 - CART_BADGE_WIDTH);
        assert!(layout.menu_area.is_none());
        assert_eq!(layout.products_area.height, 20);
        assert_eq!(layout.products_area.width, 80);
        assert_eq!(layout.status_area.y, 23);
        assert_eq!(layout.status_area.height, 1);
    }

    #[test]
    fn test_layout_with_menu() {
        let layout = StoreLayout::new(Rect::new(0, 0, 120, 30), true);

        let menu = layout.menu_area.unwrap();
        assert_eq!(menu.width, MENU_WIDTH);
        assert_eq!(layout.products_area.x, MENU_WIDTH);
        assert_eq!(layout.products_area.width, 120 - MENU_WIDTH);
    }

    #[test]
    fn test_suggestions_area_clipped() {
        let screen = Rect::new(0, 0, 80, 8);
        let layout = StoreLayout::new(screen, false);

        let dropdown = layout.suggestions_area(3, screen);
        assert_eq!(dropdown.y, 3);
        assert_eq!(dropdown.height, 5);

        let dropdown = layout.suggestions_area(8, screen);
        assert_eq!(dropdown.height, 5);
    }
}
