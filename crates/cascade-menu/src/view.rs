#![forbid(unsafe_code)]

//! The contract consumed by a rendering layer.
//!
//! For each open level the controller exposes a [`LevelView`]: the anchor
//! to position a floating panel against and the ordered options to paint
//! in it. Closed levels yield nothing. The callbacks of the contract are
//! the controller methods: paint each item with its `(level, index)`
//! coordinates, then report activations back through
//! [`CascadeMenu::select`]/[`CascadeMenu::expand`] and panel dismissals
//! through [`CascadeMenu::dismiss_panel`].

use crate::anchor::AnchorRef;
use crate::controller::CascadeMenu;
use crate::model::MenuItem;
use cascade_core::geometry::{Rect, Size};
use unicode_width::UnicodeWidthStr;

/// Horizontal padding inside a panel (one cell each side).
const PANEL_PADDING: u16 = 2;

/// Gutter for the submenu marker column.
const MARKER_GUTTER: u16 = 2;

/// One open level of the cascade, as the rendering layer sees it.
#[derive(Debug, Clone, Copy)]
pub struct LevelView<'a> {
    /// Depth index of this level (0 = root menu).
    pub level: usize,
    /// The trigger element the panel is positioned against.
    pub anchor: &'a AnchorRef,
    /// The ordered options to display.
    pub items: &'a [MenuItem],
}

impl LevelView<'_> {
    /// Size hint for this level's panel: the widest label plus padding
    /// and a submenu-marker gutter, one row per option.
    #[must_use]
    pub fn desired_size(&self) -> Size {
        let widest = self
            .items
            .iter()
            .map(|item| UnicodeWidthStr::width(item.value()))
            .max()
            .unwrap_or(0);
        let width = u16::try_from(widest)
            .unwrap_or(u16::MAX)
            .saturating_add(PANEL_PADDING)
            .saturating_add(MARKER_GUTTER);
        let height = u16::try_from(self.items.len()).unwrap_or(u16::MAX);
        Size::new(width, height)
    }
}

impl CascadeMenu {
    /// The currently open levels, shallowest first.
    pub fn open_levels(&self) -> impl Iterator<Item = LevelView<'_>> {
        (0..self.max_levels()).filter_map(|level| {
            self.state().entry(level).map(|entry| LevelView {
                level,
                anchor: &entry.anchor,
                items: &entry.items,
            })
        })
    }

    /// Whether a click at `(x, y)` lands outside every open panel and
    /// every open level's anchor.
    ///
    /// `panel_bounds` are the rectangles the integration actually painted
    /// for the open panels; the controller cannot know them itself. When
    /// this returns true the click should be fed back as
    /// [`MenuEvent::ClickAway`](crate::MenuEvent::ClickAway).
    #[must_use]
    pub fn is_click_away(&self, x: u16, y: u16, panel_bounds: &[Rect]) -> bool {
        if self.depth() == 0 {
            return false;
        }
        let in_panel = panel_bounds.iter().any(|rect| rect.contains(x, y));
        let on_anchor = self
            .open_levels()
            .any(|view| view.anchor.bounds.contains(x, y));
        !in_panel && !on_anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> CascadeMenu {
        let items = vec![
            MenuItem::leaf("open"),
            MenuItem::submenu("recent", vec![MenuItem::leaf("a.txt")]),
        ];
        CascadeMenu::new(items, 2).unwrap()
    }

    #[test]
    fn closed_cascade_exposes_no_levels() {
        let menu = menu();
        assert_eq!(menu.open_levels().count(), 0);
    }

    #[test]
    fn open_levels_come_shallowest_first() {
        let mut menu = menu();
        menu.open_root(AnchorRef::new(1, Rect::new(0, 0, 6, 1))).unwrap();
        menu.select(0, 1, AnchorRef::new(2, Rect::new(0, 2, 6, 1)))
            .unwrap();

        let views: Vec<_> = menu.open_levels().collect();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].level, 0);
        assert_eq!(views[1].level, 1);
        assert_eq!(views[1].items[0].value(), "a.txt");
    }

    #[test]
    fn desired_size_tracks_widest_label() {
        let mut menu = menu();
        menu.open_root(AnchorRef::new(1, Rect::new(0, 0, 6, 1))).unwrap();
        let view = menu.open_levels().next().unwrap();
        // "recent" is 6 cells wide, plus padding and marker gutter.
        assert_eq!(view.desired_size(), Size::new(10, 2));
    }

    #[test]
    fn desired_size_counts_display_width() {
        let items = vec![MenuItem::leaf("日本語")]; // 3 chars, 6 cells
        let mut menu = CascadeMenu::new(items, 1).unwrap();
        menu.open_root(AnchorRef::new(1, Rect::new(0, 0, 6, 1))).unwrap();
        let view = menu.open_levels().next().unwrap();
        assert_eq!(view.desired_size().width, 10);
    }

    #[test]
    fn click_away_detection() {
        let mut menu = menu();
        let trigger = Rect::new(0, 0, 6, 1);
        menu.open_root(AnchorRef::new(1, trigger)).unwrap();
        let panel = Rect::new(0, 1, 10, 2);

        assert!(!menu.is_click_away(2, 2, &[panel]), "inside the panel");
        assert!(!menu.is_click_away(3, 0, &[panel]), "on the trigger");
        assert!(menu.is_click_away(40, 10, &[panel]));
    }

    #[test]
    fn no_click_away_when_closed() {
        let menu = menu();
        assert!(!menu.is_click_away(40, 10, &[]));
    }
}
