//! End-to-end walks through a three-level cascade.

use cascade_core::event::{KeyCode, KeyEvent};
use cascade_core::geometry::Rect;
use cascade_menu::{AnchorRef, CascadeAction, CascadeError, CascadeMenu, MenuEvent, MenuItem};

fn sample() -> Vec<MenuItem> {
    vec![
        MenuItem::leaf("a"),
        MenuItem::submenu(
            "b",
            vec![
                MenuItem::submenu(
                    "e",
                    vec![MenuItem::leaf("h"), MenuItem::leaf("i"), MenuItem::leaf("j")],
                ),
                MenuItem::leaf("f"),
                MenuItem::leaf("g"),
            ],
        ),
        MenuItem::leaf("c"),
        MenuItem::submenu(
            "d",
            vec![MenuItem::leaf("m"), MenuItem::leaf("n"), MenuItem::leaf("o")],
        ),
    ]
}

fn anchor(id: u64) -> AnchorRef {
    AnchorRef::new(id, Rect::new(id as u16, id as u16, 6, 1))
}

fn values_at(menu: &CascadeMenu, level: usize) -> Vec<String> {
    menu.state()
        .entry(level)
        .expect("level should be open")
        .items
        .iter()
        .map(|item| item.value().to_string())
        .collect()
}

#[test]
fn full_walk_then_arrow_left_then_leaf() {
    let mut menu = CascadeMenu::new(sample(), 3).unwrap();

    // Click the root trigger.
    menu.handle_event(&MenuEvent::RootActivated { anchor: anchor(1) })
        .unwrap();
    assert_eq!(menu.depth(), 1);
    assert_eq!(values_at(&menu, 0), ["a", "b", "c", "d"]);

    // Click "b": level 1 opens, level 0 unchanged.
    menu.handle_event(&MenuEvent::ItemActivated {
        level: 0,
        index: 1,
        anchor: anchor(2),
    })
    .unwrap();
    assert_eq!(menu.depth(), 2);
    assert_eq!(values_at(&menu, 1), ["e", "f", "g"]);
    assert_eq!(values_at(&menu, 0), ["a", "b", "c", "d"]);

    // Click "e": level 2 opens.
    menu.handle_event(&MenuEvent::ItemActivated {
        level: 1,
        index: 0,
        anchor: anchor(3),
    })
    .unwrap();
    assert_eq!(menu.depth(), 3);
    assert_eq!(values_at(&menu, 2), ["h", "i", "j"]);

    // ArrowLeft in the level-2 menu: back to depth 2, level 1 intact.
    menu.handle_event(&MenuEvent::Key {
        level: 2,
        key: KeyEvent::new(KeyCode::Left),
    })
    .unwrap();
    assert_eq!(menu.depth(), 2);
    assert_eq!(values_at(&menu, 1), ["e", "f", "g"]);

    // Reopen "e", then click "h": full collapse with a selection.
    menu.handle_event(&MenuEvent::ItemActivated {
        level: 1,
        index: 0,
        anchor: anchor(3),
    })
    .unwrap();
    let action = menu
        .handle_event(&MenuEvent::ItemActivated {
            level: 2,
            index: 0,
            anchor: anchor(4),
        })
        .unwrap();
    assert_eq!(action, Some(CascadeAction::Selected { value: "h".into() }));
    assert_eq!(menu.depth(), 0);
}

#[test]
fn click_away_from_depth_three_collapses_in_one_step() {
    let mut menu = CascadeMenu::new(sample(), 3).unwrap();
    menu.open_root(anchor(1)).unwrap();
    menu.select(0, 1, anchor(2)).unwrap();
    menu.select(1, 0, anchor(3)).unwrap();
    assert_eq!(menu.depth(), 3);

    let action = menu.handle_event(&MenuEvent::ClickAway).unwrap();
    assert_eq!(action, Some(CascadeAction::Dismissed));
    assert_eq!(menu.depth(), 0);
}

#[test]
fn too_shallow_level_budget_is_rejected_at_construction() {
    let err = CascadeMenu::new(sample(), 2).unwrap_err();
    assert_eq!(
        err,
        CascadeError::DepthExceeded {
            depth: 3,
            max_levels: 2
        }
    );
}

#[test]
fn dismissal_after_replacement_does_not_clobber_the_new_chain() {
    let mut menu = CascadeMenu::new(sample(), 3).unwrap();
    menu.open_root(anchor(1)).unwrap();
    menu.select(0, 1, anchor(2)).unwrap();
    menu.select(1, 0, anchor(3)).unwrap();

    // Re-anchor level 1 to "d"; the old level-2 panel goes away.
    menu.select(0, 3, anchor(5)).unwrap();
    assert_eq!(values_at(&menu, 1), ["m", "n", "o"]);

    // The evicted panel reports "dismissed" afterwards, as a floating-panel
    // primitive does when its anchor disappears. Sequential application
    // against current state: nothing is open at level 2, nothing changes.
    menu.handle_event(&MenuEvent::PanelDismissed { level: 2 })
        .unwrap();
    assert_eq!(menu.depth(), 2);
    assert_eq!(values_at(&menu, 1), ["m", "n", "o"]);
    assert_eq!(values_at(&menu, 0), ["a", "b", "c", "d"]);
}

#[test]
fn renderer_contract_round_trip() {
    let mut menu = CascadeMenu::new(sample(), 3).unwrap();
    menu.open_root(anchor(1)).unwrap();
    menu.select(0, 1, anchor(2)).unwrap();

    // Paint from the contract, then report an activation back using the
    // coordinates the contract handed out.
    let (level, index) = {
        let views: Vec<_> = menu.open_levels().collect();
        assert_eq!(views.len(), 2);
        let deepest = &views[1];
        let idx = deepest
            .items
            .iter()
            .position(|item| item.value() == "f")
            .unwrap();
        (deepest.level, idx)
    };
    let action = menu.select(level, index, anchor(6)).unwrap();
    assert_eq!(action, Some(CascadeAction::Selected { value: "f".into() }));
    assert_eq!(menu.open_levels().count(), 0);
}
