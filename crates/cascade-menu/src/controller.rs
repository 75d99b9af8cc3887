#![forbid(unsafe_code)]

//! The interaction dispatcher.
//!
//! [`CascadeMenu`] translates pointer and keyboard activity into anchor
//! state transitions and applies the close-propagation policy: closing a
//! level always closes every deeper level, because a child panel is
//! anchored to an element inside its parent's panel.
//!
//! All transitions are synchronous and strictly sequential; a dismissal
//! that arrives after a competing open is applied to the state that open
//! produced, so a stale dismissal (for a level no longer open) changes
//! nothing.
//!
//! # Usage
//!
//! ```ignore
//! let mut menu = CascadeMenu::new(items, 3)?;
//! if let Some(action) = menu.handle_event(&event)? {
//!     match action {
//!         CascadeAction::Selected { value } => { /* run the choice */ }
//!         CascadeAction::Dismissed => { /* cascade collapsed */ }
//!     }
//! }
//! ```

use crate::anchor::{AnchorRef, AnchorState};
use crate::error::CascadeError;
use crate::model::{self, MenuItem};
use cascade_core::event::{KeyCode, KeyEvent};

/// An input the dispatcher reacts to.
///
/// Item coordinates are `(level, index)`: the open menu containing the
/// item and the item's position in that menu's option list. The anchor
/// reference accompanying an activation is the activated element itself,
/// which a child panel will be positioned against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// The root trigger was activated (click, Enter, or Space).
    RootActivated {
        /// The trigger element.
        anchor: AnchorRef,
    },
    /// An item was activated (click, Enter, or Space).
    ItemActivated {
        /// Level of the menu containing the item.
        level: usize,
        /// Position of the item in that menu.
        index: usize,
        /// The item's element.
        anchor: AnchorRef,
    },
    /// ArrowRight was pressed on an item. Opens a submenu; ignored on a leaf.
    ItemArrowRight {
        /// Level of the menu containing the item.
        level: usize,
        /// Position of the item in that menu.
        index: usize,
        /// The item's element.
        anchor: AnchorRef,
    },
    /// A key was pressed while focus was inside the menu at `level`.
    Key {
        /// Level of the focused menu.
        level: usize,
        /// The key event.
        key: KeyEvent,
    },
    /// The floating panel at `level` reported its own dismissal.
    PanelDismissed {
        /// Level of the dismissed panel.
        level: usize,
    },
    /// A click landed outside every open panel.
    ClickAway,
}

/// App-facing outcome of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeAction {
    /// A leaf option was selected; the cascade has collapsed.
    Selected {
        /// The selected option's value.
        value: String,
    },
    /// The cascade collapsed without a selection (Escape or click-away).
    Dismissed,
}

/// Controller for a chain of cascading context menus.
///
/// Owns the immutable option tree and the single live [`AnchorState`].
///
/// # Invariants
///
/// 1. If level `l` is open, every level below `l` is open (no orphans).
/// 2. A level is either fully open (anchor and options) or fully closed.
/// 3. Closing a level closes every deeper level in the same transition.
#[derive(Debug, Clone)]
pub struct CascadeMenu {
    /// Root option set, fixed for the controller's lifetime.
    items: Vec<MenuItem>,
    /// The one live state snapshot.
    state: AnchorState,
    max_levels: usize,
}

impl CascadeMenu {
    /// Create a controller for the given option tree.
    ///
    /// Rejects a tree nesting deeper than `max_levels`, duplicate values
    /// within a sibling set, empty submenus, and `max_levels == 0`.
    pub fn new(items: Vec<MenuItem>, max_levels: usize) -> Result<Self, CascadeError> {
        model::validate_items(&items, max_levels)?;
        Ok(Self {
            items,
            state: AnchorState::closed(max_levels),
            max_levels,
        })
    }

    /// The configured level budget.
    #[must_use]
    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// The root option set.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// The current state snapshot.
    #[must_use]
    pub fn state(&self) -> &AnchorState {
        &self.state
    }

    /// Number of currently open levels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.state.depth()
    }

    /// Whether the given level is open.
    #[must_use]
    pub fn is_open(&self, level: usize) -> bool {
        self.state.is_open(level)
    }

    /// Dispatch one input event.
    ///
    /// Returns `Ok(Some(_))` when the event produced an app-facing
    /// outcome, `Ok(None)` when it only moved (or did not move) menu
    /// state, and `Err(_)` on a caller-bug precondition violation.
    pub fn handle_event(
        &mut self,
        event: &MenuEvent,
    ) -> Result<Option<CascadeAction>, CascadeError> {
        match event {
            MenuEvent::RootActivated { anchor } => {
                self.open_root(*anchor)?;
                Ok(None)
            }
            MenuEvent::ItemActivated {
                level,
                index,
                anchor,
            } => self.select(*level, *index, *anchor),
            MenuEvent::ItemArrowRight {
                level,
                index,
                anchor,
            } => {
                self.expand(*level, *index, *anchor)?;
                Ok(None)
            }
            MenuEvent::Key { level, key } => self.handle_key(*level, *key),
            MenuEvent::PanelDismissed { level } => {
                self.dismiss_panel(*level)?;
                Ok(None)
            }
            MenuEvent::ClickAway => Ok(self.click_away()),
        }
    }

    /// The root trigger was activated: open level 0 with the root options.
    ///
    /// Re-activating the anchor already registered at level 0 is a no-op;
    /// the cascade stays exactly as it was.
    pub fn open_root(&mut self, anchor: AnchorRef) -> Result<(), CascadeError> {
        let items = self.items.clone();
        self.open_level(0, anchor, items)
    }

    /// An item was activated by click, Enter, or Space.
    ///
    /// A submenu item opens its child menu one level deeper, anchored to
    /// the item; levels above stay open. A leaf collapses the entire
    /// cascade and reports [`CascadeAction::Selected`].
    pub fn select(
        &mut self,
        level: usize,
        index: usize,
        anchor: AnchorRef,
    ) -> Result<Option<CascadeAction>, CascadeError> {
        match self.item_at(level, index)? {
            MenuItem::Leaf { value } => {
                let value = value.clone();
                #[cfg(feature = "tracing")]
                tracing::debug!(level, index, value = %value, "leaf selected, collapsing cascade");
                self.state = self.state.closed_all();
                Ok(Some(CascadeAction::Selected { value }))
            }
            MenuItem::Submenu { children, .. } => {
                let children = children.clone();
                self.open_level(level + 1, anchor, children)?;
                Ok(None)
            }
        }
    }

    /// ArrowRight on an item: open its submenu, or do nothing on a leaf.
    pub fn expand(
        &mut self,
        level: usize,
        index: usize,
        anchor: AnchorRef,
    ) -> Result<(), CascadeError> {
        match self.item_at(level, index)? {
            MenuItem::Leaf { .. } => Ok(()),
            MenuItem::Submenu { children, .. } => {
                let children = children.clone();
                self.open_level(level + 1, anchor, children)
            }
        }
    }

    /// A key was pressed while focus was inside the menu at `level`.
    ///
    /// Escape collapses the whole cascade; ArrowLeft collapses `level`
    /// and deeper, returning to the parent menu. ArrowLeft in the level-0
    /// menu has no parent to return to and does nothing. Item-activating
    /// keys (Enter, Space, ArrowRight) always arrive with their item
    /// context via [`select`](Self::select)/[`expand`](Self::expand) and
    /// are ignored here.
    pub fn handle_key(
        &mut self,
        level: usize,
        key: KeyEvent,
    ) -> Result<Option<CascadeAction>, CascadeError> {
        self.check_level(level)?;
        if !key.is_press() {
            return Ok(None);
        }
        match key.code {
            KeyCode::Escape => Ok(self.click_away()),
            KeyCode::Left if level > 0 => {
                #[cfg(feature = "tracing")]
                tracing::trace!(level, "arrow-left collapse");
                self.state = self.state.closed_from(level);
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// The floating panel at `level` reported its own dismissal.
    ///
    /// Applies close-propagation from `level`: its descendants are
    /// anchored to elements inside the disappearing panel and must close
    /// with it. Applied against current state, so a dismissal for a level
    /// that has already been closed (or replaced) changes nothing.
    pub fn dismiss_panel(&mut self, level: usize) -> Result<(), CascadeError> {
        self.check_level(level)?;
        if self.state.is_open(level) {
            #[cfg(feature = "tracing")]
            tracing::trace!(level, "panel dismissed");
            self.state = self.state.closed_from(level);
        }
        Ok(())
    }

    /// A click landed outside every open panel: collapse everything.
    ///
    /// Returns [`CascadeAction::Dismissed`] if anything was open.
    pub fn click_away(&mut self) -> Option<CascadeAction> {
        if self.state.depth() == 0 {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(depth = self.state.depth(), "collapsing cascade");
        self.state = self.state.closed_all();
        Some(CascadeAction::Dismissed)
    }

    /// Open `level` with the given anchor and options.
    ///
    /// Enforces the no-orphan rule (the parent level must be open) and
    /// the replacement rule: when `level` is already open under a
    /// different trigger, its descendants are closed first, since their
    /// anchors live inside the panel being replaced. Re-activating the
    /// registered trigger is a no-op.
    fn open_level(
        &mut self,
        level: usize,
        anchor: AnchorRef,
        items: Vec<MenuItem>,
    ) -> Result<(), CascadeError> {
        self.check_level(level)?;
        if level > 0 && !self.state.is_open(level - 1) {
            return Err(CascadeError::OrphanLevel { level });
        }

        if let Some(entry) = self.state.entry(level) {
            if entry.anchor.same_trigger(&anchor) {
                // Idempotent re-activation: no spurious close of descendants.
                return Ok(());
            }
            if level + 1 < self.max_levels {
                self.state = self.state.closed_from(level + 1);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(level, anchor = anchor.id.0, options = items.len(), "open level");
        self.state = self.state.with_open(level, anchor, items);
        Ok(())
    }

    /// Look up the item at `(level, index)` in the open cascade.
    fn item_at(&self, level: usize, index: usize) -> Result<&MenuItem, CascadeError> {
        self.check_level(level)?;
        let entry = self
            .state
            .entry(level)
            .ok_or(CascadeError::LevelNotOpen { level })?;
        entry
            .items
            .get(index)
            .ok_or(CascadeError::ItemOutOfRange {
                level,
                index,
                len: entry.items.len(),
            })
    }

    fn check_level(&self, level: usize) -> Result<(), CascadeError> {
        if level >= self.max_levels {
            return Err(CascadeError::LevelOutOfRange {
                level,
                max_levels: self.max_levels,
            });
        }
        Ok(())
    }
}
