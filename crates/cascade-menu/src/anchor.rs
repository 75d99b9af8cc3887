#![forbid(unsafe_code)]

//! Per-level anchor and option state.
//!
//! [`AnchorState`] is the full picture of which levels of the cascade are
//! open: for each level, either a closed slot or a [`LevelEntry`] pairing
//! the anchor the panel hangs from with the options it shows. Keeping the
//! pair in one struct makes "anchor present but options absent" (or the
//! reverse) unrepresentable.
//!
//! Transitions are pure: each produces a new snapshot and leaves the
//! receiver untouched. The controller holds exactly one live snapshot and
//! swaps it on every event. The state records; it does not enforce the
//! no-orphan-level rule — that is the dispatcher's job.

use crate::model::MenuItem;
use cascade_core::geometry::Rect;

/// Opaque identity of a UI element a panel can anchor to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(pub u64);

/// A weak positional reference to a trigger element.
///
/// The rendering layer owns the element; the controller only remembers
/// which one (`id`) and where it was (`bounds`) for panel placement.
/// Two references denote the same trigger iff their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorRef {
    /// Element identity.
    pub id: AnchorId,
    /// Element bounds in terminal cells at the time of activation.
    pub bounds: Rect,
}

impl AnchorRef {
    /// Create an anchor reference.
    #[must_use]
    pub const fn new(id: u64, bounds: Rect) -> Self {
        Self {
            id: AnchorId(id),
            bounds,
        }
    }

    /// Whether this reference denotes the same trigger as another.
    #[must_use]
    pub fn same_trigger(&self, other: &AnchorRef) -> bool {
        self.id == other.id
    }
}

/// An open level: the anchor its panel hangs from and the options it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEntry {
    /// The trigger element the panel is positioned against.
    pub anchor: AnchorRef,
    /// The ordered options displayed at this level.
    pub items: Vec<MenuItem>,
}

/// Snapshot of the whole cascade: one slot per level, fixed length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorState {
    levels: Vec<Option<LevelEntry>>,
}

impl AnchorState {
    /// A fully closed cascade with `max_levels` slots.
    #[must_use]
    pub fn closed(max_levels: usize) -> Self {
        Self {
            levels: vec![None; max_levels],
        }
    }

    /// Number of level slots.
    #[must_use]
    pub fn max_levels(&self) -> usize {
        self.levels.len()
    }

    /// Whether the given level is open.
    #[must_use]
    pub fn is_open(&self, level: usize) -> bool {
        self.levels.get(level).is_some_and(Option::is_some)
    }

    /// The entry at `level`, or `None` if that level is closed.
    #[must_use]
    pub fn entry(&self, level: usize) -> Option<&LevelEntry> {
        self.levels.get(level).and_then(Option::as_ref)
    }

    /// Length of the open prefix. With the no-orphan rule maintained by
    /// the dispatcher this equals the number of open levels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.iter().take_while(|slot| slot.is_some()).count()
    }

    /// Snapshot with `level` set to the given anchor and options.
    ///
    /// Every other level is carried over unchanged; in particular this
    /// does *not* close deeper levels.
    #[must_use]
    pub fn with_open(&self, level: usize, anchor: AnchorRef, items: Vec<MenuItem>) -> Self {
        debug_assert!(level < self.levels.len());
        let mut next = self.clone();
        next.levels[level] = Some(LevelEntry { anchor, items });
        next
    }

    /// Snapshot with `level` and every deeper level closed.
    ///
    /// Shallower levels are carried over unchanged.
    #[must_use]
    pub fn closed_from(&self, level: usize) -> Self {
        debug_assert!(level < self.levels.len());
        let mut next = self.clone();
        for slot in next.levels.iter_mut().skip(level) {
            *slot = None;
        }
        next
    }

    /// Snapshot with every level closed.
    #[must_use]
    pub fn closed_all(&self) -> Self {
        Self::closed(self.levels.len())
    }
}
