#![forbid(unsafe_code)]

//! The immutable option tree.
//!
//! Menus are described once, up front, as a tree of [`MenuItem`]s. A leaf
//! is a terminal choice; a submenu owns the ordered children displayed one
//! level deeper. The controller never mutates the tree.
//!
//! # Example
//!
//! ```
//! use cascade_menu::MenuItem;
//!
//! let edit = MenuItem::submenu("edit", vec![
//!     MenuItem::leaf("cut"),
//!     MenuItem::leaf("copy"),
//!     MenuItem::submenu("paste", vec![MenuItem::leaf("plain"), MenuItem::leaf("rich")]),
//! ]);
//! assert_eq!(edit.depth(), 3);
//! assert_eq!(edit.at_path(&[2, 0]).unwrap().value(), "plain");
//! ```

use crate::error::CascadeError;
use std::collections::HashSet;

/// One selectable entry in a menu.
///
/// The leaf/submenu split is a tagged variant rather than an optional
/// children field, so every dispatch site must handle both cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// A terminal choice. Selecting it collapses the entire cascade.
    Leaf {
        /// Identifier and label, unique within its sibling set.
        value: String,
    },
    /// An entry that opens a child menu one level deeper.
    Submenu {
        /// Identifier and label, unique within its sibling set.
        value: String,
        /// Ordered entries of the child menu. Never empty after validation.
        children: Vec<MenuItem>,
    },
}

impl MenuItem {
    /// Create a leaf item.
    #[must_use]
    pub fn leaf(value: impl Into<String>) -> Self {
        Self::Leaf {
            value: value.into(),
        }
    }

    /// Create a submenu item with the given children.
    #[must_use]
    pub fn submenu(value: impl Into<String>, children: Vec<MenuItem>) -> Self {
        Self::Submenu {
            value: value.into(),
            children,
        }
    }

    /// The item's identifier/label.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Leaf { value } | Self::Submenu { value, .. } => value,
        }
    }

    /// The child entries, or `None` for a leaf.
    #[must_use]
    pub fn children(&self) -> Option<&[MenuItem]> {
        match self {
            Self::Leaf { .. } => None,
            Self::Submenu { children, .. } => Some(children),
        }
    }

    /// Whether this item is a terminal choice.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Maximum nesting depth of this item: 1 for a leaf, 1 + deepest
    /// child for a submenu.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Submenu { children, .. } => {
                1 + children.iter().map(MenuItem::depth).max().unwrap_or(0)
            }
        }
    }

    /// Follow a sequence of child indices from this item.
    ///
    /// An empty path returns `self`; a path step into a leaf or past the
    /// end of a sibling set returns `None`.
    #[must_use]
    pub fn at_path(&self, path: &[usize]) -> Option<&MenuItem> {
        let mut current = self;
        for &index in path {
            current = current.children()?.get(index)?;
        }
        Some(current)
    }
}

/// Maximum nesting depth across a sibling set. Zero for an empty set.
#[must_use]
pub fn items_depth(items: &[MenuItem]) -> usize {
    items.iter().map(MenuItem::depth).max().unwrap_or(0)
}

/// Validate a root sibling set against the level budget.
///
/// Rejects trees deeper than `max_levels`, empty submenus, and duplicate
/// values within any sibling set. Cycles are unrepresentable in an owned
/// tree, so only the depth bound is checked.
pub fn validate_items(items: &[MenuItem], max_levels: usize) -> Result<(), CascadeError> {
    if max_levels == 0 {
        return Err(CascadeError::ZeroLevels);
    }
    let depth = items_depth(items);
    if depth > max_levels {
        return Err(CascadeError::DepthExceeded { depth, max_levels });
    }
    validate_siblings(items)
}

fn validate_siblings(items: &[MenuItem]) -> Result<(), CascadeError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.value()) {
            return Err(CascadeError::DuplicateValue {
                value: item.value().to_string(),
            });
        }
        if let Some(children) = item.children() {
            if children.is_empty() {
                return Err(CascadeError::EmptySubmenu {
                    value: item.value().to_string(),
                });
            }
            validate_siblings(children)?;
        }
    }
    Ok(())
}
