#![forbid(unsafe_code)]

//! Nested cascading-menu controller.
//!
//! A cascade is an arbitrarily deep chain of context menus: selecting an
//! item at level *N* may open a child menu at level *N + 1* anchored to
//! that item, while every level above stays open. This crate owns the
//! state-machine side of that interaction; drawing triggers and floating
//! panels is the integration's job.
//!
//! # Usage
//!
//! ```
//! use cascade_core::geometry::Rect;
//! use cascade_menu::{AnchorRef, CascadeAction, CascadeMenu, MenuItem};
//!
//! let items = vec![
//!     MenuItem::leaf("open"),
//!     MenuItem::submenu("recent", vec![MenuItem::leaf("a.txt"), MenuItem::leaf("b.txt")]),
//! ];
//! let mut menu = CascadeMenu::new(items, 2).unwrap();
//!
//! // Trigger button clicked: the root menu opens at level 0.
//! menu.open_root(AnchorRef::new(1, Rect::new(0, 0, 8, 1))).unwrap();
//! assert_eq!(menu.depth(), 1);
//!
//! // "recent" clicked: its submenu opens at level 1.
//! menu.select(0, 1, AnchorRef::new(2, Rect::new(0, 2, 8, 1))).unwrap();
//! assert_eq!(menu.depth(), 2);
//!
//! // "a.txt" clicked: a leaf, so the whole cascade collapses.
//! let action = menu.select(1, 0, AnchorRef::new(3, Rect::new(8, 2, 8, 1))).unwrap();
//! assert_eq!(action, Some(CascadeAction::Selected { value: "a.txt".into() }));
//! assert_eq!(menu.depth(), 0);
//! ```
//!
//! # Modules
//!
//! - [`model`]: the immutable option tree
//! - [`anchor`]: per-level anchor/option state snapshots
//! - [`controller`]: the interaction dispatcher and close-propagation policy
//! - [`view`]: the contract consumed by a rendering layer
//! - [`error`]: precondition and configuration errors

pub mod anchor;
pub mod controller;
pub mod error;
pub mod model;
pub mod view;

pub use anchor::{AnchorId, AnchorRef, AnchorState, LevelEntry};
pub use controller::{CascadeAction, CascadeMenu, MenuEvent};
pub use error::CascadeError;
pub use model::MenuItem;
pub use view::LevelView;
