#![forbid(unsafe_code)]

//! Error types for configuration and precondition violations.
//!
//! Every controller operation is total over well-formed input; these
//! errors only surface caller bugs (bad level or item coordinates) and
//! rejected configurations (a tree that cannot fit the level budget).
//! Nothing here is transient or retryable.

use std::fmt;

/// Errors raised by menu construction and dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeError {
    /// A level index outside `[0, max_levels)` was supplied.
    LevelOutOfRange {
        /// The offending level.
        level: usize,
        /// The configured level budget.
        max_levels: usize,
    },
    /// An operation addressed a level that is not currently open.
    LevelNotOpen {
        /// The closed level.
        level: usize,
    },
    /// An item index past the end of a level's option list.
    ItemOutOfRange {
        /// The level whose options were indexed.
        level: usize,
        /// The offending index.
        index: usize,
        /// Number of options at that level.
        len: usize,
    },
    /// Opening this level would leave its parent closed.
    OrphanLevel {
        /// The level whose parent is closed.
        level: usize,
    },
    /// The option tree nests deeper than the level budget allows.
    DepthExceeded {
        /// Measured tree depth.
        depth: usize,
        /// The configured level budget.
        max_levels: usize,
    },
    /// Two siblings share the same value.
    DuplicateValue {
        /// The duplicated value.
        value: String,
    },
    /// A submenu with no entries.
    EmptySubmenu {
        /// The submenu's value.
        value: String,
    },
    /// A controller was configured with zero levels.
    ZeroLevels,
}

impl fmt::Display for CascadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelOutOfRange { level, max_levels } => {
                write!(f, "level {level} out of range (max_levels = {max_levels})")
            }
            Self::LevelNotOpen { level } => write!(f, "level {level} is not open"),
            Self::ItemOutOfRange { level, index, len } => {
                write!(f, "item index {index} out of range at level {level} (len = {len})")
            }
            Self::OrphanLevel { level } => {
                write!(f, "cannot open level {level}: level {} is closed", level - 1)
            }
            Self::DepthExceeded { depth, max_levels } => {
                write!(f, "option tree depth {depth} exceeds max_levels {max_levels}")
            }
            Self::DuplicateValue { value } => {
                write!(f, "duplicate value {value:?} within a sibling set")
            }
            Self::EmptySubmenu { value } => write!(f, "submenu {value:?} has no entries"),
            Self::ZeroLevels => write!(f, "max_levels must be at least 1"),
        }
    }
}

impl std::error::Error for CascadeError {}
