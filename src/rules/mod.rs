//! Game rules for Renju
//!
//! This module implements the rule engine:
//! - Forbidden moves for Black (double-three, double-four, overline)
//! - Opening shape classification for the first three stones
//! - Win conditions (five in a row)

pub mod forbidden;
pub mod line;
pub mod opening;
pub mod patterns;
pub mod win;

// Re-exports for convenient access
pub use forbidden::{
    count_fours, count_open_threes, forbidden_kind, is_double_four, is_double_three, is_forbidden,
    is_four, is_open_three, is_overline, is_valid_move, ForbiddenKind, RESTRICTED,
};
pub use opening::{classify_opening, OpeningClassification, OpeningPattern};
pub use patterns::{Shape, FOURS, OPEN_THREES};
pub use win::{check_winner, find_winning_line, is_winning_move};
