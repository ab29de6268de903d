//! Run state: the bracket accumulator and its snapshot rows.

pub mod bracket;
pub mod standing;
