//! Vector index implementations and artifact I/O.

pub mod artifact;
mod flat;

pub use artifact::{load_answers, load_index, write_answers, write_index};
pub use flat::{squared_l2, FlatIndex};
