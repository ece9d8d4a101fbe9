//! Domain ports
//!
//! Trait seams between the retrieval core and its external
//! collaborators (embedding model, prebuilt vector indexes).

mod encoder;
mod index;

pub use encoder::QueryEncoder;
pub use index::{Neighbor, VectorIndex};
