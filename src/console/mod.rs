//! Console collaborators: line-based input and plain-text rendering.

mod input;
mod render;

pub use input::{InputReader, LineInput, Reply, parse_choice};
pub use render::{Renderer, TextRenderer, View};
