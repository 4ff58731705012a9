//! Shared building blocks: error types, the fault model, and XML helpers.

mod error;
mod fault;
pub mod xml;

pub use error::*;
pub use fault::*;
pub use xml::{Element, MAX_DEPTH, NodePath, parse_response, read_body};
