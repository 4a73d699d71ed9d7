// src/document/mod.rs
mod document;

pub use self::document::{LayoutDocument, LayoutInput};
