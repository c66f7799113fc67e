//! The TilingWindowTree: one workspace's lanes and leaves, the selection,
//! and every command the host can issue against them.

mod lifecycle;
mod navigation;
mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests;
