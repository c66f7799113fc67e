pub mod commands;
pub mod interface;
pub mod node;
pub mod output;
pub mod tree;

pub use commands::TilingCommand;
pub use interface::{HeadlessInterface, TilingInterface};
pub use node::{NodeGraph, NodeKey};
pub use output::{FloatingWindow, Output, Workspace};
pub use tree::{TilingOptions, TilingWindowTree, WindowSpecification};
