//! Core canvas model – grid, tools, undo and the canvas operations.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod canvas;
pub mod error;
pub mod grid;
pub mod tool;
pub mod undo;
