//! Application orchestration — state, terminal event stream, and input handling.

pub mod event;
pub mod handler;
pub mod state;
