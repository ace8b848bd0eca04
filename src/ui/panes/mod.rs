//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`structure`]: The current snapshot with highlighted and marked elements
//! - [`steps`]: Every step of the loaded run with the playback cursor
//! - [`narration`]: Description and code annotation of the current step
//! - [`status`]: Status bar with keybindings and playback state, and the command prompt
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function that only reads
//! what it is given; scroll offsets are the one piece of state passed in
//! mutably.

pub mod narration;
pub mod status;
pub mod steps;
pub mod structure;

// Re-export render functions for convenience
pub use narration::{render_narration_pane, NarrationRenderData};
pub use status::{render_input_line, render_status_bar, StatusRenderData};
pub use steps::render_steps_pane;
pub use structure::render_structure_pane;
