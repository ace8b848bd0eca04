//! # Introduction
//!
//! algotty materialises six classic data structures (array, stack, queue,
//! linked list, binary search tree, graph), records algorithms over them as
//! replayable sequences of steps, and plays those steps back with VCR-style
//! controls in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Command text → Command parser → Operation ──▶ Structure
//!                               └▶ Algorithm ──▶ Run ──▶ Playback ──▶ Layout ──▶ TUI
//! ```
//!
//! 1. [`command`]: parses `push 5`, `bfs 1 3` and friends.
//! 2. [`structures`]: the live, authoritative structure and its mutators.
//! 3. [`algorithms`]: step-recording drivers producing an immutable
//!    [`snapshot::Run`] from a private copy of the structure.
//! 4. [`snapshot`]: steps, snapshots, runs and the step-limited recorder.
//! 5. [`playback`]: cursor, state machine and interval timer over a run.
//! 6. [`layout`]: abstract node/edge positions for a step.
//! 7. [`session`]: one structure plus its playback, the in-process API.
//! 8. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! Errors from every layer are [`errors::VizError`]; none are fatal.

pub mod algorithms;
pub mod command;
pub mod config;
pub mod errors;
pub mod layout;
pub mod playback;
pub mod session;
pub mod snapshot;
pub mod structures;
pub mod ui;
