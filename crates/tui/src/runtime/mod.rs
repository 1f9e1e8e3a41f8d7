//! Process-level plumbing: startup wiring and terminal lifecycle.

pub mod startup;
pub mod terminal;
