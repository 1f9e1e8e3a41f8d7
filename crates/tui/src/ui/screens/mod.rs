//! Per-screen rendering.

pub mod courses;
pub mod dashboard;
pub mod profile;
