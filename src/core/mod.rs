// src/core/mod.rs
pub mod copilot;
pub mod engine;
