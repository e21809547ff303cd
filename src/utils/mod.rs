// src/utils/mod.rs
pub mod money;
