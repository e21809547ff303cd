// src/connectors/mod.rs
pub mod openai;
pub mod traits;
