// src/storage/mod.rs
pub mod inventory;
pub mod transactions;
