// src/ui/mod.rs
pub mod results;
pub mod upload;
