//! src/domain/mod.rs
mod contact;
pub use contact::*;
