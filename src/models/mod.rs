// src/models/mod.rs

pub mod page;
pub mod session;
pub mod user;
