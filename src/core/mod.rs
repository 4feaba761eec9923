//! Configuration and domain types shared by the client and the web layer

pub mod config;
pub mod models;
