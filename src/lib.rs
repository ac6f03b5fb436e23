// src/lib.rs
// DOCUMENTATION: Library root shared by the server and the terminal client

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
