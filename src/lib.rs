//! rusty-ro5: paste or upload SMILES lists, review them, and screen them
//! against Lipinski's Rule of Five through a remote descriptor service.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod service;
pub mod state;
pub mod ui;
