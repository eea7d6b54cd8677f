//! Command implementations for the umc-template CLI

pub mod fetch;
pub mod helpers;
pub mod render;
pub mod vars;
pub mod version;
