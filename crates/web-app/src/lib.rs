#![warn(clippy::pedantic)]

pub mod log;
mod service;
mod settings;
pub mod viewport;

pub use service::*;
pub use settings::*;
