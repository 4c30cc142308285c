#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod body_part;
mod error;
mod exercise;
mod pagination;
mod search;
mod service;

pub use body_part::*;
pub use error::*;
pub use exercise::*;
pub use pagination::*;
pub use search::*;
pub use service::*;
