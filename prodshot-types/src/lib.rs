//! Shared types for the prodshot client.

mod base64_serde;

pub mod content;
pub mod request;
pub mod response;
pub mod run;
