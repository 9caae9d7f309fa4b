//! Core client crate for prodshot.
//!
//! Turns a product photo plus a background description (or reference image)
//! into one or more AI-composited commercial shots by driving the Gemini
//! `generateContent` image models, one sequential request per image.

pub mod client;
pub mod credentials;
pub mod data_url;
pub mod error;
pub mod models;
pub mod output;
pub mod presets;
pub mod request;
pub mod runs;

#[cfg(test)]
mod test_support;

pub use prodshot_types as types;

pub use client::{Client, ClientBuilder, HttpOptions};
pub use error::{Error, Result};
