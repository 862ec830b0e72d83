//! HTTP contract with the tarjuma backend.
//!
//! The backend does all of the actual translation work; this crate only
//! knows its five endpoints, the wire types they speak, and how to reach
//! them through the browser `fetch` API.

pub mod client;
pub mod types;

pub use client::ApiError;
pub use types::{FileTranslateResponse, Language, TranslateRequest, TranslateResponse};
