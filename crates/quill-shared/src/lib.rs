//! # Quill Shared
//!
//! Wire types exchanged between the blog API and its clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
