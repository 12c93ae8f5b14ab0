//! Gist API data model and client
//!
//! `types` defines the request payload and response resource shapes; `client`
//! translates each logical Gist operation into exactly one HTTP call.

mod client;
mod types;

pub use client::GistClient;
pub use types::{ApiErrorBody, ApiErrorDetail, Gist, GistFileInfo, GistPayload};
