//! HTTP client module
//!
//! Thin transport layer over reqwest. Requests and responses are plain data;
//! non-2xx responses are surfaced unchanged for the assertion layer to
//! classify.

mod client;

pub use client::{HttpClient, HttpError, HttpRequest, HttpResponse};
