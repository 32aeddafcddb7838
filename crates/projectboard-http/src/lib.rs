//! HTTP plumbing for projectboard
//!
//! A small, mockable layer over `reqwest`: build a client from [`HttpConfig`]
//! (bounded timeouts, `User-Agent`, optional proxy) and POST JSON with
//! [`HttpClientTrait::post_json`]. Transport failures, non-2xx replies and
//! undecodable bodies all come back as [`HttpError`].

pub mod client;
pub mod config;
pub mod error;

pub use client::{shared_client, HttpClient, HttpClientTrait};
pub use config::HttpConfig;
pub use error::{HttpError, Result};

pub use reqwest::{header, StatusCode};
