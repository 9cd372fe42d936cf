//! Network access.
//!
//! Everything goes through [`HttpClient`]: JSON lookups (release APIs and
//! download indexes) and streaming file downloads.

pub mod http;

pub use http::{parse_tag_name, HttpClient};
