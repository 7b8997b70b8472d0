//! # svara-core
//!
//! Core traits for the Svara HTTP method dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! framework adapters that don't need the dispatcher itself: it defines the
//! seams between Svara and a hosting web framework, and nothing else.
//!
//! # The Three Seams
//!
//! ## Seam 1: The request ([`Request`])
//!
//! The dispatcher reads exactly one thing from an incoming request: its raw
//! method token, which may be absent. Everything else about the request is
//! opaque and flows through to handlers untouched.
//!
//! ## Seam 2: The response ([`Response`])
//!
//! A mutable, single-use sink. The dispatcher only needs to set a status,
//! write a body, and terminate — the three operations the built-in fallback
//! and the missing-method policy require.
//!
//! ## Seam 3: The handler ([`Handler`])
//!
//! An async function over an owned `(Request, Response)` pair. Plain async
//! closures implement it via a blanket impl; [`DynHandler`] is the
//! object-safe bridge used to store handlers in a dispatch table.
//!
//! # Method Tags
//!
//! [`Method`] is the closed set of dispatchable HTTP methods as an enum, with
//! an explicit [`Method::Unrecognized`] catch-all so an unsupported token is
//! a normal routing outcome rather than an error.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod method;
mod request;
mod response;

// Re-exports
pub use error::UnknownMethod;
pub use handler::{BoxHandler, DynHandler, Handler, HandlerResult};
pub use method::Method;
pub use request::Request;
pub use response::Response;
