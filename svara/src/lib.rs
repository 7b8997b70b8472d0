//! # svara - HTTP Method Dispatch
//!
//! `svara` turns a mapping from HTTP methods to handlers into a single
//! handler: the returned dispatcher inspects an incoming request's method
//! and forwards the request/response pair to the matching entry, or to a
//! fallback (yours, or the built-in 405 responder) when nothing matches.
//!
//! The hosting web framework stays in charge of everything else — parsing,
//! path routing, middleware, transport. Svara plugs into it through three
//! seam traits: [`Request`], [`Response`], and [`Handler`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use svara::MethodDispatcher;
//!
//! let dispatcher = MethodDispatcher::builder()
//!     .get(|req: MyRequest, mut res: MyResponse| async move {
//!         res.write("hello");
//!         res.end();
//!     })
//!     .post(handle_create)
//!     .build();
//!
//! // Register `dispatcher` wherever the framework expects a handler;
//! // requests with no matching entry get the built-in 405 response.
//! framework.route("/items", dispatcher);
//! ```
//!
//! ## Dispatch Policy
//!
//! Per request, exactly one of four things happens:
//!
//! 1. The method token is absent: the response is terminated with no status
//!    or body, and nothing is invoked.
//! 2. The token names a configured method (case-insensitively): that handler
//!    runs, receiving both arguments unchanged.
//! 3. Nothing is configured for the token and a `fallback` was supplied: the
//!    fallback runs.
//! 4. Otherwise the built-in fallback answers `405` with the body
//!    `Method not allowed.`.
//!
//! The dispatcher itself never fails; handler errors and panics propagate
//! untouched to whatever invoked the dispatch.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;
pub mod fallback;
pub mod testing;

pub use dispatcher::{DispatcherBuilder, MethodDispatcher};

pub use svara_core::{
    // Handler
    BoxHandler,
    DynHandler,
    Handler,
    HandlerResult,
    // Method tags
    Method,
    // Seams
    Request,
    Response,
    // Errors
    UnknownMethod,
};
