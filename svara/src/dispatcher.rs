//! The method dispatch table.
//!
//! [`MethodDispatcher`] is a fixed set of optional handler slots, one per
//! supported HTTP method, plus an optional user fallback. It is built once,
//! never mutated afterwards, and shared read-only across concurrent
//! dispatches; no synchronization is needed beyond the `Send + Sync` bounds
//! the boxed handlers already carry.

use crate::fallback;
use svara_core::{BoxHandler, Handler, Method, Request, Response};
use std::future::Future;

/// A dispatch table mapping HTTP methods to handlers.
///
/// Construct one with [`MethodDispatcher::builder`]. The result is itself a
/// [`Handler`], so it registers with a hosting framework anywhere an
/// ordinary handler would; which URL or path invokes it is entirely the
/// framework's decision.
///
/// An empty table is legal: every request then falls through to the
/// built-in 405 fallback (or terminates silently when the method token is
/// absent).
pub struct MethodDispatcher<Req, Res> {
    get: Option<BoxHandler<Req, Res>>,
    post: Option<BoxHandler<Req, Res>>,
    patch: Option<BoxHandler<Req, Res>>,
    put: Option<BoxHandler<Req, Res>>,
    delete: Option<BoxHandler<Req, Res>>,
    options: Option<BoxHandler<Req, Res>>,
    fallback: Option<BoxHandler<Req, Res>>,
}

impl<Req, Res> MethodDispatcher<Req, Res>
where
    Req: Request,
    Res: Response,
{
    /// Start building a dispatch table.
    #[must_use]
    pub fn builder() -> DispatcherBuilder<Req, Res> {
        DispatcherBuilder::new()
    }

    /// The configured slot for a method tag, if any.
    ///
    /// [`Method::Unrecognized`] has no slot by construction.
    fn slot(&self, method: Method) -> Option<&BoxHandler<Req, Res>> {
        match method {
            Method::Get => self.get.as_ref(),
            Method::Post => self.post.as_ref(),
            Method::Patch => self.patch.as_ref(),
            Method::Put => self.put.as_ref(),
            Method::Delete => self.delete.as_ref(),
            Method::Options => self.options.as_ref(),
            Method::Unrecognized => None,
        }
    }

    /// Dispatch one request/response exchange.
    ///
    /// Exactly one of four mutually exclusive branches runs:
    ///
    /// 1. No method token on the request: terminate the response, invoke
    ///    nothing.
    /// 2. Token tags a configured method: forward both arguments to that
    ///    handler and return its completion unchanged.
    /// 3. No configured slot, user fallback present: forward to the
    ///    fallback.
    /// 4. Otherwise: run [`fallback::default_fallback`] (405).
    ///
    /// No handler runs more than once per call, and failures from the
    /// selected handler propagate to the caller unmodified.
    pub async fn dispatch(&self, req: Req, mut res: Res) {
        let Some(token) = req.method_token() else {
            // It is unclear when a transport produces a request without a
            // method, but the seam allows it, so close the response rather
            // than guess a status.
            #[cfg(feature = "tracing")]
            tracing::debug!("request has no method token; terminating response");
            res.end();
            return;
        };

        let method = Method::from_token(token);

        match self.slot(method) {
            Some(handler) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%method, "dispatching to configured handler");
                handler.call_dyn(req, res).await;
            }
            None => match self.fallback.as_ref() {
                Some(user_fallback) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%method, "no configured handler; dispatching to user fallback");
                    user_fallback.call_dyn(req, res).await;
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%method, "no configured handler; answering 405");
                    fallback::default_fallback(req, res).await;
                }
            },
        }
    }
}

impl<Req, Res> Handler<Req, Res> for MethodDispatcher<Req, Res>
where
    Req: Request,
    Res: Response,
{
    type Output = ();

    fn call(&self, req: Req, res: Res) -> impl Future<Output = Self::Output> + Send {
        self.dispatch(req, res)
    }
}

/// Builder for [`MethodDispatcher`].
///
/// Each setter consumes and returns the builder; setting the same slot
/// twice replaces the earlier handler. [`build`] never fails — the table is
/// not validated, and every slot is optional.
///
/// [`build`]: DispatcherBuilder::build
pub struct DispatcherBuilder<Req, Res> {
    get: Option<BoxHandler<Req, Res>>,
    post: Option<BoxHandler<Req, Res>>,
    patch: Option<BoxHandler<Req, Res>>,
    put: Option<BoxHandler<Req, Res>>,
    delete: Option<BoxHandler<Req, Res>>,
    options: Option<BoxHandler<Req, Res>>,
    fallback: Option<BoxHandler<Req, Res>>,
}

macro_rules! slot_setter {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[must_use]
        pub fn $name<H>(mut self, handler: H) -> Self
        where
            H: Handler<Req, Res, Output = ()> + 'static,
        {
            self.$name = Some(Box::new(handler));
            self
        }
    };
}

impl<Req, Res> DispatcherBuilder<Req, Res>
where
    Req: Request,
    Res: Response,
{
    /// Create a builder with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            get: None,
            post: None,
            patch: None,
            put: None,
            delete: None,
            options: None,
            fallback: None,
        }
    }

    slot_setter! {
        /// Set the handler for `GET` requests.
        get
    }
    slot_setter! {
        /// Set the handler for `POST` requests.
        post
    }
    slot_setter! {
        /// Set the handler for `PATCH` requests.
        patch
    }
    slot_setter! {
        /// Set the handler for `PUT` requests.
        put
    }
    slot_setter! {
        /// Set the handler for `DELETE` requests.
        delete
    }
    slot_setter! {
        /// Set the handler for `OPTIONS` requests.
        options
    }
    slot_setter! {
        /// Set the handler invoked when the requested method has no
        /// configured slot, overriding the built-in 405 response.
        fallback
    }

    /// Finalize the table.
    #[must_use]
    pub fn build(self) -> MethodDispatcher<Req, Res> {
        MethodDispatcher {
            get: self.get,
            post: self.post,
            patch: self.patch,
            put: self.put,
            delete: self.delete,
            options: self.options,
            fallback: self.fallback,
        }
    }
}

impl<Req, Res> Default for DispatcherBuilder<Req, Res>
where
    Req: Request,
    Res: Response,
{
    fn default() -> Self {
        Self::new()
    }
}
