//! Handler traits.
//!
//! A handler is the terminal point of a dispatch: it receives a fully owned
//! `(Request, Response)` pair and performs request processing, possibly
//! asynchronously. The dispatcher never inspects a handler's work; it only
//! decides which handler runs and forwards the completion signal unchanged.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|req, res| async move { ... }` via the blanket impl
//! 2. **Struct implementation**: `impl Handler<Req, Res> for MyHandler`
//! 3. **Dispatch table storage**: boxed as [`BoxHandler`] via [`DynHandler`]

use std::{future::Future, pin::Pin};

/// A marker trait for the result of a handler execution.
pub trait HandlerResult: Send + 'static {}
impl<T: Send + 'static> HandlerResult for T {}

/// A function over an owned request/response pair.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses a native `impl Future` return for zero-cost static
/// dispatch. For storage in a dispatch table, use [`DynHandler`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle `({Req}, {Res})` requests",
    label = "missing `Handler<{Req}, {Res}>` implementation",
    note = "Handlers must implement `call` for the request/response pair, or be an async closure over it."
)]
pub trait Handler<Req, Res>: Send + Sync {
    /// The completion value of the handler, usually `()`.
    type Output: HandlerResult;

    /// Process the request, consuming both halves of the exchange.
    fn call(&self, req: Req, res: Res) -> impl Future<Output = Self::Output> + Send;
}

// Blanket impl for closures
impl<F, Req, Res, Out, Fut> Handler<Req, Res> for F
where
    Out: HandlerResult,
    F: Fn(Req, Res) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Out> + Send,
{
    type Output = Out;

    fn call(&self, req: Req, res: Res) -> impl Future<Output = Self::Output> + Send {
        (self)(req, res)
    }
}

/// Object-safe version of [`Handler`] for dynamic dispatch.
pub trait DynHandler<Req, Res>: Send + Sync {
    /// The completion value of the handler, usually `()`.
    type Output: HandlerResult;

    /// Process the request through a boxed future.
    fn call_dyn<'a>(
        &'a self,
        req: Req,
        res: Res,
    ) -> Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>
    where
        Req: 'a,
        Res: 'a;
}

impl<T, Req, Res> DynHandler<Req, Res> for T
where
    T: Handler<Req, Res>,
{
    type Output = T::Output;

    fn call_dyn<'a>(
        &'a self,
        req: Req,
        res: Res,
    ) -> Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>
    where
        Req: 'a,
        Res: 'a,
    {
        Box::pin(self.call(req, res))
    }
}

/// A boxed handler as stored in a dispatch table.
///
/// The default `()` output matches handlers whose only observable effect is
/// what they write to the response.
pub type BoxHandler<Req, Res, Out = ()> = Box<dyn DynHandler<Req, Res, Output = Out>>;
