//! Request seam trait.

/// The dispatcher's view of an incoming request.
///
/// A hosting framework's request type implements this by exposing its raw
/// method token. The token arrives with whatever casing the transport
/// produced — normalization is the dispatcher's responsibility, never the
/// request's — and may be absent entirely, which the dispatcher resolves by
/// terminating the response without writing anything.
///
/// Everything else about the request is opaque: it is moved into the
/// selected handler unchanged.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be dispatched on",
    label = "missing `Request` implementation",
    note = "Implement `Request` by exposing the raw HTTP method token via `method_token`."
)]
pub trait Request: Send + 'static {
    /// The raw method token, if the transport produced one.
    fn method_token(&self) -> Option<&str>;
}
