//! Response seam trait.

/// The dispatcher's view of an outgoing response.
///
/// A mutable, single-use sink covering the three operations the dispatcher
/// itself performs: the built-in fallback sets a status, writes a body, and
/// terminates; the missing-method policy terminates without writing.
/// Enforcing the write-then-end discipline (and anything richer — headers,
/// streaming, content negotiation) is the hosting framework's concern.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot receive a dispatched response",
    label = "missing `Response` implementation",
    note = "Implement `Response` by exposing `set_status`, `write`, and `end`."
)]
pub trait Response: Send + 'static {
    /// Set the HTTP status code.
    fn set_status(&mut self, status: u16);

    /// Append text to the response body.
    fn write(&mut self, body: &str);

    /// Terminate the response.
    fn end(&mut self);
}
