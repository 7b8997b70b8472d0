//! Built-in fallback behavior.

use svara_core::{Request, Response};

/// Body of the built-in 405 response, without a trailing newline.
pub const METHOD_NOT_ALLOWED_BODY: &str = "Method not allowed.";

/// The handler that answers requests whose method has no configured entry
/// when no user fallback was supplied.
///
/// Sets status `405`, writes [`METHOD_NOT_ALLOWED_BODY`] verbatim, and
/// terminates the response. The request is dropped unread.
///
/// This is an ordinary handler, so it can also be registered explicitly —
/// for example as the `fallback` of an outer dispatcher.
pub async fn default_fallback<Req, Res>(_req: Req, mut res: Res)
where
    Req: Request,
    Res: Response,
{
    res.set_status(405);
    res.write(METHOD_NOT_ALLOWED_BODY);
    res.end();
}

#[cfg(test)]
mod tests {
    use super::{METHOD_NOT_ALLOWED_BODY, default_fallback};
    use crate::testing::{TestRequest, TestResponse};

    #[tokio::test]
    async fn test_default_fallback_response_shape() {
        let res = TestResponse::new();
        default_fallback(TestRequest::new("GET"), res.clone()).await;

        assert_eq!(res.status(), Some(405));
        assert_eq!(res.body(), METHOD_NOT_ALLOWED_BODY);
        assert!(res.ended());
    }
}
