//! Identity seam for the external auth collaborator.
//!
//! Authentication itself is a black box that lives in front of this
//! service: the fronting proxy verifies the session and forwards the
//! caller's identity in the `x-shopfront-user` header. `attach_identity`
//! translates that trusted header into a [`CurrentUser`] request
//! extension; handlers consume it through the [`RequireAuth`] extractor.
//!
//! The header is only trustworthy because the service binds behind the
//! proxy - never expose this port directly.

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use shopfront_core::UserId;

use crate::error::AppError;

/// Header carrying the verified identity, set by the auth proxy.
pub const IDENTITY_HEADER: &str = "x-shopfront-user";

/// The verified identity of the calling user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    /// Identity reference recorded as `owner` on created stores.
    pub id: UserId,
}

/// Translate the trusted identity header into a request extension.
///
/// Requests without a parseable identity pass through without an
/// extension; `RequireAuth` rejects them at extraction time so that
/// unauthenticated routes (health checks) remain reachable.
pub async fn attach_identity(mut req: Request, next: Next) -> Response {
    let user = req
        .headers()
        .get(IDENTITY_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.parse::<i32>().ok())
        .map(|id| CurrentUser {
            id: UserId::new(id),
        });

    if let Some(user) = user {
        req.extensions_mut().insert(user);
    }

    next.run(req).await
}

/// Extractor that requires an authenticated identity.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(user): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", user.id)
/// }
/// ```
pub struct RequireAuth(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .map(Self)
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    async fn whoami(RequireAuth(user): RequireAuth) -> String {
        user.id.to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(axum::middleware::from_fn(attach_identity))
    }

    #[tokio::test]
    async fn test_identity_header_attaches_current_user() {
        let response = app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header(IDENTITY_HEADER, "42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"42");
    }

    #[tokio::test]
    async fn test_missing_identity_is_unauthorized() {
        let response = app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Authentication required");
    }

    #[tokio::test]
    async fn test_garbage_identity_is_unauthorized() {
        let response = app()
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header(IDENTITY_HEADER, "not-a-number")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
