use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct AuthContext {
    pub admin_id: i64,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    // Expect "Bearer <token>"
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization format"))?;

    let claims = verify_token(token, &state.config.jwt_secret)?;

    // Attach context
    req.extensions_mut().insert(AuthContext { admin_id: claims.sub });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::sign_token;
    use crate::routes::tests::test_state;
    use axum::{body::{self, Body}, http::StatusCode, middleware, routing::get, Extension, Router};
    use tower::ServiceExt;

    async fn whoami(Extension(auth): Extension<AuthContext>) -> String {
        auth.admin_id.to_string()
    }

    fn app() -> Router {
        let state = test_state();
        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
            .with_state(state)
    }

    async fn call(header: Option<String>) -> (StatusCode, String) {
        let mut builder = Request::get("/whoami");
        if let Some(h) = header {
            builder = builder.header("Authorization", h);
        }
        let response = app()
            .oneshot(builder.body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let (status, body) = call(None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Missing Authorization header"));
    }

    #[tokio::test]
    async fn non_bearer_header_is_unauthorized() {
        let (status, _) = call(Some("Basic abc".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_token_reaches_the_handler_with_context() {
        let secret = test_state().config.jwt_secret.clone();
        let token = sign_token(7, "admin@shop.co", "Admin", &secret, 1).unwrap();
        let (status, body) = call(Some(format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "7");
    }

    #[tokio::test]
    async fn token_signed_with_another_secret_is_unauthorized() {
        let token = sign_token(7, "admin@shop.co", "Admin", "not-the-secret", 1).unwrap();
        let (status, _) = call(Some(format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
