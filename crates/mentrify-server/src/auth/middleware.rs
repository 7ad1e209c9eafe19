use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::auth::{self, client};
use crate::error::AppError;
use crate::routes::AppState;
use crate::storage::LocalStorage;

/// Resolve the caller's client id (issuing one on first contact) and hand
/// handlers a `LocalStorage` scoped to it.
pub async fn attach_storage(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let existing = jar
        .get(client::CLIENT_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|id| client::is_well_formed(id));

    let (jar, client_id) = match existing {
        Some(id) => (jar, id),
        None => {
            let id = client::generate_client_id();
            tracing::debug!(client = %id, "Issued new client id");
            let cookie = client::build_client_cookie(id.clone(), state.config.secure_cookies);
            (jar.add(cookie), id)
        }
    };

    request
        .extensions_mut()
        .insert(LocalStorage::new(state.storage.clone(), client_id));

    let response = next.run(request).await;
    (jar, response).into_response()
}

/// Routes that need a signed-in user. Must run inside `attach_storage`.
pub async fn require_user(mut request: Request, next: Next) -> Result<Response, AppError> {
    let storage = request
        .extensions()
        .get::<LocalStorage>()
        .cloned()
        .ok_or(AppError::Unauthorized)?;

    let user = auth::get_user(&storage)?.ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
