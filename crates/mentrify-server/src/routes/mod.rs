mod applications;
mod auth;
mod booking;
mod dashboard;
mod mentors;
mod profiles;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

use crate::auth::middleware::{attach_storage, require_user};
use crate::config::Config;
use crate::storage::StorageBackend;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn StorageBackend>,
    pub config: Config,
}

async fn health() -> &'static str {
    "ok"
}

pub fn create_router(state: AppState) -> Router {
    // Auth routes: 10 requests per 60 seconds per IP
    let auth_governor = GovernorConfigBuilder::default()
        .per_second(6)
        .burst_size(10)
        .finish()
        .expect("auth rate limit config is valid");

    // Health checks: no client cookie, no rate limit
    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/api/v1/health", get(health));

    // Auth routes
    let auth_routes = Router::new()
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .layer(GovernorLayer::new(Arc::new(auth_governor)));

    let public = Router::new()
        // Mentor directory
        .route("/api/v1/mentors", get(mentors::list))
        .route("/api/v1/mentors/{id}", get(mentors::get))
        // Booking wizard
        .route("/api/v1/booking/options", get(booking::options))
        .route("/api/v1/mentors/{id}/booking/confirm", post(booking::confirm))
        .route("/api/v1/mentors/{id}/booking/pay", post(booking::pay))
        // Become a mentor
        .route("/api/v1/mentor-applications", post(applications::submit));

    let protected = Router::new()
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/dashboard", get(dashboard::show))
        // Mentor profile + availability editor
        .route(
            "/api/v1/profiles/mentors/{id}",
            get(profiles::get_mentor)
                .put(profiles::save_mentor)
                .delete(profiles::reset_mentor),
        )
        .route("/api/v1/profiles/mentors/{id}/slots", post(profiles::add_slot))
        .route(
            "/api/v1/profiles/mentors/{id}/slots/{index}",
            put(profiles::update_slot).delete(profiles::remove_slot),
        )
        .route(
            "/api/v1/profiles/mentors/{id}/slots/{index}/duplicate",
            post(profiles::duplicate_slot),
        )
        .route(
            "/api/v1/profiles/mentors/{id}/recurring",
            put(profiles::update_recurring),
        )
        .route(
            "/api/v1/profiles/mentors/{id}/exceptions",
            post(profiles::add_exception),
        )
        .route(
            "/api/v1/profiles/mentors/{id}/exceptions/{index}",
            delete(profiles::remove_exception),
        )
        // Mentee profile
        .route(
            "/api/v1/profiles/mentees/{id}",
            get(profiles::get_mentee)
                .put(profiles::save_mentee)
                .delete(profiles::reset_mentee),
        )
        .route_layer(middleware::from_fn(require_user));

    let client_scoped = Router::new()
        .merge(auth_routes)
        .merge(public)
        .merge(protected)
        .layer(middleware::from_fn_with_state(state.clone(), attach_storage));

    Router::new()
        .merge(health_routes)
        .merge(client_scoped)
        .with_state(state)
}
