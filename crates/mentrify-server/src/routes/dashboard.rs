use axum::{Extension, Json};

use crate::models::User;
use crate::services::dashboard::{self, Dashboard};

pub async fn show(Extension(user): Extension<User>) -> Json<Dashboard> {
    Json(dashboard::for_user(&user))
}
