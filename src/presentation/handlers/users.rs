use axum::{Extension, Json};

use crate::domain::User;

pub async fn read_users_me_handler(Extension(user): Extension<User>) -> Json<User> {
    Json(user)
}
