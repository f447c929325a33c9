use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/lessons`.
/// The backend assigns `id` and `order`; the client supplies the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLessonRequest {
    pub semester: String,
    pub subject: String,
    pub title: String,
    pub url: String,
}

/// Request payload for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
