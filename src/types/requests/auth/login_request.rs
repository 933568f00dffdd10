use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct LoginRequest {
    pub email: String,

    pub password: String,
}
