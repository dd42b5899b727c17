use serde::Deserialize;

use crate::utils::text::non_blank;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl SearchParams {
    /// At least one of `title` / `author` carries a non-whitespace value.
    pub fn has_terms(&self) -> bool {
        non_blank(self.title.as_deref()).is_some() || non_blank(self.author.as_deref()).is_some()
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
