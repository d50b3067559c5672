use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub name: String,
    pub email: String,
    pub url: String,
    pub body: String,
    // 仅在评论被接受后由工作流盖时间戳
    pub created_at: Option<NaiveDateTime>,
    pub approved: bool,
}

impl Comment {
    // 表单字段缺失时回退为空串，构造本身不会失败
    pub fn from_form(values: &HashMap<String, String>) -> Self {
        let field = |key: &str| values.get(key).cloned().unwrap_or_default();
        Self {
            name: field("name"),
            email: field("email"),
            url: field("url"),
            body: field("comment"),
            created_at: None,
            approved: false,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptyField("email"));
        }
        if self.body.trim().is_empty() {
            return Err(ValidationError::EmptyField("comment"));
        }
        Ok(())
    }
}
