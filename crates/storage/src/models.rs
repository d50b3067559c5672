use chrono::NaiveDateTime;
use domain::{Comment, Post};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct SqlPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

impl From<SqlPost> for Post {
    fn from(sql: SqlPost) -> Self {
        Post {
            id: sql.id,
            title: sql.title,
            slug: sql.slug,
        }
    }
}

// 落库后的评论行，带主键与所属文章
#[derive(Debug, FromRow)]
pub struct CommentRecord {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub url: String,
    pub body: String,
    pub approved: bool,
    pub created_at: NaiveDateTime,
}

impl From<CommentRecord> for Comment {
    fn from(row: CommentRecord) -> Self {
        Comment {
            name: row.name,
            email: row.email,
            url: row.url,
            body: row.body,
            created_at: Some(row.created_at),
            approved: row.approved,
        }
    }
}
