use crate::{models::CommentRecord, Db};
use chrono::NaiveDateTime;
use domain::Comment;
use tracing::debug;

impl Db {
    // 单条 INSERT：校验失败的评论不会产生半落库状态
    pub async fn insert_comment(
        &self,
        post_id: i64,
        c: &Comment,
        approved: bool,
        created_at: NaiveDateTime,
    ) -> anyhow::Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO comments (post_id, name, email, url, body, approved, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(post_id)
        .bind(&c.name)
        .bind(&c.email)
        .bind(&c.url)
        .bind(&c.body)
        .bind(approved)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(
            "Comment {} stored for post {} (approved={})",
            id, post_id, approved
        );
        Ok(id)
    }

    pub async fn list_comments(
        &self,
        post_id: i64,
        include_pending: bool,
    ) -> anyhow::Result<Vec<CommentRecord>> {
        let sql = if include_pending {
            r#"
            SELECT id, post_id, name, email, url, body, approved, created_at
            FROM comments
            WHERE post_id = ?
            ORDER BY created_at ASC
            "#
        } else {
            r#"
            SELECT id, post_id, name, email, url, body, approved, created_at
            FROM comments
            WHERE post_id = ? AND approved = TRUE
            ORDER BY created_at ASC
            "#
        };

        let rows = sqlx::query_as::<_, CommentRecord>(sql)
            .bind(post_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn count_pending(&self, post_id: i64) -> anyhow::Result<i64> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM comments WHERE post_id = ? AND approved = FALSE")
                .bind(post_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(row.0)
    }
}
