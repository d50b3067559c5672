use crate::{models::SqlPost, Db};
use domain::Post;

impl Db {
    // 文章主数据由宿主博客系统维护，这里只做镜像登记
    pub async fn ensure_post(&self, post: &Post) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, title, slug)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO NOTHING
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.slug)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn find_post(&self, id: i64) -> anyhow::Result<Option<Post>> {
        let row = sqlx::query_as::<_, SqlPost>("SELECT id, title, slug FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }
}
