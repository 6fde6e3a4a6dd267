//! PostgreSQL blog post repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set};
use uuid::Uuid;

use quill_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use quill_core::error::RepoError;
use quill_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::{PostgresBaseRepository, query_err};

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .order_by_asc(blog_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let active: blog_post::ActiveModel = BlogPost::create(post).into();
        let model = active.insert(&self.db).await.map_err(query_err)?;

        tracing::debug!(post_id = %model.id, "Inserted blog post");
        Ok(model.into())
    }

    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let created: Vec<BlogPost> = posts.into_iter().map(BlogPost::create).collect();
        let models = created
            .iter()
            .cloned()
            .map(blog_post::ActiveModel::from);

        BlogPostEntity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(query_err)?;

        tracing::debug!(count = created.len(), "Inserted blog post batch");
        Ok(created)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: BlogPostPatch,
    ) -> Result<Option<BlogPost>, RepoError> {
        let Some(existing) = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
        else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(existing.into()));
        }

        // Only the supplied columns are marked as set, so the UPDATE leaves the rest alone.
        let mut active = existing.into_active_model();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(author) = patch.author {
            active.author = Set(author.into());
        }
        if let Some(content) = patch.content {
            active.content = Set(content);
        }

        // A delete may land between the read and the write.
        match active.update(&self.db).await {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(query_err(e)),
        }
    }

    async fn clear(&self) -> Result<u64, RepoError> {
        let result = BlogPostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        tracing::warn!(removed = result.rows_affected, "Cleared blog posts");
        Ok(result.rows_affected)
    }
}
