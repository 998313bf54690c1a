//! PostgreSQL adapter for PostRepository

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{NewPost, Post};
use crate::domain::ports::{window_start, PostRepository};
use crate::entity::posts;
use crate::error::DomainError;

/// PostgreSQL implementation of PostRepository
pub struct PostgresPostRepository {
    db: DatabaseConnection,
}

impl PostgresPostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Hand the connection back, e.g. to read a mock transaction log
    #[cfg(test)]
    pub fn into_db(self) -> DatabaseConnection {
        self.db
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn save(&self, post: &NewPost) -> Result<Post, DomainError> {
        let model = posts::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(post.title.clone()),
            content: Set(post.content.clone()),
            created_at: Set(post.created_at.fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_random_order(&self) -> Result<Vec<Post>, DomainError> {
        let results = posts::Entity::find()
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_recent_window(
        &self,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Result<Vec<Post>, DomainError> {
        let mut query = posts::Entity::find();
        if let Some(cutoff) = window_start(now, window) {
            query = query.filter(posts::Column::CreatedAt.gte(cutoff.fixed_offset()));
        }

        let results = query
            .order_by_desc(posts::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_all_chronological(&self) -> Result<Vec<Post>, DomainError> {
        let results = posts::Entity::find()
            .order_by_asc(posts::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Post {
            id: model.id.into(),
            title: model.title,
            content: model.content,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
