use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use models::blog::{BlogPatch, BlogPost, BlogStats, BlogStatus, CreateBlogPost};

use crate::errors::ServiceError;
use crate::store::EntityStore;

/// Blog content operations as seen by the HTTP layer.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn list(&self, published_only: bool) -> Vec<BlogPost>;
    async fn get(&self, id: u64) -> Result<BlogPost, ServiceError>;
    async fn create(&self, input: CreateBlogPost) -> BlogPost;
    async fn update(&self, id: u64, patch: BlogPatch) -> Result<BlogPost, ServiceError>;
    async fn delete(&self, id: u64) -> Result<(), ServiceError>;
    async fn stats(&self) -> BlogStats;
}

/// CRUD and aggregate statistics over blog posts.
#[derive(Clone)]
pub struct BlogService {
    store: Arc<EntityStore<BlogPost>>,
}

impl BlogService {
    pub fn new(store: Arc<EntityStore<BlogPost>>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    /// All posts in insertion order, optionally filtered to published ones.
    pub async fn list(&self, published_only: bool) -> Vec<BlogPost> {
        let posts = self.store.all().await;
        if published_only {
            posts.into_iter().filter(|p| p.status == BlogStatus::Published).collect()
        } else {
            posts
        }
    }

    pub async fn get(&self, id: u64) -> Result<BlogPost, ServiceError> {
        self.store
            .find(id)
            .await
            .ok_or_else(|| ServiceError::not_found("Blog post"))
    }

    /// Assigns a fresh id, stamps today's date, zeroes the view counter.
    /// Status defaults to draft unless the caller supplied one.
    pub async fn create(&self, input: CreateBlogPost) -> BlogPost {
        let id = self.store.next_id().await;
        let post = BlogPost {
            id,
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
            author: input.author,
            category: input.category,
            image: input.image,
            read_time: input.read_time,
            date: models::today(),
            status: input.status,
            views: 0,
        };
        self.store.insert(post.clone()).await;
        debug!(id, "blog post inserted");
        post
    }

    /// Shallow merge; fields absent from the patch keep their current value.
    pub async fn update(&self, id: u64, patch: BlogPatch) -> Result<BlogPost, ServiceError> {
        self.store
            .replace(id, |post| patch.apply(post))
            .await
            .ok_or_else(|| ServiceError::not_found("Blog post"))
    }

    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        if self.store.remove(id).await {
            debug!(id, "blog post removed");
            Ok(())
        } else {
            Err(ServiceError::not_found("Blog post"))
        }
    }

    /// Full-collection scan; nothing is cached.
    pub async fn stats(&self) -> BlogStats {
        let posts = self.store.all().await;
        BlogStats {
            total: posts.len(),
            published: posts.iter().filter(|p| p.status == BlogStatus::Published).count(),
            draft: posts.iter().filter(|p| p.status == BlogStatus::Draft).count(),
            total_views: posts.iter().map(|p| p.views).sum(),
        }
    }
}

#[async_trait]
impl ContentStore for BlogService {
    async fn list(&self, published_only: bool) -> Vec<BlogPost> { self.list(published_only).await }
    async fn get(&self, id: u64) -> Result<BlogPost, ServiceError> { self.get(id).await }
    async fn create(&self, input: CreateBlogPost) -> BlogPost { self.create(input).await }
    async fn update(&self, id: u64, patch: BlogPatch) -> Result<BlogPost, ServiceError> {
        self.update(id, patch).await
    }
    async fn delete(&self, id: u64) -> Result<(), ServiceError> { self.delete(id).await }
    async fn stats(&self) -> BlogStats { self.stats().await }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> Arc<BlogService> {
        BlogService::new(EntityStore::new())
    }

    fn draft_input(title: &str) -> CreateBlogPost {
        CreateBlogPost {
            title: title.into(),
            excerpt: "E".into(),
            content: "C".into(),
            author: "A".into(),
            category: "Web Design".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_without_status_yields_fresh_draft() {
        let svc = service();
        let first = svc.create(draft_input("T")).await;

        assert_eq!(first.status, BlogStatus::Draft);
        assert_eq!(first.views, 0);
        assert_eq!(first.date, models::today());
        assert_eq!(first.title, "T");

        let second = svc.create(draft_input("T2")).await;
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn created_ids_are_pairwise_distinct_and_increasing() {
        let svc = service();
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(svc.create(draft_input(&format!("post {}", i))).await.id);
        }
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[tokio::test]
    async fn update_with_status_only_leaves_other_fields_untouched() {
        let svc = service();
        let created = svc.create(draft_input("T")).await;

        let patch = BlogPatch { status: Some(BlogStatus::Published), ..Default::default() };
        let merged = svc.update(created.id, patch).await.expect("update ok");

        assert_eq!(merged.status, BlogStatus::Published);
        assert_eq!(merged.title, created.title);
        assert_eq!(merged.excerpt, created.excerpt);
        assert_eq!(merged.content, created.content);
        assert_eq!(merged.date, created.date);
        assert_eq!(merged.views, created.views);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let svc = service();
        let err = svc.update(42, BlogPatch::default()).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("Blog post"));
    }

    #[tokio::test]
    async fn published_filter_keeps_only_published_in_order() {
        let svc = service();
        let a = svc.create(draft_input("a")).await;
        svc.create(draft_input("b")).await;
        let c = svc.create(draft_input("c")).await;

        for id in [a.id, c.id] {
            let patch = BlogPatch { status: Some(BlogStatus::Published), ..Default::default() };
            svc.update(id, patch).await.expect("publish");
        }

        let published = svc.list(true).await;
        let ids: Vec<u64> = published.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
        assert!(published.iter().all(|p| p.status == BlogStatus::Published));

        // unfiltered list still returns everything, drafts included
        assert_eq!(svc.list(false).await.len(), 3);
    }

    #[tokio::test]
    async fn stats_totals_add_up() {
        let svc = service();
        for i in 0..4 {
            let created = svc.create(draft_input(&format!("p{}", i))).await;
            if i % 2 == 0 {
                let patch = BlogPatch {
                    status: Some(BlogStatus::Published),
                    views: Some(10 * (i as u64 + 1)),
                    ..Default::default()
                };
                svc.update(created.id, patch).await.expect("publish");
            }
        }

        let stats = svc.stats().await;
        assert_eq!(stats.total, 4);
        assert_eq!(stats.total, stats.published + stats.draft);
        assert_eq!(stats.published, 2);
        assert_eq!(stats.total_views, 10 + 30);
    }

    #[tokio::test]
    async fn delete_reports_not_found_on_first_and_repeated_misses() {
        let svc = service();
        assert!(svc.delete(7).await.is_err());
        assert!(svc.delete(7).await.is_err());

        let created = svc.create(draft_input("T")).await;
        svc.delete(created.id).await.expect("delete ok");
        assert!(svc.get(created.id).await.is_err());
        assert!(svc.delete(created.id).await.is_err());
    }
}
