use serde::{Deserialize, Serialize};

/// Publish state of a blog post. New posts start as drafts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
}

/// A blog post as stored and served. Field names on the wire are camelCase
/// (`readTime`), matching what the admin front end submits and renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub image: String,
    pub read_time: String,
    /// Calendar date (`YYYY-MM-DD`), stamped at creation.
    pub date: String,
    pub status: BlogStatus,
    /// View counter. Never incremented by the read path.
    pub views: u64,
}

/// Creation input. Only known fields are accepted; presence is enforced by the
/// admin UI, so every text field defaults to empty rather than erroring.
/// `id`, `date` and `views` are server-assigned and cannot be supplied.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub status: BlogStatus,
}

/// Partial update. `Some` fields overwrite, `None` fields are preserved;
/// unknown JSON keys are dropped by construction. `date` is only touched
/// when the caller sends it explicitly.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub read_time: Option<String>,
    pub date: Option<String>,
    pub status: Option<BlogStatus>,
    pub views: Option<u64>,
}

impl BlogPatch {
    /// Shallow merge into an existing record.
    pub fn apply(self, post: &mut BlogPost) {
        if let Some(v) = self.title { post.title = v; }
        if let Some(v) = self.excerpt { post.excerpt = v; }
        if let Some(v) = self.content { post.content = v; }
        if let Some(v) = self.author { post.author = v; }
        if let Some(v) = self.category { post.category = v; }
        if let Some(v) = self.image { post.image = v; }
        if let Some(v) = self.read_time { post.read_time = v; }
        if let Some(v) = self.date { post.date = v; }
        if let Some(v) = self.status { post.status = v; }
        if let Some(v) = self.views { post.views = v; }
    }
}

/// Aggregate counts over the blog collection, computed on demand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStats {
    pub total: usize,
    pub published: usize,
    pub draft: usize,
    pub total_views: u64,
}
