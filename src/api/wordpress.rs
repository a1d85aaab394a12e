//! WordPress REST posts feed: `GET /wp-json/wp/v2/posts?per_page={n}`.

use serde::Deserialize;
use url::Url;

use crate::error::{Result, ToolError};
use crate::tools::news::NewsItem;

#[derive(Debug, Deserialize)]
pub(super) struct Post {
    id: u64,
    title: Rendered,
    excerpt: Rendered,
    link: String,
    /// Site-local publish time, `2026-10-14T18:30:00`.
    date: String,
}

#[derive(Debug, Deserialize)]
struct Rendered {
    rendered: String,
}

pub(super) fn url(base: &str, per_page: u32) -> Result<Url> {
    Ok(Url::parse_with_params(
        base,
        [("per_page", per_page.to_string())],
    )?)
}

pub(super) fn into_news(posts: Vec<Post>) -> Result<Vec<NewsItem>> {
    if posts.is_empty() {
        return Err(ToolError::Missing("posts"));
    }
    Ok(posts
        .into_iter()
        .map(|post| NewsItem {
            id: post.id,
            title_html: post.title.rendered,
            excerpt_html: post.excerpt.rendered,
            link: post.link,
            date: post.date,
        })
        .collect())
}
