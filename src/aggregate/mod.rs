//! Pure aggregation over blog records.
//!
//! Every function here is deterministic, takes a snapshot slice, and never
//! mutates its input. Ties between blogs or authors resolve to the first one
//! encountered in input order.
//!
//! Blogs without an author are counted in [`total_likes`] and eligible for
//! [`favorite_blog`], but skipped by the per-author aggregations.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Blog;

/// The author with the most blog records.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct AuthorBlogCount {
    pub author: String,
    pub count: i64,
}

/// The author whose blogs sum to the highest total likes.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i64,
}

/// Summary over the whole blog list, computed in a single pass per statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogStats {
    pub total_likes: i64,
    pub favorite: Option<Blog>,
    pub most_blogs: Option<AuthorBlogCount>,
    pub most_likes: Option<AuthorLikes>,
}

/// Sum of likes across all records; 0 for an empty slice.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    blogs.iter().map(|blog| i64::from(blog.likes)).sum()
}

/// The record with maximum likes, or `None` for an empty slice.
/// The first record reaching the maximum wins ties.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    let mut favorite: Option<&Blog> = None;
    for blog in blogs {
        match favorite {
            Some(current) if current.likes >= blog.likes => {}
            _ => favorite = Some(blog),
        }
    }
    favorite
}

/// The author appearing in the most records, or `None` when no record has an
/// author. The first author reaching the maximum count wins ties.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogCount> {
    pick_max_author(tally_by_author(blogs, |_| 1)).map(|(author, count)| AuthorBlogCount {
        author,
        count,
    })
}

/// The author whose records sum to the highest total likes, with the same
/// tie-break as [`most_blogs`].
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    pick_max_author(tally_by_author(blogs, |blog| i64::from(blog.likes)))
        .map(|(author, likes)| AuthorLikes { author, likes })
}

/// Computes all statistics for the summary endpoint.
pub fn summarize(blogs: &[Blog]) -> BlogStats {
    BlogStats {
        total_likes: total_likes(blogs),
        favorite: favorite_blog(blogs).cloned(),
        most_blogs: most_blogs(blogs),
        most_likes: most_likes(blogs),
    }
}

/// Accumulates a per-author total, preserving first-seen author order so the
/// tie-break stays deterministic. The list of distinct authors is small, so a
/// linear scan beats pulling in an ordered map.
fn tally_by_author<F>(blogs: &[Blog], mut value: F) -> Vec<(String, i64)>
where
    F: FnMut(&Blog) -> i64,
{
    let mut tally: Vec<(String, i64)> = Vec::new();
    for blog in blogs {
        let Some(author) = blog.author.as_deref() else {
            continue;
        };
        match tally.iter_mut().find(|(seen, _)| seen == author) {
            Some((_, total)) => *total += value(blog),
            None => tally.push((author.to_string(), value(blog))),
        }
    }
    tally
}

/// Picks the first entry holding the maximum total.
fn pick_max_author(tally: Vec<(String, i64)>) -> Option<(String, i64)> {
    let mut winner: Option<(String, i64)> = None;
    for (author, total) in tally {
        match &winner {
            Some((_, best)) if *best >= total => {}
            _ => winner = Some((author, total)),
        }
    }
    winner
}
