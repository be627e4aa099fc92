// Pure helpers over an already fetched list of posts. Nothing here touches
// the network or mutates its input.

use crate::api::Post;
use crate::error::{Error, Result};
use fastrand::Rng;

/// How many posts the "list random" menu entry shows.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Find the post with the given id. Ids are expected to be unique, so the
/// first match is returned.
pub fn select_post(id: i64, posts: &[Post]) -> Result<&Post> {
    posts
        .iter()
        .find(|post| post.id == id)
        .ok_or(Error::PostNotFound(id))
}

/// Posts whose title or body contains `keyword`, ignoring case.
///
/// An empty keyword matches every post.
pub fn search_posts<'a>(posts: &'a [Post], keyword: &str) -> Vec<&'a Post> {
    let keyword = keyword.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&keyword)
                || post.body.to_lowercase().contains(&keyword)
        })
        .collect()
}

/// Pick `n` distinct posts at random, or return every post when there are
/// no more than `n` of them.
pub fn random_sample(posts: &[Post], n: usize) -> Vec<&Post> {
    random_sample_with(&mut Rng::new(), posts, n)
}

/// Same as [`random_sample`] with a caller-provided generator.
pub fn random_sample_with<'a>(rng: &mut Rng, posts: &'a [Post], n: usize) -> Vec<&'a Post> {
    if posts.len() <= n {
        return posts.iter().collect();
    }
    rng.choose_multiple(posts.iter(), n)
}
