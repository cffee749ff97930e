use crate::error::Result;
use crate::github::GitHubClient;
use crate::{pagination, random, template};
use tracing::debug;

/// Runs the favorite pipeline once: resolve a random page of the user's
/// starred repositories, fetch it, pick one repository and render it.
///
/// `Ok(None)` means there was nothing to render (the chosen page was
/// empty). Transport and rate-limit failures surface as errors for the
/// caller to swallow; the feature degrades to rendering nothing.
pub async fn run(client: &GitHubClient, user: &str) -> Result<Option<String>> {
    let headers = client.head_starred(user).await?;
    let last_page = headers.text("Link").and_then(pagination::last_page);
    // No pagination info means a single page of results.
    let page = last_page.map(pagination::random_page).unwrap_or(1);
    debug!("resolved page {} of {:?}", page, last_page);

    let repos = client.fetch_starred_page(user, page).await?;
    match random::random_item(&repos) {
        Some(repo) => Ok(Some(template::render_favorite(repo))),
        None => {
            debug!("page {} contained no starred repositories", page);
            Ok(None)
        }
    }
}
