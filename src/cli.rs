use clap::Parser;

#[derive(Parser)]
#[command(name = "gh-random-favorite")]
#[command(about = "Picks a random starred repository for a GitHub user and renders it as a sidebar fragment")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub login whose starred repositories are sampled.
    /// When absent the program does nothing, matching the "not our page"
    /// condition of the browser variant.
    #[arg(env = "GITHUB_USER")]
    pub user: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,
}
