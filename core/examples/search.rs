//! Search GitHub repositories for a keyword read from standard input and
//! print `owner/name` for each match.
//!
//! ```text
//! cargo run --example search
//! ```

use std::io::{self, BufRead, Write};

use github_search::{GitHubClient, ReqwestTransport, SearchRepositories};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    print!("Enter your query here > ");
    io::stdout().flush()?;

    let mut keyword = String::new();
    io::stdin().lock().read_line(&mut keyword)?;
    let keyword = keyword.trim();

    let client = GitHubClient::new(ReqwestTransport::new());
    let response = client.send(&SearchRepositories::new(keyword)).await?;

    for repository in &response.items {
        println!("{}/{}", repository.owner.login, repository.name);
    }

    Ok(())
}
