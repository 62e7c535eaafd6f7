use anyhow::Context;
use clap::Parser;
use smilecare_client::config::ClientConfig;
use smilecare_client::fetcher::HttpContentFetcher;
use smilecare_client::loader::{ContentLoader, Page};
use smilecare_client::views::PageView;
use smilecare_core::language::LanguageCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Load a page's content and print its localized view as JSON.
#[derive(Debug, Parser)]
#[command(name = "smilecare-preview", version)]
struct Cli {
    /// Page to load.
    #[arg(long, value_enum, default_value = "home")]
    page: Page,

    /// Display language (`ro`, `ru`, `en`).
    #[arg(long, default_value = "ro")]
    lang: LanguageCode,

    /// Print a single blog post by id instead of the whole page.
    #[arg(long)]
    post: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("smilecare_client=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env().context("Failed to load client configuration")?;
    let fetcher = HttpContentFetcher::new(&config).context("Failed to build HTTP client")?;
    let loader = ContentLoader::new(fetcher);

    let page = if cli.post.is_some() { Page::Blog } else { cli.page };
    let content = loader.load(page).await;
    let view = PageView::build(&content, cli.lang);

    let output = match &cli.post {
        Some(id) => {
            let post = view
                .blog_posts
                .iter()
                .flatten()
                .find(|card| card.id.as_ref().is_some_and(|card_id| card_id.matches(id)))
                .with_context(|| format!("Blog post {id} not found"))?;
            serde_json::to_string_pretty(post)?
        }
        None => serde_json::to_string_pretty(&view)?,
    };

    println!("{output}");
    Ok(())
}
