//! src/main.rs

use anyhow::Result;

mod cli;
mod commands;
mod config;
mod context;
mod errors;
mod git;
mod hook;
mod record;
mod store;
mod timeline;

use cli::{parse_lenient, search_query, wants_html, Commands};
use commands::{
    annotate::handle_annotate, init::handle_init, list::handle_list, search::handle_search,
    timeline::handle_timeline,
};
use context::{DevlogContext, TimelineFormat};
use errors::DevlogError;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = parse_lenient(std::env::args_os());

    // reject a bare `search` before touching the repository
    let query = match &cli.command {
        Some(Commands::Search { query }) => {
            Some(search_query(query).ok_or(DevlogError::MissingArgument)?)
        }
        _ => None,
    };

    let ctx = DevlogContext::discover().await?;

    match cli.command {
        Some(Commands::Init { .. }) => handle_init(&ctx).await?,
        Some(Commands::List { .. }) => handle_list(&ctx).await?,
        Some(Commands::Search { .. }) => {
            let query = query.unwrap_or_default();
            handle_search(&ctx, &query).await?
        }
        Some(Commands::Timeline { html, extra }) => {
            let format = if wants_html(html, &extra) {
                TimelineFormat::Html
            } else {
                TimelineFormat::Markdown
            };
            handle_timeline(&ctx, format).await?
        }
        Some(Commands::Annotate(args)) => {
            log::debug!("Unrecognised arguments {args:?}, annotating the last commit");
            handle_annotate(&ctx).await?
        }
        None => handle_annotate(&ctx).await?,
    }

    Ok(())
}
