//! Louder
//!
//! Terminal front end for the Sydney events listing: loads the events,
//! prints the filtered cards and can request a ticket redirect.

mod config;
mod shutdown;
mod ticket;

use clap::Parser;
use config::ConfigLoader;
use louder_core::dates;
use louder_core::filter::{DateWindow, FilterCriteria};
use louder_core::page::Page;
use louder_core::render::Renderer;
use louder_sdk::client::PageClient;
use louder_sdk::objects::EventId;
use shutdown::spawn_shutdown_listener;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

/// Louder - browse Sydney events and get ticket links
#[derive(Parser, Debug)]
#[command(name = "louder")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env = "LOUDER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the backend base URL (e.g., http://localhost:5000/)
    #[arg(long, env = "LOUDER_BASE_URL")]
    base_url: Option<Url>,

    /// Only show events in this category
    #[arg(long)]
    category: Option<String>,

    /// Only show events at this venue
    #[arg(long)]
    venue: Option<String>,

    /// Date window: today, tomorrow, this-weekend, this-week, this-month
    #[arg(long)]
    when: Option<DateWindow>,

    /// Case-insensitive text matched against title, description and venue
    #[arg(long)]
    search: Option<String>,

    /// Print the category and venue options before the listing
    #[arg(long, default_value = "false")]
    options: bool,

    /// Request a ticket redirect for this event id
    #[arg(long, requires = "email")]
    ticket: Option<String>,

    /// Email address submitted with the ticket request
    #[arg(long)]
    email: Option<String>,

    /// Agree to receive emails about future events
    #[arg(long, default_value = "false")]
    opt_in: bool,
}

impl Args {
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        if let Some(category) = &self.category {
            criteria = criteria.with_category(category.as_str());
        }
        if let Some(venue) = &self.venue {
            criteria = criteria.with_venue(venue.as_str());
        }
        if let Some(window) = self.when {
            criteria = criteria.with_date_window(window);
        }
        if let Some(search) = &self.search {
            criteria = criteria.with_search_text(search.as_str());
        }
        criteria
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    tracing::info!("Starting louder v{}", env!("CARGO_PKG_VERSION"));

    let loaded_config = ConfigLoader::new(args.config.as_deref(), args.base_url.clone())
        .load()
        .map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })?;
    tracing::debug!(base_url = %loaded_config.base_url, "Configuration loaded");

    let http = reqwest::Client::builder()
        .timeout(loaded_config.timeout)
        .build()?;
    let client = Arc::new(PageClient::new(loaded_config.base_url).with_http_client(http));
    let renderer = Renderer::new(loaded_config.default_image);

    let mut page = match Page::initialize(client.as_ref(), renderer.clone()).await {
        Ok(page) => page,
        Err(e) => {
            println!("{}", renderer.load_error());
            return Err(e.into());
        }
    };

    if args.options {
        println!("Categories: {}", page.categories().join(", "));
        println!("Venues: {}", page.venues().join(", "));
        println!();
    }

    let today = dates::today();
    let listing = page.apply(args.criteria(), today);
    println!("{listing}");

    if let Some(ticket) = &args.ticket {
        let event_id = EventId::from(ticket.as_str());
        if page.event(&event_id).is_none() {
            anyhow::bail!("event {event_id} is not in the listing");
        }
        let email = args.email.clone().unwrap_or_default();

        let shutdown_rx = spawn_shutdown_listener();
        let target =
            ticket::run_ticket_flow(client, event_id, email, args.opt_in, shutdown_rx).await?;
        tracing::info!(redirect_url = %target, "Ticket flow complete");
    }

    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_search_help_lists_searched_fields() {
        let command = Args::command();
        let search = command
            .get_arguments()
            .find(|arg| arg.get_id() == "search")
            .unwrap();
        let help = search.get_help().unwrap().to_string();
        assert!(help.contains("title, description and venue"));
        assert!(!help.contains("category"));
    }

    #[test]
    fn test_flags_build_criteria() {
        let args = Args::try_parse_from([
            "louder",
            "--category",
            "Music",
            "--when",
            "this-weekend",
            "--search",
            "jazz",
        ])
        .unwrap();
        assert_eq!(
            args.criteria(),
            FilterCriteria::default()
                .with_category("Music")
                .with_date_window(DateWindow::ThisWeekend)
                .with_search_text("jazz")
        );
    }

    #[test]
    fn test_ticket_requires_email() {
        assert!(Args::try_parse_from(["louder", "--ticket", "42"]).is_err());
    }
}
