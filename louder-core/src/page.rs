//! The listing page's state container.
//!
//! [`Page`] owns everything the page knows: the full fetched event list, the
//! currently filtered subset, the category and venue options, and the active
//! criteria. It is only built once all three startup fetches succeeded.

use louder_sdk::client::ClientError;
use louder_sdk::objects::{Event, EventId};
use thiserror::Error;
use time::Date;
use tracing::{debug, error, info};

use crate::backend::EventSource;
use crate::filter::{FilterCriteria, filter_events};
use crate::render::{Listing, Renderer};

/// Navigation filter value that resets the category.
pub const ALL_CATEGORIES: &str = "all";

/// Startup failure. Any one failed fetch aborts initialization.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to fetch events")]
    Events(#[source] ClientError),

    #[error("failed to fetch categories")]
    Categories(#[source] ClientError),

    #[error("failed to fetch venues")]
    Venues(#[source] ClientError),
}

#[derive(Debug, Clone)]
pub struct Page {
    events: Vec<Event>,
    filtered: Vec<Event>,
    categories: Vec<String>,
    venues: Vec<String>,
    criteria: FilterCriteria,
    renderer: Renderer,
}

impl Page {
    /// Fetch events, categories and venues concurrently and build the page.
    pub async fn initialize<S>(source: &S, renderer: Renderer) -> Result<Self, InitError>
    where
        S: EventSource + ?Sized,
    {
        let (events, categories, venues) = tokio::try_join!(
            async { source.fetch_events().await.map_err(InitError::Events) },
            async { source.fetch_categories().await.map_err(InitError::Categories) },
            async { source.fetch_venues().await.map_err(InitError::Venues) },
        )
        .inspect_err(|e| error!(error = %e, "Page initialization failed"))?;

        let page = Self::from_parts(events, categories, venues, renderer);
        info!(
            events = page.events.len(),
            categories = page.categories.len(),
            venues = page.venues.len(),
            "Page initialized"
        );
        Ok(page)
    }

    /// Build a page from already fetched data.
    ///
    /// Null and empty option entries are dropped; order is kept.
    pub fn from_parts(
        events: Vec<Event>,
        categories: Vec<Option<String>>,
        venues: Vec<Option<String>>,
        renderer: Renderer,
    ) -> Self {
        Self {
            filtered: events.clone(),
            events,
            categories: options(categories),
            venues: options(venues),
            criteria: FilterCriteria::default(),
            renderer,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filtered(&self) -> &[Event] {
        &self.filtered
    }

    /// Options of the category selector.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Options of the venue selector.
    pub fn venues(&self) -> &[String] {
        &self.venues
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Replace the active criteria, refilter the full list, and re-render.
    pub fn apply(&mut self, criteria: FilterCriteria, today: Date) -> Listing {
        self.filtered = filter_events(&self.events, &criteria, today)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            criteria = ?criteria,
            matched = self.filtered.len(),
            total = self.events.len(),
            "Filters applied"
        );
        self.criteria = criteria;
        self.listing(today)
    }

    /// Reset every criterion and show the full list again.
    pub fn clear_filters(&mut self, today: Date) -> Listing {
        self.criteria = FilterCriteria::default();
        self.filtered = self.events.clone();
        debug!(total = self.events.len(), "Filters cleared");
        self.listing(today)
    }

    /// Navigation shortcut: set the category (or `all` to drop it) and keep
    /// the remaining criteria.
    pub fn select_category(&mut self, filter: &str, today: Date) -> Listing {
        let mut criteria = self.criteria.clone();
        criteria.category = if filter == ALL_CATEGORIES {
            None
        } else {
            Some(filter.to_string())
        };
        self.apply(criteria, today)
    }

    /// Render the current filtered events.
    pub fn listing(&self, today: Date) -> Listing {
        self.renderer.render(&self.filtered, today)
    }
}

fn options(values: Vec<Option<String>>) -> Vec<String> {
    values
        .into_iter()
        .flatten()
        .filter(|v| !v.is_empty())
        .collect()
}
