//! Listing page client (browser page → Louder backend).
//!
//! The page is anonymous: no request carries credentials. Every endpoint
//! answers with plain JSON and signals failure through the status code.

use reqwest::Client;
use url::Url;

use super::{ClientError, parse_response};
use crate::objects::{Event, EventId, EventsQuery, TicketRedirectRequest, TicketRedirectResponse};

/// Typed HTTP client for the endpoints the listing page consumes.
#[derive(Debug, Clone)]
pub struct PageClient {
    http: Client,
    base_url: Url,
}

impl PageClient {
    /// Create a new `PageClient`.
    ///
    /// * `base_url` – root URL of the Louder backend (e.g. `http://localhost:5000`).
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/events` – every listed event, ordered by date.
    pub async fn list_events(&self) -> Result<Vec<Event>, ClientError> {
        let url = self.base_url.join("/api/events")?;
        let resp = self.http.get(url).send().await?;
        parse_response(resp).await
    }

    /// `GET /api/events?category=&date=&search=` – let the backend narrow
    /// the listing.
    pub async fn search_events(&self, query: &EventsQuery) -> Result<Vec<Event>, ClientError> {
        let url = self.base_url.join("/api/events")?;
        let resp = self.http.get(url).query(query).send().await?;
        parse_response(resp).await
    }

    /// `GET /api/events/{id}` – a single event.
    pub async fn get_event(&self, id: &EventId) -> Result<Event, ClientError> {
        let url = self.base_url.join(&format!(
            "/api/events/{}",
            urlencoding::encode(id.as_str())
        ))?;
        let resp = self.http.get(url).send().await?;
        parse_response(resp).await
    }

    /// `GET /api/categories` – distinct category names.
    ///
    /// The backend selects `DISTINCT category`, so `null` shows up whenever
    /// some event has no category.
    pub async fn list_categories(&self) -> Result<Vec<Option<String>>, ClientError> {
        let url = self.base_url.join("/api/categories")?;
        let resp = self.http.get(url).send().await?;
        parse_response(resp).await
    }

    /// `GET /api/venues` – distinct venue names, may contain `null`.
    pub async fn list_venues(&self) -> Result<Vec<Option<String>>, ClientError> {
        let url = self.base_url.join("/api/venues")?;
        let resp = self.http.get(url).send().await?;
        parse_response(resp).await
    }

    /// `POST /api/ticket-redirect` – record the visitor's email and obtain
    /// the ticket provider URL.
    pub async fn request_ticket_redirect(
        &self,
        request: &TicketRedirectRequest,
    ) -> Result<TicketRedirectResponse, ClientError> {
        let url = self.base_url.join("/api/ticket-redirect")?;
        let resp = self.http.post(url).json(request).send().await?;
        parse_response(resp).await
    }
}
