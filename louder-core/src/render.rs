//! Projection of events into listing cards.
//!
//! Rendering is a full replace: every call builds the whole listing from the
//! given events. Missing or empty event fields fall back to fixed
//! placeholder texts.

use louder_sdk::objects::{Event, EventId};
use time::Date;

use crate::dates;

pub const DEFAULT_IMAGE: &str = "/static/images/default-event.jpg";
pub const VENUE_FALLBACK: &str = "TBA";
pub const TIME_FALLBACK: &str = "Check website for time";
pub const DESCRIPTION_FALLBACK: &str = "No description available";
pub const PRICE_FALLBACK: &str = "Check website for price";
pub const EMPTY_MESSAGE: &str = "No events found matching your criteria.";
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load event data. Please try again later.";

/// Display model of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub image_url: String,
    pub image_alt: String,
    pub day: u8,
    pub month: &'static str,
    pub title: String,
    pub venue: String,
    pub time: String,
    pub description: String,
    pub price: String,
    /// Identifier carried by the card's "Get Tickets" control.
    pub ticket_target: EventId,
}

/// What the listing area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Cards(Vec<EventCard>),
    /// No event matched; shown instead of cards.
    Empty,
    /// Startup failed; shown in place of the whole listing.
    LoadError(String),
}

impl Listing {
    pub fn cards(&self) -> &[EventCard] {
        match self {
            Listing::Cards(cards) => cards,
            Listing::Empty | Listing::LoadError(_) => &[],
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, Listing::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    default_image: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE)
    }
}

impl Renderer {
    pub fn new(default_image: impl Into<String>) -> Self {
        Self {
            default_image: default_image.into(),
        }
    }

    pub fn card(&self, event: &Event, today: Date) -> EventCard {
        let date = dates::parse_event_date(event.date.as_deref(), today);
        EventCard {
            image_url: or_fallback(&event.image_url, &self.default_image),
            image_alt: event.title.clone(),
            day: date.day(),
            month: dates::short_month(date.month()),
            title: event.title.clone(),
            venue: or_fallback(&event.venue, VENUE_FALLBACK),
            time: or_fallback(&event.time, TIME_FALLBACK),
            description: or_fallback(&event.description, DESCRIPTION_FALLBACK),
            price: or_fallback(&event.price, PRICE_FALLBACK),
            ticket_target: event.id.clone(),
        }
    }

    /// One card per event, in order, or the empty state.
    pub fn render<'a, I>(&self, events: I, today: Date) -> Listing
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let cards: Vec<EventCard> = events
            .into_iter()
            .map(|event| self.card(event, today))
            .collect();
        if cards.is_empty() {
            Listing::Empty
        } else {
            Listing::Cards(cards)
        }
    }

    pub fn load_error(&self) -> Listing {
        Listing::LoadError(LOAD_ERROR_MESSAGE.to_string())
    }
}

fn or_fallback(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

impl std::fmt::Display for EventCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:>2} {}  {}", self.day, self.month, self.title)?;
        writeln!(f, "       {} | {} | {}", self.venue, self.time, self.price)?;
        writeln!(f, "       {}", self.description)?;
        write!(f, "       tickets: {}", self.ticket_target)
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Listing::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                        writeln!(f)?;
                    }
                    write!(f, "{card}")?;
                }
                Ok(())
            }
            Listing::Empty => f.write_str(EMPTY_MESSAGE),
            Listing::LoadError(message) => f.write_str(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2025 - 03 - 05);

    fn bare(id: &str, title: &str) -> Event {
        Event {
            id: EventId::from(id),
            title: title.to_string(),
            description: None,
            venue: None,
            category: None,
            date: None,
            time: None,
            price: None,
            image_url: None,
            ticket_url: None,
            source_site: None,
        }
    }

    #[test]
    fn test_full_card() {
        let event = Event {
            description: Some("Smooth tunes".into()),
            venue: Some("Blue Jazz Club".into()),
            date: Some("2025-11-21".into()),
            time: Some("8:00 PM".into()),
            price: Some("$25".into()),
            image_url: Some("https://img.example/jazz.jpg".into()),
            ..bare("42", "Jazz Night")
        };

        let card = Renderer::default().card(&event, TODAY);
        assert_eq!(card.image_url, "https://img.example/jazz.jpg");
        assert_eq!(card.image_alt, "Jazz Night");
        assert_eq!(card.day, 21);
        assert_eq!(card.month, "Nov");
        assert_eq!(card.venue, "Blue Jazz Club");
        assert_eq!(card.time, "8:00 PM");
        assert_eq!(card.description, "Smooth tunes");
        assert_eq!(card.price, "$25");
        assert_eq!(card.ticket_target, EventId::from("42"));
    }

    #[test]
    fn test_fallbacks() {
        let event = Event {
            venue: Some(String::new()),
            date: Some("TBA".into()),
            ..bare("7", "Mystery Gig")
        };

        let card = Renderer::default().card(&event, TODAY);
        assert_eq!(card.image_url, DEFAULT_IMAGE);
        assert_eq!(card.venue, VENUE_FALLBACK);
        assert_eq!(card.time, TIME_FALLBACK);
        assert_eq!(card.description, DESCRIPTION_FALLBACK);
        assert_eq!(card.price, PRICE_FALLBACK);
        assert_eq!((card.day, card.month), (5, "Mar"));

        let custom = Renderer::new("/img/placeholder.png").card(&event, TODAY);
        assert_eq!(custom.image_url, "/img/placeholder.png");
    }

    #[test]
    fn test_render_keeps_order() {
        let events = vec![bare("3", "C"), bare("1", "A"), bare("2", "B")];
        let listing = Renderer::default().render(&events, TODAY);

        let targets: Vec<&str> = listing
            .cards()
            .iter()
            .map(|c| c.ticket_target.as_str())
            .collect();
        assert_eq!(targets, ["3", "1", "2"]);
        assert!(!listing.is_empty_state());
    }

    #[test]
    fn test_empty_listing() {
        let listing = Renderer::default().render(&Vec::<Event>::new(), TODAY);
        assert!(listing.is_empty_state());
        assert!(listing.cards().is_empty());
        assert_eq!(listing.to_string(), EMPTY_MESSAGE);
    }

    #[test]
    fn test_load_error_has_no_cards() {
        let listing = Renderer::default().load_error();
        assert!(listing.cards().is_empty());
        assert!(!listing.is_empty_state());
        assert_eq!(listing.to_string(), LOAD_ERROR_MESSAGE);
    }

    #[test]
    fn test_card_text() {
        let event = Event {
            venue: Some("Opera House".into()),
            date: Some("2025-03-08".into()),
            ..bare("9", "Gala")
        };
        let text = Renderer::default().card(&event, TODAY).to_string();
        assert!(text.starts_with(" 8 Mar  Gala\n"));
        assert!(text.contains("Opera House | Check website for time | Check website for price"));
        assert!(text.ends_with("tickets: 9"));
    }
}
