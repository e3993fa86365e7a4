//! Quote of the day shown in the header.

use chrono::{Datelike, NaiveDate};

/// A short attributed quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Quote body.
    pub text: &'static str,
    /// Attribution.
    pub author: &'static str,
}

impl Quote {
    /// Single-line form used by the header.
    #[must_use]
    pub fn display(&self) -> String {
        format!("\"{}\" - {}", self.text, self.author)
    }
}

const QUOTES: &[Quote] = &[
    Quote {
        text: "Simplicity is prerequisite for reliability.",
        author: "Edsger Dijkstra",
    },
    Quote {
        text: "The secret of getting ahead is getting started.",
        author: "Mark Twain",
    },
    Quote {
        text: "Well begun is half done.",
        author: "Aristotle",
    },
    Quote {
        text: "It always seems impossible until it's done.",
        author: "Nelson Mandela",
    },
    Quote {
        text: "Concentrate all your thoughts upon the work at hand.",
        author: "Alexander Graham Bell",
    },
    Quote {
        text: "Action is the foundational key to all success.",
        author: "Pablo Picasso",
    },
    Quote {
        text: "Focus is a matter of deciding what things you're not going to do.",
        author: "John Carmack",
    },
];

/// Picks the quote for a calendar day. Every day maps to exactly one quote and
/// consecutive days walk through the list in order.
#[must_use]
pub fn quote_for(date: NaiveDate) -> &'static Quote {
    let day = usize::try_from(date.num_days_from_ce().unsigned_abs()).unwrap_or(0);
    &QUOTES[day % QUOTES.len()]
}
