use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;
use utoipa::ToSchema;

pub const TEXT_MAX_CHARS: usize = 500;
pub const AUTHOR_MAX_CHARS: usize = 100;

/// A request value that failed schema constraints.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Raw create payload as it arrives on the wire.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({"text": "Your only limit is you", "author": "Anonymous"}))]
pub struct QuoteCreate {
    /// 1 to 500 characters once trimmed; must not match an existing quote.
    #[schema(min_length = 1, max_length = 500)]
    pub text: String,
    /// At most 100 characters once trimmed.
    #[serde(default)]
    #[schema(max_length = 100)]
    pub author: Option<String>,
}

/// A create payload that passed validation: trimmed and within bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    text: String,
    author: Option<String>,
}

impl NewQuote {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

impl TryFrom<QuoteCreate> for NewQuote {
    type Error = ValidationError;

    fn try_from(raw: QuoteCreate) -> Result<Self, Self::Error> {
        let text = raw.text.trim();
        if text.is_empty() {
            return Err(ValidationError::new("text", "must not be empty"));
        }
        if text.chars().count() > TEXT_MAX_CHARS {
            return Err(ValidationError::new(
                "text",
                format!("must be at most {TEXT_MAX_CHARS} characters"),
            ));
        }

        // An all-whitespace author collapses to "no author".
        let author = match raw.author.as_deref().map(str::trim) {
            Some(a) if a.chars().count() > AUTHOR_MAX_CHARS => {
                return Err(ValidationError::new(
                    "author",
                    format!("must be at most {AUTHOR_MAX_CHARS} characters"),
                ));
            }
            Some("") | None => None,
            Some(a) => Some(a.to_string()),
        };

        Ok(Self {
            text: text.to_string(),
            author,
        })
    }
}

/// Wire representation of a stored quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuoteRead {
    pub id: i64,
    pub text: String,
    pub author: Option<String>,
}

impl QuoteRead {
    /// Text cut to `max_len` characters, with `...` appended when cut.
    pub fn short_text(&self, max_len: usize) -> String {
        match self.text.char_indices().nth(max_len) {
            Some((idx, _)) => format!("{}...", &self.text[..idx]),
            None => self.text.clone(),
        }
    }
}

impl fmt::Display for QuoteRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.text,
            self.author.as_deref().unwrap_or("Unknown")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(text: &str, author: Option<&str>) -> QuoteCreate {
        QuoteCreate {
            text: text.to_string(),
            author: author.map(str::to_string),
        }
    }

    #[test]
    fn trims_text_and_author() {
        let quote = NewQuote::try_from(create("  Keep going \n", Some(" Anonymous "))).unwrap();
        assert_eq!(quote.text(), "Keep going");
        assert_eq!(quote.author(), Some("Anonymous"));
    }

    #[test]
    fn rejects_whitespace_only_text() {
        let err = NewQuote::try_from(create(" \t\n ", None)).unwrap_err();
        assert_eq!(err.field, "text");
    }

    #[test]
    fn text_length_is_counted_after_trimming() {
        let exact = format!("  {}  ", "a".repeat(TEXT_MAX_CHARS));
        assert!(NewQuote::try_from(create(&exact, None)).is_ok());

        let over = "a".repeat(TEXT_MAX_CHARS + 1);
        let err = NewQuote::try_from(create(&over, None)).unwrap_err();
        assert_eq!(err.field, "text");
    }

    #[test]
    fn text_length_counts_characters_not_bytes() {
        let accented = "é".repeat(TEXT_MAX_CHARS);
        assert!(NewQuote::try_from(create(&accented, None)).is_ok());
    }

    #[test]
    fn author_bounds() {
        let max = "b".repeat(AUTHOR_MAX_CHARS);
        assert!(NewQuote::try_from(create("ok", Some(&max))).is_ok());

        let over = "b".repeat(AUTHOR_MAX_CHARS + 1);
        let err = NewQuote::try_from(create("ok", Some(&over))).unwrap_err();
        assert_eq!(err.field, "author");
    }

    #[test]
    fn blank_author_becomes_absent() {
        let quote = NewQuote::try_from(create("ok", Some("   "))).unwrap();
        assert_eq!(quote.author(), None);
    }

    #[test]
    fn display_falls_back_to_unknown() {
        let quote = QuoteRead {
            id: 1,
            text: "Stay hungry".into(),
            author: None,
        };
        assert_eq!(quote.to_string(), "Stay hungry - Unknown");
    }

    #[test]
    fn short_text_truncates_on_char_boundary() {
        let quote = QuoteRead {
            id: 1,
            text: "ééééé".into(),
            author: None,
        };
        assert_eq!(quote.short_text(3), "ééé...");
        assert_eq!(quote.short_text(5), "ééééé");
        assert_eq!(quote.short_text(50), "ééééé");
    }

    #[test]
    fn author_serializes_as_null() {
        let quote = QuoteRead {
            id: 7,
            text: "x".into(),
            author: None,
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "text": "x", "author": null}));
    }
}
