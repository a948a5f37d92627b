use serde::{Deserialize, Serialize};

/// Literal the model is told to use for fields it cannot find
pub const UNKNOWN_FIELD: &str = "未知";

/// The five fields the model supplies for a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    pub author: String,
    pub title: String,
    pub publisher: String,
    pub location: String,
    pub year: String,
}

impl BookFields {
    /// All fields set to the unknown literal
    pub fn unknown() -> Self {
        Self {
            author: UNKNOWN_FIELD.to_string(),
            title: UNKNOWN_FIELD.to_string(),
            publisher: UNKNOWN_FIELD.to_string(),
            location: UNKNOWN_FIELD.to_string(),
            year: UNKNOWN_FIELD.to_string(),
        }
    }

    /// `{author}：《{title}》，{location}：{publisher}，{year}`
    pub fn citation(&self) -> String {
        format!(
            "{}：《{}》，{}：{}，{}",
            self.author, self.title, self.location, self.publisher, self.year
        )
    }
}

/// A looked-up book together with its formatted citation.
///
/// The citation is derived from the other fields when the record is built and
/// again when it is read back from storage. Fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredRecord")]
pub struct BookRecord {
    isbn: String,
    author: String,
    title: String,
    publisher: String,
    location: String,
    year: String,
    formatted: String,
}

impl BookRecord {
    pub fn new(isbn: impl Into<String>, fields: BookFields) -> Self {
        let formatted = fields.citation();
        let BookFields {
            author,
            title,
            publisher,
            location,
            year,
        } = fields;

        Self {
            isbn: isbn.into(),
            author,
            title,
            publisher,
            location,
            year,
            formatted,
        }
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    pub fn fields(&self) -> BookFields {
        BookFields {
            author: self.author.clone(),
            title: self.title.clone(),
            publisher: self.publisher.clone(),
            location: self.location.clone(),
            year: self.year.clone(),
        }
    }
}

/// On-disk shape. A stored `formatted` value is ignored.
#[derive(Deserialize)]
struct StoredRecord {
    isbn: String,
    author: String,
    title: String,
    publisher: String,
    location: String,
    year: String,
}

impl From<StoredRecord> for BookRecord {
    fn from(stored: StoredRecord) -> Self {
        BookRecord::new(
            stored.isbn,
            BookFields {
                author: stored.author,
                title: stored.title,
                publisher: stored.publisher,
                location: stored.location,
                year: stored.year,
            },
        )
    }
}
