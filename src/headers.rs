use chrono::{DateTime, FixedOffset};

/// A single parsed header value. `Date` and `Last-Modified` carry a
/// parsed date; everything else stays a string. A date that failed to
/// parse is stored as `Date(None)` rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Text(String),
    Date(Option<DateTime<FixedOffset>>),
}

/// Response headers keyed by name. Names are stored as received and the
/// last occurrence of a name wins; lookups compare case-insensitively
/// since HTTP header names are.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<(String, HeaderValue)>,
}

impl Headers {
    /// Parses a raw header block (`Name: Value` rows separated by CRLF).
    ///
    /// Rows with no name before the first colon are skipped. Each row is
    /// split at the first colon only, so values that themselves contain
    /// colons or commas (Link headers) survive intact.
    pub fn parse(block: &str) -> Self {
        let mut headers = Headers::default();
        for row in block.split("\r\n") {
            let Some((name, value)) = row.split_once(':') else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            headers.insert(name, value.trim());
        }
        headers
    }

    /// Builds the same typed map from an already-structured header map.
    pub fn from_header_map(map: &reqwest::header::HeaderMap) -> Self {
        let mut headers = Headers::default();
        for (name, value) in map {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str(), value.trim());
            }
        }
        headers
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        let value = typed_value(name, value);
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Value of a string-typed header.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            HeaderValue::Text(value) => Some(value.as_str()),
            HeaderValue::Date(_) => None,
        }
    }

    /// Value of a date-typed header, if it parsed.
    pub fn date(&self, name: &str) -> Option<DateTime<FixedOffset>> {
        match self.get(name)? {
            HeaderValue::Date(date) => *date,
            HeaderValue::Text(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn typed_value(name: &str, value: &str) -> HeaderValue {
    if name.eq_ignore_ascii_case("Date") || name.eq_ignore_ascii_case("Last-Modified") {
        HeaderValue::Date(DateTime::parse_from_rfc2822(value).ok())
    } else {
        HeaderValue::Text(value.to_string())
    }
}
