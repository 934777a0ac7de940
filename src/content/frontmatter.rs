//! Front-matter parsing

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use super::error::{ContentError, Result};

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> std::result::Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter block of an article or tip
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub slug: Option<String>,
    /// Articles call it `excerpt`, tips call it `description`
    #[serde(alias = "description")]
    pub excerpt: Option<String>,
    #[serde(rename = "publishedAt", alias = "published_at", alias = "date")]
    pub published_at: Option<String>,
    #[serde(rename = "updatedAt", alias = "updated_at", alias = "updated")]
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Parse front-matter from a source file.
    /// Returns (front_matter, body). `path` is only used for error reporting.
    pub fn parse<'a>(content: &'a str, path: &Path) -> Result<(Self, &'a str)> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content, path);
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content, path);
        }

        Err(ContentError::parse(path, "missing front-matter block"))
    }

    fn parse_yaml<'a>(content: &'a str, path: &Path) -> Result<(Self, &'a str)> {
        let rest = &content[3..]; // Skip opening ---
        let rest = rest.trim_start_matches(['\n', '\r']);

        // Closing fence is a line of exactly `---`, possibly right away
        let mut offset = 0;
        let mut fence = None;
        for line in rest.split_inclusive('\n') {
            if line.trim_end_matches(['\n', '\r']) == "---" {
                fence = Some((offset, offset + line.len()));
                break;
            }
            offset += line.len();
        }
        let Some((end_pos, body_pos)) = fence else {
            return Err(ContentError::parse(path, "unterminated front-matter block"));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[body_pos..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)
            .map_err(|e| ContentError::parse(path, format!("invalid YAML front-matter: {}", e)))?;

        Ok((fm, remaining))
    }

    fn parse_json<'a>(content: &'a str, path: &Path) -> Result<(Self, &'a str)> {
        // JSON front-matter fenced by ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            let Some(end_pos) = rest.find(";;;") else {
                return Err(ContentError::parse(path, "unterminated front-matter block"));
            };
            let json_content = &rest[..end_pos];
            let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);
            let fm = Self::from_json(json_content, path)?;
            return Ok((fm, remaining));
        }

        // Bare JSON object at the start; find the matching closing brace
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;
        let mut end_pos = 0;
        for (i, c) in content.char_indices() {
            if in_string {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '"' => in_string = true,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        end_pos = i + 1;
                        break;
                    }
                }
                _ => {}
            }
        }

        if end_pos == 0 {
            return Err(ContentError::parse(path, "unterminated JSON front-matter"));
        }

        let fm = Self::from_json(&content[..end_pos], path)?;
        let remaining = content[end_pos..].trim_start_matches(['\n', '\r']);
        Ok((fm, remaining))
    }

    fn from_json(json: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ContentError::parse(path, format!("invalid JSON front-matter: {}", e)))
    }
}

/// Parse a front-matter date.
///
/// Values carrying an offset keep it; naive values are read in `tz`
/// (UTC when `None`).
pub fn parse_date_string(s: &str, tz: Option<Tz>) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    const OFFSET_FORMATS: [&str; 3] = [
        "%Y-%m-%d %H:%M:%S%:z",
        "%Y-%m-%d %H:%M:%S %z",
        "%Y-%m-%dT%H:%M:%S%z",
    ];
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    const DATETIME_FORMATS: [&str; 6] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return localize(dt, tz);
        }
    }

    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return localize(d.and_hms_opt(0, 0, 0)?, tz);
        }
    }

    None
}

fn localize(dt: NaiveDateTime, tz: Option<Tz>) -> Option<DateTime<FixedOffset>> {
    match tz {
        Some(tz) => tz
            .from_local_datetime(&dt)
            .earliest()
            .map(|d| d.fixed_offset()),
        None => Some(Utc.from_utc_datetime(&dt).fixed_offset()),
    }
}
