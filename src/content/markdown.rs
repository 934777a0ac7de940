//! Plain-text helpers over markdown bodies
//!
//! Bodies are handed to the presentation layer as markdown; these helpers
//! only derive the excerpt and reading statistics from them.

use lazy_static::lazy_static;
use pulldown_cmark::{Event, Options, Parser, TagEnd};
use regex::Regex;

lazy_static! {
    static ref MORE_MARKER: Regex = Regex::new(r"<!--\s*more\s*-->").unwrap();
}

/// Split a body on its `<!-- more -->` marker.
///
/// Returns the markdown before the marker (if there is one) and the body
/// with the marker removed.
pub fn split_excerpt(body: &str) -> (Option<String>, String) {
    match MORE_MARKER.find(body) {
        Some(m) => {
            let excerpt = body[..m.start()].trim().to_string();
            let remaining = body[m.end()..].trim();
            let full = format!("{}\n\n{}", excerpt, remaining);
            (Some(excerpt), full)
        }
        None => (None, body.to_string()),
    }
}

/// Markdown reduced to its visible text, whitespace collapsed
pub fn plain_text(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let mut text = String::new();
    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::TableCell,
            ) => text.push(' '),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count words, treating each CJK ideograph as one word
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphanumeric() && !is_cjk(c) {
            if !in_word {
                in_word = true;
                count += 1;
            }
        } else if is_cjk(c) {
            count += 1;
            in_word = false;
        } else {
            in_word = false;
        }
    }

    count
}

fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Minutes needed to read `words`, at least one
pub fn reading_time(words: usize, words_per_minute: usize) -> usize {
    words.div_ceil(words_per_minute.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_excerpt() {
        let content = "This is excerpt.\n<!-- more -->\nThis is more content.";
        let (excerpt, full) = split_excerpt(content);
        assert_eq!(excerpt, Some("This is excerpt.".to_string()));
        assert_eq!(full, "This is excerpt.\n\nThis is more content.");
    }

    #[test]
    fn test_split_excerpt_marker_spacing() {
        let (excerpt, full) = split_excerpt("Intro<!--more-->Rest");
        assert_eq!(excerpt.as_deref(), Some("Intro"));
        assert!(!full.contains("more-->"));
    }

    #[test]
    fn test_split_excerpt_without_marker() {
        let (excerpt, full) = split_excerpt("Just a body");
        assert!(excerpt.is_none());
        assert_eq!(full, "Just a body");
    }

    #[test]
    fn test_plain_text_strips_markup() {
        let md = "# Title\n\nSome **bold** and `code`.\n\n- one\n- two\n\n[link](http://x.y)";
        assert_eq!(plain_text(md), "Title Some bold and code. one two link");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("Hello, world! It's 2024."), 5);
        assert_eq!(count_words("你好 rust"), 3);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(0, 200), 1);
        assert_eq!(reading_time(200, 200), 1);
        assert_eq!(reading_time(201, 200), 2);
    }
}
