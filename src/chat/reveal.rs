//! Progressive reveal of a finished reply.
//!
//! The core only decides chunk boundaries. Pacing is up to whoever pulls
//! the chunks.

use unicode_segmentation::UnicodeSegmentation;

/// Finite, non-restartable sequence of grapheme clusters of a reply.
///
/// Each item is the next chunk, so concatenating every item yields the
/// original text.
#[derive(Debug)]
pub struct Reveal {
    text: String,
    offset: usize,
}

impl Reveal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            offset: 0,
        }
    }

    /// Text revealed so far.
    pub fn shown(&self) -> &str {
        &self.text[..self.offset]
    }

    pub fn is_done(&self) -> bool {
        self.offset >= self.text.len()
    }
}

impl Iterator for Reveal {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.offset..];
        let grapheme = rest.graphemes(true).next()?;
        self.offset += grapheme.len();
        Some(grapheme.to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.offset;
        (usize::from(remaining > 0), Some(remaining))
    }
}

pub fn reveal(text: impl Into<String>) -> Reveal {
    Reveal::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_concatenate_to_the_reply() {
        let reply = "Halo! Apa kabar? 👋🏽";
        let joined: String = reveal(reply).collect();
        assert_eq!(joined, reply);
    }

    #[test]
    fn combined_emoji_stays_one_chunk() {
        let chunks: Vec<String> = reveal("a👋🏽b").collect();
        assert_eq!(chunks, vec!["a", "👋🏽", "b"]);
    }

    #[test]
    fn shown_tracks_progress_and_ends() {
        let mut chunks = reveal("abc");
        assert_eq!(chunks.shown(), "");
        chunks.next();
        chunks.next();
        assert_eq!(chunks.shown(), "ab");
        assert!(!chunks.is_done());
        chunks.next();
        assert!(chunks.is_done());
        assert_eq!(chunks.next(), None);
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn empty_reply_yields_nothing() {
        assert_eq!(reveal("").count(), 0);
    }
}
