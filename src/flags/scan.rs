use std::iter::Peekable;
use std::str::CharIndices;

pub(crate) const BLACK_FLAG: char = '\u{1F3F4}';
pub(crate) const CANCEL_TAG: char = '\u{E007F}';

pub(crate) fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

/// Tag characters that may spell a subdivision (`a`-`z`, `0`-`9`).
pub(crate) fn is_tag_spec(c: char) -> bool {
    ('\u{E0061}'..='\u{E007A}').contains(&c) || ('\u{E0030}'..='\u{E0039}').contains(&c)
}

/// Lazily yields the flag-shaped clusters of a text, left to right.
///
/// Regional indicators pair up from the start of each run, so
/// "🇪🇺🇨🇭" yields two clusters. A trailing unpaired indicator is skipped.
/// Tag-sequence flags (🏴 + tag letters + cancel tag) are yielded whole;
/// a bare 🏴 or an unterminated sequence is not a flag.
pub struct FlagClusters<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> FlagClusters<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    fn tag_sequence(&mut self, start: usize) -> Option<&'a str> {
        let mut tagged = false;
        while let Some(&(i, c)) = self.chars.peek() {
            if is_tag_spec(c) {
                self.chars.next();
                tagged = true;
            } else if c == CANCEL_TAG && tagged {
                self.chars.next();
                return Some(&self.text[start..i + c.len_utf8()]);
            } else {
                break;
            }
        }
        None
    }
}

impl<'a> Iterator for FlagClusters<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (start, c) = self.chars.next()?;

            if is_regional_indicator(c) {
                if let Some(&(i, second)) = self.chars.peek() {
                    if is_regional_indicator(second) {
                        self.chars.next();
                        return Some(&self.text[start..i + second.len_utf8()]);
                    }
                }
                continue;
            }

            if c == BLACK_FLAG {
                if let Some(cluster) = self.tag_sequence(start) {
                    return Some(cluster);
                }
            }
        }
    }
}

/// Iterate over the flag clusters in `text`.
pub fn flag_clusters(text: &str) -> FlagClusters<'_> {
    FlagClusters::new(text)
}
