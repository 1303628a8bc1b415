//! Flag emoji decoding.
//!
//! Maps a single flag cluster back to the country code it encodes, and scans
//! free text for the first flag naming a country.

mod scan;

pub use scan::{flag_clusters, FlagClusters};

use crate::country::{CountryCode, REGIONAL_INDICATOR_OFFSET};
use scan::{is_regional_indicator, BLACK_FLAG, CANCEL_TAG};

/// Flag codes that are not countries and are never attributed.
pub const SUPRANATIONAL: [&str; 2] = ["EU", "EA"];

/// Decode one flag cluster into a country code.
///
/// Accepts a pair of regional indicators (🇨🇭 → `CH`) or a tag-sequence
/// subdivision flag, whose first two tag letters name the country
/// (🏴󠁧󠁢󠁳󠁣󠁴󠁿 → `GB`). Supranational codes decode to `None`.
pub fn decode_flag(cluster: &str) -> Option<CountryCode> {
    let code = regional_pair(cluster).or_else(|| tag_region(cluster))?;

    if SUPRANATIONAL.contains(&code.as_str()) {
        None
    } else {
        Some(code)
    }
}

/// The first flag in `text` that decodes to a country.
pub fn first_country(text: &str) -> Option<CountryCode> {
    flag_clusters(text).find_map(decode_flag)
}

fn regional_pair(cluster: &str) -> Option<CountryCode> {
    let mut chars = cluster.chars();
    let (a, b) = (chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }
    CountryCode::from_letters(indicator_letter(a)?, indicator_letter(b)?)
}

fn indicator_letter(c: char) -> Option<char> {
    if !is_regional_indicator(c) {
        return None;
    }
    char::from_u32(c as u32 - REGIONAL_INDICATOR_OFFSET)
}

fn tag_region(cluster: &str) -> Option<CountryCode> {
    let mut chars = cluster.chars();
    if chars.next()? != BLACK_FLAG || !cluster.ends_with(CANCEL_TAG) {
        return None;
    }

    let mut region = chars
        .take_while(|&c| c != CANCEL_TAG)
        .map(|c| (c as u32).checked_sub(0xE0000).and_then(char::from_u32));

    let a = region.next()??;
    let b = region.next()??;
    CountryCode::from_letters(a, b)
}
