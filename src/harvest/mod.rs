//! Reply harvesting: who replied from where.

use std::collections::BTreeMap;

use crate::country::CountryCode;
use crate::flags::first_country;
use crate::geo::{self, Continent, GeoError};
use crate::xrpc::{GraphReader, XrpcError};

/// Occurrence counts, most common first on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<K: Ord>(BTreeMap<K, usize>);

impl<K: Ord + Clone> Tally<K> {
    pub fn add(&mut self, key: K) {
        *self.0.entry(key).or_insert(0) += 1;
    }

    pub fn get(&self, key: &K) -> usize {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Descending by count; ties keep key order.
    pub fn most_common(&self) -> Vec<(K, usize)> {
        let mut entries: Vec<(K, usize)> = self.0.iter().map(|(k, n)| (k.clone(), *n)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<K: Ord> Default for Tally<K> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

/// Where a reply says its author lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribution {
    pub country: CountryCode,
    pub continent: Option<Continent>,
}

/// The part of a reply that carries the location.
///
/// Replies are expected to read like "I live in 🇨🇭", so anything before the
/// first " in " is dropped.
pub fn location_hint(text: &str) -> &str {
    text.split_once(" in ").map_or(text, |(_, rest)| rest)
}

/// Attribute a reply text to the first country flag it mentions.
pub fn attribute(text: &str) -> Result<Option<Attribution>, GeoError> {
    let Some(country) = first_country(location_hint(text)) else {
        return Ok(None);
    };
    let continent = geo::continent(country)?;
    Ok(Some(Attribution { country, continent }))
}

/// Everything learned from one pass over the configured threads.
#[derive(Debug, Default)]
pub struct Harvest {
    /// Author DIDs per country, in reply order. An author replying twice
    /// appears twice.
    pub by_country: BTreeMap<CountryCode, Vec<String>>,
    pub countries: Tally<CountryCode>,
    pub continents: Tally<Continent>,
    pub replies_seen: usize,
}

impl Harvest {
    /// Account for one reply, returning the country it was attributed to.
    pub fn record(&mut self, text: &str, did: &str) -> Option<CountryCode> {
        self.replies_seen += 1;

        let attribution = match attribute(text) {
            Ok(Some(attribution)) => attribution,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(did, error = %e, "Skipping reply");
                return None;
            }
        };

        self.countries.add(attribution.country);
        if let Some(continent) = attribution.continent {
            self.continents.add(continent);
        }
        self.by_country
            .entry(attribution.country)
            .or_default()
            .push(did.to_string());

        Some(attribution.country)
    }

    /// Country groups with at least `min_members` attributed replies.
    pub fn qualifying(&self, min_members: usize) -> impl Iterator<Item = (CountryCode, &[String])> + '_ {
        self.by_country
            .iter()
            .filter(move |(_, dids)| dids.len() >= min_members)
            .map(|(code, dids)| (*code, dids.as_slice()))
    }

    /// Replies attributed to any country.
    pub fn attributed(&self) -> usize {
        self.countries.total()
    }
}

/// Scan the direct replies of every post in `posts`.
///
/// The first failed fetch aborts the pass.
pub async fn harvest<R: GraphReader + ?Sized>(reader: &R, posts: &[String]) -> Result<Harvest, XrpcError> {
    let mut harvest = Harvest::default();

    for uri in posts {
        let thread = reader.post_thread(uri).await?;
        let before = harvest.attributed();

        for reply in &thread.thread.replies {
            if let Some(post) = &reply.post {
                harvest.record(&post.record.text, &post.author.did);
            }
        }

        tracing::info!(
            post = %uri,
            replies = thread.thread.replies.len(),
            attributed = harvest.attributed() - before,
            "Scanned thread"
        );
    }

    Ok(harvest)
}
