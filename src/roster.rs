// src/roster.rs
// Roster model: divisions → fighters, loaded once and read-only afterwards.

use std::{collections::HashSet, error::Error, fmt, fs, path::Path};

use serde::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer,
};

use crate::config::consts::{MENS_PREFIX, WOMENS_PREFIX};
use crate::config::options::RosterSource;
use crate::core::sanitize::{is_valid_slug, leading_int};

static BUNDLED_ROSTER: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/roster.json"));

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Roster {
    pub divisions: Vec<Division>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Division {
    pub id: String,
    pub name: String,
    /// Free text, e.g. "155 lbs". Leading integer drives the weight tier.
    pub weight: String,
    #[serde(default)]
    pub fighters: Vec<Fighter>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fighter {
    pub slug: String,
    pub name: String,
    pub rank: u32,
    #[serde(default)]
    pub record: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gym: Option<String>,
    /// Portrait path relative to the site root.
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub notable_fights: Vec<String>,
    #[serde(default)]
    pub socials: Socials,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivisionCategory {
    Mens,
    Womens,
}

/// Platform → profile URL, in source order. Null or empty URLs are kept here
/// and dropped at render time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Socials(Vec<(String, Option<String>)>);

/// One flattened (fighter, division) pair.
#[derive(Clone, Copy, Debug)]
pub struct Entry<'a> {
    pub fighter: &'a Fighter,
    pub division: &'a Division,
}

impl Roster {
    /// Snapshot compiled into the crate (`data/roster.json`).
    pub fn bundled() -> Result<Roster, Box<dyn Error>> {
        Roster::from_json(BUNDLED_ROSTER)
    }

    pub fn from_json(text: &str) -> Result<Roster, Box<dyn Error>> {
        let roster: Roster = serde_json::from_str(text)?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn load_file(path: &Path) -> Result<Roster, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read roster {}: {}", path.display(), e))?;
        Roster::from_json(&text)
    }

    pub fn load(source: &RosterSource) -> Result<Roster, Box<dyn Error>> {
        match source {
            RosterSource::Bundled => Roster::bundled(),
            RosterSource::File(path) => Roster::load_file(path),
        }
    }

    /// Check the snapshot invariants: recognized id prefixes, unique division ids,
    /// valid + globally unique fighter slugs, positive ranks.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        let mut division_ids: HashSet<&str> = HashSet::new();
        let mut slugs: HashSet<&str> = HashSet::new();

        for d in &self.divisions {
            if d.category().is_none() {
                return Err(format!(
                    "Division `{}`: id must start with `{}` or `{}`",
                    d.id, MENS_PREFIX, WOMENS_PREFIX
                ).into());
            }
            if !division_ids.insert(d.id.as_str()) {
                return Err(format!("Duplicate division id `{}`", d.id).into());
            }
            for f in &d.fighters {
                if !is_valid_slug(&f.slug) {
                    return Err(format!("Division `{}`: invalid fighter slug `{}`", d.id, f.slug).into());
                }
                if !slugs.insert(f.slug.as_str()) {
                    return Err(format!("Duplicate fighter slug `{}`", f.slug).into());
                }
                if f.rank == 0 {
                    return Err(format!("Fighter `{}`: rank must be positive", f.slug).into());
                }
            }
        }
        Ok(())
    }

    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    pub fn division(&self, id: &str) -> Option<&Division> {
        self.divisions.iter().find(|d| d.id == id)
    }

    /// Divisions × fighters, in display order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> + '_ {
        self.divisions.iter().flat_map(|division| {
            division.fighters.iter().map(move |fighter| Entry { fighter, division })
        })
    }

    pub fn fighter(&self, slug: &str) -> Option<Entry<'_>> {
        self.entries().find(|e| e.fighter.slug == slug)
    }

    pub fn fighter_count(&self) -> usize {
        self.divisions.iter().map(|d| d.fighters.len()).sum()
    }
}

impl Division {
    pub fn category(&self) -> Option<DivisionCategory> {
        // "womens-" does not start with "mens-", so order doesn't matter.
        if self.id.starts_with(MENS_PREFIX) {
            Some(DivisionCategory::Mens)
        } else if self.id.starts_with(WOMENS_PREFIX) {
            Some(DivisionCategory::Womens)
        } else {
            None
        }
    }

    /// Leading integer of the weight label, if any.
    pub fn weight_lbs(&self) -> Option<i64> {
        leading_int(&self.weight)
    }
}

impl Socials {
    pub fn new(entries: Vec<(String, Option<String>)>) -> Self {
        Socials(entries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries with a usable URL, in source order.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().filter_map(|(platform, url)| match url.as_deref() {
            Some(u) if !u.is_empty() => Some((platform.as_str(), u)),
            _ => None,
        })
    }

    fn upsert(&mut self, platform: String, url: Option<String>) {
        // Later duplicates win but keep the first position.
        match self.0.iter_mut().find(|(p, _)| *p == platform) {
            Some(slot) => slot.1 = url,
            None => self.0.push((platform, url)),
        }
    }
}

impl<'de> Deserialize<'de> for Socials {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SocialsVisitor;

        impl<'de> Visitor<'de> for SocialsVisitor {
            type Value = Socials;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of platform name to profile URL")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Socials, E> {
                Ok(Socials::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Socials, E> {
                Ok(Socials::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Socials, A::Error> {
                let mut socials = Socials(Vec::with_capacity(map.size_hint().unwrap_or(0)));
                while let Some((platform, url)) = map.next_entry::<String, Option<String>>()? {
                    socials.upsert(platform, url);
                }
                Ok(socials)
            }
        }

        deserializer.deserialize_any(SocialsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> &'static str {
        r#"{"divisions":[
            {"id":"mens-lightweight","name":"Men's Lightweight","weight":"155 lbs","fighters":[
                {"slug":"a-one","name":"A One","rank":1,"record":"10-0-0","img":"a.webp",
                 "notableFights":["x"],"socials":{"x":"https://x.test/a","instagram":null,"youtube":""}},
                {"slug":"a-two","name":"A Two","rank":2}
            ]},
            {"id":"womens-flyweight","name":"Women's Flyweight","weight":"125 lbs","fighters":[
                {"slug":"b-one","name":"B One","rank":1,"socials":null}
            ]}
        ]}"#
    }

    #[test]
    fn entries_follow_division_then_fighter_order() {
        let r = Roster::from_json(tiny()).unwrap();
        let slugs: Vec<&str> = r.entries().map(|e| e.fighter.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a-one", "a-two", "b-one"]);
        assert_eq!(r.fighter("b-one").unwrap().division.id, "womens-flyweight");
        assert_eq!(r.fighter_count(), 3);
    }

    #[test]
    fn socials_keep_order_and_drop_empty_urls() {
        let r = Roster::from_json(tiny()).unwrap();
        let f = &r.divisions[0].fighters[0];
        let links: Vec<(&str, &str)> = f.socials.links().collect();
        assert_eq!(links, vec![("x", "https://x.test/a")]);
        assert!(r.divisions[1].fighters[0].socials.is_empty());
    }

    #[test]
    fn duplicate_social_keys_keep_first_position() {
        let json = r#"{"b":"1","a":"2","b":"3"}"#;
        let s: Socials = serde_json::from_str(json).unwrap();
        let links: Vec<(&str, &str)> = s.links().collect();
        assert_eq!(links, vec![("b", "3"), ("a", "2")]);
    }

    #[test]
    fn division_category_and_weight() {
        let r = Roster::from_json(tiny()).unwrap();
        assert_eq!(r.divisions[0].category(), Some(DivisionCategory::Mens));
        assert_eq!(r.divisions[1].category(), Some(DivisionCategory::Womens));
        assert_eq!(r.divisions[0].weight_lbs(), Some(155));
        assert!(r.division("mens-heavyweight").is_none());
    }
}
