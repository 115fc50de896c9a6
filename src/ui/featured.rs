// src/ui/featured.rs
use rand::Rng;

use super::dom::Dom;
use crate::render::{featured_meta, profile_href};
use crate::roster::{Entry, Roster};

/// Source of the featured pick: an index in `0..len`, `len > 0`.
pub trait PickIndex {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform pick from the thread-local generator.
pub struct ThreadRng;

impl PickIndex for ThreadRng {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always the same index (wrapped into range).
pub struct Fixed(pub usize);

impl PickIndex for Fixed {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// One entry from the flattened roster, or `None` when it is empty.
pub fn pick_entry<'r>(roster: &'r Roster, rng: &mut dyn PickIndex) -> Option<Entry<'r>> {
    let entries: Vec<Entry<'r>> = roster.entries().collect();
    if entries.is_empty() {
        return None;
    }
    let i = rng.pick(entries.len());
    entries.get(i).copied()
}

/// Fill `#featured-strip` with a random fighter. Returns the slug shown.
pub fn hydrate<D: Dom>(dom: &mut D, roster: &Roster, rng: &mut dyn PickIndex) -> Option<String> {
    let strip = dom.by_id("featured-strip")?;
    let entry = pick_entry(roster, rng)?;
    let f = entry.fighter;

    if let Some(avatar) = dom.query(Some(&strip), ".featured-avatar") {
        dom.set_attr(&avatar, "src", &f.img);
        dom.set_attr(&avatar, "alt", &format!("{} portrait", f.name));
        dom.set_attr(&avatar, "loading", "lazy");
    }
    if let Some(meta) = dom.query(Some(&strip), ".featured-meta") {
        dom.set_inner_html(&meta, &featured_meta(entry));
    }
    if let Some(cta) = dom.query(Some(&strip), "a.button") {
        dom.set_attr(&cta, "href", &profile_href(&f.slug));
        dom.set_text(&cta, &format!("View {}", f.name));
    }

    logd!("Featured {} ({})", f.slug, entry.division.id);
    Some(f.slug.clone())
}
