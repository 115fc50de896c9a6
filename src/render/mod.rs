// src/render/mod.rs
// Shared markup vocabulary: used by the page generator and the browser controller alike.

pub mod page;

use std::path::{Path, PathBuf};

use crate::config::consts::{DIVISION_IMG_SUBDIR, FIGHTERS_SUBDIR, FIGHTER_IMG_SUBDIR, GALLERY_SLOTS, IMAGE_EXT};
use crate::roster::{Division, Entry, Fighter, Roster, Socials};

/// English ordinal of a rank. Magnitude is used for negative input.
pub fn ordinal(rank: i64) -> String {
    let value = rank.unsigned_abs();
    let suffix = match (value % 100, value % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{value}{suffix}")
}

/// Labeled stat block. Nothing at all for a missing/empty value.
pub fn stat_card(label: &str, value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => format!(
            r#"<div class="stat-card"><span>{}</span><strong>{}</strong></div>"#,
            esc!(label),
            esc!(v)
        ),
        _ => s!(),
    }
}

/// Pill list of social profiles, or nothing when no platform has a URL.
pub fn social_links(socials: &Socials) -> String {
    let items: Vec<String> = socials
        .links()
        .map(|(platform, url)| {
            format!(
                r#"<a class="button button-outline" href="{}" target="_blank" rel="noopener">{}</a>"#,
                esc!(url),
                esc!(platform.to_uppercase())
            )
        })
        .collect();

    if items.is_empty() {
        return s!();
    }

    format!(
        "\n            <div class=\"pill-list\" aria-label=\"Fighter social links\">\n              {}\n            </div>",
        items.join("\n              ")
    )
}

/* ---------------- Gallery ---------------- */

/// Presence check for gallery files, by bare file name.
pub trait GalleryLookup {
    fn exists(&self, file_name: &str) -> bool;
}

impl<F: Fn(&str) -> bool> GalleryLookup for F {
    fn exists(&self, file_name: &str) -> bool {
        self(file_name)
    }
}

/// Looks files up in the fighter image directory.
pub struct FsGallery {
    dir: PathBuf,
}

impl FsGallery {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }
}

impl GalleryLookup for FsGallery {
    fn exists(&self, file_name: &str) -> bool {
        self.dir.join(file_name).is_file()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    /// Relative to a page in the fighters directory.
    pub src: String,
    pub alt: String,
}

pub fn gallery_file_name(slug: &str, slot: usize) -> String {
    format!("{slug}-{slot}.{IMAGE_EXT}")
}

/// Check `<slug>-1..3` in slot order; keep what exists. Alt text numbers the
/// found images, so a lone `-3` image is still "gallery image 1".
pub fn gallery_images(slug: &str, name: &str, lookup: &dyn GalleryLookup) -> Vec<GalleryImage> {
    (1..=GALLERY_SLOTS)
        .map(|slot| gallery_file_name(slug, slot))
        .filter(|file| lookup.exists(file))
        .enumerate()
        .map(|(i, file)| GalleryImage {
            src: format!("../{FIGHTER_IMG_SUBDIR}/{file}"),
            alt: format!("{name} gallery image {}", i + 1),
        })
        .collect()
}

/* ---------------- Fragments for the browsing pages ---------------- */

/// Link to a generated profile, relative to the site root.
pub fn profile_href(slug: &str) -> String {
    format!("{FIGHTERS_SUBDIR}/{slug}.html")
}

pub fn banner_src(division_id: &str) -> String {
    format!("{DIVISION_IMG_SUBDIR}/{division_id}.{IMAGE_EXT}")
}

fn rank_i64(f: &Fighter) -> i64 {
    i64::from(f.rank)
}

/// Inner markup of the featured strip's meta block.
pub fn featured_meta(entry: Entry<'_>) -> String {
    let Entry { fighter, division } = entry;
    format!(
        "\n      <strong>{}</strong>\n      <span>{} in {} · Record {}</span>\n    ",
        esc!(fighter.name),
        ordinal(rank_i64(fighter)),
        esc!(division.name),
        esc!(fighter.record)
    )
}

pub fn popover_id(division_id: &str) -> String {
    format!("popover-{division_id}")
}

fn mini_roster_row(f: &Fighter) -> String {
    format!(
        r#"
        <div class="mini-roster__fighter">
          <img src="{img}" alt="{name} portrait" loading="lazy" />
          <div>
            <strong>{name}</strong>
            <span class="rank">{rank} · {record}</span>
          </div>
          <a class="button button-outline" href="{href}">Open page</a>
        </div>"#,
        img = esc!(f.img),
        name = esc!(f.name),
        rank = ordinal(rank_i64(f)),
        record = esc!(f.record),
        href = esc!(profile_href(&f.slug)),
    )
}

/// Trigger button plus its (hidden) mini-roster popover.
pub fn quick_browse_item(d: &Division) -> String {
    let rows: String = d.fighters.iter().map(mini_roster_row).collect();
    format!(
        r#"
    <div class="quick-browse__item">
      <button type="button" class="quick-browse__button" aria-haspopup="dialog" data-division-id="{id}">
        <strong>{name}</strong><br />
        <span class="quick-browse__weight">{weight}</span>
      </button>
      <div class="quick-browse__popover surface" id="{pid}" role="dialog" aria-label="{name} fighters" aria-hidden="true">
        <div class="mini-roster">{rows}
        </div>
      </div>
    </div>"#,
        id = esc!(d.id),
        pid = esc!(popover_id(&d.id)),
        name = esc!(d.name),
        weight = esc!(d.weight),
    )
}

pub fn quick_browse(roster: &Roster) -> String {
    roster.divisions().iter().map(quick_browse_item).collect()
}

fn fighter_mini(f: &Fighter) -> String {
    format!(
        r#"
            <article class="fighter-mini">
              <img src="{img}" alt="{name} portrait" loading="lazy" />
              <div>
                <h4>{name}</h4>
                <p class="meta">{rank} · Record {record}</p>
                <a class="button button-outline" href="{href}">Visit profile</a>
              </div>
            </article>"#,
        img = esc!(f.img),
        name = esc!(f.name),
        rank = ordinal(rank_i64(f)),
        record = esc!(f.record),
        href = esc!(profile_href(&f.slug)),
    )
}

/// One card of the divisions grid.
pub fn division_card(d: &Division) -> String {
    let fighters: String = d.fighters.iter().map(fighter_mini).collect();
    format!(
        r#"
    <article class="division-card" role="listitem">
      <figure class="division-card__banner">
        <img src="{banner}" alt="{name} banner artwork" loading="lazy" />
      </figure>
      <header>
        <h3>{name}</h3>
        <span>{weight}</span>
      </header>
      <div class="division-fighters">{fighters}
      </div>
    </article>"#,
        banner = esc!(banner_src(&d.id)),
        name = esc!(d.name),
        weight = esc!(d.weight),
    )
}

pub fn division_cards(divisions: &[&Division]) -> String {
    divisions.iter().map(|d| division_card(d)).collect()
}
