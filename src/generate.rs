// src/generate.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::options::SiteOptions,
    file::{ensure_directory, fighter_page_path, write_text},
    progress::{NullProgress, Progress},
    render::{FsGallery, GalleryLookup, gallery_images, page::fighter_page},
    roster::Roster,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Write one profile page per fighter, in roster order.
/// The first failed write aborts the batch and is returned as-is.
pub fn run(
    opts: &SiteOptions,
    roster: &Roster,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let gallery = FsGallery::new(opts.images_dir());
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let result = write_pages(opts, roster, &gallery, progress);
    progress.finish();
    result
}

/// Same as [`run`] with an explicit gallery lookup.
pub fn write_pages(
    opts: &SiteOptions,
    roster: &Roster,
    gallery: &dyn GalleryLookup,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    let out_dir = opts.out_dir();
    ensure_directory(&out_dir).inspect_err(|e| loge!("Output dir {}: {e}", out_dir.display()))?;

    let total = roster.fighter_count();
    logf!("Generating {total} fighter page(s) into {}", out_dir.display());
    progress.begin(total);

    let mut written = Vec::with_capacity(total);
    for entry in roster.entries() {
        let slug = &entry.fighter.slug;
        let images = gallery_images(slug, &entry.fighter.name, gallery);
        let html = fighter_page(entry, &images);
        let path = fighter_page_path(&out_dir, slug);

        write_text(&path, &html).inspect_err(|e| loge!("{e}"))?;
        logd!("Wrote {} ({} gallery image(s))", path.display(), images.len());

        progress.item_done(slug, &path);
        written.push(path);
    }

    logf!("Generated {} page(s)", written.len());
    Ok(RunSummary { files_written: written })
}
