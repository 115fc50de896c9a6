// src/art.rs
// Placeholder artwork: portrait posters per fighter and banners per division.
// Pure pixel work on `image` buffers, so output is identical run to run.

use std::error::Error;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};

use crate::config::consts::{ART_PALETTE, BANNER_SIZE, IMAGE_EXT, PLACEHOLDER_SLUG, POSTER_SIZE};
use crate::config::options::ArtOptions;
use crate::file::ensure_directory;
use crate::progress::{NullProgress, Progress};
use crate::roster::Roster;

const FRAME_RGB: [u8; 3] = [225, 29, 72];
const FRAME_ALPHA: u8 = 90;
const ACCENT_RGB: [u8; 3] = [14, 165, 233];
const ACCENT_ALPHA: u8 = 120;
const PANEL_RGB: [u8; 3] = [11, 18, 32];
const PANEL_ALPHA: u8 = 120;

type Draw = fn((Rgb<u8>, Rgb<u8>)) -> RgbImage;

#[derive(Debug, Default)]
pub struct ArtSummary {
    pub files_written: Vec<PathBuf>,
    pub skipped: usize,
}

/// "#rrggbb" → colour.
pub fn parse_hex(hex: &str) -> Result<Rgb<u8>, Box<dyn Error>> {
    let h = hex.trim().trim_start_matches('#');
    if h.len() != 6 || !h.is_ascii() {
        return Err(format!("Bad colour `{hex}`").into());
    }
    let channel = |i: usize| u8::from_str_radix(&h[i..i + 2], 16);
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Palette entry `i`, cycling.
pub fn palette_pair(i: usize) -> Result<(Rgb<u8>, Rgb<u8>), Box<dyn Error>> {
    let (start, end) = ART_PALETTE
        .get(i % ART_PALETTE.len().max(1))
        .ok_or("Empty art palette")?;
    Ok((parse_hex(start)?, parse_hex(end)?))
}

/// Vertical blend: `start` at the top fading into `end` at the bottom.
pub fn gradient(width: u32, height: u32, start: Rgb<u8>, end: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(width, height, |_, y| {
        let t = 255 - (255 * y / height.max(1)).min(255);
        let mix = |a: u8, b: u8| ((u32::from(a) * t + u32::from(b) * (255 - t)) / 255) as u8;
        Rgb([mix(start[0], end[0]), mix(start[1], end[1]), mix(start[2], end[2])])
    })
}

fn blend(img: &mut RgbImage, x: u32, y: u32, rgb: [u8; 3], alpha: u8) {
    let a = u32::from(alpha);
    let px = img.get_pixel_mut(x, y);
    for c in 0..3 {
        px[c] = ((u32::from(rgb[c]) * a + u32::from(px[c]) * (255 - a)) / 255) as u8;
    }
}

/// Signed distance from `(px, py)` to a rounded box; negative inside.
fn rounded_box_distance(px: f32, py: f32, rect: (f32, f32, f32, f32), radius: f32) -> f32 {
    let (x0, y0, x1, y1) = rect;
    let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    let (hx, hy) = ((x1 - x0) / 2.0, (y1 - y0) / 2.0);
    let qx = (px - cx).abs() - hx + radius;
    let qy = (py - cy).abs() - hy + radius;
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - radius
}

/// Rounded rectangle: an inner stroke of `width`, optional translucent fill inside it.
fn rounded_rect(img: &mut RgbImage, rect: (u32, u32, u32, u32), radius: u32, width: u32, fill: Option<([u8; 3], u8)>) {
    let rf = (rect.0 as f32, rect.1 as f32, rect.2 as f32, rect.3 as f32);
    for y in rect.1..rect.3.min(img.height()) {
        for x in rect.0..rect.2.min(img.width()) {
            let d = rounded_box_distance(x as f32 + 0.5, y as f32 + 0.5, rf, radius as f32);
            if d > 0.0 {
                continue;
            }
            if d >= -(width as f32) {
                blend(img, x, y, FRAME_RGB, FRAME_ALPHA);
            } else if let Some((rgb, alpha)) = fill {
                blend(img, x, y, rgb, alpha);
            }
        }
    }
}

fn segment_distance(px: f32, py: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 { 0.0 } else { (((px - a.0) * dx + (py - a.1) * dy) / len2).clamp(0.0, 1.0) };
    let (nx, ny) = (a.0 + t * dx, a.1 + t * dy);
    ((px - nx).powi(2) + (py - ny).powi(2)).sqrt()
}

/// Accent stroke between two points.
fn accent_line(img: &mut RgbImage, from: (u32, u32), to: (u32, u32), width: u32) {
    let half = width as f32 / 2.0;
    let pad = width / 2 + 1;
    let (x0, x1) = (from.0.min(to.0).saturating_sub(pad), (from.0.max(to.0) + pad).min(img.width()));
    let (y0, y1) = (from.1.min(to.1).saturating_sub(pad), (from.1.max(to.1) + pad).min(img.height()));
    let a = (from.0 as f32, from.1 as f32);
    let b = (to.0 as f32, to.1 as f32);
    for y in y0..y1 {
        for x in x0..x1 {
            if segment_distance(x as f32 + 0.5, y as f32 + 0.5, a, b) <= half {
                blend(img, x, y, ACCENT_RGB, ACCENT_ALPHA);
            }
        }
    }
}

/// Portrait-sized poster.
pub fn poster(colors: (Rgb<u8>, Rgb<u8>)) -> RgbImage {
    let (w, h) = POSTER_SIZE;
    let mut img = gradient(w, h, colors.0, colors.1);
    rounded_rect(&mut img, (40, 80, w - 40, h - 80), 48, 4, None);
    accent_line(&mut img, (60, 160), (w - 60, 200), 6);
    accent_line(&mut img, (60, h - 160), (w - 60, h - 200), 6);
    img
}

/// Wide division banner with a darkened panel.
pub fn banner(colors: (Rgb<u8>, Rgb<u8>)) -> RgbImage {
    let (w, h) = BANNER_SIZE;
    let mut img = gradient(w, h, colors.0, colors.1);
    rounded_rect(&mut img, (30, 30, w - 30, h - 30), 60, 6, Some((PANEL_RGB, PANEL_ALPHA)));
    accent_line(&mut img, (80, h - 120), (w - 80, h - 90), 6);
    img
}

fn save(img: &RgbImage, path: &Path) -> Result<(), Box<dyn Error>> {
    img.save_with_format(path, ImageFormat::WebP)
        .map_err(|e| format!("Cannot write {}: {}", path.display(), e))?;
    Ok(())
}

/// Posters (`placeholder` + one per fighter) then banners (one per division).
pub fn run(
    opts: &ArtOptions,
    roster: &Roster,
    progress: Option<&mut dyn Progress>,
) -> Result<ArtSummary, Box<dyn Error>> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let poster_dir = opts.site.images_dir();
    let banner_dir = opts.site.banners_dir();
    ensure_directory(&poster_dir)?;
    ensure_directory(&banner_dir)?;

    let slugs: Vec<&str> = std::iter::once(PLACEHOLDER_SLUG)
        .chain(roster.entries().map(|e| e.fighter.slug.as_str()))
        .collect();
    let division_ids: Vec<&str> = roster.divisions().iter().map(|d| d.id.as_str()).collect();

    progress.begin(slugs.len() + division_ids.len());
    logf!("Drawing {} poster(s) and {} banner(s)", slugs.len(), division_ids.len());

    let mut summary = ArtSummary::default();
    let jobs = slugs
        .iter()
        .enumerate()
        .map(|(i, slug)| (i, *slug, poster_dir.as_path(), poster as Draw))
        .chain(
            division_ids
                .iter()
                .enumerate()
                .map(|(i, id)| (i, *id, banner_dir.as_path(), banner as Draw)),
        );

    for (i, key, dir, draw) in jobs {
        let path = dir.join(format!("{key}.{IMAGE_EXT}"));
        if opts.keep_existing && path.exists() {
            summary.skipped += 1;
            continue;
        }
        let img = draw(palette_pair(i)?);
        save(&img, &path).inspect_err(|e| loge!("{e}"))?;
        logd!("Created {}", path.display());
        progress.item_done(key, &path);
        summary.files_written.push(path);
    }

    progress.finish();
    logf!("Artwork done: {} written, {} kept", summary.files_written.len(), summary.skipped);
    Ok(summary)
}
