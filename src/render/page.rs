// src/render/page.rs
// Standalone profile document for one fighter. Pages live one level below the
// site root, so every site-relative link is prefixed with `../`.

use super::{GalleryImage, ordinal, social_links, stat_card};
use crate::config::consts::SITE_NAME;
use crate::roster::Entry;

const BRAND_MARK: &str = r##"<svg aria-hidden="true" viewBox="0 0 48 48" fill="none">
            <path
              d="M8 12 20 4h16l12 8v16l-12 8H20l-12-8z"
              fill="rgba(225,29,72,0.24)"
              stroke="#E11D48"
              stroke-width="2"
            ></path>
            <path
              d="m18 16 6-4h8l6 4v8l-6 4h-8l-6-4z"
              fill="rgba(14,165,233,0.32)"
              stroke="#0EA5E9"
              stroke-width="2"
            ></path>
          </svg>"##;

fn notable_list(fights: &[String]) -> String {
    fights
        .iter()
        .map(|fight| format!("<li>{}</li>", esc!(fight)))
        .collect::<Vec<_>>()
        .join("\n                ")
}

fn gallery_grid(images: &[GalleryImage]) -> String {
    images
        .iter()
        .map(|img| {
            format!(
                r#"
              <figure>
                <img src="{}" alt="{}" loading="lazy" />
              </figure>"#,
                esc!(img.src),
                esc!(img.alt)
            )
        })
        .collect()
}

fn stats_grid(entry: Entry<'_>) -> String {
    let f = entry.fighter;
    [
        stat_card("Record", Some(f.record.as_str())),
        stat_card("Stance", f.stance.as_deref()),
        stat_card("Height", f.height.as_deref()),
        stat_card("Reach", f.reach.as_deref()),
        stat_card("Nationality", f.nationality.as_deref()),
        stat_card("Primary Gym", f.gym.as_deref()),
    ]
    .join("\n              ")
}

/// Full HTML document for `entry`. Output depends only on its inputs, so
/// regenerating over the same roster and image set yields identical bytes.
pub fn fighter_page(entry: Entry<'_>, gallery: &[GalleryImage]) -> String {
    let Entry { fighter, division } = entry;
    let name = esc!(fighter.name);
    let division_name = esc!(division.name);
    let summary = esc!(fighter.summary);
    let site = esc!(SITE_NAME);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta http-equiv="X-UA-Compatible" content="IE=edge" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{name} | {site}</title>
    <meta
      name="description"
      content="Profile for {name}, ranked {rank} in {division_name}. Stats, summary, notable fights, and imagery from {site}."
    />
    <link rel="preconnect" href="https://fonts.googleapis.com" />
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
    <link
      href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&family=Poppins:wght@600;700&display=swap"
      rel="stylesheet"
    />
    <link rel="stylesheet" href="../assets/css/styles.min.css" />
    <link rel="stylesheet" href="../assets/css/overrides.css?v=1" />
  </head>
  <body data-page="fighter" data-fighter="{slug}">
    <a class="skip-link" href="#main-content">Skip to content</a>

    <header class="site-header" role="banner">
      <div class="site-header__inner">
        <a class="brand" href="../index.html" aria-label="{site} home">
          {brand}
          {site}
        </a>

        <button
          type="button"
          class="nav-toggle"
          aria-expanded="false"
          aria-controls="primary-navigation"
        >
          <span aria-hidden="true"></span>
          <span class="sr-only">Toggle navigation</span>
        </button>

        <nav class="primary-nav" id="primary-navigation" aria-label="Primary">
          <ul>
            <li><a href="../index.html" data-nav="home">Home</a></li>
            <li><a href="../divisions.html" data-nav="divisions">Divisions</a></li>
            <li><a href="../about.html" data-nav="about">About</a></li>
          </ul>
        </nav>
      </div>
    </header>

    <main id="main-content">
      <section class="section page-header">
        <div class="container">
          <nav class="breadcrumb" aria-label="Breadcrumb">
            <a href="../index.html">Home</a>
            <a href="../divisions.html">Divisions</a>
            <span aria-current="page">{name}</span>
          </nav>
          <div class="badge">{division_name}</div>
          <h1>{name}</h1>
          <p>{summary}</p>
          <a class="button button-outline" href="../divisions.html">Back to Divisions</a>
        </div>
      </section>

      <section class="section">
        <div class="container fighter-hero">
          <div class="fighter-hero__media">
            <img src="../{img}" alt="{name} hero portrait" />
          </div>
          <div class="fighter-meta">
            <h2>Overview</h2>
            <p>{summary}</p>
            <div class="stats-grid" aria-label="Fighter statistics">
              {stats}
            </div>
            {socials}
          </div>
        </div>
      </section>

      <section class="section section--tight">
        <div class="container">
          <h2>Notable fights</h2>
          <ul class="notable-fights">
            {notable}
          </ul>
        </div>
      </section>

      <section class="section section--tight" aria-labelledby="gallery-title">
        <div class="container">
          <div class="section-title">
            <h2 id="gallery-title">Gallery</h2>
            <span>Moments from the {division_name} contender</span>
          </div>
          <div class="gallery-grid">
            {gallery}
          </div>
        </div>
      </section>
    </main>

    <footer class="site-footer" role="contentinfo">
      <div class="site-footer__inner">
        <div class="footer-top">
          <a class="brand" href="../index.html">
            {brand}
            {site}
          </a>
        </div>
        <div class="footer-bottom">
          <nav class="footer-nav" aria-label="Footer">
            <a href="../index.html">Home</a>
            <a href="../divisions.html">Divisions</a>
            <a href="../about.html">About</a>
          </nav>
          <p class="disclaimer">
            Unofficial fan site for educational purposes. All rights belong to their respective owners.
          </p>
        </div>
      </div>
    </footer>

    <script type="module" src="../assets/js/main.min.js"></script>
  </body>
</html>"##,
        rank = ordinal(i64::from(fighter.rank)),
        slug = esc!(fighter.slug),
        img = esc!(fighter.img),
        brand = BRAND_MARK,
        stats = stats_grid(entry),
        socials = social_links(&fighter.socials),
        notable = notable_list(&fighter.notable_fights),
        gallery = gallery_grid(gallery),
    )
}
