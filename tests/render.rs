// tests/render.rs
use two_per_division::core::html::escape_html;
use two_per_division::render::{
    division_card, featured_meta, ordinal, profile_href, quick_browse_item, social_links, stat_card,
};
use two_per_division::roster::{Roster, Socials};

fn roster() -> Roster {
    Roster::from_json(
        r#"{"divisions":[{"id":"mens-bantamweight","name":"Men's <Bantam>","weight":"135 lbs","fighters":[
            {"slug":"sean-omalley","name":"Sean \"Suga\" O'Malley","rank":2,"record":"18-2-0",
             "img":"assets/img/fighters/sean-omalley.webp"}]}]}"#,
    )
    .unwrap()
}

#[test]
fn ordinals_from_the_table() {
    let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 111].iter().map(|n| ordinal(*n)).collect();
    assert_eq!(got, vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "111th"]);
    assert_eq!(ordinal(-21), "21st");
}

#[test]
fn escaping_leaves_no_raw_specials() {
    let samples = ["", "plain", "<script>alert('x')</script>", "a & b && c", r#""quoted" & 'single'"#, "&amp; already"];
    for s in samples {
        let e = escape_html(s);
        assert!(!e.contains(['<', '>', '"', '\'']), "{e}");
        // Every ampersand starts one of the five entities.
        for (i, _) in e.match_indices('&') {
            let rest = &e[i..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"].iter().any(|ent| rest.starts_with(ent)),
                "{e}"
            );
        }
    }
}

#[test]
fn ampersand_goes_first() {
    assert_eq!(escape_html("<"), "&lt;");
    assert_eq!(escape_html(escape_html("<")), "&amp;lt;");
}

#[test]
fn stat_cards_and_socials() {
    assert_eq!(stat_card("Record", Some("")), "");
    assert!(stat_card("Primary Gym", Some("AKA")).contains("<span>Primary Gym</span><strong>AKA</strong>"));

    let socials = Socials::new(vec![
        ("x".to_string(), Some("https://x.test/s".to_string())),
        ("tiktok".to_string(), None),
    ]);
    let html = social_links(&socials);
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(html.contains(r#"target="_blank" rel="noopener">X</a>"#));
}

#[test]
fn browse_fragments_escape_roster_text() {
    let r = roster();
    let d = &r.divisions()[0];
    let entry = r.fighter("sean-omalley").unwrap();

    let meta = featured_meta(entry);
    assert!(meta.contains("<strong>Sean &quot;Suga&quot; O&#39;Malley</strong>"));
    assert!(meta.contains("2nd in Men&#39;s &lt;Bantam&gt; · Record 18-2-0"));

    let item = quick_browse_item(d);
    assert!(item.contains(r#"data-division-id="mens-bantamweight""#));
    assert!(item.contains(r#"id="popover-mens-bantamweight""#));
    assert!(item.contains(r#"aria-hidden="true""#));
    assert!(item.contains(r#"aria-label="Men&#39;s &lt;Bantam&gt; fighters""#));
    assert!(item.contains(&format!(r#"href="{}">Open page</a>"#, profile_href("sean-omalley"))));

    let card = division_card(d);
    assert!(card.contains(r#"<img src="assets/img/divisions/mens-bantamweight.webp""#));
    assert!(card.contains("<h3>Men&#39;s &lt;Bantam&gt;</h3>"));
    assert!(card.contains("2nd · Record 18-2-0"));
    assert!(card.contains(r#"href="fighters/sean-omalley.html">Visit profile</a>"#));
}
