// tests/roster.rs
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use two_per_division::config::options::RosterSource;
use two_per_division::roster::{DivisionCategory, Roster};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("tpd_roster_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn bundled_snapshot_is_complete_and_consistent() {
    let r = Roster::bundled().unwrap();
    assert_eq!(r.divisions().len(), 11);
    assert_eq!(r.fighter_count(), 22);

    let slugs: HashSet<&str> = r.entries().map(|e| e.fighter.slug.as_str()).collect();
    assert_eq!(slugs.len(), 22);

    for d in r.divisions() {
        assert!(d.category().is_some(), "{}", d.id);
        assert!(d.weight_lbs().is_some(), "{}", d.weight);
        let ranks: Vec<u32> = d.fighters.iter().map(|f| f.rank).collect();
        assert_eq!(ranks, vec![1, 2], "{}", d.id);
    }
    let womens = r.divisions().iter().filter(|d| d.category() == Some(DivisionCategory::Womens)).count();
    assert_eq!(womens, 3);
}

#[test]
fn lookups_report_not_found_instead_of_failing() {
    let r = Roster::bundled().unwrap();
    assert!(r.division("mens-openweight").is_none());
    assert!(r.fighter("nobody").is_none());
    let e = r.fighter("jon-jones").unwrap();
    assert_eq!(e.division.id, "mens-heavyweight");
    assert_eq!(r.division("mens-heavyweight").unwrap().name, "Men’s Heavyweight");
}

#[test]
fn flattened_order_is_divisions_then_fighters() {
    let r = Roster::bundled().unwrap();
    let first: Vec<&str> = r.entries().take(3).map(|e| e.fighter.slug.as_str()).collect();
    assert_eq!(first, vec!["alexandre-pantoja", "brandon-royval", "merab-dvalishvili"]);
    let last = r.entries().last().unwrap();
    assert_eq!(last.division.id, "womens-bantamweight");
}

#[test]
fn invalid_snapshots_are_rejected() {
    let dup = r#"{"divisions":[
        {"id":"mens-a","name":"A","weight":"1","fighters":[{"slug":"x","name":"X","rank":1}]},
        {"id":"womens-b","name":"B","weight":"2","fighters":[{"slug":"x","name":"Y","rank":1}]}]}"#;
    let err = Roster::from_json(dup).unwrap_err().to_string();
    assert!(err.contains("Duplicate fighter slug `x`"), "{err}");

    let prefix = r#"{"divisions":[{"id":"open-a","name":"A","weight":"1","fighters":[]}]}"#;
    assert!(Roster::from_json(prefix).is_err());

    let rank = r#"{"divisions":[{"id":"mens-a","name":"A","weight":"1","fighters":[{"slug":"x","name":"X","rank":0}]}]}"#;
    assert!(Roster::from_json(rank).is_err());

    let slug = r#"{"divisions":[{"id":"mens-a","name":"A","weight":"1","fighters":[{"slug":"Bad Slug","name":"X","rank":1}]}]}"#;
    assert!(Roster::from_json(slug).is_err());

    assert!(Roster::from_json("{not json").is_err());
}

#[test]
fn roster_file_source() {
    let dir = tmp_dir("file");
    let path = dir.join("roster.json");
    fs::write(&path, r#"{"divisions":[{"id":"womens-strawweight","name":"S","weight":"115 lbs",
        "fighters":[{"slug":"zhang-weili","name":"Zhang Weili","rank":1,"socials":{"weibo":"https://w.test/z"}}]}]}"#).unwrap();

    let r = Roster::load(&RosterSource::File(path.clone())).unwrap();
    assert_eq!(r.fighter_count(), 1);
    let f = &r.divisions()[0].fighters[0];
    assert_eq!(f.socials.links().collect::<Vec<_>>(), vec![("weibo", "https://w.test/z")]);
    assert!(f.stance.is_none() && f.notable_fights.is_empty());

    let missing = Roster::load(&RosterSource::File(dir.join("nope.json"))).unwrap_err().to_string();
    assert!(missing.starts_with("Cannot read roster"), "{missing}");
}
