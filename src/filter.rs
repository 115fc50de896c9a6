// src/filter.rs
// Division grid filtering: category × weight tier × free-text search, all conjunctive.

use crate::config::consts::{HEAVY_MIN_LBS, LIGHT_MAX_LBS, MID_MAX_LBS, MID_MIN_LBS};
use crate::core::sanitize::fold_search;
use crate::roster::{Division, DivisionCategory, Roster};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Men,
    Women,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WeightTier {
    #[default]
    All,
    Light,
    Mid,
    Heavy,
}

impl Category {
    /// Form value → category. Unknown values mean no restriction.
    pub fn from_value(v: &str) -> Self {
        match v {
            "men" => Category::Men,
            "women" => Category::Women,
            _ => Category::All,
        }
    }

    fn admits(self, d: &Division) -> bool {
        match self {
            Category::All => true,
            Category::Men => d.category() == Some(DivisionCategory::Mens),
            Category::Women => d.category() == Some(DivisionCategory::Womens),
        }
    }
}

impl WeightTier {
    pub fn from_value(v: &str) -> Self {
        match v {
            "light" => WeightTier::Light,
            "mid" => WeightTier::Mid,
            "heavy" => WeightTier::Heavy,
            _ => WeightTier::All,
        }
    }

    /// Divisions whose label has no leading number are never excluded here.
    fn admits(self, d: &Division) -> bool {
        let Some(lbs) = d.weight_lbs() else {
            return true;
        };
        match self {
            WeightTier::All => true,
            WeightTier::Light => lbs <= LIGHT_MAX_LBS,
            WeightTier::Mid => (MID_MIN_LBS..=MID_MAX_LBS).contains(&lbs),
            WeightTier::Heavy => lbs >= HEAVY_MIN_LBS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub category: Category,
    pub weight: WeightTier,
    /// Already folded (trimmed + lowercased). Empty = no text filter.
    search: String,
}

impl FilterQuery {
    pub fn new(category: Category, weight: WeightTier, search: &str) -> Self {
        Self { category, weight, search: fold_search(search) }
    }

    /// Build from raw form-field values; missing fields read as "all" / empty.
    pub fn from_fields(category: Option<&str>, weight: Option<&str>, search: Option<&str>) -> Self {
        Self::new(
            category.map(Category::from_value).unwrap_or_default(),
            weight.map(WeightTier::from_value).unwrap_or_default(),
            search.unwrap_or(""),
        )
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    fn search_admits(&self, d: &Division) -> bool {
        if self.search.is_empty() {
            return true;
        }
        d.name.to_lowercase().contains(&self.search)
            || d.fighters.iter().any(|f| f.name.to_lowercase().contains(&self.search))
    }

    pub fn matches(&self, d: &Division) -> bool {
        self.category.admits(d) && self.weight.admits(d) && self.search_admits(d)
    }
}

/// Matching divisions in roster order.
pub fn apply<'r>(roster: &'r Roster, query: &FilterQuery) -> Vec<&'r Division> {
    roster.divisions().iter().filter(|d| query.matches(d)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterSummary {
    pub divisions: usize,
    pub fighters: usize,
}

impl FilterSummary {
    pub fn of(divisions: &[&Division]) -> Self {
        Self {
            divisions: divisions.len(),
            fighters: divisions.iter().map(|d| d.fighters.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.divisions == 0
    }

    pub fn label(&self) -> String {
        if self.is_empty() {
            s!("No divisions displayed")
        } else {
            format!("{} divisions · {} fighters displayed", self.divisions, self.fighters)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::from_json(
            r#"{"divisions":[
                {"id":"mens-lightweight","name":"Men's Lightweight","weight":"155 lbs","fighters":[
                    {"slug":"islam","name":"Islam Makhachev","rank":1},
                    {"slug":"arman","name":"Arman Tsarukyan","rank":2}]},
                {"id":"womens-bantamweight","name":"Women's Bantamweight","weight":"135 lbs","fighters":[
                    {"slug":"julianna","name":"Julianna Peña","rank":1}]},
                {"id":"mens-heavyweight","name":"Men's Heavyweight","weight":"265 lbs","fighters":[
                    {"slug":"jon","name":"Jon Jones","rank":1}]},
                {"id":"mens-openweight","name":"Men's Openweight","weight":"Open","fighters":[]}
            ]}"#,
        )
        .unwrap()
    }

    fn ids(divs: &[&Division]) -> Vec<String> {
        divs.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn men_mid_keeps_lightweight_drops_women() {
        let r = roster();
        let q = FilterQuery::new(Category::Men, WeightTier::Mid, "");
        assert!(q.matches(r.division("mens-lightweight").unwrap()));
        assert!(!q.matches(r.division("womens-bantamweight").unwrap()));
    }

    #[test]
    fn tier_boundaries() {
        let mut r = roster();
        let d = &mut r.divisions[0];
        for (w, light, mid, heavy) in [("145", true, false, false), ("146", false, true, false),
                                        ("185", false, true, false), ("186", false, false, true)] {
            d.weight = s!(w);
            assert_eq!(WeightTier::Light.admits(d), light, "{w} light");
            assert_eq!(WeightTier::Mid.admits(d), mid, "{w} mid");
            assert_eq!(WeightTier::Heavy.admits(d), heavy, "{w} heavy");
        }
    }

    #[test]
    fn non_numeric_weight_bypasses_tier() {
        let r = roster();
        let q = FilterQuery::new(Category::All, WeightTier::Heavy, "");
        assert_eq!(ids(&apply(&r, &q)), vec!["mens-heavyweight", "mens-openweight"]);
    }

    #[test]
    fn search_matches_division_or_fighter_name() {
        let r = roster();
        let q = FilterQuery::from_fields(None, None, Some("  PEÑA "));
        assert_eq!(ids(&apply(&r, &q)), vec!["womens-bantamweight"]);
        let q = FilterQuery::from_fields(Some("all"), Some("all"), Some("weight"));
        assert_eq!(apply(&r, &q).len(), 4);
    }

    #[test]
    fn summary_counts_only_matching_divisions() {
        let r = roster();
        let q = FilterQuery::new(Category::Men, WeightTier::All, "");
        let s = FilterSummary::of(&apply(&r, &q));
        assert_eq!(s.label(), "3 divisions · 3 fighters displayed");

        let q = FilterQuery::new(Category::Women, WeightTier::Heavy, "");
        let s = FilterSummary::of(&apply(&r, &q));
        assert!(s.is_empty());
        assert_eq!(s.label(), "No divisions displayed");
    }

    #[test]
    fn every_combination_is_conjunctive() {
        let r = roster();
        let cats = [Category::All, Category::Men, Category::Women];
        let tiers = [WeightTier::All, WeightTier::Light, WeightTier::Mid, WeightTier::Heavy];
        for c in cats {
            for t in tiers {
                for text in ["", "jon", "men"] {
                    let q = FilterQuery::new(c, t, text);
                    let want = r.divisions.iter()
                        .filter(|d| c.admits(d) && t.admits(d) && q.search_admits(d))
                        .count();
                    assert_eq!(apply(&r, &q).len(), want);
                }
            }
        }
    }
}
