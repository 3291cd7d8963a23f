//! # Filter and sort pipeline for list views
//!
//! Destinations, recommendations and the wishlist all render the same way:
//! fetch the full candidate set once, then recompute a derived view from the
//! canonical array whenever a filter or sort parameter changes. Nothing here
//! is incremental or stateful: [`apply_filters`] and [`apply_sort`] are pure
//! functions of (input slice, parameters), so a parameter change can never
//! leave the view out of sync with the fetched data.
//!
//! The four predicates are independent and AND-combined:
//!
//! - text: case-insensitive substring over name, place and description
//! - season: exact equality, skipped when unset
//! - price: `min <= cost <= max`, unset bounds default to `0` / `+inf`
//! - tags: the candidate's tag set intersects the selected set (OR across
//!   selected tags), skipped when none are selected

use crate::models::{split_tags, Destination, Recommendation};

/// Read surface shared by everything the list pipeline can render.
pub trait Card {
    fn name(&self) -> &str;
    fn place(&self) -> &str;
    fn description(&self) -> &str;
    fn average_cost(&self) -> f64;
    fn best_season(&self) -> &str;
    fn tags(&self) -> &str;
    /// Backend match score; zero for plain destinations.
    fn match_score(&self) -> i32 {
        0
    }
}

impl Card for Destination {
    fn name(&self) -> &str {
        &self.name
    }
    fn place(&self) -> &str {
        &self.place
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn average_cost(&self) -> f64 {
        self.average_cost
    }
    fn best_season(&self) -> &str {
        &self.best_season
    }
    fn tags(&self) -> &str {
        &self.tags
    }
}

impl Card for Recommendation {
    fn name(&self) -> &str {
        &self.name
    }
    fn place(&self) -> &str {
        &self.place
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn average_cost(&self) -> f64 {
        self.average_cost
    }
    fn best_season(&self) -> &str {
        &self.best_season
    }
    fn tags(&self) -> &str {
        &self.tags
    }
    fn match_score(&self) -> i32 {
        self.match_score
    }
}

/// Current filter parameters. `Default` means "no filtering".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters {
    pub search: String,
    /// Exact season to match; empty selects all seasons.
    pub season: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    /// Selected tags; a candidate matches if it carries any of them.
    pub tags: Vec<String>,
}

impl Filters {
    /// Reset every parameter to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Toggle a tag in or out of the selected set.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }
}

fn matches<T: Card>(item: &T, filters: &Filters) -> bool {
    if !filters.search.is_empty() {
        let needle = filters.search.to_lowercase();
        let hit = item.name().to_lowercase().contains(&needle)
            || item.place().to_lowercase().contains(&needle)
            || item.description().to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }

    if !filters.season.is_empty() && item.best_season() != filters.season {
        return false;
    }

    let cost = item.average_cost();
    if cost < filters.price_min.unwrap_or(0.0) {
        return false;
    }
    if cost > filters.price_max.unwrap_or(f64::INFINITY) {
        return false;
    }

    if !filters.tags.is_empty() {
        let have = split_tags(item.tags());
        let hit = filters
            .tags
            .iter()
            .any(|want| have.iter().any(|h| h.eq_ignore_ascii_case(want)));
        if !hit {
            return false;
        }
    }

    true
}

/// Keep the candidates passing every active predicate, preserving order.
pub fn apply_filters<T: Card + Clone>(items: &[T], filters: &Filters) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches(*item, filters))
        .cloned()
        .collect()
}

/// Available sort orders. [`SortKey::MatchScore`] is the recommendations
/// default; destinations start from [`SortKey::Name`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Match score, descending.
    #[default]
    MatchScore,
    /// Average cost, ascending.
    Price,
    /// Name, ascending byte order.
    Name,
}

impl SortKey {
    /// Wire/form value, as the sort select spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::MatchScore => "matchScore",
            SortKey::Price => "price",
            SortKey::Name => "name",
        }
    }

    /// Parse a form value; anything unrecognised falls back to the default.
    pub fn parse(s: &str) -> SortKey {
        match s {
            "price" => SortKey::Price,
            "name" => SortKey::Name,
            _ => SortKey::MatchScore,
        }
    }
}

/// Stable sort; ties keep their fetch order.
pub fn apply_sort<T: Card>(mut items: Vec<T>, key: SortKey) -> Vec<T> {
    match key {
        SortKey::MatchScore => items.sort_by(|a, b| b.match_score().cmp(&a.match_score())),
        SortKey::Price => items.sort_by(|a, b| a.average_cost().total_cmp(&b.average_cost())),
        SortKey::Name => items.sort_by(|a, b| a.name().cmp(b.name())),
    }
    items
}

/// Distinct non-empty seasons, in first-seen order, for the season select.
pub fn seasons_of<T: Card>(items: &[T]) -> Vec<String> {
    let mut seasons = Vec::new();
    for item in items {
        let season = item.best_season();
        if !season.is_empty() && !seasons.iter().any(|s| s == season) {
            seasons.push(season.to_string());
        }
    }
    seasons
}

/// Distinct tags across every candidate, in first-seen order, for the chips.
pub fn tags_of<T: Card>(items: &[T]) -> Vec<String> {
    let mut tags = Vec::new();
    for item in items {
        for tag in split_tags(item.tags()) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dest(id: i64, name: &str, cost: f64, season: &str, tags: &str) -> Destination {
        Destination {
            id,
            name: name.to_string(),
            place: format!("{name} region"),
            description: format!("About {name}"),
            average_cost: cost,
            best_season: season.to_string(),
            tags: tags.to_string(),
            image_url: None,
        }
    }

    fn sample() -> Vec<Destination> {
        vec![
            dest(1, "Pokhara", 30000.0, "Autumn", "lake,trek"),
            dest(2, "Everest Base Camp", 150000.0, "Spring", "trek,adventure"),
        ]
    }

    fn rec(id: i64, name: &str, score: i32, cost: f64) -> Recommendation {
        Recommendation {
            id,
            name: name.to_string(),
            match_score: score,
            place: String::new(),
            description: String::new(),
            average_cost: cost,
            best_season: String::new(),
            tags: String::new(),
            image_url: None,
        }
    }

    #[test]
    fn test_default_filters_keep_everything() {
        let items = sample();
        let out = apply_filters(&items, &Filters::default());
        assert_eq!(out, items);
    }

    #[test]
    fn test_price_window_keeps_pokhara_only() {
        let items = sample();
        let filters = Filters {
            price_min: Some(0.0),
            price_max: Some(50000.0),
            ..Filters::default()
        };
        let out = apply_filters(&items, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Pokhara");
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let items = sample();
        let filters = Filters {
            price_min: Some(30000.0),
            price_max: Some(30000.0),
            ..Filters::default()
        };
        assert_eq!(apply_filters(&items, &filters).len(), 1);
    }

    #[test]
    fn test_shared_tag_keeps_both() {
        let items = sample();
        let filters = Filters {
            tags: vec!["trek".to_string()],
            ..Filters::default()
        };
        assert_eq!(apply_filters(&items, &filters).len(), 2);
    }

    #[test]
    fn test_tags_are_or_combined_and_case_insensitive() {
        let items = sample();
        let filters = Filters {
            tags: vec!["Lake".to_string(), "nonexistent".to_string()],
            ..Filters::default()
        };
        let out = apply_filters(&items, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Pokhara");
    }

    #[test]
    fn test_search_spans_name_place_description() {
        let items = sample();
        let by_name = Filters {
            search: "pokh".to_string(),
            ..Filters::default()
        };
        assert_eq!(apply_filters(&items, &by_name).len(), 1);

        let by_place = Filters {
            search: "everest base camp region".to_string(),
            ..Filters::default()
        };
        assert_eq!(apply_filters(&items, &by_place).len(), 1);

        let by_description = Filters {
            search: "about".to_string(),
            ..Filters::default()
        };
        assert_eq!(apply_filters(&items, &by_description).len(), 2);
    }

    #[test]
    fn test_season_matches_exactly() {
        let items = sample();
        let filters = Filters {
            season: "Autumn".to_string(),
            ..Filters::default()
        };
        let out = apply_filters(&items, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].best_season, "Autumn");
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let items = sample();
        // Both carry "trek", but only Everest is in Spring.
        let filters = Filters {
            season: "Spring".to_string(),
            tags: vec!["trek".to_string()],
            ..Filters::default()
        };
        let out = apply_filters(&items, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Everest Base Camp");
    }

    #[test]
    fn test_output_is_subset_of_input() {
        let items = sample();
        let filters = Filters {
            search: "trek".to_string(),
            tags: vec!["lake".to_string()],
            price_max: Some(200000.0),
            ..Filters::default()
        };
        let out = apply_filters(&items, &filters);
        for item in &out {
            assert!(items.iter().any(|d| d.id == item.id));
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let items = sample();
        let filters = Filters {
            tags: vec!["trek".to_string()],
            price_max: Some(160000.0),
            ..Filters::default()
        };
        let once = apply_filters(&items, &filters);
        let twice = apply_filters(&once, &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_price_sort_is_non_decreasing() {
        let sorted = apply_sort(sample(), SortKey::Price);
        assert_eq!(sorted[0].name, "Pokhara");
        assert_eq!(sorted[1].name, "Everest Base Camp");
        for pair in sorted.windows(2) {
            assert!(pair[0].average_cost <= pair[1].average_cost);
        }
    }

    #[test]
    fn test_name_sort_is_non_decreasing() {
        let sorted = apply_sort(sample(), SortKey::Name);
        for pair in sorted.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }

    #[test]
    fn test_match_score_sort_is_non_increasing() {
        let recs = vec![rec(1, "a", 2, 10.0), rec(2, "b", 5, 20.0), rec(3, "c", 3, 5.0)];
        let sorted = apply_sort(recs, SortKey::MatchScore);
        for pair in sorted.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_sort_keeps_fetch_order_on_ties() {
        let recs = vec![rec(1, "first", 3, 10.0), rec(2, "second", 3, 10.0)];
        let by_score = apply_sort(recs.clone(), SortKey::MatchScore);
        assert_eq!(by_score[0].id, 1);
        assert_eq!(by_score[1].id, 2);

        let by_price = apply_sort(recs, SortKey::Price);
        assert_eq!(by_price[0].id, 1);
    }

    #[test]
    fn test_clear_restores_default_sorted_view() {
        let items = sample();
        let mut filters = Filters {
            search: "pokh".to_string(),
            season: "Autumn".to_string(),
            price_max: Some(50000.0),
            tags: vec!["lake".to_string()],
            ..Filters::default()
        };

        filters.clear();
        assert_eq!(filters, Filters::default());

        // Defaults back through the pipeline reproduce the default-sorted set.
        let out = apply_sort(apply_filters(&items, &filters), SortKey::Name);
        assert_eq!(out, apply_sort(items, SortKey::Name));
    }

    #[test]
    fn test_empty_result_is_a_valid_outcome() {
        let items = sample();
        let filters = Filters {
            search: "atlantis".to_string(),
            ..Filters::default()
        };
        assert!(apply_filters(&items, &filters).is_empty());
    }

    #[test]
    fn test_toggle_tag_round_trips() {
        let mut filters = Filters::default();
        filters.toggle_tag("trek");
        assert_eq!(filters.tags, vec!["trek"]);
        filters.toggle_tag("trek");
        assert!(filters.tags.is_empty());
    }

    #[test]
    fn test_option_lists_dedupe_in_first_seen_order() {
        let items = vec![
            dest(1, "A", 1.0, "Autumn", "trek,lake"),
            dest(2, "B", 2.0, "Spring", "trek"),
            dest(3, "C", 3.0, "Autumn", ""),
            dest(4, "D", 4.0, "", "culture"),
        ];
        assert_eq!(seasons_of(&items), vec!["Autumn", "Spring"]);
        assert_eq!(tags_of(&items), vec!["trek", "lake", "culture"]);
    }
}
