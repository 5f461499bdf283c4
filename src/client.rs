//! Catalog client: the search flow and detail fetch behind the browser UI.
//!
//! View states are deliberately coarse. Anything that is not rendered
//! content collapses into one generic error state; the cause is only
//! logged.

use crate::label::ToxinLabel;
use crate::models::{Food, FoodDetail};

/// Outcome of a search, as the UI distinguishes it.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    Results(Vec<Food>),
    NoResults,
    Error,
}

/// Outcome of a detail fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelView {
    Label(ToxinLabel),
    /// The food exists but has no associated toxins.
    NoToxinInfo,
    Error,
}

pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        CatalogClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Search foods by name. An empty or whitespace-only query is a no-op:
    /// no request is sent and `None` is returned.
    pub async fn search(&self, raw_query: &str) -> Option<SearchView> {
        let query = normalize_query(raw_query)?;
        Some(self.run_search(&query).await)
    }

    async fn run_search(&self, query: &str) -> SearchView {
        let url = format!("{}/api/foods/search", self.base_url);

        let response = match self.http.get(&url).query(&[("query", query)]).send().await {
            Ok(response) => response,
            Err(err) => {
                log::error!("Search request failed: {}", err);
                return SearchView::Error;
            }
        };

        if !response.status().is_success() {
            log::error!("Search failed with status {}", response.status());
            return SearchView::Error;
        }

        match response.json::<Vec<Food>>().await {
            Ok(foods) if foods.is_empty() => SearchView::NoResults,
            Ok(foods) => SearchView::Results(foods),
            Err(err) => {
                log::error!("Failed to decode search results: {}", err);
                SearchView::Error
            }
        }
    }

    /// Fetch a food's detail payload and compute its toxin label.
    pub async fn food_label(&self, food_id: i32) -> LabelView {
        let url = format!("{}/api/foods/{}", self.base_url, food_id);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                log::error!("Food detail request failed: {}", err);
                return LabelView::Error;
            }
        };

        if !response.status().is_success() {
            log::error!("Food detail failed with status {}", response.status());
            return LabelView::Error;
        }

        match response.json::<FoodDetail>().await {
            Ok(food) => classify_detail(&food),
            Err(err) => {
                log::error!("Failed to decode food detail: {}", err);
                LabelView::Error
            }
        }
    }
}

/// Trim the query; `None` means "do not search at all".
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A food with no associated toxins is a valid state, distinct from an
/// unknown ID (which never reaches here: the service answers 404).
pub fn classify_detail(food: &FoodDetail) -> LabelView {
    if food.toxins.is_empty() {
        LabelView::NoToxinInfo
    } else {
        LabelView::Label(ToxinLabel::from_detail(food))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodToxinDetail;

    #[test]
    fn whitespace_queries_normalize_to_none() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("\t\n"), None);
        assert_eq!(normalize_query("  tomato "), Some("tomato".to_string()));
    }

    #[test]
    fn detail_without_toxins_classifies_as_no_toxin_info() {
        let food = FoodDetail {
            id: 1,
            name: "Cucumber".to_string(),
            description: None,
            serving_size: "100 g".to_string(),
            toxins: vec![],
        };

        assert_eq!(classify_detail(&food), LabelView::NoToxinInfo);
    }

    #[test]
    fn detail_with_toxins_classifies_as_label() {
        let food = FoodDetail {
            id: 1,
            name: "Tomato".to_string(),
            description: None,
            serving_size: "100 g".to_string(),
            toxins: vec![FoodToxinDetail {
                id: 3,
                name: "Solanine".to_string(),
                description: None,
                daily_value: Some(100.0),
                unit: "mg".to_string(),
                amount: 80.0,
            }],
        };

        match classify_detail(&food) {
            LabelView::Label(label) => {
                assert_eq!(label.lines.len(), 1);
                assert_eq!(label.lines[0].percent, "80.0%");
            }
            other => panic!("expected a label, got {:?}", other),
        }
    }
}
