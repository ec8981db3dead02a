//! TheCocktailDB HTTP client
//!
//! Free-tier JSON API. Every list endpoint answers `{"drinks": [...]}`,
//! with `null` (or, for some filters, the string "None Found") when
//! nothing matches.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::models::{AlcoholicFilter, Cocktail};

use super::error::ApiError;

/// Base URL of the free API
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Recipe catalog operations
#[async_trait]
pub trait CocktailApi: Send + Sync {
    /// `search.php?s=`: cocktails whose name contains `name`
    async fn search_by_name(&self, name: &str) -> Result<Vec<Cocktail>, ApiError>;

    /// `search.php?f=`: cocktails starting with `letter`
    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Cocktail>, ApiError>;

    /// `lookup.php?i=`: full record by ID
    async fn lookup_by_id(&self, id: &str) -> Result<Option<Cocktail>, ApiError>;

    /// `random.php`
    async fn random(&self) -> Result<Option<Cocktail>, ApiError>;

    /// `list.php?c=list`: category names
    async fn list_categories(&self) -> Result<Vec<String>, ApiError>;

    /// `filter.php?c=`: partial records in a category
    async fn filter_by_category(&self, category: &str) -> Result<Vec<Cocktail>, ApiError>;

    /// `filter.php?a=`: partial records by alcohol content
    async fn filter_by_alcoholic(&self, filter: AlcoholicFilter) -> Result<Vec<Cocktail>, ApiError>;

    /// `filter.php?i=`: partial records containing an ingredient
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Cocktail>, ApiError>;
}

/// `drinks` payload other than `null`: a list or a "None Found" marker
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DrinkList<T> {
    Found(Vec<T>),
    Marker(String),
}

#[derive(Debug, Deserialize)]
struct DrinksResponse<T> {
    drinks: Option<DrinkList<T>>,
}

impl<T> DrinksResponse<T> {
    fn into_vec(self) -> Vec<T> {
        match self.drinks {
            Some(DrinkList::Found(items)) => items,
            Some(DrinkList::Marker(marker)) => {
                debug!(%marker, "No drinks found");
                Vec::new()
            }
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    #[serde(rename = "strCategory")]
    category: String,
}

/// HTTP implementation of `CocktailApi`
#[derive(Clone)]
pub struct CocktailDbClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CocktailDbClient {
    /// Client for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self::with_client(http_client, base_url))
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            http_client: client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, endpoint);
        let parsed = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        parsed.map_err(|e| ApiError::Config(format!("{}: {}", raw, e)))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint, params)?;
        debug!(%url, "Recipe API request");

        let response = self
            .http_client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }

        // The API occasionally answers an empty body instead of `{"drinks":null}`
        let body = response.text().await?;
        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };

        serde_json::from_str(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn drinks(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Cocktail>, ApiError> {
        let response: DrinksResponse<Cocktail> = self.get_json(endpoint, params).await?;
        Ok(response.into_vec())
    }
}

#[async_trait]
impl CocktailApi for CocktailDbClient {
    async fn search_by_name(&self, name: &str) -> Result<Vec<Cocktail>, ApiError> {
        self.drinks("search.php", &[("s", name)]).await
    }

    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Cocktail>, ApiError> {
        let letter = letter.to_string();
        self.drinks("search.php", &[("f", letter.as_str())]).await
    }

    async fn lookup_by_id(&self, id: &str) -> Result<Option<Cocktail>, ApiError> {
        Ok(self.drinks("lookup.php", &[("i", id)]).await?.into_iter().next())
    }

    async fn random(&self) -> Result<Option<Cocktail>, ApiError> {
        Ok(self.drinks("random.php", &[]).await?.into_iter().next())
    }

    async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        let response: DrinksResponse<CategoryRecord> =
            self.get_json("list.php", &[("c", "list")]).await?;
        Ok(response.into_vec().into_iter().map(|r| r.category).collect())
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<Cocktail>, ApiError> {
        self.drinks("filter.php", &[("c", category)]).await
    }

    async fn filter_by_alcoholic(&self, filter: AlcoholicFilter) -> Result<Vec<Cocktail>, ApiError> {
        self.drinks("filter.php", &[("a", filter.as_query())]).await
    }

    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Cocktail>, ApiError> {
        self.drinks("filter.php", &[("i", ingredient)]).await
    }
}
