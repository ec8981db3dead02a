//! Cocktail recipe data model
//!
//! A `Cocktail` is the recipe record returned by the recipe API. It is
//! (de)serialized in the API's wire shape (`idDrink`, `strDrink`,
//! `strIngredient1..15`, ...) so that raw API payloads and persisted
//! favorites share one format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of ingredient slots in an API record
pub const MAX_INGREDIENTS: usize = 15;

/// Alcohol content label as reported by the API (`strAlcoholic`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlcoholContent {
    Alcoholic,
    NonAlcoholic,
    Optional,
}

impl AlcoholContent {
    /// Parse the API label, tolerant of case and `_`/space variations
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace('_', " ");
        match normalized.as_str() {
            "alcoholic" => Some(Self::Alcoholic),
            "non alcoholic" => Some(Self::NonAlcoholic),
            "optional alcohol" => Some(Self::Optional),
            _ => None,
        }
    }

    /// Label as the API writes it in drink records
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alcoholic => "Alcoholic",
            Self::NonAlcoholic => "Non alcoholic",
            Self::Optional => "Optional alcohol",
        }
    }
}

/// Filter value accepted by `filter.php?a=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlcoholicFilter {
    #[serde(rename = "Alcoholic")]
    Alcoholic,
    #[serde(rename = "Non_Alcoholic")]
    NonAlcoholic,
}

impl AlcoholicFilter {
    /// Query-string value for the filter endpoint
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Alcoholic => "Alcoholic",
            Self::NonAlcoholic => "Non_Alcoholic",
        }
    }

    /// Whether a drink's alcohol label satisfies this filter
    pub fn matches(&self, content: Option<AlcoholContent>) -> bool {
        matches!(
            (self, content),
            (Self::Alcoholic, Some(AlcoholContent::Alcoholic))
                | (Self::NonAlcoholic, Some(AlcoholContent::NonAlcoholic))
        )
    }
}

impl std::str::FromStr for AlcoholicFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match AlcoholContent::from_label(s) {
            Some(AlcoholContent::Alcoholic) => Ok(Self::Alcoholic),
            Some(AlcoholContent::NonAlcoholic) => Ok(Self::NonAlcoholic),
            _ => Err(format!(
                "unknown alcoholic filter '{}', expected 'alcoholic' or 'non_alcoholic'",
                s
            )),
        }
    }
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Ingredient name (e.g. "Tequila")
    pub ingredient: String,
    /// Measure, empty when the recipe gives none
    pub measure: String,
}

/// Cocktail recipe record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DrinkRecord", into = "DrinkRecord")]
pub struct Cocktail {
    /// API identifier (`idDrink`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Category, e.g. "Ordinary Drink"
    pub category: Option<String>,
    /// Raw alcohol label, e.g. "Alcoholic"
    pub alcoholic: Option<String>,
    /// Glass type
    pub glass: Option<String>,
    /// Preparation instructions
    pub instructions: Option<String>,
    /// Thumbnail image URL
    pub thumbnail: Option<String>,
    /// Ingredient slots 1..=15 as (ingredient, measure); `None` means an empty slot
    pub slots: Vec<(Option<String>, Option<String>)>,
}

impl Cocktail {
    /// Create a cocktail with only an id and a name, as filter endpoints return them
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            alcoholic: None,
            glass: None,
            instructions: None,
            thumbnail: None,
            slots: Vec::new(),
        }
    }

    /// Builder-style helper to append an ingredient slot
    pub fn with_ingredient(mut self, ingredient: &str, measure: Option<&str>) -> Self {
        if self.slots.len() < MAX_INGREDIENTS {
            self.slots
                .push((Some(ingredient.to_string()), measure.map(str::to_string)));
        }
        self
    }

    /// Parsed alcohol label
    pub fn alcohol_content(&self) -> Option<AlcoholContent> {
        self.alcoholic.as_deref().and_then(AlcoholContent::from_label)
    }

    /// Ingredients with their measures
    ///
    /// Empty ingredient slots are skipped; a missing measure becomes "".
    pub fn ingredients(&self) -> Vec<IngredientLine> {
        self.slots
            .iter()
            .filter_map(|(ingredient, measure)| {
                let ingredient = ingredient.as_deref().map(str::trim)?;
                if ingredient.is_empty() {
                    return None;
                }
                Some(IngredientLine {
                    ingredient: ingredient.to_string(),
                    measure: measure.as_deref().unwrap_or("").trim().to_string(),
                })
            })
            .collect()
    }

    /// Whether any ingredient matches `name` case-insensitively
    pub fn has_ingredient(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.ingredients()
            .iter()
            .any(|line| line.ingredient.to_lowercase() == needle)
    }
}

/// Wire shape of a drink record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DrinkRecord {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink", default)]
    name: String,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    alcoholic: Option<String>,
    #[serde(rename = "strGlass", default)]
    glass: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strDrinkThumb", default)]
    thumbnail: Option<String>,
    /// `strIngredientN` / `strMeasureN` and any field this client does not model
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

fn slot_value(rest: &BTreeMap<String, Value>, key: &str) -> Option<String> {
    match rest.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

impl From<DrinkRecord> for Cocktail {
    fn from(record: DrinkRecord) -> Self {
        let mut slots: Vec<(Option<String>, Option<String>)> = (1..=MAX_INGREDIENTS)
            .map(|i| {
                (
                    slot_value(&record.rest, &format!("strIngredient{}", i)),
                    slot_value(&record.rest, &format!("strMeasure{}", i)),
                )
            })
            .collect();

        // Drop trailing empty slots
        while matches!(slots.last(), Some((None, None))) {
            slots.pop();
        }

        Self {
            id: record.id,
            name: record.name,
            category: record.category,
            alcoholic: record.alcoholic,
            glass: record.glass,
            instructions: record.instructions,
            thumbnail: record.thumbnail,
            slots,
        }
    }
}

impl From<Cocktail> for DrinkRecord {
    fn from(cocktail: Cocktail) -> Self {
        let mut rest = BTreeMap::new();
        for i in 0..MAX_INGREDIENTS {
            let (ingredient, measure) = cocktail.slots.get(i).cloned().unwrap_or((None, None));
            rest.insert(
                format!("strIngredient{}", i + 1),
                ingredient.map(Value::String).unwrap_or(Value::Null),
            );
            rest.insert(
                format!("strMeasure{}", i + 1),
                measure.map(Value::String).unwrap_or(Value::Null),
            );
        }

        Self {
            id: cocktail.id,
            name: cocktail.name,
            category: cocktail.category,
            alcoholic: cocktail.alcoholic,
            glass: cocktail.glass,
            instructions: cocktail.instructions,
            thumbnail: cocktail.thumbnail,
            rest,
        }
    }
}
