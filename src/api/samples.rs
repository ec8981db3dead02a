//! Bundled sample catalog
//!
//! A handful of well-known recipes and the API's category list, served
//! when the recipe API is unreachable and sample fallback is enabled.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;

use crate::models::{AlcoholicFilter, Cocktail};

/// Category names as `list.php?c=list` returns them
pub const SAMPLE_CATEGORIES: &[&str] = &[
    "Ordinary Drink",
    "Cocktail",
    "Shake",
    "Other/Unknown",
    "Cocoa",
    "Shot",
    "Coffee / Tea",
    "Homemade Liqueur",
    "Punch / Party Drink",
    "Beer",
    "Soft Drink",
];

fn sample(
    id: &str,
    name: &str,
    category: &str,
    glass: &str,
    instructions: &str,
    thumbnail: &str,
    ingredients: &[(&str, Option<&str>)],
) -> Cocktail {
    let mut cocktail = Cocktail::new(id, name);
    cocktail.category = Some(category.to_string());
    cocktail.alcoholic = Some("Alcoholic".to_string());
    cocktail.glass = Some(glass.to_string());
    cocktail.instructions = Some(instructions.to_string());
    cocktail.thumbnail = Some(thumbnail.to_string());
    ingredients
        .iter()
        .fold(cocktail, |c, (ingredient, measure)| c.with_ingredient(ingredient, *measure))
}

static SAMPLE_COCKTAILS: Lazy<Vec<Cocktail>> = Lazy::new(|| {
    vec![
        sample(
            "11007",
            "Margarita",
            "Ordinary Drink",
            "Cocktail glass",
            "Rub the rim of the glass with the lime slice to make the salt stick to it. \
             Take care to moisten only the outer rim and sprinkle the salt on it. \
             The salt should present to the lips of the imbiber and never mix into the cocktail. \
             Shake the other ingredients with ice, then carefully pour into the glass.",
            "https://www.thecocktaildb.com/images/media/drink/5noda61589575158.jpg",
            &[
                ("Tequila", Some("1 1/2 oz ")),
                ("Triple sec", Some("1/2 oz ")),
                ("Lime juice", Some("1 oz ")),
                ("Salt", None),
            ],
        ),
        sample(
            "11001",
            "Old Fashioned",
            "Cocktail",
            "Old-fashioned glass",
            "Place sugar cube in old fashioned glass and saturate with bitters, \
             add a dash of plain water. Muddle until dissolved. Fill the glass with ice cubes \
             and add whiskey. Garnish with orange twist, and a cocktail cherry.",
            "https://www.thecocktaildb.com/images/media/drink/vrwquq1478252802.jpg",
            &[
                ("Bourbon", Some("4.5 cL")),
                ("Angostura bitters", Some("2 dashes")),
                ("Sugar", Some("1 cube")),
                ("Water", Some("dash")),
            ],
        ),
        sample(
            "11003",
            "Negroni",
            "Cocktail",
            "Old-fashioned glass",
            "Stir into glass over ice, garnish and serve.",
            "https://www.thecocktaildb.com/images/media/drink/qgdu971561574065.jpg",
            &[
                ("Gin", Some("1 oz ")),
                ("Campari", Some("1 oz ")),
                ("Sweet Vermouth", Some("1 oz ")),
            ],
        ),
    ]
});

/// Offline stand-in answering catalog queries from the bundled samples
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleCatalog;

impl SampleCatalog {
    pub fn all(&self) -> &'static [Cocktail] {
        SAMPLE_COCKTAILS.as_slice()
    }

    fn select(&self, predicate: impl Fn(&Cocktail) -> bool) -> Vec<Cocktail> {
        self.all().iter().filter(|c| predicate(c)).cloned().collect()
    }

    pub fn search_by_name(&self, name: &str) -> Vec<Cocktail> {
        let needle = name.trim().to_lowercase();
        self.select(|c| c.name.to_lowercase().contains(&needle))
    }

    pub fn search_by_first_letter(&self, letter: char) -> Vec<Cocktail> {
        let letter = letter.to_lowercase().to_string();
        self.select(|c| c.name.to_lowercase().starts_with(&letter))
    }

    pub fn lookup_by_id(&self, id: &str) -> Option<Cocktail> {
        self.all().iter().find(|c| c.id == id).cloned()
    }

    pub fn random(&self) -> Option<Cocktail> {
        self.all().choose(&mut rand::thread_rng()).cloned()
    }

    pub fn categories(&self) -> Vec<String> {
        SAMPLE_CATEGORIES.iter().map(|c| c.to_string()).collect()
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<Cocktail> {
        self.select(|c| c.category.as_deref() == Some(category))
    }

    pub fn filter_by_alcoholic(&self, filter: AlcoholicFilter) -> Vec<Cocktail> {
        self.select(|c| filter.matches(c.alcohol_content()))
    }

    pub fn search_by_ingredient(&self, ingredient: &str) -> Vec<Cocktail> {
        self.select(|c| c.has_ingredient(ingredient))
    }
}
