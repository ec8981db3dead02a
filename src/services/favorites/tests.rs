use super::*;
use crate::models::RatingDimension;
use crate::services::notice::{NoticeLevel, NoticeQueue};
use crate::storage::{MemoryStore, SqliteStore};

fn setup() -> (FavoritesStore, Arc<MemoryStore>, Arc<NoticeQueue>) {
    let storage = Arc::new(MemoryStore::new());
    let notices = Arc::new(NoticeQueue::new());
    let store = FavoritesStore::load(storage.clone(), notices.clone());
    (store, storage, notices)
}

fn cocktail(id: &str, name: &str) -> Cocktail {
    Cocktail::new(id, name).with_ingredient("Gin", Some("1 oz"))
}

#[test]
fn test_add_then_is_favorite() {
    let (mut store, _, _) = setup();

    assert!(store.add(cocktail("11007", "Margarita")));
    assert!(store.is_favorite("11007"));
    assert!(!store.is_favorite("11001"));

    let entry = store.by_id("11007").unwrap();
    assert!(entry.is_favorite);
    assert_eq!(entry.ratings, RatingAggregate::default());
}

#[test]
fn test_remove_then_not_favorite() {
    let (mut store, _, _) = setup();
    store.add(cocktail("11007", "Margarita"));

    assert!(store.remove("11007"));
    assert!(!store.is_favorite("11007"));
    assert!(!store.remove("11007"));
    assert!(store.is_empty());
}

#[test]
fn test_duplicate_add_keeps_original_entry() {
    let (mut store, _, notices) = setup();
    store.add(cocktail("11007", "Margarita"));
    let original_added_at = store.by_id("11007").unwrap().added_at;
    notices.drain();

    assert!(!store.add(cocktail("11007", "Margarita (again)")));

    assert_eq!(store.len(), 1);
    let entry = store.by_id("11007").unwrap();
    assert_eq!(entry.added_at, original_added_at);
    assert_eq!(entry.name(), "Margarita");

    let drained = notices.drain();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].level, NoticeLevel::Info);
}

#[test]
fn test_rate_updates_running_mean() {
    let (mut store, _, _) = setup();
    store.add(cocktail("1", "Sour"));

    let first = store
        .rate("1", &RatingSubmission::single(RatingDimension::Sweet, 4.0))
        .unwrap();
    assert_eq!(first.sweet, 4.0);
    assert_eq!(first.count, 1);

    let second = store
        .rate("1", &RatingSubmission::single(RatingDimension::Sweet, 2.0))
        .unwrap();
    assert_eq!(second.sweet, 3.0);
    assert_eq!(second.count, 2);
}

#[test]
fn test_rate_unknown_id_is_noop() {
    let (mut store, storage, notices) = setup();
    notices.drain();

    let result = store.rate("missing", &RatingSubmission::single(RatingDimension::Overall, 5.0));

    assert!(result.is_none());
    assert!(notices.drain().is_empty());
    assert_eq!(storage.get(FAVORITES_KEY).unwrap(), None);
}

#[test]
fn test_top_rated_store() {
    let (mut store, _, _) = setup();
    store.add(cocktail("a", "A"));
    store.add(cocktail("b", "B"));
    store.add(cocktail("c", "C"));
    store.rate("a", &RatingSubmission::single(RatingDimension::Overall, 4.0));
    store.rate("b", &RatingSubmission::single(RatingDimension::Overall, 2.0));

    let top = store.top_rated(2);
    let ids: Vec<&str> = top.iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(store.top_rated_default().len(), 2);
}

#[test]
fn test_every_mutation_persists_collection() {
    let (mut store, storage, _) = setup();

    store.add(cocktail("1", "One"));
    let saved: Vec<FavoriteEntry> = load_json(storage.as_ref(), FAVORITES_KEY).unwrap().unwrap();
    assert_eq!(saved.len(), 1);

    store.rate("1", &RatingSubmission::single(RatingDimension::Overall, 5.0));
    let saved: Vec<FavoriteEntry> = load_json(storage.as_ref(), FAVORITES_KEY).unwrap().unwrap();
    assert_eq!(saved[0].ratings.count, 1);

    store.remove("1");
    let saved: Vec<FavoriteEntry> = load_json(storage.as_ref(), FAVORITES_KEY).unwrap().unwrap();
    assert!(saved.is_empty());
}

#[test]
fn test_hydrates_from_storage() {
    let storage: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::new_in_memory().unwrap());
    let notices = Arc::new(NoticeQueue::new());

    {
        let mut store = FavoritesStore::load(storage.clone(), notices.clone());
        store.add(cocktail("11003", "Negroni"));
        store.rate(
            "11003",
            &RatingSubmission::default()
                .with(RatingDimension::Bitter, 5.0)
                .with(RatingDimension::Overall, 4.0),
        );
    }

    let store = FavoritesStore::load(storage, notices);
    let entry = store.by_id("11003").unwrap();
    assert_eq!(entry.name(), "Negroni");
    assert_eq!(entry.ratings.bitter, 5.0);
    assert_eq!(entry.ratings.count, 1);
    assert_eq!(entry.cocktail.ingredients()[0].ingredient, "Gin");
}

#[test]
fn test_hydrates_web_client_format() {
    let storage = Arc::new(MemoryStore::new());
    storage
        .set(
            FAVORITES_KEY,
            r#"[{
                "idDrink": "11007",
                "strDrink": "Margarita",
                "strCategory": "Ordinary Drink",
                "strAlcoholic": "Alcoholic",
                "strGlass": "Cocktail glass",
                "strInstructions": "Shake.",
                "strDrinkThumb": "https://example.com/m.jpg",
                "strIngredient1": "Tequila",
                "strMeasure1": "1 1/2 oz ",
                "isFavorite": true,
                "ratings": {"sweet": 3, "sour": 4, "bitter": 1, "strong": 4, "overall": 4.5, "count": 2},
                "addedAt": "2024-03-01T18:30:00.000Z"
            }]"#,
        )
        .unwrap();

    let store = FavoritesStore::load(storage, Arc::new(NoticeQueue::new()));

    let entry = store.by_id("11007").unwrap();
    assert_eq!(entry.ratings.overall, 4.5);
    assert_eq!(entry.ratings.count, 2);
    assert_eq!(entry.added_at.to_rfc3339(), "2024-03-01T18:30:00+00:00");
    assert_eq!(entry.cocktail.ingredients()[0].measure, "1 1/2 oz");
}

#[test]
fn test_malformed_storage_starts_empty() {
    let storage = Arc::new(MemoryStore::new());
    storage.set(FAVORITES_KEY, "{not json").unwrap();

    let mut store = FavoritesStore::load(storage.clone(), Arc::new(NoticeQueue::new()));
    assert!(store.is_empty());

    // Still usable, and the next mutation overwrites the bad value
    store.add(cocktail("1", "One"));
    let saved: Vec<FavoriteEntry> = load_json(storage.as_ref(), FAVORITES_KEY).unwrap().unwrap();
    assert_eq!(saved.len(), 1);
}
