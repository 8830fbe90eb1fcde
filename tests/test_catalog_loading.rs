use recipe_catalog::{
    load_recipes, CatalogError, CatalogStore, HttpSource, Language,
};

fn en_document() -> &'static str {
    r#"
    [
        {
            "id": "braised-beef",
            "title": "Braised Beef",
            "ingredients": [
                {"key": "beef-hind-leg", "name": "Beef hind leg", "amount": "1kg", "category": "meat"},
                {"key": "soy-sauce", "name": "Soy sauce", "category": "seasoning"},
                {"key": "scallion", "name": "Scallion", "category": "veggie"}
            ],
            "steps": ["Sear the beef.", "Simmer with soy sauce."],
            "tags": ["dish"]
        },
        {
            "id": "egg-tart",
            "title": "Egg Tart",
            "ingredients": [
                {"key": "butter", "name": "Butter", "amount": "100g", "category": "dairy"},
                {"key": "flour", "name": "Flour", "category": "pantry"},
                {"key": "sugar", "name": "Sugar", "category": "seasoning"}
            ],
            "steps": ["Make the crust.", "Bake."],
            "notes": ["Chill the dough first."],
            "videoLink": "https://example.com/egg-tart",
            "tags": ["bakery", "dessert"]
        }
    ]
    "#
}

fn source_for(server: &mockito::Server) -> HttpSource {
    HttpSource::new(format!("{}/data", server.url()), None)
}

#[tokio::test]
async fn test_successful_load_replaces_catalog() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/data/en.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(en_document())
        .create();

    let mut store = CatalogStore::builder()
        .source(source_for(&server))
        .language(Language::En)
        .build()
        .unwrap();

    store.select_language(Language::En).await;

    assert!(!store.is_loading());
    assert!(store.error().is_none());
    assert_eq!(store.recipes().len(), 2);
    assert_eq!(store.recipes()[0].id, "braised-beef");
    assert_eq!(
        store.recipes()[1].video_link.as_deref(),
        Some("https://example.com/egg-tart")
    );
}

#[tokio::test]
async fn test_http_failure_is_a_fetch_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/data/en.json")
        .with_status(500)
        .create();

    let mut store = CatalogStore::builder()
        .source(source_for(&server))
        .build()
        .unwrap();

    store.select_language(Language::En).await;

    assert!(matches!(store.error(), Some(CatalogError::Fetch(_))));
    assert!(store.recipes().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/data/en.json")
        .with_status(200)
        .with_body("this is not a recipe document")
        .create();

    let mut store = CatalogStore::builder()
        .source(source_for(&server))
        .build()
        .unwrap();

    store.select_language(Language::En).await;

    assert!(matches!(store.error(), Some(CatalogError::Parse(_))));
    assert!(store.recipes().is_empty());
}

#[tokio::test]
async fn test_category_conflict_fails_the_whole_load() {
    let mut server = mockito::Server::new_async().await;
    let conflicting = r#"
    [
        {
            "id": "r1",
            "title": "Garlic Chicken",
            "ingredients": [
                {"key": "garlic", "name": "Garlic", "category": "veggie"}
            ],
            "steps": [],
            "tags": ["dish"]
        },
        {
            "id": "r2",
            "title": "Garlic Bread",
            "ingredients": [
                {"key": "garlic", "name": "Garlic", "category": "seasoning"}
            ],
            "steps": [],
            "tags": ["bakery"]
        }
    ]
    "#;
    let _m = server
        .mock("GET", "/data/en.json")
        .with_status(200)
        .with_body(conflicting)
        .create();

    let mut store = CatalogStore::builder()
        .source(source_for(&server))
        .build()
        .unwrap();

    store.select_language(Language::En).await;

    // No partial catalog: the valid first recipe is not shown either.
    assert!(store.recipes().is_empty());
    let Some(CatalogError::Integrity(err)) = store.error() else {
        panic!("expected an integrity error, got {:?}", store.error().map(|e| e.to_string()));
    };
    assert_eq!(err.key, "garlic");
    assert_eq!(err.recipe_title, "Garlic Bread");
}

#[tokio::test]
async fn test_language_switch_fetches_the_other_document() {
    let mut server = mockito::Server::new_async().await;
    let _en = server
        .mock("GET", "/data/en.json")
        .with_status(200)
        .with_body(en_document())
        .create();
    let _fr = server
        .mock("GET", "/data/fr.json")
        .with_status(200)
        .with_body(
            r#"[{"id": "tarte", "title": "Tarte aux œufs", "ingredients": [], "steps": [], "tags": ["dessert"]}]"#,
        )
        .create();

    let mut store = CatalogStore::builder()
        .source(source_for(&server))
        .build()
        .unwrap();

    store.select_language(Language::En).await;
    assert_eq!(store.recipes().len(), 2);

    store.select_language(Language::Fr).await;
    assert_eq!(store.language(), Language::Fr);
    assert_eq!(store.recipes().len(), 1);
    assert_eq!(store.recipes()[0].title, "Tarte aux œufs");
}

#[tokio::test]
async fn test_load_recipes_without_a_store() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/data/cn.json")
        .with_status(200)
        .with_body(en_document())
        .create();

    let source = source_for(&server);
    let recipes = load_recipes(&source, Language::Cn).await.unwrap();
    assert_eq!(recipes.len(), 2);
}
