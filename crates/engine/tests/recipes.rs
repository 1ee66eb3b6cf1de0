use engine::{Engine, EngineError, RecipeNew, RecipeUpdate};

fn engine_with_pasta() -> (Engine, u64) {
    let mut engine = Engine::builder().build();
    let recipe = engine.add_recipe(
        RecipeNew::new("Pasta", "Yummy").with_ingredients(["pasta", "sauce"]),
    );
    (engine, recipe.id)
}

#[test]
fn add_assigns_increasing_unique_ids() {
    let mut engine = Engine::builder().build();

    let ids: Vec<u64> = (0..5)
        .map(|i| engine.add_recipe(RecipeNew::new(format!("Dish {i}"), "")).id)
        .collect();

    assert_eq!(ids, [1, 2, 3, 4, 5]);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn add_then_get_returns_equal_recipe() {
    let mut engine = Engine::builder().build();
    let created = engine.add_recipe(
        RecipeNew::new("Test Recipe", "Test description").with_ingredients(["salt", "pepper"]),
    );

    let fetched = engine.get_recipe(created.id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.ingredients, ["salt", "pepper"]);
}

#[test]
fn duplicate_titles_are_allowed() {
    let mut engine = Engine::builder().build();
    let first = engine.add_recipe(RecipeNew::new("Soup", "")).id;
    let second = engine.add_recipe(RecipeNew::new("Soup", "")).id;

    assert_ne!(first, second);
    assert_eq!(engine.list_recipes().len(), 2);
}

#[test]
fn get_missing_recipe_fails() {
    let engine = Engine::builder().build();
    assert_eq!(engine.get_recipe(42), Err(EngineError::RecipeNotFound(42)));
}

#[test]
fn builder_seeds_recipes_in_order() {
    let engine = Engine::builder()
        .recipes([RecipeNew::new("First", ""), RecipeNew::new("Second", "")])
        .build();

    let recipes = engine.list_recipes();
    assert_eq!(recipes[0].id, 1);
    assert_eq!(recipes[1].title, "Second");
    assert_eq!(engine.store().next_id(), 3);
}

#[test]
fn update_replaces_supplied_fields_only() {
    let (mut engine, id) = engine_with_pasta();

    let updated = engine
        .update_recipe(
            id,
            RecipeUpdate {
                title: Some("Updated Recipe".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.title, "Updated Recipe");
    assert_eq!(updated.description, "Yummy");
    assert_eq!(updated.ingredients, ["pasta", "sauce"]);
    assert_eq!(engine.get_recipe(id).unwrap(), updated);
}

#[test]
fn empty_update_leaves_recipe_unchanged() {
    let (mut engine, id) = engine_with_pasta();
    let before = engine.get_recipe(id).unwrap();
    let update = RecipeUpdate::default();
    assert!(update.is_empty());

    let after = engine.update_recipe(id, update).unwrap();
    assert_eq!(after, before);
}

#[test]
fn update_with_empty_ingredients_clears_them() {
    let (mut engine, id) = engine_with_pasta();

    let updated = engine
        .update_recipe(
            id,
            RecipeUpdate {
                ingredients: Some(Vec::new()),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(updated.ingredients.is_empty());
}

#[test]
fn update_missing_recipe_fails() {
    let (mut engine, _) = engine_with_pasta();
    let err = engine
        .update_recipe(99, RecipeUpdate::default())
        .unwrap_err();
    assert_eq!(err, EngineError::RecipeNotFound(99));
}

#[test]
fn delete_then_get_fails() {
    let (mut engine, id) = engine_with_pasta();

    let removed = engine.delete_recipe(id).unwrap();
    assert_eq!(removed.title, "Pasta");
    assert_eq!(engine.get_recipe(id), Err(EngineError::RecipeNotFound(id)));
    assert!(engine.list_recipes().is_empty());
}

#[test]
fn delete_does_not_free_the_id() {
    let (mut engine, id) = engine_with_pasta();
    engine.delete_recipe(id).unwrap();

    let next = engine.add_recipe(RecipeNew::new("Pizza", ""));
    assert_eq!(next.id, id + 1);
}

#[test]
fn delete_missing_recipe_fails() {
    let mut engine = Engine::builder().build();
    assert_eq!(engine.delete_recipe(1), Err(EngineError::RecipeNotFound(1)));
}

#[test]
fn search_matches_title_case_insensitively() {
    let mut engine = Engine::builder().build();
    engine.add_recipe(RecipeNew::new("Apple Pie", ""));
    engine.add_recipe(RecipeNew::new("Banana Bread", ""));

    let found = engine.search_recipes("apple");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Apple Pie");

    let found = engine.search_recipes("BREAD");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Banana Bread");
}

#[test]
fn search_with_empty_query_returns_everything_in_order() {
    let mut engine = Engine::builder().build();
    engine.add_recipe(RecipeNew::new("Zucchini Fritters", ""));
    engine.add_recipe(RecipeNew::new("Apple Pie", ""));

    let titles: Vec<_> = engine
        .search_recipes("")
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, ["Zucchini Fritters", "Apple Pie"]);
}

#[test]
fn search_ignores_description_and_ingredients() {
    let mut engine = Engine::builder().build();
    engine.add_recipe(
        RecipeNew::new("Salad", "apple dressing").with_ingredients(["apple"]),
    );

    assert!(engine.search_recipes("apple").is_empty());
}
