use vitrine_testing::TestWorld;
use vitrine_testing::assertions::category_names;

#[test]
fn test_categories_in_first_occurrence_order() {
    let world = TestWorld::new().with_sample_catalog();
    let result = world.run(&["categories", "--format", "json"]).unwrap();

    assert!(result.success(), "{}", result.stderr());
    let json = result.json().unwrap();
    assert_eq!(
        category_names(&json).unwrap(),
        vec!["Todos", "Moda", "Casa", "Eletrônicos"]
    );
}

#[test]
fn test_categories_plain_output() {
    let world = TestWorld::new().with_sample_catalog();
    let result = world.run(&["categories"]).unwrap();

    assert!(result.success());
    let lines: Vec<&str> = result.stdout().lines().take(4).collect();
    assert_eq!(lines, vec!["Todos", "Moda", "Casa", "Eletrônicos"]);
    assert!(result.stdout().contains("vitrine list --category \"Moda\""));
}

#[test]
fn test_empty_catalog_has_only_all_category() {
    let world = TestWorld::new().with_catalog(&serde_json::json!([]));
    let result = world.run(&["categories", "--format", "json"]).unwrap();

    let json = result.json().unwrap();
    assert_eq!(category_names(&json).unwrap(), vec!["Todos"]);
    assert!(json.get("suggestions").is_none());
}
