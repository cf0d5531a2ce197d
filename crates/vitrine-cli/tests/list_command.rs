use vitrine_testing::TestWorld;
use vitrine_testing::assertions::{assert_all_in_category, assert_product_count, product_titles};

fn list_json(world: &TestWorld, extra: &[&str]) -> serde_json::Value {
    let mut args = vec!["list", "--format", "json"];
    args.extend_from_slice(extra);
    let result = world.run(&args).expect("Failed to run list");
    assert!(result.success(), "list failed: {}", result.stderr());
    result.json().expect("list output is not JSON")
}

#[test]
fn test_list_shows_newest_first() {
    let world = TestWorld::new().with_sample_catalog();
    let json = list_json(&world, &[]);

    assert_product_count(&json, 5).unwrap();
    assert_eq!(
        product_titles(&json).unwrap(),
        vec![
            "Tênis de Corrida",
            "Jogo de Panelas",
            "Fone Bluetooth",
            "Air Fryer 4L",
            "Cabo USB-C Turbo",
        ]
    );
    assert_eq!(json["content"]["total_count"], 5);
    assert_eq!(json["content"]["shown_count"], 5);
}

#[test]
fn test_list_category_filter_is_exact() {
    let world = TestWorld::new().with_sample_catalog();

    let json = list_json(&world, &["--category", "Casa"]);
    assert_all_in_category(&json, "Casa").unwrap();
    assert_eq!(
        product_titles(&json).unwrap(),
        vec!["Jogo de Panelas", "Air Fryer 4L"]
    );

    let json = list_json(&world, &["--category", "casa"]);
    assert_product_count(&json, 0).unwrap();
}

#[test]
fn test_list_search_matches_title_and_code() {
    let world = TestWorld::new().with_sample_catalog();

    let json = list_json(&world, &["--search", "  FONE "]);
    assert_eq!(product_titles(&json).unwrap(), vec!["Fone Bluetooth"]);

    let json = list_json(&world, &["--search", "771"]);
    assert_eq!(product_titles(&json).unwrap(), vec!["Air Fryer 4L"]);

    let json = list_json(&world, &["--search", "tn-4"]);
    assert_eq!(product_titles(&json).unwrap(), vec!["Tênis de Corrida"]);
}

#[test]
fn test_list_sort_modes() {
    let world = TestWorld::new().with_sample_catalog();

    let json = list_json(&world, &["--sort", "price-asc"]);
    assert_eq!(
        product_titles(&json).unwrap(),
        vec![
            "Cabo USB-C Turbo",
            "Fone Bluetooth",
            "Jogo de Panelas",
            "Tênis de Corrida",
            "Air Fryer 4L",
        ]
    );

    let json = list_json(&world, &["--sort", "store-shopee"]);
    assert_eq!(
        product_titles(&json).unwrap(),
        vec![
            "Jogo de Panelas",
            "Cabo USB-C Turbo",
            "Tênis de Corrida",
            "Fone Bluetooth",
            "Air Fryer 4L",
        ]
    );

    let json = list_json(&world, &["--sort", "store-ml"]);
    assert_eq!(
        product_titles(&json).unwrap(),
        vec![
            "Tênis de Corrida",
            "Air Fryer 4L",
            "Jogo de Panelas",
            "Fone Bluetooth",
            "Cabo USB-C Turbo",
        ]
    );
}

#[test]
fn test_list_json_reflects_filters() {
    let world = TestWorld::new().with_sample_catalog();
    let json = list_json(
        &world,
        &["--category", "Eletrônicos", "--search", "o", "--sort", "price-desc"],
    );

    let filters = &json["content"]["applied_filters"];
    assert_eq!(filters["category"], "Eletrônicos");
    assert_eq!(filters["search"], "o");
    assert_eq!(filters["sort"], "price-desc");
    assert_eq!(
        product_titles(&json).unwrap(),
        vec!["Fone Bluetooth", "Cabo USB-C Turbo"]
    );
    assert_eq!(json["content"]["total_count"], 5);
}

#[test]
fn test_list_limit() {
    let world = TestWorld::new().with_sample_catalog();
    let json = list_json(&world, &["--limit", "2"]);

    assert_product_count(&json, 2).unwrap();
    assert_eq!(json["content"]["shown_count"], 2);
    assert_eq!(json["content"]["applied_filters"]["limit"], 2);
}

#[test]
fn test_list_entry_fields() {
    let world = TestWorld::new().with_sample_catalog();
    let json = list_json(&world, &[]);
    let products = json["content"]["products"].as_array().unwrap();

    let air_fryer = &products[3];
    assert_eq!(air_fryer["code"], "771");
    assert_eq!(air_fryer["old_price"], 449.0);
    assert_eq!(air_fryer["discount_percent"], 33);

    // Zero old price and blank code count as absent.
    let fone = &products[2];
    assert!(fone.get("old_price").is_none());
    assert_eq!(fone["discount_percent"], 0);
    let cabo = &products[4];
    assert!(cabo.get("code").is_none());
}

#[test]
fn test_list_without_matches_is_empty_success() {
    let world = TestWorld::new().with_sample_catalog();
    let json = list_json(&world, &["--search", "xyz"]);

    assert_product_count(&json, 0).unwrap();
    assert!(json["badge"].is_object());
    assert!(json["suggestions"].is_array());
}

#[test]
fn test_list_plain_output() {
    let world = TestWorld::new().with_sample_catalog();
    let result = world.run(&["list", "--category", "Casa"]).unwrap();

    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("R$ 299,00"));
    assert!(stdout.contains("-33%"));
    assert!(stdout.contains("[MERCADO LIVRE] Air Fryer 4L"));
    assert!(stdout.contains("ID: 771"));
    assert!(stdout.contains("2 de 5 produtos"));
}

#[test]
fn test_missing_catalog_fails_with_load_message() {
    let world = TestWorld::new();
    let result = world.run(&["list"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Erro ao carregar os produtos."));
    assert!(result.stdout().is_empty());
}

#[test]
fn test_malformed_catalog_fails() {
    let world = TestWorld::new().with_raw_catalog(r#"{"produtos": []}"#);
    let result = world.run(&["categories"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Error: Erro ao carregar os produtos."));
}
