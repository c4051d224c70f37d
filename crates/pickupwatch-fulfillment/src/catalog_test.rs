use super::*;

fn page(script_body: &str) -> String {
    format!(
        "<html><head><script>var analytics = {{}};</script>\
         <script type=\"text/javascript\">{script_body}</script></head><body></body></html>"
    )
}

const BOOTSTRAP: &str = r#"window.PRODUCT_SELECTION_BOOTSTRAP = {
  "productSelectionData": {
    "products": [
      {"familyType": "iPhone 16 Pro", "dimensionColor": "White Titanium",
       "dimensionCapacity": "256GB", "partNumber": "MYNF3ZP/A", "price": "36900"},
      {"familyType": "iPhone 16 Pro Max", "dimensionColor": "Black Titanium",
       "dimensionCapacity": "512GB", "partNumber": "MYWX3ZP/A"},
      {"familyType": "iPhone 16 Pro", "dimensionColor": "Black Titanium",
       "dimensionCapacity": "128GB", "partNumber": "MYMC3ZP/A"}
    ],
    "labels": {"note": "braces } inside \"strings\" { are ignored"}
  }
};"#;

#[test]
fn extracts_models_in_page_order() {
    let catalog = extract_catalog(&page(BOOTSTRAP)).unwrap();
    let names: Vec<&str> = catalog.models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["iPhone 16 Pro", "iPhone 16 Pro Max"]);

    let pro = catalog.model("iPhone 16 Pro").unwrap();
    assert_eq!(pro.colors(), vec!["Black Titanium", "White Titanium"]);
    assert_eq!(pro.capacities(), vec!["128GB", "256GB"]);
    assert_eq!(
        pro.part_for("White Titanium", "256GB")
            .unwrap()
            .part_number
            .as_str(),
        "MYNF3ZP/A"
    );
}

#[test]
fn missing_marker_fails_closed() {
    let err = extract_catalog(&page("window.SOMETHING_ELSE = {};")).unwrap_err();
    assert!(matches!(err, CatalogError::MarkerNotFound));
}

#[test]
fn literal_cut_by_script_end_fails_closed() {
    let truncated = r#"window.PRODUCT_SELECTION_BOOTSTRAP = {"productSelectionData": {"products": ["#;
    let err = extract_catalog(&page(truncated)).unwrap_err();
    assert!(matches!(err, CatalogError::Unterminated));
}

#[test]
fn non_object_assignment_fails_closed() {
    let script = "window.PRODUCT_SELECTION_BOOTSTRAP = loadBootstrap();";
    let err = extract_catalog(&page(script)).unwrap_err();
    assert!(matches!(err, CatalogError::Unterminated));
}

#[test]
fn javascript_literal_is_not_evaluated() {
    // Unquoted keys are valid JavaScript but not JSON.
    let script = "window.PRODUCT_SELECTION_BOOTSTRAP = {productSelectionData: {products: []}};";
    let err = extract_catalog(&page(script)).unwrap_err();
    assert!(matches!(err, CatalogError::Deserialize(_)));
}

#[test]
fn missing_product_fields_fail_closed() {
    let script = r#"window.PRODUCT_SELECTION_BOOTSTRAP = {"productSelectionData": {"products": [
        {"familyType": "iPhone 16 Pro", "partNumber": "MYNF3ZP/A"}
    ]}};"#;
    let err = extract_catalog(&page(script)).unwrap_err();
    assert!(matches!(err, CatalogError::Deserialize(_)));
}

#[test]
fn blank_part_number_fails_closed() {
    let script = r#"window.PRODUCT_SELECTION_BOOTSTRAP = {"productSelectionData": {"products": [
        {"familyType": "iPhone 16 Pro", "dimensionColor": "Black Titanium",
         "dimensionCapacity": "128GB", "partNumber": " "}
    ]}};"#;
    let err = extract_catalog(&page(script)).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidProduct(_)));
}

#[test]
fn empty_product_list_fails_closed() {
    let script =
        r#"window.PRODUCT_SELECTION_BOOTSTRAP = {"productSelectionData": {"products": []}};"#;
    let err = extract_catalog(&page(script)).unwrap_err();
    assert!(matches!(err, CatalogError::Empty));
}

#[test]
fn balanced_object_stops_at_matching_brace() {
    let s = r#"{"a": {"b": [1, 2]}, "c": "}"} trailing"#;
    assert_eq!(
        extract_balanced_object(s),
        Some(r#"{"a": {"b": [1, 2]}, "c": "}"}"#)
    );
}

#[test]
fn balanced_object_handles_escaped_quotes() {
    let s = r#"{"a": "say \"}\" loudly"} rest"#;
    assert_eq!(
        extract_balanced_object(s),
        Some(r#"{"a": "say \"}\" loudly"}"#)
    );
}

#[test]
fn balanced_object_rejects_unterminated_and_non_object() {
    assert_eq!(extract_balanced_object(r#"{"a": 1"#), None);
    assert_eq!(extract_balanced_object("[1, 2]"), None);
}
