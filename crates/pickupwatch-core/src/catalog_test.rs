use super::*;

fn part(color: &str, capacity: &str, id: &str) -> CatalogPart {
    CatalogPart {
        color: color.to_string(),
        capacity: capacity.to_string(),
        part_number: VariantId::new(id).unwrap(),
    }
}

fn sample() -> Catalog {
    Catalog::from_parts(vec![
        (
            "iPhone 16 Pro".to_string(),
            part("White Titanium", "256GB", "MYNF3ZP/A"),
        ),
        (
            "iPhone 16 Pro Max".to_string(),
            part("Black Titanium", "512GB", "MYWX3ZP/A"),
        ),
        (
            "iPhone 16 Pro".to_string(),
            part("Black Titanium", "128GB", "MYMC3ZP/A"),
        ),
        (
            "iPhone 16 Pro".to_string(),
            part("Black Titanium", "256GB", "MYND3ZP/A"),
        ),
    ])
}

#[test]
fn from_parts_groups_by_model_in_first_seen_order() {
    let catalog = sample();
    let names: Vec<&str> = catalog.models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["iPhone 16 Pro", "iPhone 16 Pro Max"]);
    assert_eq!(catalog.models[0].parts.len(), 3);
}

#[test]
fn colors_and_capacities_are_sorted_and_unique() {
    let catalog = sample();
    let model = catalog.model("iPhone 16 Pro").unwrap();
    assert_eq!(model.colors(), vec!["Black Titanium", "White Titanium"]);
    assert_eq!(model.capacities(), vec!["128GB", "256GB"]);
}

#[test]
fn part_for_finds_exact_combination() {
    let catalog = sample();
    let model = catalog.model("iPhone 16 Pro").unwrap();
    let found = model.part_for("Black Titanium", "256GB").unwrap();
    assert_eq!(found.part_number.as_str(), "MYND3ZP/A");
    assert!(model.part_for("White Titanium", "128GB").is_none());
}

#[test]
fn selection_label_combines_model_capacity_color() {
    let catalog = sample();
    let selection = catalog
        .selection_for_id(&VariantId::new("MYNF3ZP/A").unwrap())
        .unwrap();
    assert_eq!(selection.label(), "iPhone 16 Pro 256GB White Titanium");
}

#[test]
fn selection_for_unknown_id_is_none() {
    let catalog = sample();
    assert!(catalog
        .selection_for_id(&VariantId::new("NOPE").unwrap())
        .is_none());
}

#[test]
fn parse_catalog_accepts_valid_yaml() {
    let yaml = r"
models:
  - name: iPhone 16 Pro
    parts:
      - { color: Black Titanium, capacity: 256GB, part_number: MYND3ZP/A }
      - { color: White Titanium, capacity: 256GB, part_number: MYNF3ZP/A }
";
    let catalog = parse_catalog(yaml).unwrap();
    assert_eq!(catalog.models.len(), 1);
    assert_eq!(catalog.models[0].parts.len(), 2);
}

#[test]
fn parse_catalog_rejects_duplicate_part_numbers() {
    let yaml = r"
models:
  - name: iPhone 16 Pro
    parts:
      - { color: Black Titanium, capacity: 256GB, part_number: MYND3ZP/A }
  - name: iPhone 16 Pro Max
    parts:
      - { color: Black Titanium, capacity: 256GB, part_number: MYND3ZP/A }
";
    let err = parse_catalog(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate part number")),
        "expected duplicate part validation error, got: {err:?}"
    );
}

#[test]
fn parse_catalog_rejects_empty_catalog() {
    let err = parse_catalog("models: []").unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn parse_catalog_rejects_blank_part_number() {
    let yaml = r#"
models:
  - name: iPhone 16 Pro
    parts:
      - { color: Black Titanium, capacity: 256GB, part_number: "  " }
"#;
    let err = parse_catalog(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::CatalogFileParse(_)));
}

#[test]
fn load_catalog_reports_missing_file() {
    let err = load_catalog(Path::new("/nonexistent/pickupwatch/catalog.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::CatalogFileIo { .. }));
}
