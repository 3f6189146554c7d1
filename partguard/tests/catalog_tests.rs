//! Integration tests for catalog loading and cart checks

use partguard::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_catalog(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(json.as_bytes()).expect("Should write catalog");
    file
}

#[test]
fn test_load_catalog_from_file() {
    let file = write_catalog(
        r#"[
            {"id": 1, "category": "CPU", "name": "Ryzen 5 5600X", "price": 199.99,
             "stock": 10, "socket": "AM4", "tdp": 65},
            {"id": 2, "category": "Motherboard", "name": "B550", "price": 139.99,
             "stock": 4, "socket": "AM4", "ram_type": "DDR4"},
            {"id": 3, "category": "Storage", "name": "NVMe 1TB", "price": 79.0, "stock": 0}
        ]"#,
    );

    let catalog = Catalog::from_json_file(file.path()).expect("Should load catalog");
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get(2).map(|p| p.name()), Some("B550"));

    let selection: Vec<Part> = catalog.parts().to_vec();
    let result = check_compatibility(&selection);
    assert!(result.ok);
}

#[test]
fn test_missing_catalog_file() {
    let err = Catalog::from_json_file(std::path::Path::new("does_not_exist.json"))
        .err()
        .expect("Should fail");
    assert!(matches!(err, PartGuardError::Io(_)));
}

#[test]
fn test_malformed_catalog_file() {
    let file = write_catalog(r#"{"id": 1}"#);
    let err = Catalog::from_json_file(file.path()).err().expect("Should fail");
    assert!(matches!(err, PartGuardError::Json(_)));
}

#[test]
fn test_unknown_category_rejected() {
    let file = write_catalog(
        r#"[{"id": 1, "category": "Fan", "name": "120mm", "price": 9.0, "stock": 1}]"#,
    );
    assert!(Catalog::from_json_file(file.path()).is_err());
}

#[test]
fn test_duplicate_ids_in_file() {
    let file = write_catalog(
        r#"[
            {"id": 7, "category": "PSU", "name": "A", "price": 1.0, "stock": 1},
            {"id": 7, "category": "Case", "name": "B", "price": 1.0, "stock": 1}
        ]"#,
    );
    let err = Catalog::from_json_file(file.path()).err().expect("Should fail");
    assert!(matches!(err, PartGuardError::DuplicateId(7)));
}

#[test]
fn test_catalog_round_trips_through_json() {
    let catalog = Catalog::seeded();
    let json = serde_json::to_string(catalog.parts()).expect("Should serialize");
    let reloaded = Catalog::from_json_str(&json).expect("Should reload");
    assert_eq!(reloaded.parts(), catalog.parts());
}

#[test]
fn test_seeded_cart_compatible_build() {
    let catalog = Catalog::seeded();
    let mut cart = Cart::new();
    for id in [101, 201, 301, 401, 501, 602, 701] {
        cart.add(catalog.find_by_id(id).expect("Seeded id").clone());
    }
    let result = cart.check();
    assert!(result.ok, "{:?}", result.messages);
}

#[test]
fn test_seeded_cart_incompatible_build() {
    let catalog = Catalog::seeded();
    let mut cart = Cart::new();
    for id in [102, 201, 302, 402, 501, 601] {
        cart.add(catalog.find_by_id(id).expect("Seeded id").clone());
    }
    let result = cart.check();
    assert!(!result.ok);
    assert_eq!(
        result.messages,
        vec![
            "CPU socket mismatch.",
            "RAM generation mismatch.",
            "GPU may be too long for this mATX case.",
            "PSU wattage may be insufficient.",
        ]
    );
}
