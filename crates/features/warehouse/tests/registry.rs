use depot_domain::{Product, ProductKind, ProductSpec};
use depot_warehouse::{ProductRegistry, WarehouseError};

#[test]
fn builtin_constructors() {
    let registry = ProductRegistry::builtin();
    let cases = [
        ("IndustrialServerRack", "Server Rack 1", 10.0, ProductKind::IndustrialServerRack),
        ("GlassWare", "Wine Glass 2", 0.2, ProductKind::GlassWare),
        ("ExplosiveBarrel", "Barrel of C4", 50.0, ProductKind::ExplosiveBarrel),
        ("ElectronicParts", "PCB Board", 0.01, ProductKind::ElectronicParts),
        ("AstronautsIceCream", "Neapolitan Ice Cream", 0.5, ProductKind::AstronautsIceCream),
        ("AcetoneBarrel", "Barrel of Acetone", 100.0, ProductKind::AcetoneBarrel),
        ("TV", "Smart TV 55\"", 15.0, ProductKind::Tv),
    ];

    for (tag, name, size, kind) in cases {
        let product = registry.construct(tag, name, size).unwrap();
        assert_eq!(product, Product::new(kind, name, size), "{tag}");
        assert_eq!(product.class(), tag);
        assert_eq!(product.flags(), kind.flags());
    }
}

#[test]
fn unknown_tag_is_an_error() {
    let err = ProductRegistry::builtin().construct("Unknown class", "Mystery", -1.0).unwrap_err();
    assert!(matches!(err, WarehouseError::UnknownProductKind { ref tag, context: None } if tag == "Unknown class"));
    assert_eq!(err.to_string(), "Unknown product kind `Unknown class`");
}

#[test]
fn tags_are_case_sensitive() {
    let registry = ProductRegistry::builtin();
    assert!(registry.contains("TV"));
    assert!(!registry.contains("Tv"));
    assert!(!registry.contains("glassware"));
}

#[test]
fn out_of_range_sizes_are_invalid() {
    let registry = ProductRegistry::builtin();
    for size in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = registry.construct("GlassWare", "Plate", size).unwrap_err();
        assert!(matches!(err, WarehouseError::InvalidProduct { ref name, .. } if name == "Plate"), "{size}");
    }
    assert_eq!(registry.construct("GlassWare", "Plate", 0.0).unwrap().size(), 0.0);
}

#[test]
fn construct_all_stops_at_first_failure() {
    let registry = ProductRegistry::builtin();
    let specs = [
        ProductSpec::new("GlassWare", "Plate", 1.0),
        ProductSpec::new("Crate", "Box", 1.0),
        ProductSpec::new("Pallet", "Box", 1.0),
    ];

    let err = registry.construct_all(&specs).unwrap_err();
    assert!(matches!(err, WarehouseError::UnknownProductKind { ref tag, .. } if tag == "Crate"));

    let built = registry.construct_all(&specs[..1]).unwrap();
    assert_eq!(built.len(), 1);
}

#[test]
fn registries_can_be_extended() {
    let mut registry = ProductRegistry::empty();
    assert!(registry.tags().is_empty());

    registry
        .register("Bottle", |name: String, size: f64| Product::new(ProductKind::GlassWare, name, size))
        .register("Chip", |name: String, size: f64| Product::new(ProductKind::ElectronicParts, name, size));

    assert_eq!(registry.tags(), ["Bottle", "Chip"]);
    let chip = registry.construct("Chip", "Z80", 0.1).unwrap();
    assert_eq!(chip.kind(), ProductKind::ElectronicParts);
    assert!(registry.construct("GlassWare", "Plate", 1.0).is_err());
}
