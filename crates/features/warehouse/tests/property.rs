use depot_domain::{DepartmentKind, Product, ProductDescriptor, ProductKind};
use depot_warehouse::{Department, Warehouse};
use proptest::prelude::*;
use proptest::sample::select;
use strum::IntoEnumIterator;

fn product_kind() -> impl Strategy<Value = ProductKind> {
    select(ProductKind::iter().collect::<Vec<_>>())
}

fn department_kind() -> impl Strategy<Value = DepartmentKind> {
    select(DepartmentKind::iter().collect::<Vec<_>>())
}

// Sizes on a quarter grid keep every sum exact in binary floating point.
fn size() -> impl Strategy<Value = f64> {
    (0u32..40).prop_map(|quarters| f64::from(quarters) / 4.0)
}

// Tenths have no exact binary representation.
fn inexact_size() -> impl Strategy<Value = f64> {
    (0u32..1000).prop_map(|tenths| f64::from(tenths) / 10.0)
}

fn product() -> impl Strategy<Value = Product> {
    (product_kind(), "[a-e]", size()).prop_map(|(kind, name, size)| Product::new(kind, name, size))
}

fn inexact_product() -> impl Strategy<Value = Product> {
    (product_kind(), "[a-e]", inexact_size()).prop_map(|(kind, name, size)| Product::new(kind, name, size))
}

fn layout() -> impl Strategy<Value = Vec<(DepartmentKind, f64)>> {
    prop::collection::vec((department_kind(), (0u32..20).prop_map(f64::from)), 0..6)
}

fn build(layout: &[(DepartmentKind, f64)]) -> Warehouse {
    let mut warehouse = Warehouse::new();
    for &(kind, max_occupancy) in layout {
        warehouse.add_department(Department::new(kind, max_occupancy));
    }
    warehouse
}

fn total_stored(warehouse: &Warehouse) -> usize {
    warehouse.departments().iter().map(Department::len).sum()
}

proptest! {
    #[test]
    fn occupancy_never_exceeds_capacity(layout in layout(), products in prop::collection::vec(product(), 0..30)) {
        let mut warehouse = build(&layout);
        warehouse.submit_delivery(products);

        for department in warehouse.departments() {
            prop_assert!(department.occupancy() <= department.max_occupancy());
            let sum: f64 = department.items().iter().map(Product::size).sum();
            prop_assert_eq!(department.occupancy(), sum);
        }
    }

    #[test]
    fn report_has_one_entry_per_product(layout in layout(), products in prop::collection::vec(product(), 0..30)) {
        let mut warehouse = build(&layout);
        let names: Vec<String> = products.iter().map(|p| p.name().to_owned()).collect();

        let report = warehouse.submit_delivery(products);

        let reported: Vec<_> = report.delivery_report.iter().map(|e| e.product_name.clone()).collect();
        prop_assert_eq!(reported, names);
        prop_assert_eq!(report.stored_count(), total_stored(&warehouse));
    }

    #[test]
    fn rejection_leaves_departments_unchanged(layout in layout(), product in product()) {
        let mut warehouse = build(&layout);
        let before = warehouse.save_state();

        let report = warehouse.submit_delivery(vec![product]);

        if !report.delivery_report[0].is_success() {
            prop_assert_eq!(warehouse.save_state(), before);
        }
    }

    #[test]
    fn each_descriptor_extracts_at_most_once(
        layout in layout(),
        products in prop::collection::vec(product(), 0..30),
        names in prop::collection::vec("[a-f]", 0..10),
    ) {
        let mut warehouse = build(&layout);
        warehouse.submit_delivery(products);
        let before = total_stored(&warehouse);

        let descriptors: Vec<_> = names.into_iter().map(ProductDescriptor::by_name).collect();
        let picked = warehouse.pick(&descriptors);

        prop_assert!(picked.len() <= descriptors.len());
        prop_assert_eq!(total_stored(&warehouse) + picked.len(), before);
    }

    #[test]
    fn save_restore_round_trips(layout in layout(), products in prop::collection::vec(inexact_product(), 0..30)) {
        let mut warehouse = build(&layout);
        warehouse.submit_delivery(products);
        let saved = warehouse.save_state_json().unwrap();

        let mut restored = Warehouse::new();
        prop_assert!(restored.restore_state(&saved));
        prop_assert_eq!(restored.save_state_json().unwrap(), saved);
    }

    #[test]
    fn inexact_sizes_stay_within_capacity(layout in layout(), products in prop::collection::vec(inexact_product(), 0..30)) {
        let mut warehouse = build(&layout);
        warehouse.submit_delivery(products);

        for department in warehouse.departments() {
            prop_assert!(department.occupancy() <= department.max_occupancy());
        }
    }
}
