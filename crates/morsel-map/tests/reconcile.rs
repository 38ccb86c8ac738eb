use morsel_map::{ColumnReconciler, ReconcileError};
use morsel_model::{CanonicalField, FileSkip, SynonymTable};
use proptest::prelude::{Just, prop_assert, prop_assert_eq, prop_oneof, proptest};
use proptest::sample::subsequence;
use proptest::strategy::Strategy;

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn russian_headers_reconcile() {
    let reconciler = ColumnReconciler::default();
    let map = reconciler
        .reconcile(&owned(&["продукт", "количество", "стоимость", "регион"]))
        .expect("reconcile");
    assert_eq!(map.get(CanonicalField::Product).source, "продукт");
    assert_eq!(map.get(CanonicalField::Price).source, "стоимость");
}

#[test]
fn missing_fields_convert_to_schema_incomplete() {
    let reconciler = ColumnReconciler::default();
    let err = reconciler
        .reconcile(&owned(&["item", "amount", "price"]))
        .expect_err("region is missing");
    let skip: FileSkip = err.into();
    assert_eq!(
        skip,
        FileSkip::SchemaIncomplete {
            missing: vec![CanonicalField::Region]
        }
    );
}

#[test]
fn extended_synonyms_resolve_after_defaults() {
    let synonyms = SynonymTable::default()
        .with_synonyms(CanonicalField::Region, ["Territory"])
        .expect("valid synonym");
    let reconciler = ColumnReconciler::new(synonyms);

    let map = reconciler
        .reconcile(&owned(&["product", "quantity", "price", "territory"]))
        .expect("reconcile");
    assert_eq!(map.get(CanonicalField::Region).source, "territory");

    let map = reconciler
        .reconcile(&owned(&["territory", "zone", "product", "quantity", "price"]))
        .expect("reconcile");
    assert_eq!(map.get(CanonicalField::Region).source, "zone");
    assert_eq!(map.index(CanonicalField::Region), 1);
}

#[test]
fn default_table_rejects_unknown_headers() {
    let err = ColumnReconciler::default()
        .reconcile(&owned(&["sku", "units", "cost", "territory"]))
        .expect_err("nothing matches");
    assert_eq!(
        err,
        ReconcileError::MissingFields {
            missing: CanonicalField::ALL.to_vec()
        }
    );
}

fn synonym_for(field: CanonicalField) -> impl Strategy<Value = String> {
    let table = SynonymTable::default();
    let options: Vec<String> = table.synonyms(field).to_vec();
    proptest::sample::select(options)
}

proptest! {
    #[test]
    fn any_full_synonym_set_reconciles(
        product in synonym_for(CanonicalField::Product),
        quantity in synonym_for(CanonicalField::Quantity),
        price in synonym_for(CanonicalField::Price),
        region in synonym_for(CanonicalField::Region),
        extra in prop_oneof![Just("date".to_string()), Just("store".to_string())],
    ) {
        let headers = vec![extra, region.clone(), price.clone(), quantity.clone(), product.clone()];
        let map = ColumnReconciler::default().reconcile(&headers).expect("all fields present");
        prop_assert_eq!(map.get(CanonicalField::Product).source.as_str(), product.as_str());
        prop_assert_eq!(map.get(CanonicalField::Quantity).source.as_str(), quantity.as_str());
        prop_assert_eq!(map.get(CanonicalField::Price).source.as_str(), price.as_str());
        prop_assert_eq!(map.get(CanonicalField::Region).source.as_str(), region.as_str());
    }

    #[test]
    fn dropping_fields_reports_exactly_those_fields(
        kept in subsequence(CanonicalField::ALL.to_vec(), 0..4),
    ) {
        let headers: Vec<String> = kept.iter().map(|field| field.as_str().to_string()).collect();
        let err = ColumnReconciler::default().reconcile(&headers).expect_err("incomplete");
        let ReconcileError::MissingFields { missing } = err;
        let expected: Vec<CanonicalField> = CanonicalField::ALL
            .into_iter()
            .filter(|field| !kept.contains(field))
            .collect();
        prop_assert!(!missing.is_empty());
        prop_assert_eq!(missing, expected);
    }
}
