// tests/catalog_view.rs
//
// Filter contract: "all" preserves the whole catalog in order, a
// province selection is an exact string match, and the province list
// offered to the UI is distinct and sorted.
//
use dishcat::catalog::{Catalog, FilteredView, ProvinceFilter};
use dishcat::record::Record;

fn dish(name: &str, province: &str) -> Record {
    Record::normalized(Some(name), Some(province), None, None, None)
}

fn sample() -> Catalog {
    Catalog::new(vec![
        dish("khao soi", "เชียงใหม่"),
        dish("som tum", "อีสาน"),
        dish("pad thai", "กรุงเทพฯ"),
        dish("sai ua", "เชียงใหม่"),
        dish("khao soi", "เชียงใหม่"), // duplicates are legal
    ])
}

#[test]
fn all_returns_full_catalog_in_order() {
    let c = sample();
    let v = FilteredView::from_catalog(&c, &ProvinceFilter::All);
    assert_eq!(v.row_ix, vec![0, 1, 2, 3, 4]);
}

#[test]
fn province_filter_is_exact_and_order_preserving() {
    let c = sample();
    let v = FilteredView::from_catalog(&c, &ProvinceFilter::One("เชียงใหม่".into()));
    assert_eq!(v.row_ix, vec![0, 3, 4]);

    for i in 0..v.len() {
        assert_eq!(v.record(&c, i).unwrap().province, "เชียงใหม่");
    }
}

#[test]
fn absent_province_matches_nothing() {
    let c = sample();
    let v = FilteredView::from_catalog(&c, &ProvinceFilter::One("ภูเก็ต".into()));
    assert!(v.is_empty());
}

#[test]
fn provinces_are_distinct_sorted_and_exclude_the_sentinel() {
    let c = sample();
    let p = c.provinces();
    assert_eq!(p.len(), 3);
    let mut sorted = p.clone();
    sorted.sort();
    assert_eq!(p, sorted);
    assert!(!p.contains(&dishcat::consts::ALL_PROVINCES.to_string()));
}

#[test]
fn defaulted_records_filter_under_unknown() {
    let mut c = sample();
    c.records.push(Record::normalized(Some("mystery"), None, None, None, None));

    let v = FilteredView::from_catalog(&c, &ProvinceFilter::One("Unknown".into()));
    assert_eq!(v.len(), 1);
    assert_eq!(v.record(&c, 0).unwrap().name, "mystery");
}
