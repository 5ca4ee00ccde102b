// tests/loader.rs
//
// End-to-end checks for the source-priority chain against real
// directories on disk.
//
use std::fs;
use std::path::{Path, PathBuf};

use dishcat::load::{self, Source};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("dishcat_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

const CSV: &str = "name,province,ingredients,description,image_path\n\
                   pad thai,กรุงเทพฯ,rice noodles,stir fried,img/pad.jpg\n\
                   khao soi,เชียงใหม่,egg noodles,curry broth,img/khao.jpg\n\
                   som tum,อีสาน,green papaya,spicy salad,\n";

#[test]
fn missing_directory_yields_empty_catalog() {
    let dir = tmp_dir("missing");
    fs::remove_dir_all(&dir).unwrap();

    let loaded = load::load_catalog(&dir);
    assert!(loaded.catalog.is_empty());
    assert!(loaded.source.is_none());
    assert!(loaded.warnings.is_empty());
}

#[test]
fn empty_directory_yields_empty_catalog() {
    let dir = tmp_dir("empty");
    let loaded = load::load_catalog(&dir);
    assert!(loaded.catalog.is_empty());
    assert!(loaded.source.is_none());
}

#[test]
fn csv_rows_map_one_to_one_in_order() {
    let dir = tmp_dir("csv_order");
    write(&dir, "dishes.csv", CSV);

    let loaded = load::load_catalog(&dir);
    assert!(matches!(loaded.source, Some(Source::Table(_))));

    let names: Vec<&str> = loaded.catalog.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["pad thai", "khao soi", "som tum"]);
    assert_eq!(loaded.catalog.records[2].image_path, "");
}

#[test]
fn csv_wins_over_index() {
    let dir = tmp_dir("priority_csv");
    write(&dir, "dishes.csv", CSV);
    write(&dir, "index.txt", "001_larb_20230101.jpg\n");

    let loaded = load::load_catalog(&dir);
    assert!(matches!(loaded.source, Some(Source::Table(_))));
    assert_eq!(loaded.catalog.len(), 3);
}

#[test]
fn malformed_csv_falls_through_to_index() {
    let dir = tmp_dir("fallthrough");
    // No `name` column → table source is rejected, silently
    write(&dir, "broken.csv", "foo,bar\n1,2\n");
    write(&dir, "index.txt", "001_pad-thai_20230101.jpg\nsom-tum.jpg\n");

    let loaded = load::load_catalog(&dir);
    assert!(matches!(loaded.source, Some(Source::Index(_))));
    assert!(loaded.warnings.is_empty());

    let names: Vec<&str> = loaded.catalog.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["pad thai", "som tum"]);
}

#[test]
fn unreadable_pdf_warns_and_falls_through() {
    let dir = tmp_dir("bad_pdf");
    write(&dir, "menu.pdf", "this is not a pdf");
    write(&dir, "index.txt", "som-tum.jpg\n");

    let loaded = load::load_catalog(&dir);
    assert!(matches!(loaded.source, Some(Source::Index(_))));
    assert_eq!(loaded.warnings.len(), 1);
    assert_eq!(loaded.catalog.records[0].name, "som tum");
}

#[test]
fn index_records_take_defaults() {
    let dir = tmp_dir("index_defaults");
    write(&dir, "index.txt", "001_khao-soi_20230211.jpg\n\n   \n123_gaeng_hung_lay.png\n");

    let loaded = load::load_catalog(&dir);
    let recs = &loaded.catalog.records;
    // Blank lines skipped
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].name, "khao soi");
    assert_eq!(recs[1].name, "gaeng hung lay");
    for r in recs {
        assert_eq!(r.province, "Unknown");
        assert_eq!(r.ingredients, "");
        assert_eq!(r.description, "");
        assert_eq!(r.image_path, "");
    }
}

#[test]
fn header_only_csv_still_claims_the_directory() {
    let dir = tmp_dir("header_only");
    write(&dir, "dishes.csv", "name,province,ingredients,description,image_path\n");
    write(&dir, "index.txt", "som-tum.jpg\n");

    // A present, parsable table wins even when it is empty
    let loaded = load::load_catalog(&dir);
    assert!(matches!(loaded.source, Some(Source::Table(_))));
    assert!(loaded.catalog.is_empty());
}
