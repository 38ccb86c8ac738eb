//! Tests for locating and loading sales extracts.

use std::fs;
use std::path::{Path, PathBuf};

use morsel_ingest::{locate_files, read_raw_table};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn loads_every_located_file_with_its_own_delimiter() {
    let dir = TempDir::new().expect("temp dir");
    write(
        dir.path(),
        "a_comma.csv",
        "product,quantity,price,region\npink morsel,1,$3.00,north\n",
    );
    write(
        dir.path(),
        "b_tab.csv",
        "Item\tQty\tPrice\tZone\nPink Morsel\t4\t$3.00\teast\n",
    );
    write(
        dir.path(),
        "c_semicolon.csv",
        "ТОВАР;Количество;Цена;Регион\npink morsel;2;5.00;юг\n",
    );

    let files = locate_files(dir.path(), "*.csv").expect("locate");
    assert_eq!(files.len(), 3);

    let delimiters: Vec<u8> = files
        .iter()
        .map(|path| read_raw_table(path).expect("read").delimiter)
        .collect();
    assert_eq!(delimiters, vec![b',', b'\t', b';']);

    let russian = read_raw_table(&files[2]).expect("read");
    assert_eq!(russian.headers, vec!["товар", "количество", "цена", "регион"]);
}

#[test]
fn pattern_can_descend_into_subdirectories() {
    let dir = TempDir::new().expect("temp dir");
    fs::create_dir(dir.path().join("2024")).expect("subdir");
    write(dir.path(), "top.csv", "a,b\n1,2\n");
    write(&dir.path().join("2024"), "nested.csv", "a,b\n1,2\n");

    let top = locate_files(dir.path(), "*.csv").expect("locate");
    assert_eq!(top.len(), 1);

    let nested = locate_files(dir.path(), "2024/*.csv").expect("locate");
    assert_eq!(nested.len(), 1);
    assert!(nested[0].ends_with("2024/nested.csv"));
}

#[test]
fn quoted_fields_keep_embedded_delimiters() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        dir.path(),
        "quoted.csv",
        "product,price,quantity,region\n\"pink morsel\",\"12,50\",3,\"north, upper\"\n",
    );

    let table = read_raw_table(&path).expect("read");
    assert_eq!(table.rows[0], vec!["pink morsel", "12,50", "3", "north, upper"]);
}
