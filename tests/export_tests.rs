mod common;
use common::{SAMPLE_DOCUMENT, eco, eco_ok, init_with_data, setup_data_file, temp_out};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_json_matches_data_file() {
    let data_path = setup_data_file("export_json_matches");
    init_with_data(&data_path);

    let out = temp_out("export_json_matches", "json");

    eco()
        .args(["--data", &data_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let exported = fs::read_to_string(&out).expect("read exported json");
    let original = fs::read_to_string(&data_path).expect("read data file");
    assert_eq!(exported, original);

    let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(value.as_array().map(|a| a.len()), Some(4));
}

#[test]
fn test_export_csv_rows() {
    let data_path = setup_data_file("export_csv_rows");
    init_with_data(&data_path);

    let out = temp_out("export_csv_rows", "csv");

    eco()
        .args(["--data", &data_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "index,date,type,subtype,quantity,unit,emissions_kg");
    assert!(lines[1].starts_with("1,"));
    assert!(lines[1].contains(",transport,car,"));
    assert!(lines[2].contains(",electricity,,"));
    // water has neither subtype nor emissions
    assert!(lines[3].contains(",water,,"));
    assert!(lines[3].ends_with(",litres,"));
    assert!(lines[4].contains(",waste,,"));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let data_path = setup_data_file("export_refuses_overwrite");
    init_with_data(&data_path);

    let out = temp_out("export_refuses_overwrite", "json");
    fs::write(&out, "keep me").unwrap();

    eco()
        .args(["--data", &data_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    eco()
        .args(["--data", &data_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_import_replaces_log() {
    let data_path = setup_data_file("import_replaces_log");
    eco_ok(&data_path, &["add", "water", "999"]);

    let source = temp_out("import_replaces_log_source", "json");
    fs::write(&source, SAMPLE_DOCUMENT).unwrap();

    eco()
        .args(["--data", &data_path, "import", "--file", &source])
        .assert()
        .success()
        .stdout(contains("(4 activities)"))
        .stdout(contains("Replaced 1 previously logged activities."));

    eco()
        .args(["--data", &data_path, "list"])
        .assert()
        .success()
        .stdout(contains("2024-01-15"))
        .stdout(contains("999.00 litres").not());

    eco()
        .args(["--data", &data_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Total Activities Logged: 4 activities"));
}

#[test]
fn test_import_missing_file_fails() {
    let data_path = setup_data_file("import_missing_file");
    init_with_data(&data_path);
    let before = fs::read_to_string(&data_path).unwrap();

    let source = temp_out("import_missing_file_source", "json");

    eco()
        .args(["--data", &data_path, "import", "--file", &source])
        .assert()
        .failure()
        .stderr(contains("not found"));

    assert_eq!(fs::read_to_string(&data_path).unwrap(), before);
}

#[test]
fn test_import_malformed_file_fails() {
    let data_path = setup_data_file("import_malformed_file");
    init_with_data(&data_path);
    let before = fs::read_to_string(&data_path).unwrap();

    let source = temp_out("import_malformed_file_source", "json");
    fs::write(&source, r#"[{"type":"spaceship","fuel":9}]"#).unwrap();

    eco()
        .args(["--data", &data_path, "import", "--file", &source])
        .assert()
        .failure()
        .stderr(contains("invalid document"));

    assert_eq!(fs::read_to_string(&data_path).unwrap(), before);
}

#[test]
fn test_import_recovers_corrupt_data_file() {
    let data_path = setup_data_file("import_over_corrupt");
    fs::write(&data_path, "{not json").unwrap();

    let source = temp_out("import_over_corrupt_source", "json");
    fs::write(&source, SAMPLE_DOCUMENT).unwrap();

    eco()
        .args(["--data", &data_path, "import", "--file", &source])
        .assert()
        .success()
        .stdout(contains("(4 activities)"))
        .stdout(contains("Replaced unreadable data file"));

    eco()
        .args(["--data", &data_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Total Activities Logged: 4 activities"));
}
