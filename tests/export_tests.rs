mod common;
use common::{PIN, init_bound_kiosk, rk, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_newest_first() {
    let db_path = setup_test_db("export_csv_order");
    init_bound_kiosk(&db_path);

    rk().args(["--db", &db_path, "in", "จอย"]).assert().success();
    rk().args(["--db", &db_path, "out", "จอย"]).assert().success();

    let out = temp_out("export_csv_order", "csv");

    rk().args(["--db", &db_path, "export", "--file", &out, "--pin", PIN])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.split('\n').collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], r#""id","name","type","time""#);
    assert!(lines[1].contains(r#","จอย","out","#));
    assert!(lines[2].contains(r#","จอย","in","#));
}

#[test]
fn test_export_wrong_pin_writes_nothing() {
    let db_path = setup_test_db("export_wrong_pin");
    init_bound_kiosk(&db_path);

    let out = temp_out("export_wrong_pin", "csv");

    rk().args(["--db", &db_path, "export", "--file", &out, "--pin", "0000"])
        .assert()
        .failure()
        .stderr(contains("Wrong PIN"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_bound_kiosk(&db_path);

    rk().args(["--db", &db_path, "in", "บี"]).assert().success();

    let out = temp_out("export_json", "json");

    rk().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--pin", PIN,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows[0]["name"], "บี");
    assert_eq!(rows[0]["type"], "in");
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_force");
    init_bound_kiosk(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "keep me").unwrap();

    rk().args(["--db", &db_path, "export", "--file", &out, "--pin", PIN])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rk().args(["--db", &db_path, "export", "--file", &out, "--pin", PIN, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with(r#""id""#));
}

#[test]
fn test_export_round_trips_through_library() {
    let db_path = setup_test_db("export_round_trip");
    init_bound_kiosk(&db_path);

    for (cmd, name) in [("in", "กุ๊ก"), ("in", "เจี๊ยบ"), ("out", "กุ๊ก")] {
        rk().args(["--db", &db_path, cmd, name]).assert().success();
    }

    let out = temp_out("export_round_trip", "csv");
    rk().args(["--db", &db_path, "export", "--file", &out, "--pin", PIN])
        .assert()
        .success();

    let parsed = rkiosk::export::parse_csv(&fs::read_to_string(&out).unwrap()).unwrap();

    let store = rkiosk::store::SqliteStore::open(&db_path).unwrap();
    let kiosk = rkiosk::core::Kiosk::load(store, vec![]).unwrap();

    let triples = |v: &[rkiosk::models::entry::AttendanceEntry]| {
        v.iter()
            .map(|e| (e.name.clone(), e.kind, e.time))
            .collect::<Vec<_>>()
    };
    assert_eq!(triples(&parsed), triples(kiosk.logs()));
}
