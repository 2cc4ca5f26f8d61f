use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{GAP_TZ, init_db_with_data, rsl, setup_test_db};

#[test]
fn test_init_creates_empty_database() {
    let db_path = setup_test_db("init_empty");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());

    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries."))
        .stdout(contains("rshiftlog add"));
}

#[test]
fn test_list_shows_entries_and_total() {
    let db_path = setup_test_db("list_all");
    init_db_with_data(&db_path);

    let output = rsl()
        .args(["--db", &db_path, "list"])
        .output()
        .expect("failed to list entries");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("HDES-GTC"));
    assert!(stdout.contains("Site B"));
    assert!(stdout.contains("08:00 – 17:00"));
    assert!(stdout.contains("Total: 12.00 h"));

    // most recent day first
    let pos_b = stdout.find("Site B").expect("Site B row");
    let pos_a = stdout.find("HDES-GTC").expect("HDES-GTC row");
    assert!(pos_b < pos_a, "2025-09-15 should be listed before 2025-09-01");
}

#[test]
fn test_list_search_is_case_insensitive_on_location() {
    let db_path = setup_test_db("list_search_loc");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "list", "--search", "gtc"])
        .assert()
        .success()
        .stdout(contains("HDES-GTC"))
        .stdout(contains("Site B").not())
        .stdout(contains("Total: 8.00 h"));
}

#[test]
fn test_list_search_matches_job_number() {
    let db_path = setup_test_db("list_search_job");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "list", "-s", "321"])
        .assert()
        .success()
        .stdout(contains("321487"))
        .stdout(contains("99001").not());
}

#[test]
fn test_list_filter_by_date() {
    let db_path = setup_test_db("list_date");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "list", "--date", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("Site B"))
        .stdout(contains("HDES-GTC").not())
        .stdout(contains("Total: 4.00 h"));

    rsl()
        .args([
            "--db",
            &db_path,
            "list",
            "--date",
            "2025-09-15",
            "--search",
            "gtc",
        ])
        .assert()
        .success()
        .stdout(contains("No entry matches the current filter."));
}

#[test]
fn test_add_requires_location() {
    let db_path = setup_test_db("add_no_location");

    rsl()
        .args(["--db", &db_path, "add", "--job", "321487"])
        .assert()
        .failure()
        .stderr(contains("Enter the work location."));
}

#[test]
fn test_add_requires_job_number() {
    let db_path = setup_test_db("add_no_job");

    rsl()
        .args(["--db", &db_path, "add", "--location", "   ", "--job", "1"])
        .assert()
        .failure()
        .stderr(contains("Enter the work location."));

    rsl()
        .args(["--db", &db_path, "add", "--location", "HDES-GTC"])
        .assert()
        .failure()
        .stderr(contains("Enter the job number."));
}

#[test]
fn test_add_rejects_end_before_start() {
    let db_path = setup_test_db("add_inverted");

    rsl()
        .args([
            "--db",
            &db_path,
            "add",
            "--date",
            "2025-09-02",
            "-l",
            "HDES-GTC",
            "-j",
            "321487",
            "--start",
            "17:00",
            "--end",
            "08:00",
        ])
        .assert()
        .failure()
        .stderr(contains("End time cannot be earlier than start time."));

    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries."));
}

#[test]
fn test_add_rejects_malformed_date_and_time() {
    let db_path = setup_test_db("add_malformed");

    rsl()
        .args([
            "--db", &db_path, "add", "--date", "01/09/2025", "-l", "A", "-j", "1",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: 01/09/2025"));

    rsl()
        .args(["--db", &db_path, "add", "-l", "A", "-j", "1", "--start", "8h"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 8h"));
}

#[test]
fn test_add_uses_default_times() {
    let db_path = setup_test_db("add_defaults");

    rsl()
        .args([
            "--db", &db_path, "add", "--date", "2025-09-03", "-l", "Depot", "-j", "77",
        ])
        .assert()
        .success()
        .stdout(contains("Entry #1 added: 8.00h net on 2025-09-03."));

    rsl()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("08:00 – 17:00"));
}

#[test]
fn test_show_breakdown() {
    let db_path = setup_test_db("show_breakdown");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Entry #1"))
        .stdout(contains("Gross:      9.00h"))
        .stdout(contains("Lunch:      1.00h (window)"))
        .stdout(contains("Net:        8.00h (08h 00m)"));
}

#[test]
fn test_edit_updates_in_place() {
    let db_path = setup_test_db("edit_in_place");
    init_db_with_data(&db_path);

    rsl()
        .args([
            "--db", &db_path, "edit", "1", "--start", "09:00", "--end", "12:30", "--notes",
            "morning only",
        ])
        .assert()
        .success()
        .stdout(contains("Entry #1 saved: 3.00h net"));

    rsl()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("09:00 – 12:30"))
        .stdout(contains("Lunch:      0.50h"))
        .stdout(contains("Net:        3.00h"))
        .stdout(contains("morning only"));

    // still two entries, the edited one keeps its id
    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Total: 7.00 h"))
        .stdout(contains("↳ morning only"));

    rsl()
        .args(["--db", &db_path, "edit", "1", "--clear-notes"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("morning only").not());
}

#[test]
fn test_edit_validation_keeps_stored_entry() {
    let db_path = setup_test_db("edit_invalid");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "edit", "2", "--job", " "])
        .assert()
        .failure()
        .stderr(contains("Enter the job number."));

    rsl()
        .args(["--db", &db_path, "show", "2"])
        .assert()
        .success()
        .stdout(contains("99001"));
}

#[test]
fn test_edit_missing_entry() {
    let db_path = setup_test_db("edit_missing");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "edit", "99", "--end", "18:00"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("❌").and(contains("Error: No entry found with id 99")));
}

#[test]
fn test_del_by_id() {
    let db_path = setup_test_db("del_by_id");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Entry #1 has been deleted."));

    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("HDES-GTC").not())
        .stdout(contains("Site B"))
        .stdout(contains("Total: 4.00 h"));
}

#[test]
fn test_del_cancelled_by_user() {
    let db_path = setup_test_db("del_cancel");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "del", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Site B"));
}

#[test]
fn test_del_confirmed_on_prompt() {
    let db_path = setup_test_db("del_confirm");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "del", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Entry #2 has been deleted."));
}

#[test]
fn test_del_by_index_in_filtered_list() {
    let db_path = setup_test_db("del_index");
    init_db_with_data(&db_path);

    rsl()
        .args([
            "--db", &db_path, "del", "--index", "1", "--search", "gtc", "--yes",
        ])
        .assert()
        .success()
        .stdout(contains("Entry #1 has been deleted."));

    rsl()
        .args(["--db", &db_path, "del", "--index", "5", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entry at position 5"));

    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Site B"))
        .stdout(contains("HDES-GTC").not());
}

#[test]
fn test_del_missing_entry() {
    let db_path = setup_test_db("del_missing");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "del", "42", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entry found with id 42"));
}

#[test]
fn test_add_on_day_with_skipped_midnight() {
    let db_path = setup_test_db("gap_day");
    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // 00:30 does not exist on that day; the form keeps the day start (01:00)
    rsl()
        .env("TZ", GAP_TZ)
        .args([
            "--db",
            &db_path,
            "add",
            "--date",
            "2017-10-15",
            "-l",
            "Site C",
            "-j",
            "4410",
            "--start",
            "00:30",
            "--end",
            "09:00",
        ])
        .assert()
        .success()
        .stdout(contains("Start:      01:00"))
        .stdout(contains("Entry #1 added: 8.00h net on 2017-10-15."));

    rsl()
        .env("TZ", GAP_TZ)
        .args(["--db", &db_path, "list", "--date", "2017-10-15"])
        .assert()
        .success()
        .stdout(contains("Site C"))
        .stdout(contains("01:00 – 09:00"))
        .stdout(contains("Total: 8.00 h"));
}
