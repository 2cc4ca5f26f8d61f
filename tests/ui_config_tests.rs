use pretty_assertions::assert_eq;
use rshiftlog::config::Config;
use rshiftlog::core::calculator::LunchPolicy;
use rshiftlog::core::list::ListLogic;
use rshiftlog::db::{EntryRepository, SqliteRepository};
use rshiftlog::errors::AppError;
use rshiftlog::models::entry::WorkEntry;
use rshiftlog::ui::render::{entry_view, list_view};
use rshiftlog::ui::splash::{self, FADE_DELAY, STEP_DELAY};
use rshiftlog::utils::table::{Column, Table};
use std::fs;
use std::time::Duration;

mod common;
use common::{day, hm, local};

fn temp_conf(name: &str, content: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("{}_rshiftlog.conf", name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_splash_sequence() {
    let steps: Vec<_> = splash::steps().collect();

    assert_eq!(steps.len(), 4);
    assert_eq!(
        steps.iter().map(|s| s.progress).collect::<Vec<_>>(),
        vec![0.25, 0.50, 0.75, 1.00]
    );
    assert!(steps.iter().all(|s| s.delay == Duration::from_millis(300)));
    assert_eq!(STEP_DELAY, Duration::from_millis(300));
    assert_eq!(FADE_DELAY, Duration::from_millis(350));
}

#[test]
fn test_splash_bar() {
    assert!(splash::render_bar(0.0).ends_with("  0%"));
    assert!(splash::render_bar(0.5).ends_with(" 50%"));
    assert!(splash::render_bar(1.0).contains(&"#".repeat(22)));
    assert!(splash::render_bar(1.0).ends_with("100%"));
}

#[test]
fn test_splash_run_writes_every_step() {
    let mut out = Vec::new();
    splash::run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    for pct in ["25%", "50%", "75%", "100%"] {
        assert!(text.contains(pct), "missing {pct}");
    }
    assert!(text.ends_with("\r\x1b[2K"));
}

#[test]
fn test_table_pads_on_display_width() {
    let mut table = Table::new(vec![Column::right("ID"), Column::left("Location")]);
    table.add_row(vec!["1".into(), "Évora – obra".into()]);
    table.add_row_with_details(vec!["12".into(), "X".into()], vec!["↳ note".into()]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "ID  Location");
    assert_eq!(lines[1], "-".repeat(2 + 2 + 12));
    assert_eq!(lines[2], " 1  Évora – obra");
    assert_eq!(lines[3], "12  X");
    assert_eq!(lines[4], "    ↳ note");
}

#[test]
fn test_config_defaults_when_file_missing() {
    let cfg = Config::load_from(std::path::Path::new("/nonexistent/rshiftlog.conf")).unwrap();

    assert_eq!(cfg.lunch_policy, LunchPolicy::Window);
    assert_eq!(cfg.date_format, "%Y-%m-%d");
    assert!(!cfg.show_splash);

    let defaults = cfg.form_defaults().unwrap();
    assert_eq!(defaults.start, hm(8, 0));
    assert_eq!(defaults.end, hm(17, 0));
}

#[test]
fn test_config_partial_file_uses_defaults() {
    let path = temp_conf(
        "partial",
        "database: /tmp/x.sqlite\nlunch_policy: flat\ndefault_start: \"07:30\"\n",
    );
    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.lunch_policy, LunchPolicy::Flat);
    assert_eq!(cfg.form_defaults().unwrap().start, hm(7, 30));
    assert_eq!(cfg.default_end, "17:00");
}

#[test]
fn test_config_rejects_bad_values() {
    let path = temp_conf("bad_policy", "lunch_policy: sometimes\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(&err, AppError::Config(msg) if msg.contains("bad_policy_rshiftlog.conf")));

    let path = temp_conf("bad_start", "default_start: noon\n");
    let cfg = Config::load_from(&path).unwrap();
    assert!(cfg.form_defaults().is_err());
}

#[test]
fn test_config_unreadable_file_is_io_error() {
    let dir = std::env::temp_dir().join("dir_rshiftlog.conf");
    fs::create_dir_all(&dir).unwrap();

    assert!(matches!(Config::load_from(&dir), Err(AppError::Io(_))));
}

#[test]
fn test_list_view_rows_notes_and_total() {
    let mut repo = SqliteRepository::in_memory().unwrap();
    let d = day(2025, 9, 1);
    repo.insert_one(&WorkEntry::new(
        local(d, 0, 0),
        "HDES-GTC",
        "321487",
        local(d, 8, 0),
        local(d, 17, 0),
        Some("poured slab".into()),
    ))
    .unwrap();

    let cfg = Config::default();
    let mut list = ListLogic::load(&repo, cfg.lunch_policy).unwrap();
    let view = list_view(&list, &cfg);

    assert!(view.contains("2025-09-01"));
    assert!(view.contains("08:00 – 17:00"));
    assert!(view.contains("8.00h"));
    assert!(view.contains("↳ poured slab"));
    assert!(view.contains("Total: 8.00 h"));

    list.set_search("nothing");
    let view = list_view(&list, &cfg);
    assert!(view.contains("🔎 Filter: search \"nothing\""));
    assert!(view.contains("No entry matches the current filter."));
}

#[test]
fn test_entry_view_with_flat_policy() {
    let d = day(2025, 9, 1);
    let mut e = WorkEntry::new(local(d, 0, 0), "Site B", "99001", local(d, 14, 0), local(d, 18, 0), None);
    e.id = 3;

    let cfg = Config {
        lunch_policy: LunchPolicy::Flat,
        ..Config::default()
    };
    let view = entry_view(&e, &cfg);

    assert!(view.contains("Entry #3"));
    assert!(view.contains("Gross:      4.00h"));
    assert!(view.contains("Lunch:      1.00h (flat)"));
    assert!(view.contains("Net:        3.00h (03h 00m)"));
    assert!(!view.contains("Notes:"));
}
