use std::fs;

use ball_merger::core::config::GameConfig;
use ball_merger::core::size_table::SizeTable;

#[test]
fn loads_overrides_and_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.ron");
    fs::write(
        &path,
        r#"(
            window: (title: "Test Container"),
            drop: (cooldown_secs: 0.2, easy_tiers: 2),
            tiers: [
                (radius: 10.0, asset: "sprites/a.png"),
                (radius: 20.0, asset: "sprites/b.png"),
                (radius: 30.0, asset: "sprites/c.png"),
            ],
        )"#,
    )
    .unwrap();

    let cfg = GameConfig::load_from_file(&path).unwrap();
    assert_eq!(cfg.window.title, "Test Container");
    assert_eq!(cfg.window.width, 640.0);
    assert_eq!(cfg.drop.cooldown_secs, 0.2);
    assert_eq!(cfg.tiers.len(), 3);

    let table = SizeTable::try_from_config(&cfg).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.next_tier(2), None);
}

#[test]
fn missing_file_reports_read_error() {
    let err = GameConfig::load_from_file("does/not/exist.ron").unwrap_err();
    assert!(err.contains("read config"), "{err}");
}

#[test]
fn malformed_ron_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ron");
    fs::write(&path, "(window: (width: \"not a number\"))").unwrap();
    let err = GameConfig::load_from_file(&path).unwrap_err();
    assert!(err.contains("parse config"), "{err}");
}

#[test]
fn shrinking_tier_radii_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad_tiers.ron");
    fs::write(
        &path,
        r#"(
            drop: (easy_tiers: 2),
            tiers: [
                (radius: 30.0, asset: "sprites/a.png"),
                (radius: 10.0, asset: "sprites/b.png"),
            ],
        )"#,
    )
    .unwrap();

    let cfg = GameConfig::load_from_file(&path).unwrap();
    let err = SizeTable::try_from_config(&cfg).unwrap_err();
    assert!(err.contains("tier 1"), "{err}");
}
