use jot::model::Note;
use jot::store::backend::StorageBackend;
use jot::store::fs_backend::FsBackend;
use jot::theme::Theme;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn note(id: i64, text: &str, category: &str) -> Note {
    Note::new(id, text.to_string(), category.to_string())
}

#[test]
fn test_notes_roundtrip() {
    let (_dir, backend) = setup();

    let notes = vec![
        note(1, "Buy milk", "personal"),
        note(2, "Standup agenda", "work"),
    ];
    backend.save_notes(&notes).unwrap();

    let loaded = backend.load_notes().unwrap();
    assert_eq!(loaded, notes);
}

#[test]
fn test_missing_notes_file_is_empty_collection() {
    let (_dir, backend) = setup();
    assert!(backend.load_notes().unwrap().is_empty());
}

#[test]
fn test_theme_roundtrip() {
    let (_dir, backend) = setup();

    assert_eq!(backend.load_theme().unwrap(), None);

    backend.save_theme(Theme::Dark).unwrap();
    assert_eq!(backend.load_theme().unwrap(), Some(Theme::Dark));
}

#[test]
fn test_theme_wire_format() {
    let (dir, backend) = setup();

    backend.save_theme(Theme::Dark).unwrap();

    // The persisted value is the bare JSON string "dark".
    let on_disk = fs::read_to_string(dir.path().join("theme.json")).unwrap();
    assert_eq!(on_disk, "\"dark\"");
}

#[test]
fn test_notes_wire_format() {
    let (dir, backend) = setup();

    backend.save_notes(&[note(1712345678901, "Buy milk", "personal")]).unwrap();

    let on_disk = fs::read_to_string(dir.path().join("notes.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(parsed[0]["id"], 1712345678901i64);
    assert_eq!(parsed[0]["text"], "Buy milk");
    assert_eq!(parsed[0]["category"], "personal");
    assert_eq!(parsed[0]["pinned"], false);
}

#[test]
fn test_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.save_notes(&[note(1, "Atomic", "work")]).unwrap();
    backend.save_theme(Theme::Light).unwrap();

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_save_overwrites_whole_collection() {
    let (_dir, backend) = setup();

    backend
        .save_notes(&[note(1, "A", "personal"), note(2, "B", "work")])
        .unwrap();
    backend.save_notes(&[note(2, "B", "work")]).unwrap();

    let loaded = backend.load_notes().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].text, "B");
}

#[test]
fn test_preserves_insertion_order_on_disk() {
    let (_dir, backend) = setup();

    let mut notes = vec![
        note(1, "first", "personal"),
        note(2, "second", "work"),
        note(3, "third", "ideas"),
    ];
    notes[1].pinned = true;
    backend.save_notes(&notes).unwrap();

    // Pinned state never reorders the persisted sequence.
    let loaded = backend.load_notes().unwrap();
    let texts: Vec<_> = loaded.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}
