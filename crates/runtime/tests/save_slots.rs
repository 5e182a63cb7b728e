//! File-backed save/load scenarios for `BagSession`.

use std::fs;
use std::sync::Arc;

use bag_core::{
    BagConfig, BagError, DropOutcome, ItemDefinition, ItemId, Position, Rotation, SaveEntry,
    ShapeMask, SkipReason,
};
use bag_runtime::{
    BagSession, FileSaveRepository, ItemOracleImpl, RepositoryError, RuntimeError, SaveFile,
    SaveRepository,
};

fn oracle() -> Arc<ItemOracleImpl> {
    let shape = |rows: &[&str]| ShapeMask::from_rows(rows).unwrap();
    Arc::new(ItemOracleImpl::from_definitions([
        ItemDefinition::new("torch", "Torch", shape(&["#", "#"]))
            .with_tags(["fire"])
            .with_linked_slots([Position::new(1, 0)]),
        ItemDefinition::new("coal", "Coal", shape(&["#"])).with_tags(["fire"]),
        ItemDefinition::new("hook", "Hook", shape(&["#.", "##"])),
    ]))
}

fn session() -> BagSession {
    BagSession::new(&BagConfig::default(), oracle())
}

fn spawn_at(session: &mut BagSession, item: &str, x: i32, y: i32) -> bag_core::InstanceId {
    let id = session.spawn(&ItemId::new(item)).unwrap();
    session.place(id, Position::new(x, y)).unwrap();
    id
}

#[test]
fn save_and_load_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSaveRepository::new(dir.path().join("saves")).unwrap();

    let mut original = session();
    let torch = spawn_at(&mut original, "torch", 2, 2);
    spawn_at(&mut original, "coal", 3, 2);
    let hook = original.spawn(&ItemId::new("hook")).unwrap();
    original.begin_drag(hook).unwrap();
    original.rotate_held().unwrap();
    assert!(matches!(
        original.drop_at(Position::new(6, 4)).unwrap(),
        DropOutcome::Placed { .. }
    ));
    assert_eq!(original.adjacency(torch).unwrap().len(), 1);

    original.save(&repo, "slot_1").unwrap();
    assert!(repo.exists("slot_1"));
    assert_eq!(repo.list_slots().unwrap(), ["slot_1"]);

    let mut restored = session();
    let report = restored.load(&repo, "slot_1").unwrap();
    assert!(report.is_clean());
    assert_eq!(report.loaded.len(), 3);
    assert_eq!(restored.snapshot(), original.snapshot());

    let hook = restored
        .inventory()
        .item_at(Position::new(7, 4))
        .map(|item| item.rotation());
    assert_eq!(hook, Some(Rotation::Deg90));
}

#[test]
fn unknown_content_ids_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSaveRepository::new(dir.path()).unwrap();
    let save = SaveFile::new(
        BagConfig::default().dimensions(),
        vec![
            SaveEntry::new("coal", 0, 0, Rotation::Deg0),
            SaveEntry::new("retired_relic", 1, 0, Rotation::Deg0),
            SaveEntry::new("torch", 5, 5, Rotation::Deg270),
        ],
    );
    repo.save("legacy", &save).unwrap();

    let mut session = session();
    let report = session.load(&repo, "legacy").unwrap();

    assert_eq!(report.loaded.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(
        report.skipped[0].entry.item_definition_id,
        ItemId::new("retired_relic")
    );
    assert_eq!(report.skipped[0].reason, SkipReason::UnknownDefinition);
    assert_eq!(session.inventory().len(), 2);
}

#[test]
fn corrupted_save_leaves_inventory_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSaveRepository::new(dir.path()).unwrap();

    let mut session = session();
    spawn_at(&mut session, "coal", 0, 0);
    session.save(&repo, "main").unwrap();
    let before = session.snapshot();

    // Hand-edit the file: move the coal without fixing the checksum.
    let path = dir.path().join("main.json");
    let mut save: SaveFile = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    save.entries[0].x = 4;
    fs::write(&path, serde_json::to_string(&save).unwrap()).unwrap();

    spawn_at(&mut session, "torch", 8, 0);
    let err = session.load(&repo, "main").unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Repository(RepositoryError::CorruptedData(_))
    ));
    assert!(err.severity().is_recoverable());
    assert_eq!(err.error_code(), "REPOSITORY_CORRUPTED");
    assert_ne!(session.snapshot(), before);
    assert_eq!(session.inventory().len(), 2);

    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        session.load(&repo, "main"),
        Err(RuntimeError::Repository(RepositoryError::Json(_)))
    ));
    assert_eq!(session.inventory().len(), 2);
}

#[test]
fn missing_slot_and_delete() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSaveRepository::new(dir.path()).unwrap();
    let mut session = session();

    assert!(matches!(
        session.load(&repo, "nothing"),
        Err(RuntimeError::SaveNotFound(slot)) if slot == "nothing"
    ));

    session.save(&repo, "tmp").unwrap();
    repo.delete("tmp").unwrap();
    assert!(!repo.exists("tmp"));
    repo.delete("tmp").unwrap();
    assert!(matches!(
        repo.load("../outside"),
        Err(RepositoryError::InvalidSlot(_))
    ));
}
