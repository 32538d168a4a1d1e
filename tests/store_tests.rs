//! File-backed persistence across process restarts.

use pinhash::digest::{Digester, Sha256Digester};
use pinhash::game::{Game, GameError, Outcome};
use pinhash::session::SessionManager;
use pinhash::store::{FileStore, KeyValueStore, StoreError, ATTEMPTS_KEY, PIN_KEY};
use pinhash::StatusReport;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_digest_is_stable_across_restarts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    let first = {
        let mut manager = SessionManager::new(FileStore::open(&path).unwrap(), Sha256Digester);
        manager.initialize().unwrap()
    };
    let second = {
        let mut manager = SessionManager::new(FileStore::open(&path).unwrap(), Sha256Digester);
        manager.initialize().unwrap()
    };

    assert_eq!(first, second);
}

#[test]
fn test_attempts_survive_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let mut game = Game::new(SessionManager::new(
            FileStore::open(&path).unwrap(),
            Sha256Digester,
        ));
        game.publish_digest().unwrap();
        let pin = game.manager().session().unwrap().secret_pin().to_string();
        let wrong = if pin == "100" { "101" } else { "100" };
        assert_eq!(game.submit_guess(wrong).unwrap(), Outcome::Incorrect);
        assert_eq!(game.submit_guess(wrong).unwrap(), Outcome::Incorrect);
    }

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get(ATTEMPTS_KEY).unwrap().as_deref(), Some("2"));

    let mut game = Game::new(SessionManager::new(store, Sha256Digester));
    game.publish_digest().unwrap();
    assert_eq!(game.attempts(), 2);
}

#[test]
fn test_reset_removes_store_file_then_rewrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut manager = SessionManager::new(FileStore::open(&path).unwrap(), Sha256Digester);
    manager.initialize().unwrap();
    manager.record_attempt().unwrap();

    manager.reset().unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"attempts\": \"0\""));
}

#[test]
fn test_hand_edited_pin_is_discarded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let mut manager = SessionManager::new(FileStore::open(&path).unwrap(), Sha256Digester);
        manager.initialize().unwrap();
    }

    // Point the PIN somewhere else without updating the digest
    let mut store = FileStore::open(&path).unwrap();
    let pin = store.get(PIN_KEY).unwrap().unwrap();
    let edited = if pin == "999" { "998" } else { "999" };
    store.set(PIN_KEY, edited).unwrap();

    let mut manager = SessionManager::new(FileStore::open(&path).unwrap(), Sha256Digester);
    let digest = manager.initialize().unwrap();
    let session = manager.session().unwrap();
    assert_eq!(Sha256Digester.digest(session.secret_pin()), digest);
    assert_eq!(session.attempt_count(), 0);
}

#[test]
fn test_corrupted_store_is_reported_and_wipeable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
    assert!(err.to_string().contains("pinhash reset"));

    FileStore::wipe(&path).unwrap();
    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get(PIN_KEY).unwrap(), None);
}

#[test]
fn test_status_report_reads_without_creating() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    let store = FileStore::open(&path).unwrap();
    let report = StatusReport::collect(&store, &Sha256Digester, Some(path.clone())).unwrap();
    assert_eq!(report.digest, None);
    assert!(!path.exists());

    let mut manager = SessionManager::new(store, Sha256Digester);
    let digest = manager.initialize().unwrap();

    let store = FileStore::open(&path).unwrap();
    let report = StatusReport::collect(&store, &Sha256Digester, Some(path)).unwrap();
    assert_eq!(report.digest, Some(digest));
    assert_eq!(report.attempts, 0);
}

#[test]
fn test_failed_attempt_write_leaves_game_and_store_in_step() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut game = Game::new(SessionManager::new(
        FileStore::open(&path).unwrap(),
        Sha256Digester,
    ));
    game.publish_digest().unwrap();
    let pin = game.manager().session().unwrap().secret_pin().to_string();
    let wrong = if pin == "100" { "101" } else { "100" };

    let blocker = path.with_extension("json.tmp");
    fs::create_dir(&blocker).unwrap();
    assert!(matches!(game.submit_guess(wrong), Err(GameError::Store(_))));
    assert_eq!(game.attempts(), 0);
    assert_eq!(
        game.manager().store().get(ATTEMPTS_KEY).unwrap().as_deref(),
        Some("0")
    );

    fs::remove_dir(&blocker).unwrap();
    assert_eq!(game.submit_guess(wrong).unwrap(), Outcome::Incorrect);
    assert_eq!(game.attempts(), 1);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(PIN_KEY).unwrap(), Some(pin));
    assert_eq!(reopened.get(ATTEMPTS_KEY).unwrap().as_deref(), Some("1"));
}
