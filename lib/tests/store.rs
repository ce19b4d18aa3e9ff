#![cfg(feature = "serde")]

use rlifeboard_lib::{
    Config, Error as LifeError, FileGameStore, FileTemplateStore, Format, GameBoard, GameStore,
    Template, TemplateStore,
};
use std::{error::Error, fs, path::PathBuf};

/// A fresh directory for one test.
fn scratch(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rlifeboard-{}-{}", std::process::id(), test));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn templates() -> Result<(), Box<dyn Error>> {
    let dir = scratch("templates");
    let store = FileTemplateStore::new(&dir, Format::Json);
    assert!(store.list()?.is_empty());

    let glider = Template::from_plaintext("glider", ".O.\n..O\nOOO")?;
    let block = Template::from_plaintext("block", "OO\nOO")?;
    store.save(&glider)?;
    store.save(&block)?;
    fs::write(dir.join("notes.txt"), "not a template")?;

    assert_eq!(store.list()?, vec!["block", "glider"]);
    assert_eq!(store.load("glider")?, glider);
    assert!(matches!(
        store.load("gun"),
        Err(LifeError::TemplateNotFound(name)) if name == "gun"
    ));

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn templates_in_other_formats() -> Result<(), Box<dyn Error>> {
    let dir = scratch("formats");
    let toad = Template::from_plaintext("toad", ".OOO\nOOO.")?;
    FileTemplateStore::new(&dir, Format::Toml).save(&toad)?;
    FileTemplateStore::new(&dir, Format::Yaml).save(&Template::from_plaintext("pair", "O.\n.O")?)?;
    assert!(dir.join("toad.toml").is_file());
    assert!(dir.join("pair.yaml").is_file());

    let store = FileTemplateStore::new(&dir, Format::Json);
    assert_eq!(store.list()?, vec!["pair", "toad"]);
    assert_eq!(store.load("toad")?, toad);

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn invalid_template_file() -> Result<(), Box<dyn Error>> {
    let dir = scratch("invalid");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("tiny.json"),
        r#"{"name":"tiny","height":1,"width":1,"cells":[["Alive"]]}"#,
    )?;
    let store = FileTemplateStore::new(&dir, Format::Json);
    assert!(matches!(
        store.load("tiny"),
        Err(LifeError::DimensionOutOfRange { .. })
    ));
    assert!(matches!(store.load("../tiny"), Err(LifeError::InvalidNameChar('/'))));

    fs::write(
        dir.join("block.json"),
        r#"{"name":"beehive","height":2,"width":2,"cells":[["Alive","Alive"],["Alive","Alive"]]}"#,
    )?;
    match store.load("block") {
        Err(LifeError::TemplateNameMismatch { expected, found }) => {
            assert_eq!((expected.as_str(), found.as_str()), ("block", "beehive"));
        }
        other => panic!("unexpected {:?}", other),
    }

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn game() -> Result<(), Box<dyn Error>> {
    let dir = scratch("game");
    let store = FileGameStore::new(dir.join("saves").join("game.json"));
    assert!(store.load()?.is_none());

    let mut board = GameBoard::new(8, 10)?;
    board.insert_template(&Template::from_plaintext("glider", ".O.\n..O\nOOO")?, 2, 1)?;
    store.save(&board)?;
    assert_eq!(store.load()?, Some(board.clone()));

    // A second save replaces the first.
    board.next_generation();
    store.save(&board)?;
    let loaded = store.load()?.ok_or("no saved game")?;
    assert_eq!(loaded.cells(), board.cells());

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn failed_save_keeps_the_previous_game() -> Result<(), Box<dyn Error>> {
    let dir = scratch("failed-save");
    let store = FileGameStore::new(dir.join("game.json"));
    let board = GameBoard::from_plaintext(".....\n.....\n.OOO.\n.....\n.....")?;
    store.save(&board)?;

    // The temporary file cannot be written over a directory.
    fs::create_dir_all(dir.join("game.tmp"))?;
    let mut next = board.clone();
    next.next_generation();
    assert_ne!(next, board);
    assert!(matches!(store.save(&next), Err(LifeError::Io(_))));
    assert_eq!(store.load()?, Some(board));

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn game_with_unknown_format() {
    let store = FileGameStore::new("game.dat");
    assert!(matches!(store.load(), Err(LifeError::UnknownFormat(_))));
}

#[test]
fn config_file() -> Result<(), Box<dyn Error>> {
    let dir = scratch("config");
    fs::create_dir_all(&dir)?;
    let path = dir.join("rlifeboard.yaml");
    fs::write(&path, "turn_interval_ms: 100\ntemplate_dir: patterns\n")?;

    let config = Config::from_path(&path)?;
    assert_eq!(config.turn_interval_ms, 100);
    assert_eq!(config.template_store().dir(), PathBuf::from("patterns"));
    assert_eq!(config.game_store().path(), PathBuf::from("game_state.json"));

    fs::remove_dir_all(&dir)?;
    Ok(())
}
