//! Storage of templates and games.
//!
//! The engine itself never touches storage; these are the contracts
//! a driver uses to keep templates and the saved game between runs,
//! and file-backed implementations of them.

use crate::{
    board::GameBoard,
    error::Error,
    format::Format,
    save::{BoardSnapshot, TemplateRecord},
    template::Template,
};
use log::{info, warn};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// A store of templates, keyed by name.
pub trait TemplateStore {
    /// Names of all available templates. The order is not significant.
    fn list(&self) -> Result<Vec<String>, Error>;

    /// Loads a template by name.
    ///
    /// Fails with [`Error::TemplateNotFound`] if there is no such template.
    fn load(&self, name: &str) -> Result<Template, Error>;

    /// Saves a template under its name, replacing any template with the same name.
    fn save(&self, template: &Template) -> Result<(), Error>;
}

/// A store holding at most one saved game.
pub trait GameStore {
    /// Loads the saved game.
    ///
    /// Returns `None` if no game has been saved; this is not an error.
    fn load(&self) -> Result<Option<GameBoard>, Error>;

    /// Saves the game, replacing the previously saved one.
    fn save(&self, board: &GameBoard) -> Result<(), Error>;
}

/// Keeps each template in its own file, `<name>.<ext>`, in one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTemplateStore {
    dir: PathBuf,
    format: Format,
}

impl FileTemplateStore {
    /// Creates a store over `dir`, writing new templates in `format`.
    ///
    /// The directory is created on the first save.
    pub fn new<P: Into<PathBuf>>(dir: P, format: Format) -> Self {
        FileTemplateStore {
            dir: dir.into(),
            format,
        }
    }

    /// The template directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, name: &str, format: Format) -> PathBuf {
        self.dir.join(format!("{}.{}", name, format.extension()))
    }

    /// Existing file for `name`, trying the preferred format first.
    fn find(&self, name: &str) -> Option<(PathBuf, Format)> {
        let others = Format::ALL.into_iter().filter(|&f| f != self.format);
        std::iter::once(self.format)
            .chain(others)
            .flat_map(|format| {
                let alias = (format == Format::Yaml).then(|| self.dir.join(format!("{}.yml", name)));
                std::iter::once(self.path(name, format))
                    .chain(alias)
                    .map(move |path| (path, format))
            })
            .find(|(path, _)| path.is_file())
    }
}

impl TemplateStore for FileTemplateStore {
    fn list(&self) -> Result<Vec<String>, Error> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || Format::from_path(&path).is_err() {
                continue;
            }
            match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(name) if Template::validate_name(name).is_ok() => names.push(name.to_owned()),
                _ => warn!("Skipping template file {}", path.display()),
            }
        }
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn load(&self, name: &str) -> Result<Template, Error> {
        Template::validate_name(name)?;
        let (path, format) = self
            .find(name)
            .ok_or_else(|| Error::TemplateNotFound(name.to_owned()))?;
        let record: TemplateRecord = format.decode(&fs::read_to_string(&path)?)?;
        if record.name != name {
            return Err(Error::TemplateNameMismatch {
                expected: name.to_owned(),
                found: record.name,
            });
        }
        let template = record.template()?;
        info!("Loaded template {:?} from {}", template.name(), path.display());
        Ok(template)
    }

    fn save(&self, template: &Template) -> Result<(), Error> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(template.name(), self.format);
        fs::write(&path, self.format.encode(&template.record())?)?;
        info!("Saved template {:?} to {}", template.name(), path.display());
        Ok(())
    }
}

/// Keeps the saved game in a single file.
///
/// The format is chosen by the extension of the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileGameStore {
    path: PathBuf,
}

impl FileGameStore {
    /// Creates a store over the file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileGameStore { path: path.into() }
    }

    /// The saved game file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GameStore for FileGameStore {
    fn load(&self) -> Result<Option<GameBoard>, Error> {
        let format = Format::from_path(&self.path)?;
        let s = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No saved game at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let snapshot: BoardSnapshot = format.decode(&s)?;
        let board = snapshot.board()?;
        info!(
            "Loaded a {}x{} game from {}",
            board.width(),
            board.height(),
            self.path.display()
        );
        Ok(Some(board))
    }

    fn save(&self, board: &GameBoard) -> Result<(), Error> {
        let format = Format::from_path(&self.path)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        // A failed write must leave the previous save intact.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, format.encode(&board.snapshot())?)?;
        fs::rename(&tmp, &self.path)?;
        info!("Saved the game to {}", self.path.display());
        Ok(())
    }
}
