use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use shared::models::{seed_cats, Cat};
use shared::validation::validate_cats;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read cat data from {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to seed cat data at {path}: {source}")]
    Seed { path: PathBuf, source: io::Error },
    #[error("seeded cat data at {path} could not be read back: {source}")]
    SeedUnreadable { path: PathBuf, source: io::Error },
    #[error("cat data at {path} is not a valid JSON list of cats: {source}")]
    Corrupt { path: PathBuf, source: serde_json::Error },
    #[error("cat data at {path} is invalid: {reason}")]
    Invalid { path: PathBuf, reason: String },
    #[error("no write permission for cat data at {path}")]
    NotWritable { path: PathBuf },
    #[error("failed to open cat data at {path} for writing: {source}")]
    Probe { path: PathBuf, source: io::Error },
    #[error("failed to encode cat data: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write cat data to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("cat store lock poisoned")]
    LockFailed,
}

/// The listing plus the JSON file that backs it.
///
/// One process owns the file. Every mutation happens while holding `cats`,
/// and the caller is expected to [`save`](CatStore::save) before releasing it.
#[derive(Debug)]
pub struct CatStore {
    path: PathBuf,
    cats: Mutex<Vec<Cat>>,
    sort_by_votes: bool,
}

pub type CatGuard<'a> = MutexGuard<'a, Vec<Cat>>;

impl CatStore {
    /// Loads the listing at `path`, seeding it first when the file is missing,
    /// and checks the file can be written before any vote arrives.
    pub fn open(path: impl AsRef<Path>, sort_by_votes: bool) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let cats = match fs::read(&path) {
            Ok(bytes) => decode(&path, &bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No cat data at {}, seeding defaults", path.display());
                seed(&path)?;
                let bytes = fs::read(&path).map_err(|source| StoreError::SeedUnreadable {
                    path: path.clone(),
                    source,
                })?;
                decode(&path, &bytes)?
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        ensure_writable(&path)?;
        info!("Loaded {} cats from {}", cats.len(), path.display());

        Ok(Self {
            path,
            cats: Mutex::new(cats),
            sort_by_votes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sort_by_votes(&self) -> bool {
        self.sort_by_votes
    }

    pub fn lock(&self) -> Result<CatGuard<'_>, StoreError> {
        self.cats.lock().map_err(|_| StoreError::LockFailed)
    }

    pub fn snapshot(&self) -> Result<Vec<Cat>, StoreError> {
        self.lock().map(|cats| cats.clone())
    }

    /// Replaces the whole file with `cats`.
    ///
    /// The listing goes to a sibling `.tmp` file which is synced and then
    /// renamed over the target, so a crash mid-write leaves the previous
    /// content in place.
    pub fn save(&self, cats: &[Cat]) -> Result<(), StoreError> {
        let encoded = encode(cats)?;
        let temp_path = self.temp_path();

        let written = write_synced(&temp_path, &encoded, false)
            .and_then(|_| fs::rename(&temp_path, &self.path));

        if let Err(source) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }

        debug!("Saved {} cats to {}", cats.len(), self.path.display());
        Ok(())
    }

    pub fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

fn decode(path: &Path, bytes: &[u8]) -> Result<Vec<Cat>, StoreError> {
    let cats: Vec<Cat> = serde_json::from_slice(bytes).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;
    validate_cats(&cats).map_err(|e| StoreError::Invalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(cats)
}

fn encode(cats: &[Cat]) -> Result<Vec<u8>, StoreError> {
    Ok(serde_json::to_vec_pretty(cats)?)
}

fn seed(path: &Path) -> Result<(), StoreError> {
    let seed_error = |source| StoreError::Seed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(seed_error)?;
    }

    let encoded = encode(&seed_cats())?;
    write_synced(path, &encoded, true).map_err(seed_error)
}

/// `create_new` refuses to touch a file that already exists.
fn write_synced(path: &Path, bytes: &[u8], create_new: bool) -> io::Result<()> {
    let file = if create_new {
        OpenOptions::new().write(true).create_new(true).open(path)?
    } else {
        File::create(path)?
    };

    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

fn ensure_writable(path: &Path) -> Result<(), StoreError> {
    match OpenOptions::new().write(true).open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(StoreError::NotWritable {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(StoreError::Probe {
            path: path.to_path_buf(),
            source,
        }),
    }
}
