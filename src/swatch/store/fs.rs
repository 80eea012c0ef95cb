use super::{Collection, DataStore};
use crate::codec::{self, SkippedRow};
use crate::error::{Result, SwatchError};
use crate::model::{Record, RecordId};
use parking_lot::Mutex;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// File-backed store. Owns one data file exclusively for its lifetime.
///
/// Running two processes against the same file is unsupported: there is no
/// cross-process lock and the last writer wins.
pub struct FileStore {
    path: PathBuf,
    state: Mutex<Collection>,
    skipped: Vec<SkippedRow>,
}

impl FileStore {
    /// Opens the store at `path`, creating the file (header only) and its
    /// parent directories if needed. Malformed rows are skipped and kept in
    /// [`FileStore::skipped_rows`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if path.file_name().is_none() {
            return Err(SwatchError::Store(format!(
                "Invalid data file path: {}",
                path.display()
            )));
        }

        if let Some(parent) = parent_dir(&path) {
            ensure_dir(parent)?;
        }

        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(SwatchError::Io(e)),
        };

        if content.is_empty() {
            write_atomic(&path, &codec::encode(std::iter::empty()))?;
        }

        let (collection, skipped) = Collection::from_rows(codec::decode_bytes(&content));
        for row in &skipped {
            warn!(
                path = %path.display(),
                line = row.line,
                reason = %row.reason,
                "skipping malformed row"
            );
        }
        info!(
            path = %path.display(),
            records = collection.len(),
            skipped = skipped.len(),
            "opened color store"
        );

        Ok(Self {
            path,
            state: Mutex::new(collection),
            skipped,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows dropped while loading the file.
    pub fn skipped_rows(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// Applies `op` to a copy of the collection, persists the copy and only
    /// then makes it current. The lock is held throughout, so concurrent
    /// mutations are serialized and a failed write leaves memory untouched.
    fn mutate<T>(&self, op: impl FnOnce(&mut Collection) -> Result<T>) -> Result<T> {
        let mut state = self.state.lock();
        let mut next = state.clone();
        let out = op(&mut next)?;
        self.persist(&next)?;
        *state = next;
        Ok(out)
    }

    fn persist(&self, collection: &Collection) -> Result<()> {
        debug!(
            path = %self.path.display(),
            records = collection.len(),
            "rewriting data file"
        );
        write_atomic(&self.path, &codec::encode(collection.records()))
    }
}

impl DataStore for FileStore {
    fn list(&self) -> Result<Vec<Record>> {
        Ok(self.state.lock().records().to_vec())
    }

    fn add(&self, hex: &str) -> Result<Record> {
        self.mutate(|c| c.add(hex))
    }

    fn find(&self, id: RecordId) -> Result<Record> {
        self.state.lock().find(id)
    }

    fn update(&self, id: RecordId, hex: &str) -> Result<Record> {
        self.mutate(|c| c.update(id, hex))
    }

    fn delete(&self, id: RecordId) -> Result<Record> {
        self.mutate(|c| c.delete(id))
    }

    fn clear(&self) -> Result<()> {
        self.mutate(|c| {
            c.clear();
            Ok(())
        })
    }
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(SwatchError::Io)?;
    }
    Ok(())
}

/// Writes `content` to a temp sibling of `path` and renames it into place,
/// so readers see either the old file or the new one.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = parent_dir(path).unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_path = dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));

    if let Err(e) = write_and_rename(&tmp_path, path, content) {
        let _ = fs::remove_file(&tmp_path);
        return Err(SwatchError::Io(e));
    }
    Ok(())
}

fn write_and_rename(tmp_path: &Path, target: &Path, content: &str) -> io::Result<()> {
    let mut file = File::create(tmp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    fs::rename(tmp_path, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("colors.csv");
        (dir, path)
    }

    #[test]
    fn creates_header_only_file() {
        let (_dir, path) = setup();
        let store = FileStore::open(&path).unwrap();
        assert!(store.list().unwrap().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "id,hex\n");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let (dir, _) = setup();
        let path = dir.path().join("data").join("nested").join("colors.csv");
        FileStore::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn empty_existing_file_gets_a_header() {
        let (_dir, path) = setup();
        fs::write(&path, "").unwrap();
        FileStore::open(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "id,hex\n");
    }

    #[test]
    fn every_mutation_rewrites_the_file() {
        let (_dir, path) = setup();
        let store = FileStore::open(&path).unwrap();

        let red = store.add("#ff0000").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "id,hex\n1,\"#ff0000\"\n");

        store.update(red.id, "#00ff00").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "id,hex\n1,\"#00ff00\"\n");

        store.delete(red.id).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "id,hex\n");
    }

    #[test]
    fn clear_leaves_only_the_header() {
        let (_dir, path) = setup();
        let store = FileStore::open(&path).unwrap();
        store.add("#fff").unwrap();
        store.add("#000").unwrap();
        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "id,hex\n");
    }

    #[test]
    fn not_found_does_not_touch_the_file() {
        let (_dir, path) = setup();
        let store = FileStore::open(&path).unwrap();
        store.add("#fff").unwrap();
        let before = fs::read_to_string(&path).unwrap();

        assert!(store.update(RecordId(42), "#000").unwrap_err().is_not_found());
        assert!(store.delete(RecordId(42)).unwrap_err().is_not_found());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn failed_write_keeps_memory_unchanged() {
        let (dir, _) = setup();
        let data_dir = dir.path().join("data");
        let store = FileStore::open(data_dir.join("colors.csv")).unwrap();
        let kept = store.add("#fff").unwrap();

        fs::remove_dir_all(&data_dir).unwrap();

        assert!(matches!(store.add("#000"), Err(SwatchError::Io(_))));
        assert!(matches!(
            store.update(kept.id, "#000"),
            Err(SwatchError::Io(_))
        ));
        assert_eq!(store.list().unwrap(), vec![kept.clone()]);
        assert_eq!(store.find(kept.id).unwrap().hex, "#fff");
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let (dir, path) = setup();
        let store = FileStore::open(&path).unwrap();
        store.add("#fff").unwrap();
        store.add("#000").unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().into_owned();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn rejects_a_path_without_file_name() {
        assert!(matches!(
            FileStore::open(".."),
            Err(SwatchError::Store(_))
        ));
    }
}
