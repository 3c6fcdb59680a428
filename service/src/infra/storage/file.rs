//! Directory-backed [`Storage`].

use std::{fs, io, path::PathBuf};

use common::operations::{By, Select, Update};
use tracerr::Traced;
use tracing as log;

use crate::infra::{
    storage::{self, Entry},
    Storage,
};

/// [`Storage`] keeping every value in a separate file of a directory.
///
/// The directory is created on the first write.
#[derive(Clone, Debug)]
pub struct File {
    /// Directory to keep the files in.
    dir: PathBuf,
}

impl File {
    /// Creates a new [`File`] storage in the provided `dir`ectory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns path of the file holding the value of the provided `key`.
    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage<Select<By<Option<String>, &'static str>>> for File {
    type Ok = Option<String>;
    type Err = Traced<storage::Error>;

    fn dispatch(
        &self,
        Select(by): Select<By<Option<String>, &'static str>>,
    ) -> Result<Self::Ok, Self::Err> {
        let path = self.path(by.into_inner());
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(tracerr::new!(storage::Error::from(e))),
        }
    }
}

impl Storage<Update<Entry>> for File {
    type Ok = ();
    type Err = Traced<storage::Error>;

    fn dispatch(
        &self,
        Update(entry): Update<Entry>,
    ) -> Result<Self::Ok, Self::Err> {
        fs::create_dir_all(&self.dir)
            .map_err(tracerr::from_and_wrap!(=> storage::Error))?;

        // Avoid exposing a partially written value.
        let path = self.path(entry.key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, entry.value)
            .map_err(tracerr::from_and_wrap!(=> storage::Error))?;
        fs::rename(&tmp, &path)
            .map_err(tracerr::from_and_wrap!(=> storage::Error))?;

        log::trace!("`{}` written to `{}`", entry.key, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use std::{env, fs, path::PathBuf, process};

    use common::operations::{By, Select, Update};

    use crate::infra::{storage::Entry, Storage as _};

    use super::File;

    /// Returns a fresh directory unique to the provided test `name`.
    fn scratch(name: &str) -> PathBuf {
        let dir = env::temp_dir()
            .join(format!("user-directory-{}-{name}", process::id()));
        _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn reads_absent_key_as_none() {
        let storage = File::new(scratch("absent"));

        assert_eq!(storage.dispatch(Select(By::new("theme"))).unwrap(), None);
    }

    #[test]
    fn persists_values_across_instances() {
        let dir = scratch("persist");

        File::new(&dir)
            .dispatch(Update(Entry::new("userFavorites", "[1,2]")))
            .unwrap();
        File::new(&dir)
            .dispatch(Update(Entry::new("userFavorites", "[2]")))
            .unwrap();

        let value = File::new(&dir)
            .dispatch(Select(By::new("userFavorites")))
            .unwrap();
        assert_eq!(value.as_deref(), Some("[2]"));
        assert!(!dir.join("userFavorites.tmp").exists());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn fails_when_directory_is_a_file() {
        let dir = scratch("blocked");
        fs::write(&dir, "").unwrap();

        let storage = File::new(&dir);
        assert!(storage.dispatch(Update(Entry::new("theme", "dark"))).is_err());

        fs::remove_file(dir).unwrap();
    }
}
