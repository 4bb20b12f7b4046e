//! The set of files linted together, and the one-hop import relation.

use super::decl::ThriftFile;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Index of a file within a [`Forest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(usize);

/// All files of a run.
///
/// Built once before checking starts and read-only afterwards.
#[derive(Debug, Default)]
pub struct Forest {
    files: Vec<ThriftFile>,
    include_dirs: Vec<PathBuf>,
}

impl Forest {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest that also searches `dirs` for includes.
    #[must_use]
    pub fn with_include_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: Vec::new(),
            include_dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the directories searched for includes.
    #[must_use]
    pub fn include_dirs(&self) -> &[PathBuf] {
        &self.include_dirs
    }

    /// Adds a file and returns its ID.
    ///
    /// A file whose name is already present replaces nothing; the existing
    /// ID is returned instead.
    pub fn insert(&mut self, file: ThriftFile) -> FileId {
        if let Some(existing) = self.find(&file.filename) {
            debug!("Skipping duplicate file {}", file.filename.display());
            return existing;
        }
        self.files.push(file);
        FileId(self.files.len() - 1)
    }

    /// Returns the number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if the forest holds no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Looks up a file by filename.
    ///
    /// Both sides are compared after removing `.` and resolving `..`
    /// components lexically.
    #[must_use]
    pub fn find(&self, filename: &Path) -> Option<FileId> {
        let wanted = normalize(filename);
        self.files
            .iter()
            .position(|f| normalize(&f.filename) == wanted)
            .map(FileId)
    }

    /// Returns a handle to the given file.
    #[must_use]
    pub fn get(&self, id: FileId) -> Option<FileRef<'_>> {
        self.files.get(id.0).map(|file| FileRef {
            forest: self,
            id,
            file,
        })
    }

    /// Iterates over all files in insertion order.
    pub fn files(&self) -> impl Iterator<Item = FileRef<'_>> {
        self.files.iter().enumerate().map(move |(i, file)| FileRef {
            forest: self,
            id: FileId(i),
            file,
        })
    }

    /// Resolves every file's `includes` into its import map.
    ///
    /// A relative include path is tried against each include directory in
    /// order, then against the including file's directory, then as written.
    /// Absolute paths are only tried as written. Unmatched includes are left
    /// out of the map.
    pub fn link_imports(&mut self) {
        let links: Vec<Vec<(String, FileId)>> = self
            .files
            .iter()
            .map(|file| {
                file.includes
                    .iter()
                    .filter_map(|(alias, path)| {
                        let found = self.locate_include(&file.filename, path);
                        if found.is_none() {
                            debug!(
                                "Unresolved include {alias} = {path} in {}",
                                file.filename.display()
                            );
                        }
                        found.map(|id| (alias.clone(), id))
                    })
                    .collect()
            })
            .collect();

        for (file, imports) in self.files.iter_mut().zip(links) {
            file.imports = imports.into_iter().collect();
        }
    }

    fn locate_include(&self, including: &Path, include: &str) -> Option<FileId> {
        let as_written = Path::new(include);
        if as_written.is_absolute() {
            return self.find(as_written);
        }
        self.include_dirs
            .iter()
            .map(|dir| dir.join(as_written))
            .chain(including.parent().map(|dir| dir.join(as_written)))
            .chain(std::iter::once(as_written.to_path_buf()))
            .find_map(|candidate| self.find(&candidate))
    }
}

/// Removes `.` components and folds `..` into the preceding component.
///
/// Purely lexical: symlinks are not consulted. A leading `..` that has
/// nothing to fold into is kept.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last().copied() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}

impl FromIterator<ThriftFile> for Forest {
    fn from_iter<I: IntoIterator<Item = ThriftFile>>(iter: I) -> Self {
        let mut forest = Self::new();
        for file in iter {
            forest.insert(file);
        }
        forest.link_imports();
        forest
    }
}

/// A handle to one file of a [`Forest`].
///
/// Carries the forest so that imports can be followed.
#[derive(Debug, Clone, Copy)]
pub struct FileRef<'a> {
    forest: &'a Forest,
    id: FileId,
    file: &'a ThriftFile,
}

impl<'a> FileRef<'a> {
    /// Returns the ID of this file.
    #[must_use]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Returns the underlying file with the forest's lifetime.
    #[must_use]
    pub fn file(&self) -> &'a ThriftFile {
        self.file
    }

    /// Follows one import alias.
    #[must_use]
    pub fn import(&self, alias: &str) -> Option<FileRef<'a>> {
        let id = *self.file.imports.get(alias)?;
        self.forest.get(id)
    }
}

impl std::ops::Deref for FileRef<'_> {
    type Target = ThriftFile;

    fn deref(&self) -> &Self::Target {
        self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with_include(name: &str, alias: &str, path: &str) -> ThriftFile {
        let mut file = ThriftFile::new(name);
        file.includes.insert(alias.to_string(), path.to_string());
        file
    }

    #[test]
    fn links_include_as_written() {
        let forest: Forest = vec![
            file_with_include("main.thrift", "shared", "shared.thrift"),
            ThriftFile::new("shared.thrift"),
        ]
        .into_iter()
        .collect();

        let main = forest.files().next().unwrap();
        let shared = main.import("shared").unwrap();
        assert_eq!(shared.filename, PathBuf::from("shared.thrift"));
    }

    #[test]
    fn links_include_relative_to_including_file() {
        let forest: Forest = vec![
            file_with_include("idl/main.thrift", "common", "common.thrift"),
            ThriftFile::new("idl/common.thrift"),
        ]
        .into_iter()
        .collect();

        let main = forest.files().next().unwrap();
        assert!(main.import("common").is_some());
    }

    #[test]
    fn links_include_through_parent_directory() {
        let forest: Forest = vec![
            file_with_include("idl/svc/main.thrift", "common", "../common/shared.thrift"),
            ThriftFile::new("idl/common/shared.thrift"),
        ]
        .into_iter()
        .collect();

        let main = forest.files().next().unwrap();
        let common = main.import("common").unwrap();
        assert_eq!(common.filename, PathBuf::from("idl/common/shared.thrift"));
    }

    #[test]
    fn include_dirs_are_searched_before_the_including_directory() {
        let mut forest = Forest::with_include_dirs(["idl/shared"]);
        let main = forest.insert(file_with_include(
            "idl/svc/main.thrift",
            "base",
            "base.thrift",
        ));
        forest.insert(ThriftFile::new("idl/svc/base.thrift"));
        forest.insert(ThriftFile::new("./idl/shared/base.thrift"));
        forest.link_imports();

        let base = forest.get(main).unwrap().import("base").unwrap();
        assert_eq!(base.filename, PathBuf::from("./idl/shared/base.thrift"));
    }

    #[test]
    fn normalize_is_lexical() {
        assert_eq!(normalize(Path::new("a/./b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize(Path::new("../x/y/..")), PathBuf::from("../x"));
        assert_eq!(normalize(Path::new("/a/../../b")), PathBuf::from("/b"));
    }

    #[test]
    fn unresolved_include_is_not_linked() {
        let forest: Forest = vec![file_with_include("main.thrift", "gone", "gone.thrift")]
            .into_iter()
            .collect();

        let main = forest.files().next().unwrap();
        assert!(main.import("gone").is_none());
        assert_eq!(main.import_aliases().count(), 0);
    }

    #[test]
    fn duplicate_filenames_keep_first() {
        let mut forest = Forest::new();
        let a = forest.insert(ThriftFile::new("a.thrift"));
        let b = forest.insert(ThriftFile::new("a.thrift"));
        assert_eq!(a, b);
        assert_eq!(forest.len(), 1);
    }
}
