//! Change detection after generation

use crate::constants::l10n::SNAPSHOT_SKIP_DIRS;
use crate::git;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Detects files that differ from the committed state once generation ran
pub trait Comparator {
    /// Called before generation starts
    fn prepare(&mut self, _working_dir: &Path) -> crate::Result<()> {
        Ok(())
    }

    /// Files that differ, relative to the working directory or repository root
    fn changed_files(&self, working_dir: &Path) -> crate::Result<Vec<String>>;
}

impl<C: Comparator + ?Sized> Comparator for Box<C> {
    fn prepare(&mut self, working_dir: &Path) -> crate::Result<()> {
        (**self).prepare(working_dir)
    }

    fn changed_files(&self, working_dir: &Path) -> crate::Result<Vec<String>> {
        (**self).changed_files(working_dir)
    }
}

/// Which comparator a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CompareMode {
    /// `git status` against the checked-out commit
    #[default]
    Git,
    /// Byte comparison of the working directory before and after generation
    Snapshot,
}

impl CompareMode {
    pub fn comparator(self) -> Box<dyn Comparator> {
        match self {
            CompareMode::Git => Box::new(GitStatusComparator),
            CompareMode::Snapshot => Box::new(SnapshotComparator::default()),
        }
    }
}

/// Compares the working tree with the checked-out commit through git
///
/// Untracked files count, so newly generated locales are reported too.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitStatusComparator;

impl Comparator for GitStatusComparator {
    fn changed_files(&self, working_dir: &Path) -> crate::Result<Vec<String>> {
        git::changed_paths(working_dir)
    }
}

/// Compares file bytes before and after generation
///
/// Assumes the working directory matches the committed state when
/// [`Comparator::prepare`] runs, as it does on a fresh CI checkout.
#[derive(Debug, Clone, Default)]
pub struct SnapshotComparator {
    before: Option<BTreeMap<PathBuf, Vec<u8>>>,
}

impl SnapshotComparator {
    fn snapshot(root: &Path) -> crate::Result<BTreeMap<PathBuf, Vec<u8>>> {
        let mut files = BTreeMap::new();

        let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || !(entry.file_type().is_dir()
                    && SNAPSHOT_SKIP_DIRS
                        .iter()
                        .any(|skip| entry.file_name() == *skip))
        });

        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_path_buf();
            files.insert(relative, std::fs::read(entry.path())?);
        }

        Ok(files)
    }
}

impl Comparator for SnapshotComparator {
    fn prepare(&mut self, working_dir: &Path) -> crate::Result<()> {
        self.before = Some(Self::snapshot(working_dir)?);
        Ok(())
    }

    fn changed_files(&self, working_dir: &Path) -> crate::Result<Vec<String>> {
        let before = self.before.clone().unwrap_or_default();
        let after = Self::snapshot(working_dir)?;

        let mut changed: Vec<String> = after
            .iter()
            .filter(|(path, bytes)| before.get(*path) != Some(*bytes))
            .map(|(path, _)| path.to_string_lossy().into_owned())
            .collect();

        changed.extend(
            before
                .keys()
                .filter(|path| !after.contains_key(*path))
                .map(|path| path.to_string_lossy().into_owned()),
        );

        changed.sort();
        Ok(changed)
    }
}
