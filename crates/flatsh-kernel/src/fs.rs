//! Flat virtual filesystem.
//!
//! The filesystem is a single mapping from absolute path to [`Node`], not a
//! tree of linked objects. Directory membership is inferred by string-prefix
//! matching on the keys, so an entry can exist without its intermediate
//! directories existing as explicit entries. That flatness is deliberate and
//! is what the wire format persists.
//!
//! Invariant: the root `/` always exists and is a directory. Mutating
//! operations re-seed it.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path;

/// One filesystem entry.
///
/// Wire format: `{"type":"dir"}` or `{"type":"file","contents":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Dir,
    File {
        #[serde(default)]
        contents: String,
    },
}

impl Node {
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir)
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }
}

/// Node kind, for `stat` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Dir,
    File,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Dir => write!(f, "dir"),
            NodeKind::File => write!(f, "file"),
        }
    }
}

/// Metadata returned by [`FlatFs::stat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStat {
    pub path: String,
    pub kind: NodeKind,
    /// `contents` length for files, 0 for directories.
    pub size: usize,
}

/// Filesystem operation errors.
///
/// Every variant is recovered locally by the calling builtin and rendered as
/// a single response line; none abort the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    #[error("no such file or directory: {0}")]
    NotFound(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("directory not empty: {0}")]
    NotEmpty(String),
    #[error("source and destination are the same")]
    SameSource,
    #[error("Filesystem not initialized")]
    NotInitialized,
}

/// The flat path→node mapping, plus a revision counter.
///
/// The revision bumps on every mutating call; the session compares revisions
/// around a step to decide whether to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatFs {
    entries: HashMap<String, Node>,
    rev: u64,
}

impl Default for FlatFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatFs {
    /// Create a filesystem containing only the root directory.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert("/".to_string(), Node::Dir);
        Self { entries, rev: 0 }
    }

    /// Current revision. Bumped by every mutating operation.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn get(&self, path: &str) -> Option<&Node> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Immediate child names of `dir`, inferred by prefix matching.
    ///
    /// Every key strictly under `dir` contributes its first remaining
    /// segment; names are deduplicated and sorted. `dir` itself does not
    /// need to exist as an entry (flat model).
    pub fn list(&self, dir: &str) -> Vec<String> {
        let prefix = path::with_trailing_slash(dir);
        let names: BTreeSet<&str> = self
            .entries
            .keys()
            .filter(|k| k.starts_with(&prefix) && k.as_str() != dir)
            .filter_map(|k| k[prefix.len()..].split('/').next())
            .filter(|seg| !seg.is_empty())
            .collect();
        names.into_iter().map(String::from).collect()
    }

    /// Insert a directory. Fails if anything already exists at `path`.
    pub fn make_dir(&mut self, path: &str) -> Result<(), FsError> {
        if self.entries.contains_key(path) {
            return Err(FsError::AlreadyExists(path.to_string()));
        }
        self.entries.insert(path.to_string(), Node::Dir);
        self.touch_rev();
        Ok(())
    }

    /// Insert or overwrite an empty file. Idempotent.
    pub fn touch_file(&mut self, path: &str) {
        self.write_file(path, "");
    }

    /// Insert or overwrite a file unconditionally (output redirection).
    pub fn write_file(&mut self, path: &str, contents: &str) {
        self.entries.insert(
            path.to_string(),
            Node::File {
                contents: contents.to_string(),
            },
        );
        self.touch_rev();
    }

    /// Read a file's contents. Fails if absent or not a file.
    pub fn read_file(&self, path: &str) -> Result<&str, FsError> {
        match self.entries.get(path) {
            Some(Node::File { contents }) => Ok(contents),
            _ => Err(FsError::NotFound(path.to_string())),
        }
    }

    /// Verify `path` exists and is a directory (the `cd` check).
    pub fn require_dir(&self, path: &str) -> Result<(), FsError> {
        match self.entries.get(path) {
            Some(Node::Dir) => Ok(()),
            _ => Err(FsError::NotFound(path.to_string())),
        }
    }

    /// Remove an entry.
    ///
    /// A directory with children (prefix match) requires `recursive`, which
    /// deletes the whole subtree. The root entry itself is never removed.
    pub fn remove(&mut self, target: &str, recursive: bool) -> Result<(), FsError> {
        let node = self
            .entries
            .get(target)
            .ok_or_else(|| FsError::NotFound(target.to_string()))?;

        if node.is_dir() {
            let prefix = subtree_prefix(target);
            let has_children = self
                .entries
                .keys()
                .any(|k| k != target && k.starts_with(&prefix));
            if has_children && !recursive {
                return Err(FsError::NotEmpty(target.to_string()));
            }
            if recursive {
                let target = target.to_string();
                self.entries
                    .retain(|k, _| *k == target || !k.starts_with(&prefix));
            }
        }

        if target != "/" {
            self.entries.remove(target);
        }
        self.ensure_root();
        self.touch_rev();
        Ok(())
    }

    /// Move `src` (and its subtree) to `dst`.
    ///
    /// If `dst` exists and is a directory, the effective destination is
    /// `dst/basename(src)`; otherwise `dst` is used literally. Fails with
    /// [`FsError::SameSource`] when the effective destination equals `src`.
    pub fn rename(&mut self, src: &str, dst: &str) -> Result<(), FsError> {
        if !self.entries.contains_key(src) {
            return Err(FsError::NotFound(src.to_string()));
        }
        let dest = self.resolve_dest(src, dst);
        if dest == src {
            return Err(FsError::SameSource);
        }

        let prefix = subtree_prefix(src);
        let keys: Vec<String> = self
            .entries
            .keys()
            .filter(|k| *k == src || k.starts_with(&prefix))
            .cloned()
            .collect();
        for key in keys {
            if let Some(node) = self.entries.remove(&key) {
                let new_key = format!("{dest}{}", &key[src.len()..]);
                self.entries.insert(new_key, node);
            }
        }

        self.ensure_root();
        self.touch_rev();
        Ok(())
    }

    /// Deep-copy `src` (and its subtree) to `dst`, leaving `src` intact.
    ///
    /// Same destination-resolution rule as [`FlatFs::rename`].
    pub fn copy(&mut self, src: &str, dst: &str) -> Result<(), FsError> {
        if !self.entries.contains_key(src) {
            return Err(FsError::NotFound(src.to_string()));
        }
        let dest = self.resolve_dest(src, dst);

        let prefix = subtree_prefix(src);
        let copied: Vec<(String, Node)> = self
            .entries
            .iter()
            .filter(|(k, _)| *k == src || k.starts_with(&prefix))
            .map(|(k, v)| (format!("{dest}{}", &k[src.len()..]), v.clone()))
            .collect();
        for (key, node) in copied {
            self.entries.insert(key, node);
        }

        self.ensure_root();
        self.touch_rev();
        Ok(())
    }

    /// Metadata for an entry.
    pub fn stat(&self, target: &str) -> Result<NodeStat, FsError> {
        match self.entries.get(target) {
            Some(Node::Dir) => Ok(NodeStat {
                path: target.to_string(),
                kind: NodeKind::Dir,
                size: 0,
            }),
            Some(Node::File { contents }) => Ok(NodeStat {
                path: target.to_string(),
                kind: NodeKind::File,
                size: contents.len(),
            }),
            None => Err(FsError::NotFound(target.to_string())),
        }
    }

    /// Serialize the full mapping to the persisted wire format.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }

    /// Rebuild a filesystem from the persisted wire format.
    ///
    /// The root entry is re-seeded if the blob lacks one.
    pub fn from_json(blob: &str) -> serde_json::Result<Self> {
        let entries: HashMap<String, Node> = serde_json::from_str(blob)?;
        let mut fs = Self { entries, rev: 0 };
        fs.ensure_root();
        Ok(fs)
    }

    fn resolve_dest(&self, src: &str, dst: &str) -> String {
        match self.entries.get(dst) {
            Some(Node::Dir) => path::join(dst, path::basename(src)),
            _ => dst.to_string(),
        }
    }

    // Root survives every mutation.
    fn ensure_root(&mut self) {
        self.entries
            .entry("/".to_string())
            .or_insert(Node::Dir);
    }

    fn touch_rev(&mut self) {
        self.rev += 1;
    }
}

/// The prefix shared by every key strictly under `path`.
fn subtree_prefix(path: &str) -> String {
    path::with_trailing_slash(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> FlatFs {
        let mut fs = FlatFs::new();
        fs.make_dir("/docs").unwrap();
        fs.write_file("/docs/a.txt", "hello");
        fs.write_file("/docs/sub/deep.txt", "deep");
        fs.write_file("/readme.md", "top");
        fs
    }

    #[test]
    fn new_contains_only_root_dir() {
        let fs = FlatFs::new();
        assert_eq!(fs.len(), 1);
        assert!(fs.get("/").unwrap().is_dir());
    }

    #[test]
    fn list_infers_children_by_prefix() {
        let fs = seeded();
        assert_eq!(fs.list("/"), vec!["docs", "readme.md"]);
        // "sub" never got an explicit mkdir, but prefix inference finds it.
        assert_eq!(fs.list("/docs"), vec!["a.txt", "sub"]);
        assert_eq!(fs.list("/docs/sub"), vec!["deep.txt"]);
    }

    #[test]
    fn list_of_missing_dir_is_empty() {
        let fs = seeded();
        assert!(fs.list("/nope").is_empty());
    }

    #[test]
    fn make_dir_twice_fails_and_leaves_state_unchanged() {
        let mut fs = FlatFs::new();
        fs.make_dir("/d").unwrap();
        let before = fs.clone();
        assert_eq!(
            fs.make_dir("/d"),
            Err(FsError::AlreadyExists("/d".to_string()))
        );
        assert_eq!(fs, before);
    }

    #[test]
    fn touch_then_read_is_empty_string() {
        let mut fs = FlatFs::new();
        fs.touch_file("/a.txt");
        assert_eq!(fs.read_file("/a.txt").unwrap(), "");
    }

    #[test]
    fn touch_overwrites_existing_contents() {
        let mut fs = FlatFs::new();
        fs.write_file("/a.txt", "data");
        fs.touch_file("/a.txt");
        assert_eq!(fs.read_file("/a.txt").unwrap(), "");
    }

    #[test]
    fn read_of_directory_is_not_found() {
        let mut fs = FlatFs::new();
        fs.make_dir("/d").unwrap();
        assert!(matches!(fs.read_file("/d"), Err(FsError::NotFound(_))));
    }

    #[test]
    fn remove_file() {
        let mut fs = seeded();
        fs.remove("/readme.md", false).unwrap();
        assert!(!fs.contains("/readme.md"));
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut fs = FlatFs::new();
        let before = fs.clone();
        assert!(matches!(fs.remove("/nope", false), Err(FsError::NotFound(_))));
        assert_eq!(fs.rev(), before.rev());
    }

    #[test]
    fn remove_non_empty_dir_requires_recursive() {
        let mut fs = seeded();
        assert_eq!(
            fs.remove("/docs", false),
            Err(FsError::NotEmpty("/docs".to_string()))
        );
        fs.remove("/docs", true).unwrap();
        assert!(!fs.contains("/docs"));
        assert!(!fs.contains("/docs/a.txt"));
        assert!(!fs.contains("/docs/sub/deep.txt"));
        assert!(fs.contains("/readme.md"));
    }

    #[test]
    fn remove_empty_dir_without_recursive() {
        let mut fs = FlatFs::new();
        fs.make_dir("/d").unwrap();
        fs.remove("/d", false).unwrap();
        assert!(!fs.contains("/d"));
    }

    #[test]
    fn recursive_remove_of_root_keeps_root() {
        let mut fs = seeded();
        fs.remove("/", true).unwrap();
        assert_eq!(fs.len(), 1);
        assert!(fs.get("/").unwrap().is_dir());
    }

    #[test]
    fn rename_file() {
        let mut fs = seeded();
        fs.rename("/readme.md", "/renamed.md").unwrap();
        assert!(!fs.contains("/readme.md"));
        assert_eq!(fs.read_file("/renamed.md").unwrap(), "top");
    }

    #[test]
    fn rename_into_existing_dir_appends_basename() {
        let mut fs = seeded();
        fs.rename("/readme.md", "/docs").unwrap();
        assert_eq!(fs.read_file("/docs/readme.md").unwrap(), "top");
        assert!(!fs.contains("/readme.md"));
    }

    #[test]
    fn rename_dir_relocates_subtree() {
        let mut fs = seeded();
        fs.rename("/docs", "/moved").unwrap();
        assert!(fs.get("/moved").unwrap().is_dir());
        assert_eq!(fs.read_file("/moved/a.txt").unwrap(), "hello");
        assert_eq!(fs.read_file("/moved/sub/deep.txt").unwrap(), "deep");
        assert!(!fs.contains("/docs"));
        assert!(!fs.contains("/docs/a.txt"));
    }

    #[test]
    fn rename_onto_itself_is_same_source() {
        let mut fs = seeded();
        assert_eq!(fs.rename("/readme.md", "/readme.md"), Err(FsError::SameSource));
        // Moving a file "into" its own directory resolves to the same path.
        fs.make_dir("/d").unwrap();
        fs.write_file("/d/f", "x");
        assert_eq!(fs.rename("/d/f", "/d"), Err(FsError::SameSource));
    }

    #[test]
    fn rename_missing_source_is_not_found() {
        let mut fs = FlatFs::new();
        assert!(matches!(
            fs.rename("/nope", "/dest"),
            Err(FsError::NotFound(_))
        ));
    }

    #[test]
    fn copy_file_leaves_source_intact() {
        let mut fs = seeded();
        fs.copy("/readme.md", "/copy.md").unwrap();
        assert_eq!(fs.read_file("/readme.md").unwrap(), "top");
        assert_eq!(fs.read_file("/copy.md").unwrap(), "top");
    }

    #[test]
    fn copy_dir_deep_copies_subtree() {
        let mut fs = seeded();
        fs.copy("/docs", "/backup").unwrap();
        assert_eq!(fs.read_file("/backup/a.txt").unwrap(), "hello");
        assert_eq!(fs.read_file("/backup/sub/deep.txt").unwrap(), "deep");
        assert_eq!(fs.read_file("/docs/a.txt").unwrap(), "hello");
    }

    #[test]
    fn copy_into_existing_dir_appends_basename() {
        let mut fs = seeded();
        fs.make_dir("/dest").unwrap();
        fs.copy("/readme.md", "/dest").unwrap();
        assert_eq!(fs.read_file("/dest/readme.md").unwrap(), "top");
    }

    #[test]
    fn stat_reports_kind_and_size() {
        let fs = seeded();
        let st = fs.stat("/docs/a.txt").unwrap();
        assert_eq!(st.kind, NodeKind::File);
        assert_eq!(st.size, 5);
        let st = fs.stat("/docs").unwrap();
        assert_eq!(st.kind, NodeKind::Dir);
        assert_eq!(st.size, 0);
        assert!(matches!(fs.stat("/nope"), Err(FsError::NotFound(_))));
    }

    #[test]
    fn json_round_trip_reproduces_mapping() {
        let fs = seeded();
        let blob = fs.to_json().unwrap();
        let reloaded = FlatFs::from_json(&blob).unwrap();
        assert_eq!(fs, reloaded);
    }

    #[test]
    fn from_json_reseeds_missing_root() {
        let fs = FlatFs::from_json(r#"{"/a":{"type":"file","contents":"x"}}"#).unwrap();
        assert!(fs.get("/").unwrap().is_dir());
        assert_eq!(fs.read_file("/a").unwrap(), "x");
    }

    #[test]
    fn from_json_tolerates_file_without_contents() {
        let fs = FlatFs::from_json(r#"{"/":{"type":"dir"},"/a":{"type":"file"}}"#).unwrap();
        assert_eq!(fs.read_file("/a").unwrap(), "");
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(FlatFs::from_json("not json").is_err());
        assert!(FlatFs::from_json(r#"{"/":{"type":"socket"}}"#).is_err());
    }

    #[test]
    fn mutations_bump_revision() {
        let mut fs = FlatFs::new();
        let r0 = fs.rev();
        fs.make_dir("/d").unwrap();
        assert!(fs.rev() > r0);
        let r1 = fs.rev();
        fs.write_file("/d/f", "x");
        assert!(fs.rev() > r1);
    }
}
