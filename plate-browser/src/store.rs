///! Favorite / exclude marks
///!
///! The only mutable state of the browser. It is loaded and saved here and
///! handed to the view; the catalog never sees it.

use anyhow::{Context, Result};
use plate_common::PlateStatus;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::StoreActions;

/// 收藏 / 排除 标记存储
pub struct FavoriteStore {
    path: PathBuf,
    marks: BTreeMap<String, PlateStatus>,
}

impl FavoriteStore {
    /// 创建空的标记存储
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            marks: BTreeMap::new(),
        }
    }

    /// 从文件加载标记, 文件不存在时返回空存储
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut store = Self::new(path);

        if !store.path.exists() {
            debug!("Store file does not exist: {:?}", store.path);
            return Ok(store);
        }

        let content = fs::read_to_string(&store.path)
            .with_context(|| format!("Failed to read store file {:?}", store.path))?;
        let marks: BTreeMap<String, PlateStatus> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse store file {:?}", store.path))?;

        store.marks = marks
            .into_iter()
            .map(|(plate, status)| (normalize_plate(&plate), status))
            .collect();

        info!("Loaded {} plate marks from {:?}", store.marks.len(), store.path);
        Ok(store)
    }

    /// 保存标记到文件
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create store directory {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(&self.marks)
            .context("Failed to serialize plate marks")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write store file {:?}", self.path))?;

        debug!("Saved {} plate marks to {:?}", self.marks.len(), self.path);
        Ok(())
    }

    pub fn status(&self, plate: &str) -> Option<PlateStatus> {
        self.marks.get(&normalize_plate(plate)).copied()
    }

    pub fn is_favored(&self, plate: &str) -> bool {
        self.status(plate) == Some(PlateStatus::Favored)
    }

    pub fn is_excluded(&self, plate: &str) -> bool {
        self.status(plate) == Some(PlateStatus::Excluded)
    }

    /// Set or clear the mark of a plate, returning the previous one
    pub fn set(&mut self, plate: &str, status: Option<PlateStatus>) -> Option<PlateStatus> {
        let key = normalize_plate(plate);
        match status {
            Some(status) => self.marks.insert(key, status),
            None => self.marks.remove(&key),
        }
    }

    pub fn clear(&mut self, plate: &str) -> Option<PlateStatus> {
        self.set(plate, None)
    }

    /// Favor a plate, or drop the mark if it is already favored
    pub fn toggle_favorite(&mut self, plate: &str) -> Option<PlateStatus> {
        self.toggle(plate, PlateStatus::Favored)
    }

    /// Exclude a plate, or drop the mark if it is already excluded
    pub fn toggle_excluded(&mut self, plate: &str) -> Option<PlateStatus> {
        self.toggle(plate, PlateStatus::Excluded)
    }

    fn toggle(&mut self, plate: &str, status: PlateStatus) -> Option<PlateStatus> {
        let next = if self.status(plate) == Some(status) {
            None
        } else {
            Some(status)
        };
        self.set(plate, next);
        next
    }

    /// Apply configured marks, returning how many plates changed
    pub fn apply(&mut self, actions: &StoreActions) -> usize {
        let mut changed = 0;
        let updates = actions
            .favorite
            .iter()
            .map(|plate| (plate, Some(PlateStatus::Favored)))
            .chain(actions.exclude.iter().map(|plate| (plate, Some(PlateStatus::Excluded))))
            .chain(actions.clear.iter().map(|plate| (plate, None)));

        for (plate, status) in updates {
            if self.set(plate, status) != status {
                changed += 1;
            }
        }

        if changed > 0 {
            info!("Updated {} plate marks", changed);
        }
        changed
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, PlateStatus)> {
        self.marks.iter().map(|(plate, status)| (plate.as_str(), *status))
    }
}

/// Plates are case-insensitive; marks are keyed in upper case
fn normalize_plate(plate: &str) -> String {
    plate.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("marks").join("favorites.json");

        let mut store = FavoriteStore::new(&path);
        store.set("AD11111", Some(PlateStatus::Favored));
        store.set("AD44444", Some(PlateStatus::Excluded));
        store.save().unwrap();

        let loaded = FavoriteStore::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.status("AD11111"), Some(PlateStatus::Favored));
        assert_eq!(loaded.status("AD44444"), Some(PlateStatus::Excluded));
        assert_eq!(loaded.status("AD12345"), None);
    }

    #[test]
    fn test_store_file_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("favorites.json");
        fs::write(&path, r#"{"ad11111":"favored","AD44444":"excluded"}"#).unwrap();

        let store = FavoriteStore::load(&path).unwrap();
        assert!(store.is_favored("AD11111"));
        assert!(store.is_excluded("ad44444"));
    }

    #[test]
    fn test_store_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FavoriteStore::load(temp_dir.path().join("absent.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_rejects_unknown_status() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("favorites.json");
        fs::write(&path, r#"{"AD11111":"maybe"}"#).unwrap();
        assert!(FavoriteStore::load(&path).is_err());
    }

    #[test]
    fn test_toggle() {
        let mut store = FavoriteStore::new("unused.json");

        assert_eq!(store.toggle_favorite("AD11111"), Some(PlateStatus::Favored));
        assert_eq!(store.toggle_excluded("AD11111"), Some(PlateStatus::Excluded));
        assert_eq!(store.toggle_excluded("ad11111"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_apply_actions() {
        let mut store = FavoriteStore::new("unused.json");
        store.set("AD00000", Some(PlateStatus::Favored));

        let actions = StoreActions {
            favorite: vec!["AD11111".to_string(), "AD00000".to_string()],
            exclude: vec!["AD44444".to_string()],
            clear: vec!["AD00000".to_string()],
        };

        assert_eq!(store.apply(&actions), 3);
        assert!(store.is_favored("AD11111"));
        assert!(store.is_excluded("AD44444"));
        assert_eq!(store.status("AD00000"), None);

        let marks: Vec<(&str, PlateStatus)> = store.iter().collect();
        assert_eq!(
            marks,
            vec![
                ("AD11111", PlateStatus::Favored),
                ("AD44444", PlateStatus::Excluded),
            ]
        );
    }
}
