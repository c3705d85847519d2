//! Saved Items Store
//!
//! Bookmarks keyed by `name|category`, kept in browser storage in the
//! order they were added.

use crate::error::GuideResult;
use crate::models::{saved_id, Category, SavedItem};
use crate::storage::{read_json, read_json_for_update, write_json, KeyValueStore, SAVED_KEY};

pub struct SavedStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> SavedStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn items(&self) -> GuideResult<Vec<SavedItem>> {
        read_json(&self.storage, SAVED_KEY)
    }

    pub fn is_saved(&self, id: &str) -> GuideResult<bool> {
        Ok(self.items()?.iter().any(|s| s.id == id))
    }

    /// Remove the item if its id is already saved, append it otherwise.
    /// Returns whether the item is saved afterwards.
    pub fn toggle(&self, item: SavedItem) -> GuideResult<bool> {
        let mut saved: Vec<SavedItem> = read_json_for_update(&self.storage, SAVED_KEY)?;
        let before = saved.len();
        saved.retain(|s| s.id != item.id);
        let now_saved = saved.len() == before;
        if now_saved {
            saved.push(item);
        }
        write_json(&self.storage, SAVED_KEY, &saved)?;
        log::debug!("[SAVED] toggle -> saved={} ({} items)", now_saved, saved.len());
        Ok(now_saved)
    }

    /// Add a catalog spot to the plan unless it is already there.
    /// Returns whether anything was added.
    pub fn add_to_plan(&self, name: &str) -> GuideResult<bool> {
        let mut saved: Vec<SavedItem> = read_json_for_update(&self.storage, SAVED_KEY)?;
        let id = saved_id(name, Category::Tour);
        if saved.iter().any(|s| s.id == id) {
            return Ok(false);
        }
        saved.push(SavedItem::new(name, Category::Tour, "", "Planned visit"));
        write_json(&self.storage, SAVED_KEY, &saved)?;
        Ok(true)
    }
}

/// One `- [category] name` line per item, in saved order
pub fn itinerary_lines(items: &[SavedItem]) -> Vec<String> {
    items.iter().map(|s| format!("- [{}] {}", s.category, s.name)).collect()
}

/// Full text of the downloadable plan, or `None` when nothing is saved
pub fn itinerary_document(title: &str, items: &[SavedItem]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(format!("{}\n\n{}\n", title, itinerary_lines(items).join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn setup() -> SavedStore<MemoryStore> {
        SavedStore::new(MemoryStore::new())
    }

    #[test]
    fn test_unreadable_saved_is_not_overwritten() {
        let storage = MemoryStore::new();
        storage.set(SAVED_KEY, "oops").unwrap();
        let store = SavedStore::new(storage.clone());

        assert!(store.items().unwrap().is_empty());
        assert!(store.toggle(bridge()).is_err());
        assert!(store.add_to_plan("Belur Math").is_err());
        assert_eq!(storage.get(SAVED_KEY).unwrap().as_deref(), Some("oops"));
    }

    fn bridge() -> SavedItem {
        SavedItem::new("Howrah Bridge", Category::Tour, "bridge.jpg", "Cantilever bridge")
    }

    #[test]
    fn test_toggle_twice_is_noop() {
        let store = setup();
        assert!(store.toggle(bridge()).unwrap());
        assert_eq!(store.items().unwrap().len(), 1);
        assert!(store.is_saved("Howrah Bridge|tour").unwrap());

        assert!(!store.toggle(bridge()).unwrap());
        assert!(store.items().unwrap().is_empty());
    }

    #[test]
    fn test_same_name_different_category() {
        let store = setup();
        store.toggle(SavedItem::new("Park Hotel", Category::Hotel, "", "")).unwrap();
        store.toggle(SavedItem::new("Park Hotel", Category::Food, "", "")).unwrap();
        let ids: Vec<_> = store.items().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["Park Hotel|hotel", "Park Hotel|food"]);
    }

    #[test]
    fn test_toggle_removes_only_matching_id() {
        let store = setup();
        store.toggle(bridge()).unwrap();
        store.toggle(SavedItem::new("Flurys", Category::Food, "", "")).unwrap();
        store.toggle(bridge()).unwrap();
        let items = store.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Flurys");
    }

    #[test]
    fn test_add_to_plan_never_duplicates() {
        let store = setup();
        assert!(store.add_to_plan("Belur Math").unwrap());
        assert!(!store.add_to_plan("Belur Math").unwrap());
        let items = store.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].note, "Planned visit");
        assert_eq!(items[0].category, Category::Tour);
    }

    #[test]
    fn test_itinerary_lines_in_order() {
        let items = vec![
            SavedItem::new("Victoria Memorial", Category::Tour, "", ""),
            SavedItem::new("Peter Cat", Category::Food, "", ""),
        ];
        assert_eq!(
            itinerary_lines(&items),
            vec!["- [tour] Victoria Memorial", "- [food] Peter Cat"]
        );
    }

    #[test]
    fn test_itinerary_document() {
        assert_eq!(itinerary_document("Plan", &[]), None);
        let items = vec![SavedItem::new("Kumartuli", Category::Tour, "", "")];
        assert_eq!(
            itinerary_document("Plan", &items).as_deref(),
            Some("Plan\n\n- [tour] Kumartuli\n")
        );
    }
}
