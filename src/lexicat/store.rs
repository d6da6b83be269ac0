//! Growable array of categories, unique by name.
//!
//! Capacity follows an explicit policy instead of the backing `Vec`'s
//! growth heuristics: it starts at 1, doubles when an insert finds the
//! array full, and halves once (floor 1) when a removal leaves the array
//! less than half occupied. The `capacity` field is the authoritative
//! value; the `Vec` is only storage.

use crate::category::Category;
use crate::term::Term;

#[derive(Debug)]
pub struct CategoryStore {
    records: Vec<Category>,
    capacity: usize,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(1),
            capacity: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends `category` unless its name is already taken, growing the
    /// array when full. Returns whether the category was added.
    pub fn add(&mut self, category: Category) -> bool {
        if self.contains(category.name()) {
            return false;
        }
        if self.records.len() == self.capacity {
            self.reallocate(self.capacity * 2);
        }
        assert!(
            self.records.len() < self.capacity,
            "category store size exceeds capacity"
        );
        self.records.push(category);
        true
    }

    /// Removes the category named `name`, shifting the rest left to keep
    /// their order. Shrinks the array when it drops below half occupancy.
    /// Returns whether a category was removed.
    pub fn remove(&mut self, name: &Term) -> bool {
        let position = match self.records.iter().position(|c| c.name() == name) {
            Some(position) => position,
            None => return false,
        };
        self.records.remove(position);
        if self.records.len() < self.capacity / 2 {
            self.reallocate((self.capacity / 2).max(1));
        }
        true
    }

    /// Short-lived borrow; any later add/remove on the store invalidates it.
    pub fn find(&self, name: &Term) -> Option<&Category> {
        self.records.iter().find(|c| c.name() == name)
    }

    pub fn find_mut(&mut self, name: &Term) -> Option<&mut Category> {
        self.records.iter_mut().find(|c| c.name() == name)
    }

    pub fn contains(&self, name: &Term) -> bool {
        self.find(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.records.iter()
    }

    /// Discards every record and returns to the initial shape (capacity 1,
    /// size 0).
    pub fn clear_all(&mut self) {
        *self = Self::new();
    }

    /// Moves the whole store out, leaving this one empty and valid.
    pub fn take(&mut self) -> CategoryStore {
        std::mem::replace(self, Self::new())
    }

    // Moves every record into a fresh buffer of `new_capacity` slots and
    // only then swaps it in, so no caller can observe a partially copied
    // store.
    fn reallocate(&mut self, new_capacity: usize) {
        assert!(
            self.records.len() <= new_capacity,
            "category store size exceeds capacity"
        );
        let mut fresh = Vec::with_capacity(new_capacity);
        fresh.extend(self.records.drain(..));
        self.records = fresh;
        self.capacity = new_capacity;
    }
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CategoryStore {
    fn clone(&self) -> Self {
        let mut records = Vec::with_capacity(self.capacity);
        records.extend(self.records.iter().cloned());
        Self {
            records,
            capacity: self.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> CategoryStore {
        let mut store = CategoryStore::new();
        for name in names {
            assert!(store.add(Category::new(Term::from(*name))));
        }
        store
    }

    fn names(store: &CategoryStore) -> Vec<String> {
        store.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn starts_at_capacity_one() {
        let store = CategoryStore::new();
        assert_eq!(store.capacity(), 1);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn capacity_doubles_from_one() {
        let mut store = CategoryStore::new();
        let expected = [1, 2, 4, 4, 8];
        for (i, capacity) in expected.into_iter().enumerate() {
            store.add(Category::new(Term::from(format!("cat-{}", i).as_str())));
            assert_eq!(store.len(), i + 1);
            assert_eq!(store.capacity(), capacity);
            assert!(store.capacity() >= store.len());
        }
    }

    #[test]
    fn duplicate_name_is_rejected_without_mutation() {
        let mut store = store_with(&["verbs"]);
        assert!(!store.add(Category::new(Term::from("verbs"))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.capacity(), 1);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut store = store_with(&["verbs"]);
        assert!(store.add(Category::new(Term::from("Verbs"))));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_shifts_and_preserves_order() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        assert!(store.remove(&Term::from("b")));
        assert_eq!(names(&store), ["a", "c", "d"]);
        assert!(!store.remove(&Term::from("b")));
    }

    #[test]
    fn shrinks_below_half_occupancy() {
        // 3 additions: capacity 1 -> 2 -> 4.
        let mut store = store_with(&["a", "b", "c"]);
        assert_eq!(store.capacity(), 4);

        // 2 of 4 is not below half, so the first removal keeps capacity 4;
        // the second drops occupancy to 1 of 4 and halves to 2.
        assert!(store.remove(&Term::from("a")));
        assert_eq!(store.capacity(), 4);
        assert!(store.remove(&Term::from("b")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.capacity(), 2);
    }

    #[test]
    fn capacity_never_drops_below_one() {
        let mut store = store_with(&["only"]);
        assert!(store.remove(&Term::from("only")));
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), 1);
        // Still usable at the floor.
        assert!(store.add(Category::new(Term::from("again"))));
    }

    #[test]
    fn lookup_follows_add_and_remove() {
        let mut store = CategoryStore::new();
        let name = Term::from("nouns");
        assert!(store.add(Category::new(name.clone())));
        assert!(store.contains(&name));
        assert!(store.remove(&name));
        assert!(!store.contains(&name));
    }

    #[test]
    fn find_gives_access_to_a_record() {
        let mut store = store_with(&["fruits"]);
        assert!(store.find(&Term::from("missing")).is_none());

        let category = store.find_mut(&Term::from("fruits")).unwrap();
        category.insert_term(Term::from("apple"));
        assert_eq!(store.find(&Term::from("fruits")).unwrap().len(), 1);
    }

    #[test]
    fn clear_all_resets_to_initial_shape() {
        let mut store = store_with(&["a", "b", "c"]);
        store.clear_all();
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), 1);
        assert!(store.add(Category::new(Term::from("fresh"))));
    }

    #[test]
    fn clone_matches_source_capacity_and_is_deep() {
        let mut store = store_with(&["a", "b", "c"]);
        store
            .find_mut(&Term::from("a"))
            .unwrap()
            .insert_term(Term::from("word"));

        let mut copy = store.clone();
        assert_eq!(copy.capacity(), store.capacity());
        copy.find_mut(&Term::from("a"))
            .unwrap()
            .insert_term(Term::from("extra"));
        copy.remove(&Term::from("b"));

        assert_eq!(store.find(&Term::from("a")).unwrap().len(), 1);
        assert!(store.contains(&Term::from("b")));
    }

    #[test]
    fn take_leaves_an_empty_valid_store() {
        let mut store = store_with(&["a", "b"]);
        let moved = store.take();
        assert_eq!(moved.len(), 2);
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), 1);
        assert!(store.add(Category::new(Term::from("new"))));
    }
}
