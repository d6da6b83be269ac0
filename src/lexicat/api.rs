//! The API facade — the single entry point for every lexicat operation.
//!
//! The facade owns the category store and dispatches to the command layer;
//! it carries no business logic of its own and performs no console I/O, so
//! any front end (the interactive menu, a test, some future surface) talks
//! to the same methods.

use crate::category::Category;
use crate::commands;
use crate::error::Result;
use crate::store::CategoryStore;
use crate::term::Term;
use std::path::Path;

pub struct LexicatApi {
    store: CategoryStore,
}

impl LexicatApi {
    pub fn new() -> Self {
        Self {
            store: CategoryStore::new(),
        }
    }

    pub fn list_categories(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_categories(&mut self, names: &[Term]) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, names)
    }

    pub fn remove_category(&mut self, name: &Term) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, name)
    }

    pub fn clear_category(&mut self, name: &Term) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store, name)
    }

    pub fn rename_category(&mut self, name: &Term, new_name: &Term) -> Result<commands::CmdResult> {
        commands::rename::run(&mut self.store, name, new_name)
    }

    pub fn insert_words(&mut self, name: &Term, words: &[Term]) -> Result<commands::CmdResult> {
        commands::words::insert(&mut self.store, name, words)
    }

    pub fn remove_word(&mut self, name: &Term, word: &Term) -> Result<commands::CmdResult> {
        commands::words::remove(&mut self.store, name, word)
    }

    pub fn search_word(&self, word: &Term) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, word)
    }

    pub fn words_starting_with(&self, letter: char) -> Result<commands::CmdResult> {
        commands::starting_with::run(&self.store, letter)
    }

    pub fn load_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.store, path)
    }

    pub fn save_file(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::save::run(&self.store, path)
    }

    pub fn load_word_file(&mut self, name: &Term, path: &Path) -> Result<commands::CmdResult> {
        commands::load::words(&mut self.store, name, path)
    }

    pub fn save_word_file(&self, name: &Term, path: &Path) -> Result<commands::CmdResult> {
        commands::save::words(&self.store, name, path)
    }

    pub fn category(&self, name: &Term) -> Option<&Category> {
        self.store.find(name)
    }

    pub fn has_category(&self, name: &Term) -> bool {
        self.store.contains(name)
    }
}

impl Default for LexicatApi {
    fn default() -> Self {
        Self::new()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, SearchHit};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_adds_and_lookups() {
        let mut api = LexicatApi::new();
        api.add_categories(&[Term::from("fruits")]).unwrap();
        assert!(api.has_category(&Term::from("fruits")));

        api.insert_words(&Term::from("fruits"), &[Term::from("apple")])
            .unwrap();
        assert_eq!(api.category(&Term::from("fruits")).unwrap().len(), 1);

        let result = api.search_word(&Term::from("apple")).unwrap();
        assert!(result.hits[0].found);

        api.remove_category(&Term::from("fruits")).unwrap();
        assert!(!api.has_category(&Term::from("fruits")));
    }
}
