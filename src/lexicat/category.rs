use crate::term::Term;
use crate::term_list::TermList;

/// A named vocabulary category: one name plus its sorted list of unique
/// member words. The underlying list allows duplicates; uniqueness is
/// enforced here, at insertion.
#[derive(Debug, Clone, Default)]
pub struct Category {
    name: Term,
    terms: TermList,
}

impl Category {
    pub fn new(name: Term) -> Self {
        Self {
            name,
            terms: TermList::new(),
        }
    }

    pub fn with_terms(name: Term, terms: TermList) -> Self {
        Self { name, terms }
    }

    pub fn name(&self) -> &Term {
        &self.name
    }

    pub fn terms(&self) -> &TermList {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Inserts `term` in sorted position unless it is already a member.
    /// Returns whether the category changed.
    pub fn insert_term(&mut self, term: Term) -> bool {
        if self.terms.lookup(&term) {
            return false;
        }
        self.terms.insert_sorted(term);
        true
    }

    pub fn remove_term(&mut self, term: &Term) -> bool {
        self.terms.remove(term)
    }

    pub fn contains(&self, term: &Term) -> bool {
        self.terms.lookup(term)
    }

    pub fn starting_with(&self, letter: char) -> TermList {
        self.terms.starting_with(letter)
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Replaces the name wholesale; the member list is untouched.
    pub fn rename(&mut self, new_name: Term) {
        self.name = new_name;
    }
}
