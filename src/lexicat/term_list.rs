//! Doubly linked list of terms with sorted insertion.
//!
//! Nodes live in a slab: `slots` owns them, vacated slots are recycled
//! through the `free` stack, and `prev`/`next` links are slot indices
//! rather than owning pointers. Ownership runs strictly list -> slab ->
//! node, so the chain can never cycle or leak.

use crate::error::{LexicatError, Result};
use crate::term::Term;
use std::io::{self, Write};

/// Column width for the word grid emitted by [`TermList::print`].
const GRID_COLUMN: usize = 15;

#[derive(Debug, Clone)]
struct Node {
    term: Term,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly linked sequence of [`Term`] values.
///
/// End operations are O(1); search, positional access, and sorted insertion
/// are O(n). The list stays sorted only while it is mutated through
/// [`insert_sorted`](Self::insert_sorted) alone — callers mixing in the end
/// operations are responsible for order themselves.
#[derive(Debug, Clone, Default)]
pub struct TermList {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl TermList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    // A linked index always names an occupied slot; a miss here is a bug in
    // the list itself, not a recoverable condition.
    fn node(&self, index: usize) -> &Node {
        self.slots[index].as_ref().expect("linked slot is occupied")
    }

    fn node_mut(&mut self, index: usize) -> &mut Node {
        self.slots[index].as_mut().expect("linked slot is occupied")
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) -> Node {
        let node = self.slots[index].take().expect("linked slot is occupied");
        self.free.push(index);
        node
    }

    pub fn front(&self) -> Result<&Term> {
        let index = self.head.ok_or(LexicatError::EmptyList)?;
        Ok(&self.node(index).term)
    }

    pub fn back(&self) -> Result<&Term> {
        let index = self.tail.ok_or(LexicatError::EmptyList)?;
        Ok(&self.node(index).term)
    }

    pub fn push_front(&mut self, term: Term) {
        let index = self.alloc(Node {
            term,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.len += 1;
    }

    pub fn push_back(&mut self, term: Term) {
        let index = self.alloc(Node {
            term,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old_tail) => self.node_mut(old_tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Result<Term> {
        let index = self.head.ok_or(LexicatError::EmptyList)?;
        let node = self.release(index);
        self.head = node.next;
        match self.head {
            Some(new_head) => self.node_mut(new_head).prev = None,
            None => self.tail = None,
        }
        self.len -= 1;
        Ok(node.term)
    }

    pub fn pop_back(&mut self) -> Result<Term> {
        let index = self.tail.ok_or(LexicatError::EmptyList)?;
        let node = self.release(index);
        self.tail = node.prev;
        match self.tail {
            Some(new_tail) => self.node_mut(new_tail).next = None,
            None => self.head = None,
        }
        self.len -= 1;
        Ok(node.term)
    }

    /// Splices `term` into sorted position: in front when it precedes the
    /// current front, at the back when it does not precede the current
    /// back, otherwise before the first element (scanning from the second
    /// node) that is not less than it. Duplicates are kept; uniqueness is
    /// the caller's concern.
    pub fn insert_sorted(&mut self, term: Term) {
        let (head, tail) = match (self.head, self.tail) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return self.push_front(term),
        };
        if term.is_less(&self.node(head).term) {
            return self.push_front(term);
        }
        if !term.is_less(&self.node(tail).term) {
            return self.push_back(term);
        }
        let mut current = self.node(head).next;
        while let Some(index) = current {
            if !self.node(index).term.is_less(&term) {
                break;
            }
            current = self.node(index).next;
        }
        // term < back, so the scan stopped at the tail at the latest.
        let at = current.expect("splice position exists before the tail");
        let prev = self.node(at).prev.expect("non-head node has a predecessor");
        let index = self.alloc(Node {
            term,
            prev: Some(prev),
            next: Some(at),
        });
        self.node_mut(prev).next = Some(index);
        self.node_mut(at).prev = Some(index);
        self.len += 1;
    }

    /// Unlinks and discards the first element equal to `term`. Returns
    /// whether a match was found.
    pub fn remove(&mut self, term: &Term) -> bool {
        match self.find(term) {
            Some(index) => {
                self.unlink(index);
                true
            }
            None => false,
        }
    }

    pub fn lookup(&self, term: &Term) -> bool {
        self.find(term).is_some()
    }

    /// Copy of the element at `index`, walking from the head.
    pub fn fetch(&self, index: usize) -> Result<Term> {
        self.iter()
            .nth(index)
            .cloned()
            .ok_or(LexicatError::OutOfRange {
                index,
                len: self.len,
            })
    }

    /// New list of the elements whose first character equals `letter`, in
    /// original order. Empty elements never match any letter.
    pub fn starting_with(&self, letter: char) -> TermList {
        let mut matches = TermList::new();
        for term in self.iter() {
            if term.first_char() == Some(letter) {
                matches.push_back(term.clone());
            }
        }
        matches
    }

    /// Removes every element, leaving an empty, reusable list.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Moves the whole list out, leaving this one empty and reusable.
    pub fn take(&mut self) -> TermList {
        std::mem::take(self)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    /// Writes the elements left to right, `words_per_line` per output line.
    /// With more than one word per line every word is left-padded to a
    /// fixed column; a line break follows every full group and a trailing
    /// partial group. Returns the number of words written.
    pub fn print<W: Write>(&self, writer: &mut W, words_per_line: usize) -> io::Result<usize> {
        let per_line = words_per_line.max(1);
        let mut printed = 0;
        for term in self.iter() {
            if per_line != 1 {
                for _ in term.display_width()..GRID_COLUMN {
                    write!(writer, " ")?;
                }
            }
            term.write_to(writer)?;
            printed += 1;
            if printed % per_line == 0 {
                writeln!(writer)?;
            } else {
                write!(writer, " ")?;
            }
        }
        if printed % per_line != 0 {
            writeln!(writer)?;
        }
        Ok(printed)
    }

    fn find(&self, term: &Term) -> Option<usize> {
        let mut current = self.head;
        while let Some(index) = current {
            if self.node(index).term == *term {
                return Some(index);
            }
            current = self.node(index).next;
        }
        None
    }

    fn unlink(&mut self, index: usize) -> Term {
        let node = self.release(index);
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node.term
    }
}

pub struct Iter<'a> {
    list: &'a TermList,
    next: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Term;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let node = self.list.node(index);
        self.next = node.next;
        Some(&node.term)
    }
}

impl<'a> IntoIterator for &'a TermList {
    type Item = &'a Term;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
