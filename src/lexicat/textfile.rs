//! The flat vocabulary file format.
//!
//! A trimmed line starting with `#` opens a category named by the rest of
//! the line (also trimmed); the following trimmed non-blank lines are its
//! member words; blank lines are ignored, as are words appearing before
//! the first boundary line. Saving emits `#name`, the word grid at
//! [`SAVE_WORDS_PER_LINE`], and a blank separator line per category.

use crate::category::Category;
use crate::error::Result;
use crate::store::CategoryStore;
use crate::term::Term;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Words per line in saved vocabulary files. Fixed by the file format,
/// independent of the display setting.
pub const SAVE_WORDS_PER_LINE: usize = 5;

/// Parses the vocabulary format from any line source. Words are inserted
/// through [`Category::insert_term`], so each parsed category comes back
/// sorted and duplicate-free. Categories with repeated names are returned
/// as-is; merging is the caller's decision.
pub fn parse_categories<R: BufRead>(reader: R) -> Result<Vec<Category>> {
    let mut categories: Vec<Category> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if let Some(name) = line.strip_prefix('#') {
            categories.push(Category::new(Term::from(name.trim())));
        } else if !line.is_empty() {
            if let Some(current) = categories.last_mut() {
                current.insert_term(Term::from(line));
            }
        }
    }
    Ok(categories)
}

/// Writes every category in store order.
pub fn write_store<W: Write>(writer: &mut W, store: &CategoryStore) -> Result<()> {
    for category in store.iter() {
        writeln!(writer, "#{}", category.name())?;
        category.terms().print(writer, SAVE_WORDS_PER_LINE)?;
        writeln!(writer)?;
    }
    Ok(())
}

pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<Category>> {
    let file = File::open(path)?;
    parse_categories(BufReader::new(file))
}

pub fn save_path<P: AsRef<Path>>(path: P, store: &CategoryStore) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_store(&mut writer, store)?;
    writer.flush()?;
    Ok(())
}

/// Reads a plain word file: one word per line, trimmed, blanks skipped.
pub fn load_words_path<P: AsRef<Path>>(path: P) -> Result<Vec<Term>> {
    let file = File::open(path)?;
    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            words.push(Term::from(line));
        }
    }
    Ok(words)
}

/// Writes one category's words, one per line.
pub fn save_words_path<P: AsRef<Path>>(path: P, category: &Category) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    category.terms().print(&mut writer, 1)?;
    writer.flush()?;
    Ok(())
}
