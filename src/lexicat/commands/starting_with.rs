use crate::category::Category;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CategoryStore;

/// For every category, the sub-list of words beginning with `letter`.
/// Categories with no match come back empty so the caller can say so.
pub fn run(store: &CategoryStore, letter: char) -> Result<CmdResult> {
    let listed = store
        .iter()
        .map(|category| {
            Category::with_terms(category.name().clone(), category.starting_with(letter))
        })
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    #[test]
    fn filters_each_category_by_first_letter() {
        let mut store = CategoryStore::new();
        let mut fruits = Category::new(Term::from("fruits"));
        for word in ["pear", "plum", "apple"] {
            fruits.insert_term(Term::from(word));
        }
        store.add(fruits);
        store.add(Category::new(Term::from("animals")));

        let result = run(&store, 'p').unwrap();
        assert_eq!(result.listed.len(), 2);

        let matched: Vec<&str> = result.listed[0].terms().iter().map(|t| t.as_str()).collect();
        assert_eq!(matched, ["pear", "plum"]);
        assert!(result.listed[1].is_empty());
    }

    #[test]
    fn filtering_does_not_touch_the_store() {
        let mut store = CategoryStore::new();
        let mut fruits = Category::new(Term::from("fruits"));
        fruits.insert_term(Term::from("pear"));
        store.add(fruits);

        run(&store, 'p').unwrap();
        assert_eq!(store.find(&Term::from("fruits")).unwrap().len(), 1);
    }
}
