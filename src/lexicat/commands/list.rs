use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CategoryStore;

pub fn run(store: &CategoryStore) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed(store.iter().cloned().collect());
    if store.is_empty() {
        result.add_message(CmdMessage::info(
            "No categories yet. Add a category and some words first.",
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::term::Term;

    #[test]
    fn lists_every_category_in_order() {
        let mut store = CategoryStore::new();
        store.add(Category::new(Term::from("fruits")));
        store.add(Category::new(Term::from("animals")));

        let result = run(&store).unwrap();
        assert_eq!(result.listed.len(), 2);
        assert_eq!(result.listed[0].name().as_str(), "fruits");
        assert_eq!(result.listed[1].name().as_str(), "animals");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_gets_a_hint() {
        let store = CategoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
