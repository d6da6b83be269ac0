use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CategoryStore;
use crate::term::Term;

pub fn run(store: &mut CategoryStore, name: &Term) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.remove(name) {
        result.affected = 1;
        result.add_message(CmdMessage::success(format!(
            "'{}' was successfully removed",
            name
        )));
    } else {
        result.add_message(CmdMessage::warning(format!("'{}' could not be found", name)));
    }
    Ok(result)
}
