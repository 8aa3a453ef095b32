pub use super::client::Client;
pub use super::reply::Reply;
pub use super::{Error, ErrorKind, Result};

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

mod del;
mod get;
mod ping;
mod quit;
mod set;

// a callable slot in the client function table
pub type CmdFn = Arc<dyn Fn(&mut Client, &[String]) -> Result<Reply> + Send + Sync>;

// every slot the adapted client surface covers out of the box
pub const SLOTS: &[&str] = &["get", "set", "del", "ping", "quit"];

// Built-in function table, captured once at first use. Entries are stable,
// so two lookups of the same slot return the same function value.
fn table() -> &'static HashMap<&'static str, CmdFn> {
    static TABLE: OnceLock<HashMap<&'static str, CmdFn>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table: HashMap<&'static str, CmdFn> = HashMap::new();
        table.insert("get", Arc::new(get::apply));
        table.insert("set", Arc::new(set::apply));
        table.insert("del", Arc::new(del::apply));
        table.insert("ping", Arc::new(ping::apply));
        table.insert("quit", Arc::new(quit::apply));
        table
    })
}

// the built-in function for a slot, if there is one
pub fn builtin(slot: &str) -> Option<CmdFn> {
    table().get(slot).cloned()
}

// reply error for a builtin called with the wrong argument count
pub(crate) fn wrong_arity(name: &str) -> Error {
    ErrorKind::Reply(format!(
        "ERR wrong number of arguments for '{}' command",
        name
    ))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_slot() {
        for slot in SLOTS {
            assert!(builtin(slot).is_some(), "missing builtin for {}", slot);
        }
        assert!(builtin("flushall").is_none());
    }

    #[test]
    fn builtin_lookups_are_stable() {
        let a = builtin("quit").unwrap();
        let b = builtin("quit").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
