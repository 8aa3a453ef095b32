use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::cmd::{self, CmdFn};

// How an override resolves when replayed onto a fresh client. The tag is
// explicit: callers say whether they are installing a fixed function or
// aliasing an original slot, instead of the adapter sniffing function
// identity.
#[derive(Clone)]
pub enum OverrideKind {
    // a fixed function value
    Fixed(CmdFn),

    // use whatever the named original slot currently resolves to
    Alias(String),
}

// one recorded override action
#[derive(Clone)]
pub enum OverrideAction {
    Set { slot: String, kind: OverrideKind },
    Delete { slot: String },
}

#[derive(Default)]
struct State {
    // append-only, never deduplicated
    log: Vec<OverrideAction>,
    active: HashMap<String, OverrideKind>,
    deleted: HashSet<String>,
}

// Process-wide override state. One lock guards the log, the active table
// and the deleted set together, so set and delete appear atomic with
// respect to concurrent client construction. Invariant: replaying the full
// log in order reproduces the active override set.
#[derive(Default)]
pub struct FunctionOverrideRegistry {
    state: Mutex<State>,
}

impl FunctionOverrideRegistry {
    pub fn new() -> Self {
        FunctionOverrideRegistry::default()
    }

    // Record an override for the slot. Takes effect on clients created
    // afterward; existing clients are unaffected.
    pub fn set(&self, slot: &str, kind: OverrideKind) {
        let mut state = self.state.lock().unwrap();
        state.log.push(OverrideAction::Set {
            slot: slot.to_string(),
            kind: kind.clone(),
        });
        state.deleted.remove(slot);
        state.active.insert(slot.to_string(), kind);
    }

    // Drop any override for the slot; clients created afterward revert to
    // the builtin behavior.
    pub fn delete(&self, slot: &str) {
        let mut state = self.state.lock().unwrap();
        state.log.push(OverrideAction::Delete {
            slot: slot.to_string(),
        });
        state.active.remove(slot);
        state.deleted.insert(slot.to_string());
    }

    // Materialize the effective function table for a fresh client by
    // replaying the action log from the start, last write per slot wins.
    pub fn materialize(&self) -> HashMap<String, CmdFn> {
        let state = self.state.lock().unwrap();
        resolve(&replay(&state.log))
    }
}

fn replay(log: &[OverrideAction]) -> HashMap<String, OverrideKind> {
    let mut table = HashMap::new();
    for action in log {
        match action {
            OverrideAction::Set { slot, kind } => {
                table.insert(slot.clone(), kind.clone());
            }
            OverrideAction::Delete { slot } => {
                table.remove(slot);
            }
        }
    }
    table
}

fn resolve(table: &HashMap<String, OverrideKind>) -> HashMap<String, CmdFn> {
    let mut functions = HashMap::new();
    for (slot, kind) in table {
        if let Some(f) = resolve_kind(kind, table) {
            functions.insert(slot.clone(), f);
        }
    }
    functions
}

// Resolve one override kind. Aliases re-resolve to the current value of
// their original slot: chains are followed through the replayed table
// first, falling back to the builtin table, and a cycle falls back to the
// builtin of the slot that closed it.
fn resolve_kind(kind: &OverrideKind, table: &HashMap<String, OverrideKind>) -> Option<CmdFn> {
    let mut target = match kind {
        OverrideKind::Fixed(f) => return Some(f.clone()),
        OverrideKind::Alias(slot) => slot.as_str(),
    };
    let mut visited = HashSet::new();
    loop {
        if !visited.insert(target) {
            return cmd::builtin(target);
        }
        match table.get(target) {
            Some(OverrideKind::Fixed(f)) => return Some(f.clone()),
            Some(OverrideKind::Alias(next)) => target = next.as_str(),
            None => return cmd::builtin(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Client;
    use crate::reply::Reply;
    use crate::Result;
    use std::sync::Arc;

    fn fixed(tag: &'static str) -> CmdFn {
        Arc::new(move |_client: &mut Client, _args: &[String]| -> Result<Reply> {
            Ok(Reply::SimpleString(tag.into()))
        })
    }

    fn kind_eq(a: &OverrideKind, b: &OverrideKind) -> bool {
        match (a, b) {
            (OverrideKind::Fixed(x), OverrideKind::Fixed(y)) => Arc::ptr_eq(x, y),
            (OverrideKind::Alias(x), OverrideKind::Alias(y)) => x == y,
            _ => false,
        }
    }

    #[test]
    fn replaying_the_log_reproduces_the_active_set() {
        let registry = FunctionOverrideRegistry::new();
        registry.set("ping", OverrideKind::Fixed(fixed("a")));
        registry.set("get", OverrideKind::Fixed(fixed("b")));
        registry.set("ping", OverrideKind::Fixed(fixed("c")));
        registry.delete("get");
        registry.set("end", OverrideKind::Alias("quit".into()));

        let state = registry.state.lock().unwrap();
        assert_eq!(state.log.len(), 5);
        assert!(state.deleted.contains("get"));

        let replayed = replay(&state.log);
        assert_eq!(replayed.len(), state.active.len());
        for (slot, kind) in &state.active {
            assert!(kind_eq(&replayed[slot], kind), "mismatch at {}", slot);
        }
    }

    #[test]
    fn last_write_wins_per_slot() {
        let registry = FunctionOverrideRegistry::new();
        let winner = fixed("winner");
        registry.set("ping", OverrideKind::Fixed(fixed("loser")));
        registry.set("ping", OverrideKind::Fixed(winner.clone()));

        let table = registry.materialize();
        assert!(Arc::ptr_eq(&table["ping"], &winner));
        // the stored sequence itself is not deduplicated
        assert_eq!(registry.state.lock().unwrap().log.len(), 2);
    }

    #[test]
    fn delete_reverts_to_the_builtin() {
        let registry = FunctionOverrideRegistry::new();
        registry.set("ping", OverrideKind::Fixed(fixed("x")));
        registry.delete("ping");
        assert!(registry.materialize().get("ping").is_none());
    }

    #[test]
    fn alias_resolves_to_the_builtin_when_target_is_untouched() {
        let registry = FunctionOverrideRegistry::new();
        registry.set("end", OverrideKind::Alias("quit".into()));

        let table = registry.materialize();
        assert!(Arc::ptr_eq(&table["end"], &cmd::builtin("quit").unwrap()));
    }

    #[test]
    fn alias_re_resolves_to_a_later_override_of_its_target() {
        let registry = FunctionOverrideRegistry::new();
        registry.set("end", OverrideKind::Alias("quit".into()));
        let replacement = fixed("replacement");
        registry.set("quit", OverrideKind::Fixed(replacement.clone()));

        let table = registry.materialize();
        assert!(Arc::ptr_eq(&table["end"], &replacement));
    }

    #[test]
    fn alias_falls_back_to_the_builtin_once_its_target_is_deleted() {
        let registry = FunctionOverrideRegistry::new();
        registry.set("end", OverrideKind::Alias("quit".into()));
        registry.set("quit", OverrideKind::Fixed(fixed("replacement")));
        registry.delete("quit");

        let table = registry.materialize();
        assert!(Arc::ptr_eq(&table["end"], &cmd::builtin("quit").unwrap()));
    }

    #[test]
    fn alias_cycle_falls_back_to_the_builtin() {
        let registry = FunctionOverrideRegistry::new();
        registry.set("end", OverrideKind::Alias("quit".into()));
        registry.set("quit", OverrideKind::Alias("end".into()));

        let table = registry.materialize();
        assert!(Arc::ptr_eq(&table["end"], &cmd::builtin("quit").unwrap()));
        // "end" has no builtin, so the reverse chain yields nothing
        assert!(table.get("quit").is_none());
    }

    #[test]
    fn alias_to_a_missing_slot_yields_nothing() {
        let registry = FunctionOverrideRegistry::new();
        registry.set("end", OverrideKind::Alias("flushall".into()));
        assert!(registry.materialize().get("end").is_none());
    }
}
