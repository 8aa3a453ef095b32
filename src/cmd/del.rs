use super::{wrong_arity, Client, Reply, Result};
use crate::engine::Engine;

// del <key> [<key> ...], replies with the number of keys removed
pub fn apply(client: &mut Client, args: &[String]) -> Result<Reply> {
    if args.is_empty() {
        return Err(wrong_arity("del"));
    }
    let mut removed = 0;
    for key in args {
        if client.store_mut().del(key)? {
            removed += 1;
        }
    }
    Ok(Reply::Integer(removed))
}
