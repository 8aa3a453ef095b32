use super::{wrong_arity, Client, Reply, Result};
use crate::engine::Engine;

// get <key>
pub fn apply(client: &mut Client, args: &[String]) -> Result<Reply> {
    if args.len() != 1 {
        return Err(wrong_arity("get"));
    }
    Ok(Reply::BulkString(client.store().get(&args[0])?))
}
