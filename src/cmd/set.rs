use super::{wrong_arity, Client, Reply, Result};
use crate::engine::Engine;

// set <key> <value>
pub fn apply(client: &mut Client, args: &[String]) -> Result<Reply> {
    if args.len() != 2 {
        return Err(wrong_arity("set"));
    }
    client.store_mut().set(&args[0], &args[1])?;
    Ok(Reply::SimpleString("OK".into()))
}
