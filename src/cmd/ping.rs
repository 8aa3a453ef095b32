use super::{wrong_arity, Client, Reply, Result};

// ping [<message>]
pub fn apply(_client: &mut Client, args: &[String]) -> Result<Reply> {
    match args {
        [] => Ok(Reply::SimpleString("PONG".into())),
        [message] => Ok(Reply::BulkString(Some(message.clone()))),
        _ => Err(wrong_arity("ping")),
    }
}
