use super::{Client, Reply, Result};
use crate::events::Event;

// quit closes the connection and emits end then close
pub fn apply(client: &mut Client, _args: &[String]) -> Result<Reply> {
    client.store_mut().close();
    client.emit(Event::End);
    client.emit(Event::Close);
    Ok(Reply::SimpleString("OK".into()))
}
