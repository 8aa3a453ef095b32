use super::{Error, ErrorKind, Result};

// message prefix of a redirect reply like "MOVED 14190 127.0.0.1:6379"
const MOVED_PREFIX: &str = "MOVED ";

// the server message carried by the error, if it is a reply error
fn reply_message(error: &Error) -> Option<&str> {
    match error.kind() {
        ErrorKind::Reply(message) => Some(message),
        _ => None,
    }
}

// true if the error was raised as a store reply error
pub fn is_reply_error(error: &Error) -> bool {
    reply_message(error).is_some()
}

// True if the error indicates that the key attempted was moved to a new
// host and port.
pub fn is_moved_error(error: &Error) -> bool {
    reply_message(error).map_or(false, |m| m.starts_with(MOVED_PREFIX))
}

// Extract the new host and port from a moved reply error. The target is
// the substring after the last space, host and port joined by a colon.
pub fn resolve_host_and_port_from_moved_error(error: &Error) -> Result<(String, String)> {
    let message = match reply_message(error) {
        Some(m) if m.starts_with(MOVED_PREFIX) => m,
        _ => return Err(ErrorKind::UnexpectedMovedError(error.to_string()).into()),
    };

    let target = message.rsplit(' ').next().unwrap_or("");
    let mut parts = target.splitn(2, ':');
    let host = parts.next().unwrap_or("").to_string();
    let port = parts.next().unwrap_or("").to_string();
    Ok((host, port))
}
