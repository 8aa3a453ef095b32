pub use adapter::{Adapter, ADAPTEE};
pub use client::{Client, EndArg, QuitCallback};
pub use cmd::{CmdFn, SLOTS};
pub use engine::{Engine, MemStore};
pub use error::{Error, ErrorKind, Result};
pub use events::{Event, Listener};
pub use moved::{is_moved_error, is_reply_error, resolve_host_and_port_from_moved_error};
pub use options::{ClientOptions, DEFAULT_HOST, DEFAULT_PORT};
pub use registry::{FunctionOverrideRegistry, OverrideAction, OverrideKind};
pub use reply::Reply;

mod adapter;
mod client;
mod cmd;
mod engine;
mod error;
mod events;
mod moved;
mod options;
mod registry;
mod reply;
