use std::collections::HashMap;

use super::adapter::Adapter;
use super::cmd::{self, CmdFn};
use super::engine::MemStore;
use super::events::{Event, Listener, Listeners};
use super::options::{ClientOptions, DEFAULT_HOST, DEFAULT_PORT};
use super::registry::OverrideKind;
use super::reply::Reply;
use super::{Error, ErrorKind, Result};

// callback invoked with the quit outcome when end is given one
pub type QuitCallback = Box<dyn FnOnce(&Result<Reply>) + Send>;

// the argument shapes end accepts
pub enum EndArg {
    // the flush flag; dropped before delegating, since quit cannot use it
    Flush(bool),

    // a completion callback, forwarded to quit unchanged
    Callback(QuitCallback),
}

// A mock store instance adapted to the reference client surface. The
// options are set once at construction and never mutated; the function
// table is the registry materialization from construction time.
pub struct Client {
    store: MemStore,
    options: Option<ClientOptions>,
    manually_closing: bool,
    functions: HashMap<String, CmdFn>,
    listeners: Listeners,
    adapter: Adapter,
}

impl Client {
    pub(crate) fn new(
        adapter: Adapter,
        options: Option<ClientOptions>,
        functions: HashMap<String, CmdFn>,
    ) -> Self {
        Client {
            store: MemStore::new(),
            options,
            manually_closing: false,
            functions,
            listeners: Listeners::new(),
            adapter,
        }
    }

    pub(crate) fn store(&self) -> &MemStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut MemStore {
        &mut self.store
    }

    // the adapter that produced this client
    pub fn get_adapter(&self) -> &Adapter {
        &self.adapter
    }

    // the options this client was constructed with
    pub fn get_options(&self) -> Option<&ClientOptions> {
        self.options.as_ref()
    }

    // true once a close style operation has been invoked
    pub fn is_closing(&self) -> bool {
        self.manually_closing
    }

    // host and port this client points at, defaults filled in
    pub fn resolve_host_and_port(&self) -> (String, u16) {
        match &self.options {
            Some(options) => (
                options
                    .host
                    .clone()
                    .unwrap_or_else(|| DEFAULT_HOST.to_string()),
                options.port.unwrap_or(DEFAULT_PORT),
            ),
            None => (DEFAULT_HOST.to_string(), DEFAULT_PORT),
        }
    }

    pub fn on(&mut self, event: Event, listener: Listener) {
        self.listeners.on(event, listener);
    }

    // Subscribe the given listeners for the lifecycle events, in event
    // order; absent slots are skipped.
    #[allow(clippy::too_many_arguments)]
    pub fn add_event_listeners(
        &mut self,
        on_connect: Option<Listener>,
        on_ready: Option<Listener>,
        on_reconnecting: Option<Listener>,
        on_error: Option<Listener>,
        on_client_error: Option<Listener>,
        on_end: Option<Listener>,
        on_close: Option<Listener>,
    ) {
        let slots = [
            (Event::Connect, on_connect),
            (Event::Ready, on_ready),
            (Event::Reconnecting, on_reconnecting),
            (Event::Error, on_error),
            (Event::ClientError, on_client_error),
            (Event::End, on_end),
            (Event::Close, on_close),
        ];
        for (event, listener) in slots {
            if let Some(listener) = listener {
                self.listeners.on(event, listener);
            }
        }
    }

    pub(crate) fn emit(&mut self, event: Event) {
        self.listeners.emit(event);
    }

    // active override for the slot, else the builtin
    pub fn get_function(&self, name: &str) -> Option<CmdFn> {
        self.functions
            .get(name)
            .cloned()
            .or_else(|| cmd::builtin(name))
    }

    // Override a slot on this client immediately and record the action for
    // clients created afterward. An alias resolves through the current
    // effective table of this client.
    pub fn set_function(&mut self, name: &str, kind: OverrideKind) {
        match &kind {
            OverrideKind::Fixed(f) => {
                self.functions.insert(name.to_string(), f.clone());
            }
            OverrideKind::Alias(original) => {
                if let Some(f) = self.get_function(original) {
                    self.functions.insert(name.to_string(), f);
                }
            }
        }
        self.adapter.registry().set(name, kind);
    }

    // drop any override for the slot, here and for future clients
    pub fn delete_function(&mut self, name: &str) {
        self.functions.remove(name);
        self.adapter.registry().delete(name);
    }

    // dispatch a command through the effective function table
    pub fn call(&mut self, name: &str, args: &[String]) -> Result<Reply> {
        let f = self
            .get_function(name)
            .ok_or_else(|| Error::from(ErrorKind::UnknownCommand(name.to_string())))?;
        (*f)(self, args)
    }

    pub fn get(&mut self, key: &str) -> Result<Option<String>> {
        match self.call("get", &[key.to_string()])? {
            Reply::BulkString(val) => Ok(val),
            other => Err(unexpected_reply("get", &other)),
        }
    }

    pub fn set(&mut self, key: &str, val: &str) -> Result<()> {
        self.call("set", &[key.to_string(), val.to_string()])?;
        Ok(())
    }

    pub fn del(&mut self, key: &str) -> Result<i64> {
        match self.call("del", &[key.to_string()])? {
            Reply::Integer(n) => Ok(n),
            other => Err(unexpected_reply("del", &other)),
        }
    }

    pub fn ping(&mut self) -> Result<Reply> {
        self.call("ping", &[])
    }

    // quit, invoking the callback with the outcome when one is given
    pub fn quit(&mut self, callback: Option<QuitCallback>) -> Result<Reply> {
        let result = self.call("quit", &[]);
        if let Some(callback) = callback {
            callback(&result);
        }
        result
    }

    // End adaptation for a store whose close method is named quit: a flush
    // flag (or no argument) is dropped, a callback is forwarded unchanged,
    // and the closing flag is set before delegating. Safe to call
    // repeatedly.
    pub fn end(&mut self, arg: Option<EndArg>) -> Result<Reply> {
        self.manually_closing = true;
        match arg {
            Some(EndArg::Callback(callback)) => self.quit(Some(callback)),
            Some(EndArg::Flush(_)) | None => self.quit(None),
        }
    }
}

fn unexpected_reply(name: &str, reply: &Reply) -> Error {
    Error::from(ErrorKind::StringError(format!(
        "unexpected reply to '{}': {}",
        name, reply
    )))
}
