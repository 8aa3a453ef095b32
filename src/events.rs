use std::collections::HashMap;

// Lifecycle events passed through from the underlying store. The adapter
// only subscribes listeners; it defines no events of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Connect,
    Ready,
    Reconnecting,
    Error,
    ClientError,
    End,
    Close,
}

impl Event {
    // the event name as the reference client spells it
    pub fn name(&self) -> &'static str {
        match self {
            Event::Connect => "connect",
            Event::Ready => "ready",
            Event::Reconnecting => "reconnecting",
            Event::Error => "error",
            Event::ClientError => "clientError",
            Event::End => "end",
            Event::Close => "close",
        }
    }
}

pub type Listener = Box<dyn FnMut() + Send>;

// listener table for a single client
pub(crate) struct Listeners {
    map: HashMap<Event, Vec<Listener>>,
}

impl Listeners {
    pub fn new() -> Self {
        Listeners {
            map: HashMap::new(),
        }
    }

    pub fn on(&mut self, event: Event, listener: Listener) {
        self.map.entry(event).or_insert_with(Vec::new).push(listener);
    }

    pub fn emit(&mut self, event: Event) {
        if let Some(list) = self.map.get_mut(&event) {
            for listener in list.iter_mut() {
                listener();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn event_names() {
        assert_eq!(Event::Connect.name(), "connect");
        assert_eq!(Event::ClientError.name(), "clientError");
        assert_eq!(Event::Close.name(), "close");
    }

    #[test]
    fn emit_reaches_every_listener_for_the_event() {
        let mut listeners = Listeners::new();
        let hits = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let hits = hits.clone();
            listeners.on(
                Event::End,
                Box::new(move || {
                    hits.fetch_add(1, Ordering::SeqCst);
                }),
            );
        }

        listeners.emit(Event::End);
        listeners.emit(Event::Close);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
