use std::fmt;

/// Handle returned by [`CallbackSink::add`], used to remove the listener later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// An ordered collection of zero-argument listener callbacks for one event kind.
///
/// Listeners are invoked in registration order, exactly once per [`invoke`]
/// call, and receive no arguments. The list is only mutable through
/// [`add`] and [`remove`].
///
/// [`invoke`]: CallbackSink::invoke
/// [`add`]: CallbackSink::add
/// [`remove`]: CallbackSink::remove
#[derive(Default)]
pub struct CallbackSink {
    next_id: u64,
    listeners: Vec<(ListenerId, Box<dyn FnMut() + Send + Sync>)>,
}

impl CallbackSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return a handle for later removal.
    pub fn add(&mut self, listener: impl FnMut() + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered listener. Returns `false` if the handle
    /// is unknown (already removed, or from another sink).
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Run every registered listener, in registration order.
    pub fn invoke(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for CallbackSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSink")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_listener(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> impl FnMut() + Send + Sync + 'static {
        let log = Arc::clone(log);
        move || log.lock().unwrap().push(name)
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut sink = CallbackSink::new();
        sink.add(recording_listener(&log, "a"));
        sink.add(recording_listener(&log, "b"));
        sink.add(recording_listener(&log, "c"));

        sink.invoke();
        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);

        sink.invoke();
        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn removed_listener_no_longer_fires() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut sink = CallbackSink::new();
        sink.add(recording_listener(&log, "a"));
        let b = sink.add(recording_listener(&log, "b"));
        sink.add(recording_listener(&log, "c"));

        assert!(sink.remove(b));
        assert_eq!(sink.len(), 2);

        sink.invoke();
        assert_eq!(*log.lock().unwrap(), vec!["a", "c"]);
    }

    #[test]
    fn remove_unknown_id_returns_false() {
        let mut sink = CallbackSink::new();
        let id = sink.add(|| {});
        assert!(sink.remove(id));
        assert!(!sink.remove(id));
    }

    #[test]
    fn empty_sink_invokes_nothing() {
        let mut sink = CallbackSink::new();
        assert!(sink.is_empty());
        sink.invoke();
    }
}
