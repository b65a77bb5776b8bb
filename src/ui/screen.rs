//! Screen driver - owns the current snapshot and tells the renderer
//! when it changes.

use crate::share::ShareSink;
use crate::ui::state::{reduce, Event, Snapshot};

/// Renderer-side subscriber to snapshot changes.
pub trait Observer {
    fn on_snapshot(&mut self, snapshot: &Snapshot);
}

impl<F: FnMut(&Snapshot)> Observer for F {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// The calculator screen: one snapshot, one observer.
pub struct Screen<O> {
    snapshot: Snapshot,
    observer: O,
}

impl<O: Observer> Screen<O> {
    /// Create the screen with its initial snapshot and draw it once.
    pub fn new(mut observer: O) -> Self {
        let snapshot = Snapshot::new();
        observer.on_snapshot(&snapshot);
        Self { snapshot, observer }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Apply an event. The observer is called if the snapshot changed or
    /// carries a fresh notice.
    pub fn dispatch(&mut self, event: Event) {
        debug!("event: {}", event);

        let next = reduce(self.snapshot.clone(), event);
        if next == self.snapshot && next.notice.is_none() {
            return;
        }

        if next.notice.is_some() {
            warn!("calculation failed: {}", next.notice);
        } else if event == Event::Trigger {
            info!("bmi {} ({})", next.result.value, next.result.category);
        }

        self.snapshot = next;
        self.observer.on_snapshot(&self.snapshot);
    }

    /// Send the visible result to `sink`. Returns `false` if nothing is shown.
    pub fn share<S: ShareSink>(&self, sink: &mut S) -> bool {
        match self.snapshot.share_message() {
            Some(text) => {
                sink.share(text.as_str());
                true
            }
            None => false,
        }
    }
}
