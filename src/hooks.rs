use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Observer notified when the user stops typing.
///
/// The input listener arms a debounce timer on every change; observers
/// fire when it expires. Nothing is registered by default, so the page
/// behaves exactly as before until a typing indicator lands.
pub trait TypingObserver {
    fn typing_paused(&self);
}

/// Notifier invoked once at initialization when the page URL carries the
/// `sent` confirmation flag from the previous submission.
pub trait SubmitNotifier {
    fn message_sent(&self);
}

/// Debounce over input activity shared by all typing observers.
///
/// Each call to [`note_activity`](Self::note_activity) discards the
/// pending timer and arms a fresh one; dropping the old handle cancels it.
pub struct TypingMonitor {
    idle_ms: u32,
    observers: Rc<RefCell<Vec<Rc<dyn TypingObserver>>>>,
    pending: Option<Timeout>,
}

impl TypingMonitor {
    pub fn new(idle_ms: u32) -> Self {
        Self {
            idle_ms,
            observers: Rc::new(RefCell::new(Vec::new())),
            pending: None,
        }
    }

    pub fn add_observer(&mut self, observer: Rc<dyn TypingObserver>) {
        self.observers.borrow_mut().push(observer);
    }

    /// Restart the idle timer after a keystroke
    pub fn note_activity(&mut self) {
        // Dropping the previous handle cancels its pending callback
        self.pending.take();

        let observers = self.observers.clone();
        self.pending = Some(Timeout::new(self.idle_ms, move || {
            for observer in observers.borrow().iter() {
                observer.typing_paused();
            }
        }));
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}
