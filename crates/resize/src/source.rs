//! Window-level pointer listener registry.
//!
//! The shell feeds every pointer event into one `PointerSource`, which
//! fans it out to whatever listeners are attached for that event kind.
//! A listener stays attached for as long as its [`Subscription`] lives.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use termshell_core::{PointerEvent, PointerKind};

type Listener = Rc<dyn Fn(&PointerEvent)>;

/// Identifier of an attached listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, PointerKind, Listener)>,
    attach_count: usize,
    detach_count: usize,
}

impl Registry {
    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(listener_id, _, _)| *listener_id == id)
    }

    /// Unregister `id`, handing the listener back so the caller can drop
    /// it after releasing the borrow.
    fn remove(&mut self, id: ListenerId) -> Option<Listener> {
        let index = self
            .listeners
            .iter()
            .position(|(listener_id, _, _)| *listener_id == id)?;
        self.detach_count += 1;
        Some(self.listeners.remove(index).2)
    }
}

/// Global pointer event source (single-threaded, cheap to clone).
#[derive(Clone, Default)]
pub struct PointerSource {
    registry: Rc<RefCell<Registry>>,
}

impl PointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener for `kind` events.
    ///
    /// The listener is detached when the returned subscription is dropped.
    #[must_use = "dropping the subscription detaches the listener immediately"]
    pub fn attach(
        &self,
        kind: PointerKind,
        listener: impl Fn(&PointerEvent) + 'static,
    ) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, kind, Rc::new(listener)));
        registry.attach_count += 1;

        Subscription {
            id,
            kind,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every listener attached for its kind, in attach
    /// order. Returns the number of listeners invoked.
    ///
    /// Listeners may attach or detach while the event is being delivered.
    /// A listener detached by an earlier one is skipped; listeners attached
    /// during delivery first see the next event.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let targets: Vec<(ListenerId, Listener)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, kind, _)| *kind == event.kind)
            .map(|(id, _, listener)| (*id, Rc::clone(listener)))
            .collect();

        let mut invoked = 0;
        for (id, listener) in targets {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            listener(event);
            invoked += 1;
        }
        invoked
    }

    /// Number of currently attached listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Number of listeners attached for `kind`.
    pub fn listener_count_for(&self, kind: PointerKind) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, listener_kind, _)| *listener_kind == kind)
            .count()
    }

    /// Total attach calls over the source's lifetime.
    pub fn attach_count(&self) -> usize {
        self.registry.borrow().attach_count
    }

    /// Total detaches over the source's lifetime.
    pub fn detach_count(&self) -> usize {
        self.registry.borrow().detach_count
    }
}

impl fmt::Debug for PointerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("PointerSource")
            .field("listeners", &registry.listeners.len())
            .field("attach_count", &registry.attach_count)
            .field("detach_count", &registry.detach_count)
            .finish()
    }
}

/// Attached listener. Detaches on drop.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    kind: PointerKind,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    /// Whether the listener is still registered with a live source.
    pub fn is_attached(&self) -> bool {
        self.registry
            .upgrade()
            .map(|registry| registry.borrow().contains(self.id))
            .unwrap_or(false)
    }

    /// Detach now. Equivalent to dropping the subscription.
    pub fn detach(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let listener = registry.borrow_mut().remove(self.id);
            drop(listener);
        }
    }
}
