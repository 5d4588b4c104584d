use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct RecordingHost {
    next: u64,
    live: HashMap<ListenerId, WindowEvent>,
    removed: Vec<ListenerId>,
}

impl ListenerHost for RecordingHost {
    fn add_listener(&mut self, event: WindowEvent) -> ListenerId {
        self.next += 1;
        let id = ListenerId(self.next);
        self.live.insert(id, event);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.live.remove(&id);
        self.removed.push(id);
    }
}

fn host() -> Rc<RefCell<RecordingHost>> {
    Rc::new(RefCell::new(RecordingHost::default()))
}

#[test]
fn attach_registers_move_and_up() {
    let h = host();
    let guard = WindowListeners::attach(Rc::clone(&h));
    assert!(guard.is_attached());
    let mut events: Vec<_> = h.borrow().live.values().copied().collect();
    events.sort_by_key(|e| matches!(e, WindowEvent::PointerUp));
    assert_eq!(events, vec![WindowEvent::PointerMove, WindowEvent::PointerUp]);
}

#[test]
fn drop_releases_all_listeners() {
    let h = host();
    {
        let _guard = WindowListeners::attach(Rc::clone(&h));
        assert_eq!(h.borrow().live.len(), 2);
    }
    assert!(h.borrow().live.is_empty());
    assert_eq!(h.borrow().removed.len(), 2);
}

#[test]
fn detach_is_idempotent() {
    let h = host();
    let mut guard = WindowListeners::attach(Rc::clone(&h));
    guard.detach();
    guard.detach();
    assert!(!guard.is_attached());
    drop(guard);
    assert_eq!(h.borrow().removed.len(), 2);
}

#[test]
fn instances_release_only_their_own_listeners() {
    let h = host();
    let first = WindowListeners::attach(Rc::clone(&h));
    let second = WindowListeners::attach(Rc::clone(&h));
    assert_eq!(h.borrow().live.len(), 4);
    drop(first);
    assert_eq!(h.borrow().live.len(), 2);
    assert!(second.is_attached());
    drop(second);
    assert!(h.borrow().live.is_empty());
}
