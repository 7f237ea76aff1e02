use std::cell::Cell;
use std::rc::Rc;

use super::*;

struct CountingHandle(Rc<Cell<u32>>);

impl Detach for CountingHandle {
    fn detach(self) {
        self.0.set(self.0.get() + 1);
    }
}

fn guard() -> (ListenerGuard<CountingHandle>, Rc<Cell<u32>>) {
    let detached = Rc::new(Cell::new(0));
    (ListenerGuard::new(CountingHandle(Rc::clone(&detached))), detached)
}

#[test]
fn new_guard_does_not_detach() {
    let (_guard, detached) = guard();
    assert_eq!(detached.get(), 0);
}

#[test]
fn release_detaches_once() {
    let (mut guard, detached) = guard();
    guard.release();
    guard.release();
    assert_eq!(detached.get(), 1);
}

#[test]
fn drop_after_release_does_not_detach_again() {
    let (mut guard, detached) = guard();
    guard.release();
    drop(guard);
    assert_eq!(detached.get(), 1);
}

#[test]
fn drop_without_release_detaches() {
    let (guard, detached) = guard();
    drop(guard);
    assert_eq!(detached.get(), 1);
}

#[test]
fn each_guard_owns_its_own_listener() {
    let (mut first, first_detached) = guard();
    let (second, second_detached) = guard();
    first.release();
    assert_eq!(first_detached.get(), 1);
    assert_eq!(second_detached.get(), 0);
    drop(second);
    assert_eq!(second_detached.get(), 1);
}
