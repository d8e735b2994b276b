//! Deferred completion primitive.
//!
//! This module provides `Deferred`, a future that holds an already-known
//! value but refuses to deliver it until the task has yielded to the
//! scheduler once. Mock replies resolved through it keep the ordering of
//! real network I/O: the caller always observes the in-flight phase
//! before the result, on any executor.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Future completing with a preset value one scheduling yield from now.
///
/// The first poll registers a wake and returns `Pending`; the next poll
/// delivers the value. Like any future, polling again after `Ready` is a
/// contract violation and panics.
#[derive(Debug)]
pub struct Deferred<T> {
    value: Option<T>,
    yielded: bool,
}

impl<T> Deferred<T> {
    /// Create a deferred completion that will deliver `value`
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            yielded: false,
        }
    }
}

impl<T: Unpin> Future for Deferred<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let this = self.get_mut();

        if !this.yielded {
            this.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }

        Poll::Ready(
            this.value
                .take()
                .expect("Deferred polled after completion"),
        )
    }
}
