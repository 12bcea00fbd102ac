//! Common freshet logging infrastructure.
//!
//! A [`Logger`] is a cheaply cloneable handle through which typed events are
//! recorded. Events are stamped with the time elapsed since the logger's epoch
//! and buffered; a caller-supplied action drains the buffer when it fills, on
//! [`Logger::flush`], and when the last handle is dropped. A [`Registry`] holds
//! named loggers of arbitrary event types behind type erasure, so independent
//! components can discover the loggers they should write to.

#![forbid(missing_docs)]

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Number of buffered events at which the action is invoked.
const BUFFER_CAPACITY: usize = 1024;

/// A registry of named loggers.
///
/// All loggers created through [`Registry::insert`] share the registry's epoch,
/// so their event timestamps are mutually comparable.
pub struct Registry {
    /// A map from names to typed loggers, with a type-erased flush handle.
    map: HashMap<String, (Box<dyn Any>, Box<dyn Flush>)>,
    /// Instant at which the registry was created.
    epoch: Instant,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            epoch: Instant::now(),
        }
    }

    /// Binds `name` to a new logger draining into `action`, returning any
    /// logger previously bound to the name.
    pub fn insert<E: 'static, F: FnMut(&Duration, &mut Vec<(Duration, E)>) + 'static>(
        &mut self,
        name: &str,
        action: F,
    ) -> Option<Box<dyn Any>> {
        let logger = Logger::with_epoch(self.epoch, action);
        self.insert_logger(name, logger)
    }

    /// Binds `name` to `logger`, returning any logger previously bound to the name.
    pub fn insert_logger<E: 'static>(
        &mut self,
        name: &str,
        logger: Logger<E>,
    ) -> Option<Box<dyn Any>> {
        self.map
            .insert(name.to_owned(), (Box::new(logger.clone()), Box::new(logger)))
            .map(|(any, _)| any)
    }

    /// Removes the binding for `name`, if it exists, and returns it.
    ///
    /// The returned handle keeps the logger alive; dropping it performs the
    /// logger's final flush once no other handles remain.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Any>> {
        self.map.remove(name).map(|(any, _)| any)
    }

    /// Retrieves the logger bound to `name`, if one exists with event type `E`.
    pub fn get<E: 'static>(&self, name: &str) -> Option<Logger<E>> {
        self.map
            .get(name)
            .and_then(|(any, _)| any.downcast_ref::<Logger<E>>())
            .map(Logger::clone)
    }

    /// Time elapsed since the registry was created.
    pub fn time(&self) -> Duration {
        self.epoch.elapsed()
    }

    /// Flushes all registered loggers.
    pub fn flush(&self) {
        for (_, flush) in self.map.values() {
            flush.flush();
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Types that can drain their buffered events on demand.
pub trait Flush {
    /// Drains any buffered events into the underlying action.
    fn flush(&self);
}

/// A handle for recording typed events.
///
/// Cloning a logger is cheap and clones share the same buffer; the supplied
/// action runs when the buffer reaches its watermark, on [`Logger::flush`],
/// and once more when the last handle is dropped. The final invocation on drop
/// always presents an empty buffer, which sinks can use to finalize.
pub struct Logger<E> {
    inner: Rc<RefCell<LoggerInner<E>>>,
}

impl<E> Clone for Logger<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Debug for Logger<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish()
    }
}

struct LoggerInner<E> {
    /// Instant against which event times are measured.
    epoch: Instant,
    /// Events stamped with their elapsed time, awaiting the action.
    buffer: Vec<(Duration, E)>,
    /// Drains stamped events; the buffer is cleared after each invocation.
    action: Box<dyn FnMut(&Duration, &mut Vec<(Duration, E)>)>,
}

impl<E> Logger<E> {
    /// Creates a logger whose epoch is the moment of this call.
    pub fn new<F: FnMut(&Duration, &mut Vec<(Duration, E)>) + 'static>(action: F) -> Self {
        Self::with_epoch(Instant::now(), action)
    }

    /// Creates a logger measuring event times against the supplied epoch.
    pub fn with_epoch<F: FnMut(&Duration, &mut Vec<(Duration, E)>) + 'static>(
        epoch: Instant,
        action: F,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LoggerInner {
                epoch,
                buffer: Vec::with_capacity(BUFFER_CAPACITY),
                action: Box::new(action),
            })),
        }
    }

    /// Records an event, stamped with the time elapsed since the epoch.
    pub fn log<S: Into<E>>(&self, event: S) {
        let mut inner = self.inner.borrow_mut();
        let elapsed = inner.epoch.elapsed();
        inner.push(elapsed, event.into());
    }

    /// Records a sequence of events sharing one timestamp.
    pub fn log_many<I>(&self, events: I)
    where
        I: IntoIterator,
        I::Item: Into<E>,
    {
        let mut inner = self.inner.borrow_mut();
        let elapsed = inner.epoch.elapsed();
        for event in events {
            inner.push(elapsed, event.into());
        }
    }

    /// Drains any buffered events into the action.
    pub fn flush(&self) {
        self.inner.borrow_mut().flush();
    }
}

impl<E> Flush for Logger<E> {
    fn flush(&self) {
        Logger::flush(self);
    }
}

impl<E> LoggerInner<E> {
    fn push(&mut self, elapsed: Duration, event: E) {
        self.buffer.push((elapsed, event));
        if self.buffer.len() >= BUFFER_CAPACITY {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let elapsed = self.epoch.elapsed();
            (self.action)(&elapsed, &mut self.buffer);
            self.buffer.clear();
        }
    }
}

impl<E> Drop for LoggerInner<E> {
    fn drop(&mut self) {
        self.flush();
        // One final call with an empty buffer marks the end of the event stream.
        let elapsed = self.epoch.elapsed();
        let mut empty = Vec::new();
        (self.action)(&elapsed, &mut empty);
    }
}
