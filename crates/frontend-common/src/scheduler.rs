//! Deferred task scheduling behind an injectable capability

use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Handle to a scheduled task. Dropping it cancels the task if it has not
/// run yet.
#[must_use = "dropping a TaskHandle cancels the scheduled task"]
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Runs a task once after a delay
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle;
}

/// Browser timers via `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, task);
        TaskHandle::new(move || drop(timeout))
    }
}

struct PendingTask {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTask>,
}

/// Deterministic scheduler whose clock only moves on [`ManualScheduler::advance`]
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks scheduled and not yet run or cancelled
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward by `by` and run every task that came due, in
    /// due order. Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = {
            let mut clock = self.clock.borrow_mut();
            clock.now += by;
            clock.now
        };

        let mut ran = 0;
        // Tasks may schedule more work, so the borrow is released before each run
        while let Some(next) = self.take_due(target) {
            (next.task)();
            ran += 1;
        }
        ran
    }

    fn take_due(&self, target: Duration) -> Option<PendingTask> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(i, _)| i)?;
        Some(clock.pending.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let id = {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.pending.push(PendingTask { id, due, task });
            id
        };

        let clock = Rc::downgrade(&self.clock);
        TaskHandle::new(move || {
            if let Some(clock) = clock.upgrade() {
                clock.borrow_mut().pending.retain(|p| p.id != id);
            }
        })
    }
}
