use crate::utils::sleep_ms;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

pub const DEFAULT_THROTTLE_MS: u32 = 250;

/// Single-slot guard: armed while a throttled call is waiting to run.
#[derive(Debug, Clone, Default)]
pub struct ThrottleGate {
    pending: Rc<Cell<bool>>,
}

impl ThrottleGate {
    /// Arms the gate. Returns `false` if it was already armed.
    pub fn try_arm(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn release(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Runs a callback at most once per interval. The first call in a quiet period
/// is delayed by the interval; calls made while it waits are dropped.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: u32,
    gate: ThrottleGate,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            gate: ThrottleGate::default(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Arms the throttle and returns a future that waits out the interval
    /// and then runs `f`. Returns `None` when a call is already pending.
    pub fn defer<F>(&self, f: F) -> Option<impl Future<Output = ()> + 'static>
    where
        F: FnOnce() + 'static,
    {
        if !self.gate.try_arm() {
            return None;
        }
        let gate = self.gate.clone();
        let interval_ms = self.interval_ms;
        Some(async move {
            sleep_ms(interval_ms).await;
            gate.release();
            f();
        })
    }

    /// Schedules `f` on a browser timer. Returns `false` when a call is
    /// already pending and `f` was dropped.
    #[cfg(target_arch = "wasm32")]
    pub fn call<F>(&self, f: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        if !self.gate.try_arm() {
            return false;
        }
        let gate = self.gate.clone();
        gloo_timers::callback::Timeout::new(self.interval_ms, move || {
            gate.release();
            f();
        })
        .forget();
        true
    }

    /// Schedules `f` as a task on the current Dioxus scope. Returns `false`
    /// when a call is already pending and `f` was dropped.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn call<F>(&self, f: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        match self.defer(f) {
            Some(task) => {
                dioxus::prelude::spawn(task);
                true
            }
            None => false,
        }
    }
}
