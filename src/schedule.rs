// SPDX-License-Identifier: PMPL-1.0-or-later

//! One-shot delayed tasks for the simulated "analyzing" and "listening"
//! phases.
//!
//! Nothing runs in the background. The frontend loop polls with the current
//! `Instant`, and the task resolves on the first poll at or after its due
//! time. Passing time in explicitly keeps tests deterministic.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum TaskState<T> {
    Pending,
    Resolved(T),
    Canceled,
}

#[derive(Debug, Clone)]
pub struct ScheduledTask<T> {
    started: Instant,
    delay: Duration,
    state: TaskState<T>,
}

impl<T> ScheduledTask<T> {
    pub fn start(now: Instant, delay: Duration) -> Self {
        Self {
            started: now,
            delay,
            state: TaskState::Pending,
        }
    }

    pub fn state(&self) -> &TaskState<T> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, TaskState::Pending)
    }

    pub fn result(&self) -> Option<&T> {
        match &self.state {
            TaskState::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn due_at(&self) -> Instant {
        self.started + self.delay
    }

    /// Fraction of the delay that has elapsed, clamped to `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if !self.is_pending() || self.delay.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.delay.as_secs_f32()).min(1.0)
    }

    /// Resolve with `produce()` if the task is pending and due. Returns
    /// `true` only on the poll that performed the resolution.
    pub fn poll(&mut self, now: Instant, produce: impl FnOnce() -> T) -> bool {
        if self.is_pending() && now >= self.due_at() {
            self.state = TaskState::Resolved(produce());
            return true;
        }
        false
    }

    /// Resolve immediately regardless of the due time. No-op unless pending.
    pub fn finish_now(&mut self, produce: impl FnOnce() -> T) -> bool {
        if self.is_pending() {
            self.state = TaskState::Resolved(produce());
            return true;
        }
        false
    }

    /// Cancel a pending task. Resolved tasks keep their result.
    pub fn cancel(&mut self) -> bool {
        if self.is_pending() {
            self.state = TaskState::Canceled;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_only_once_due() {
        let start = Instant::now();
        let mut task = ScheduledTask::start(start, Duration::from_secs(3));
        assert!(!task.poll(start + Duration::from_secs(2), || 7));
        assert!(task.is_pending());
        assert!(task.poll(start + Duration::from_secs(3), || 7));
        assert_eq!(task.result(), Some(&7));
        assert!(!task.poll(start + Duration::from_secs(4), || 8));
        assert_eq!(task.result(), Some(&7));
    }

    #[test]
    fn canceled_task_never_resolves() {
        let start = Instant::now();
        let mut task = ScheduledTask::start(start, Duration::from_millis(10));
        assert!(task.cancel());
        assert!(!task.poll(start + Duration::from_secs(1), || 1));
        assert_eq!(task.state(), &TaskState::Canceled);
        assert!(!task.finish_now(|| 1));
    }

    #[test]
    fn cancel_after_resolution_keeps_result() {
        let start = Instant::now();
        let mut task = ScheduledTask::start(start, Duration::ZERO);
        assert!(task.poll(start, || "done"));
        assert!(!task.cancel());
        assert_eq!(task.result(), Some(&"done"));
    }

    #[test]
    fn progress_is_clamped() {
        let start = Instant::now();
        let task: ScheduledTask<()> = ScheduledTask::start(start, Duration::from_secs(4));
        assert_eq!(task.progress(start), 0.0);
        assert!((task.progress(start + Duration::from_secs(1)) - 0.25).abs() < 1e-6);
        assert_eq!(task.progress(start + Duration::from_secs(10)), 1.0);
    }
}
