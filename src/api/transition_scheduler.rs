use serde::{Deserialize, Serialize};
use tracing::trace;

/// Handle of one scheduled transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u64);

impl TaskId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TaskStatus {
    Idle,
    Running { task: TaskId, progress: f64 },
    /// Reported once, by the first poll at or after the task's end time.
    Finished { task: TaskId },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScheduledTask {
    id: TaskId,
    started_at_ms: f64,
    duration_ms: f64,
}

/// Holds at most one running transition.
///
/// Scheduling a new task cancels the running one; polls only ever report the
/// newest task, so callbacks of a superseded task never fire.
#[derive(Debug, Clone, Default)]
pub struct TransitionScheduler {
    next_task: u64,
    active: Option<ScheduledTask>,
}

impl TransitionScheduler {
    /// Starts a task and returns it together with the task it cancelled.
    pub fn schedule(&mut self, now_ms: f64, duration_ms: f64) -> (TaskId, Option<TaskId>) {
        self.next_task += 1;
        let id = TaskId(self.next_task);
        let cancelled = self.active.replace(ScheduledTask {
            id,
            started_at_ms: now_ms,
            duration_ms,
        });
        if let Some(previous) = cancelled {
            trace!(
                cancelled = previous.id.raw(),
                task = id.raw(),
                "transition superseded"
            );
        }
        (id, cancelled.map(|task| task.id))
    }

    pub fn cancel(&mut self) -> Option<TaskId> {
        self.active.take().map(|task| task.id)
    }

    #[must_use]
    pub fn active_task(&self) -> Option<TaskId> {
        self.active.map(|task| task.id)
    }

    #[must_use]
    pub fn is_active(&self, task: TaskId) -> bool {
        self.active_task() == Some(task)
    }

    /// Progress of the active task at `now_ms`, in `[0, 1]`.
    ///
    /// A clock reading before the start time counts as zero progress; a zero
    /// duration finishes on the first poll.
    pub fn poll(&mut self, now_ms: f64) -> TaskStatus {
        let Some(task) = self.active else {
            return TaskStatus::Idle;
        };
        let progress = if task.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - task.started_at_ms) / task.duration_ms).clamp(0.0, 1.0)
        };
        if progress >= 1.0 {
            self.active = None;
            TaskStatus::Finished { task: task.id }
        } else {
            TaskStatus::Running {
                task: task.id,
                progress,
            }
        }
    }
}
