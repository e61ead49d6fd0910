//! Deferred one-shot tasks, scheduled against the raw clock.
//!
//! Slow motion stretches the scaled clock, so anything that must happen
//! "in N real seconds" is queued here instead of being counted down
//! inside a system: releasing a lingering death cue, or restoring time
//! scale after a Time bonus.

use popshot_core::events::SoundId;

/// What to do when a task comes due. Actions are returned to the engine
/// rather than executed here, so this module needs no access to the
/// ledger or the time controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskAction {
    /// Release a lingering sound instance.
    ReleaseSound(SoundId),
    /// End a Time bonus by easing the time scale back to normal.
    RestoreTimeScale,
}

#[derive(Debug, Clone, Copy)]
struct Task {
    due_at_secs: f32,
    action: TaskAction,
}

#[derive(Debug, Default)]
pub struct DeferredTasks {
    tasks: Vec<Task>,
}

impl DeferredTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `action` to run once the raw clock reaches `due_at_secs`.
    pub fn schedule(&mut self, due_at_secs: f32, action: TaskAction) {
        self.tasks.push(Task {
            due_at_secs,
            action,
        });
    }

    /// Drops any pending time scale restore. A fresh Time bonus supersedes
    /// the running one, so the old restore must not fire mid-bonus.
    pub fn cancel_time_restores(&mut self) {
        self.tasks
            .retain(|task| task.action != TaskAction::RestoreTimeScale);
    }

    /// Removes and returns every task due at `now`, preserving schedule
    /// order among the returned actions.
    pub fn run_due(&mut self, now_secs: f32) -> Vec<TaskAction> {
        let pending = std::mem::take(&mut self.tasks);
        let mut due = Vec::new();
        for task in pending {
            if task.due_at_secs <= now_secs {
                due.push(task.action);
            } else {
                self.tasks.push(task);
            }
        }
        due
    }

    /// Removes and returns everything, due or not. Teardown runs the
    /// returned actions immediately so no task survives the level.
    pub fn flush(&mut self) -> Vec<TaskAction> {
        self.tasks.drain(..).map(|task| task.action).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
