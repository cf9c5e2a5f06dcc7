//! Day planner: slices a task backlog into alternating focus/break blocks.
//!
//! The planner is a pure function over the task list, the preferences, and a
//! clock instant:
//! - Pending tasks are ordered by due date, then optionally re-ordered by
//!   difficulty bias
//! - Each task gets one focus block followed by one break block
//! - The plan is capped at [`MAX_PLAN_BLOCKS`] blocks for display readability
//!
//! It never fails: absent or invalid preferences and empty backlogs produce
//! an empty plan, and any date arithmetic overflow truncates the plan at the
//! last valid block.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

use crate::prefs::{DifficultyBias, Preferences};
use crate::task::Task;

/// Hard cap on blocks per plan (4 focus + 4 break).
pub const MAX_PLAN_BLOCKS: usize = 8;

/// Kind of plan block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Contiguous span dedicated to one task
    Focus,
    /// Rest span following a focus block
    Break,
}

/// A single time block in a plan.
///
/// `id` is derived from the source task id, the block kind, and the start
/// instant, so rebuilding the same plan at the same instant yields the same
/// ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanBlock {
    pub id: String,
    pub kind: BlockKind,
    /// Local wall-clock start, formatted HH:MM.
    pub start_time: String,
    /// Local wall-clock end, formatted HH:MM.
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate_mins: Option<u32>,
}

/// Ordered sequence of blocks for one scheduling request.
///
/// Insertion order is chronological order. Plans are ephemeral: recomputed on
/// every request, never persisted or mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub blocks: Vec<PlanBlock>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

/// Filter to pending tasks and order them for scheduling.
///
/// Primary order is due date ascending with missing due dates last. An
/// easy-first or hard-first bias then re-sorts the whole list by difficulty,
/// overriding the due-date order rather than breaking ties within it; the
/// stable sort keeps the due-date order only between tasks of equal
/// difficulty.
fn sort_pending(tasks: &[Task], bias: DifficultyBias) -> Vec<Task> {
    let mut pending: Vec<Task> = tasks.iter().filter(|t| t.is_pending()).cloned().collect();

    pending.sort_by_key(|t| t.due.map(|d| d.timestamp_millis()).unwrap_or(i64::MAX));

    match bias {
        DifficultyBias::EasyFirst => pending.sort_by_key(|t| t.difficulty),
        DifficultyBias::HardFirst => pending.sort_by_key(|t| std::cmp::Reverse(t.difficulty)),
        DifficultyBias::Balanced => {}
    }

    pending
}

fn format_clock(instant: DateTime<Local>) -> String {
    instant.format("%H:%M").to_string()
}

/// Build a plan starting from an explicit clock instant.
///
/// Pure and idempotent for fixed inputs; owns no shared state, so concurrent
/// callers are safe. Returns an empty plan when preferences are absent or
/// invalid, or when no tasks are pending.
pub fn build_plan_at(tasks: &[Task], prefs: Option<&Preferences>, now: DateTime<Local>) -> Plan {
    let Some(prefs) = prefs else {
        return Plan::default();
    };
    if !prefs.is_valid() {
        return Plan::default();
    }
    let (Some(focus), Some(brk)) = (
        Duration::try_minutes(prefs.focus_block_mins),
        Duration::try_minutes(prefs.break_mins),
    ) else {
        return Plan::default();
    };

    let mut blocks = Vec::new();
    let mut cursor = now;

    for task in sort_pending(tasks, prefs.difficulty_bias) {
        let Some(focus_end) = cursor.checked_add_signed(focus) else {
            break;
        };
        blocks.push(PlanBlock {
            id: format!("{}-focus-{}", task.id, cursor.timestamp_millis()),
            kind: BlockKind::Focus,
            start_time: format_clock(cursor),
            end_time: format_clock(focus_end),
            task_id: Some(task.id.clone()),
            task_title: Some(task.title.clone()),
            estimate_mins: Some(task.estimate_mins),
        });
        cursor = focus_end;
        if blocks.len() >= MAX_PLAN_BLOCKS {
            break;
        }

        let Some(break_end) = cursor.checked_add_signed(brk) else {
            break;
        };
        blocks.push(PlanBlock {
            id: format!("{}-break-{}", task.id, cursor.timestamp_millis()),
            kind: BlockKind::Break,
            start_time: format_clock(cursor),
            end_time: format_clock(break_end),
            task_id: None,
            task_title: None,
            estimate_mins: None,
        });
        cursor = break_end;
        if blocks.len() >= MAX_PLAN_BLOCKS {
            break;
        }
    }

    Plan { blocks }
}

/// Build a plan starting from the current wall-clock instant.
pub fn build_plan(tasks: &[Task], prefs: Option<&Preferences>) -> Plan {
    build_plan_at(tasks, prefs, Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
    }

    fn pending(id: &str, difficulty: u8) -> Task {
        Task::new(id, format!("Task {id}"), 30).with_difficulty(difficulty)
    }

    #[test]
    fn test_balanced_plan_orders_by_due_date() {
        let prefs = Preferences::default();
        let tasks = vec![
            pending("a", 3).with_due(Utc::now() + Duration::days(1)),
            pending("b", 1),
        ];

        let plan = build_plan_at(&tasks, Some(&prefs), fixed_now());

        assert_eq!(plan.len(), 4);
        assert_eq!(plan.blocks[0].kind, BlockKind::Focus);
        assert_eq!(plan.blocks[0].task_id.as_deref(), Some("a"));
        assert_eq!(plan.blocks[1].kind, BlockKind::Break);
        assert_eq!(plan.blocks[2].task_id.as_deref(), Some("b"));
        assert_eq!(plan.blocks[3].kind, BlockKind::Break);

        assert_eq!(plan.blocks[0].start_time, "09:00");
        assert_eq!(plan.blocks[0].end_time, "09:25");
        assert_eq!(plan.blocks[1].start_time, "09:25");
        assert_eq!(plan.blocks[1].end_time, "09:30");
        assert_eq!(plan.blocks[2].start_time, "09:30");
        assert_eq!(plan.blocks[2].end_time, "09:55");
        assert_eq!(plan.blocks[3].end_time, "10:00");
    }

    #[test]
    fn test_plan_is_capped_at_eight_blocks() {
        let prefs = Preferences::default();
        let tasks: Vec<Task> = (0..5).map(|i| pending(&format!("t{i}"), 3)).collect();

        let plan = build_plan_at(&tasks, Some(&prefs), fixed_now());

        assert_eq!(plan.len(), MAX_PLAN_BLOCKS);
        // Fifth task never makes it into the plan.
        assert!(plan
            .blocks
            .iter()
            .all(|b| b.task_id.as_deref() != Some("t4")));
    }

    #[test]
    fn test_focus_blocks_alternate_with_breaks() {
        let prefs = Preferences::default();
        let tasks: Vec<Task> = (0..3).map(|i| pending(&format!("t{i}"), 2)).collect();

        let plan = build_plan_at(&tasks, Some(&prefs), fixed_now());

        for (i, block) in plan.blocks.iter().enumerate() {
            let expected = if i % 2 == 0 {
                BlockKind::Focus
            } else {
                BlockKind::Break
            };
            assert_eq!(block.kind, expected);
        }
    }

    #[test]
    fn test_easy_first_overrides_due_order() {
        let mut prefs = Preferences::default();
        prefs.difficulty_bias = DifficultyBias::EasyFirst;
        // Hardest task has the earliest deadline.
        let tasks = vec![
            pending("hard", 5).with_due(Utc::now()),
            pending("easy", 1).with_due(Utc::now() + Duration::days(2)),
            pending("mid", 3).with_due(Utc::now() + Duration::days(1)),
        ];

        let plan = build_plan_at(&tasks, Some(&prefs), fixed_now());

        let order: Vec<_> = plan
            .blocks
            .iter()
            .filter_map(|b| b.task_id.as_deref())
            .collect();
        assert_eq!(order, ["easy", "mid", "hard"]);
    }

    #[test]
    fn test_hard_first_difficulties_are_non_increasing() {
        let mut prefs = Preferences::default();
        prefs.difficulty_bias = DifficultyBias::HardFirst;
        let tasks = vec![pending("a", 2), pending("b", 5), pending("c", 3)];

        let plan = build_plan_at(&tasks, Some(&prefs), fixed_now());

        let order: Vec<_> = plan
            .blocks
            .iter()
            .filter_map(|b| b.task_id.as_deref())
            .collect();
        assert_eq!(order, ["b", "c", "a"]);
    }

    #[test]
    fn test_stable_bias_sort_keeps_due_order_on_ties() {
        let mut prefs = Preferences::default();
        prefs.difficulty_bias = DifficultyBias::EasyFirst;
        let tasks = vec![
            pending("later", 3).with_due(Utc::now() + Duration::days(3)),
            pending("sooner", 3).with_due(Utc::now() + Duration::days(1)),
        ];

        let plan = build_plan_at(&tasks, Some(&prefs), fixed_now());

        let order: Vec<_> = plan
            .blocks
            .iter()
            .filter_map(|b| b.task_id.as_deref())
            .collect();
        assert_eq!(order, ["sooner", "later"]);
    }

    #[test]
    fn test_absent_preferences_yield_empty_plan() {
        let tasks = vec![pending("a", 3)];
        assert!(build_plan_at(&tasks, None, fixed_now()).is_empty());
    }

    #[test]
    fn test_invalid_minutes_yield_empty_plan() {
        let tasks = vec![pending("a", 3)];
        for (focus, brk) in [(0, 5), (25, 0), (-10, 5), (25, -1)] {
            let prefs = Preferences {
                focus_block_mins: focus,
                break_mins: brk,
                ..Preferences::default()
            };
            assert!(
                build_plan_at(&tasks, Some(&prefs), fixed_now()).is_empty(),
                "focus={focus} break={brk}"
            );
        }
    }

    #[test]
    fn test_extreme_minutes_yield_empty_plan_without_panic() {
        let tasks = vec![pending("a", 3)];
        let prefs = Preferences {
            focus_block_mins: i64::MAX,
            break_mins: 5,
            ..Preferences::default()
        };
        assert!(build_plan_at(&tasks, Some(&prefs), fixed_now()).is_empty());
    }

    #[test]
    fn test_overflowing_break_truncates_after_unpaired_focus_block() {
        // A break length that is a valid Duration but pushes the cursor past
        // the representable date range: the first focus block survives, the
        // rest of the plan is dropped.
        let prefs = Preferences {
            focus_block_mins: 25,
            break_mins: 1_000_000_000_000,
            difficulty_bias: DifficultyBias::Balanced,
        };
        let tasks = vec![pending("a", 3), pending("b", 2)];

        let plan = build_plan_at(&tasks, Some(&prefs), fixed_now());

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.blocks[0].kind, BlockKind::Focus);
        assert_eq!(plan.blocks[0].task_id.as_deref(), Some("a"));
        assert_eq!(plan.blocks[0].start_time, "09:00");
        assert_eq!(plan.blocks[0].end_time, "09:25");
    }

    #[test]
    fn test_overflowing_focus_yields_empty_plan() {
        let prefs = Preferences {
            focus_block_mins: 1_000_000_000_000,
            break_mins: 5,
            difficulty_bias: DifficultyBias::Balanced,
        };
        assert!(build_plan_at(&[pending("a", 3)], Some(&prefs), fixed_now()).is_empty());
    }

    #[test]
    fn test_done_and_empty_backlogs_yield_empty_plan() {
        let prefs = Preferences::default();
        assert!(build_plan_at(&[], Some(&prefs), fixed_now()).is_empty());

        let mut done = pending("a", 3);
        done.done = true;
        assert!(build_plan_at(&[done], Some(&prefs), fixed_now()).is_empty());
    }

    #[test]
    fn test_plan_is_idempotent_for_a_fixed_instant() {
        let prefs = Preferences::default();
        let tasks = vec![pending("a", 2), pending("b", 4)];
        let now = fixed_now();

        let first = build_plan_at(&tasks, Some(&prefs), now);
        let second = build_plan_at(&tasks, Some(&prefs), now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_block_ids_are_deterministic() {
        let prefs = Preferences::default();
        let now = fixed_now();
        let plan = build_plan_at(&[pending("a", 3)], Some(&prefs), now);

        assert_eq!(
            plan.blocks[0].id,
            format!("a-focus-{}", now.timestamp_millis())
        );
    }
}
