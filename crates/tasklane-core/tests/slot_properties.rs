//! Property tests for slot generation, placement and overlap detection.

use proptest::prelude::*;
use std::collections::HashSet;

use tasklane_core::{
    can_place_task_with_work_time, find_overlapping_tasks_with_work_time, generate_time_slots,
    get_task_slots, get_work_time_slots, minutes_to_time, optimize_task_placement,
    time_to_minutes, BusinessHours, Task, SLOT_MINUTES,
};

fn quarter_hour() -> impl Strategy<Value = u32> {
    (0u32..96).prop_map(|q| q * SLOT_MINUTES)
}

fn split_task(id: usize) -> impl Strategy<Value = Task> {
    (1u32..=12, 0u32..=12).prop_map(move |(work_q, wait_q)| {
        let work = work_q * SLOT_MINUTES;
        let wait = wait_q * SLOT_MINUTES;
        Task::new(format!("t{id}"), format!("Task {id}"), work + wait).with_split(work, wait)
    })
}

proptest! {
    #[test]
    fn time_conversion_roundtrips(h in 0u32..24, m in 0u32..60) {
        let t = format!("{h:02}:{m:02}");
        prop_assert_eq!(minutes_to_time(time_to_minutes(&t)), t);
    }

    #[test]
    fn slots_are_increasing_and_bounded(start in quarter_hour(), end in quarter_hour()) {
        let hours = BusinessHours::new(minutes_to_time(start), minutes_to_time(end));
        let slots: Vec<u32> = generate_time_slots(&hours)
            .iter()
            .map(|s| time_to_minutes(s))
            .collect();

        for pair in slots.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], SLOT_MINUTES);
        }
        for s in &slots {
            prop_assert!(*s >= start && *s < end);
        }
        let expected = if end > start { ((end - start) / SLOT_MINUTES) as usize } else { 0 };
        prop_assert_eq!(slots.len(), expected);
    }

    #[test]
    fn task_slots_match_duration(start in quarter_hour(), quarters in 1u32..40) {
        let duration = quarters * SLOT_MINUTES;
        let slots = get_task_slots(&minutes_to_time(start), duration);
        prop_assert_eq!(slots.len() as u32, duration / SLOT_MINUTES);
    }

    #[test]
    fn placement_matches_slot_membership(
        start in 540u32..1020,
        work_q in 0u32..8,
        blocked in proptest::collection::hash_set(0u32..36, 0..10),
    ) {
        let start = start - start % SLOT_MINUTES;
        let start_time = minutes_to_time(start);
        let work = work_q * SLOT_MINUTES;
        let available = generate_time_slots(&BusinessHours::default());
        let occupied: HashSet<String> = blocked
            .iter()
            .map(|q| minutes_to_time(540 + q * SLOT_MINUTES))
            .collect();

        let work_slots = get_work_time_slots(&start_time, work + 30, Some(work), Some(30));
        let expected = work_slots
            .iter()
            .all(|s| available.contains(s) && !occupied.contains(s));

        let placeable = can_place_task_with_work_time(
            &start_time, work + 30, Some(work), Some(30), &occupied, &available,
        );
        prop_assert_eq!(placeable, expected);
        if work == 0 {
            prop_assert!(placeable);
        }
    }

    #[test]
    fn overlap_detection_is_symmetric(starts in proptest::collection::vec(0u32..8, 2..6)) {
        let tasks: Vec<Task> = starts
            .iter()
            .enumerate()
            .map(|(i, q)| {
                Task::new(format!("t{i}"), "T", 45).with_placement(minutes_to_time(540 + q * SLOT_MINUTES))
            })
            .collect();

        let forward = find_overlapping_tasks_with_work_time(&tasks);
        let mut reversed = tasks.clone();
        reversed.reverse();
        prop_assert_eq!(&forward, &find_overlapping_tasks_with_work_time(&reversed));

        // Every flagged task has a partner that is flagged too.
        for id in &forward {
            let task = tasks.iter().find(|t| &t.id == id).unwrap();
            let (s, e) = (task.start_minutes().unwrap(), task.end_minutes().unwrap());
            let partner = tasks.iter().any(|o| {
                o.id != task.id
                    && forward.contains(&o.id)
                    && o.start_minutes().unwrap() < e
                    && s < o.end_minutes().unwrap()
            });
            prop_assert!(partner);
        }
    }

    #[test]
    fn optimizer_keeps_locked_tasks_and_avoids_collisions(
        tasks in (0usize..5).prop_flat_map(|n| {
            (0..n).map(split_task).collect::<Vec<_>>()
        }),
        locked_q in 0u32..20,
    ) {
        let mut tasks = tasks;
        tasks.push(
            Task::new("locked", "Locked", 60)
                .with_placement(minutes_to_time(540 + locked_q * SLOT_MINUTES))
                .with_lock(),
        );

        let result = optimize_task_placement(&tasks, &BusinessHours::default());

        let locked = result.optimized_tasks.iter().find(|t| t.id == "locked").unwrap();
        prop_assert_eq!(locked, tasks.last().unwrap());
        prop_assert!(find_overlapping_tasks_with_work_time(&result.optimized_tasks).is_empty());
    }
}
