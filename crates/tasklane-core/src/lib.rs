//! # Tasklane Core Library
//!
//! This library provides the scheduling engine behind the Tasklane timeline:
//! tasks are placed on a single shared lane divided into 15-minute slots, and
//! a task's idle "wait time" can host another task's "work time".
//!
//! Every engine function is pure. Inputs are never mutated and nothing is
//! cached between calls, so the same functions serve interactive drag checks
//! and one-shot auto-arrange runs alike.
//!
//! ## Architecture
//!
//! - **Time**: `HH:MM` <-> minutes since midnight
//! - **Slots**: slot generation for business hours, work-time and
//!   whole-duration occupancy
//! - **Placement**: legality of a start slot against occupied slots
//! - **Overlap**: conflict detection and side-by-side lane layout
//! - **Optimizer**: greedy auto-arrange that interleaves work into wait time
//! - **Config**: TOML-based defaults for business hours and output
//!
//! ## Key Components
//!
//! - [`generate_time_slots`]: the legal slots of a day
//! - [`can_place_task_with_work_time`]: placement check
//! - [`find_overlapping_tasks_with_work_time`]: conflict set for display
//! - [`optimize_task_placement`]: auto-arrange

pub mod config;
pub mod error;
pub mod model;
pub mod optimizer;
pub mod overlap;
pub mod placement;
pub mod slots;
pub mod time;

pub use config::{Config, OutputConfig};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use model::{
    effective_work_time, validate_tasks, BusinessHours, Task, TimeRange, MAX_DURATION_MINUTES,
};
pub use optimizer::{optimize_task_placement, OptimizationResult, PlacementOptimizer};
pub use overlap::{
    calculate_task_overlap_layout, find_overlapping_tasks, find_overlapping_tasks_with_work_time,
    LaneAssignment,
};
pub use placement::{can_move_task, can_place_task, can_place_task_with_work_time};
pub use slots::{
    generate_time_slots, get_task_slots, get_wait_time_slots, get_work_time_slots,
    occupied_work_slots,
};
pub use time::{minutes_to_time, parse_time, time_to_minutes, SLOT_MINUTES};
