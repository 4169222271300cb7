//! Judge rotation for hackathon judging sessions.
//!
//! Every team is seen by three judges; judges are spread evenly and kept from
//! sitting together repeatedly, then the visits are cut into rounds where no
//! judge is in two places at once, each round starting ten minutes after the
//! previous one.
//!
//! ```
//! let schedule = judge_rounds::generate(4, 3, "9:00 AM").unwrap();
//! assert_eq!(schedule.rounds.len(), 3);
//! assert_eq!(schedule.rounds[2].start_label, "09:20 AM");
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod schedule;
pub mod web;

pub use error::{AppError, ScheduleError};
pub use schedule::{assign, attach_times, generate, partition_into_rounds, Schedule};
