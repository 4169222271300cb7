pub mod types;
pub mod assign;
pub mod rounds;
pub mod clock;

use tracing::info;

use crate::error::ScheduleError;

pub use types::{
    Assignment, JudgeAssignment, JudgeId, Pairing, Round, Schedule, TeamAssignment, TeamId,
    TimedRound, JUDGES_PER_TEAM,
};
pub use assign::assign;
pub use rounds::partition_into_rounds;
pub use clock::{attach_times, format_clock, parse_start_time, ROUND_MINUTES};

/// Builds a full schedule: judges per team, rounds, and round start times.
/// All inputs are validated before any work is done.
pub fn generate(judge_count: usize, team_count: usize, start_time: &str) -> Result<Schedule, ScheduleError> {
    assign::check_counts(judge_count, team_count)?;
    let start = parse_start_time(start_time)?;

    let assignment = assign(judge_count, team_count)?;
    let rounds = partition_into_rounds(&assignment.team_assignments);
    let rounds = clock::with_start(rounds, start);

    info!(
        judges = judge_count,
        teams = team_count,
        rounds = rounds.len(),
        "generated judging schedule"
    );

    Ok(Schedule {
        team_assignments: assignment.team_assignments,
        judge_assignments: assignment.judge_assignments,
        rounds,
    })
}
