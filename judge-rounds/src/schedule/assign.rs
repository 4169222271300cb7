use std::collections::HashMap;

use tracing::debug;

use crate::error::ScheduleError;
use super::types::{Assignment, JudgeAssignment, JudgeId, TeamAssignment, TeamId, JUDGES_PER_TEAM};

/// Counts how often two judges have sat on the same team
#[derive(Debug, Default)]
pub struct PairCounts {
    counts: HashMap<(JudgeId, JudgeId), u32>,
}

impl PairCounts {
    fn key(a: JudgeId, b: JudgeId) -> (JudgeId, JudgeId) {
        if a <= b { (a, b) } else { (b, a) }
    }

    pub fn get(&self, a: JudgeId, b: JudgeId) -> u32 {
        self.counts.get(&Self::key(a, b)).copied().unwrap_or(0)
    }

    pub fn bump(&mut self, a: JudgeId, b: JudgeId) {
        *self.counts.entry(Self::key(a, b)).or_insert(0) += 1;
    }

    /// Sum of co-occurrences between `candidate` and everyone in `selected`
    pub fn cost(&self, candidate: JudgeId, selected: &[JudgeId]) -> u32 {
        selected.iter().map(|&s| self.get(candidate, s)).sum()
    }
}

/// Largest judge count accepted
pub const MAX_JUDGES: usize = 1_000;

/// Largest team count accepted
pub const MAX_TEAMS: usize = 10_000;

/// Validates the two counts and narrows them to id range. Shared with
/// `generate` so nothing runs on bad input.
pub fn check_counts(judge_count: usize, team_count: usize) -> Result<(u32, u32), ScheduleError> {
    if judge_count == 0 || team_count == 0 {
        return Err(ScheduleError::CountsNotPositive);
    }
    if judge_count < JUDGES_PER_TEAM {
        return Err(ScheduleError::TooFewJudges { judges: judge_count });
    }
    let too_many_judges = ScheduleError::TooManyJudges { judges: judge_count, max: MAX_JUDGES };
    let too_many_teams = ScheduleError::TooManyTeams { teams: team_count, max: MAX_TEAMS };
    if judge_count > MAX_JUDGES {
        return Err(too_many_judges);
    }
    if team_count > MAX_TEAMS {
        return Err(too_many_teams);
    }
    let judges = u32::try_from(judge_count).map_err(|_| too_many_judges)?;
    let teams = u32::try_from(team_count).map_err(|_| too_many_teams)?;
    Ok((judges, teams))
}

/// Assigns three distinct judges to every team.
///
/// Teams are processed in id order. For each team the judges are ranked by how
/// many teams they already have (stable, so equal loads keep id order), then
/// three are picked one at a time, each time taking the first ranked judge with
/// the lowest pair count against the judges already picked for this team.
///
/// This is a greedy heuristic: loads stay close but are not guaranteed optimal.
pub fn assign(judge_count: usize, team_count: usize) -> Result<Assignment, ScheduleError> {
    let (judge_total, team_total) = check_counts(judge_count, team_count)?;

    let judges: Vec<JudgeId> = (1..=judge_total).map(JudgeId).collect();
    let mut loads: HashMap<JudgeId, usize> = judges.iter().map(|&j| (j, 0)).collect();
    let mut pairs = PairCounts::default();
    let mut team_assignments = Vec::with_capacity(team_count);

    for team in (1..=team_total).map(TeamId) {
        let mut ranked = judges.clone();
        ranked.sort_by_key(|j| loads[j]);

        let selected = pick_judges(&ranked, &pairs)
            .ok_or(ScheduleError::TooFewJudges { judges: judge_count })?;

        for (i, &a) in selected.iter().enumerate() {
            if let Some(load) = loads.get_mut(&a) {
                *load += 1;
            }
            for &b in &selected[i + 1..] {
                pairs.bump(a, b);
            }
        }

        team_assignments.push(TeamAssignment { team, judges: selected });
    }

    let judge_assignments = judges_view(&judges, &team_assignments);
    debug!(judge_count, team_count, "assigned judges to teams");

    Ok(Assignment {
        team_assignments,
        judge_assignments,
    })
}

/// Picks three judges from `ranked`; `None` if there are fewer than three
fn pick_judges(ranked: &[JudgeId], pairs: &PairCounts) -> Option<[JudgeId; JUDGES_PER_TEAM]> {
    let mut selected: Vec<JudgeId> = Vec::with_capacity(JUDGES_PER_TEAM);
    for _ in 0..JUDGES_PER_TEAM {
        // min_by_key keeps the first of equal minima
        let pick = ranked
            .iter()
            .copied()
            .filter(|j| !selected.contains(j))
            .min_by_key(|&j| pairs.cost(j, &selected))?;
        selected.push(pick);
    }
    selected.try_into().ok()
}

/// Inverts team -> judges into judge -> teams, keeping every judge even if idle
fn judges_view(judges: &[JudgeId], team_assignments: &[TeamAssignment]) -> Vec<JudgeAssignment> {
    let mut by_judge: HashMap<JudgeId, Vec<TeamId>> =
        judges.iter().map(|&j| (j, Vec::new())).collect();
    for assignment in team_assignments {
        for judge in assignment.judges {
            by_judge.entry(judge).or_default().push(assignment.team);
        }
    }

    judges
        .iter()
        .map(|&judge| JudgeAssignment {
            judge,
            teams: by_judge.remove(&judge).unwrap_or_default(),
        })
        .collect()
}
