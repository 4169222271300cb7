use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Judge identifier, `1..=judge_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JudgeId(pub u32);

/// Team identifier, `1..=team_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl fmt::Display for JudgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Judge {}", self.0)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// Number of judges every team is seen by
pub const JUDGES_PER_TEAM: usize = 3;

/// The judges picked for one team, in the order they were selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    pub team: TeamId,
    pub judges: [JudgeId; JUDGES_PER_TEAM],
}

/// The teams one judge ended up with, ascending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeAssignment {
    pub judge: JudgeId,
    pub teams: Vec<TeamId>,
}

/// One judge visiting one team
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub judge: JudgeId,
    pub team: TeamId,
}

/// A block of pairings in which no judge appears twice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub pairings: Vec<Pairing>,
}

/// A round with its wall-clock start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedRound {
    pub number: u32,
    pub pairings: Vec<Pairing>,
    pub start: NaiveTime,
    /// Midnights crossed since the first round
    pub day_offset: u32,
    /// `HH:MM AM/PM`
    pub start_label: String,
}

/// Result of team -> judges assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub team_assignments: Vec<TeamAssignment>,
    pub judge_assignments: Vec<JudgeAssignment>,
}

impl Assignment {
    /// Number of teams each judge sees, indexed like `judge_assignments`
    pub fn loads(&self) -> Vec<usize> {
        self.judge_assignments.iter().map(|j| j.teams.len()).collect()
    }

    /// Difference between the busiest and the least busy judge
    pub fn load_spread(&self) -> usize {
        let loads = self.loads();
        match (loads.iter().max(), loads.iter().min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }
}

/// A complete schedule for one judging session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub team_assignments: Vec<TeamAssignment>,
    pub judge_assignments: Vec<JudgeAssignment>,
    pub rounds: Vec<TimedRound>,
}
