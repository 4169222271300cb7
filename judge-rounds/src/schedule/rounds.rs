use std::collections::HashSet;

use tracing::debug;

use super::types::{JudgeId, Pairing, Round, TeamAssignment, TeamId};

/// Splits the team -> judges assignment into rounds where each judge is busy
/// at most once.
///
/// Each round, teams with the most outstanding judges go first (stable, so
/// ties keep team order). The teams are walked in that order repeatedly, each
/// taking its first outstanding judge that is still free in this round, until
/// a whole pass adds nothing.
pub fn partition_into_rounds(team_assignments: &[TeamAssignment]) -> Vec<Round> {
    let mut remaining: Vec<(TeamId, Vec<JudgeId>)> = team_assignments
        .iter()
        .map(|a| (a.team, a.judges.to_vec()))
        .collect();

    let mut rounds = Vec::new();
    while remaining.iter().any(|(_, judges)| !judges.is_empty()) {
        let mut order: Vec<usize> = (0..remaining.len()).collect();
        order.sort_by(|&a, &b| remaining[b].1.len().cmp(&remaining[a].1.len()));

        let mut busy: HashSet<JudgeId> = HashSet::new();
        let mut pairings = Vec::new();
        loop {
            let before = pairings.len();
            for &idx in &order {
                let (team, judges) = &mut remaining[idx];
                if let Some(pos) = judges.iter().position(|j| !busy.contains(j)) {
                    let judge = judges.remove(pos);
                    busy.insert(judge);
                    pairings.push(Pairing { judge, team: *team });
                }
            }
            if pairings.len() == before {
                break;
            }
        }

        pairings.sort_by_key(|p| p.judge);
        rounds.push(Round {
            number: rounds.len() as u32 + 1,
            pairings,
        });
    }

    debug!(rounds = rounds.len(), "partitioned assignment into rounds");
    rounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::assign::assign;

    fn pairs(round: &Round) -> Vec<(u32, u32)> {
        round.pairings.iter().map(|p| (p.judge.0, p.team.0)).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(partition_into_rounds(&[]).is_empty());
    }

    #[test]
    fn test_four_judges_three_teams_makes_three_rounds() {
        let assignment = assign(4, 3).unwrap();
        let rounds = partition_into_rounds(&assignment.team_assignments);
        assert_eq!(rounds.len(), 3);
        assert_eq!(pairs(&rounds[0]), vec![(1, 1), (2, 1), (3, 3), (4, 2)]);
        assert_eq!(pairs(&rounds[1]), vec![(1, 2), (2, 2), (3, 1), (4, 3)]);
        assert_eq!(pairs(&rounds[2]), vec![(1, 3)]);
        assert_eq!(rounds.iter().map(|r| r.number).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_single_team_single_round() {
        let assignment = assign(3, 1).unwrap();
        let rounds = partition_into_rounds(&assignment.team_assignments);
        assert_eq!(rounds.len(), 1);
        assert_eq!(pairs(&rounds[0]), vec![(1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_round_stays_open_while_judges_are_free() {
        // Judge 3 joins team 1 in the first round once teams 1 and 2 are seated
        let assignment = assign(3, 2).unwrap();
        let rounds = partition_into_rounds(&assignment.team_assignments);
        assert_eq!(rounds.len(), 2);
        assert_eq!(pairs(&rounds[0]), vec![(1, 1), (2, 2), (3, 1)]);
        assert_eq!(pairs(&rounds[1]), vec![(1, 2), (2, 1), (3, 2)]);
    }

    #[test]
    fn test_round_count_matches_busiest_judge() {
        for (judges, teams) in [(4, 3), (5, 4), (6, 6), (3, 4)] {
            let assignment = assign(judges, teams).unwrap();
            let busiest = assignment.loads().into_iter().max().unwrap();
            let rounds = partition_into_rounds(&assignment.team_assignments);
            assert_eq!(rounds.len(), busiest, "{judges} judges, {teams} teams");
        }
    }
}
