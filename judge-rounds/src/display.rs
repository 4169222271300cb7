use std::fmt::Write;
use std::path::Path;

use crate::schedule::{JudgeAssignment, Schedule, TeamAssignment};

/// Formats a team line: `Team 2: Judge 4, Judge 1, Judge 2`
pub fn format_team(assignment: &TeamAssignment) -> String {
    let judges: Vec<String> = assignment.judges.iter().map(|j| j.to_string()).collect();
    format!("{}: {}", assignment.team, judges.join(", "))
}

/// Formats a judge line: `Judge 4: Team 2, Team 3`
pub fn format_judge(assignment: &JudgeAssignment) -> String {
    if assignment.teams.is_empty() {
        return format!("{}: [IDLE]", assignment.judge);
    }
    let teams: Vec<String> = assignment.teams.iter().map(|t| t.to_string()).collect();
    format!("{}: {}", assignment.judge, teams.join(", "))
}

/// Renders the round list, one `** Round k (HH:MM AM/PM) **` block per round
pub fn render_rounds(schedule: &Schedule) -> String {
    let mut out = String::new();
    for round in &schedule.rounds {
        // Writing into a String cannot fail
        let _ = writeln!(out, "** Round {} ({}) **", round.number, round.start_label);
        for pairing in &round.pairings {
            let _ = writeln!(out, "{} {} -> {}", round.start_label, pairing.judge, pairing.team);
        }
    }
    out
}

/// Writes the round list to a file
pub fn write_schedule_to_file(schedule: &Schedule, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, render_rounds(schedule))?;
    Ok(())
}

/// Prints teams, judges and rounds in a readable format
pub fn print_schedule(schedule: &Schedule) {
    println!("\n=== Teams ===");
    for assignment in &schedule.team_assignments {
        println!("  {}", format_team(assignment));
    }

    println!("\n=== Judges ===");
    for assignment in &schedule.judge_assignments {
        println!("  {} ({} teams)", format_judge(assignment), assignment.teams.len());
    }

    println!("\n=== Rounds ({}) ===", schedule.rounds.len());
    for round in &schedule.rounds {
        let suffix = if round.day_offset > 0 {
            format!(" (+{} day)", round.day_offset)
        } else {
            String::new()
        };
        println!("  Round {} at {}{}", round.number, round.start_label, suffix);
        for pairing in &round.pairings {
            println!("    {} -> {}", pairing.judge, pairing.team);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{generate, JudgeId, TeamId};

    #[test]
    fn test_format_lines() {
        let team = TeamAssignment {
            team: TeamId(2),
            judges: [JudgeId(4), JudgeId(1), JudgeId(2)],
        };
        assert_eq!(format_team(&team), "Team 2: Judge 4, Judge 1, Judge 2");

        let idle = JudgeAssignment { judge: JudgeId(7), teams: Vec::new() };
        assert_eq!(format_judge(&idle), "Judge 7: [IDLE]");
    }

    #[test]
    fn test_render_rounds() {
        let schedule = generate(3, 1, "1:00 PM").unwrap();
        assert_eq!(
            render_rounds(&schedule),
            "** Round 1 (01:00 PM) **\n\
             01:00 PM Judge 1 -> Team 1\n\
             01:00 PM Judge 2 -> Team 1\n\
             01:00 PM Judge 3 -> Team 1\n"
        );
    }

    #[test]
    fn test_render_rounds_several_rounds() {
        let schedule = generate(4, 3, "9:00 AM").unwrap();
        let rendered = render_rounds(&schedule);
        assert_eq!(rendered.lines().count(), 3 + 9);
        assert!(rendered.ends_with("** Round 3 (09:20 AM) **\n09:20 AM Judge 1 -> Team 3\n"));
    }

    #[test]
    fn test_write_schedule_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.txt");
        let schedule = generate(4, 3, "9:00 AM").unwrap();
        write_schedule_to_file(&schedule, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("** Round 1 (09:00 AM) **\n"));
        assert!(written.contains("** Round 3 (09:20 AM) **"));
    }
}
