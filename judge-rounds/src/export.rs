use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use serde::{Deserialize, Serialize};

use crate::schedule::{Schedule, TimedRound};

/// One round as handed to whoever publishes the schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSubmission {
    pub round: u32,
    /// JSON-encoded list of `{judge, team}` labels
    pub assignments: String,
    pub start_time: String,
}

/// A pairing by display label, e.g. `{"judge": "Judge 1", "team": "Team 3"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelledPairing {
    pub judge: String,
    pub team: String,
}

fn labelled(round: &TimedRound) -> Vec<LabelledPairing> {
    round
        .pairings
        .iter()
        .map(|p| LabelledPairing {
            judge: p.judge.to_string(),
            team: p.team.to_string(),
        })
        .collect()
}

/// Serializes every round into the publication payload
pub fn to_submissions(schedule: &Schedule) -> Result<Vec<RoundSubmission>, serde_json::Error> {
    schedule
        .rounds
        .iter()
        .map(|round| {
            Ok(RoundSubmission {
                round: round.number,
                assignments: serde_json::to_string(&labelled(round))?,
                start_time: round.start_label.clone(),
            })
        })
        .collect()
}

/// Writes one CSV row per pairing: `round,start_time,judge,team`
pub fn write_rounds<W: Write>(schedule: &Schedule, writer: W) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    wtr.write_record(["round", "start_time", "judge", "team"])?;

    for round in &schedule.rounds {
        let number = round.number.to_string();
        for pairing in &round.pairings {
            let judge = pairing.judge.to_string();
            let team = pairing.team.to_string();
            wtr.write_record([number.as_str(), round.start_label.as_str(), judge.as_str(), team.as_str()])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the CSV export to `csv_path`, replacing any existing file
pub fn write_rounds_csv(schedule: &Schedule, csv_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::File::create(csv_path)?;
    write_rounds(schedule, file)?;
    Ok(())
}
