//! Match dataset: the row type and the in-memory table with its filters.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::HandlerError;

/// One match row, read as-is from the dataset file. The date column holds
/// zero-padded day-month-year strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team1: String,
    pub team2: String,
    pub date: String,
    pub venue: String,
    pub city: String,
    pub winner: String,
    pub win_by_runs: u32,
    pub win_by_wickets: u32,
    #[serde(deserialize_with = "deserialize_flag")]
    pub dl_applied: bool,
    pub toss_winner: String,
    pub toss_decision: String,
    pub player_of_match: String,
}

/// The dataset flag column is boolean-like: 0/1 in the source file, but
/// true/false and yes/no variants show up in exports.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "" | "0" | "false" | "no" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "unrecognized dl_applied flag '{other}'"
        ))),
    }
}

/// Aggregate record for one team across the season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    pub played: usize,
    pub won: usize,
    pub lost: usize,
}

/// Immutable in-memory table of match records. Acquired fresh per invocation
/// and discarded afterwards; all lookups are linear scans.
#[derive(Debug, Clone, Default)]
pub struct MatchDataset {
    records: Vec<MatchRecord>,
}

impl MatchDataset {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }

    /// Parse the dataset from CSV bytes. A malformed file counts as an
    /// acquisition failure.
    pub fn from_csv(bytes: &[u8]) -> Result<Self, HandlerError> {
        let mut reader = csv::Reader::from_reader(bytes);
        let records = reader
            .deserialize()
            .collect::<Result<Vec<MatchRecord>, _>>()
            .map_err(|e| HandlerError::DatasetUnavailable(format!("csv parse: {e}")))?;
        tracing::debug!("parsed dataset: {} match records", records.len());
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// First row where team1, team2, and date all match. The filter is
    /// order sensitive: the swapped team assignment is NOT checked, so a
    /// match recorded with the teams the other way around is not found.
    pub fn find_match(&self, team_one: &str, team_two: &str, date: &str) -> Option<&MatchRecord> {
        self.records
            .iter()
            .find(|row| row.team1 == team_one && row.team2 == team_two && row.date == date)
    }

    /// Season totals for a team, counting rows where it appears on either
    /// side. `None` when no row references the team.
    pub fn team_stats(&self, team: &str) -> Option<TeamStats> {
        let mut played = 0;
        let mut won = 0;
        for row in &self.records {
            if row.team1 == team || row.team2 == team {
                played += 1;
                if row.winner == team {
                    won += 1;
                }
            }
        }
        if played == 0 {
            return None;
        }
        Some(TeamStats {
            played,
            won,
            lost: played - won,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(team1: &str, team2: &str, date: &str, winner: &str) -> MatchRecord {
        MatchRecord {
            team1: team1.to_string(),
            team2: team2.to_string(),
            date: date.to_string(),
            venue: "Wankhede Stadium".to_string(),
            city: "Mumbai".to_string(),
            winner: winner.to_string(),
            win_by_runs: 0,
            win_by_wickets: 0,
            dl_applied: false,
            toss_winner: team1.to_string(),
            toss_decision: "bat".to_string(),
            player_of_match: "R Sharma".to_string(),
        }
    }

    #[test]
    fn test_from_csv_reads_rows_as_is() {
        let csv = "\
team1,team2,date,venue,city,winner,win_by_runs,win_by_wickets,dl_applied,toss_winner,toss_decision,player_of_match
Mumbai Indians,Chennai Super Kings,15-04-2019,Wankhede Stadium,Mumbai,Mumbai Indians,37,0,0,Chennai Super Kings,field,HH Pandya
Delhi Capitals,Rajasthan Royals,22-04-2019,Feroz Shah Kotla,Delhi,Delhi Capitals,0,5,1,Delhi Capitals,field,R Pant
";
        let dataset = MatchDataset::from_csv(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);

        let first = &dataset.records()[0];
        assert_eq!(first.win_by_runs, 37);
        assert!(!first.dl_applied);

        let second = &dataset.records()[1];
        assert_eq!(second.win_by_wickets, 5);
        assert!(second.dl_applied);
    }

    #[test]
    fn test_from_csv_rejects_malformed_file() {
        let err = MatchDataset::from_csv(b"not,a,match,table\n1,2,3,4\n").unwrap_err();
        assert!(matches!(err, HandlerError::DatasetUnavailable(_)));
    }

    #[test]
    fn test_find_match_is_order_sensitive() {
        let dataset = MatchDataset::new(vec![make_record(
            "Mumbai Indians",
            "Chennai Super Kings",
            "15-04-2019",
            "Mumbai Indians",
        )]);

        assert!(dataset
            .find_match("Mumbai Indians", "Chennai Super Kings", "15-04-2019")
            .is_some());
        // Swapped team assignment must not find the row.
        assert!(dataset
            .find_match("Chennai Super Kings", "Mumbai Indians", "15-04-2019")
            .is_none());
        assert!(dataset
            .find_match("Mumbai Indians", "Chennai Super Kings", "16-04-2019")
            .is_none());
    }

    #[test]
    fn test_find_match_takes_first_row_on_ties() {
        let mut first = make_record("A", "B", "01-05-2019", "A");
        first.venue = "First Venue".to_string();
        let mut second = make_record("A", "B", "01-05-2019", "B");
        second.venue = "Second Venue".to_string();

        let dataset = MatchDataset::new(vec![first, second]);
        let row = dataset.find_match("A", "B", "01-05-2019").unwrap();
        assert_eq!(row.venue, "First Venue");
    }

    #[test]
    fn test_team_stats_counts_both_sides() {
        // 3 rows as team1 (2 wins) + 2 rows as team2 (1 win) = 5 played, 3 won.
        let dataset = MatchDataset::new(vec![
            make_record("Mumbai Indians", "CSK", "01-04-2019", "Mumbai Indians"),
            make_record("Mumbai Indians", "RCB", "03-04-2019", "Mumbai Indians"),
            make_record("Mumbai Indians", "KKR", "05-04-2019", "KKR"),
            make_record("CSK", "Mumbai Indians", "07-04-2019", "Mumbai Indians"),
            make_record("RCB", "Mumbai Indians", "09-04-2019", "RCB"),
        ]);

        let stats = dataset.team_stats("Mumbai Indians").unwrap();
        assert_eq!(stats.played, 5);
        assert_eq!(stats.won, 3);
        assert_eq!(stats.lost, 2);
        assert_eq!(stats.won + stats.lost, stats.played);
    }

    #[test]
    fn test_team_stats_unknown_team_is_none() {
        let dataset = MatchDataset::new(vec![make_record("A", "B", "01-04-2019", "A")]);
        assert!(dataset.team_stats("Unknown XI").is_none());
    }
}
