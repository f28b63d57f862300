use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use super::domain::{PredictionRequest, TeamStats};

#[derive(Debug)]
pub enum FixtureImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for FixtureImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureImportError::Io(err) => write!(f, "failed to read fixture export: {}", err),
            FixtureImportError::Csv(err) => write!(f, "invalid fixture CSV data: {}", err),
        }
    }
}

impl std::error::Error for FixtureImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureImportError::Io(err) => Some(err),
            FixtureImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for FixtureImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for FixtureImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// A CSV row that could not be turned into a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based data row, not counting the header.
    pub row: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct FixtureImport {
    pub requests: Vec<PredictionRequest>,
    pub rejected: Vec<RejectedRow>,
}

/// Reads flat fixture exports, one fixture per row with `home_*` and `away_*` columns.
pub struct FixtureCsvImporter;

impl FixtureCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<FixtureImport, FixtureImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<FixtureImport, FixtureImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        csv_reader.headers()?;

        let mut import = FixtureImport::default();
        for (index, record) in csv_reader.deserialize::<FixtureRow>().enumerate() {
            match record {
                Ok(row) => import.requests.push(row.into_request()),
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    let row = index + 1;
                    warn!(row, error = %err, "skipping unreadable fixture row");
                    import.rejected.push(RejectedRow {
                        row,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(import)
    }
}

#[derive(Debug, Deserialize)]
struct FixtureRow {
    fixture_id: u64,
    home_team_id: u64,
    home_name: String,
    home_matches_played: u32,
    home_wins: u32,
    home_draws: u32,
    home_losses: u32,
    home_goals_for: u32,
    home_goals_against: u32,
    home_home_wins: u32,
    home_away_wins: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    home_form: Option<String>,
    #[serde(default)]
    home_league_position: Option<u32>,
    away_team_id: u64,
    away_name: String,
    away_matches_played: u32,
    away_wins: u32,
    away_draws: u32,
    away_losses: u32,
    away_goals_for: u32,
    away_goals_against: u32,
    away_home_wins: u32,
    away_away_wins: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    away_form: Option<String>,
    #[serde(default)]
    away_league_position: Option<u32>,
    #[serde(default)]
    h2h_home_wins: u32,
    #[serde(default)]
    h2h_away_wins: u32,
    #[serde(default)]
    h2h_draws: u32,
}

impl FixtureRow {
    fn into_request(self) -> PredictionRequest {
        PredictionRequest {
            fixture_id: self.fixture_id,
            home_team: TeamStats {
                team_id: self.home_team_id,
                name: self.home_name,
                matches_played: self.home_matches_played,
                wins: self.home_wins,
                draws: self.home_draws,
                losses: self.home_losses,
                goals_for: self.home_goals_for,
                goals_against: self.home_goals_against,
                home_wins: self.home_home_wins,
                away_wins: self.home_away_wins,
                last_five_form: self.home_form,
                league_position: self.home_league_position,
            },
            away_team: TeamStats {
                team_id: self.away_team_id,
                name: self.away_name,
                matches_played: self.away_matches_played,
                wins: self.away_wins,
                draws: self.away_draws,
                losses: self.away_losses,
                goals_for: self.away_goals_for,
                goals_against: self.away_goals_against,
                home_wins: self.away_home_wins,
                away_wins: self.away_away_wins,
                last_five_form: self.away_form,
                league_position: self.away_league_position,
            },
            h2h_home_wins: self.h2h_home_wins,
            h2h_away_wins: self.h2h_away_wins,
            h2h_draws: self.h2h_draws,
            is_home_favorite: false,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "fixture_id,home_team_id,home_name,home_matches_played,home_wins,home_draws,home_losses,home_goals_for,home_goals_against,home_home_wins,home_away_wins,home_form,home_league_position,away_team_id,away_name,away_matches_played,away_wins,away_draws,away_losses,away_goals_for,away_goals_against,away_home_wins,away_away_wins,away_form,away_league_position,h2h_home_wins,h2h_away_wins,h2h_draws";

    #[test]
    fn parses_rows_with_optional_cells() {
        let csv = format!(
            "{HEADER}\n\
             501,1,Galatasaray,10,7,2,1,22,8,4,3,WWDWW,1,2,Kasımpaşa,10,2,3,5,9,17,2,0,LDLLW,17,3,1,1\n\
             502,3,Eyüpspor,0,0,0,0,0,0,0,0,,,4,Bodrum,0,0,0,0,0,0,0,0,,,0,0,0\n"
        );

        let import = FixtureCsvImporter::from_reader(Cursor::new(csv)).expect("csv parses");

        assert!(import.rejected.is_empty());
        assert_eq!(import.requests.len(), 2);
        let first = &import.requests[0];
        assert_eq!(first.home_team.name, "Galatasaray");
        assert_eq!(first.home_team.last_five_form.as_deref(), Some("WWDWW"));
        assert_eq!(first.away_team.league_position, Some(17));
        assert_eq!(first.h2h_home_wins, 3);

        let second = &import.requests[1];
        assert_eq!(second.home_team.last_five_form, None);
        assert_eq!(second.away_team.league_position, None);
    }

    #[test]
    fn bad_rows_are_reported_and_skipped() {
        let csv = format!(
            "{HEADER}\n\
             601,1,Antalyaspor,x,0,0,0,0,0,0,0,,,2,Rizespor,3,1,1,1,4,4,1,0,,,0,0,0\n\
             602,1,Antalyaspor,3,1,1,1,4,4,1,0,,,2,Rizespor,3,1,1,1,4,4,1,0,,,0,0,0\n"
        );

        let import = FixtureCsvImporter::from_reader(Cursor::new(csv)).expect("csv parses");

        assert_eq!(import.requests.len(), 1);
        assert_eq!(import.requests[0].fixture_id, 602);
        assert_eq!(import.rejected.len(), 1);
        assert_eq!(import.rejected[0].row, 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = FixtureCsvImporter::from_path("/definitely/not/here.csv")
            .expect_err("file does not exist");
        assert!(matches!(error, FixtureImportError::Io(_)));
    }
}
