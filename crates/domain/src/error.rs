// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Reasons a candidate record is rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is empty or absent.
    MissingField {
        /// The entity being validated.
        entity: &'static str,
        /// The missing field.
        field: &'static str,
    },
    /// A count, measurement, or score is below zero.
    NegativeValue {
        /// The offending field.
        field: &'static str,
    },
    /// Division must be a positive integer.
    InvalidDivision {
        /// The rejected division.
        division: i32,
    },
    /// Wins, losses, or their sum exceed the season cap.
    SeasonCapExceeded {
        /// The submitted wins.
        wins: i32,
        /// The submitted losses.
        losses: i32,
    },
    /// A top 25 team must carry a rank between 1 and 25.
    RankOutOfRange {
        /// The submitted rank, if any.
        rank: Option<i32>,
    },
    /// Jersey number outside 0-99.
    JerseyOutOfRange {
        /// The rejected jersey number.
        jersey_num: i32,
    },
    /// Graduating class earlier than the first accepted year.
    ClassTooEarly {
        /// The rejected class year.
        class_year: i32,
    },
    /// A team reference that cannot name any team.
    InvalidTeamReference {
        /// The rejected team identifier.
        team_id: i64,
    },
    /// Another player on the team already wears this number.
    DuplicateJersey {
        /// The team.
        team_id: i64,
        /// The contested jersey number.
        jersey_num: i32,
    },
    /// A game cannot be played by a team against itself.
    SameTeamConflict {
        /// The team named as both home and away.
        team_id: i64,
    },
    /// A team already plays another game on this date.
    DoubleBooking {
        /// The team that is already booked.
        team_id: i64,
        /// The contested date.
        scheduled_date: Date,
    },
    /// A shooting percentage above 100.
    PercentageOutOfRange {
        /// The offending field.
        field: &'static str,
    },
    /// More minutes than a regulation game has.
    MinutesExceeded {
        /// The rejected minutes.
        minutes: i32,
    },
    /// More fouls than a player can commit before fouling out.
    FoulsExceeded {
        /// The rejected foul count.
        fouls: i32,
    },
    /// Points were scored without any field goal or free throw percentage.
    InconsistentScoring {
        /// The submitted points.
        points: i32,
    },
    /// A statistic already exists for this player and game.
    DuplicateStatistic {
        /// The player.
        player_id: i64,
        /// The game.
        game_id: i64,
    },
    /// A referenced record does not exist.
    InvalidReference {
        /// The kind of record that was looked up.
        entity: &'static str,
        /// The identifier that was looked up.
        id: i64,
    },
    /// The player's team does not play in the game.
    PlayerNotInGame {
        /// The player.
        player_id: i64,
        /// The game.
        game_id: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { entity, field } => {
                write!(f, "{entity} field '{field}' is required")
            }
            Self::NegativeValue { field } => write!(f, "'{field}' cannot be negative"),
            Self::InvalidDivision { division } => {
                write!(f, "Division must be a positive integer, got {division}")
            }
            Self::SeasonCapExceeded { wins, losses } => {
                write!(
                    f,
                    "Season record {wins}-{losses} exceeds the 40 game season cap"
                )
            }
            Self::RankOutOfRange { rank } => match rank {
                Some(rank) => write!(
                    f,
                    "Rank must be between 1 and 25 when top_25 is set, got {rank}"
                ),
                None => write!(f, "Rank must be between 1 and 25 when top_25 is set"),
            },
            Self::JerseyOutOfRange { jersey_num } => {
                write!(f, "Jersey number must be between 0 and 99, got {jersey_num}")
            }
            Self::ClassTooEarly { class_year } => {
                write!(f, "Class must be 2016 or later, got {class_year}")
            }
            Self::InvalidTeamReference { team_id } => {
                write!(f, "Team reference must be a positive integer, got {team_id}")
            }
            Self::DuplicateJersey {
                team_id,
                jersey_num,
            } => {
                write!(
                    f,
                    "Jersey number {jersey_num} is already taken by another player on team {team_id}"
                )
            }
            Self::SameTeamConflict { team_id } => {
                write!(
                    f,
                    "Home and away teams cannot be the same (team {team_id})"
                )
            }
            Self::DoubleBooking {
                team_id,
                scheduled_date,
            } => {
                write!(
                    f,
                    "Team {team_id} already has a game scheduled on {scheduled_date}"
                )
            }
            Self::PercentageOutOfRange { field } => {
                write!(f, "'{field}' cannot exceed 100")
            }
            Self::MinutesExceeded { minutes } => {
                write!(f, "Minutes cannot exceed 40, got {minutes}")
            }
            Self::FoulsExceeded { fouls } => write!(f, "Fouls cannot exceed 5, got {fouls}"),
            Self::InconsistentScoring { points } => {
                write!(
                    f,
                    "A player with {points} points must have FG% or FT% greater than 0"
                )
            }
            Self::DuplicateStatistic { player_id, game_id } => {
                write!(
                    f,
                    "Player {player_id} already has statistics recorded for game {game_id}"
                )
            }
            Self::InvalidReference { entity, id } => write!(f, "{entity} {id} does not exist"),
            Self::PlayerNotInGame { player_id, game_id } => {
                write!(
                    f,
                    "Player {player_id} does not belong to either team playing in game {game_id}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
