// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{
    Game, GameCandidate, Player, PlayerCandidate, Statistic, StatisticCandidate,
    StatisticContext, Team, TeamCandidate,
};

/// Maximum games (wins plus losses) in one season.
pub const SEASON_GAME_CAP: i32 = 40;
/// Highest (numerically largest) national rank.
pub const MAX_RANK: i32 = 25;
/// Largest jersey number.
pub const MAX_JERSEY_NUM: i32 = 99;
/// Earliest accepted graduating class.
pub const EARLIEST_CLASS_YEAR: i32 = 2016;
/// Minutes in a regulation game.
pub const MAX_MINUTES: i32 = 40;
/// Fouls before a player fouls out.
pub const MAX_FOULS: i32 = 5;
/// Upper bound for shooting percentages.
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Validates a team candidate and returns the normalized team.
///
/// Rules are checked in order and the first failure is returned.
/// Absent wins and losses default to zero, an absent `top_25` defaults to
/// false, and the rank is cleared for unranked teams.
///
/// # Arguments
///
/// * `candidate` - The team input to validate
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or the division is absent
/// - Wins or losses are negative
/// - The division is not positive
/// - Wins, losses, or their sum exceed the season cap
/// - The team is in the top 25 without a rank in 1-25
pub fn validate_team(candidate: &TeamCandidate) -> Result<Team, DomainError> {
    // Rule: name and division are required
    if candidate.name.trim().is_empty() {
        return Err(DomainError::MissingField {
            entity: "Team",
            field: "name",
        });
    }
    let Some(division) = candidate.division else {
        return Err(DomainError::MissingField {
            entity: "Team",
            field: "division",
        });
    };

    let wins: i32 = candidate.wins.unwrap_or(0);
    let losses: i32 = candidate.losses.unwrap_or(0);

    if wins < 0 {
        return Err(DomainError::NegativeValue { field: "wins" });
    }
    if losses < 0 {
        return Err(DomainError::NegativeValue { field: "losses" });
    }

    if division < 1 {
        return Err(DomainError::InvalidDivision { division });
    }

    // Rule: a season has at most 40 games
    if wins > SEASON_GAME_CAP || losses > SEASON_GAME_CAP || wins + losses > SEASON_GAME_CAP {
        return Err(DomainError::SeasonCapExceeded { wins, losses });
    }

    let top_25: bool = candidate.top_25.unwrap_or(false);
    let rank: Option<i32> = if top_25 {
        match candidate.rank {
            Some(rank) if (1..=MAX_RANK).contains(&rank) => Some(rank),
            other => return Err(DomainError::RankOutOfRange { rank: other }),
        }
    } else {
        None
    };

    Ok(Team {
        team_id: None,
        name: candidate.name.clone(),
        division,
        wins,
        losses,
        top_25,
        rank,
    })
}

/// Validates a player candidate against the existing roster.
///
/// `roster` may contain any players; only those on the candidate's team
/// are considered for the jersey check. On update, `candidate_id` excludes
/// the player's own row.
///
/// Whether `team_id` names an existing team is left to the storage
/// foreign key.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The jersey number is outside 0-99
/// - Height or weight is negative
/// - The class year is before 2016
/// - The team reference is not positive
/// - Another player on the team wears the same jersey number
pub fn validate_player(
    candidate: &PlayerCandidate,
    roster: &[Player],
    candidate_id: Option<i64>,
) -> Result<Player, DomainError> {
    if candidate.name.trim().is_empty() {
        return Err(DomainError::MissingField {
            entity: "Player",
            field: "name",
        });
    }

    if let Some(jersey_num) = candidate.jersey_num
        && !(0..=MAX_JERSEY_NUM).contains(&jersey_num)
    {
        return Err(DomainError::JerseyOutOfRange { jersey_num });
    }

    if candidate.height_inches.is_some_and(|h| h < 0.0) {
        return Err(DomainError::NegativeValue {
            field: "height_inches",
        });
    }
    if candidate.weight_lbs.is_some_and(|w| w < 0.0) {
        return Err(DomainError::NegativeValue {
            field: "weight_lbs",
        });
    }

    if let Some(class_year) = candidate.class_year
        && class_year < EARLIEST_CLASS_YEAR
    {
        return Err(DomainError::ClassTooEarly { class_year });
    }

    if let Some(team_id) = candidate.team_id
        && team_id <= 0
    {
        return Err(DomainError::InvalidTeamReference { team_id });
    }

    // Rule: (team_id, jersey_num) is unique among numbered players
    if let (Some(team_id), Some(jersey_num)) = (candidate.team_id, candidate.jersey_num) {
        let taken: bool = roster.iter().any(|player| {
            player.team_id == Some(team_id)
                && player.jersey_num == Some(jersey_num)
                && (candidate_id.is_none() || player.player_id != candidate_id)
        });
        if taken {
            return Err(DomainError::DuplicateJersey {
                team_id,
                jersey_num,
            });
        }
    }

    Ok(Player {
        player_id: candidate_id,
        name: candidate.name.clone(),
        position: candidate.position.clone().filter(|p| !p.trim().is_empty()),
        jersey_num: candidate.jersey_num,
        height_inches: candidate.height_inches,
        weight_lbs: candidate.weight_lbs,
        class_year: candidate.class_year,
        injured: candidate.injured.unwrap_or(false),
        team_id: candidate.team_id,
    })
}

/// Validates a game candidate against games already on the schedule.
///
/// `scheduled` may contain any games; only other games on the candidate's
/// date that involve either team count as conflicts. On update,
/// `candidate_id` excludes the game's own row.
///
/// # Errors
///
/// Returns an error if:
/// - The date, either score, or either team is absent
/// - The home and away teams are the same
/// - Either team already plays on that date
/// - Either score is negative
pub fn validate_game(
    candidate: &GameCandidate,
    scheduled: &[Game],
    candidate_id: Option<i64>,
) -> Result<Game, DomainError> {
    let missing = |field: &'static str| DomainError::MissingField {
        entity: "Game",
        field,
    };

    let scheduled_date = candidate
        .scheduled_date
        .ok_or_else(|| missing("scheduled_date"))?;
    let home_score: i32 = candidate.home_score.ok_or_else(|| missing("home_score"))?;
    let away_score: i32 = candidate.away_score.ok_or_else(|| missing("away_score"))?;
    let home_team_id: i64 = candidate
        .home_team_id
        .ok_or_else(|| missing("home_team_id"))?;
    let away_team_id: i64 = candidate
        .away_team_id
        .ok_or_else(|| missing("away_team_id"))?;

    if home_team_id == away_team_id {
        return Err(DomainError::SameTeamConflict {
            team_id: home_team_id,
        });
    }

    // Rule: a team plays at most one game per date
    for game in scheduled {
        if game.scheduled_date != scheduled_date
            || (candidate_id.is_some() && game.game_id == candidate_id)
        {
            continue;
        }
        for team_id in [home_team_id, away_team_id] {
            if game.involves(team_id) {
                return Err(DomainError::DoubleBooking {
                    team_id,
                    scheduled_date,
                });
            }
        }
    }

    if home_score < 0 {
        return Err(DomainError::NegativeValue {
            field: "home_score",
        });
    }
    if away_score < 0 {
        return Err(DomainError::NegativeValue {
            field: "away_score",
        });
    }

    Ok(Game {
        game_id: candidate_id,
        scheduled_date,
        location: candidate.location.clone().filter(|l| !l.trim().is_empty()),
        home_score,
        away_score,
        home_team_id,
        away_team_id,
    })
}

/// Validates a statistic candidate against its game, player, and any
/// statistic already recorded for the same pair.
///
/// On update, `candidate_id` keeps the statistic's own row from counting
/// as a duplicate.
///
/// # Errors
///
/// Returns an error if:
/// - The player or game reference is absent
/// - Any count or percentage is negative
/// - Any percentage exceeds 100
/// - Minutes exceed 40 or fouls exceed 5
/// - Points were scored with both FG% and FT% at zero
/// - A statistic already exists for the pair
/// - The game or player does not exist
/// - The player's team does not play in the game
#[allow(clippy::too_many_lines, clippy::float_cmp)]
pub fn validate_statistic(
    candidate: &StatisticCandidate,
    context: &StatisticContext,
    candidate_id: Option<i64>,
) -> Result<Statistic, DomainError> {
    let Some(player_id) = candidate.player_id else {
        return Err(DomainError::MissingField {
            entity: "Statistic",
            field: "player_id",
        });
    };
    let Some(game_id) = candidate.game_id else {
        return Err(DomainError::MissingField {
            entity: "Statistic",
            field: "game_id",
        });
    };

    let counts: [(&'static str, i32); 8] = [
        ("points", candidate.points.unwrap_or(0)),
        ("assists", candidate.assists.unwrap_or(0)),
        ("rebounds", candidate.rebounds.unwrap_or(0)),
        ("steals", candidate.steals.unwrap_or(0)),
        ("blocks", candidate.blocks.unwrap_or(0)),
        ("minutes", candidate.minutes.unwrap_or(0)),
        ("fouls", candidate.fouls.unwrap_or(0)),
        ("turnovers", candidate.turnovers.unwrap_or(0)),
    ];
    let percentages: [(&'static str, f64); 3] = [
        ("fg_pct", candidate.fg_pct.unwrap_or(0.0)),
        ("three_p_pct", candidate.three_p_pct.unwrap_or(0.0)),
        ("ft_pct", candidate.ft_pct.unwrap_or(0.0)),
    ];

    if let Some(&(field, _)) = counts.iter().find(|&&(_, value)| value < 0) {
        return Err(DomainError::NegativeValue { field });
    }
    if let Some(&(field, _)) = percentages.iter().find(|&&(_, value)| value < 0.0) {
        return Err(DomainError::NegativeValue { field });
    }
    if let Some(&(field, _)) = percentages
        .iter()
        .find(|&&(_, value)| value > MAX_PERCENTAGE)
    {
        return Err(DomainError::PercentageOutOfRange { field });
    }

    let [
        (_, points),
        (_, assists),
        (_, rebounds),
        (_, steals),
        (_, blocks),
        (_, minutes),
        (_, fouls),
        (_, turnovers),
    ] = counts;
    let [(_, fg_pct), (_, three_p_pct), (_, ft_pct)] = percentages;

    if minutes > MAX_MINUTES {
        return Err(DomainError::MinutesExceeded { minutes });
    }
    if fouls > MAX_FOULS {
        return Err(DomainError::FoulsExceeded { fouls });
    }

    // Rule: points need at least one way of scoring them
    if points > 0 && fg_pct == 0.0 && ft_pct == 0.0 {
        return Err(DomainError::InconsistentScoring { points });
    }

    if let Some(existing) = &context.existing_for_pair
        && (candidate_id.is_none() || existing.statistic_id != candidate_id)
    {
        return Err(DomainError::DuplicateStatistic { player_id, game_id });
    }

    let Some(game) = &context.game else {
        return Err(DomainError::InvalidReference {
            entity: "Game",
            id: game_id,
        });
    };
    let Some(player) = &context.player else {
        return Err(DomainError::InvalidReference {
            entity: "Player",
            id: player_id,
        });
    };

    // Rule: the player's team must be playing in the game
    if !player.team_id.is_some_and(|team_id| game.involves(team_id)) {
        return Err(DomainError::PlayerNotInGame { player_id, game_id });
    }

    Ok(Statistic {
        statistic_id: candidate_id,
        points,
        assists,
        rebounds,
        steals,
        blocks,
        minutes,
        fouls,
        turnovers,
        fg_pct,
        three_p_pct,
        ft_pct,
        player_id,
        game_id,
    })
}

/// Checks that a game's statistic lines still belong to it after the game
/// is changed.
///
/// `players` are the players with a line recorded in the game. Each must be
/// on the home or away team of `game`.
///
/// # Errors
///
/// Returns `PlayerNotInGame` for the first player whose team no longer
/// plays in the game.
pub fn validate_game_lines(
    game_id: i64,
    game: &Game,
    players: &[Player],
) -> Result<(), DomainError> {
    for player in players {
        if !player.team_id.is_some_and(|team_id| game.involves(team_id)) {
            return Err(DomainError::PlayerNotInGame {
                player_id: player.player_id.unwrap_or_default(),
                game_id,
            });
        }
    }
    Ok(())
}

/// Checks that a player's statistic lines still belong to them after the
/// player changes team.
///
/// `games` are the games the player has a line recorded in. The player's
/// new team must play in each of them; a released player can keep none.
///
/// # Errors
///
/// Returns `PlayerNotInGame` for the first game the player's team does not
/// play in.
pub fn validate_player_lines(
    player_id: i64,
    player: &Player,
    games: &[Game],
) -> Result<(), DomainError> {
    for game in games {
        if !player.team_id.is_some_and(|team_id| game.involves(team_id)) {
            return Err(DomainError::PlayerNotInGame {
                player_id,
                game_id: game.game_id.unwrap_or_default(),
            });
        }
    }
    Ok(())
}
