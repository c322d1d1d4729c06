// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use courtside_domain::DomainError;
use courtside_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A reference names a record that does not exist.
    ForeignKeyViolation {
        /// A human-readable description of the bad reference.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the human-readable message without the variant prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput { message, .. }
            | Self::DomainRuleViolation { message, .. }
            | Self::ForeignKeyViolation { message }
            | Self::ResourceNotFound { message, .. }
            | Self::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ForeignKeyViolation { message } => {
                write!(f, "Foreign key violation: {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

fn invalid_input(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

fn rule_violation(rule: &str, message: String) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: rule.to_string(),
        message,
    }
}

/// Translates a domain error into an API error.
///
/// Field-level failures become `InvalidInput`; cross-field and
/// cross-record failures become `DomainRuleViolation`.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::MissingField { field, .. }
        | DomainError::NegativeValue { field }
        | DomainError::PercentageOutOfRange { field } => invalid_input(field, message),
        DomainError::InvalidDivision { .. } => invalid_input("division", message),
        DomainError::JerseyOutOfRange { .. } => invalid_input("jersey_num", message),
        DomainError::ClassTooEarly { .. } => invalid_input("class", message),
        DomainError::InvalidTeamReference { .. } => invalid_input("team_id", message),
        DomainError::MinutesExceeded { .. } => invalid_input("minutes", message),
        DomainError::FoulsExceeded { .. } => invalid_input("fouls", message),
        DomainError::SeasonCapExceeded { .. } => rule_violation("season_cap", message),
        DomainError::RankOutOfRange { .. } => rule_violation("top_25_rank", message),
        DomainError::DuplicateJersey { .. } => rule_violation("unique_jersey", message),
        DomainError::SameTeamConflict { .. } => rule_violation("distinct_teams", message),
        DomainError::DoubleBooking { .. } => rule_violation("one_game_per_date", message),
        DomainError::InconsistentScoring { .. } => {
            rule_violation("consistent_scoring", message)
        }
        DomainError::DuplicateStatistic { .. } => rule_violation("unique_statistic", message),
        DomainError::PlayerNotInGame { .. } => rule_violation("player_in_game", message),
        DomainError::InvalidReference { .. } => ApiError::ForeignKeyViolation { message },
    }
}

/// Translates a persistence error into an API error.
///
/// `resource_type` names the record being read or written, for not-found
/// and reference messages. Writes that know more about the rejected record
/// translate uniqueness and reference failures themselves before falling
/// back to this.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError, resource_type: &str) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: resource_type.to_string(),
            message,
        },
        PersistenceError::TeamAlreadyScheduled {
            team_id,
            scheduled_date,
        } => translate_domain_error(DomainError::DoubleBooking {
            team_id,
            scheduled_date,
        }),
        PersistenceError::ForeignKeyViolation(_) => ApiError::ForeignKeyViolation {
            message: format!("{resource_type} references a record that does not exist"),
        },
        PersistenceError::UniqueViolation(message) => rule_violation("unique", message),
        PersistenceError::CheckViolation(message) => rule_violation("storage_constraint", message),
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
