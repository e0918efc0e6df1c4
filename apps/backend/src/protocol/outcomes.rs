use std::time::Duration;

use serde::Serialize;

use crate::domain::faction::{Action, Faction};
use crate::domain::resolution::TurnResolution;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// A caller error folded into an outcome instead of an `Err`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub code: ErrorCode,
    pub message: String,
}

impl Rejection {
    /// Validation failures become rejections; every other error is handed
    /// back unchanged.
    pub fn from_app_error(err: AppError) -> Result<Self, AppError> {
        match err {
            AppError::Validation { code, detail } => Ok(Self {
                code,
                message: detail,
            }),
            other => Err(other),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faction: Option<Faction>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl JoinOutcome {
    pub fn joined(faction: Faction) -> Self {
        Self {
            success: true,
            faction: Some(faction),
            message: format!("Successfully joined {faction} faction!"),
            code: None,
        }
    }

    pub fn rejected(rejection: Rejection) -> Self {
        Self {
            success: false,
            faction: None,
            message: rejection.message,
            code: Some(rejection.code),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl VoteOutcome {
    pub fn recorded(action: Action, target: Option<Faction>) -> Self {
        let message = match target {
            Some(target) => format!("Vote submitted: {action} on {target}"),
            None => format!("Vote submitted: {action}"),
        };
        Self {
            success: true,
            message,
            code: None,
        }
    }

    pub fn rejected(rejection: Rejection) -> Self {
        Self {
            success: false,
            message: rejection.message,
            code: Some(rejection.code),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetOutcome {
    pub success: bool,
    pub message: String,
}

impl ResetOutcome {
    pub fn done() -> Self {
        Self {
            success: true,
            message: "Game has been reset successfully!".to_owned(),
        }
    }
}

/// What a scheduler call did, phrased for the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnReport {
    pub processed: bool,
    pub message: String,
    /// Seconds until the next scheduled turn.
    pub next_turn_in_secs: u64,
}

impl TurnReport {
    pub fn processed(resolution: &TurnResolution, next_turn_in_secs: u64) -> Self {
        let message = match resolution {
            TurnResolution::GameOver { summary } => summary.clone(),
            TurnResolution::Advanced { .. } => "Turn processed successfully!".to_owned(),
        };
        Self {
            processed: true,
            message,
            next_turn_in_secs,
        }
    }

    pub fn forced(resolution: &TurnResolution, next_turn_in_secs: u64) -> Self {
        Self {
            processed: true,
            message: format!(
                "Turn force-processed with {} faction actions",
                resolution.action_count()
            ),
            next_turn_in_secs,
        }
    }

    pub fn waiting(next_turn_in_secs: u64) -> Self {
        Self {
            processed: false,
            message: format!(
                "Next turn in approximately {} minutes",
                minutes_ceil(next_turn_in_secs)
            ),
            next_turn_in_secs,
        }
    }
}

/// Whole seconds, rounded up.
pub fn whole_secs(duration: Duration) -> u64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}

/// Whole minutes, rounded up.
pub fn minutes_ceil(secs: u64) -> u64 {
    secs.div_ceil(60)
}
