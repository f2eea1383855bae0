//! The actions a descriptor exposes and the operations each one emits.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::display::ToDisplayString;
use crate::error::UiError;
use crate::operation::Operation;

/// Element id of the status label.
pub const STATUS: &str = "status";
/// Element id of the solve button.
pub const SOLVE_BUTTON: &str = "solveBtn";
/// Text content property.
pub const TEXT: &str = "text";
/// Enabled/disabled property.
pub const ENABLED: &str = "enabled";
/// Prefix shown in front of a successful solve result.
pub const SIGNATURE_PREFIX: &str = "signature: ";

const ERROR_TEXT: &str = "error";

/// Show `text` in the status label.
pub fn set_status<T: ToDisplayString + ?Sized>(text: &T) -> Vec<Operation> {
    vec![Operation::set(STATUS, TEXT, text.to_display_string())]
}

/// Show the solve result and lock the solve button.
///
/// The status update is emitted before the button is disabled; hosts apply
/// operations in sequence.
pub fn on_solve_success<T: ToDisplayString + ?Sized>(signature: &T) -> Vec<Operation> {
    vec![
        Operation::set(
            STATUS,
            TEXT,
            format!("{SIGNATURE_PREFIX}{}", signature.to_display_string()),
        ),
        Operation::set(SOLVE_BUTTON, ENABLED, false),
    ]
}

/// Report a failed solve in the status label.
pub fn on_solve_error() -> Vec<Operation> {
    vec![Operation::set(STATUS, TEXT, ERROR_TEXT)]
}

/// Every action a descriptor can bind, addressable by its exported name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    SetStatus,
    OnSolveSuccess,
    OnSolveError,
}

impl Action {
    pub const ALL: [Action; 3] = [Self::SetStatus, Self::OnSolveSuccess, Self::OnSolveError];

    /// Name under which the action is exported to hosts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SetStatus => "setStatus",
            Self::OnSolveSuccess => "onSolveSuccess",
            Self::OnSolveError => "onSolveError",
        }
    }

    /// Number of positional arguments the action reads.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::SetStatus | Self::OnSolveSuccess => 1,
            Self::OnSolveError => 0,
        }
    }

    /// Runs the action with positional arguments.
    ///
    /// Surplus arguments are ignored and missing ones render as undefined,
    /// so this never fails.
    pub fn invoke(self, args: &[Value]) -> Vec<Operation> {
        match self {
            Self::SetStatus => set_status(&args.first()),
            Self::OnSolveSuccess => on_solve_success(&args.first()),
            Self::OnSolveError => on_solve_error(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| UiError::UnknownAction(s.to_owned()))
    }
}
