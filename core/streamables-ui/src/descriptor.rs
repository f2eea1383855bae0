//! The descriptor: version, screen templates and the action table.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::action::Action;
use crate::error::{UiError, UiResult};
use crate::operation::Operation;

/// Token in screen paths that hosts replace with the descriptor version.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Name of the entry screen.
pub const MAIN_SCREEN: &str = "main";

/// Manifest location of the entry screen, before version substitution.
pub const MAIN_SCREEN_PATH: &str = "/Build/Release/{version}/assets/ui/index.json";

static DESCRIPTOR: LazyLock<Descriptor> = LazyLock::new(|| {
    Action::ALL.into_iter().fold(
        Descriptor::new(env!("CARGO_PKG_VERSION")).with_screen(MAIN_SCREEN, MAIN_SCREEN_PATH),
        Descriptor::with_action,
    )
});

/// The descriptor shipped with this release.
pub fn descriptor() -> &'static Descriptor {
    &DESCRIPTOR
}

/// Replaces every version placeholder in `template`.
pub fn substitute_version(template: &str, version: &str) -> String {
    template.replace(VERSION_PLACEHOLDER, version)
}

/// Binds a version to its screens and actions.
///
/// Built once with the `with_*` methods and read-only afterwards. Screen
/// paths are stored exactly as given; placeholder substitution only happens
/// in [`Descriptor::resolve_screen`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    version: String,
    screens: BTreeMap<String, String>,
    actions: BTreeMap<String, Action>,
}

impl Descriptor {
    /// Creates an empty descriptor for `version`.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            screens: BTreeMap::new(),
            actions: BTreeMap::new(),
        }
    }

    /// Registers a screen path template. A repeated name replaces the earlier path.
    #[must_use]
    pub fn with_screen(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.screens.insert(name.into(), path.into());
        self
    }

    /// Registers an action under its exported name.
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.insert(action.name().to_owned(), action);
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn screens(&self) -> &BTreeMap<String, String> {
        &self.screens
    }

    pub fn actions(&self) -> &BTreeMap<String, Action> {
        &self.actions
    }

    /// Raw path template of a screen.
    pub fn screen(&self, name: &str) -> Option<&str> {
        self.screens.get(name).map(String::as_str)
    }

    /// Path of a screen with the descriptor version substituted in.
    pub fn resolve_screen(&self, name: &str) -> UiResult<String> {
        let Some(template) = self.screen(name) else {
            warn!(screen = %name, "Unknown screen requested");
            return Err(UiError::UnknownScreen(name.to_owned()));
        };
        let path = substitute_version(template, &self.version);
        debug!(screen = %name, path = %path, "Resolved screen");
        Ok(path)
    }

    /// Looks up an action by exported name.
    pub fn action(&self, name: &str) -> Option<Action> {
        self.actions.get(name).copied()
    }

    /// Invokes a named action with positional arguments.
    pub fn invoke(&self, name: &str, args: &[Value]) -> UiResult<Vec<Operation>> {
        let Some(action) = self.action(name) else {
            warn!(action = %name, "Unknown action requested");
            return Err(UiError::UnknownAction(name.to_owned()));
        };
        let ops = action.invoke(args);
        debug!(action = %name, args = args.len(), ops = ops.len(), "Action invoked");
        Ok(ops)
    }

    /// Serializable summary for hosts that cannot call into Rust.
    pub fn manifest(&self) -> Manifest {
        Manifest {
            version: self.version.clone(),
            screens: self.screens.clone(),
            actions: self.actions.keys().cloned().collect(),
        }
    }
}

/// JSON-facing shape of a [`Descriptor`]: the action table is reduced to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub screens: BTreeMap<String, String>,
    pub actions: Vec<String>,
}

impl Manifest {
    /// Serializes the manifest as JSON.
    pub fn to_json(&self) -> UiResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a manifest from JSON.
    pub fn from_json(json: &str) -> UiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
