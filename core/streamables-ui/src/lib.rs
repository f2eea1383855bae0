//! Streamables UI action descriptor.
//!
//! The descriptor binds an application version to its screen manifests and to
//! a set of named actions. Actions never touch a UI tree; they return the
//! [`Operation`]s a rendering host should apply, in order:
//! - [`Descriptor`]: version, screen path templates, action table
//! - [`Action`]: the closed set of actions, dispatchable by name
//! - [`Operation`] / [`OpValue`]: a single `set id.prop = value` instruction
//! - [`ToDisplayString`]: the total string conversion every action uses
//!
//! The process-wide descriptor for this release is available through
//! [`descriptor()`].

mod action;
mod descriptor;
mod display;
mod error;
mod operation;

pub use action::{
    Action, ENABLED, SIGNATURE_PREFIX, SOLVE_BUTTON, STATUS, TEXT, on_solve_error,
    on_solve_success, set_status,
};
pub use descriptor::{
    Descriptor, MAIN_SCREEN, MAIN_SCREEN_PATH, Manifest, VERSION_PLACEHOLDER, descriptor,
    substitute_version,
};
pub use display::{ToDisplayString, UNDEFINED};
pub use error::{UiError, UiResult};
pub use operation::{OpKind, OpValue, Operation};
