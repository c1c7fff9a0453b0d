//! Debug-adapter data types adjacent to the semantic engine.
//!
//! The debug-adapter surface lives outside this workspace; only the
//! shape it shares with the engine's host is kept here.

use serde::{Deserialize, Serialize};

/// Arguments for the `dataBreakpointInfo` request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataBreakpointInfoArguments {
    /// Reference to the variable container, when the data breakpoint is
    /// requested for a child of that container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables_reference: Option<i64>,
    /// Name of the variable's child to get data breakpoint info for, or
    /// an expression when no container reference is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
