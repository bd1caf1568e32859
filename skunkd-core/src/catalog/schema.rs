//! Capability catalog schema.
//!
//! Mirrors the JSON document written by the capability inventory:
//!
//! ```json
//! {
//!   "capabilities": [
//!     { "name": "git:commit", "category": "skill", "description": "...", "namespace": "git" }
//!   ],
//!   "session_summary": { "total": 1 }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of an invocable capability.
///
/// The declaration order is the order categories are presented in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Built-in tool, invoked by bare name.
    Tool,
    /// Skill, invoked as a slash command.
    Skill,
    /// Command, invoked by bare name.
    Command,
    /// Tool exposed by an MCP server.
    #[cfg_attr(feature = "clap", value(name = "mcp_tool"))]
    McpTool,
    /// Subagent definition, referenced by path.
    Subagent,
}

impl Category {
    /// Every category, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Tool,
        Self::Skill,
        Self::Command,
        Self::McpTool,
        Self::Subagent,
    ];

    /// Wire name as it appears in the catalog JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Skill => "skill",
            Self::Command => "command",
            Self::McpTool => "mcp_tool",
            Self::Subagent => "subagent",
        }
    }

    /// Short badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Skill => "skill",
            Self::Command => "cmd",
            Self::McpTool => "mcp",
            Self::Subagent => "agent",
        }
    }

    /// Accent color used for badges, pills, and selection outlines.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Tool => "#3b82f6",
            Self::Skill => "#22c55e",
            Self::Command => "#a855f7",
            Self::McpTool => "#f97316",
            Self::Subagent => "#ec4899",
        }
    }

    /// Suggest the closest known category for a misspelled name.
    ///
    /// Returns the closest match if its Damerau-Levenshtein distance is ≤ 3.
    #[must_use]
    pub fn suggest(input: &str) -> Option<Self> {
        let lowered = input.to_lowercase();
        Self::ALL
            .iter()
            .map(|c| (*c, strsim::damerau_levenshtein(&lowered, c.as_str())))
            .filter(|(_, dist)| *dist <= 3)
            .min_by_key(|(_, dist)| *dist)
            .map(|(c, _)| c)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)?;
        if let Some(suggestion) = Category::suggest(&self.0) {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One catalog entry describing an invocable capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    /// Capability name, optionally namespaced as `ns:name`.
    pub name: String,

    /// Capability category.
    pub category: Category,

    /// Free-form description.
    pub description: String,

    /// Owning MCP server, for `mcp_tool` records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    /// Owning namespace (plugin or skill pack).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl Capability {
    /// Server name, treating an empty string as absent.
    #[must_use]
    pub fn server_name(&self) -> Option<&str> {
        self.server.as_deref().filter(|s| !s.is_empty())
    }

    /// Namespace name, treating an empty string as absent.
    #[must_use]
    pub fn namespace_name(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|s| !s.is_empty())
    }
}

/// Aggregate counts recorded alongside the capability list.
///
/// Only `total` is consumed; other keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Total number of capabilities the inventory reported.
    pub total: u64,
}

/// A complete catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Capability records, in inventory order.
    pub capabilities: Vec<Capability>,

    /// Inventory summary.
    pub session_summary: SessionSummary,
}
