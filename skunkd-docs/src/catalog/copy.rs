//! Copy strings, selection keys, and hints for capability records.
//!
//! The page script carries the same rules; see `templates/catalog.js`.

use skunkd_core::catalog::{Capability, Category};

/// Path prefix for subagent references.
pub const AGENT_PATH_PREFIX: &str = "@.claude/agents/";

/// The text a user pastes to invoke a capability.
///
/// | category   | name       | result                    |
/// |------------|------------|---------------------------|
/// | `tool`     | `grep`     | `grep`                    |
/// | `command`  | `deploy`   | `deploy`                  |
/// | `skill`    | `git:commit` | `/commit`               |
/// | `subagent` | `ns:foo`   | `@.claude/agents/ns/foo`  |
/// | `subagent` | `foo`      | `@.claude/agents/foo`     |
/// | `mcp_tool` | `bar` (server `srv`) | `/mcp__srv__bar` |
#[must_use]
pub fn copy_string(cap: &Capability) -> String {
    match cap.category {
        Category::Tool | Category::Command => cap.name.clone(),
        Category::Skill => {
            let short = cap.name.split_once(':').map_or(cap.name.as_str(), |(_, s)| s);
            format!("/{short}")
        }
        Category::Subagent => match cap.name.split_once(':') {
            Some((ns, short)) => format!("{AGENT_PATH_PREFIX}{ns}/{short}"),
            None => format!("{AGENT_PATH_PREFIX}{}", cap.name),
        },
        Category::McpTool => format!(
            "/mcp__{}__{}",
            cap.server.as_deref().unwrap_or_default(),
            cap.name
        ),
    }
}

/// Selection key: unique per (name, category) pair.
#[must_use]
pub fn record_key(cap: &Capability) -> String {
    format!("{}|{}", cap.name, cap.category)
}

/// Secondary label shown on a card: server, else namespace, else nothing.
#[must_use]
pub fn hint(cap: &Capability) -> &str {
    cap.server_name()
        .or_else(|| cap.namespace_name())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(name: &str, category: Category, server: Option<&str>) -> Capability {
        Capability {
            name: name.to_string(),
            category,
            description: String::new(),
            server: server.map(str::to_string),
            namespace: None,
        }
    }

    #[test]
    fn test_tool_and_command_are_bare() {
        assert_eq!(copy_string(&cap("grep", Category::Tool, None)), "grep");
        assert_eq!(copy_string(&cap("ns:deploy", Category::Command, None)), "ns:deploy");
    }

    #[test]
    fn test_skill_strips_namespace() {
        assert_eq!(copy_string(&cap("ns:foo", Category::Skill, None)), "/foo");
        assert_eq!(copy_string(&cap("git:commit", Category::Skill, None)), "/commit");
        assert_eq!(copy_string(&cap("foo", Category::Skill, None)), "/foo");
    }

    #[test]
    fn test_skill_splits_on_first_colon_only() {
        assert_eq!(copy_string(&cap("a:b:c", Category::Skill, None)), "/b:c");
    }

    #[test]
    fn test_subagent_paths() {
        assert_eq!(
            copy_string(&cap("ns:foo", Category::Subagent, None)),
            "@.claude/agents/ns/foo"
        );
        assert_eq!(
            copy_string(&cap("foo", Category::Subagent, None)),
            "@.claude/agents/foo"
        );
    }

    #[test]
    fn test_mcp_tool_is_server_qualified() {
        assert_eq!(
            copy_string(&cap("bar", Category::McpTool, Some("srv"))),
            "/mcp__srv__bar"
        );
        assert_eq!(
            copy_string(&cap("search", Category::McpTool, Some("web"))),
            "/mcp__web__search"
        );
    }

    #[test]
    fn test_mcp_tool_without_server() {
        assert_eq!(copy_string(&cap("bar", Category::McpTool, None)), "/mcp____bar");
    }

    #[test]
    fn test_record_key() {
        assert_eq!(record_key(&cap("grep", Category::Tool, None)), "grep|tool");
        assert_eq!(
            record_key(&cap("search", Category::McpTool, Some("web"))),
            "search|mcp_tool"
        );
    }

    #[test]
    fn test_hint_prefers_server() {
        let mut c = cap("x", Category::McpTool, Some("web"));
        c.namespace = Some("ns".into());
        assert_eq!(hint(&c), "web");
        c.server = None;
        assert_eq!(hint(&c), "ns");
        c.namespace = None;
        assert_eq!(hint(&c), "");
    }
}
