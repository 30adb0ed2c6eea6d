//! Tool-call dispatch boundary.
//!
//! The surrounding protocol server hands the core a tool name and a map
//! of named string arguments; the core answers with a single text
//! payload. Failures cross the boundary as text too, so the transport
//! layer stays protocol-agnostic.

use std::collections::BTreeMap;

use miette::Diagnostic;

use crate::catalog::catalog;
use crate::css::{self, DEFAULT_PREFIX};
use crate::error::{OchreError, Result};
use crate::report;
use crate::types::{Group, PaletteFilter, Scope};

/// Tool names the boundary understands.
pub const TOOLS: &[&str] = &[
    "lookup",
    "get_group",
    "get_palette",
    "list_all",
    "generate_css",
];

/// Handle one tool call.
///
/// Any failure (unknown tool, missing or invalid argument) is rendered as
/// a textual error payload; an empty match set is a successful response.
pub fn dispatch(tool: &str, args: &BTreeMap<String, String>) -> String {
    match call(tool, args) {
        Ok(text) => text,
        Err(err) => render_error(&err),
    }
}

fn call(tool: &str, args: &BTreeMap<String, String>) -> Result<String> {
    match tool {
        "lookup" => lookup(args),
        "get_group" => get_group(args),
        "get_palette" => get_palette(args),
        "list_all" => list_all(),
        "generate_css" => generate_css(args),
        _ => Err(OchreError::UnknownTool {
            name: tool.to_string(),
            help: Some(format!("known tools: {}", TOOLS.join(", "))),
        }),
    }
}

fn lookup(args: &BTreeMap<String, String>) -> Result<String> {
    let query = required(args, "query")?;
    let scope = match args.get("official_only").map(String::as_str) {
        Some("true") => Scope::Official,
        Some("false") | None => Scope::All,
        Some(other) => {
            return Err(OchreError::InvalidArgument {
                message: format!("invalid official_only value \"{}\"", other),
                help: Some("use \"true\" or \"false\"".to_string()),
            })
        }
    };

    let results = catalog().lookup_scoped(query, scope);
    if results.is_empty() {
        let mut text = format!("No colours found matching \"{}\"", query);
        if scope == Scope::Official {
            text.push_str(" in official colours");
        }
        text.push_str(". Try a name (e.g. \"ochre\") or a hex code (e.g. \"#E74726\").");
        return Ok(text);
    }

    Ok(report::lines(&results))
}

fn get_group(args: &BTreeMap<String, String>) -> Result<String> {
    let group: Group = required(args, "group")?.parse()?;
    Ok(report::lines(&catalog().in_group(group)))
}

fn get_palette(args: &BTreeMap<String, String>) -> Result<String> {
    let filter: PaletteFilter = required(args, "category")?.parse()?;
    Ok(report::lines(&catalog().in_palette(filter)))
}

fn list_all() -> Result<String> {
    let records: Vec<_> = catalog().records().collect();
    Ok(report::lines(&records))
}

fn generate_css(args: &BTreeMap<String, String>) -> Result<String> {
    let scope: Scope = match args.get("scope") {
        Some(value) => value.parse()?,
        None => Scope::Official,
    };
    let prefix = args
        .get("prefix")
        .map(String::as_str)
        .unwrap_or(DEFAULT_PREFIX);

    Ok(css::stylesheet(catalog(), scope, prefix))
}

fn required<'a>(args: &'a BTreeMap<String, String>, name: &str) -> Result<&'a str> {
    args.get(name)
        .map(String::as_str)
        .ok_or_else(|| OchreError::InvalidArgument {
            message: format!("missing required argument \"{}\"", name),
            help: None,
        })
}

fn render_error(err: &OchreError) -> String {
    let mut text = format!("error: {}", err);
    if let Some(help) = err.help() {
        text.push_str(&format!("\n{}", help));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_lookup_payload() {
        let text = dispatch("lookup", &args(&[("query", "ochre")]));
        assert_eq!(text, "Ochre: #E74726 (rgb(231, 71, 38))");
    }

    #[test]
    fn test_lookup_no_results_is_text_not_error() {
        let text = dispatch("lookup", &args(&[("query", "zzzzzz")]));
        assert!(text.starts_with("No colours found matching \"zzzzzz\""));
        assert!(!text.starts_with("error:"));
    }

    #[test]
    fn test_lookup_official_only() {
        let text = dispatch(
            "lookup",
            &args(&[("query", "seafoam"), ("official_only", "true")]),
        );
        assert!(text.contains("in official colours"));
    }

    #[test]
    fn test_lookup_missing_query() {
        let text = dispatch("lookup", &args(&[]));
        assert!(text.starts_with("error:"));
        assert!(text.contains("missing required argument \"query\""));
    }

    #[test]
    fn test_get_group_payload() {
        let text = dispatch("get_group", &args(&[("group", "official")]));
        assert_eq!(text.lines().count(), 10);
        assert!(text.starts_with("Ochre: #E74726"));
    }

    #[test]
    fn test_get_group_invalid() {
        let text = dispatch("get_group", &args(&[("group", "bogus")]));
        assert!(text.starts_with("error: Invalid argument"));
        assert!(text.contains("valid groups: official, extended"));
    }

    #[test]
    fn test_get_palette_invalid_lists_categories() {
        let text = dispatch("get_palette", &args(&[("category", "bogus")]));
        assert!(text.starts_with("error: Invalid argument"));
        assert!(text.contains("primary"));
        assert!(text.contains("all"));
    }

    #[test]
    fn test_get_palette_all() {
        let text = dispatch("get_palette", &args(&[("category", "all")]));
        assert_eq!(text.lines().count(), catalog().len());
    }

    #[test]
    fn test_list_all_official_then_extended() {
        let text = dispatch("list_all", &args(&[]));
        assert_eq!(text.lines().count(), catalog().len());
        assert!(text.starts_with("Ochre: #E74726"));
        assert!(text.ends_with("Pink: #D6519D (rgb(214, 81, 157))"));
    }

    #[test]
    fn test_generate_css_defaults() {
        let text = dispatch("generate_css", &args(&[]));
        assert!(text.starts_with(":root {\n"));
        assert!(text.contains("  --usyd-ochre: #E74726;\n"));
        assert!(!text.contains("--usyd-lilac"));
    }

    #[test]
    fn test_generate_css_custom() {
        let text = dispatch(
            "generate_css",
            &args(&[("scope", "all"), ("prefix", "--brand")]),
        );
        assert!(text.contains("--brand-ochre: #E74726;"));
        assert!(text.contains("--brand-pink: #D6519D;"));
    }

    #[test]
    fn test_unknown_tool() {
        let text = dispatch("paint_walls", &args(&[]));
        assert!(text.starts_with("error: Unknown tool: paint_walls"));
        assert!(text.contains("known tools: lookup"));
    }
}
