//! CSS custom-property generation.
//!
//! Output is deterministic for a given scope and prefix, so downstream
//! projects can commit the generated block and diff regenerations.

use crate::catalog::Catalog;
use crate::types::Scope;

/// Default variable-name prefix.
pub const DEFAULT_PREFIX: &str = "--usyd";

/// Derive a CSS identifier slug from a display name.
///
/// Lowercases the name and replaces runs of non-alphanumeric characters
/// with a single `-`: "Light Grey" becomes "light-grey".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Generate a `:root` block of custom-property declarations.
///
/// One `{prefix}-{slug}: {hex};` line per record in `scope`, in catalog
/// declaration order.
pub fn stylesheet(catalog: &Catalog, scope: Scope, prefix: &str) -> String {
    let mut css = String::from(":root {\n");

    for record in catalog.in_scope(scope) {
        css.push_str(&format!(
            "  {}-{}: {};\n",
            prefix,
            slugify(record.name),
            record.colour
        ));
    }

    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Ochre"), "ochre");
        assert_eq!(slugify("Light Grey"), "light-grey");
        assert_eq!(slugify("Heritage Rose"), "heritage-rose");
        assert_eq!(slugify("Masterbrand Charcoal"), "masterbrand-charcoal");
    }

    #[test]
    fn test_slugify_collapses_and_trims() {
        assert_eq!(slugify("a  b"), "a-b");
        assert_eq!(slugify("a&b"), "a-b");
        assert_eq!(slugify(" edge case "), "edge-case");
    }

    #[test]
    fn test_stylesheet_official_block() {
        let css = stylesheet(catalog(), Scope::Official, DEFAULT_PREFIX);
        insta::assert_snapshot!(css, @r###"
        :root {
          --usyd-ochre: #E74726;
          --usyd-white: #FFFFFF;
          --usyd-black: #000000;
          --usyd-light-grey: #E6E7E9;
          --usyd-charcoal: #424143;
          --usyd-sandstone: #FBEEE2;
          --usyd-heritage-rose: #DAA8A2;
          --usyd-jacaranda: #8F9EC8;
          --usyd-navy: #1B355E;
          --usyd-eucalypt: #71A499;
        }
        "###);
    }

    #[test]
    fn test_stylesheet_custom_prefix() {
        let css = stylesheet(catalog(), Scope::Official, "--brand");
        assert!(css.contains("--brand-ochre: #E74726;"));
        assert!(!css.contains("--usyd"));
    }

    #[test]
    fn test_stylesheet_line_count_matches_scope() {
        let all = stylesheet(catalog(), Scope::All, DEFAULT_PREFIX);
        let declarations = all.lines().filter(|l| l.ends_with(';')).count();
        assert_eq!(declarations, catalog().len());

        let extended = stylesheet(catalog(), Scope::Extended, DEFAULT_PREFIX);
        assert!(extended.contains("--usyd-lilac: #B896C6;"));
        assert!(!extended.contains("--usyd-ochre:"));
    }

    #[test]
    fn test_stylesheet_deterministic() {
        let first = stylesheet(catalog(), Scope::All, DEFAULT_PREFIX);
        let second = stylesheet(catalog(), Scope::All, DEFAULT_PREFIX);
        assert_eq!(first, second);
    }
}
