//! Rule-level comparison of two parsed stylesheets.

use std::collections::{HashMap, HashSet};

use super::stylesheet::ParsedRule;
use crate::style::StyleProperty;

/// One difference between the expected and the actual rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleDiff {
    /// The selector is expected but absent.
    Missing { selector: String },
    /// The selector is present but not expected.
    Unexpected { selector: String },
    /// Both have the selector with different declarations.
    Changed {
        selector: String,
        expected: Vec<StyleProperty>,
        actual: Vec<StyleProperty>,
    },
}

impl RuleDiff {
    pub fn selector(&self) -> &str {
        match self {
            RuleDiff::Missing { selector }
            | RuleDiff::Unexpected { selector }
            | RuleDiff::Changed { selector, .. } => selector,
        }
    }
}

/// Group rules by selector, keeping first-appearance order. Repeated
/// selectors are compared as the concatenation of their declarations.
fn group(rules: &[ParsedRule]) -> Vec<(&str, Vec<&StyleProperty>)> {
    let mut order: Vec<(&str, Vec<&StyleProperty>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for rule in rules {
        let slot = *index.entry(rule.selector.as_str()).or_insert_with(|| {
            order.push((rule.selector.as_str(), Vec::new()));
            order.len() - 1
        });
        order[slot].1.extend(rule.properties.iter());
    }
    order
}

/// Compare rules by selector.
///
/// Differences are reported in the expected rules' order, followed by
/// unexpected selectors in the actual rules' order. Declaration order
/// matters: the same declarations in another order count as a change.
pub fn diff_rules(expected: &[ParsedRule], actual: &[ParsedRule]) -> Vec<RuleDiff> {
    let expected = group(expected);
    let actual = group(actual);
    let actual_index: HashMap<&str, &Vec<&StyleProperty>> =
        actual.iter().map(|(sel, props)| (*sel, props)).collect();

    let mut diffs = Vec::new();
    for (selector, props) in &expected {
        match actual_index.get(selector) {
            None => diffs.push(RuleDiff::Missing {
                selector: selector.to_string(),
            }),
            Some(found) if *found != props => diffs.push(RuleDiff::Changed {
                selector: selector.to_string(),
                expected: props.iter().map(|p| (*p).clone()).collect(),
                actual: found.iter().map(|p| (*p).clone()).collect(),
            }),
            Some(_) => {}
        }
    }

    let expected_selectors: HashSet<&str> = expected.iter().map(|(sel, _)| *sel).collect();
    for (selector, _) in &actual {
        if !expected_selectors.contains(selector) {
            diffs.push(RuleDiff::Unexpected {
                selector: selector.to_string(),
            });
        }
    }

    diffs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_uss;

    #[test]
    fn test_identical_rules_have_no_diff() {
        let rules = parse_uss(".a { width: 1px; }\n.b { height: 2px; }");
        assert!(diff_rules(&rules, &rules).is_empty());
    }

    #[test]
    fn test_missing_unexpected_and_changed() {
        let expected = parse_uss(".a { width: 1px; }\n.b { height: 2px; }");
        let actual = parse_uss(".b { height: 3px; }\n.c { opacity: 1; }");

        let diffs = diff_rules(&expected, &actual);
        assert_eq!(diffs.len(), 3);
        assert_eq!(
            diffs[0],
            RuleDiff::Missing {
                selector: ".a".to_string()
            }
        );
        match &diffs[1] {
            RuleDiff::Changed {
                selector,
                expected,
                actual,
            } => {
                assert_eq!(selector, ".b");
                assert_eq!(expected[0].value(), "2px");
                assert_eq!(actual[0].value(), "3px");
            }
            other => panic!("Expected Changed, got {:?}", other),
        }
        assert_eq!(diffs[2].selector(), ".c");
        assert!(matches!(diffs[2], RuleDiff::Unexpected { .. }));
    }

    #[test]
    fn test_declaration_order_matters() {
        let expected = parse_uss(".a { color: red; width: 1px; }");
        let actual = parse_uss(".a { width: 1px; color: red; }");
        assert_eq!(diff_rules(&expected, &actual).len(), 1);
    }
}
