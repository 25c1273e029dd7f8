//! Ordered literal replacement with all-or-nothing presence checks.

use super::error::PatchError;
use super::types::Replacement;

/// Apply `rules` in declared order, replacing the first occurrence of each
/// `old` in the text produced by the rules before it.
///
/// Returns the first rule whose `old` is absent. Nothing is returned for the
/// rules that did match, so callers never observe a partial result.
pub fn apply_replacements(text: &str, rules: &[Replacement]) -> Result<String, PatchError> {
    let mut current = text.to_string();
    for (index, rule) in rules.iter().enumerate() {
        if !current.contains(rule.old.as_str()) {
            return Err(PatchError::SnippetNotFound {
                rule: index + 1,
                snippet: rule.old.clone(),
            });
        }
        current = current.replacen(rule.old.as_str(), &rule.new, 1);
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nav_rules() -> Vec<Replacement> {
        vec![
            Replacement::new("dY\"? My Ads", "My Ads"),
            Replacement::new("dY'3 Billing", "Billing"),
            Replacement::new("?s,? Settings", "Settings"),
            Replacement::new("a?,? Favorites", "Favorites"),
            Replacement::new("dY>? Support", "Support"),
        ]
    }

    #[test]
    fn replaces_single_rule() {
        let rules = vec![Replacement::new("dY\"? My Ads", "My Ads")];
        let patched = apply_replacements("Title: dY\"? My Ads end", &rules).expect("replace");
        assert_eq!(patched, "Title: My Ads end");
    }

    #[test]
    fn replaces_all_rules_regardless_of_text_order() {
        let text = "dY>? Support|a?,? Favorites|dY'3 Billing|?s,? Settings|dY\"? My Ads";
        let patched = apply_replacements(text, &nav_rules()).expect("replace");
        assert_eq!(patched, "Support|Favorites|Billing|Settings|My Ads");
    }

    #[test]
    fn reports_first_missing_snippet_in_declared_order() {
        // Rules 2 and 4 are both absent; rule 2 must be reported.
        let text = "dY\"? My Ads|?s,? Settings|dY>? Support";
        let err = apply_replacements(text, &nav_rules()).expect_err("missing snippets");
        assert_eq!(
            err,
            PatchError::SnippetNotFound {
                rule: 2,
                snippet: "dY'3 Billing".to_string()
            }
        );
    }

    #[test]
    fn later_rules_see_earlier_output() {
        let rules = vec![Replacement::new("a", "bc"), Replacement::new("bc", "d")];
        assert_eq!(apply_replacements("a", &rules).expect("replace"), "d");
    }

    #[test]
    fn earlier_rule_can_consume_later_snippet() {
        let rules = vec![Replacement::new("ab", "x"), Replacement::new("b", "y")];
        let err = apply_replacements("ab", &rules).expect_err("b consumed by rule 1");
        assert_eq!(
            err,
            PatchError::SnippetNotFound {
                rule: 2,
                snippet: "b".to_string()
            }
        );
    }

    #[test]
    fn only_first_occurrence_is_replaced() {
        let rules = vec![Replacement::new("Ads", "Listings")];
        assert_eq!(
            apply_replacements("Ads, Ads", &rules).expect("replace"),
            "Listings, Ads"
        );
    }

    #[test]
    fn rerun_on_patched_text_fails() {
        let rules = nav_rules();
        let text = "dY\"? My Ads dY'3 Billing ?s,? Settings a?,? Favorites dY>? Support";
        let patched = apply_replacements(text, &rules).expect("first run");
        let err = apply_replacements(&patched, &rules).expect_err("second run");
        assert_eq!(
            err,
            PatchError::SnippetNotFound {
                rule: 1,
                snippet: "dY\"? My Ads".to_string()
            }
        );
    }

    #[test]
    fn empty_rule_list_is_identity() {
        assert_eq!(apply_replacements("same", &[]).expect("replace"), "same");
    }
}
