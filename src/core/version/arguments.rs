// ─── Launch Arguments ───
// Flattens `arguments.game` entries into a plain token list and resolves
// `--flag value` pairs.

use serde::Deserialize;

/// One entry of `arguments.game`.
///
/// Entries are either bare strings or objects carrying a `values` list (usually
/// alongside `rules` that gate them by platform or feature). Any other shape is
/// kept as [`Argument::Unrecognized`] and contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Argument {
    Plain(String),
    Conditional { values: Vec<String> },
    Unrecognized(serde_json::Value),
}

impl Argument {
    /// Tokens this entry contributes, in order.
    pub fn tokens(&self) -> &[String] {
        match self {
            Argument::Plain(value) => std::slice::from_ref(value),
            Argument::Conditional { values } => values,
            Argument::Unrecognized(_) => &[],
        }
    }
}

/// Flatten arguments into one ordered token sequence.
pub fn flatten(args: &[Argument]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.tokens().iter().cloned())
        .collect()
}

/// Value following the first occurrence of `flag`.
///
/// Returns `None` when the flag is missing or is the last token.
pub fn flag_value<'a>(tokens: &'a [String], flag: &str) -> Option<&'a str> {
    tokens
        .windows(2)
        .find(|pair| pair[0] == flag)
        .map(|pair| pair[1].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> Vec<Argument> {
        serde_json::from_value(value).unwrap()
    }

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flattens_plain_and_conditional_entries() {
        let args = parse(serde_json::json!([
            "--launchTarget",
            "forgeclient",
            {
                "rules": [{"action": "allow", "features": {"is_demo_user": true}}],
                "values": ["--extra", "x"]
            }
        ]));

        let flat = flatten(&args);
        assert_eq!(flat, tokens(&["--launchTarget", "forgeclient", "--extra", "x"]));
        assert_eq!(flag_value(&flat, "--launchTarget"), Some("forgeclient"));
    }

    #[test]
    fn unrecognized_shapes_contribute_nothing() {
        let args = parse(serde_json::json!([
            "--a",
            {"rules": [], "values": "not-an-array"},
            {"rules": []},
            {"values": [1, 2]},
            42,
            null,
            "b"
        ]));

        assert!(matches!(args[1], Argument::Unrecognized(_)));
        assert!(matches!(args[3], Argument::Unrecognized(_)));
        assert_eq!(flatten(&args), tokens(&["--a", "b"]));
    }

    #[test]
    fn flat_string_form_is_supported() {
        let args = parse(serde_json::json!(["--username", "${auth_player_name}"]));
        assert_eq!(
            flag_value(&flatten(&args), "--username"),
            Some("${auth_player_name}")
        );
    }

    #[test]
    fn flag_at_end_has_no_value() {
        let flat = tokens(&["--demo", "--launchTarget"]);
        assert_eq!(flag_value(&flat, "--launchTarget"), None);
    }

    #[test]
    fn missing_flag_has_no_value() {
        let flat = tokens(&["--username", "Player"]);
        assert_eq!(flag_value(&flat, "--launchTarget"), None);
        assert_eq!(flag_value(&[], "--launchTarget"), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let flat = tokens(&["--launchTarget", "forgeclient", "--launchTarget", "neoforgeclient"]);
        assert_eq!(flag_value(&flat, "--launchTarget"), Some("forgeclient"));
    }

    #[test]
    fn flag_value_may_itself_be_a_flag() {
        let flat = tokens(&["--a", "--b", "c"]);
        assert_eq!(flag_value(&flat, "--a"), Some("--b"));
        assert_eq!(flag_value(&flat, "--b"), Some("c"));
    }
}
