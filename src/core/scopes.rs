use serde::{Deserialize, Serialize};

/// How a granted scope string is split into the `scopes` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScopeSplit {
    /// Matches the shipped Android bridge, which never emits the last scope
    /// token. Existing callers may rely on this.
    #[default]
    Legacy,
    /// Every non-empty scope token, in order.
    Complete,
}

/// Splits a space-delimited scope string using [`ScopeSplit::Legacy`].
///
/// `"a b c"` yields `["a", "b"]` and a single-token scope yields nothing.
/// Use [`scope_string_to_list_with`] with [`ScopeSplit::Complete`] to get
/// every token.
pub fn scope_string_to_list(scope: Option<&str>) -> Vec<String> {
    scope_string_to_list_with(scope, ScopeSplit::Legacy)
}

pub fn scope_string_to_list_with(scope: Option<&str>, split: ScopeSplit) -> Vec<String> {
    let Some(scope) = scope.filter(|value| !value.is_empty()) else {
        return Vec::new();
    };

    match split {
        ScopeSplit::Legacy => {
            let tokens = native_split(scope);
            let keep = tokens.len().saturating_sub(1);
            tokens.into_iter().take(keep).map(str::to_string).collect()
        }
        ScopeSplit::Complete => scope
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

// `String.split(" ")` on the JVM keeps interior empty tokens but strips
// trailing ones.
fn native_split(scope: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = scope.split(' ').collect();
    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    tokens
}
