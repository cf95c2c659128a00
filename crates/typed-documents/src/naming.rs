//! Derivation of the result/variables type names an operation is expected to
//! have in the sibling type-generation output.
//!
//! Generated declarations only compile if these names match the external
//! type generator bit-for-bit, so [`pascal_case`] reproduces that generator's
//! case-folding rules exactly rather than approximating them.

use crate::OperationKind;
use regex::Regex;
use std::sync::OnceLock;

/// Placeholder inserted at word boundaries before splitting into words.
const WORD_BREAK: char = '\0';

fn lower_to_upper_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap())
}

fn acronym_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z])([A-Z][a-z])").unwrap())
}

fn non_alphanumeric_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9]+").unwrap())
}

/// Convert a free-form identifier to PascalCase.
///
/// Words are split at lower-to-upper transitions (`fooBar`), at the end of an
/// acronym (`HTTPServer` -> `HTTP`, `Server`) and at any run of characters
/// other than ASCII letters and digits. Each word is then capitalized with the
/// remainder lower-cased. A word after the first that starts with a digit is
/// prefixed with `_` so that it stays visually separate (`v1 2` -> `V1_2`).
///
/// ```
/// use graphql_typed_documents::naming::pascal_case;
///
/// assert_eq!(pascal_case("alsoCreateAuthor"), "AlsoCreateAuthor");
/// assert_eq!(pascal_case("get_user-by_ID"), "GetUserById");
/// ```
pub fn pascal_case(input: &str) -> String {
    let split = format!("${{1}}{WORD_BREAK}${{2}}");
    let marked = lower_to_upper_boundary().replace_all(input, split.as_str());
    let marked = acronym_boundary().replace_all(&marked, split.as_str());
    let marked = non_alphanumeric_run().replace_all(&marked, WORD_BREAK.to_string());

    marked
        .trim_matches(WORD_BREAK)
        .split(WORD_BREAK)
        .enumerate()
        .map(|(idx, word)| pascal_case_word(idx, word))
        .collect()
}

fn pascal_case_word(idx: usize, word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str().to_lowercase();
    if idx > 0 && first.is_ascii_digit() {
        format!("_{first}{rest}")
    } else {
        format!("{}{rest}", first.to_uppercase())
    }
}

/// The names of the types generated for a single operation by the sibling
/// type-generation stage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperationTypeNames {
    base: String,
    suffix: String,
}
impl OperationTypeNames {
    pub fn new(operation_name: &str, kind: OperationKind) -> Self {
        Self {
            base: pascal_case(operation_name),
            suffix: pascal_case(kind.as_str()),
        }
    }

    /// The PascalCased operation name (e.g. `CreateAuthor`).
    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    /// The PascalCased operation kind (e.g. `Mutation`).
    pub fn suffix(&self) -> &str {
        self.suffix.as_str()
    }

    /// e.g. `CreateAuthorMutation`
    pub fn result_type_name(&self) -> String {
        format!("{}{}", self.base, self.suffix)
    }

    /// e.g. `CreateAuthorMutationVariables`
    pub fn variables_type_name(&self) -> String {
        format!("{}{}Variables", self.base, self.suffix)
    }
}
