/*!
# Token Model

Serde types for the Tokens Studio wire format: a token is a leaf value with
a semantic `type` tag, a token set is a flat key-to-token mapping, and the
output document is a collection of named sets. Sets use [`IndexMap`] so the
written file preserves the order tokens were produced in.
*/
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the set that receives tokens from documents without a top-level
/// mapping to derive set names from.
pub const GLOBAL_SET: &str = "global";

/// Semantic type tag attached to each token.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Free-form copy; the kind this tool emits.
    Text,
    /// Plain string token, normalized to [`TokenKind::Text`] when flattened.
    String,
}

/// A leaf value paired with its semantic type tag.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// The leaf text content.
    pub value: String,
    /// The semantic type tag, serialized as `"type"`.
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

impl Token {
    /// Construct a `text`-typed token, the only kind flattening produces.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: TokenKind::Text,
        }
    }
}

/// A flat mapping from dotted/bracketed key to token.
pub type TokenSet = IndexMap<String, Token>;

/// The complete output document: token sets keyed by set name.
pub type Collection = IndexMap<String, TokenSet>;
