//! Turning an opaque `{...}` token into a stored value.

use denv_ir::Value;

use crate::document::Document;
use crate::parse_source;
use crate::parser::ParseContext;
use crate::stack::ensure_sufficient_stack;
use crate::store::NestedStore;

/// How the parser stores an opaque block.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BlockPolicy {
    /// Always an empty Map; the block's contents are dropped.
    Empty,
    /// The verbatim block text as [`Value::Opaque`].
    Raw,
    /// JSON first, then the inner text parsed as statements.
    #[default]
    Decode,
}

impl BlockPolicy {
    pub fn name(self) -> &'static str {
        match self {
            BlockPolicy::Empty => "empty",
            BlockPolicy::Raw => "raw",
            BlockPolicy::Decode => "decode",
        }
    }

    /// Parse a policy name as written on the command line.
    pub fn from_name(name: &str) -> Option<BlockPolicy> {
        match name {
            "empty" => Some(BlockPolicy::Empty),
            "raw" => Some(BlockPolicy::Raw),
            "decode" => Some(BlockPolicy::Decode),
            _ => None,
        }
    }
}

/// Value for the opaque block `raw` under `ctx.blocks`.
///
/// Statement decoding uses a fresh store configured like `template`;
/// exports declared inside the block are not kept.
pub(crate) fn decode_block(raw: &str, ctx: &ParseContext<'_>, template: &NestedStore) -> Value {
    match ctx.blocks {
        BlockPolicy::Empty => Value::empty_map(),
        BlockPolicy::Raw => Value::Opaque(raw.to_owned()),
        BlockPolicy::Decode => {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(raw) {
                if let Some(value) = Value::from_json(&json) {
                    return value;
                }
            }
            tracing::debug!(len = raw.len(), "block is not JSON, decoding as statements");

            let inner = raw.strip_prefix('{').unwrap_or(raw);
            let inner = inner.strip_suffix('}').unwrap_or(inner);
            let mut doc = Document::with_store(template.empty_like());
            ensure_sufficient_stack(|| parse_source(inner, &mut doc, ctx));
            Value::Map(doc.store.into_root())
        }
    }
}
