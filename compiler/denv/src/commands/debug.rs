//! Inspection commands: `lex` and `dump`.

use std::fmt::Write;

use denv::{Env, Token};

use super::{load_env, Options};

/// Print the token stream of `path`.
pub fn lex_file(path: &str, options: &Options) -> Result<(), String> {
    let env = options.engine(super::read_file(path)?);
    let tokens = env.tokens();
    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    print!("{}", render_tokens(&tokens));
    Ok(())
}

/// Print the parsed entries of `path`, as text lines or JSON.
pub fn dump_file(path: &str, options: &Options) -> Result<(), String> {
    let env = load_env(path, options)?;
    if options.json {
        println!("{}", render_json(&env));
    } else {
        print!("{}", render_entries(&env));
    }
    Ok(())
}

pub(super) fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "  {token:?}");
    }
    out
}

/// `key = value (kind)` per flattened entry, then the exports.
pub(super) fn render_entries(env: &Env) -> String {
    let mut out = String::new();
    for (key, value) in &env.flatten() {
        let _ = writeln!(out, "{key} = {value} ({})", value.kind());
    }
    for (key, value) in env.exports() {
        let _ = writeln!(out, "export {key} = {value} ({})", value.kind());
    }
    out
}

pub(super) fn render_json(env: &Env) -> String {
    let store: serde_json::Map<String, serde_json::Value> = env
        .store()
        .root()
        .iter()
        .map(|(key, value)| (key.clone(), value.to_json()))
        .collect();
    let exports: serde_json::Map<String, serde_json::Value> = env
        .exports()
        .iter()
        .map(|(key, value)| (key.clone(), value.to_json()))
        .collect();
    let document = serde_json::json!({ "store": store, "exports": exports });
    serde_json::to_string_pretty(&document).unwrap_or_default()
}
