//! `fmt`: print the normalized text of a file.

use super::{load_env, Options};

pub fn format_file(path: &str, options: &Options) -> Result<(), String> {
    let env = load_env(path, options)?;
    let text = env.to_text();
    if !text.is_empty() {
        println!("{text}");
    }
    Ok(())
}
