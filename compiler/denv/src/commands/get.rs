//! `get`: print one value.

use super::{load_env, Options};

pub fn get_value(path: &str, key: &str, options: &Options) -> Result<(), String> {
    let env = load_env(path, options)?;
    match env.get(key) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => Err(format!("key '{key}' not found in '{path}'")),
    }
}
