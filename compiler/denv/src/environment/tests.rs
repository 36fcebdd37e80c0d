use super::*;
use pretty_assertions::assert_eq;

#[test]
fn memory_environment_keeps_order_and_overwrites() {
    let mut env = MemoryEnvironment::new();
    env.set_var("B", "1");
    env.set_var("A", "2");
    env.set_var("B", "3");
    assert_eq!(env.iter().collect::<Vec<_>>(), vec![("B", "3"), ("A", "2")]);
    assert_eq!(env.len(), 2);
    assert_eq!(env.get("C"), None);
}

#[test]
fn writer_through_mutable_reference() {
    fn write_one(mut writer: impl EnvironmentWriter) {
        writer.set_var("K", "v");
    }

    let mut env = MemoryEnvironment::new();
    write_one(&mut env);
    assert_eq!(env.get("K"), Some("v"));
}

#[test]
fn process_environment_sets_variables() {
    let key = "DENV_ENVIRONMENT_TEST_SET";
    ProcessEnvironment.set_var(key, "value");
    assert_eq!(std::env::var(key).ok().as_deref(), Some("value"));
}

#[test]
fn process_environment_skips_invalid_entries() {
    let mut process = ProcessEnvironment;
    process.set_var("", "x");
    process.set_var("DENV_BAD=NAME", "x");
    process.set_var("DENV_ENVIRONMENT_TEST_NUL", "a\0b");
    assert!(std::env::var("DENV_ENVIRONMENT_TEST_NUL").is_err());
    assert!(std::env::var("DENV_BAD").is_err());
}
