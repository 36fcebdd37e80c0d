//! End-to-end behavior of the engine through its public API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use denv::{Bind, BindError, Env, Field, Map, MemoryEnvironment, Value, ValueKind};
use pretty_assertions::assert_eq;

fn parsed(source: &str) -> Env {
    let mut env = Env::new(source, ".");
    env.parse();
    env
}

#[test]
fn integers_and_strings() {
    let env = parsed("PORT=8080\nNAME=bob");
    assert_eq!(env.get("PORT"), Some(&Value::Integer(8080)));
    assert_eq!(env.get("NAME"), Some(&Value::from("bob")));
}

#[test]
fn booleans_are_total_and_case_insensitive() {
    for (word, expected) in [
        ("On", Value::Boolean(true)),
        ("TRUE", Value::Boolean(true)),
        ("yes", Value::Boolean(true)),
        ("off", Value::Boolean(false)),
        ("N", Value::Boolean(false)),
        ("maybe", Value::from("maybe")),
    ] {
        let env = parsed(&format!("FLAG={word}"));
        assert_eq!(env.get("FLAG"), Some(&expected), "FLAG={word}");
    }
}

#[test]
fn interpolation_depends_on_inject_order() {
    let source = r#"GREETING="hi ${name}""#;

    let mut before = Env::new(source, ".");
    before.inject([("name", "bob")]).parse();
    assert_eq!(before.get("GREETING"), Some(&Value::from("hi bob")));

    let mut after = Env::new(source, ".");
    after.parse().inject([("name", "bob")]);
    let greeting = after.get("GREETING").and_then(Value::as_str).unwrap();
    assert!(greeting.contains("${name}"), "{greeting}");
}

#[test]
fn nested_paths_round_trip_through_flatten() {
    let env = parsed("DB.HOST=localhost\nDB.PORT=5432");
    assert_eq!(env.get("DB.HOST"), Some(&Value::from("localhost")));
    assert_eq!(env.get("DB.PORT"), Some(&Value::Integer(5432)));

    let mut expected = Map::new();
    expected.insert("DB.HOST".to_owned(), Value::from("localhost"));
    expected.insert("DB.PORT".to_owned(), Value::Integer(5432));
    assert_eq!(env.flatten(), expected);
}

#[test]
fn arrays_keep_order() {
    let env = parsed("LIST=[1,2,3]");
    let items: Vec<f64> = env
        .get("LIST")
        .and_then(Value::as_list)
        .unwrap()
        .iter()
        .filter_map(Value::as_float)
        .collect();
    assert_eq!(items, vec![1.0, 2.0, 3.0]);
}

#[test]
fn exports_have_priority() {
    let env = parsed("API_KEY=other\nexport API_KEY=secret");
    assert_eq!(env.get("API_KEY"), Some(&Value::from("secret")));

    let env = parsed("export API_KEY=secret\nAPI_KEY=other");
    assert_eq!(env.get("API_KEY"), Some(&Value::from("secret")));
}

#[test]
fn malformed_number_is_text() {
    let env = parsed("VERSION=1.2.3");
    assert_eq!(env.get("VERSION"), Some(&Value::from("1.2.3")));
    assert_eq!(env.get("VERSION").map(Value::kind), Some(ValueKind::String));
}

#[test]
fn serialized_text_reparses_to_the_same_entries() {
    let env = parsed(concat!(
        "# service config\n",
        "NAME=\"my service\"\n",
        "PORT=8080\n",
        "DEBUG=enable\n",
        "TIMEOUT=2.5\n",
        "HOSTS=[\"a.example\", \"b.example\"]\n",
        "DB.HOST=localhost\n",
        "DB.POOL.SIZE=4\n",
        "GREETING=\"hi ${name}\"\n",
        "export TOKEN=`raw \\n text`\n",
    ));
    let mut again = Env::new(env.to_text(), ".");
    again.parse();
    assert_eq!(again.flatten(), env.flatten());
    assert_eq!(again.exports(), env.exports());
}

#[test]
fn never_fails_on_garbage() {
    let env = parsed("@@ ;; \"unterminated\n{ [ ( <\n`also open");
    assert_eq!(env.flatten().len(), 0);
}

#[derive(Default)]
struct Database {
    host: String,
    port: i64,
    pool: f64,
    tls: bool,
}

impl Bind for Database {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::keyed("host", "DB.HOST", &mut self.host),
            Field::keyed("port", "DB.PORT", &mut self.port),
            Field::keyed("pool", "DB.POOL", &mut self.pool),
            Field::keyed("tls", "DB.TLS", &mut self.tls),
        ]
    }
}

#[test]
fn bind_projects_onto_a_record() {
    let env = parsed("DB.HOST=db.internal\nDB.PORT=5432\nDB.POOL=8\nDB.TLS=on");
    let mut db = Database::default();
    env.bind(&mut db).unwrap();
    assert_eq!(db.host, "db.internal");
    assert_eq!(db.port, 5432);
    assert!((db.pool - 8.0).abs() < f64::EPSILON);
    assert!(db.tls);
}

#[test]
fn bind_reports_the_failing_field() {
    let env = parsed("DB.HOST=h\nDB.PORT=\"5432\"");
    let mut db = Database::default();
    let err = env.bind(&mut db).unwrap_err();
    assert!(matches!(err, BindError::KindMismatch { field: "port", .. }));
    assert_eq!(db.host, "h");
}

#[test]
fn materialize_into_memory() {
    let env = parsed("DB.HOST=localhost\nexport API_KEY=secret\nAPI_KEY=stored");
    let mut sink = MemoryEnvironment::new();
    env.materialize_environment(&mut sink, [("DB.HOST", "db")]);
    assert_eq!(sink.get("DB.HOST"), Some("db"));
    assert_eq!(sink.get("API_KEY"), Some("secret"));
}
