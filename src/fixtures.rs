#[cfg(test)]
pub mod test {
    use crate::Session;

    /// A small document exercising nesting, used by tests that want a
    /// realistic multi-source session without repeating the setup.
    pub const SAMPLE_YAML: &str = "\
server:
  host: yaml.example.com
  port: 8080
";

    /// A session with all three sources populated: the sample document,
    /// an `APP_`-prefixed synthetic environment, and an argument list
    /// carrying `--port`.
    pub fn sample_session<'a>() -> Session<'a> {
        let mut session = Session::new()
            .with_yaml(SAMPLE_YAML)
            .with_env_prefix("APP_")
            .with_args(["--port", "9000"]);
        session.env_vars([
            ("APP_HOST", "env.example.com"),
            ("APP_VERBOSE", "true"),
        ]);
        session
    }

    #[test]
    fn sample_session_carries_all_three_sources() {
        let mut port = 0i64;
        let mut session = sample_session();
        session.add(&mut port).yaml("server.port");
        session.resolve().unwrap();
        assert_eq!(port, 8080);
    }
}
