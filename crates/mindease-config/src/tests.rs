#[cfg(test)]
mod tests {
    use super::super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.sensors.stream_interval_secs, 3);
        assert!(config.chat.rules_path.is_none());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [server]
            port = 8080

            [chat]
            rules_path = "rules.json"
            "#,
        ).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.chat.rules_path, Some(PathBuf::from("rules.json")));
        assert_eq!(config.sensors.device_id, "esp32-max30102-001");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(Some("0.0.0.0".into()), Some("9000".into())).unwrap();
        assert_eq!(config.server.bind_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_bad_port_override_is_rejected() {
        let mut config = Config::default();
        let err = config.apply_env_overrides(None, Some("not-a-port".into())).unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: "MINDEASE_PORT", .. }));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::from_file("/definitely/not/here/mindease.toml").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
