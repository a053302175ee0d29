use pingdom_client::config::{Config, apply_config};
use pingdom_client::transport::PingdomService;

/// Fake service that records every setter call in order.
#[derive(Default)]
struct RecordingService {
    calls: Vec<String>,
}

impl PingdomService for RecordingService {
    fn set_app_key(&mut self, value: &str) {
        self.calls.push(format!("app_key:{value}"));
    }

    fn set_authentication(&mut self, email: &str, password: &str) {
        self.calls.push(format!("auth:{email}:{password}"));
    }

    fn set_connect_timeout(&mut self, millis: u64) {
        self.calls.push(format!("connect:{millis}"));
    }

    fn set_read_timeout(&mut self, millis: u64) {
        self.calls.push(format!("read:{millis}"));
    }

    fn set_base_url(&mut self, url: &str) {
        self.calls.push(format!("base_url:{url}"));
    }
}

#[test]
fn new_config_has_every_field_unset() {
    let config = Config::new();
    assert!(config.app_key.is_none());
    assert!(config.email.is_none());
    assert!(config.password.is_none());
    assert!(config.connect_timeout_ms.is_none());
    assert!(config.read_timeout_ms.is_none());
    assert!(config.base_url.is_none());
}

#[test]
fn apply_config_applies_fields_in_fixed_order() {
    let config = Config {
        app_key: Some("K1".to_string()),
        email: Some("user@example.com".to_string()),
        password: Some("secret".to_string()),
        connect_timeout_ms: Some(5000),
        read_timeout_ms: Some(10000),
        base_url: Some("http://localhost".to_string()),
    };

    let mut service = RecordingService::default();
    apply_config(&mut service, &config);

    assert_eq!(
        service.calls,
        vec![
            "app_key:K1",
            "auth:user@example.com:secret",
            "connect:5000",
            "read:10000",
            "base_url:http://localhost",
        ]
    );
}

#[test]
fn apply_config_skips_unset_fields() {
    let config = Config {
        connect_timeout_ms: Some(2500),
        ..Config::default()
    };

    let mut service = RecordingService::default();
    apply_config(&mut service, &config);

    assert_eq!(service.calls, vec!["connect:2500"]);
}

#[test]
fn apply_config_requires_both_email_and_password() {
    let config = Config {
        email: Some("user@example.com".to_string()),
        ..Config::default()
    };

    let mut service = RecordingService::default();
    apply_config(&mut service, &config);
    assert!(service.calls.is_empty());

    let config = Config {
        password: Some("secret".to_string()),
        ..Config::default()
    };

    let mut service = RecordingService::default();
    apply_config(&mut service, &config);
    assert!(service.calls.is_empty());
}

#[test]
fn apply_config_passes_zero_timeout_through() {
    // No validation: zero is stored and left to the transport to reject.
    let config = Config {
        read_timeout_ms: Some(0),
        ..Config::default()
    };

    let mut service = RecordingService::default();
    apply_config(&mut service, &config);
    assert_eq!(service.calls, vec!["read:0"]);
}

#[test]
fn from_env_picks_up_pingdom_variables() {
    unsafe {
        std::env::set_var("PINGDOM_APP_KEY", "env-key");
        std::env::set_var("PINGDOM_CONNECT_TIMEOUT_MS", "1234");
    }

    let config = Config::from_env();
    assert_eq!(config.app_key.as_deref(), Some("env-key"));
    assert_eq!(config.connect_timeout_ms, Some(1234));

    unsafe {
        std::env::remove_var("PINGDOM_APP_KEY");
        std::env::remove_var("PINGDOM_CONNECT_TIMEOUT_MS");
    }
}
