use pingdom_client::config::Config;
use pingdom_client::manager::ServiceManager;
use pingdom_client::transport::{HasTransport, PingdomService};
use std::time::Duration;

#[test]
fn created_service_reflects_manager_defaults() {
    let mut manager = ServiceManager::new();
    manager.set_app_key("K1").set_connect_timeout(5000);

    let service = manager.check_service();
    let transport = service.transport();

    assert_eq!(transport.app_key(), Some("K1"));
    assert_eq!(transport.connect_timeout(), Some(Duration::from_millis(5000)));
    // Unset fields keep the service's own default.
    assert_eq!(transport.read_timeout(), None);
    assert!(transport.credentials().is_none());
}

#[test]
fn manager_mutation_is_not_retroactive() {
    let mut manager = ServiceManager::new();
    manager.set_app_key("K1");

    let first = manager.probe_service();
    manager.set_app_key("K2");
    let second = manager.probe_service();

    assert_eq!(first.transport().app_key(), Some("K1"));
    assert_eq!(second.transport().app_key(), Some("K2"));
}

#[test]
fn last_set_value_wins() {
    let mut manager = ServiceManager::new();
    manager.set_read_timeout(1000).set_read_timeout(3000);

    let service = manager.settings_service();
    assert_eq!(
        service.transport().read_timeout(),
        Some(Duration::from_millis(3000))
    );
}

#[test]
fn authentication_is_applied_as_a_pair() {
    let mut manager = ServiceManager::new();
    manager.set_authentication("user@example.com", "secret");

    let service = manager.contact_service();
    let credentials = service.transport().credentials().expect("credentials set");
    assert_eq!(credentials.email, "user@example.com");
    assert_eq!(credentials.password, "secret");
}

#[test]
fn partial_credentials_do_not_authenticate() {
    let config = Config {
        email: Some("user@example.com".to_string()),
        ..Config::default()
    };
    let manager = ServiceManager::from_config(config);

    let service = manager.check_service();
    assert!(service.transport().credentials().is_none());
}

#[test]
fn static_constructors_bypass_defaults() {
    let mut manager = ServiceManager::new();
    manager.set_app_key("K1");

    let service = ServiceManager::new_check_service();
    assert_eq!(service.transport().app_key(), None);

    // And the manager keeps working as before.
    let configured = manager.check_service();
    assert_eq!(configured.transport().app_key(), Some("K1"));
}

#[test]
fn every_factory_method_applies_defaults() {
    let mut manager = ServiceManager::new();
    manager.set_app_key("K1");

    assert_eq!(manager.actions_service().transport().app_key(), Some("K1"));
    assert_eq!(manager.analysis_service().transport().app_key(), Some("K1"));
    assert_eq!(manager.check_service().transport().app_key(), Some("K1"));
    assert_eq!(manager.contact_service().transport().app_key(), Some("K1"));
    assert_eq!(manager.probe_service().transport().app_key(), Some("K1"));
    assert_eq!(manager.reference_service().transport().app_key(), Some("K1"));
    assert_eq!(
        manager.reports_email_service().transport().app_key(),
        Some("K1")
    );
    assert_eq!(
        manager.reports_public_service().transport().app_key(),
        Some("K1")
    );
    assert_eq!(
        manager.reports_shared_service().transport().app_key(),
        Some("K1")
    );
    assert_eq!(manager.results_service().transport().app_key(), Some("K1"));
    assert_eq!(
        manager.server_time_service().transport().app_key(),
        Some("K1")
    );
    assert_eq!(manager.settings_service().transport().app_key(), Some("K1"));
    assert_eq!(
        manager.summary_average_service().transport().app_key(),
        Some("K1")
    );
    assert_eq!(
        manager.summary_outage_service().transport().app_key(),
        Some("K1")
    );
    assert_eq!(
        manager.summary_performance_service().transport().app_key(),
        Some("K1")
    );
    assert_eq!(
        manager.summary_probes_service().transport().app_key(),
        Some("K1")
    );
    assert_eq!(
        manager.traceroute_service().transport().app_key(),
        Some("K1")
    );
}

#[test]
fn service_setters_are_independent_after_creation() {
    let manager = ServiceManager::new();
    let mut service = manager.check_service();

    service.set_app_key("local");
    assert_eq!(service.transport().app_key(), Some("local"));
    // The manager saw nothing.
    assert!(manager.config().app_key.is_none());
}
