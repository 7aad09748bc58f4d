//! Zendesk client factory: credentials, base URL, authenticated requests.

use craftnet_core::config::ZendeskConfig;
use craftnet_core::CraftnetError;
use craftnet_support::ZendeskClient;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;

fn config() -> ZendeskConfig {
    ZendeskConfig {
        username: Some("agent@craftcms.com".to_string()),
        token: Some("s3cret".to_string()),
        ..Default::default()
    }
}

#[test]
fn missing_username_is_config_error() {
    let cfg = ZendeskConfig {
        username: None,
        ..config()
    };
    let err = ZendeskClient::from_config(&cfg).unwrap_err();
    assert!(matches!(err, CraftnetError::ConfigError(ref m) if m.contains("username")));
}

#[test]
fn blank_token_is_config_error() {
    let cfg = ZendeskConfig {
        token: Some("  ".to_string()),
        ..config()
    };
    let err = ZendeskClient::from_config(&cfg).unwrap_err();
    assert!(matches!(err, CraftnetError::ConfigError(ref m) if m.contains("token")));
}

#[test]
fn api_user_uses_token_suffix() {
    let client = ZendeskClient::from_config(&config()).unwrap();
    assert_eq!(client.username(), "agent@craftcms.com");
    assert_eq!(client.api_user(), "agent@craftcms.com/token");
    assert_eq!(client.subdomain(), "craftcms");
}

#[test]
fn request_carries_basic_auth_and_resolves_under_api_v2() {
    let client = ZendeskClient::from_config(&config()).unwrap();
    let request = client
        .request(Method::GET, "/tickets/42.json")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(request.method(), &Method::GET);
    assert_eq!(
        request.url().as_str(),
        "https://craftcms.zendesk.com/api/v2/tickets/42.json"
    );
    // base64("agent@craftcms.com/token:s3cret")
    assert_eq!(
        request.headers().get(AUTHORIZATION).unwrap(),
        "Basic YWdlbnRAY3JhZnRjbXMuY29tL3Rva2VuOnMzY3JldA=="
    );
}

#[test]
fn custom_subdomain_changes_host() {
    let cfg = ZendeskConfig {
        subdomain: "craftcms-sandbox".to_string(),
        ..config()
    };
    let client = ZendeskClient::from_config(&cfg).unwrap();
    assert_eq!(client.base_url().host_str(), Some("craftcms-sandbox.zendesk.com"));
}

#[test]
fn traversal_paths_are_rejected() {
    let client = ZendeskClient::from_config(&config()).unwrap();
    for path in ["../admin", "tickets//1.json", "https://evil.test/x"] {
        assert!(
            matches!(client.request(Method::GET, path), Err(CraftnetError::InvalidInput(_))),
            "{path} should be rejected"
        );
    }
}
