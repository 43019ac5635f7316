//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use domain_expiry_provider::{
    NamecheapCredentials, RegistrarEndpoint, RegistrarOptions, RegistrarProvider, create_provider,
};
use wiremock::MockServer;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

// ============ Fixtures ============

pub const TEST_API_USER: &str = "alice";
pub const TEST_API_KEY: &str = "0123456789abcdef";
pub const TEST_CLIENT_IP: &str = "203.0.113.7";

pub fn test_credentials() -> NamecheapCredentials {
    NamecheapCredentials {
        api_user: TEST_API_USER.to_string(),
        api_key: TEST_API_KEY.to_string(),
        client_ip: TEST_CLIENT_IP.to_string(),
    }
}

/// Options pointing at a mock server, with a short timeout.
pub fn mock_options(server: &MockServer) -> RegistrarOptions {
    RegistrarOptions {
        endpoint: RegistrarEndpoint::Custom(server.uri()),
        request_timeout_secs: 2,
        connect_timeout_secs: 2,
    }
}

pub fn mock_provider(server: &MockServer) -> Arc<dyn RegistrarProvider> {
    provider_with(&mock_options(server))
}

/// Provider with the test credentials and arbitrary options.
pub fn provider_with(options: &RegistrarOptions) -> Arc<dyn RegistrarProvider> {
    match create_provider(test_credentials(), options) {
        Ok(provider) => provider,
        Err(e) => panic!("failed to create provider: {e}"),
    }
}

// ============ XML builders ============

/// `<Domain .../>` element with the attributes the checker reads.
pub fn domain_xml(id: u32, name: &str, expires: &str) -> String {
    format!(
        r#"<Domain ID="{id}" Name="{name}" User="{TEST_API_USER}" Created="01/01/2020" Expires="{expires}" IsExpired="false" IsLocked="false" AutoRenew="false" WhoisGuard="ENABLED" IsPremium="false" IsOurDNS="true"/>"#
    )
}

/// Successful `namecheap.domains.getList` envelope around the given `(name, expires)` pairs.
pub fn domain_list_xml(domains: &[(&str, &str)]) -> String {
    let items: String = domains
        .iter()
        .zip(1..)
        .map(|((name, expires), id)| domain_xml(id, name, expires))
        .collect::<Vec<_>>()
        .join("\n      ");
    let result = if items.is_empty() {
        "<DomainGetListResult />".to_string()
    } else {
        format!("<DomainGetListResult>\n      {items}\n    </DomainGetListResult>")
    };
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <Warnings />
  <RequestedCommand>namecheap.domains.getList</RequestedCommand>
  <CommandResponse Type="namecheap.domains.getList">
    {result}
    <Paging>
      <TotalItems>{total}</TotalItems>
      <CurrentPage>1</CurrentPage>
      <PageSize>20</PageSize>
    </Paging>
  </CommandResponse>
  <Server>WEB1-SANDBOX1</Server>
  <GMTTimeDifference>--5:00</GMTTimeDifference>
  <ExecutionTime>0.008</ExecutionTime>
</ApiResponse>"#,
        total = domains.len()
    )
}

/// Error envelope with a single `<Error>`.
pub fn error_xml(number: &str, message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="ERROR" xmlns="http://api.namecheap.com/xml.response">
  <Errors>
    <Error Number="{number}">{message}</Error>
  </Errors>
  <Warnings />
  <RequestedCommand>namecheap.domains.getList</RequestedCommand>
  <Server>WEB1-SANDBOX1</Server>
  <GMTTimeDifference>--5:00</GMTTimeDifference>
  <ExecutionTime>0.002</ExecutionTime>
</ApiResponse>"#
    )
}

// ============ Live sandbox ============

/// 测试上下文 - 封装真实 sandbox Provider
pub struct TestContext {
    pub provider: Arc<dyn RegistrarProvider>,
}

impl TestContext {
    /// 创建 Namecheap sandbox 测试上下文
    pub fn namecheap_sandbox() -> Option<Self> {
        let credentials = NamecheapCredentials {
            api_user: env::var("NAMECHEAP_SANDBOX_API_USER").ok()?,
            api_key: env::var("NAMECHEAP_SANDBOX_API_KEY").ok()?,
            client_ip: env::var("NAMECHEAP_SANDBOX_CLIENT_IP").ok()?,
        };
        let options = RegistrarOptions {
            endpoint: RegistrarEndpoint::Sandbox,
            ..RegistrarOptions::default()
        };
        let provider = create_provider(credentials, &options).ok()?;
        Some(Self { provider })
    }
}
