//! Namecheap HTTP 请求方法

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::utils::log_sanitizer::redact_query;

use super::{
    ApiRequest, ApiResponse, CMD_DOMAINS_GET_LIST, NamecheapProvider, PROVIDER_NAME,
    SORT_BY_EXPIRE_DATE, XML_RESPONSE_PATH,
};

impl NamecheapProvider {
    /// 执行一次 XML API 调用并解码外层 `ApiResponse`
    ///
    /// Registrar-level errors inside the envelope are left for the parser.
    pub(crate) async fn request(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = format!("{}{XML_RESPONSE_PATH}", self.base_url);
        let query = request.to_query(&self.credentials);

        let builder = self
            .client
            .get(&url)
            .query(&query)
            .header(reqwest::header::CONTENT_TYPE, "application/xml");

        let action = format!("{url}?{}", redact_query(&query));
        let text = HttpUtils::execute_request(builder, PROVIDER_NAME, "GET", &action).await?;

        HttpUtils::parse_xml(&text, PROVIDER_NAME)
    }

    /// `namecheap.domains.getList`, sorted by expiry date.
    pub async fn fetch_domain_list(&self) -> Result<ApiResponse> {
        let request =
            ApiRequest::new(CMD_DOMAINS_GET_LIST).param("SortBy", SORT_BY_EXPIRE_DATE);
        self.request(&request).await
    }
}
