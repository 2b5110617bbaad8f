//! HTTP 传输实现
//!
//! 使用 `web_sys::fetch` 实现核心库的 `HttpClient`，只负责收发：
//! 状态码与响应体原样交给 `ApiService` 处理。

use lessonbook::request::{HttpClient, HttpRequest, HttpResponse};
use lessonbook::{ApiError, ApiResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// 基于浏览器 fetch 的传输层
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn build(req: &HttpRequest) -> Result<Request, JsValue> {
        let headers = Headers::new()?;
        for (key, value) in &req.headers {
            headers.set(key, value)?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
    }

    async fn text(resp: &Response) -> Result<String, JsValue> {
        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let request = Self::build(&req)
            .map_err(|e| ApiError::transport(format!("could not build request: {:?}", e)))?;

        let window = web_sys::window().ok_or_else(|| ApiError::transport("no window object"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::transport(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ApiError::transport(format!("unexpected fetch result: {:?}", e)))?;

        // 读取响应体失败时按空响应处理，状态码仍然有效
        let body = Self::text(&response).await.unwrap_or_else(|e| {
            tracing::debug!(error = ?e, "could not read response body");
            String::new()
        });

        Ok(HttpResponse {
            status: response.status(),
            body,
        })
    }
}
