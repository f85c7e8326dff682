//! HTTP 传输层
//!
//! 基于 `gloo-net` 的 fetch 实现 [`HttpClient`]。
//! 只有网络失败才返回 `Err`，HTTP 状态码交给 API 客户端判断。

use gloo_net::http::{Request, RequestBuilder};
use web_sys::{Blob, BlobPropertyBag, FormData, RequestCredentials};
use zorro_client::request::{HttpBody, HttpClient, HttpMethod, HttpRequest, HttpResponse, MultipartFile};
use zorro_client::{ApiError, ApiResult};

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

impl FetchClient {
    fn builder(req: &HttpRequest) -> RequestBuilder {
        let builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Put => Request::put(&req.url),
            HttpMethod::Delete => Request::delete(&req.url),
        };
        let builder = req
            .headers
            .iter()
            .fold(builder, |b, (key, value)| b.header(key, value));
        if req.with_credentials {
            builder.credentials(RequestCredentials::Include)
        } else {
            builder
        }
    }
}

/// 把文件包装成 `FormData`（浏览器会自动生成 boundary）
fn form_data(file: &MultipartFile) -> ApiResult<FormData> {
    let build_err = |e: wasm_bindgen::JsValue| ApiError::network(format!("FormData: {e:?}"));

    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(build_err)?;

    let form = FormData::new().map_err(build_err)?;
    form.append_with_blob_and_filename(&file.field, &blob, &file.file_name)
        .map_err(build_err)?;
    Ok(form)
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let builder = Self::builder(&req);
        let request = match &req.body {
            Some(HttpBody::Json(raw)) => builder.body(raw.as_str()),
            Some(HttpBody::Multipart(file)) => builder.body(form_data(file)?),
            None => builder.build(),
        }
        .map_err(|e| ApiError::network(format!("solicitud inválida: {e}")))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()).in_op(format!("fetch {}", req.url)))?;

        let status = response.status();
        // 204 等空响应体读取失败时按空字符串处理
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}
