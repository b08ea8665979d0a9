//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use autoparts_provider::{ApiConfig, PartsApi, create_api};
use tiny_http::{Header, Response, Server};

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

/// 记录下来的请求
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub accept: Option<String>,
}

/// 预设响应
#[derive(Debug, Clone)]
pub struct Canned {
    pub status: u16,
    pub body: String,
}

impl Canned {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// 本地 mock 服务：按顺序为每个请求返回一条预设响应
pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl MockServer {
    /// 启动服务，`responses` 依次对应后续的请求
    pub fn start(responses: Vec<Canned>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("start mock server");
        let base_url = format!("http://{}/api/usados", server.server_addr());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            for canned in responses {
                let Ok(Some(request)) = server.recv_timeout(Duration::from_secs(5)) else {
                    return;
                };
                let accept = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Accept"))
                    .map(|h| h.value.as_str().to_string());
                recorded.lock().expect("lock").push(RecordedRequest {
                    url: request.url().to_string(),
                    accept,
                });

                let response = Response::from_string(canned.body)
                    .with_status_code(canned.status)
                    .with_header(
                        Header::from_bytes("Content-Type", "application/json")
                            .expect("valid content type header"),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            requests,
            handle: Some(handle),
        }
    }

    /// 指向本服务的 API 客户端
    pub fn api(&self) -> Arc<dyn PartsApi> {
        let config = ApiConfig {
            base_url: self.base_url.clone(),
            connect_timeout_secs: 2,
            request_timeout_secs: 5,
        };
        create_api(&config).expect("create api")
    }

    /// 等待所有预设响应发送完毕，返回记录的请求
    pub fn finish(mut self) -> Vec<RecordedRequest> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("server thread should join");
        }
        self.requests.lock().expect("lock").clone()
    }
}
