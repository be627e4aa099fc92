#![allow(dead_code)]

use std::collections::VecDeque;

use postboard_cli::api::ApiClient;
use postboard_cli::ui::Prompter;
use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock REST service running on its own runtime. The blocking client is
/// called from the test thread, outside of the runtime.
pub struct MockApi {
    pub server: MockServer,
    pub runtime: Runtime,
}

impl MockApi {
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("tokio runtime");
        let server = runtime.block_on(MockServer::start());
        MockApi { server, runtime }
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.server.uri()).expect("client")
    }
}

pub fn json_response(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

pub fn post_json(id: i64, user_id: i64, title: &str, body: &str) -> Value {
    json!({ "userId": user_id, "id": id, "title": title, "body": body })
}

pub fn sample_posts() -> Value {
    json!([
        post_json(1, 1, "Learn Python", "Python is great!"),
        post_json(2, 1, "Learn JavaScript", "JavaScript runs in the browser."),
        post_json(3, 2, "Rust ownership", "Borrowing without tears."),
    ])
}

/// Answers prompts from a fixed script, failing once it runs dry.
pub struct Scripted {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl Scripted {
    pub fn new(answers: &[&str]) -> Self {
        Scripted {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for Scripted {
    fn prompt(&mut self, label: &str) -> anyhow::Result<String> {
        self.asked.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted answer for {label:?}"))
    }
}
