#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use oxidized_reader::llm::{GatewayError, LLMAdapter};
use oxidized_reader::types::LLMMessage;
use tokio::sync::Notify;

/// Build an in-memory PDF with one text line per page
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

const BOUNDARY: &str = "oxidized-reader-test-boundary";

/// POST /upload with a single multipart file field
pub fn upload_request(field: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// POST /ask with a raw body
pub fn ask_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub enum StubReply {
    Answer(String),
    Upstream(u16, String),
    Malformed(String),
    Transport,
    MissingKey,
}

/// Adapter that records what it was asked and replies from a script
pub struct StubAdapter {
    reply: StubReply,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<LLMMessage>>,
    entered: Notify,
    /// When set, each call parks until [`StubAdapter::release`]
    gate: Option<Notify>,
}

impl StubAdapter {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
            entered: Notify::new(),
            gate: None,
        })
    }

    /// Adapter that holds every call open until `release` is called
    pub fn gated(answer: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: StubReply::Answer(answer.to_string()),
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
            entered: Notify::new(),
            gate: Some(Notify::new()),
        })
    }

    /// Resolves once a call has reached the adapter
    pub async fn wait_until_called(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn answering(answer: &str) -> Arc<Self> {
        Self::new(StubReply::Answer(answer.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_messages(&self) -> Vec<LLMMessage> {
        self.last_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMAdapter for StubAdapter {
    async fn create_chat_completion(&self, messages: &[LLMMessage]) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = messages.to_vec();
        self.entered.notify_one();
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.reply {
            StubReply::Answer(answer) => Ok(answer.clone()),
            StubReply::Upstream(status, body) => Err(GatewayError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            StubReply::Malformed(reason) => Err(GatewayError::MalformedResponse(reason.clone())),
            StubReply::Transport => {
                // A request that fails in the client itself, no network involved
                let err = reqwest::Client::new()
                    .get("not a url")
                    .build()
                    .unwrap_err();
                Err(GatewayError::Transport(err))
            }
            StubReply::MissingKey => Err(GatewayError::MissingApiKey),
        }
    }

    fn model(&self) -> &str {
        "stub-model"
    }
}
