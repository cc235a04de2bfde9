//! In-process fake of the shortener HTTP API
//!
//! Serves `/shorten` and `/shorten/{code}[/stats]` from an in-memory store on
//! its own actix system thread, bound to an ephemeral port.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, web};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{Value, json};

use shorten_client::client::{ApiClient, ListFailurePolicy};
use shorten_client::config::ApiConfig;

#[derive(Debug, Clone)]
pub struct StoredUrl {
    pub id: String,
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub access_count: u64,
}

impl StoredUrl {
    fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "url": self.url,
            "shortCode": self.short_code,
            "createdAt": self.created_at.to_rfc3339(),
            "updatedAt": self.updated_at.to_rfc3339(),
        })
    }

    fn to_json_with_stats(&self) -> Value {
        let mut value = self.to_json();
        value["accessCount"] = json!(self.access_count);
        value
    }
}

#[derive(Default)]
pub struct FakeStore {
    urls: Mutex<Vec<StoredUrl>>,
    fail_list: AtomicBool,
}

impl FakeStore {
    /// Simulate redirects hitting a code
    pub fn bump(&self, short_code: &str, hits: u64) {
        if let Some(entry) = self
            .urls
            .lock()
            .iter_mut()
            .find(|u| u.short_code == short_code)
        {
            entry.access_count += hits;
        }
    }

    /// Make `GET /shorten` answer 500 until switched back
    pub fn set_list_failing(&self, failing: bool) {
        self.fail_list.store(failing, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.urls.lock().len()
    }
}

#[derive(Deserialize)]
struct UrlBody {
    url: String,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain")
        .body("URL not found")
}

async fn create(store: web::Data<FakeStore>, body: web::Json<UrlBody>) -> HttpResponse {
    if body.url.trim().is_empty() {
        return HttpResponse::BadRequest()
            .content_type("text/plain")
            .body("URL is required");
    }

    let now = Utc::now();
    let record = StoredUrl {
        id: uuid::Uuid::new_v4().to_string(),
        url: body.url.clone(),
        short_code: uuid::Uuid::new_v4().simple().to_string()[..6].to_string(),
        created_at: now,
        updated_at: now,
        access_count: 0,
    };
    let response = record.to_json();
    store.urls.lock().push(record);
    HttpResponse::Created().json(response)
}

async fn list(store: web::Data<FakeStore>) -> HttpResponse {
    if store.fail_list.load(Ordering::SeqCst) {
        return HttpResponse::InternalServerError()
            .content_type("text/plain")
            .body("database unavailable");
    }
    let urls: Vec<Value> = store
        .urls
        .lock()
        .iter()
        .map(StoredUrl::to_json_with_stats)
        .collect();
    // An empty store encodes as `null`, not `[]`
    if urls.is_empty() {
        return HttpResponse::Ok()
            .content_type("application/json")
            .body("null");
    }
    HttpResponse::Ok().json(urls)
}

async fn read(store: web::Data<FakeStore>, code: web::Path<String>) -> HttpResponse {
    match store.urls.lock().iter().find(|u| u.short_code == *code) {
        Some(record) => HttpResponse::Ok().json(record.to_json()),
        None => not_found(),
    }
}

async fn update(
    store: web::Data<FakeStore>,
    code: web::Path<String>,
    body: web::Json<UrlBody>,
) -> HttpResponse {
    let mut urls = store.urls.lock();
    match urls.iter_mut().find(|u| u.short_code == *code) {
        Some(record) => {
            record.url = body.url.clone();
            record.updated_at = Utc::now();
            HttpResponse::Ok().json(record.to_json())
        }
        None => not_found(),
    }
}

async fn delete(store: web::Data<FakeStore>, code: web::Path<String>) -> HttpResponse {
    let mut urls = store.urls.lock();
    let before = urls.len();
    urls.retain(|u| u.short_code != *code);
    if urls.len() == before {
        return not_found();
    }
    HttpResponse::NoContent().finish()
}

async fn stats(store: web::Data<FakeStore>, code: web::Path<String>) -> HttpResponse {
    match store.urls.lock().iter().find(|u| u.short_code == *code) {
        Some(record) => HttpResponse::Ok().json(record.to_json_with_stats()),
        None => not_found(),
    }
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/shorten", web::post().to(create))
        .route("/shorten", web::get().to(list))
        .route("/shorten/{code}", web::get().to(read))
        .route("/shorten/{code}", web::put().to(update))
        .route("/shorten/{code}", web::delete().to(delete))
        .route("/shorten/{code}/stats", web::get().to(stats));
}

pub struct FakeApi {
    pub store: web::Data<FakeStore>,
    base_url: String,
    handle: ServerHandle,
}

impl FakeApi {
    pub fn start() -> Self {
        let store = web::Data::new(FakeStore::default());
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = mpsc::channel();

        let data = store.clone();
        thread::spawn(move || {
            actix_rt::System::new().block_on(async move {
                let server = HttpServer::new(move || {
                    App::new().app_data(data.clone()).configure(routes)
                })
                .workers(1)
                .listen(listener)
                .expect("listen")
                .run();

                tx.send(server.handle()).expect("send server handle");
                let _ = server.await;
            });
        });

        let handle = rx.recv().expect("fake API did not start");
        Self {
            store,
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_config(&self, list_failure: ListFailurePolicy) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            redirect_prefix: "/r/".to_string(),
            list_failure,
        }
    }

    pub fn client(&self, list_failure: ListFailurePolicy) -> ApiClient {
        ApiClient::new(&self.api_config(list_failure))
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}
