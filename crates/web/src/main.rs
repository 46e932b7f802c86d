use sektor_core::{
    EngineConfig, EventBus, SelectionResult, SessionTable, SessionView, SpinOutcome, Submission,
};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::sync::Arc;
use tiny_http::{Header, Method, Response, Server, StatusCode};

fn main() {
    env_logger::init();
    let server = Server::http("0.0.0.0:7878").expect("start server");
    log::info!("sektor web host on http://localhost:7878");
    let table = Arc::new(SessionTable::new(EngineConfig::default()));
    for request in server.incoming_requests() {
        let table = table.clone();
        if let Err(err) = handle_request(request, table) {
            log::error!("request error: {err}");
        }
    }
}

#[derive(Serialize)]
struct ApiResponse {
    ok: bool,
    error: Option<String>,
    view: Option<SessionView>,
    events: Vec<sektor_core::Event>,
    selection: Option<SelectionResult>,
    outcome: Option<SpinOutcome>,
}

#[derive(Deserialize)]
struct SubmitRequest {
    key: String,
    numbers: Vec<i64>,
}

#[derive(Deserialize)]
struct ResetRequest {
    key: String,
}

fn handle_request(
    mut request: tiny_http::Request,
    table: Arc<SessionTable>,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = request.url().to_string();
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url.as_str(), None),
    };
    match (request.method(), path) {
        (&Method::Get, "/api/session") => {
            let response = match query_param(query, "key") {
                Some(key) => {
                    log::info!("view key={key}");
                    ok_response(table.view(&key), Vec::new())
                }
                None => missing_key(),
            };
            respond_json(request, response)
        }
        (&Method::Post, "/api/submit") => {
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body)?;
            let response = match serde_json::from_str::<SubmitRequest>(&body) {
                Ok(submit) => apply_submit(&table, &submit),
                Err(err) => bad_request(format!("invalid body: {err}")),
            };
            respond_json(request, response)
        }
        (&Method::Post, "/api/reset") => {
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body)?;
            let response = match serde_json::from_str::<ResetRequest>(&body) {
                Ok(reset) => {
                    let mut events = EventBus::default();
                    table.reset(&reset.key, &mut events);
                    log::info!("reset key={}", reset.key);
                    ok_response(table.view(&reset.key), events.drain().collect())
                }
                Err(err) => bad_request(format!("invalid body: {err}")),
            };
            respond_json(request, response)
        }
        _ => {
            request.respond(Response::empty(StatusCode(404)))?;
            Ok(())
        }
    }
}

fn apply_submit(table: &SessionTable, submit: &SubmitRequest) -> ApiResponse {
    let mut events = EventBus::default();
    let result = table.submit(&submit.key, &submit.numbers, &mut events);
    let events: Vec<_> = events.drain().collect();
    match result {
        Ok(submission) => {
            log::info!(
                "submit key={} numbers={}",
                submit.key,
                submit.numbers.len()
            );
            let (selection, outcome) = match submission {
                Submission::Selection(selection) => (Some(selection), None),
                Submission::Spin(outcome) => (None, Some(outcome)),
            };
            ApiResponse {
                ok: true,
                error: None,
                view: Some(table.view(&submit.key)),
                events,
                selection,
                outcome,
            }
        }
        Err(err) => {
            log::warn!("submit key={} rejected: {err}", submit.key);
            ApiResponse {
                ok: false,
                error: Some(err.to_string()),
                view: Some(table.view(&submit.key)),
                events,
                selection: None,
                outcome: None,
            }
        }
    }
}

fn ok_response(view: SessionView, events: Vec<sektor_core::Event>) -> ApiResponse {
    ApiResponse {
        ok: true,
        error: None,
        view: Some(view),
        events,
        selection: None,
        outcome: None,
    }
}

fn bad_request(message: String) -> ApiResponse {
    ApiResponse {
        ok: false,
        error: Some(message),
        view: None,
        events: Vec::new(),
        selection: None,
        outcome: None,
    }
}

fn missing_key() -> ApiResponse {
    bad_request("missing session key".to_string())
}

fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    for pair in query?.split('&') {
        if let Some((param, value)) = pair.split_once('=') {
            if param == name && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn respond_json(
    request: tiny_http::Request,
    response: ApiResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = serde_json::to_vec_pretty(&response)?;
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .expect("static header");
    request.respond(Response::from_data(body).with_header(header))?;
    Ok(())
}
