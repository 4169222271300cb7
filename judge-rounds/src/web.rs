use std::sync::{Mutex, MutexGuard};

use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::export::{to_submissions, RoundSubmission};
use crate::schedule::{generate, Schedule};

const PASSWORD_HEADER: &str = "X-Admin-Password";

// In-memory only; a restart drops both the draft and the published rounds
pub struct AppState {
    pub draft: Mutex<Option<Schedule>>,
    pub published: Mutex<Option<Vec<RoundSubmission>>>,
    pub admin_password: String,
}

impl AppState {
    pub fn new(admin_password: String) -> Self {
        Self {
            draft: Mutex::new(None),
            published: Mutex::new(None),
            admin_password,
        }
    }

    fn check_admin(&self, req: &HttpRequest) -> Result<(), AppError> {
        let password = req
            .headers()
            .get(PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if password == self.admin_password {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

// State is only ever replaced whole, so a poisoned value is still consistent
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Deserialize)]
pub struct LoginRequest {
    password: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub judges: usize,
    pub teams: usize,
    pub start_time: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PublishedResponse {
    pub rounds: Vec<RoundSubmission>,
}

async fn admin_login(
    req: web::Json<LoginRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.password == state.admin_password {
        Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
    } else {
        Err(AppError::Unauthorized)
    }
}

// Replaces the draft wholesale; the published rounds are left alone
async fn generate_draft(
    req: HttpRequest,
    body: web::Json<GenerateRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    state.check_admin(&req)?;

    let schedule = generate(body.judges, body.teams, &body.start_time)?;
    let response = HttpResponse::Ok().json(&schedule);
    *lock(&state.draft) = Some(schedule);
    Ok(response)
}

async fn get_draft(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.check_admin(&req)?;

    let draft = lock(&state.draft);
    let schedule = draft.as_ref().ok_or(AppError::NoSchedule)?;
    Ok(HttpResponse::Ok().json(schedule))
}

// "Go live"
async fn publish(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.check_admin(&req)?;

    let rounds = {
        let draft = lock(&state.draft);
        let schedule = draft.as_ref().ok_or(AppError::NoSchedule)?;
        to_submissions(schedule)?
    };
    info!(rounds = rounds.len(), "publishing schedule");
    *lock(&state.published) = Some(rounds.clone());

    Ok(HttpResponse::Ok().json(PublishedResponse { rounds }))
}

// "Make private"
async fn make_private(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.check_admin(&req)?;

    let was_published = lock(&state.published).take().is_some();
    info!(was_published, "schedule made private");
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}

async fn get_published(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let published = lock(&state.published);
    let rounds = published.as_ref().ok_or(AppError::NoSchedule)?;
    Ok(HttpResponse::Ok().json(PublishedResponse { rounds: rounds.clone() }))
}

/// Registers every route; shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/login", web::post().to(admin_login))
        .route("/api/schedule", web::get().to(get_published))
        .route("/api/schedule/generate", web::post().to(generate_draft))
        .route("/api/schedule/draft", web::get().to(get_draft))
        .route("/api/schedule/publish", web::post().to(publish))
        .route("/api/schedule/private", web::post().to(make_private));
}

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(config.admin_password));

    info!(bind = %config.bind, port = config.port, "starting judging schedule service");
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((config.bind.as_str(), config.port))?
    .run()
    .await
}
