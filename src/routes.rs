//! HTTP route handlers
//!
//! Thin adapters over the file operations core: parse the request, run one
//! operation, serialize its envelope. The HTTP status always mirrors the
//! envelope's `statusCode`. Each request builds its own `FileOperations`
//! bound to one root; nothing is shared between requests but the config.

use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web, HttpResponse};
use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;
use crate::error::{FileOpsError, RepositoryError};
use crate::fileops::operations::FileOperations;
use crate::fileops::results::FileOperationResult;
use crate::repository::{ConfigRepositoryResolver, RootSource};

#[derive(Deserialize)]
pub struct FileQuery {
    pub repo: Option<String>,
    pub path: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteRequest {
    pub path: Option<String>,
    pub content: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub source_path: Option<String>,
    pub destination_path: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    pub source_path: Option<String>,
    pub new_name: Option<String>,
}

/// Register all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_file_tree)
        .service(get_directory_contents)
        .service(get_file_content)
        .service(write_file_content)
        .service(delete_file)
        .service(move_file)
        .service(rename_file)
        .service(file_exists);
}

/// Build the per-request operations object for the selected repository
fn file_operations(
    config: &ServerConfig,
    repo: Option<&str>,
) -> Result<FileOperations, RepositoryError> {
    let source = RootSource::select(config.use_mock_data, repo)?;
    let resolver = ConfigRepositoryResolver::new(config);
    FileOperations::new(&source, &resolver)
}

fn respond<T: Serialize>(result: FileOperationResult<T>) -> HttpResponse {
    let status =
        StatusCode::from_u16(result.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(result)
}

fn validation_error(message: &str) -> HttpResponse {
    respond(FileOperationResult::<()>::err(FileOpsError::Validation(
        message.into(),
    )))
}

fn repository_error(e: RepositoryError) -> HttpResponse {
    warn!("Repository resolution failed: {}", e);
    respond(FileOperationResult::<()>::err(e.into()))
}

fn blocking_error(e: BlockingError) -> HttpResponse {
    error!("Blocking task failed: {}", e);
    respond(FileOperationResult::<()>::err(FileOpsError::Internal(
        "Internal server error".into(),
    )))
}

#[get("/api/files/tree")]
pub async fn get_file_tree(
    config: web::Data<ServerConfig>,
    query: web::Query<FileQuery>,
) -> HttpResponse {
    let ops = match file_operations(&config, query.repo.as_deref()) {
        Ok(ops) => ops,
        Err(e) => return repository_error(e),
    };
    match web::block(move || ops.get_file_tree()).await {
        Ok(result) => respond(result),
        Err(e) => blocking_error(e),
    }
}

#[get("/api/files/directory")]
pub async fn get_directory_contents(
    config: web::Data<ServerConfig>,
    query: web::Query<FileQuery>,
) -> HttpResponse {
    let ops = match file_operations(&config, query.repo.as_deref()) {
        Ok(ops) => ops,
        Err(e) => return repository_error(e),
    };
    let path = query.path.clone().unwrap_or_default();
    match web::block(move || ops.get_directory_contents(&path)).await {
        Ok(result) => respond(result),
        Err(e) => blocking_error(e),
    }
}

#[get("/api/files/content")]
pub async fn get_file_content(
    config: web::Data<ServerConfig>,
    query: web::Query<FileQuery>,
) -> HttpResponse {
    let ops = match file_operations(&config, query.repo.as_deref()) {
        Ok(ops) => ops,
        Err(e) => return repository_error(e),
    };
    let path = match query.path.clone() {
        Some(p) => p,
        None => return validation_error("Path is required"),
    };
    match web::block(move || ops.read_file(&path)).await {
        Ok(result) => respond(result),
        Err(e) => blocking_error(e),
    }
}

#[put("/api/files/content")]
pub async fn write_file_content(
    config: web::Data<ServerConfig>,
    query: web::Query<FileQuery>,
    body: web::Json<WriteRequest>,
) -> HttpResponse {
    let ops = match file_operations(&config, query.repo.as_deref()) {
        Ok(ops) => ops,
        Err(e) => return repository_error(e),
    };
    let path = match body.path.clone() {
        Some(p) => p,
        None => return validation_error("Path is required"),
    };
    // The empty string is valid content; only an absent field is rejected.
    let content = match body.content.clone() {
        Some(c) => c,
        None => return validation_error("Content is required"),
    };
    match web::block(move || ops.write_file(&path, &content)).await {
        Ok(result) => respond(result),
        Err(e) => blocking_error(e),
    }
}

#[delete("/api/files")]
pub async fn delete_file(
    config: web::Data<ServerConfig>,
    query: web::Query<FileQuery>,
) -> HttpResponse {
    let ops = match file_operations(&config, query.repo.as_deref()) {
        Ok(ops) => ops,
        Err(e) => return repository_error(e),
    };
    let path = match query.path.clone() {
        Some(p) => p,
        None => return validation_error("Path is required"),
    };
    match web::block(move || ops.delete_file(&path)).await {
        Ok(result) => respond(result),
        Err(e) => blocking_error(e),
    }
}

#[post("/api/files/move")]
pub async fn move_file(
    config: web::Data<ServerConfig>,
    query: web::Query<FileQuery>,
    body: web::Json<MoveRequest>,
) -> HttpResponse {
    let ops = match file_operations(&config, query.repo.as_deref()) {
        Ok(ops) => ops,
        Err(e) => return repository_error(e),
    };
    let source_path = match body.source_path.clone() {
        Some(p) => p,
        None => return validation_error("Source path is required"),
    };
    let destination_path = match body.destination_path.clone() {
        Some(p) => p,
        None => return validation_error("Destination path is required"),
    };
    match web::block(move || ops.move_file(&source_path, &destination_path)).await {
        Ok(result) => respond(result),
        Err(e) => blocking_error(e),
    }
}

#[post("/api/files/rename")]
pub async fn rename_file(
    config: web::Data<ServerConfig>,
    query: web::Query<FileQuery>,
    body: web::Json<RenameRequest>,
) -> HttpResponse {
    let ops = match file_operations(&config, query.repo.as_deref()) {
        Ok(ops) => ops,
        Err(e) => return repository_error(e),
    };
    let source_path = match body.source_path.clone() {
        Some(p) => p,
        None => return validation_error("Source path is required"),
    };
    let new_name = match body.new_name.clone() {
        Some(n) => n,
        None => return validation_error("New name is required"),
    };
    match web::block(move || ops.rename_file(&source_path, &new_name)).await {
        Ok(result) => respond(result),
        Err(e) => blocking_error(e),
    }
}

#[get("/api/files/exists")]
pub async fn file_exists(
    config: web::Data<ServerConfig>,
    query: web::Query<FileQuery>,
) -> HttpResponse {
    let ops = match file_operations(&config, query.repo.as_deref()) {
        Ok(ops) => ops,
        Err(e) => return repository_error(e),
    };
    let path = match query.path.clone() {
        Some(p) => p,
        None => return validation_error("Path is required"),
    };
    match web::block(move || ops.exists(&path)).await {
        Ok(result) => respond(result),
        Err(e) => blocking_error(e),
    }
}
