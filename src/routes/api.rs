use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::domain::client::NewClient;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::client as client_service;

#[get("")]
pub async fn list_clients(repo: web::Data<DieselRepository>) -> impl Responder {
    match client_service::list_clients(repo.get_ref()) {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(e) => error_response(&e),
    }
}

#[get("/{id}")]
pub async fn get_client(
    client_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::get_client_by_id(repo.get_ref(), client_id.into_inner()) {
        Ok(client) => HttpResponse::Ok().json(client),
        Err(e) => error_response(&e),
    }
}

#[post("/add")]
pub async fn add_client(
    web::Json(candidate): web::Json<NewClient>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::save_client(repo.get_ref(), &candidate) {
        Ok(client) => HttpResponse::Created().json(client),
        Err(e) => error_response(&e),
    }
}

#[delete("/{id}")]
pub async fn delete_client(
    client_id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::delete_client_by_id(repo.get_ref(), client_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}
