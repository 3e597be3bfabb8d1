//! Note ledger endpoints

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, get, post, put, web};
use serde::Deserialize;
use tracing::error;

use jotter_api::{Note, NoteVersion};

use crate::{model::AppState, service};

#[derive(Debug, Deserialize)]
pub struct ListParam {
    pub member: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteBody {
    pub id: String,
    pub member: String,
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteBody {
    pub text: String,
    pub previous_version: NoteVersion,
}

#[get("")]
pub async fn list(
    req: HttpRequest,
    data: web::Data<AppState>,
    params: web::Query<ListParam>,
) -> impl Responder {
    let result = match &params.member {
        Some(member_id) => service::note::find_by_member(data.store.as_ref(), member_id).await,
        None => service::note::find_all(data.store.as_ref()).await,
    };

    match result {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => {
            error!("Failed to list notes: {}", e);
            e.to_response(req.path())
        }
    }
}

#[post("")]
pub async fn create(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<CreateNoteBody>,
) -> impl Responder {
    let body = body.into_inner();
    let note = Note {
        id: body.id,
        member: body.member,
        text: body.text,
        timestamp: body.timestamp,
        versions: None,
    };

    match service::note::create(data.store.as_ref(), note).await {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(e) => {
            error!("Failed to create note: {}", e);
            e.to_response(req.path())
        }
    }
}

#[put("/{id}")]
pub async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateNoteBody>,
) -> impl Responder {
    let id = path.into_inner();
    let body = body.into_inner();

    match service::note::update(data.store.as_ref(), &id, &body.text, &body.previous_version).await
    {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => {
            error!("Failed to update note {}: {}", id, e);
            e.to_response(req.path())
        }
    }
}

pub fn routes() -> Scope {
    web::scope("/notes").service(list).service(create).service(update)
}
