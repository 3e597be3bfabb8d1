//! Member directory endpoints

use actix_web::{HttpRequest, HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;
use tracing::error;

use jotter_api::Member;

use crate::{model::AppState, service};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberBody {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberBody {
    pub first_name: String,
    pub last_name: String,
}

#[get("")]
pub async fn list(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    match service::member::find_all(data.store.as_ref()).await {
        Ok(members) => HttpResponse::Ok().json(members),
        Err(e) => {
            error!("Failed to list members: {}", e);
            e.to_response(req.path())
        }
    }
}

#[post("")]
pub async fn create(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<CreateMemberBody>,
) -> impl Responder {
    let body = body.into_inner();
    let member = Member {
        id: body.id,
        first_name: body.first_name,
        last_name: body.last_name,
    };

    match service::member::create(data.store.as_ref(), member).await {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(e) => {
            error!("Failed to create member: {}", e);
            e.to_response(req.path())
        }
    }
}

#[put("/{id}")]
pub async fn update(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateMemberBody>,
) -> impl Responder {
    // The path id is authoritative; any id in the body is ignored
    let id = path.into_inner();
    let body = body.into_inner();
    let member = Member {
        id: id.clone(),
        first_name: body.first_name,
        last_name: body.last_name,
    };

    match service::member::update(data.store.as_ref(), member).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => {
            error!("Failed to update member {}: {}", id, e);
            e.to_response(req.path())
        }
    }
}

#[delete("/{id}")]
pub async fn remove(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match service::member::delete(data.store.as_ref(), &id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({})),
        Err(e) => {
            error!("Failed to delete member {}: {}", id, e);
            e.to_response(req.path())
        }
    }
}

pub fn routes() -> Scope {
    web::scope("/members")
        .service(list)
        .service(create)
        .service(update)
        .service(remove)
}
