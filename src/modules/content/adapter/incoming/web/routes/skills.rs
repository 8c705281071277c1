use actix_web::{delete, get, post, put, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::content::adapter::incoming::web::routes::support;
use crate::modules::content::application::ports::incoming::use_cases::ReorderSkillsError;
use crate::modules::content::domain::skill::SkillForm;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/skills")]
pub async fn list_skills_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    support::respond_list(data.content.skills.list.as_ref()).await
}

#[get("/api/skills/{id}")]
pub async fn get_skill_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_get_form(
        data.content.skills.get.as_ref(),
        &data.translator,
        language,
        &path,
        SkillForm::from_record,
    )
    .await
}

#[post("/api/skills")]
pub async fn create_skill_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    req: web::Json<SkillForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_save(
        data.content.skills.save.as_ref(),
        &data.translator,
        language,
        None,
        req.into_inner(),
    )
    .await
}

#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    req: web::Json<SkillForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_save(
        data.content.skills.save.as_ref(),
        &data.translator,
        language,
        Some(path.into_inner()),
        req.into_inner(),
    )
    .await
}

#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    _admin: AdminUser,
    http_req: HttpRequest,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = support::request_language(&http_req);
    support::respond_delete(
        data.content.skills.delete.as_ref(),
        &data.translator,
        language,
        &path,
    )
    .await
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSkillsDto {
    /// Every stored skill id, in the desired display order.
    pub ordered_ids: Vec<String>,
}

/// Reorder all skills
///
/// Rewrites each skill's position from the submitted id sequence in a
/// single atomic batch. The id set must cover the stored skills
/// exactly; a partial, duplicated, or unknown list changes nothing.
#[utoipa::path(
    put,
    path = "/api/skills/order",
    tag = "content",
    security(("bearer_auth" = [])),
    request_body = ReorderSkillsDto,
    responses(
        (status = 200, description = "Skills in their new order"),
        (status = 400, description = "Id set does not match stored skills"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[put("/api/skills/order")]
pub async fn reorder_skills_handler(
    _admin: AdminUser,
    req: web::Json<ReorderSkillsDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ids = req.into_inner().ordered_ids;
    match data.content.reorder_skills.execute(ids).await {
        Ok(skills) => {
            info!(count = skills.len(), "Skills reordered");
            ApiResponse::success(skills)
        }
        Err(ReorderSkillsError::UnknownIds(ids)) => ApiResponse::bad_request(
            "UNKNOWN_SKILL_IDS",
            &format!("Ids do not match stored skills: {}", ids.join(", ")),
        ),
        Err(ReorderSkillsError::StoreError(e)) => {
            error!("Reorder failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::modules::store::application::ports::outgoing::document_store::{
        Collection, Document, MockDocumentStore,
    };
    use crate::tests::support::app_state_builder::{issue_test_token, TestAppStateBuilder};

    fn skill_doc(id: &str, name: &str, order: i64) -> Document {
        Document::new(
            id,
            json!({
                "name": name,
                "category": "BIM Software",
                "proficiency": 4,
                "yearsOfExperience": 6,
                "order": order,
                "updatedAt": "2024-05-01T00:00:00Z"
            }),
        )
    }

    async fn call(
        store: MockDocumentStore,
        req: test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let builder = TestAppStateBuilder::default().with_store(store);
        let provider = builder.token_provider_data();
        let blacklist = builder.blacklist_data();

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(provider)
                .app_data(blacklist)
                .service(list_skills_handler)
                // Registered before the `{id}` routes so `/order` does
                // not match as an id.
                .service(reorder_skills_handler)
                .service(get_skill_handler)
                .service(create_skill_handler)
                .service(update_skill_handler)
                .service(delete_skill_handler),
        )
        .await;
        let req = req.insert_header((
            "Authorization",
            format!("Bearer {}", issue_test_token("admin@example.com")),
        ));
        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn test_list_orders_ascending_by_position() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list()
            .withf(|c, field, _| *c == Collection::Skills && field == "order")
            .returning(|_, _, _| {
                Ok(vec![
                    skill_doc("a", "Revit", 0),
                    skill_doc("b", "AutoCAD", 1),
                ])
            });

        let resp = call(store, test::TestRequest::get().uri("/api/skills")).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["name"], "Revit");
        assert_eq!(body["data"][1]["order"], 1);
    }

    #[actix_web::test]
    async fn test_reorder_rewrites_positions_in_one_batch() {
        let mut store = MockDocumentStore::new();
        store.expect_list().returning(|_, _, _| {
            Ok(vec![
                skill_doc("a", "Revit", 0),
                skill_doc("b", "AutoCAD", 1),
            ])
        });
        store
            .expect_set_many()
            .withf(|c, docs| {
                *c == Collection::Skills
                    && docs.len() == 2
                    && docs[0].id == "b"
                    && docs[0].data["order"] == json!(0)
                    && docs[1].id == "a"
                    && docs[1].data["order"] == json!(1)
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let req = test::TestRequest::put()
            .uri("/api/skills/order")
            .set_json(json!({"orderedIds": ["b", "a"]}));
        let resp = call(store, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["id"], "b");
        assert_eq!(body["data"][0]["order"], 0);
    }

    #[actix_web::test]
    async fn test_reorder_with_unknown_id_writes_nothing() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list()
            .returning(|_, _, _| Ok(vec![skill_doc("a", "Revit", 0)]));
        store.expect_set_many().times(0);

        let req = test::TestRequest::put()
            .uri("/api/skills/order")
            .set_json(json!({"orderedIds": ["a", "ghost"]}));
        let resp = call(store, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_SKILL_IDS");
    }

    #[actix_web::test]
    async fn test_skill_outside_catalog_rejected() {
        let mut store = MockDocumentStore::new();
        store.expect_set().times(0);

        let req = test::TestRequest::post().uri("/api/skills").set_json(json!({
            "name": "Photoshop",
            "category": "Diseño Gráfico",
            "proficiency": 3,
            "yearsOfExperience": 2
        }));
        let resp = call(store, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["details"]["category"], "Categoría desconocida");
    }
}
