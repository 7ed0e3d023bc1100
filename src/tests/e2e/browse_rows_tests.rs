use crate::modules::exam_modules::adapters::outbound::in_memory_service::InMemoryExamModuleService;
use crate::modules::exam_modules::core::row_query::{Page, SortField, SortOrder, SortSpec};
use crate::shell::http::router;
use crate::tests::fixtures::app_state::make_loaded_state;
use crate::tests::fixtures::payloads::make_get_all_exam_module_payload;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn loads_and_displays_the_recorded_response() {
    let state = make_loaded_state(InMemoryExamModuleService::new(
        make_get_all_exam_module_payload(),
    ))
    .await;

    let view_model = state.view_model.read().await;
    assert_eq!(view_model.all_rows().len(), 7);
    assert_eq!(view_model.filtered_rows().len(), 5);

    let view = view_model.displayed_rows(None, Page::default());
    let keys: Vec<_> = view.rows.iter().map(|row| row.row.key()).collect();
    assert_eq!(
        keys.iter().map(|key| key.module_id).collect::<Vec<_>>(),
        vec![10, 11, 20, 30]
    );
    assert_eq!(view.rows[2].row_key, "PF-204-React");
    assert_eq!(view.total, 4);
    assert_eq!(
        view.program_options,
        vec![
            "Programming Backend",
            "Programming Frontend",
            "Proqramlaşdırma",
            "Data Analytics",
        ]
    );

    let backend = &view.rows[0];
    assert!(backend.survey_control && backend.exam_control);
    let frontend = &view.rows[2];
    assert!(frontend.survey_control && frontend.exam_control);
    let local = &view.rows[3];
    assert!(!local.survey_control && !local.exam_control);
}

#[tokio::test]
async fn narrows_sorts_and_pages_through_the_router() {
    let state = make_loaded_state(InMemoryExamModuleService::new(
        make_get_all_exam_module_payload(),
    ))
    .await;
    let app = router(state.clone());

    let response = app
        .clone()
        .oneshot(
            Request::post("/filters")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"programs":["Programming Backend","Programming Frontend"],"survey":null,"exam":[]}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(
            Request::get("/rows?page=2&page_size=2&sort=startDate&order=ascending")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    // Databases, React, Web APIs by start date. The duplicate React row (module 21)
    // collapses into module 20.
    assert_eq!(json["total"], 3);
    assert_eq!(json["rows"].as_array().unwrap().len(), 1);
    assert_eq!(json["rows"][0]["moduleId"], 11);

    let view = state.view_model.read().await.displayed_rows(
        Some(SortSpec {
            field: SortField::StartDate,
            order: SortOrder::Descending,
        }),
        Page::default(),
    );
    assert_eq!(view.rows[0].row.module_id, 11);
}

#[tokio::test]
async fn searches_group_names_and_collapses_duplicates() {
    let state = make_loaded_state(InMemoryExamModuleService::new(
        make_get_all_exam_module_payload(),
    ))
    .await;
    let app = router(state.clone());

    let response = app
        .oneshot(
            Request::post("/search")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"text":"pf-204"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let mut view_model = state.view_model.write().await;
    view_model.set_filters(Vec::new(), None, Vec::new());
    let view = view_model.displayed_rows(None, Page::default());
    assert_eq!(view.total, 1);
    assert_eq!(view.rows[0].row.module_id, 20);
}
