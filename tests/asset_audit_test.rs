mod common;

use asset_registry::dto::asset_dto::{CreateAssetPayload, UpdateAssetPayload};
use asset_registry::dto::asset_model_dto::{CreateAssetModelPayload, UpdateAssetModelPayload};
use asset_registry::dto::category_dto::CreateCategoryPayload;
use asset_registry::dto::manufacturer_dto::CreateManufacturerPayload;
use asset_registry::error::Error;
use asset_registry::models::asset::{Asset, AssetStatus};
use asset_registry::models::asset_model::AssetModel;
use asset_registry::models::audit_context::RequestScope;
use asset_registry::services::audit_service::Auditable;
use asset_registry::AppState;
use chrono::NaiveDate;
use serde_json::{json, Value as JsonValue};
use tokio_test::{assert_err, assert_ok};

use common::{audit_rows, audit_rows_for_request, scope_with_request_id, setup, unique};

fn parse(text: &Option<String>) -> JsonValue {
    serde_json::from_str(text.as_deref().expect("value present")).expect("valid json")
}

async fn create_model(state: &AppState, scope: &RequestScope) -> AssetModel {
    let category = state
        .category_service
        .create(
            scope,
            CreateCategoryPayload {
                name: unique("Laptops"),
                description: String::new(),
            },
        )
        .await
        .expect("category");
    let manufacturer = state
        .manufacturer_service
        .create(
            scope,
            CreateManufacturerPayload {
                name: unique("Lenovo"),
                email: format!("{}@example.com", unique("sales")),
            },
        )
        .await
        .expect("manufacturer");

    state
        .asset_model_service
        .create(
            scope,
            CreateAssetModelPayload {
                name: unique("ThinkPad T14"),
                category_id: category.id,
                manufacturer_id: manufacturer.id,
                model_number: "20W0".into(),
            },
        )
        .await
        .expect("model")
}

fn asset_payload(model_id: i64) -> CreateAssetPayload {
    CreateAssetPayload {
        name: "Finance laptop".into(),
        serial_number: unique("SN"),
        tag: unique("TAG"),
        description: "14 inch".into(),
        model_id,
        status: AssetStatus::Available,
        purchase_date: NaiveDate::from_ymd_opt(2025, 3, 14),
        purchase_cost: 1450.0,
        useful_life_years: 4,
        salvage_value: 150.0,
        location: "HQ-2".into(),
    }
}

#[tokio::test]
async fn model_create_and_update_are_audited() {
    let (state, pool) = setup().await;
    let scope = scope_with_request_id(&unique("req"));
    let model = create_model(&state, &scope).await;

    let rows = audit_rows(&pool, "models", &model.id.to_string()).await;
    assert_eq!(rows.len(), 1);
    let snapshot = parse(&rows[0].new_value);
    assert_eq!(snapshot["category_id"], json!(model.category_id));
    assert_eq!(snapshot["model_number"], json!("20W0"));

    state
        .asset_model_service
        .update(
            &scope,
            model.id,
            UpdateAssetModelPayload {
                model_number: Some("20W1".into()),
                ..UpdateAssetModelPayload::default()
            },
        )
        .await
        .expect("update");

    let rows = audit_rows(&pool, "models", &model.id.to_string()).await;
    assert_eq!(rows[1].operation, "UPDATE");
    assert_eq!(
        parse(&rows[1].diff)["model_number"],
        json!({"old": "20W0", "new": "20W1"})
    );
}

#[tokio::test]
async fn asset_lifecycle_is_audited() {
    let (state, pool) = setup().await;
    let request_id = unique("req");
    let scope = scope_with_request_id(&request_id);
    let model = create_model(&state, &scope).await;

    let asset = assert_ok!(
        state
            .asset_service
            .create(&scope, asset_payload(model.id))
            .await
    );
    assert_eq!(asset.status, AssetStatus::Available);

    let new_serial = unique("SN");
    let updated = state
        .asset_service
        .update(
            &scope,
            asset.id,
            UpdateAssetPayload {
                serial_number: Some(new_serial.clone()),
                location: Some("HQ-3".into()),
                ..UpdateAssetPayload::default()
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.name, asset.name);
    assert_eq!(updated.purchase_cost, asset.purchase_cost);

    let assigned = state
        .asset_service
        .update_status(&scope, asset.id, AssetStatus::Assigned)
        .await
        .expect("status");
    assert_eq!(assigned.status, AssetStatus::Assigned);

    state
        .asset_service
        .delete(&scope, asset.id)
        .await
        .expect("delete");

    let rows = audit_rows(&pool, Asset::TABLE, &asset.id.to_string()).await;
    let ops: Vec<&str> = rows.iter().map(|r| r.operation.as_str()).collect();
    assert_eq!(ops, vec!["CREATE", "UPDATE", "UPDATE", "DELETE"]);

    let created = parse(&rows[0].new_value);
    assert_eq!(created["purchase_date"], json!("2025-03-14"));
    assert_eq!(created["status"], json!("AVAILABLE"));

    let diff = parse(&rows[1].diff);
    assert_eq!(
        diff["serial_number"],
        json!({"old": asset.serial_number, "new": new_serial})
    );
    assert_eq!(diff["location"], json!({"old": "HQ-2", "new": "HQ-3"}));
    assert!(diff.get("name").is_none());

    let diff = parse(&rows[2].diff);
    assert_eq!(diff["status"], json!({"old": "AVAILABLE", "new": "ASSIGNED"}));

    assert_eq!(parse(&rows[3].old_value)["status"], json!("ASSIGNED"));
    // three for the model chain, four for the asset
    assert_eq!(audit_rows_for_request(&pool, &request_id).await.len(), 7);
}

#[tokio::test]
async fn asset_with_unknown_model_is_a_conflict_without_audit() {
    let (state, pool) = setup().await;
    let request_id = unique("req");

    let err = assert_err!(
        state
            .asset_service
            .create(&scope_with_request_id(&request_id), asset_payload(i64::MAX))
            .await
    );
    assert!(matches!(err, Error::Conflict(_)));
    assert!(audit_rows_for_request(&pool, &request_id).await.is_empty());
}

#[tokio::test]
async fn model_in_use_cannot_be_deleted() {
    let (state, pool) = setup().await;
    let scope = scope_with_request_id(&unique("req"));
    let model = create_model(&state, &scope).await;
    let asset = state
        .asset_service
        .create(&scope, asset_payload(model.id))
        .await
        .expect("asset");

    let err = assert_err!(state.asset_model_service.delete(&scope, model.id).await);
    assert!(matches!(err, Error::Conflict(_)));

    let ops: Vec<String> = audit_rows(&pool, "models", &model.id.to_string())
        .await
        .into_iter()
        .map(|r| r.operation)
        .collect();
    assert_eq!(ops, vec!["CREATE"]);
    assert_ok!(state.asset_model_service.get_by_id(model.id).await);

    state
        .asset_service
        .delete(&scope, asset.id)
        .await
        .expect("delete asset");
    assert_ok!(state.asset_model_service.delete(&scope, model.id).await);
    assert_eq!(
        audit_rows(&pool, "models", &model.id.to_string())
            .await
            .len(),
        2
    );
}

#[tokio::test]
async fn status_change_on_missing_asset_is_not_found() {
    let (state, pool) = setup().await;
    let scope = scope_with_request_id(&unique("req"));

    let err = assert_err!(
        state
            .asset_service
            .update_status(&scope, i64::MAX, AssetStatus::Repair)
            .await
    );
    assert!(matches!(err, Error::NotFound(_)));
    assert!(audit_rows(&pool, "assets", &i64::MAX.to_string())
        .await
        .is_empty());
}
