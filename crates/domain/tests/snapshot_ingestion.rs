//! Integration tests for snapshot ingestion
//!
//! Feeds API-shaped JSON through `InventorySnapshot::from_raw` and checks
//! that tracking, holders and statuses are resolved once at ingestion.

use netasset_domain::{
    ApprovalStatus, AssetHolder, AssetStatus, InventorySnapshot, RawSnapshot, RequestKind,
    Tracking, TrackingMethod,
};

const EXPORT: &str = r#"{
    "customers": [
        {"id": "c-1", "name": "Warung Bu Sri", "address": "Jl. Melati 3"}
    ],
    "assets": [
        {
            "id": "a-1", "name": "ONT HG8245H", "brand": "Huawei",
            "serialNumber": "48575443A1B2", "macAddress": "00:1A:2B:3C:4D:5E",
            "category": {"name": "CPE", "trackingMethod": "individual"},
            "status": "IN_USE", "currentCustomerId": "c-1",
            "purchasePrice": 750000, "purchaseDate": "2023-03-10",
            "requestId": "r-1", "requestItemId": "ri-1",
            "activityLog": [
                {"timestamp": "2023-03-10T09:00:00Z", "action": "registered"},
                {"timestamp": "2023-04-02T14:30:00+07:00", "action": "installed", "actor": "tech-7"}
            ]
        },
        {
            "id": "a-2", "name": "Drop cable 1 core", "brand": "Fiberhome",
            "category": {"name": "Fiber material"},
            "unitOfMeasure": "meter", "status": "in_storage",
            "initialBalance": 1000, "currentBalance": 640.5,
            "purchasePrice": 2500000
        },
        {
            "id": "a-3", "name": "Router", "brand": "Mikrotik",
            "status": "stolen"
        },
        {
            "id": "a-4", "name": "Router", "brand": "Mikrotik",
            "status": "under repair", "currentUserId": "u-3"
        }
    ],
    "requests": [
        {"id": "r-1", "documentNumber": "PR/2023/014", "kind": "purchase",
         "items": [{"id": "ri-1", "itemName": "ONT HG8245H", "quantity": 1}]}
    ],
    "installations": [
        {"id": "i-1", "documentNumber": "INS-001", "customerId": "c-1",
         "date": "2023-04-02", "assetIds": ["a-1"]}
    ]
}"#;

fn ingest() -> (InventorySnapshot, netasset_domain::IngestReport) {
    let raw: RawSnapshot = serde_json::from_str(EXPORT).expect("export should deserialize");
    InventorySnapshot::from_raw(raw)
}

#[test]
fn test_malformed_assets_are_skipped_and_counted() {
    let (snapshot, report) = ingest();

    assert_eq!(report.accepted, 3);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.total_skipped(), 1);
    assert!(snapshot.asset("a-3").is_none(), "unknown status must be skipped");
}

#[test]
fn test_individual_asset_resolution() {
    let (snapshot, _) = ingest();
    let ont = snapshot.asset("a-1").expect("a-1 present");

    assert_eq!(ont.tracking, Tracking::Individual);
    assert_eq!(ont.status, AssetStatus::InUse);
    assert_eq!(ont.holder, AssetHolder::Customer("c-1".to_string()));
    assert_eq!(ont.activity_log.len(), 2);
    assert_eq!(ont.activity_log_newest_first()[0].action, "installed");
    assert_eq!(ont.origin.as_ref().map(|o| o.request_item_id.as_str()), Some("ri-1"));
}

#[test]
fn test_bulk_asset_resolution_from_balance_fields() {
    let (snapshot, _) = ingest();
    let cable = snapshot.asset("a-2").expect("a-2 present");

    assert_eq!(cable.tracking_method(), TrackingMethod::Bulk);
    match cable.tracking {
        Tracking::Bulk(balance) => {
            assert_eq!(balance.initial_balance, 1000.0);
            assert_eq!(balance.current_balance, 640.5);
        }
        Tracking::Individual => panic!("expected bulk tracking"),
    }
    assert_eq!(cable.unit_of_measure, "meter");
    assert_eq!(cable.holder, AssetHolder::Unassigned);
    assert_eq!(cable.purchase_date, None);
}

#[test]
fn test_loose_status_spelling_and_user_holder() {
    let (snapshot, _) = ingest();
    let router = snapshot.asset("a-4").expect("a-4 present");

    assert_eq!(router.status, AssetStatus::UnderRepair);
    assert_eq!(router.holder, AssetHolder::User("u-3".to_string()));
    assert_eq!(router.category, "Uncategorized");
}

#[test]
fn test_other_collections_pass_through() {
    let (snapshot, _) = ingest();

    assert_eq!(snapshot.customer("c-1").map(|c| c.name.as_str()), Some("Warung Bu Sri"));
    assert_eq!(snapshot.request("r-1").map(|r| r.items.len()), Some(1));
    assert_eq!(snapshot.installations.len(), 1);
    assert!(snapshot.maintenances.is_empty());
    assert!(snapshot.dismantles.is_empty());
}

#[test]
fn test_empty_export_is_valid() {
    let raw: RawSnapshot = serde_json::from_str("{}").expect("empty object is a valid export");
    let (snapshot, report) = InventorySnapshot::from_raw(raw);

    assert!(snapshot.assets.is_empty());
    assert_eq!(report.accepted, 0);
    assert_eq!(report.total_skipped(), 0);
}

#[test]
fn test_request_enums_accept_upper_case_spellings() {
    let raw: RawSnapshot = serde_json::from_str(
        r#"{
            "requests": [
                {"id": "r-9", "documentNumber": "PR/2024/090", "kind": "PURCHASE",
                 "items": [{"id": "ri-9", "itemName": "ONT", "quantity": 4,
                            "approval": {"approvedQuantity": 3, "status": "APPROVED"}}]},
                {"id": "r-10", "documentNumber": "LN/2024/004", "kind": "Loan", "items": []}
            ]
        }"#,
    )
    .expect("export should deserialize");
    let (snapshot, report) = InventorySnapshot::from_raw(raw);

    assert_eq!(report.skipped_requests, 0);
    let request = snapshot.request("r-9").expect("r-9 present");
    assert_eq!(request.kind, RequestKind::Purchase);
    let approval = request.items[0].approval.expect("approval present");
    assert_eq!(approval.status, ApprovalStatus::Approved);
    assert_eq!(approval.approved_quantity, 3.0);
    assert_eq!(snapshot.request("r-10").map(|r| r.kind), Some(RequestKind::Loan));
}

#[test]
fn test_malformed_document_is_skipped_without_losing_the_export() {
    let raw: RawSnapshot = serde_json::from_str(
        r#"{
            "assets": [{"id": "a-1", "name": "ONT", "brand": "ZTE", "status": "in_use"}],
            "requests": [
                {"id": "r-1", "documentNumber": "PR/1", "kind": "barter"},
                {"id": "r-2", "documentNumber": "PR/2", "kind": "purchase"}
            ],
            "installations": [
                {"id": "i-1", "customerId": "c-1", "date": "2024-01-02"},
                {"id": "i-2", "documentNumber": "INS-2", "customerId": "c-1", "date": "2024-01-03"}
            ],
            "dismantles": [{"id": "d-1"}]
        }"#,
    )
    .expect("export should deserialize");
    let (snapshot, report) = InventorySnapshot::from_raw(raw);

    assert_eq!(report.accepted, 1);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.skipped_requests, 1);
    assert_eq!(report.skipped_documents, 2);
    assert_eq!(report.total_skipped(), 3);
    assert!(snapshot.asset("a-1").is_some());
    assert!(snapshot.request("r-1").is_none());
    assert!(snapshot.request("r-2").is_some());
    assert_eq!(snapshot.installations.len(), 1);
    assert_eq!(snapshot.installations[0].id, "i-2");
    assert!(snapshot.dismantles.is_empty());
}
