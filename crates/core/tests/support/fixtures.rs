//! Fixture builders

use chrono::NaiveDate;
use netasset_domain::{
    ApprovalStatus, Asset, AssetHolder, AssetOrigin, AssetStatus, BulkBalance, Customer,
    DeviceReplacement, Dismantle, Installation, InventorySnapshot, ItemApproval, Maintenance,
    MaterialUsage, Request, RequestItem, RequestKind, Tracking,
};

/// Builder for [`Asset`] with sensible defaults.
#[derive(Debug, Clone)]
pub struct AssetBuilder {
    asset: Asset,
}

impl AssetBuilder {
    pub fn new(id: &str, name: &str, brand: &str) -> Self {
        Self {
            asset: Asset {
                id: id.to_string(),
                name: name.to_string(),
                brand: brand.to_string(),
                serial_number: None,
                mac_address: None,
                category: "CPE".to_string(),
                type_name: None,
                unit_of_measure: "unit".to_string(),
                tracking: Tracking::Individual,
                status: AssetStatus::InStorage,
                condition: None,
                holder: AssetHolder::Unassigned,
                purchase_price: None,
                purchase_date: None,
                origin: None,
                activity_log: Vec::new(),
            },
        }
    }

    pub fn status(mut self, status: AssetStatus) -> Self {
        self.asset.status = status;
        self
    }

    pub fn serial(mut self, serial: &str) -> Self {
        self.asset.serial_number = Some(serial.to_string());
        self
    }

    pub fn bulk(mut self, initial: f64, current: f64, unit: &str) -> Self {
        self.asset.tracking =
            Tracking::Bulk(BulkBalance { initial_balance: initial, current_balance: current });
        self.asset.unit_of_measure = unit.to_string();
        self
    }

    pub fn purchased(mut self, price: f64, on: NaiveDate) -> Self {
        self.asset.purchase_price = Some(price);
        self.asset.purchase_date = Some(on);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.asset.purchase_price = Some(price);
        self
    }

    pub fn registered_for(mut self, request_id: &str, item_id: &str) -> Self {
        self.asset.origin = Some(AssetOrigin {
            request_id: request_id.to_string(),
            request_item_id: item_id.to_string(),
        });
        self
    }

    pub fn at_customer(mut self, customer_id: &str) -> Self {
        self.asset.holder = AssetHolder::Customer(customer_id.to_string());
        self.asset.status = AssetStatus::InUse;
        self
    }

    pub fn build(self) -> Asset {
        self.asset
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

pub fn request_item(id: &str, quantity: f64, approved: Option<(f64, ApprovalStatus)>) -> RequestItem {
    RequestItem {
        id: id.to_string(),
        item_name: format!("Item {id}"),
        brand: None,
        quantity,
        unit: None,
        approval: approved
            .map(|(approved_quantity, status)| ItemApproval { approved_quantity, status }),
    }
}

pub fn installation(id: &str, customer_id: &str, date: &str, asset_ids: &[&str]) -> Installation {
    Installation {
        id: id.to_string(),
        document_number: format!("INS/{id}"),
        customer_id: customer_id.to_string(),
        date: date.to_string(),
        technician_name: Some("Andi".to_string()),
        asset_ids: asset_ids.iter().map(|s| (*s).to_string()).collect(),
        materials_used: Vec::new(),
        notes: None,
    }
}

pub fn maintenance(id: &str, customer_id: &str, date: &str) -> Maintenance {
    Maintenance {
        id: id.to_string(),
        document_number: format!("MT/{id}"),
        customer_id: customer_id.to_string(),
        date: date.to_string(),
        technician_name: None,
        problem_description: Some("LOS light blinking".to_string()),
        replacements: Vec::new(),
        materials_used: Vec::new(),
    }
}

pub fn dismantle(id: &str, customer_id: &str, date: &str, retrieved: &[&str]) -> Dismantle {
    Dismantle {
        id: id.to_string(),
        document_number: format!("DM/{id}"),
        customer_id: customer_id.to_string(),
        date: date.to_string(),
        reason: Some("Subscription cancelled".to_string()),
        retrieved_asset_ids: retrieved.iter().map(|s| (*s).to_string()).collect(),
    }
}

/// A small ISP inventory: two customers, a partially registered purchase
/// request and a few field-work documents.
pub fn sample_snapshot() -> InventorySnapshot {
    let assets = vec![
        AssetBuilder::new("a-1", "ONT HG8245H", "Huawei")
            .serial("SN-0001")
            .purchased(900_000.0, date(2023, 1, 10))
            .registered_for("r-1", "ri-1")
            .at_customer("c-1")
            .build(),
        AssetBuilder::new("a-2", "ONT HG8245H", "Huawei")
            .serial("SN-0002")
            .purchased(900_000.0, date(2023, 1, 10))
            .registered_for("r-1", "ri-1")
            .build(),
        AssetBuilder::new("a-3", "ONT HG8245H", "Huawei")
            .serial("SN-0003")
            .status(AssetStatus::Damaged)
            .registered_for("r-1", "ri-1")
            .build(),
        AssetBuilder::new("a-4", "Drop cable", "Fiberhome")
            .bulk(500.0, 320.5, "meter")
            .price(1_250_000.0)
            .registered_for("r-1", "ri-2")
            .build(),
        AssetBuilder::new("a-5", "Router hAP", "Mikrotik")
            .status(AssetStatus::OutForRepair)
            .build(),
    ];

    let mut visit = maintenance("m-1", "c-1", "2024-03-05T10:00:00+07:00");
    visit.replacements.push(DeviceReplacement {
        old_asset_id: "a-3".to_string(),
        new_asset_id: "a-1".to_string(),
    });
    let mut top_up = maintenance("m-2", "c-1", "2024-04-01");
    top_up.materials_used.push(MaterialUsage { asset_id: "a-4".to_string(), quantity: 25.0 });

    InventorySnapshot {
        customers: vec![
            Customer { id: "c-1".to_string(), name: "Toko Makmur".to_string(), address: None },
            Customer { id: "c-2".to_string(), name: "Kos Melati".to_string(), address: None },
        ],
        assets,
        requests: vec![Request {
            id: "r-1".to_string(),
            document_number: "PR/2024/003".to_string(),
            kind: RequestKind::Purchase,
            requester_id: Some("u-1".to_string()),
            items: vec![
                request_item("ri-1", 5.0, Some((4.0, ApprovalStatus::Approved))),
                request_item("ri-2", 1000.0, Some((750.0, ApprovalStatus::Approved))),
                request_item("ri-3", 2.0, Some((0.0, ApprovalStatus::Rejected))),
            ],
        }],
        installations: vec![installation("i-1", "c-1", "2024-01-15", &["a-1", "a-9"])],
        maintenances: vec![visit, top_up, maintenance("m-3", "c-2", "2024-02-01")],
        dismantles: vec![dismantle("d-1", "c-1", "31/05/2024", &["a-1"])],
    }
}
