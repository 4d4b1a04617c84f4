//! Activity timeline merger
//!
//! Normalizes a customer's installations, maintenance visits and dismantles
//! into one feed sorted newest first. A record whose date cannot be parsed is
//! kept and dated "now" so one bad record cannot break the ordering of the
//! rest; when enabled, the problem is also reported as a [`TimelineWarning`].

use ahash::AHashMap;
use chrono::{DateTime, Utc};
use netasset_domain::constants::{
    TITLE_DEVICE_REPLACEMENT, TITLE_DISMANTLE, TITLE_INSTALLATION, TITLE_MATERIAL_ADDITION,
    TITLE_ROUTINE_REPAIR,
};
use netasset_domain::utils::dates::parse_record_timestamp;
use netasset_domain::{
    ActivityDetail, ActivityKind, Asset, AssetRef, CustomerActivity, Dismantle, Installation,
    Maintenance, MaterialLine, MaterialUsage, NavigationTarget, ReplacementLine, Timeline,
    TimelineConfig, TimelineWarning,
};

/// The three document collections a timeline is merged from
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineSources<'a> {
    pub installations: &'a [Installation],
    pub maintenances: &'a [Maintenance],
    pub dismantles: &'a [Dismantle],
}

/// Title of a maintenance entry. First matching rule wins: replacements,
/// then materials, then routine repair.
#[must_use]
pub fn maintenance_title(visit: &Maintenance) -> &'static str {
    if !visit.replacements.is_empty() {
        TITLE_DEVICE_REPLACEMENT
    } else if !visit.materials_used.is_empty() {
        TITLE_MATERIAL_ADDITION
    } else {
        TITLE_ROUTINE_REPAIR
    }
}

/// Merges field-work documents into a customer timeline
#[derive(Debug, Clone, Copy)]
pub struct TimelineMerger {
    report_invalid_dates: bool,
}

impl Default for TimelineMerger {
    fn default() -> Self {
        Self::from_config(&TimelineConfig::default())
    }
}

impl TimelineMerger {
    #[must_use]
    pub const fn new(report_invalid_dates: bool) -> Self {
        Self { report_invalid_dates }
    }

    #[must_use]
    pub const fn from_config(config: &TimelineConfig) -> Self {
        Self::new(config.report_invalid_dates)
    }

    /// Build the timeline of `customer_id`.
    ///
    /// Asset ids are resolved against `assets`; ids that no longer exist
    /// become [`AssetRef::Missing`]. Entries with equal dates keep source
    /// order (installations, then maintenances, then dismantles).
    #[must_use]
    pub fn merge(
        &self,
        customer_id: &str,
        sources: TimelineSources<'_>,
        assets: &[Asset],
        now: DateTime<Utc>,
    ) -> Timeline {
        let mut build = TimelineBuild {
            assets: assets.iter().map(|a| (a.id.as_str(), a)).collect(),
            now,
            report_invalid_dates: self.report_invalid_dates,
            entries: Vec::new(),
            warnings: Vec::new(),
        };

        for record in sources.installations.iter().filter(|r| r.customer_id == customer_id) {
            build.push_installation(record);
        }
        for record in sources.maintenances.iter().filter(|r| r.customer_id == customer_id) {
            build.push_maintenance(record);
        }
        for record in sources.dismantles.iter().filter(|r| r.customer_id == customer_id) {
            build.push_dismantle(record);
        }

        let TimelineBuild { mut entries, warnings, .. } = build;
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!(
            customer_id,
            entries = entries.len(),
            warnings = warnings.len(),
            "Customer timeline merged"
        );

        Timeline { customer_id: customer_id.to_string(), entries, warnings }
    }
}

struct TimelineBuild<'a> {
    assets: AHashMap<&'a str, &'a Asset>,
    now: DateTime<Utc>,
    report_invalid_dates: bool,
    entries: Vec<CustomerActivity>,
    warnings: Vec<TimelineWarning>,
}

impl TimelineBuild<'_> {
    fn push_installation(&mut self, record: &Installation) {
        let detail = ActivityDetail::Installation {
            technician: record.technician_name.clone(),
            devices: record.asset_ids.iter().map(|id| self.resolve(id)).collect(),
            materials: self.materials(&record.materials_used),
        };
        self.push(
            ActivityKind::Installation,
            &record.id,
            &record.date,
            TITLE_INSTALLATION,
            &record.document_number,
            detail,
        );
    }

    fn push_maintenance(&mut self, record: &Maintenance) {
        let detail = ActivityDetail::Maintenance {
            technician: record.technician_name.clone(),
            problem: record.problem_description.clone(),
            replacements: record
                .replacements
                .iter()
                .map(|r| ReplacementLine {
                    removed: self.resolve(&r.old_asset_id),
                    installed: self.resolve(&r.new_asset_id),
                })
                .collect(),
            materials: self.materials(&record.materials_used),
        };
        self.push(
            ActivityKind::Maintenance,
            &record.id,
            &record.date,
            maintenance_title(record),
            &record.document_number,
            detail,
        );
    }

    fn push_dismantle(&mut self, record: &Dismantle) {
        let detail = ActivityDetail::Dismantle {
            reason: record.reason.clone(),
            retrieved: record.retrieved_asset_ids.iter().map(|id| self.resolve(id)).collect(),
        };
        self.push(
            ActivityKind::Dismantle,
            &record.id,
            &record.date,
            TITLE_DISMANTLE,
            &record.document_number,
            detail,
        );
    }

    fn push(
        &mut self,
        kind: ActivityKind,
        record_id: &str,
        raw_date: &str,
        title: &str,
        document_number: &str,
        detail: ActivityDetail,
    ) {
        let (date, date_is_fallback) = match parse_record_timestamp(raw_date) {
            Some(date) => (date, false),
            None => {
                tracing::warn!(
                    kind = %kind,
                    record_id,
                    raw_date,
                    "Unparseable activity date, using current time"
                );
                if self.report_invalid_dates {
                    self.warnings.push(TimelineWarning {
                        kind,
                        record_id: record_id.to_string(),
                        raw_date: raw_date.to_string(),
                        message: format!("Invalid date '{raw_date}' on {kind} {record_id}"),
                    });
                }
                (self.now, true)
            }
        };

        self.entries.push(CustomerActivity {
            date,
            date_is_fallback,
            kind,
            title: title.to_string(),
            document_number: document_number.to_string(),
            detail,
            target: NavigationTarget { kind, id: record_id.to_string() },
        });
    }

    fn materials(&self, used: &[MaterialUsage]) -> Vec<MaterialLine> {
        used.iter()
            .map(|m| MaterialLine { asset: self.resolve(&m.asset_id), quantity: m.quantity })
            .collect()
    }

    fn resolve(&self, id: &str) -> AssetRef {
        match self.assets.get(id) {
            Some(asset) => AssetRef::Found {
                id: asset.id.clone(),
                name: asset.name.clone(),
                serial_number: asset.serial_number.clone(),
            },
            None => {
                tracing::debug!(asset_id = id, "Activity references unknown asset");
                AssetRef::Missing { id: id.to_string() }
            }
        }
    }
}
