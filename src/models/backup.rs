use chrono::{DateTime, Utc};

use super::common::{DatabaseEdition, DefinedTags, FreeformTags};
use crate::value::Float;

wire_enum! {
    pub enum BackupType {
        Incremental = "INCREMENTAL",
        Full = "FULL",
        VirtualFull = "VIRTUAL_FULL",
    }
}

wire_enum! {
    pub enum BackupLifecycleState {
        Creating = "CREATING",
        Active = "ACTIVE",
        Deleting = "DELETING",
        Deleted = "DELETED",
        Failed = "FAILED",
        Restoring = "RESTORING",
        Canceling = "CANCELING",
        Canceled = "CANCELED",
        Updating = "UPDATING",
    }
}

resource_model! {
    /// A database backup as returned by the service.
    pub struct Backup = "Backup" {
        id: String = "id";
        compartment_id: String = "compartmentId";
        database_id: String = "databaseId";
        display_name: String = "displayName";
        r#type: BackupType = "type" soft;
        time_started: DateTime<Utc> = "timeStarted";
        time_ended: DateTime<Utc> = "timeEnded";
        lifecycle_details: String = "lifecycleDetails";
        availability_domain: String = "availabilityDomain";
        lifecycle_state: BackupLifecycleState = "lifecycleState" soft;
        database_edition: DatabaseEdition = "databaseEdition" soft;
        database_size_in_gbs: Float = "databaseSizeInGBs";
        shape: String = "shape";
        version: String = "version";
        kms_key_id: String = "kmsKeyId";
        key_store_id: String = "keyStoreId";
        retention_period_in_days: i64 = "retentionPeriodInDays";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
    }
}

resource_model! {
    pub struct CreateBackupDetails = "CreateBackupDetails" {
        database_id: String = "databaseId";
        display_name: String = "displayName";
        retention_period_in_days: i64 = "retentionPeriodInDays";
    }
}
