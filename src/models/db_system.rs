use chrono::{DateTime, Utc};

use super::common::{DatabaseEdition, DefinedTags, FreeformTags, LicenseModel};
use super::maintenance_window::MaintenanceWindow;
use super::patch::PatchDetails;
use crate::value::Float;

wire_enum! {
    pub enum DbSystemLifecycleState {
        Provisioning = "PROVISIONING",
        Available = "AVAILABLE",
        Updating = "UPDATING",
        Terminating = "TERMINATING",
        Terminated = "TERMINATED",
        Failed = "FAILED",
        Migrated = "MIGRATED",
        MaintenanceInProgress = "MAINTENANCE_IN_PROGRESS",
        NeedsAttention = "NEEDS_ATTENTION",
        Upgrading = "UPGRADING",
    }
}

wire_enum! {
    pub enum DiskRedundancy {
        High = "HIGH",
        Normal = "NORMAL",
    }
}

wire_enum! {
    pub enum StorageManagement {
        Asm = "ASM",
        Lvm = "LVM",
    }
}

resource_model! {
    /// A DB system as returned by the service.
    pub struct DbSystem = "DbSystem" {
        id: String = "id";
        compartment_id: String = "compartmentId";
        display_name: String = "displayName";
        availability_domain: String = "availabilityDomain";
        subnet_id: String = "subnetId";
        shape: String = "shape";
        ssh_public_keys: Vec<String> = "sshPublicKeys";
        hostname: String = "hostname";
        domain: String = "domain";
        cpu_core_count: i64 = "cpuCoreCount";
        node_count: i64 = "nodeCount";
        database_edition: DatabaseEdition = "databaseEdition" soft;
        license_model: LicenseModel = "licenseModel" soft;
        disk_redundancy: DiskRedundancy = "diskRedundancy" soft;
        storage_management: StorageManagement = "storageManagement" soft;
        data_storage_size_in_gbs: i64 = "dataStorageSizeInGBs";
        data_storage_percentage: i64 = "dataStoragePercentage";
        reco_storage_size_in_gb: i64 = "recoStorageSizeInGB";
        memory_size_in_gbs: Float = "memorySizeInGBs";
        version: String = "version";
        lifecycle_state: DbSystemLifecycleState = "lifecycleState" soft;
        lifecycle_details: String = "lifecycleDetails";
        maintenance_window: MaintenanceWindow = "maintenanceWindow";
        last_patch_history_entry_id: String = "lastPatchHistoryEntryId";
        time_created: DateTime<Utc> = "timeCreated";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
    }
}

resource_model! {
    pub struct UpdateDbSystemDetails = "UpdateDbSystemDetails" {
        cpu_core_count: i64 = "cpuCoreCount";
        version: PatchDetails = "version";
        ssh_public_keys: Vec<String> = "sshPublicKeys";
        data_storage_size_in_gbs: i64 = "dataStorageSizeInGBs";
        shape: String = "shape";
        nsg_ids: Vec<String> = "nsgIds";
        backup_network_nsg_ids: Vec<String> = "backupNetworkNsgIds";
        license_model: LicenseModel = "licenseModel" hard;
        maintenance_window_details: MaintenanceWindow = "maintenanceWindowDetails";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
    }
}
