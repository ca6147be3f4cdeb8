use chrono::{DateTime, Utc};

use super::common::{DatabaseEdition, DefinedTags, FreeformTags, LicenseModel};
use crate::value::Float;

wire_enum! {
    pub enum AutonomousDatabaseSource {
        None = "NONE",
        Database = "DATABASE",
        BackupFromId = "BACKUP_FROM_ID",
        BackupFromTimestamp = "BACKUP_FROM_TIMESTAMP",
        CloneToRefreshable = "CLONE_TO_REFRESHABLE",
        CrossRegionDataguard = "CROSS_REGION_DATAGUARD",
    }
}

wire_enum! {
    pub enum ComputeModel {
        Ecpu = "ECPU",
        Ocpu = "OCPU",
    }
}

wire_enum! {
    pub enum AutonomousDbWorkload {
        Oltp = "OLTP",
        Dw = "DW",
        Ajd = "AJD",
        Apex = "APEX",
    }
}

wire_enum! {
    pub enum CloneType {
        Full = "FULL",
        Metadata = "METADATA",
    }
}

wire_enum! {
    pub enum AutonomousDatabaseLifecycleState {
        Provisioning = "PROVISIONING",
        Available = "AVAILABLE",
        Stopping = "STOPPING",
        Stopped = "STOPPED",
        Starting = "STARTING",
        Terminating = "TERMINATING",
        Terminated = "TERMINATED",
        Unavailable = "UNAVAILABLE",
        RestoreInProgress = "RESTORE_IN_PROGRESS",
        RestoreFailed = "RESTORE_FAILED",
        BackupInProgress = "BACKUP_IN_PROGRESS",
        ScaleInProgress = "SCALE_IN_PROGRESS",
        AvailableNeedsAttention = "AVAILABLE_NEEDS_ATTENTION",
        Updating = "UPDATING",
        MaintenanceInProgress = "MAINTENANCE_IN_PROGRESS",
        Restarting = "RESTARTING",
        Recreating = "RECREATING",
        RoleChangeInProgress = "ROLE_CHANGE_IN_PROGRESS",
        Upgrading = "UPGRADING",
        Inaccessible = "INACCESSIBLE",
        Standby = "STANDBY",
    }
}

resource_model! {
    /// Common attributes of every Autonomous Database creation request.
    pub struct CreateAutonomousDatabaseBase = "CreateAutonomousDatabaseBase" {
        compartment_id: String = "compartmentId";
        db_name: String = "dbName";
        display_name: String = "displayName";
        compute_model: ComputeModel = "computeModel" hard;
        compute_count: Float = "computeCount";
        cpu_core_count: i64 = "cpuCoreCount";
        data_storage_size_in_tbs: i64 = "dataStorageSizeInTBs";
        data_storage_size_in_gbs: i64 = "dataStorageSizeInGBs";
        db_workload: AutonomousDbWorkload = "dbWorkload" hard;
        db_version: String = "dbVersion";
        admin_password: String = "adminPassword";
        license_model: LicenseModel = "licenseModel" hard;
        database_edition: DatabaseEdition = "databaseEdition" hard;
        is_auto_scaling_enabled: bool = "isAutoScalingEnabled";
        is_free_tier: bool = "isFreeTier";
        is_mtls_connection_required: bool = "isMtlsConnectionRequired";
        subnet_id: String = "subnetId";
        nsg_ids: Vec<String> = "nsgIds";
        whitelisted_ips: Vec<String> = "whitelistedIps";
        kms_key_id: String = "kmsKeyId";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
        source: AutonomousDatabaseSource = "source" hard, default "NONE";
    }
}

resource_model! {
    /// A new, empty Autonomous Database.
    pub struct CreateAutonomousDatabaseDetails = "CreateAutonomousDatabaseDetails" {
        compartment_id: String = "compartmentId";
        db_name: String = "dbName";
        display_name: String = "displayName";
        compute_model: ComputeModel = "computeModel" hard;
        compute_count: Float = "computeCount";
        cpu_core_count: i64 = "cpuCoreCount";
        data_storage_size_in_tbs: i64 = "dataStorageSizeInTBs";
        data_storage_size_in_gbs: i64 = "dataStorageSizeInGBs";
        db_workload: AutonomousDbWorkload = "dbWorkload" hard;
        db_version: String = "dbVersion";
        admin_password: String = "adminPassword";
        license_model: LicenseModel = "licenseModel" hard;
        database_edition: DatabaseEdition = "databaseEdition" hard;
        is_auto_scaling_enabled: bool = "isAutoScalingEnabled";
        is_free_tier: bool = "isFreeTier";
        is_mtls_connection_required: bool = "isMtlsConnectionRequired";
        subnet_id: String = "subnetId";
        nsg_ids: Vec<String> = "nsgIds";
        whitelisted_ips: Vec<String> = "whitelistedIps";
        kms_key_id: String = "kmsKeyId";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
        source: AutonomousDatabaseSource = "source" hard, fixed "NONE";
    }
}

resource_model! {
    /// A clone of an existing Autonomous Database.
    pub struct CreateAutonomousDatabaseCloneDetails = "CreateAutonomousDatabaseCloneDetails" {
        compartment_id: String = "compartmentId";
        db_name: String = "dbName";
        display_name: String = "displayName";
        compute_model: ComputeModel = "computeModel" hard;
        compute_count: Float = "computeCount";
        cpu_core_count: i64 = "cpuCoreCount";
        data_storage_size_in_tbs: i64 = "dataStorageSizeInTBs";
        data_storage_size_in_gbs: i64 = "dataStorageSizeInGBs";
        db_workload: AutonomousDbWorkload = "dbWorkload" hard;
        db_version: String = "dbVersion";
        admin_password: String = "adminPassword";
        license_model: LicenseModel = "licenseModel" hard;
        database_edition: DatabaseEdition = "databaseEdition" hard;
        is_auto_scaling_enabled: bool = "isAutoScalingEnabled";
        is_free_tier: bool = "isFreeTier";
        is_mtls_connection_required: bool = "isMtlsConnectionRequired";
        subnet_id: String = "subnetId";
        nsg_ids: Vec<String> = "nsgIds";
        whitelisted_ips: Vec<String> = "whitelistedIps";
        kms_key_id: String = "kmsKeyId";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
        source: AutonomousDatabaseSource = "source" hard, fixed "DATABASE";
        source_id: String = "sourceId";
        clone_type: CloneType = "cloneType" hard;
    }
}

resource_model! {
    pub struct CreateAutonomousDatabaseFromBackupDetails = "CreateAutonomousDatabaseFromBackupDetails" {
        compartment_id: String = "compartmentId";
        db_name: String = "dbName";
        display_name: String = "displayName";
        compute_model: ComputeModel = "computeModel" hard;
        compute_count: Float = "computeCount";
        cpu_core_count: i64 = "cpuCoreCount";
        data_storage_size_in_tbs: i64 = "dataStorageSizeInTBs";
        data_storage_size_in_gbs: i64 = "dataStorageSizeInGBs";
        db_workload: AutonomousDbWorkload = "dbWorkload" hard;
        db_version: String = "dbVersion";
        admin_password: String = "adminPassword";
        license_model: LicenseModel = "licenseModel" hard;
        database_edition: DatabaseEdition = "databaseEdition" hard;
        is_auto_scaling_enabled: bool = "isAutoScalingEnabled";
        is_free_tier: bool = "isFreeTier";
        is_mtls_connection_required: bool = "isMtlsConnectionRequired";
        subnet_id: String = "subnetId";
        nsg_ids: Vec<String> = "nsgIds";
        whitelisted_ips: Vec<String> = "whitelistedIps";
        kms_key_id: String = "kmsKeyId";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
        source: AutonomousDatabaseSource = "source" hard, fixed "BACKUP_FROM_ID";
        autonomous_database_backup_id: String = "autonomousDatabaseBackupId";
        clone_type: CloneType = "cloneType" hard;
    }
}

resource_model! {
    /// A point-in-time clone restored from the backups of another
    /// Autonomous Database.
    pub struct CreateAutonomousDatabaseFromBackupTimestampDetails = "CreateAutonomousDatabaseFromBackupTimestampDetails" {
        compartment_id: String = "compartmentId";
        db_name: String = "dbName";
        display_name: String = "displayName";
        compute_model: ComputeModel = "computeModel" hard;
        compute_count: Float = "computeCount";
        cpu_core_count: i64 = "cpuCoreCount";
        data_storage_size_in_tbs: i64 = "dataStorageSizeInTBs";
        data_storage_size_in_gbs: i64 = "dataStorageSizeInGBs";
        db_workload: AutonomousDbWorkload = "dbWorkload" hard;
        db_version: String = "dbVersion";
        admin_password: String = "adminPassword";
        license_model: LicenseModel = "licenseModel" hard;
        database_edition: DatabaseEdition = "databaseEdition" hard;
        is_auto_scaling_enabled: bool = "isAutoScalingEnabled";
        is_free_tier: bool = "isFreeTier";
        is_mtls_connection_required: bool = "isMtlsConnectionRequired";
        subnet_id: String = "subnetId";
        nsg_ids: Vec<String> = "nsgIds";
        whitelisted_ips: Vec<String> = "whitelistedIps";
        kms_key_id: String = "kmsKeyId";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
        source: AutonomousDatabaseSource = "source" hard, fixed "BACKUP_FROM_TIMESTAMP";
        autonomous_database_id: String = "autonomousDatabaseId";
        timestamp: DateTime<Utc> = "timestamp";
        use_latest_available_backup_time_stamp: bool = "useLatestAvailableBackupTimeStamp";
        clone_type: CloneType = "cloneType" hard;
    }
}

polymorphic_model! {
    /// An Autonomous Database creation request, resolved by its `source`.
    pub enum CreateAutonomousDatabase : CreateAutonomousDatabaseBase on "source" {
        "NONE" => New(CreateAutonomousDatabaseDetails),
        "DATABASE" => DatabaseClone(CreateAutonomousDatabaseCloneDetails),
        "BACKUP_FROM_ID" => FromBackup(CreateAutonomousDatabaseFromBackupDetails),
        "BACKUP_FROM_TIMESTAMP" => FromBackupTimestamp(CreateAutonomousDatabaseFromBackupTimestampDetails),
    }
}

resource_model! {
    pub struct AutonomousDatabaseConnectionStrings = "AutonomousDatabaseConnectionStrings" {
        high: String = "high";
        medium: String = "medium";
        low: String = "low";
        dedicated: String = "dedicated";
        /// Service name → connection string.
        all_connection_strings: std::collections::BTreeMap<String, String> = "allConnectionStrings";
    }
}

resource_model! {
    /// An Autonomous Database as returned by the service. Enum attributes
    /// are soft so newer service literals do not break older clients.
    pub struct AutonomousDatabase = "AutonomousDatabase" {
        id: String = "id";
        compartment_id: String = "compartmentId";
        lifecycle_state: AutonomousDatabaseLifecycleState = "lifecycleState" soft;
        lifecycle_details: String = "lifecycleDetails";
        db_name: String = "dbName";
        display_name: String = "displayName";
        is_free_tier: bool = "isFreeTier";
        compute_model: ComputeModel = "computeModel" soft;
        compute_count: Float = "computeCount";
        data_storage_size_in_tbs: i64 = "dataStorageSizeInTBs";
        db_version: String = "dbVersion";
        db_workload: AutonomousDbWorkload = "dbWorkload" soft;
        license_model: LicenseModel = "licenseModel" soft;
        database_edition: DatabaseEdition = "databaseEdition" soft;
        connection_strings: AutonomousDatabaseConnectionStrings = "connectionStrings";
        service_console_url: String = "serviceConsoleUrl";
        time_created: DateTime<Utc> = "timeCreated";
        time_maintenance_begin: DateTime<Utc> = "timeMaintenanceBegin";
        time_maintenance_end: DateTime<Utc> = "timeMaintenanceEnd";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
    }
}
