use chrono::{DateTime, Utc};

use super::common::{DefinedTags, FreeformTags};

wire_enum! {
    pub enum DbWorkload {
        Oltp = "OLTP",
        Dss = "DSS",
    }
}

wire_enum! {
    /// Two-hour UTC slots in which automatic backups may start.
    pub enum AutoBackupWindow {
        SlotOne = "SLOT_ONE",
        SlotTwo = "SLOT_TWO",
        SlotThree = "SLOT_THREE",
        SlotFour = "SLOT_FOUR",
        SlotFive = "SLOT_FIVE",
        SlotSix = "SLOT_SIX",
        SlotSeven = "SLOT_SEVEN",
        SlotEight = "SLOT_EIGHT",
        SlotNine = "SLOT_NINE",
        SlotTen = "SLOT_TEN",
        SlotEleven = "SLOT_ELEVEN",
        SlotTwelve = "SLOT_TWELVE",
    }
}

wire_enum! {
    pub enum BackupDeletionPolicy {
        DeleteImmediately = "DELETE_IMMEDIATELY",
        DeleteAfterRetentionPeriod = "DELETE_AFTER_RETENTION_PERIOD",
    }
}

wire_enum! {
    pub enum BackupDestinationType {
        Nfs = "NFS",
        RecoveryAppliance = "RECOVERY_APPLIANCE",
        ObjectStore = "OBJECT_STORE",
        Local = "LOCAL",
        Dbrs = "DBRS",
    }
}

resource_model! {
    pub struct BackupDestinationDetails = "BackupDestinationDetails" {
        r#type: BackupDestinationType = "type" soft;
        id: String = "id";
        vpc_user: String = "vpcUser";
        vpc_password: String = "vpcPassword";
        internet_proxy: String = "internetProxy";
        dbrs_policy_id: String = "dbrsPolicyId";
    }
}

resource_model! {
    /// Automatic backup settings for a database.
    pub struct DbBackupConfig = "DbBackupConfig" {
        auto_backup_enabled: bool = "autoBackupEnabled";
        /// Days to keep automatic backups: 7, 15, 30, 45 or 60.
        recovery_window_in_days: i64 = "recoveryWindowInDays";
        auto_backup_window: AutoBackupWindow = "autoBackupWindow" soft;
        backup_destination_details: Vec<BackupDestinationDetails> = "backupDestinationDetails";
        backup_deletion_policy: BackupDeletionPolicy = "backupDeletionPolicy" soft;
    }
}

resource_model! {
    /// A new database to create in a new DB home.
    pub struct CreateDatabaseDetails = "CreateDatabaseDetails" {
        db_name: String = "dbName";
        db_unique_name: String = "dbUniqueName";
        pdb_name: String = "pdbName";
        admin_password: String = "adminPassword";
        tde_wallet_password: String = "tdeWalletPassword";
        character_set: String = "characterSet";
        ncharacter_set: String = "ncharacterSet";
        db_workload: DbWorkload = "dbWorkload" hard;
        db_backup_config: DbBackupConfig = "dbBackupConfig";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
        kms_key_id: String = "kmsKeyId";
        kms_key_version_id: String = "kmsKeyVersionId";
        sid_prefix: String = "sidPrefix";
    }
}

resource_model! {
    /// A database restored from a standalone or automatic backup.
    pub struct CreateDatabaseFromBackupDetails = "CreateDatabaseFromBackupDetails" {
        backup_id: String = "backupId";
        backup_tde_password: String = "backupTDEPassword";
        admin_password: String = "adminPassword";
        db_unique_name: String = "dbUniqueName";
        db_name: String = "dbName";
        sid_prefix: String = "sidPrefix";
    }
}

resource_model! {
    pub struct CreateDatabaseFromAnotherDatabaseDetails = "CreateDatabaseFromAnotherDatabaseDetails" {
        database_id: String = "databaseId";
        backup_tde_password: String = "backupTDEPassword";
        admin_password: String = "adminPassword";
        db_unique_name: String = "dbUniqueName";
        db_name: String = "dbName";
        time_stamp_for_point_in_time_recovery: DateTime<Utc> = "timeStampForPointInTimeRecovery";
    }
}
