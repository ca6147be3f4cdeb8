use super::common::{DefinedTags, FreeformTags};
use super::database::{
    CreateDatabaseDetails, CreateDatabaseFromAnotherDatabaseDetails,
    CreateDatabaseFromBackupDetails,
};

wire_enum! {
    /// Where the initial database of a new DB home comes from.
    pub enum DbHomeSource {
        None = "NONE",
        DbBackup = "DB_BACKUP",
        Database = "DATABASE",
        VmClusterBackup = "VM_CLUSTER_BACKUP",
        VmClusterNew = "VM_CLUSTER_NEW",
    }
}

resource_model! {
    /// Common attributes of every DB home creation request.
    pub struct CreateDbHomeBase = "CreateDbHomeBase" {
        display_name: String = "displayName";
        kms_key_id: String = "kmsKeyId";
        kms_key_version_id: String = "kmsKeyVersionId";
        database_software_image_id: String = "databaseSoftwareImageId";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
        source: DbHomeSource = "source" hard, default "NONE";
        is_desupported_version: bool = "isDesupportedVersion";
    }
}

resource_model! {
    /// A DB home with a new database on an existing DB system.
    pub struct CreateDbHomeWithDbSystemIdDetails = "CreateDbHomeWithDbSystemIdDetails" {
        display_name: String = "displayName";
        kms_key_id: String = "kmsKeyId";
        kms_key_version_id: String = "kmsKeyVersionId";
        database_software_image_id: String = "databaseSoftwareImageId";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
        source: DbHomeSource = "source" hard, fixed "NONE";
        is_desupported_version: bool = "isDesupportedVersion";
        db_system_id: String = "dbSystemId";
        db_version: String = "dbVersion";
        database: CreateDatabaseDetails = "database";
    }
}

resource_model! {
    /// A DB home whose database is restored from a backup.
    pub struct CreateDbHomeWithDbSystemIdFromBackupDetails = "CreateDbHomeWithDbSystemIdFromBackupDetails" {
        display_name: String = "displayName";
        kms_key_id: String = "kmsKeyId";
        kms_key_version_id: String = "kmsKeyVersionId";
        database_software_image_id: String = "databaseSoftwareImageId";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
        source: DbHomeSource = "source" hard, fixed "DB_BACKUP";
        is_desupported_version: bool = "isDesupportedVersion";
        db_system_id: String = "dbSystemId";
        database: CreateDatabaseFromBackupDetails = "database";
    }
}

resource_model! {
    /// A DB home whose database is cloned from another database.
    pub struct CreateDbHomeWithDbSystemIdFromDatabaseDetails = "CreateDbHomeWithDbSystemIdFromDatabaseDetails" {
        display_name: String = "displayName";
        kms_key_id: String = "kmsKeyId";
        kms_key_version_id: String = "kmsKeyVersionId";
        database_software_image_id: String = "databaseSoftwareImageId";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
        source: DbHomeSource = "source" hard, fixed "DATABASE";
        is_desupported_version: bool = "isDesupportedVersion";
        db_system_id: String = "dbSystemId";
        database: CreateDatabaseFromAnotherDatabaseDetails = "database";
    }
}

resource_model! {
    pub struct CreateDbHomeWithVmClusterIdDetails = "CreateDbHomeWithVmClusterIdDetails" {
        display_name: String = "displayName";
        kms_key_id: String = "kmsKeyId";
        kms_key_version_id: String = "kmsKeyVersionId";
        database_software_image_id: String = "databaseSoftwareImageId";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
        source: DbHomeSource = "source" hard, fixed "VM_CLUSTER_NEW";
        is_desupported_version: bool = "isDesupportedVersion";
        vm_cluster_id: String = "vmClusterId";
        db_version: String = "dbVersion";
        database: CreateDatabaseDetails = "database";
    }
}

polymorphic_model! {
    /// A DB home creation request, resolved by its `source`.
    pub enum CreateDbHome : CreateDbHomeBase on "source" {
        "NONE" => WithDbSystemId(CreateDbHomeWithDbSystemIdDetails),
        "DB_BACKUP" => FromBackup(CreateDbHomeWithDbSystemIdFromBackupDetails),
        "DATABASE" => FromDatabase(CreateDbHomeWithDbSystemIdFromDatabaseDetails),
        "VM_CLUSTER_NEW" => WithVmClusterId(CreateDbHomeWithVmClusterIdDetails),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::field::Field;
    use crate::traits::{PolymorphicModel, ResourceModel};
    use serde_json::json;
    use yare::parameterized;

    #[test]
    fn test_base_rejects_bogus_source() {
        let err = CreateDbHomeBase::from_value(&json!({"source": "BOGUS"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value 'BOGUS' for CreateDbHomeBase.source: must be one of \
             [NONE, DB_BACKUP, DATABASE, VM_CLUSTER_BACKUP, VM_CLUSTER_NEW]"
        );
    }

    #[test]
    fn test_base_defaults_source() {
        let base = CreateDbHomeBase::from_value(&json!({"displayName": "home1"})).unwrap();
        assert_eq!(base.source, Field::Set(DbHomeSource::None));
        insta::assert_snapshot!(base.to_string(), @r#"{"displayName":"home1","source":"NONE"}"#);
    }

    #[parameterized(
        none = { "NONE", "CreateDbHomeWithDbSystemIdDetails" },
        backup = { "DB_BACKUP", "CreateDbHomeWithDbSystemIdFromBackupDetails" },
        database = { "DATABASE", "CreateDbHomeWithDbSystemIdFromDatabaseDetails" },
        vm_cluster = { "VM_CLUSTER_NEW", "CreateDbHomeWithVmClusterIdDetails" },
        unmapped_literal = { "VM_CLUSTER_BACKUP", "CreateDbHomeBase" },
        unknown = { "TAPE", "CreateDbHomeBase" },
    )]
    fn test_subtype_name(source: &str, expected: &str) {
        let raw = json!({"source": source});
        assert_eq!(CreateDbHome::subtype_name(&raw), expected);
    }

    #[test]
    fn test_db_backup_resolves_to_backup_subtype() {
        let raw = json!({
            "source": "DB_BACKUP",
            "dbSystemId": "ocid1.dbsystem.oc1..a",
            "database": {"backupId": "ocid1.backup.oc1..b", "adminPassword": "pw"}
        });
        let home = CreateDbHome::from_value(&raw).unwrap();
        let CreateDbHome::FromBackup(details) = &home else {
            panic!("expected FromBackup, got {home:?}");
        };
        assert_eq!(details.source, Field::Set(DbHomeSource::DbBackup));
        assert_eq!(
            details.database.get().unwrap().backup_id,
            Field::Set("ocid1.backup.oc1..b".to_string())
        );
        assert_eq!(home.model_name(), "CreateDbHomeWithDbSystemIdFromBackupDetails");
        assert_eq!(home.to_value(), raw);
    }

    #[test]
    fn test_subtype_pins_discriminant() {
        let details =
            CreateDbHomeWithDbSystemIdFromBackupDetails::from_value(&json!({"source": "NONE"}))
                .unwrap();
        assert_eq!(details.source, Field::Set(DbHomeSource::DbBackup));

        let empty = CreateDbHomeWithVmClusterIdDetails::from_value(&json!({})).unwrap();
        insta::assert_snapshot!(empty.to_string(), @r#"{"source":"VM_CLUSTER_NEW"}"#);
    }

    #[test]
    fn test_subtype_built_in_code_keeps_its_variant() {
        let mut details = CreateDbHomeWithDbSystemIdFromBackupDetails::default();
        assert_eq!(details.source, Field::Set(DbHomeSource::DbBackup));
        details.db_system_id.set("ocid1.dbsystem.oc1..a");

        let home = CreateDbHome::from(details);
        let raw = home.to_value();
        insta::assert_snapshot!(
            raw.to_string(),
            @r#"{"source":"DB_BACKUP","dbSystemId":"ocid1.dbsystem.oc1..a"}"#
        );

        let decoded = CreateDbHome::from_value(&raw).unwrap();
        assert_eq!(decoded.model_name(), home.model_name());
        assert_eq!(decoded, home);
    }

    #[test]
    fn test_pinned_source_rejects_other_literals() {
        let mut details = CreateDbHomeWithDbSystemIdFromBackupDetails::default();
        let err = details.set_attribute("source", &json!("NONE")).unwrap_err();
        assert_eq!(
            err,
            ModelError::PinnedAttribute {
                model: "CreateDbHomeWithDbSystemIdFromBackupDetails".to_string(),
                field: "source".to_string(),
                pinned: r#""DB_BACKUP""#.to_string(),
                value: r#""NONE""#.to_string(),
            }
        );
        assert!(details.set_attribute("source", &json!(null)).is_err());
        assert_eq!(details.source, Field::Set(DbHomeSource::DbBackup));

        details.set_attribute("source", &json!("DB_BACKUP")).unwrap();
        assert_eq!(details.source, Field::Set(DbHomeSource::DbBackup));
    }

    #[test]
    fn test_missing_source_falls_back_to_base() {
        let home = CreateDbHome::from_value(&json!({"displayName": "x"})).unwrap();
        let CreateDbHome::Base(base) = &home else {
            panic!("expected Base, got {home:?}");
        };
        assert_eq!(base.source, Field::Set(DbHomeSource::None));
    }

    #[test]
    fn test_unmapped_literal_keeps_base_source() {
        let home = CreateDbHome::from_value(&json!({"source": "VM_CLUSTER_BACKUP"})).unwrap();
        assert_eq!(home.model_name(), "CreateDbHomeBase");
        assert_eq!(home.to_value(), json!({"source": "VM_CLUSTER_BACKUP"}));
    }

    #[test]
    fn test_unknown_source_on_fallback_is_still_hard() {
        let err = CreateDbHome::from_value(&json!({"source": "TAPE"})).unwrap_err();
        assert!(matches!(err, ModelError::InvalidEnumValue { .. }));
    }

    #[test]
    fn test_from_subtype() {
        let mut details = CreateDbHomeWithDbSystemIdDetails::default();
        details.db_system_id.set("ocid1.dbsystem.oc1..a");
        let home = CreateDbHome::from(details.clone());
        assert_eq!(home, CreateDbHome::WithDbSystemId(details));
    }
}
