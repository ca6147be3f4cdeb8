use super::common::{DefinedTags, FreeformTags};

wire_enum! {
    pub enum CredentialType {
        NameReference = "NAME_REFERENCE",
        Details = "DETAILS",
        SslDetails = "SSL_DETAILS",
    }
}

wire_enum! {
    pub enum DatabaseCredentialRole {
        Sysdba = "SYSDBA",
        Normal = "NORMAL",
    }
}

wire_enum! {
    pub enum ConnectionProtocol {
        Tcp = "TCP",
        Tcps = "TCPS",
    }
}

wire_enum! {
    pub enum ExternalDatabaseConnectorType {
        Macs = "MACS",
    }
}

resource_model! {
    pub struct DatabaseConnectionCredentials = "DatabaseConnectionCredentials" {
        credential_type: CredentialType = "credentialType" hard;
    }
}

resource_model! {
    /// Credentials stored under a name on the management agent.
    pub struct DatabaseConnectionCredentialsByName = "DatabaseConnectionCredentialsByName" {
        credential_type: CredentialType = "credentialType" hard, fixed "NAME_REFERENCE";
        credential_name: String = "credentialName";
    }
}

resource_model! {
    pub struct DatabaseConnectionCredentialsByDetails = "DatabaseConnectionCredentialsByDetails" {
        credential_type: CredentialType = "credentialType" hard, fixed "DETAILS";
        credential_name: String = "credentialName";
        username: String = "username";
        password: String = "password";
        role: DatabaseCredentialRole = "role" hard;
    }
}

resource_model! {
    pub struct DatabaseSslConnectionCredentials = "DatabaseSslConnectionCredentials" {
        credential_type: CredentialType = "credentialType" hard, fixed "SSL_DETAILS";
        credential_name: String = "credentialName";
        username: String = "username";
        password: String = "password";
        role: DatabaseCredentialRole = "role" hard;
        ssl_secret_id: String = "sslSecretId";
    }
}

polymorphic_model! {
    /// Database credentials, resolved by `credentialType`.
    pub enum ConnectionCredentials : DatabaseConnectionCredentials on "credentialType" {
        "NAME_REFERENCE" => ByName(DatabaseConnectionCredentialsByName),
        "DETAILS" => ByDetails(DatabaseConnectionCredentialsByDetails),
        "SSL_DETAILS" => Ssl(DatabaseSslConnectionCredentials),
    }
}

resource_model! {
    pub struct DatabaseConnectionString = "DatabaseConnectionString" {
        hostname: String = "hostname";
        port: i64 = "port";
        service: String = "service";
        protocol: ConnectionProtocol = "protocol" hard;
    }
}

resource_model! {
    /// Registers an external database connector that uses a management agent
    /// (MACS) to reach the database.
    pub struct CreateExternalMacsConnectorDetails = "CreateExternalMacsConnectorDetails" {
        display_name: String = "displayName";
        connector_type: ExternalDatabaseConnectorType = "connectorType" hard, fixed "MACS";
        external_database_id: String = "externalDatabaseId";
        connection_string: DatabaseConnectionString = "connectionString";
        connection_credentials: ConnectionCredentials = "connectionCredentials";
        connector_agent_id: String = "connectorAgentId";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::testing::RecordingSink;
    use crate::field::Field;
    use crate::registry::DeclaredType;
    use crate::traits::{PolymorphicModel, ResourceModel};
    use serde_json::json;
    use yare::parameterized;

    #[parameterized(
        by_name = { "NAME_REFERENCE", "DatabaseConnectionCredentialsByName" },
        by_details = { "DETAILS", "DatabaseConnectionCredentialsByDetails" },
        ssl = { "SSL_DETAILS", "DatabaseSslConnectionCredentials" },
    )]
    fn test_credential_subtypes(literal: &str, expected: &str) {
        let credentials =
            ConnectionCredentials::from_value(&json!({"credentialType": literal})).unwrap();
        assert_eq!(credentials.model_name(), expected);
    }

    #[test]
    fn test_snake_case_discriminant_resolves() {
        let sink = RecordingSink::default();
        let raw = json!({"credential_type": "DETAILS", "username": "dbsnmp"});
        assert_eq!(
            ConnectionCredentials::subtype_name(&raw),
            "DatabaseConnectionCredentialsByDetails"
        );
        let credentials = ConnectionCredentials::from_value_with(&raw, &sink).unwrap();
        assert!(matches!(credentials, ConnectionCredentials::ByDetails(_)));
        assert!(sink.events().is_empty());
        insta::assert_snapshot!(
            credentials.to_string(),
            @r#"{"credentialType":"DETAILS","username":"dbsnmp"}"#
        );
    }

    #[test]
    fn test_connector_nests_polymorphic_credentials() {
        let sink = RecordingSink::default();
        let raw = json!({
            "displayName": "ext-conn",
            "connectorType": "MACS",
            "externalDatabaseId": "ocid1.externaldatabase.oc1..e",
            "connectionString": {"hostname": "db.example.com", "port": 1521, "service": "orcl", "protocol": "TCPS"},
            "connectionCredentials": {
                "credentialType": "SSL_DETAILS",
                "credentialName": "prod.dbsnmp",
                "username": "dbsnmp",
                "role": "NORMAL",
                "sslSecretId": "ocid1.vaultsecret.oc1..s"
            },
            "connectorAgentId": "ocid1.managementagent.oc1..m"
        });
        let connector = CreateExternalMacsConnectorDetails::from_value_with(&raw, &sink).unwrap();
        let Some(ConnectionCredentials::Ssl(ssl)) = connector.connection_credentials.get() else {
            panic!("expected SSL credentials");
        };
        assert_eq!(ssl.role, Field::Set(DatabaseCredentialRole::Normal));
        assert!(sink.events().is_empty());
        assert_eq!(connector.to_value(), raw);
    }

    #[test]
    fn test_missing_credential_type_falls_back() {
        let sink = RecordingSink::default();
        let raw = json!({"connectionCredentials": {"credentialName": "x"}});
        let connector = CreateExternalMacsConnectorDetails::from_value_with(&raw, &sink).unwrap();
        assert!(matches!(
            connector.connection_credentials.get(),
            Some(ConnectionCredentials::Base(_))
        ));
        assert_eq!(
            sink.events(),
            vec!["subtype DatabaseConnectionCredentials credentialType=None".to_string()]
        );
        insta::assert_snapshot!(
            connector.to_string(),
            @r#"{"connectorType":"MACS","connectionCredentials":{}}"#
        );
    }

    #[test]
    fn test_connector_type_is_pinned() {
        let connector = CreateExternalMacsConnectorDetails::from_value(&json!({
            "connectorType": "AGENTLESS"
        }))
        .unwrap();
        assert_eq!(
            connector.connector_type,
            Field::Set(ExternalDatabaseConnectorType::Macs)
        );
    }

    #[test]
    fn test_polymorphic_attribute_declares_base_name() {
        let attr = CreateExternalMacsConnectorDetails::attribute("connection_credentials").unwrap();
        assert_eq!(
            attr.declared_type(),
            &DeclaredType::Model("DatabaseConnectionCredentials")
        );
    }

    #[test]
    fn test_protocol_is_hard() {
        assert!(DatabaseConnectionString::from_value(&json!({"protocol": "UDP"})).is_err());
    }
}
