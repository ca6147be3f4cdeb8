use chrono::{DateTime, Utc};

use super::common::{DefinedTags, FreeformTags};

wire_enum! {
    pub enum VmNetworkType {
        Client = "CLIENT",
        Backup = "BACKUP",
        DisasterRecovery = "DISASTER_RECOVERY",
    }
}

wire_enum! {
    pub enum NodeLifecycleState {
        Creating = "CREATING",
        Available = "AVAILABLE",
        Updating = "UPDATING",
        Deleting = "DELETING",
        Deleted = "DELETED",
        Failed = "FAILED",
    }
}

wire_enum! {
    pub enum VmClusterNetworkLifecycleState {
        Creating = "CREATING",
        RequiresValidation = "REQUIRES_VALIDATION",
        Validating = "VALIDATING",
        Validated = "VALIDATED",
        ValidationFailed = "VALIDATION_FAILED",
        Updating = "UPDATING",
        Allocated = "ALLOCATED",
        Terminating = "TERMINATING",
        Terminated = "TERMINATED",
        Failed = "FAILED",
        NeedsAttention = "NEEDS_ATTENTION",
    }
}

resource_model! {
    /// One database server node in a VM cluster network.
    pub struct NodeDetails = "NodeDetails" {
        hostname: String = "hostname";
        ip: String = "ip";
        vip_hostname: String = "vipHostname";
        vip: String = "vip";
        db_server_id: String = "dbServerId";
        lifecycle_state: NodeLifecycleState = "lifecycleState" soft;
    }
}

resource_model! {
    pub struct VmNetworkDetails = "VmNetworkDetails" {
        vlan_id: String = "vlanId";
        network_type: VmNetworkType = "networkType" hard;
        netmask: String = "netmask";
        gateway: String = "gateway";
        domain_name: String = "domainName";
        nodes: Vec<NodeDetails> = "nodes";
    }
}

resource_model! {
    /// Single Client Access Name listener configuration.
    pub struct ScanDetails = "ScanDetails" {
        hostname: String = "hostname";
        port: i64 = "port";
        scan_listener_port_tcp: i64 = "scanListenerPortTcp";
        scan_listener_port_tcp_ssl: i64 = "scanListenerPortTcpSsl";
        ips: Vec<String> = "ips";
    }
}

resource_model! {
    pub struct VmClusterNetwork = "VmClusterNetwork" {
        id: String = "id";
        exadata_infrastructure_id: String = "exadataInfrastructureId";
        compartment_id: String = "compartmentId";
        vm_cluster_id: String = "vmClusterId";
        display_name: String = "displayName";
        scans: Vec<ScanDetails> = "scans";
        dns: Vec<String> = "dns";
        ntp: Vec<String> = "ntp";
        vm_networks: Vec<VmNetworkDetails> = "vmNetworks";
        lifecycle_state: VmClusterNetworkLifecycleState = "lifecycleState" soft;
        time_created: DateTime<Utc> = "timeCreated";
        lifecycle_details: String = "lifecycleDetails";
        freeform_tags: FreeformTags = "freeformTags";
        defined_tags: DefinedTags = "definedTags";
    }
}
