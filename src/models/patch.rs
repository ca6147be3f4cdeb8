use chrono::{DateTime, Utc};

wire_enum! {
    pub enum PatchAction {
        Apply = "APPLY",
        Precheck = "PRECHECK",
    }
}

wire_enum! {
    pub enum PatchLifecycleState {
        Available = "AVAILABLE",
        Success = "SUCCESS",
        InProgress = "IN_PROGRESS",
        Failed = "FAILED",
    }
}

resource_model! {
    /// A patch available for a DB system or DB home.
    pub struct Patch = "Patch" {
        id: String = "id";
        description: String = "description";
        last_action: PatchAction = "lastAction" soft;
        available_actions: Vec<PatchAction> = "availableActions" soft;
        lifecycle_details: String = "lifecycleDetails";
        lifecycle_state: PatchLifecycleState = "lifecycleState" soft;
        time_released: DateTime<Utc> = "timeReleased";
        version: String = "version";
    }
}

resource_model! {
    /// The patch to apply or precheck during an update.
    pub struct PatchDetails = "PatchDetails" {
        patch_id: String = "patchId";
        action: PatchAction = "action" hard;
    }
}

resource_model! {
    pub struct PatchHistoryEntry = "PatchHistoryEntry" {
        id: String = "id";
        patch_id: String = "patchId";
        action: PatchAction = "action" soft;
        lifecycle_state: PatchLifecycleState = "lifecycleState" soft;
        lifecycle_details: String = "lifecycleDetails";
        time_started: DateTime<Utc> = "timeStarted";
        time_ended: DateTime<Utc> = "timeEnded";
    }
}
