use std::collections::BTreeMap;

use crate::value::AnyValue;

/// Simple key/value tags with no namespace (`freeformTags`).
pub type FreeformTags = BTreeMap<String, String>;

/// Namespaced tags (`definedTags`): namespace → key → value.
pub type DefinedTags = BTreeMap<String, BTreeMap<String, AnyValue>>;

wire_enum! {
    pub enum DatabaseEdition {
        StandardEdition = "STANDARD_EDITION",
        EnterpriseEdition = "ENTERPRISE_EDITION",
        EnterpriseEditionHighPerformance = "ENTERPRISE_EDITION_HIGH_PERFORMANCE",
        EnterpriseEditionExtremePerformance = "ENTERPRISE_EDITION_EXTREME_PERFORMANCE",
    }
}

wire_enum! {
    pub enum LicenseModel {
        LicenseIncluded = "LICENSE_INCLUDED",
        BringYourOwnLicense = "BRING_YOUR_OWN_LICENSE",
    }
}
