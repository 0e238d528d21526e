// Error codes implementation
// Standardized codes reported alongside every FieldKitError

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const RULE_VIOLATION: &str = "VALIDATION_1002";
}

pub mod format {
    pub const INVALID_JSON: &str = "FORMAT_2001";
    pub const INVALID_YAML: &str = "FORMAT_2002";
}

pub mod config {
    pub const INVALID_SETTING: &str = "CONFIG_3001";
}

pub mod system {
    pub const IO_FAILURE: &str = "SYSTEM_9001";
    pub const INTERNAL: &str = "SYSTEM_9002";
}
