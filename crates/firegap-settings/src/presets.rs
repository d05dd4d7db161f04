use firegap_domain::policy::EngineConfig;

pub const DEFAULT_PROFILE: &str = "mlar";
pub const PROFILES: &[&str] = &["mlar", "conservative"];

/// Preset profiles.
///
/// `mlar` applies the nationwide MLAR default when no approval matches;
/// `conservative` sends every miss to the hard default.
pub fn preset(profile: &str) -> (&'static str, EngineConfig) {
    match profile {
        "conservative" => ("conservative", EngineConfig::conservative()),
        // default
        _ => (DEFAULT_PROFILE, EngineConfig::default()),
    }
}

/// Catalog file patterns used when the config names none.
pub fn default_include() -> Vec<String> {
    vec!["**/*.json".to_string(), "**/*.toml".to_string()]
}

pub const DEFAULT_RULES_DIR: &str = "rules";
