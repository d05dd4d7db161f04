//! Stable identifiers for schemas, clause kinds, and fixed message texts.
//!
//! Clause kinds are snake_case and double as the `kind` tag of a condition clause.

// Schemas
pub const SCHEMA_RULES_V1: &str = "firegap.rules.v1";
pub const SCHEMA_CONFIG_V1: &str = "firegap.config.v1";

// Rule scope
pub const SCOPE_PIPE_TO_PIPE: &str = "pipe_to_pipe";

// Clause kinds
pub const CLAUSE_MATERIAL_IN: &str = "material_in";
pub const CLAUSE_DN_MAX: &str = "dn_max";
pub const CLAUSE_INSULATION_CLASS_IN: &str = "insulation_class_in";
pub const CLAUSE_LAYOUT_IN: &str = "layout_in";
pub const CLAUSE_BUNDLE_COUNT_MAX: &str = "bundle_count_max";
pub const CLAUSE_CLAMP_SPACING_M_MAX: &str = "clamp_spacing_m_max";
pub const CLAUSE_REQUIRES_WRAP: &str = "requires_wrap";

// Statuses (German literals are part of the wire contract)
pub const STATUS_PERMITTED: &str = "zulässig";
pub const STATUS_CONDITIONAL: &str = "bedingt zulässig";
pub const STATUS_NOT_PERMITTED: &str = "nicht zulässig";
pub const STATUS_DEFAULT: &str = "default";

// Source types
pub const SOURCE_ABP: &str = "AbP";
pub const SOURCE_ABZ: &str = "AbZ";
pub const SOURCE_ETA: &str = "ETA";
pub const SOURCE_MLAR: &str = "MLAR";

// Must-have requirements recognised when reporting unmet conditions.
pub const WRAP_REQUIREMENT_PREFIX: &str = "metal_wrap_";

// Hard conservative default
pub const UNMET_NO_APPLICABLE_RULE: &str = "Keine anwendbare Regel gefunden";
