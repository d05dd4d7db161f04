//! The `compute` use case: decide the clearance for one request.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use firegap_domain::policy::EngineConfig;
use firegap_domain::validate::validate_request;
use firegap_domain::{EngineError, ValidationError};
use firegap_rules::{CandidateQuery, CatalogStore, RuleCatalog, RuleStore};
use firegap_settings::{Overrides, ResolvedConfig};
use firegap_types::{ClearanceRequest, ClearanceResponse};
use time::{Date, OffsetDateTime};

/// Exit code for requests rejected by validation.
pub const EXIT_VALIDATION: i32 = 3;
/// Exit code for everything else that failed.
pub const EXIT_INTERNAL: i32 = 1;

/// Input for the compute use case.
#[derive(Clone, Debug)]
pub struct ComputeInput<'a> {
    /// Directory relative rule paths in the config are resolved against.
    pub config_dir: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// The request as received.
    pub request_json: &'a str,
    pub debug: bool,
}

/// Output from the compute use case.
#[derive(Clone, Debug)]
pub struct ComputeOutput {
    pub response: ClearanceResponse,
    pub resolved_config: ResolvedConfig,
    pub catalog: CatalogSummary,
}

/// Provenance of the rule set a response was computed from.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogSummary {
    pub rules_dir: Utf8PathBuf,
    pub files: usize,
    pub rules: usize,
    pub digest: String,
    pub as_of: Date,
}

/// A rule store plus the engine configuration, ready to answer requests.
pub struct ClearanceService<S> {
    store: S,
    engine: EngineConfig,
    as_of: Date,
}

impl<S: RuleStore> ClearanceService<S> {
    pub fn new(store: S, engine: EngineConfig, as_of: Date) -> Self {
        Self {
            store,
            engine,
            as_of,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate, fetch candidates, and run the engine.
    ///
    /// Validation happens before the store is queried. Engine failures keep
    /// their [`EngineError`] in the error chain for [`exit_code_for_error`].
    pub fn compute_clearance(
        &self,
        request: &ClearanceRequest,
        debug: bool,
    ) -> anyhow::Result<ClearanceResponse> {
        let valid = validate_request(request).map_err(EngineError::from)?;

        let candidates = self
            .store
            .candidates(&CandidateQuery {
                material: valid.material,
                dn: valid.dn,
                as_of: self.as_of,
            })
            .context("query rule store")?;
        tracing::debug!(
            candidates = candidates.len(),
            material = %valid.material,
            dn = valid.dn,
            "candidate rules selected"
        );

        let response = firegap_domain::compute_validated(&valid, &candidates, &self.engine, debug)
            .map_err(EngineError::from)?;
        tracing::debug!(
            min_clearance_mm = response.min_clearance_mm,
            status = %response.status,
            sources = response.sources.len(),
            "clearance decided"
        );
        Ok(response)
    }
}

/// Run the compute use case: parse the request, resolve config, load rules, decide.
pub fn run_compute(input: ComputeInput<'_>) -> anyhow::Result<ComputeOutput> {
    let request = parse_request_json(input.request_json)?;
    // Reject bad requests before any rule file is touched.
    validate_request(&request).map_err(EngineError::from)?;

    let loaded = load_catalog(input.config_dir, input.config_text, input.overrides)?;
    let summary = loaded.summary();
    let service = ClearanceService::new(
        CatalogStore::new(loaded.catalog),
        loaded.resolved.engine.clone(),
        loaded.as_of,
    );

    let response = service.compute_clearance(&request, input.debug)?;
    Ok(ComputeOutput {
        response,
        resolved_config: loaded.resolved,
        catalog: summary,
    })
}

/// JSON syntax and shape errors count as validation failures on `request`.
fn parse_request_json(text: &str) -> anyhow::Result<ClearanceRequest> {
    serde_json::from_str(text).map_err(|e| {
        anyhow::Error::new(EngineError::from(ValidationError::new(
            "request",
            e.to_string(),
        )))
    })
}

/// Map an error to the process exit code: 3 for validation, 1 otherwise.
pub fn exit_code_for_error(err: &anyhow::Error) -> i32 {
    let is_validation = err.chain().any(|cause| {
        cause
            .downcast_ref::<EngineError>()
            .is_some_and(EngineError::is_validation)
            || cause.downcast_ref::<ValidationError>().is_some()
    });
    if is_validation {
        EXIT_VALIDATION
    } else {
        EXIT_INTERNAL
    }
}

pub(crate) struct LoadedCatalog {
    pub resolved: ResolvedConfig,
    pub rules_dir: Utf8PathBuf,
    pub catalog: RuleCatalog,
    pub as_of: Date,
}

impl LoadedCatalog {
    fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            rules_dir: self.rules_dir.clone(),
            files: self.catalog.files.len(),
            rules: self.catalog.rules.len(),
            digest: self.catalog.digest.clone(),
            as_of: self.as_of,
        }
    }
}

pub(crate) fn load_catalog(
    config_dir: &Utf8Path,
    config_text: &str,
    overrides: Overrides,
) -> anyhow::Result<LoadedCatalog> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if config_text.trim().is_empty() {
        firegap_settings::FiregapConfigV1::default()
    } else {
        firegap_settings::parse_config_toml(config_text).context("parse config")?
    };
    let resolved = firegap_settings::resolve_config(cfg, overrides).context("resolve config")?;

    let rules_dir = config_dir.join(&resolved.rules.rules_dir);
    let catalog = firegap_rules::load_catalog_dir(&rules_dir, &resolved.rules.include)
        .with_context(|| format!("load rule catalog from {rules_dir}"))?;
    let as_of = resolved
        .rules
        .as_of
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    Ok(LoadedCatalog {
        resolved,
        rules_dir,
        catalog,
        as_of,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use firegap_types::ClearanceStatus;
    use tempfile::TempDir;

    const REQUEST: &str = r#"{
        "material": "stainless_steel",
        "DN": 200,
        "insulation": {"class": "A2", "thickness_mm": 30, "wrap": ["metal_wrap_Z"]},
        "layout": "parallel",
        "bundle_count": 1,
        "mount": {"clamp_spacing_m": 1.5},
        "context": {"location": "shaft", "jurisdiction": "BY", "building_class": "GK5"}
    }"#;

    const RULES: &str = r#"[{
        "id": "abp-1",
        "approval": {"type": "AbP", "number": "ABP-1"},
        "conditions": [{"kind": "dn_max", "value": 200}],
        "result": {"min_clearance_mm": 0, "status": "zulässig", "notes": "ok"},
        "valid_to": "2030-01-01"
    }]"#;

    fn workspace() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8");
        std::fs::create_dir_all(root.join("rules")).expect("mkdir");
        std::fs::write(root.join("rules/abp.json"), RULES).expect("write rules");
        (tmp, root)
    }

    fn input<'a>(root: &'a Utf8Path, request: &'a str, config: &'a str) -> ComputeInput<'a> {
        ComputeInput {
            config_dir: root,
            config_text: config,
            overrides: Overrides {
                as_of: Some("2026-01-01".to_string()),
                ..Overrides::default()
            },
            request_json: request,
            debug: false,
        }
    }

    #[test]
    fn computes_against_catalog_directory() {
        let (_tmp, root) = workspace();
        let out = run_compute(input(&root, REQUEST, "")).expect("compute");
        assert_eq!(out.response.min_clearance_mm, 0);
        assert_eq!(out.response.status, ClearanceStatus::Permitted);
        assert_eq!(out.catalog.rules, 1);
        assert_eq!(out.resolved_config.profile, "mlar");
    }

    #[test]
    fn conservative_profile_hits_hard_floor() {
        let (_tmp, root) = workspace();
        let request = REQUEST.replace("\"DN\": 200", "\"DN\": 250");
        let out = run_compute(input(&root, &request, "profile = \"conservative\"\n"))
            .expect("compute");
        assert_eq!(out.response.min_clearance_mm, 100);
        assert_eq!(out.response.status, ClearanceStatus::NotPermitted);
    }

    #[test]
    fn invalid_request_maps_to_validation_exit_code() {
        let (_tmp, root) = workspace();
        let request = REQUEST.replace("\"DN\": 200", "\"DN\": 0");
        let err = run_compute(input(&root, &request, "")).expect_err("invalid");
        assert_eq!(exit_code_for_error(&err), EXIT_VALIDATION);
        assert!(err.to_string().contains("`DN`"));
    }

    #[test]
    fn malformed_json_is_a_validation_error_on_request() {
        let (_tmp, root) = workspace();
        let err = run_compute(input(&root, "{", "")).expect_err("syntax");
        assert_eq!(exit_code_for_error(&err), EXIT_VALIDATION);
        assert!(err.to_string().contains("`request`"));
    }

    #[test]
    fn validation_runs_before_rules_are_loaded() {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8");
        let request = REQUEST.replace("stainless_steel", "aluminium");
        let err = run_compute(input(&root, &request, "")).expect_err("invalid");
        assert_eq!(exit_code_for_error(&err), EXIT_VALIDATION);
    }

    #[test]
    fn malformed_rule_is_internal() {
        let (_tmp, root) = workspace();
        std::fs::write(
            root.join("rules/bad.json"),
            r#"[{"id": "bad", "approval": {"type": "AbP", "number": "B"},
                "conditions": [{"kind": "layout_in", "value": []}],
                "result": {"min_clearance_mm": 0, "status": "zulässig"}}]"#,
        )
        .expect("write");
        let err = run_compute(input(&root, REQUEST, "")).expect_err("malformed");
        assert_eq!(exit_code_for_error(&err), EXIT_INTERNAL);
    }

    #[test]
    fn missing_rules_dir_is_internal() {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8");
        let err = run_compute(input(&root, REQUEST, "")).expect_err("no rules");
        assert_eq!(exit_code_for_error(&err), EXIT_INTERNAL);
        assert!(format!("{err:#}").contains("load rule catalog"));
    }
}
