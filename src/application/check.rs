//! Template check use case

use crate::domain::{document, TagRegistry, TagUsage, TrustMode};
use crate::error::{CfnTagsError, Result};
use crate::infrastructure::TemplateSource;
use tracing::warn;

/// Outcome of checking one template
#[derive(Debug)]
pub struct CheckOutcome {
    pub label: String,
    pub result: Result<TagUsage>,
}

impl CheckOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Service that loads templates and reports tag usage
pub struct CheckService {
    registry: TagRegistry,
    mode: TrustMode,
}

impl CheckService {
    pub fn new(registry: TagRegistry, mode: TrustMode) -> Self {
        CheckService { registry, mode }
    }

    /// Check one template: it must load and canonicalize cleanly
    pub fn check_str(&self, text: &str) -> Result<TagUsage> {
        let value = document::load(&self.registry, self.mode, text)?;
        document::to_json(&value)?;
        Ok(TagUsage::collect(&value))
    }

    /// Check every source, continuing past failures
    pub fn execute(&self, sources: &[TemplateSource]) -> Vec<CheckOutcome> {
        sources
            .iter()
            .map(|source| {
                let result = source.read().and_then(|text| self.check_str(&text));
                if let Err(e) = &result {
                    warn!(source = %source.label(), error = %e, "template failed check");
                }
                CheckOutcome {
                    label: source.label(),
                    result,
                }
            })
            .collect()
    }

    /// Sum the usage of passing outcomes, or return the first failure
    pub fn summarize(outcomes: Vec<CheckOutcome>) -> Result<TagUsage> {
        let mut total = TagUsage::default();
        let mut first_error: Option<CfnTagsError> = None;
        for outcome in outcomes {
            match outcome.result {
                Ok(usage) => total.merge(&usage),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(total),
        }
    }
}
