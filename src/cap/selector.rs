//! Resolves CAP types to executors.

use crate::cap::error::{CapError, CapResult};
use crate::cap::executor::CapExecutor;
use crate::cap::rules::{rule_for, CAP_RULES};
use crate::models::CapType;

/// Selects the executor for a CAP type from the statically wired rule table.
pub struct CapExecutorSelector;

impl CapExecutorSelector {
    /// Executor for `cap_type`.
    ///
    /// # Errors
    ///
    /// Returns [`CapError::UnsupportedCapType`] when no rule is wired for the
    /// type.
    pub fn get_executor(cap_type: CapType) -> CapResult<CapExecutor> {
        let rule = rule_for(cap_type).ok_or_else(|| unsupported(cap_type.as_str()))?;
        tracing::debug!("Selected executor for {}", cap_type);
        Ok(CapExecutor::new(rule))
    }

    /// True when an executor is wired for `cap_type`.
    #[must_use]
    pub fn is_supported(cap_type: CapType) -> bool {
        rule_for(cap_type).is_some()
    }

    /// Parses a user-supplied name (canonical or hyphenated) and resolves it.
    ///
    /// # Errors
    ///
    /// Returns [`CapError::UnsupportedCapType`] for unknown names.
    pub fn resolve(name: &str) -> CapResult<CapExecutor> {
        let cap_type: CapType = name.parse().map_err(|_| unsupported(name))?;
        Self::get_executor(cap_type)
    }

    /// Every CAP type with a wired executor.
    #[must_use]
    pub fn supported_cap_types() -> Vec<CapType> {
        CAP_RULES.iter().map(|rule| rule.cap_type).collect()
    }
}

fn unsupported(requested: &str) -> CapError {
    CapError::UnsupportedCapType {
        requested: requested.to_string(),
        supported: CAP_RULES
            .iter()
            .map(|rule| rule.cap_type.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cap_type_is_supported() {
        for cap_type in CapType::ALL {
            assert!(CapExecutorSelector::is_supported(cap_type));
            let executor = CapExecutorSelector::get_executor(cap_type).unwrap();
            assert_eq!(executor.cap_type(), cap_type);
        }
        assert_eq!(CapExecutorSelector::supported_cap_types().len(), 11);
    }

    #[test]
    fn test_resolve_accepts_both_spellings() {
        let canonical = CapExecutorSelector::resolve("MIRRORED_SWAPPED").unwrap();
        let hyphenated = CapExecutorSelector::resolve("mirrored-swapped").unwrap();
        assert_eq!(canonical, hyphenated);
        assert_eq!(canonical.cap_type(), CapType::MirroredSwapped);
    }

    #[test]
    fn test_resolve_unknown_lists_supported() {
        let err = CapExecutorSelector::resolve("ROTATED_SWAPPED_COMPLEMENTARY").unwrap_err();
        match &err {
            CapError::UnsupportedCapType {
                requested,
                supported,
            } => {
                assert_eq!(requested, "ROTATED_SWAPPED_COMPLEMENTARY");
                assert!(supported.contains(&"STRICT_ROTATED".to_string()));
                assert_eq!(supported.len(), 11);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("STRICT_MIRRORED"));
    }
}
