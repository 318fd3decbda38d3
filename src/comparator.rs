// In: src/comparator.rs

//! The `Comparator`: one resolved strategy, ready to use.
//!
//! Resolution happens once, at construction. A requested strategy whose
//! instruction set the host lacks either falls back to the sequential field
//! scan (with a warning) or is rejected, depending on configuration. Only an
//! unset strategy picks the host's preferred one.
//! After construction a `Comparator` is an immutable `Copy` value and may be
//! shared freely across threads.

use std::cmp::Ordering;

use crate::capability::{self, CpuFeatures};
use crate::compare::Strategy;
use crate::config::GuidOrderConfig;
use crate::error::GuidOrderError;
use crate::layout::Identifier;
use crate::selftest::{self, SelfTestReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparator {
    strategy: Strategy,
}

impl Comparator {
    /// Wraps `strategy` as-is. Vector strategies still degrade to the field
    /// scan per call if the host lacks their instruction set.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// The host's preferred strategy, without a self-test.
    pub fn auto() -> Self {
        Self::new(Strategy::best_available())
    }

    /// Resolves the configured strategy against the host and, if enabled,
    /// runs the startup self-test for it.
    pub fn from_config(config: &GuidOrderConfig) -> Result<Self, GuidOrderError> {
        let strategy = resolve_strategy(config, capability::features())?;
        let comparator = Self::new(strategy);

        if config.run_self_test {
            comparator.self_test(config.exhaustive_self_test)?;
        }

        log::info!("Comparator ready: strategy '{}'", strategy);
        log_metric!(
            "event" = "strategy_resolved",
            "requested" = config
                .strategy
                .map(|s| s.name())
                .unwrap_or("auto"),
            "strategy" = strategy.name()
        );
        Ok(comparator)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Runs the self-test for this comparator's strategy.
    pub fn self_test(&self, exhaustive: bool) -> Result<SelfTestReport, GuidOrderError> {
        selftest::run(&[self.strategy], exhaustive)
    }

    #[inline]
    pub fn greater_than(&self, x: &Identifier, y: &Identifier) -> bool {
        self.strategy.greater_than(x, y)
    }

    #[inline]
    pub fn compare(&self, x: &Identifier, y: &Identifier) -> Ordering {
        self.strategy.compare(x, y)
    }

    #[inline]
    pub fn compare_sign(&self, x: &Identifier, y: &Identifier) -> i32 {
        self.strategy.compare_sign(x, y)
    }

    /// Sorts `ids` into canonical order.
    pub fn sort(&self, ids: &mut [Identifier]) {
        ids.sort_unstable_by(|x, y| self.compare(x, y));
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::auto()
    }
}

fn resolve_strategy(
    config: &GuidOrderConfig,
    host: &CpuFeatures,
) -> Result<Strategy, GuidOrderError> {
    let requested = match config.strategy {
        Some(strategy) => strategy,
        None => return Ok(Strategy::best_available()),
    };

    if host.supports(requested) {
        return Ok(requested);
    }

    if config.allow_fallback {
        let fallback = Strategy::FieldScan;
        log::warn!(
            "Strategy '{}' requires {}; falling back to '{}'",
            requested,
            requested.requirement(),
            fallback
        );
        return Ok(fallback);
    }

    Err(GuidOrderError::UnsupportedStrategy {
        strategy: requested,
        required: requested.requirement(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::corpus::*;

    #[test]
    fn test_default_config_resolves_to_best_available() {
        let comparator = Comparator::from_config(&GuidOrderConfig::default()).unwrap();
        assert_eq!(comparator.strategy(), Strategy::best_available());
        assert_eq!(comparator, Comparator::default());
    }

    #[test]
    fn test_supported_strategy_is_kept() {
        for strategy in Strategy::ALL.into_iter().filter(|s| s.is_supported()) {
            let config = GuidOrderConfig::default().with_strategy(strategy);
            assert_eq!(Comparator::from_config(&config).unwrap().strategy(), strategy);
        }
    }

    #[test]
    fn test_unsupported_strategy_falls_back_or_fails() {
        for strategy in Strategy::ALL.into_iter().filter(|s| !s.is_supported()) {
            let lenient = GuidOrderConfig::default().with_strategy(strategy);
            assert_eq!(
                Comparator::from_config(&lenient).unwrap().strategy(),
                Strategy::FieldScan
            );

            let strict = GuidOrderConfig {
                allow_fallback: false,
                ..lenient
            };
            assert!(matches!(
                Comparator::from_config(&strict),
                Err(GuidOrderError::UnsupportedStrategy { strategy: s, .. }) if s == strategy
            ));
        }
    }

    #[test]
    fn test_featureless_host_falls_back_to_field_scan() {
        let none = CpuFeatures::default();
        for strategy in Strategy::ALL {
            let lenient = GuidOrderConfig::default().with_strategy(strategy);
            let resolved = resolve_strategy(&lenient, &none).unwrap();
            if strategy.requirement() == capability::Requirement::None {
                assert_eq!(resolved, strategy);
            } else {
                assert_eq!(resolved, Strategy::FieldScan, "{strategy}");

                let strict = GuidOrderConfig {
                    allow_fallback: false,
                    ..lenient
                };
                assert!(matches!(
                    resolve_strategy(&strict, &none),
                    Err(GuidOrderError::UnsupportedStrategy { required, .. })
                        if required == strategy.requirement()
                ));
            }
        }
    }

    #[test]
    fn test_sort_matches_canonical_bytes() {
        for strategy in Strategy::ALL {
            let comparator = Comparator::new(strategy);
            let mut ids = REFERENCE_IDENTIFIERS.to_vec();
            comparator.sort(&mut ids);

            let mut expected = REFERENCE_IDENTIFIERS.to_vec();
            expected.sort_by_key(|id| id.to_canonical_bytes());
            assert_eq!(ids, expected, "{strategy}");
            assert_eq!(ids.first(), Some(&Identifier::MIN));
            assert_eq!(ids.last(), Some(&Identifier::MAX));
        }
    }

    #[test]
    fn test_delegates_to_strategy() {
        let comparator = Comparator::new(Strategy::TailWord);
        assert!(comparator.greater_than(&BASE_A2, &BASE_A));
        assert_eq!(comparator.compare(&BASE_A, &BASE_B), Ordering::Less);
        assert_eq!(comparator.compare_sign(&BASE_B7, &BASE_B7), 0);
    }
}
