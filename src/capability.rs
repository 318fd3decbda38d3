// In: src/capability.rs

//! Hardware capability probe and strategy gating.
//!
//! The probe runs at most once per process; the result is cached in a
//! `OnceLock` and is read-only afterwards. Vector kernels consult it before
//! every call so that a kernel whose instruction set is missing degrades to the
//! sequential field scan instead of faulting.

use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use crate::compare::Strategy;

/// Instruction sets the vector kernels can use.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuFeatures {
    pub sse2: bool,
    pub ssse3: bool,
    pub avx2: bool,
    pub neon: bool,
}

/// What a strategy needs from the host before its vector path may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Plain integer code; runs everywhere.
    None,
    /// Any 128-bit byte-compare unit (SSE2 or NEON).
    Vector128,
    /// A 128-bit byte shuffle (SSSE3 or NEON).
    Shuffle128,
    /// 256-bit byte compare and lane permute (AVX2).
    Vector256,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Requirement::None => "no special instructions",
            Requirement::Vector128 => "SSE2 or NEON",
            Requirement::Shuffle128 => "SSSE3 or NEON",
            Requirement::Vector256 => "AVX2",
        };
        f.write_str(text)
    }
}

impl CpuFeatures {
    /// Detects CPU capabilities at runtime.
    #[cfg(target_arch = "x86_64")]
    pub fn detect() -> Self {
        Self {
            sse2: std::arch::is_x86_feature_detected!("sse2"),
            ssse3: std::arch::is_x86_feature_detected!("ssse3"),
            avx2: std::arch::is_x86_feature_detected!("avx2"),
            neon: false,
        }
    }

    /// Detects CPU capabilities at runtime.
    ///
    /// The NEON kernels assume little-endian lane order, so big-endian
    /// aarch64 reports no vector support.
    #[cfg(target_arch = "aarch64")]
    pub fn detect() -> Self {
        Self {
            sse2: false,
            ssse3: false,
            avx2: false,
            neon: cfg!(target_endian = "little")
                && std::arch::is_aarch64_feature_detected!("neon"),
        }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    pub fn detect() -> Self {
        Self::default()
    }

    pub fn meets(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::None => true,
            Requirement::Vector128 => self.sse2 || self.neon,
            Requirement::Shuffle128 => self.ssse3 || self.neon,
            Requirement::Vector256 => self.avx2,
        }
    }

    /// Features present in both sets. Restricting the host set this way can
    /// only disable kernels, never enable one the host lacks.
    pub fn intersection(&self, other: &CpuFeatures) -> CpuFeatures {
        CpuFeatures {
            sse2: self.sse2 && other.sse2,
            ssse3: self.ssse3 && other.ssse3,
            avx2: self.avx2 && other.avx2,
            neon: self.neon && other.neon,
        }
    }

    /// Whether `strategy` runs its own kernel (rather than the fallback) here.
    pub fn supports(&self, strategy: Strategy) -> bool {
        self.meets(strategy.requirement())
    }
}

/// The process-wide capability set. The CPUID probe runs at most once.
pub fn features() -> &'static CpuFeatures {
    static FEATURES: OnceLock<CpuFeatures> = OnceLock::new();
    FEATURES.get_or_init(|| {
        let detected = CpuFeatures::detect();
        log::info!(
            "CPU capability probe: sse2={} ssse3={} avx2={} neon={}",
            detected.sse2,
            detected.ssse3,
            detected.avx2,
            detected.neon
        );
        log_metric!(
            "event" = "capability_probe",
            "sse2" = detected.sse2,
            "ssse3" = detected.ssse3,
            "avx2" = detected.avx2,
            "neon" = detected.neon
        );
        detected
    })
}
