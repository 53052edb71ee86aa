//! 필터링/압축 효과 종합 보고서

use std::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::metrics::{frequency_energy, mse, psnr_from_mse, simplified_similarity, FrequencyEnergy};
use super::stats::{describe, Stats};
use crate::core::codec::CompressionReport;
use crate::core::error::Result;
use crate::core::types::GrayscaleGrid;

/// PSNR 해석 등급
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PsnrGrade {
    Excellent,  // > 40 dB
    Good,       // > 30 dB
    Acceptable, // > 20 dB
    Poor,
}

impl PsnrGrade {
    pub fn from_psnr(psnr: f64) -> Self {
        if psnr > 40.0 {
            PsnrGrade::Excellent
        } else if psnr > 30.0 {
            PsnrGrade::Good
        } else if psnr > 20.0 {
            PsnrGrade::Acceptable
        } else {
            PsnrGrade::Poor
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PsnrGrade::Excellent => "excellent quality, minimal changes",
            PsnrGrade::Good => "good quality, moderate changes",
            PsnrGrade::Acceptable => "acceptable quality, noticeable changes",
            PsnrGrade::Poor => "low quality, significant changes",
        }
    }
}

/// 단순 SSIM 해석 등급
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SsimGrade {
    VerySimilar,       // > 0.95
    Similar,           // > 0.85
    ModeratelySimilar, // > 0.70
    Different,
}

impl SsimGrade {
    pub fn from_ssim(ssim: f64) -> Self {
        if ssim > 0.95 {
            SsimGrade::VerySimilar
        } else if ssim > 0.85 {
            SsimGrade::Similar
        } else if ssim > 0.70 {
            SsimGrade::ModeratelySimilar
        } else {
            SsimGrade::Different
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SsimGrade::VerySimilar => "structurally very similar",
            SsimGrade::Similar => "structurally similar",
            SsimGrade::ModeratelySimilar => "moderately similar",
            SsimGrade::Different => "significant structural differences",
        }
    }
}

/// 압축 전후 오차
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionStats {
    pub mse: f64,
    pub psnr: f64,
    pub compression_ratio: f64,
}

impl CompressionStats {
    pub fn measure(original: &GrayscaleGrid, report: &CompressionReport) -> Result<Self> {
        let mse = mse(original, &report.reconstructed)?;
        Ok(Self {
            mse,
            psnr: psnr_from_mse(mse),
            compression_ratio: report.compression_ratio,
        })
    }
}

/// 원본/파생 그리드 비교 보고서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub original: Stats,
    pub derived: Stats,
    pub mse: f64,
    pub psnr: f64,
    pub ssim: f64,
    pub frequency: FrequencyEnergy,
    pub psnr_grade: PsnrGrade,
    pub ssim_grade: SsimGrade,
}

impl QualityReport {
    pub fn build(original: &GrayscaleGrid, derived: &GrayscaleGrid) -> Result<Self> {
        let mse = mse(original, derived)?;
        let psnr = psnr_from_mse(mse);
        if psnr.is_infinite() {
            warn!("grids are identical, PSNR is infinite");
        }
        let ssim = simplified_similarity(original, derived)?;
        let frequency = frequency_energy(original, derived)?;
        info!("quality: mse={:.4} psnr={:.2} ssim={:.4} energy={:.2}%", mse, psnr, ssim, frequency.retained_percent);

        Ok(Self {
            original: describe(original),
            derived: describe(derived),
            mse,
            psnr,
            ssim,
            frequency,
            psnr_grade: PsnrGrade::from_psnr(psnr),
            ssim_grade: SsimGrade::from_ssim(ssim),
        })
    }
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        let thin = "-".repeat(60);
        writeln!(f, "{rule}")?;
        writeln!(f, "FILTERING EFFECT ANALYSIS")?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(f, "COMPARATIVE STATISTICS:")?;
        writeln!(f, "{thin}")?;
        writeln!(f, "{:<20} {:<18} {:<18}", "Metric", "Original", "Derived")?;
        writeln!(f, "{thin}")?;
        let rows = [
            ("Mean", self.original.mean, self.derived.mean),
            ("Std. deviation", self.original.std, self.derived.std),
            ("Minimum", self.original.min, self.derived.min),
            ("Maximum", self.original.max, self.derived.max),
            ("Variance", self.original.variance, self.derived.variance),
            ("Median", self.original.median, self.derived.median),
        ];
        for (name, a, b) in rows {
            writeln!(f, "{:<20} {:<18.2} {:<18.2}", name, a, b)?;
        }
        writeln!(f)?;
        writeln!(f, "SIMILARITY METRICS:")?;
        writeln!(f, "{thin}")?;
        writeln!(f, "MSE:  {:.4}", self.mse)?;
        writeln!(f, "PSNR: {:.2} dB", self.psnr)?;
        writeln!(f, "SSIM (single window): {:.4}", self.ssim)?;
        writeln!(f)?;
        writeln!(f, "FREQUENCY ANALYSIS:")?;
        writeln!(f, "{thin}")?;
        writeln!(f, "Original energy: {:.2e}", self.frequency.original)?;
        writeln!(f, "Derived energy:  {:.2e}", self.frequency.derived)?;
        writeln!(f, "Retained energy: {:.2}%", self.frequency.retained_percent)?;
        writeln!(f)?;
        writeln!(f, "INTERPRETATION:")?;
        writeln!(f, "{thin}")?;
        writeln!(f, "- PSNR: {}", self.psnr_grade.description())?;
        writeln!(f, "- SSIM: {}", self.ssim_grade.description())?;
        write!(f, "{rule}")
    }
}
