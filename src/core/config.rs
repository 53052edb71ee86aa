//! 경계에서 검증되는 구성 값

use serde::{Deserialize, Serialize};

use crate::core::codec::RetentionPattern;
use crate::core::error::{Result, SpectralError};
use crate::core::filter::{Band, FilterKind, FilterParams, DEFAULT_BUTTERWORTH_ORDER};

/// 블록 코덱 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// 타일 한 변의 크기
    pub block_size: usize,
    /// 크기 임계값 압축에서 유지할 계수 비율 (0, 100]
    pub keep_percent: f64,
    /// 주파수 유지 압축에서 블록당 유지할 계수 수 [1, block_size²]
    pub coefficients_per_block: usize,
    /// 블록당 계수 선택 방식
    pub retention: RetentionPattern,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            block_size: 8,
            keep_percent: 50.0,
            coefficients_per_block: 15,
            retention: RetentionPattern::ZigZag,
        }
    }
}

impl CodecConfig {
    pub fn validate(&self) -> Result<()> {
        validate_block_size(self.block_size)?;
        validate_keep_percent(self.keep_percent)?;
        validate_coefficients_per_block(self.coefficients_per_block, self.block_size)
    }
}

pub(crate) fn validate_block_size(block_size: usize) -> Result<()> {
    if block_size == 0 {
        return Err(SpectralError::invalid("block_size", "must be > 0"));
    }
    Ok(())
}

pub(crate) fn validate_keep_percent(keep_percent: f64) -> Result<()> {
    if !(keep_percent > 0.0 && keep_percent <= 100.0) {
        return Err(SpectralError::invalid(
            "keep_percent",
            format!("must be in (0, 100], got {keep_percent}"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_coefficients_per_block(n: usize, block_size: usize) -> Result<()> {
    let max = block_size * block_size;
    if n < 1 || n > max {
        return Err(SpectralError::invalid(
            "coefficients_per_block",
            format!("must be in [1, {max}], got {n}"),
        ));
    }
    Ok(())
}

/// 직렬화 가능한 필터 설명. `to_params`가 검증 팩토리 역할을 한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub kind: FilterKind,
    pub band: Band,
    /// 이상/Butterworth 차단 반경
    pub radius: f64,
    /// 가우시안 표준편차
    pub sigma: f64,
    /// Butterworth 차수
    pub order: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            kind: FilterKind::Gaussian,
            band: Band::LowPass,
            radius: 30.0,
            sigma: 30.0,
            order: DEFAULT_BUTTERWORTH_ORDER,
        }
    }
}

impl FilterConfig {
    pub fn to_params(&self) -> Result<FilterParams> {
        match self.kind {
            FilterKind::Ideal => FilterParams::ideal(self.radius, self.band),
            FilterKind::Gaussian => FilterParams::gaussian(self.sigma, self.band),
            FilterKind::Butterworth => FilterParams::butterworth(self.radius, self.order, self.band),
        }
    }
}
