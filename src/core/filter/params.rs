//! 필터 종류별 파라미터 (검증된 생성자)

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SpectralError};

/// Butterworth 필터의 기본 차수
pub const DEFAULT_BUTTERWORTH_ORDER: u32 = 2;

/// 통과 대역
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    LowPass,
    HighPass,
}

/// 필터 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Ideal,
    Gaussian,
    Butterworth,
}

/// 이상 필터: 반경 안/밖을 정확히 {0,1}로 자른다
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealParams {
    radius: f64,
    band: Band,
}

impl IdealParams {
    /// 반경 0은 DC 셀 하나만 남기는 유효한 설정이다
    pub fn new(radius: f64, band: Band) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(SpectralError::invalid("radius", format!("must be finite and >= 0, got {radius}")));
        }
        Ok(Self { radius, band })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn band(&self) -> Band {
        self.band
    }
}

/// 가우시안 필터
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaussianParams {
    sigma: f64,
    band: Band,
}

impl GaussianParams {
    pub fn new(sigma: f64, band: Band) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(SpectralError::invalid("sigma", format!("must be finite and > 0, got {sigma}")));
        }
        Ok(Self { sigma, band })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn band(&self) -> Band {
        self.band
    }
}

/// Butterworth 필터. 차수가 높을수록 전이 구간이 가파르다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ButterworthParams {
    radius: f64,
    order: u32,
    band: Band,
}

impl ButterworthParams {
    pub fn new(radius: f64, order: u32, band: Band) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SpectralError::invalid("radius", format!("must be finite and > 0, got {radius}")));
        }
        if order < 1 {
            return Err(SpectralError::invalid("order", "must be >= 1"));
        }
        Ok(Self { radius, order, band })
    }

    pub fn with_default_order(radius: f64, band: Band) -> Result<Self> {
        Self::new(radius, DEFAULT_BUTTERWORTH_ORDER, band)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn band(&self) -> Band {
        self.band
    }
}

/// 필터 종류 × 대역에 대한 태그 열거형
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum FilterParams {
    Ideal(IdealParams),
    Gaussian(GaussianParams),
    Butterworth(ButterworthParams),
}

impl FilterParams {
    pub fn ideal(radius: f64, band: Band) -> Result<Self> {
        IdealParams::new(radius, band).map(FilterParams::Ideal)
    }

    pub fn gaussian(sigma: f64, band: Band) -> Result<Self> {
        GaussianParams::new(sigma, band).map(FilterParams::Gaussian)
    }

    pub fn butterworth(radius: f64, order: u32, band: Band) -> Result<Self> {
        ButterworthParams::new(radius, order, band).map(FilterParams::Butterworth)
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            FilterParams::Ideal(_) => FilterKind::Ideal,
            FilterParams::Gaussian(_) => FilterKind::Gaussian,
            FilterParams::Butterworth(_) => FilterKind::Butterworth,
        }
    }

    pub fn band(&self) -> Band {
        match self {
            FilterParams::Ideal(p) => p.band(),
            FilterParams::Gaussian(p) => p.band(),
            FilterParams::Butterworth(p) => p.band(),
        }
    }
}
