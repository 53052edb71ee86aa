//! 주파수 영역 마스크 필터링

use log::{debug, info};

use super::mask::{build_mask, FilterMask};
use super::params::FilterParams;
use crate::core::error::Result;
use crate::core::spectrum::SpectrumTransform;
use crate::core::types::GrayscaleGrid;

/// 정변환 → 중앙 정렬 → 마스크 곱 → 정렬 해제 → 역변환
///
/// 반환되는 그리드는 역변환 결과의 크기이며 클램핑하지 않는다.
/// 마스크는 외부 시각화를 위해 그대로 돌려준다.
pub fn apply(grid: &GrayscaleGrid, mask: FilterMask) -> Result<(GrayscaleGrid, FilterMask)> {
    let mut transform = SpectrumTransform::new();
    let spectrum = transform.forward(grid);
    let centered = transform.center_for(grid, &spectrum)?;
    let filtered = centered.scaled_by(mask.as_array())?;
    let restored = transform.uncenter_for(grid, &filtered)?;
    let output = transform.inverse(&restored);
    debug!("applied mask {:?} to {:?}", mask.shape(), grid.shape());
    Ok((output, mask))
}

/// 그리드 형태에 맞는 마스크를 만들고 바로 적용
pub fn filter_grid(grid: &GrayscaleGrid, params: &FilterParams) -> Result<(GrayscaleGrid, FilterMask)> {
    let (height, width) = grid.shape();
    let mask = build_mask(height, width, params)?;
    info!("{:?} {:?} filter on {}x{}", params.kind(), params.band(), height, width);
    apply(grid, mask)
}
