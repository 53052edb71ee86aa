pub mod params;
pub mod mask;
pub mod apply;


// 재수출
pub use params::{
    Band, ButterworthParams, FilterKind, FilterParams, GaussianParams, IdealParams,
    DEFAULT_BUTTERWORTH_ORDER,
};
pub use mask::{build_mask, distance_field, FilterMask, BUTTERWORTH_CENTER_EPSILON};
pub use apply::{apply, filter_grid};
