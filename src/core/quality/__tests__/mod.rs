pub mod metrics_test;
pub mod report_test;
