pub mod a001_metric;
pub mod a002_tenant;
