use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait HealthService: Send + Sync + 'static {
    fn get_status(&self) -> impl Future<Output = HealthStatus> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub email: bool,
}
