pub(crate) mod builder;
pub(crate) mod mapper;
pub(crate) mod metrics;
