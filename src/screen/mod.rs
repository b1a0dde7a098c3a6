pub(crate) mod config;
pub(crate) mod notifier;
pub(crate) mod signin;
