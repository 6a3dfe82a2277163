use super::{TickRelayConfig, crate_version};

#[test]
fn version_matches_package_metadata() {
  assert_eq!(crate_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn facade_exposes_relay_configuration() {
  let config = TickRelayConfig::default();
  assert_eq!(config.task_name(), TickRelayConfig::DEFAULT_TASK_NAME);
}
