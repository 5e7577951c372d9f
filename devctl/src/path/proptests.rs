//! Property-based tests for path resolution.

use super::normalize_prefix;
use super::Pather;
use crate::env::{MapEnv, CACHE_HOME_VAR, CONFIG_HOME_ROOT_VAR, XDG_CONFIG_HOME_VAR};
use crate::path::providers::FixedHomeDir;
use crate::system::{Os, StaticRuntimeInfo};
use proptest::prelude::*;
use std::path::PathBuf;

fn prefix_strategy() -> impl Strategy<Value = String> {
    "\\.{0,3}[a-zA-Z_][a-zA-Z0-9_-]{0,15}"
}

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..5).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn linux_pather(prefix: &str, env: MapEnv) -> Pather {
    Pather::builder()
        .with_app_prefix(prefix)
        .with_environment(env)
        .with_runtime_info(StaticRuntimeInfo::os(Os::Linux))
        .with_home_lookup(FixedHomeDir(Some(PathBuf::from("/home/u"))))
        .build()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn prefix_normalization_idempotent(raw in "[ -~]{0,20}") {
        let once = normalize_prefix(&raw);
        prop_assert_eq!(normalize_prefix(&once), once.clone());
        prop_assert!(once.starts_with('.'));
        prop_assert!(!once.starts_with(".."));
    }

    // Leading dots and case never change the normalized prefix
    #[test]
    fn prefix_ignores_leading_dots_and_case(name in "[a-z_][a-z0-9_]{0,10}", dots in 0usize..4) {
        let decorated = format!("{}{}", ".".repeat(dots), name.to_uppercase());
        prop_assert_eq!(normalize_prefix(&decorated), format!(".{name}"));
    }

    // config(a, b) == config().join(a).join(b)
    #[test]
    fn sub_path_joining_is_associative(
        prefix in prefix_strategy(),
        parts in prop::collection::vec(component_strategy(), 0..5),
    ) {
        let pather = linux_pather(&prefix, MapEnv::new());
        let elems: Vec<&str> = parts.iter().map(String::as_str).collect();
        let expected = parts.iter().fold(pather.config(&[]).unwrap(), |p, e| p.join(e));
        prop_assert_eq!(pather.config(&elems).unwrap(), expected);
    }

    // DEVCTL_CONFIG_HOME always wins over XDG_CONFIG_HOME
    #[test]
    fn config_home_env_beats_xdg(devctl in absolute_path_strategy(), xdg in absolute_path_strategy()) {
        let env = MapEnv::new()
            .with(CONFIG_HOME_ROOT_VAR, devctl.clone())
            .with(XDG_CONFIG_HOME_VAR, xdg);
        let pather = linux_pather("devctl", env);
        prop_assert_eq!(pather.config_root(&[]).unwrap(), PathBuf::from(devctl));
    }

    // The cache namespace sits right before the requested elements
    #[test]
    fn cache_namespace_precedes_elements(
        prefix in prefix_strategy(),
        base in absolute_path_strategy(),
        parts in prop::collection::vec(component_strategy(), 0..4),
    ) {
        let pather = linux_pather(&prefix, MapEnv::new().with(CACHE_HOME_VAR, base.clone()));
        let elems: Vec<&str> = parts.iter().map(String::as_str).collect();
        let namespace = format!("io.alexheld{}", normalize_prefix(&prefix));
        let expected = parts
            .iter()
            .fold(PathBuf::from(base).join(namespace), |p, e| p.join(e));
        prop_assert_eq!(pather.cache(&elems), expected);
    }
}
