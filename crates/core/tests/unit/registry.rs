//! # Registry Tests

use std::sync::Arc;

use bitenum_core::registry::RegistryBuilder;
use bitenum_core::{ConfigError, EnumType, IntegerWidth, Registry};

use crate::common::fixtures::{EnumSimpleFlags, EnumVanilla, descriptor, v};
use crate::common::logging;
use crate::common::mocks::{MockProvider, StaticProvider};

#[test]
fn test_register_and_lookup() {
    let registry = Registry::builder()
        .register(EnumVanilla::descriptor().clone())
        .unwrap()
        .register(EnumSimpleFlags::descriptor().clone())
        .unwrap()
        .build();

    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
    assert!(registry.get("EnumVanilla").unwrap().is_valid(v(4)));
    assert!(registry.get("Missing").is_none());
    assert_eq!(
        registry.iter().map(|d| d.name()).collect::<Vec<_>>(),
        vec!["EnumSimpleFlags", "EnumVanilla"]
    );
}

#[test]
fn test_duplicate_type_rejected() {
    let err = RegistryBuilder::new()
        .register(EnumVanilla::descriptor().clone())
        .unwrap()
        .register(EnumVanilla::descriptor().clone())
        .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateType(name) if name == "EnumVanilla"));
}

#[test]
fn test_require_unknown_type() {
    let registry = Registry::default();
    assert!(registry.is_empty());
    assert!(matches!(
        registry.require("Nope"),
        Err(ConfigError::UnknownType(name)) if name == "Nope"
    ));
}

#[test]
fn test_from_provider_calls_provider_once() {
    let mut provider = MockProvider::new();
    let _ = provider.expect_descriptors().times(1).returning(|| {
        Ok(vec![descriptor(
            "Mode",
            IntegerWidth::U8,
            false,
            &[("Off", 0), ("On", 1)],
        )])
    });

    let registry = Registry::from_provider(&provider).unwrap();
    let mode = registry.require("Mode").unwrap();
    assert_eq!(mode.get_name(v(1)).unwrap(), "On");
}

#[test]
fn test_provider_failure_propagates() {
    let mut provider = MockProvider::new();
    let _ = provider
        .expect_descriptors()
        .returning(|| Err(ConfigError::UnknownType("Broken".to_owned())));
    assert!(matches!(
        Registry::from_provider(&provider),
        Err(ConfigError::UnknownType(_))
    ));
}

#[test]
fn test_register_all_detects_duplicates_across_providers() {
    let first = StaticProvider::new(vec![EnumVanilla::descriptor().clone()]);
    let second = StaticProvider::new(vec![EnumVanilla::descriptor().clone()]);
    let err = RegistryBuilder::new()
        .register_all(&first)
        .unwrap()
        .register_all(&second)
        .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateType(_)));
}

#[test]
fn test_descriptors_are_shared() {
    let registry = Registry::from_provider(&StaticProvider::new(vec![
        EnumVanilla::descriptor().clone(),
    ]))
    .unwrap();
    let a = Arc::clone(registry.require("EnumVanilla").unwrap());
    let b = Arc::clone(registry.get("EnumVanilla").unwrap());
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_global_install_once() {
    logging::init();
    let registry = Registry::from_provider(&StaticProvider::new(vec![
        EnumSimpleFlags::descriptor().clone(),
    ]))
    .unwrap();

    // Only this test installs; a second install must fail and keep the first.
    let installed = registry.install().unwrap();
    assert!(installed.get("EnumSimpleFlags").is_some());
    assert!(Registry::global().is_some());
    assert!(matches!(
        Registry::default().install(),
        Err(ConfigError::AlreadyInstalled)
    ));
    assert_eq!(Registry::global().unwrap().len(), 1);
}
