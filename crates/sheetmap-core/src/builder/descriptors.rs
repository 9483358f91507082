//! Validator and convertor lists

use sheetmap_meta::{ConvertorDescriptor, ValidatorDescriptor};

use crate::tree::{ConvertorConfig, ValidatorConfig};

/// Map validator descriptors to configs, preserving declaration order.
pub fn build_validators(descriptors: &[ValidatorDescriptor]) -> Vec<ValidatorConfig> {
    descriptors.iter().map(ValidatorConfig::from).collect()
}

/// Map convertor descriptors to configs, preserving declaration order.
pub fn build_convertors(descriptors: &[ConvertorDescriptor]) -> Vec<ConvertorConfig> {
    descriptors.iter().map(ConvertorConfig::from).collect()
}
