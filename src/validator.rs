//! Parameter validation for raw encoder inputs

use crate::core::{Address, Batch2Policy, FunctionCode};
use crate::error::Result;

/// Validated encoder parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    /// Pager address
    pub address: Address,
    /// Direction or time sync function
    pub function: FunctionCode,
    /// Batch 2 disposition
    pub batch2_policy: Batch2Policy,
}

/// Validator for raw integer parameters
///
/// Checks run in a fixed order and the first failure is reported.
pub struct ParameterValidator;

impl ParameterValidator {
    /// Validate the address (1 to 0x1FFFFF)
    pub fn validate_address(address: u32) -> Result<Address> {
        Address::new(address)
    }

    /// Validate the function code (0b11, 0b01 or 0b00)
    pub fn validate_function_code(code: u8) -> Result<FunctionCode> {
        FunctionCode::try_from(code)
    }

    /// Validate the batch 2 policy (0, 1 or 2)
    pub fn validate_batch2_policy(policy: u8) -> Result<Batch2Policy> {
        Batch2Policy::try_from(policy)
    }

    /// Validate all parameters: address, then function code, then policy
    pub fn validate(address: u32, function_code: u8, batch2_policy: u8) -> Result<Parameters> {
        Ok(Parameters {
            address: Self::validate_address(address)?,
            function: Self::validate_function_code(function_code)?,
            batch2_policy: Self::validate_batch2_policy(batch2_policy)?,
        })
    }
}
