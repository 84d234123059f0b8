//! # Desired-State Validation
//!
//! Precondition checks for the create task's desired state. Every violation
//! is collected so the caller sees the full list at once, not just the first
//! failure.

use crate::model::LambdaDeploymentInput;

/// Lambda memory bounds in MB
const MIN_MEMORY_MB: u32 = 128;
const MAX_MEMORY_MB: u32 = 10_240;

/// Lambda timeout bounds in seconds
const MIN_TIMEOUT_SECONDS: u32 = 1;
const MAX_TIMEOUT_SECONDS: u32 = 900;

/// Validate a deployment desired state, returning every violation found.
/// An empty list means the input is valid.
pub fn validate_deployment(input: &LambdaDeploymentInput) -> Vec<String> {
    let mut errors = Vec::new();

    if input.function_name.trim().is_empty() {
        errors.push("Function name is required".to_string());
    }
    if input.region.trim().is_empty() {
        errors.push("Region is required".to_string());
    }
    if input.account.trim().is_empty() {
        errors.push("Account is required".to_string());
    }
    if input.runtime.trim().is_empty() {
        errors.push("Runtime is required".to_string());
    }
    if input.handler.trim().is_empty() {
        errors.push("Handler is required".to_string());
    }
    if input.role.trim().is_empty() {
        errors.push("Execution role is required".to_string());
    }

    if let Some(memory) = input.memory_size {
        if !(MIN_MEMORY_MB..=MAX_MEMORY_MB).contains(&memory) {
            errors.push(format!(
                "Memory size {memory} MB is outside the allowed range {MIN_MEMORY_MB}-{MAX_MEMORY_MB}"
            ));
        }
    }

    if let Some(timeout) = input.timeout {
        if !(MIN_TIMEOUT_SECONDS..=MAX_TIMEOUT_SECONDS).contains(&timeout) {
            errors.push(format!(
                "Timeout {timeout}s is outside the allowed range {MIN_TIMEOUT_SECONDS}-{MAX_TIMEOUT_SECONDS}s"
            ));
        }
    }

    errors
}
