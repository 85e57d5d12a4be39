use crate::{
    abstract_trait::card::policy::CardActivationPolicyTrait, domain::enums::CardStatus,
};

/// Default issuance policy: cards are usable as soon as they are created.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateActivationPolicy;

impl CardActivationPolicyTrait for ImmediateActivationPolicy {
    fn initial_status(&self) -> CardStatus {
        CardStatus::Active
    }
}

/// Issuance policy that leaves new cards BLOCKED until activated elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualActivationPolicy;

impl CardActivationPolicyTrait for ManualActivationPolicy {
    fn initial_status(&self) -> CardStatus {
        CardStatus::Blocked
    }
}
