use crate::domain::enums::CardStatus;
use std::sync::Arc;

pub type DynCardActivationPolicy = Arc<dyn CardActivationPolicyTrait + Send + Sync>;

/// Decides the status a freshly issued card starts in. The row default is
/// BLOCKED; a policy may activate immediately.
pub trait CardActivationPolicyTrait {
    fn initial_status(&self) -> CardStatus;
}
