pub mod availability;
pub mod orchestrator;
pub mod request;
pub mod types;

pub use availability::{check_availability, Availability, ExistenceQuery};
pub use orchestrator::Provisioner;
pub use request::{ProvisioningRequest, RequestFields};
pub use types::ProvisioningOutcome;
