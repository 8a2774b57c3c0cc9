//! Domain model for the collaboration pipeline.

mod context;
mod ids;
mod note;
mod role;
mod routing;

pub use context::CollaborationContext;
pub use ids::RunId;
pub use note::AgentNote;
pub use role::RoleId;
pub use routing::{RoutePredicate, RoutingRule, RoutingTable};
