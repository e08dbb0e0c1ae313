pub mod add_subscription;
pub mod check_membership;
pub mod initialize;
pub mod reconcile_subscriptions;
pub mod register_member;
pub mod set_member_status;
pub mod set_operations_paused;
pub mod tick_subscription;
pub mod update_member;

pub use add_subscription::*;
pub use check_membership::*;
pub use initialize::*;
pub use reconcile_subscriptions::*;
pub use register_member::*;
pub use set_member_status::*;
pub use set_operations_paused::*;
pub use tick_subscription::*;
pub use update_member::*;
