pub mod gym_state;
pub mod member;
pub mod subscription;

pub use gym_state::*;
pub use member::*;
pub use subscription::*;
