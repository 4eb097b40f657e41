pub mod attendance;
pub mod correction;
