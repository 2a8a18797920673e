pub mod activity;
pub mod activity_kind;
pub mod summary;
pub mod transport_mode;

pub use activity::{Activity, Measurement};
pub use activity_kind::ActivityKind;
pub use transport_mode::TransportMode;
