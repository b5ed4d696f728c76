mod association;
pub use association::*;
mod basic;
pub use basic::*;
mod manufacturer_specific;
pub use manufacturer_specific::*;
mod network_inclusion;
pub use network_inclusion::*;
mod network_management_basic;
pub use network_management_basic::*;
mod network_management_proxy;
pub use network_management_proxy::*;
mod raw;
pub use raw::*;
mod transmit_options;
pub use transmit_options::*;
mod version;
pub use version::*;
