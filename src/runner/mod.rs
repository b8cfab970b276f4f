//! @ai:module:intent Invocation of the rendering binary and artifact retrieval
//! @ai:module:layer infrastructure
//! @ai:module:public_api SweepCommand, SweepExecutor, DeviceTransfer, SampleSource, BinarySampleSource

pub mod command;
pub mod device;
pub mod executor;
pub mod source;

pub use command::SweepCommand;
pub use device::DeviceTransfer;
pub use executor::SweepExecutor;
pub use source::{BinarySampleSource, SampleSource};
