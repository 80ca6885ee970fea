//! Application services for share-extension content resolution.

mod activation;
mod assembler;
mod bridge;
mod cancellation;
pub mod reporter;
mod resolver;

pub use activation::ShareActivation;
pub use assembler::{AttachmentAssembler, Contribution};
pub use bridge::{AsyncLoadBridge, LoadAttempt};
pub use cancellation::CancellationSignal;
pub use reporter::{Delivery, DeliveryError, DeliveryResult, OutcomeReporter};
pub use resolver::ContentResolver;
