//! Outbound ports - Interfaces that the application requires from external systems

mod clock_port;
mod event_bus_port;
mod payment_port;

pub use clock_port::ClockPort;
pub use event_bus_port::{EventBusError, EventBusPort};
pub use payment_port::{PaymentError, PaymentPort};
