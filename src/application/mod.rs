mod clock;
mod session;
mod viewport;

pub use clock::{MAX_STEPS_PER_ADVANCE, MAX_STEPS_PER_SECOND, MIN_STEPS_PER_SECOND, StepClock};
pub use session::{RunState, Session};
pub use viewport::Viewport;
