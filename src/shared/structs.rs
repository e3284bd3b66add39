/***************************************/
/*       Public data structures        */
/***************************************/

/// The elevator's behaviour: resting with no assignment, travelling
/// towards a target floor, or standing with the doors open while the
/// rider decides where to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    EnRoute,
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Stop,
}

/// Outcome of advancing the elevator one discrete time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Idle or Loading, the car does not move.
    NoMovement,
    /// Moved one floor towards the target.
    Moved,
    /// Reached the target floor this step, doors open next.
    Arrived,
}

/// One signal from the request source. Each simulation cycle consumes
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Call the elevator to a floor for pickup.
    CallRequest(u8),
    /// The rider inside selects a destination floor.
    Destination(u8),
    /// The rider leaves the cab without selecting a destination.
    ExitCab,
    /// No request this cycle, time still passes.
    NoRequest,
    Terminate,
}

/// Tells the request source which question to ask next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Nobody is inside, ask for a new pickup request.
    Call { floor: u8, phase: Phase },
    /// A rider is inside, ask for a destination.
    Destination { floor: u8 },
}

/// State-change notifications for the status display. Display only,
/// never fed back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Dispatched(u8),
    Moving { floor: u8, direction: Direction },
    Holding(u8),
    Arrived(u8),
    DoorsOpened,
    DoorsClosed,
    DestinationAccepted(u8),
    DestinationRejected(u8),
    RiderExited,
    RequestRejected(u8),
    WentIdle(u8),
}
