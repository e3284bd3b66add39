/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Phase, StepResult};

/**
 * Single-elevator state machine.
 *
 * Owns the current floor, the target floor and the phase, and advances
 * one floor per discrete time step. The machine itself raises no errors;
 * floor-range validation is the caller's responsibility, and the driving
 * loop only invokes an operation when its precondition holds.
 *
 * # Fields
 * - `current_floor`:   The floor the car is on, always in [1, n_floors].
 * - `target_floor`:    The floor being travelled to. Only meaningful
 *                      while the phase is EnRoute or Loading.
 * - `phase`:           Idle, EnRoute or Loading.
 */
pub struct Elevator {
    current_floor: u8,
    target_floor: u8,
    phase: Phase,
}

impl Elevator {
    /// Starts at floor 1, idle with the doors closed.
    pub fn new() -> Elevator {
        Elevator {
            current_floor: 1,
            target_floor: 1,
            phase: Phase::Idle,
        }
    }

    /// Assign a pickup request. Precondition: nobody is being served.
    pub fn assign_request(&mut self, floor: u8) {
        self.target_floor = floor;
        self.phase = Phase::EnRoute;
    }

    /// Assign the destination chosen by the rider. Precondition: Loading.
    pub fn assign_destination(&mut self, floor: u8) {
        self.target_floor = floor;
        self.phase = Phase::EnRoute;
    }

    /// Force the elevator back to Idle. Used when the rider exits or
    /// picks an invalid destination, valid from any phase.
    pub fn mark_idle(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Advance one discrete unit of simulated time.
    ///
    /// While EnRoute the car moves exactly one floor towards the target
    /// and transitions to Loading on arrival. Idle and Loading steps
    /// never move the car, so repeated steps after an arrival cannot
    /// re-arrive or drift past the target.
    pub fn step(&mut self) -> StepResult {
        match self.phase {
            Phase::Idle | Phase::Loading => StepResult::NoMovement,
            Phase::EnRoute => {
                if self.current_floor < self.target_floor {
                    self.current_floor += 1;
                } else if self.current_floor > self.target_floor {
                    self.current_floor -= 1;
                }

                if self.current_floor == self.target_floor {
                    self.phase = Phase::Loading;
                    StepResult::Arrived
                } else {
                    StepResult::Moved
                }
            }
        }
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// True while the doors are open and a rider is choosing a floor.
    pub fn awaiting_destination(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Direction of travel towards the current target.
    pub fn travel_direction(&self) -> Direction {
        if self.phase != Phase::EnRoute {
            return Direction::Stop;
        }

        if self.current_floor < self.target_floor {
            Direction::Up
        } else if self.current_floor > self.target_floor {
            Direction::Down
        } else {
            Direction::Stop
        }
    }
}
