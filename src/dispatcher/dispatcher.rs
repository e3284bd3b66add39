/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeSet;
use std::fmt;

/**
 * Scheduling policy for the single elevator.
 *
 * Owns the set of pending pickup requests and decides which one the
 * elevator serves next. Requests are unique floors; re-adding a pending
 * floor has no effect. The pending set lives in a `BTreeSet` so that
 * `select_next` scans floors in ascending order, which makes the
 * tie-break deterministic: of two equidistant floors the lower one wins.
 *
 * # Fields
 * - `pending`:     Floors awaiting pickup, iterated in ascending order.
 * - `n_floors`:    Number of floors in the building, fixed for the run.
 */
pub struct Dispatcher {
    pending: BTreeSet<u8>,
    n_floors: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    OutOfRangeFloor { floor: u8, n_floors: u8 },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::OutOfRangeFloor { floor, n_floors } => {
                write!(f, "Floor {} is outside the building (1-{})", floor, n_floors)
            }
        }
    }
}

impl Dispatcher {
    pub fn new(n_floors: u8) -> Dispatcher {
        Dispatcher {
            pending: BTreeSet::new(),
            n_floors,
        }
    }

    /// Register a pickup request. Rejects floors outside [1, n_floors];
    /// adding an already-pending floor is a no-op.
    pub fn add_request(&mut self, floor: u8) -> Result<(), RequestError> {
        if floor < 1 || floor > self.n_floors {
            return Err(RequestError::OutOfRangeFloor {
                floor,
                n_floors: self.n_floors,
            });
        }

        self.pending.insert(floor);
        Ok(())
    }

    /// The pending floor closest to `current_floor`, or `None` when no
    /// requests are pending. The ascending scan keeps the first minimal
    /// match, so ties go to the lower floor.
    pub fn select_next(&self, current_floor: u8) -> Option<u8> {
        let mut closest = None;
        let mut min_distance = u8::MAX;

        for &floor in self.pending.iter() {
            let distance = floor.abs_diff(current_floor);
            if distance < min_distance {
                closest = Some(floor);
                min_distance = distance;
            }
        }

        closest
    }

    /// Drop a floor from the pending set once it has been dispatched.
    pub fn remove(&mut self, floor: u8) {
        self.pending.remove(&floor);
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
