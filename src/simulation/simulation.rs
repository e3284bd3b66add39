/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use std::thread::sleep;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::config::TimingConfig;
use crate::dispatcher::Dispatcher;
use crate::elevator::Elevator;
use crate::shared::{Input, Notification, Prompt, StepResult};

/**
 * Driving loop of the elevator simulation.
 *
 * Owns the elevator state machine and the dispatcher, and advances them
 * in lockstep with the request source: one prompt out, one input in,
 * at most one dispatch, then a fixed number of movement steps. All
 * mutation of the elevator and the pending-request set happens serially
 * inside this loop, so the core needs no locking.
 *
 * The door and pacing delays are plain sleeps taken from the timing
 * configuration; a duration of 0 skips the sleep entirely.
 *
 * # Fields
 * - `elevator`:          The single-elevator state machine.
 * - `dispatcher`:        Pending pickup requests and selection policy.
 * - `n_floors`:          Number of floors, fixed for the run.
 * - `steps_per_cycle`:   Movement steps simulated after each input.
 * - `timing`:            Pause durations in milliseconds.
 * - `input_rx`:          Receives one signal per cycle from the request source.
 * - `prompt_tx`:         Tells the request source which question to ask.
 * - `notification_tx`:   State-change notifications for the status display.
 */
pub struct Simulation {
    // Private fields
    elevator: Elevator,
    dispatcher: Dispatcher,
    n_floors: u8,
    steps_per_cycle: u8,
    timing: TimingConfig,

    // Request source channels
    input_rx: cbc::Receiver<Input>,
    prompt_tx: cbc::Sender<Prompt>,

    // Observer channels
    notification_tx: cbc::Sender<Notification>,
}

impl Simulation {
    pub fn new(
        config: &Config,
        input_rx: cbc::Receiver<Input>,
        prompt_tx: cbc::Sender<Prompt>,
        notification_tx: cbc::Sender<Notification>,
    ) -> Simulation {
        Simulation {
            elevator: Elevator::new(),
            dispatcher: Dispatcher::new(config.simulation.n_floors),
            n_floors: config.simulation.n_floors,
            steps_per_cycle: config.simulation.steps_per_cycle,
            timing: config.timing.clone(),

            input_rx,
            prompt_tx,
            notification_tx,
        }
    }

    pub fn run(mut self) {
        // Main loop: prompt, one input, at most one dispatch, then steps.
        loop {
            if self.send_prompt().is_err() {
                warn!("Request source hung up, stopping simulation");
                break;
            }

            match self.input_rx.recv() {
                Ok(Input::Terminate) => {
                    info!("Terminate received, stopping simulation");
                    break;
                }
                Ok(input) => self.handle_input(input),
                Err(_) => {
                    warn!("Request source hung up, stopping simulation");
                    break;
                }
            }

            self.dispatch_if_idle();
            self.advance();
        }
    }

    fn handle_input(&mut self, input: Input) {
        match input {
            Input::CallRequest(floor) => match self.dispatcher.add_request(floor) {
                Ok(()) => info!("Pickup request for floor {} queued", floor),
                Err(e) => {
                    warn!("Rejected pickup request: {}", e);
                    self.notify(Notification::RequestRejected(floor));
                }
            },

            Input::Destination(floor) => {
                if !self.elevator.awaiting_destination() {
                    // Precondition violation, see InvalidPhaseOperation policy.
                    warn!("Destination {} ignored, no rider is inside", floor);
                    return;
                }

                if floor < 1 || floor > self.n_floors {
                    // Rather than staying in Loading with a bogus target,
                    // the elevator goes back to Idle.
                    warn!("Rejected destination {}, going idle", floor);
                    self.notify(Notification::DestinationRejected(floor));
                    self.elevator.mark_idle();
                    self.notify(Notification::WentIdle(self.elevator.current_floor()));
                    self.pause(self.timing.exit_time);
                } else {
                    info!("Rider travelling to floor {}", floor);
                    self.elevator.assign_destination(floor);
                    self.notify(Notification::DestinationAccepted(floor));
                }
            }

            Input::ExitCab => {
                if !self.elevator.awaiting_destination() {
                    warn!("Exit ignored, no rider is inside");
                    return;
                }

                self.elevator.mark_idle();
                self.notify(Notification::RiderExited);
                self.notify(Notification::WentIdle(self.elevator.current_floor()));
                self.pause(self.timing.exit_time);
            }

            Input::NoRequest => {}

            // Handled by the run loop before we get here.
            Input::Terminate => {}
        }
    }

    // Serve-one-then-recheck: at most one request is dispatched per
    // cycle, so new incoming requests interleave with service.
    fn dispatch_if_idle(&mut self) {
        if !self.elevator.is_idle() || !self.dispatcher.has_pending() {
            return;
        }

        if let Some(floor) = self.dispatcher.select_next(self.elevator.current_floor()) {
            self.dispatcher.remove(floor);
            self.elevator.assign_request(floor);
            info!("Dispatched elevator to pick up at floor {}", floor);
            self.notify(Notification::Dispatched(floor));
        }
    }

    fn advance(&mut self) {
        for _ in 0..self.steps_per_cycle {
            let direction = self.elevator.travel_direction();

            match self.elevator.step() {
                StepResult::Moved => {
                    self.notify(Notification::Moving {
                        floor: self.elevator.current_floor(),
                        direction,
                    });
                }
                StepResult::Arrived => {
                    info!("Arrived at floor {}", self.elevator.current_floor());
                    self.notify(Notification::Arrived(self.elevator.current_floor()));
                    self.notify(Notification::DoorsOpened);
                    self.pause(self.timing.door_open_time);
                    self.notify(Notification::DoorsClosed);
                    self.pause(self.timing.door_close_time);
                }
                StepResult::NoMovement => {
                    self.notify(Notification::Holding(self.elevator.current_floor()));
                }
            }

            self.pause(self.timing.step_time);
        }
    }

    fn send_prompt(&self) -> Result<(), cbc::SendError<Prompt>> {
        let prompt = if self.elevator.awaiting_destination() {
            Prompt::Destination {
                floor: self.elevator.current_floor(),
            }
        } else {
            Prompt::Call {
                floor: self.elevator.current_floor(),
                phase: self.elevator.phase(),
            }
        };

        self.prompt_tx.send(prompt)
    }

    // The display is optional, a closed channel only loses output.
    fn notify(&self, notification: Notification) {
        let _ = self.notification_tx.send(notification);
    }

    fn pause(&self, millis: u64) {
        if millis > 0 {
            sleep(Duration::from_millis(millis));
        }
    }
}
