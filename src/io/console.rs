/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::io::BufRead;
use std::io::Write;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Input, Notification, Phase, Prompt};

/**
 * Interactive request source.
 *
 * Runs in its own thread in lockstep with the simulation: it blocks on
 * the next `Prompt`, prints the status line and the matching question,
 * reads one line from stdin and answers with exactly one `Input`. Floor
 * numbers that fit a `u8` are passed through as-is, range validation
 * against the building happens in the core; anything else is mapped to
 * a signal the core treats as invalid or skipped.
 */
pub struct ConsoleInput {
    prompt_rx: cbc::Receiver<Prompt>,
    input_tx: cbc::Sender<Input>,
}

impl ConsoleInput {
    pub fn new(prompt_rx: cbc::Receiver<Prompt>, input_tx: cbc::Sender<Input>) -> ConsoleInput {
        ConsoleInput {
            prompt_rx,
            input_tx,
        }
    }

    pub fn run(self) {
        println!("Elevator Simulation Started");
        println!("Type a floor number to request the elevator.");
        println!("Type 0 to skip (no request).");
        println!("Type -1 to quit.");

        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            let prompt = match self.prompt_rx.recv() {
                Ok(prompt) => prompt,
                Err(_) => break,
            };

            Self::print_question(&prompt);

            let line = match lines.next() {
                Some(Ok(line)) => line,
                // Stdin closed, shut the simulation down
                _ => {
                    let _ = self.input_tx.send(Input::Terminate);
                    break;
                }
            };

            let input = Self::parse(&prompt, line.trim());

            if self.input_tx.send(input).is_err() {
                break;
            }
            if input == Input::Terminate {
                break;
            }
        }
    }

    fn print_question(prompt: &Prompt) {
        println!();
        match *prompt {
            Prompt::Call { floor, phase } => {
                let status = match phase {
                    Phase::Idle => "Idle",
                    Phase::EnRoute => "Moving",
                    Phase::Loading => "Rider inside",
                };
                println!("Elevator is on floor {} ({})", floor, status);
                print!("Enter a floor number to request the elevator (0 to skip, -1 to quit): ");
            }
            Prompt::Destination { floor } => {
                println!("Elevator is on floor {} (Rider inside)", floor);
                println!("You are inside the elevator.");
                print!("Which floor do you want to go to? (Enter 0 to exit): ");
            }
        }
        let _ = std::io::stdout().flush();
    }

    fn parse(prompt: &Prompt, line: &str) -> Input {
        match *prompt {
            Prompt::Call { .. } => match line.parse::<i64>() {
                Ok(-1) => Input::Terminate,
                Ok(0) => {
                    println!("No request entered.");
                    Input::NoRequest
                }
                Ok(floor) if (1..=u8::MAX as i64).contains(&floor) => {
                    Input::CallRequest(floor as u8)
                }
                _ => {
                    println!("Invalid floor. Try again.");
                    Input::NoRequest
                }
            },
            Prompt::Destination { .. } => match line.parse::<i64>() {
                Ok(0) => Input::ExitCab,
                Ok(floor) if (1..=u8::MAX as i64).contains(&floor) => {
                    Input::Destination(floor as u8)
                }
                // Out of range for any building, the core forces idle
                _ => Input::Destination(0),
            },
        }
    }
}

/**
 * Status display, the observer side of the simulation.
 *
 * Prints every state-change notification and never feeds anything back
 * into the core.
 */
pub struct StatusDisplay {
    notification_rx: cbc::Receiver<Notification>,
}

impl StatusDisplay {
    pub fn new(notification_rx: cbc::Receiver<Notification>) -> StatusDisplay {
        StatusDisplay { notification_rx }
    }

    pub fn run(self) {
        loop {
            match self.notification_rx.recv() {
                Ok(notification) => Self::print_notification(notification),
                Err(_) => break,
            }
        }
    }

    fn print_notification(notification: Notification) {
        match notification {
            Notification::Dispatched(floor) => {
                println!("Sending elevator to pick up at floor {}", floor);
            }
            Notification::Moving { floor, direction } => match direction {
                Direction::Up => println!("Elevator moving up to floor {}", floor),
                Direction::Down => println!("Elevator moving down to floor {}", floor),
                Direction::Stop => {}
            },
            Notification::Holding(floor) => {
                println!("Elevator is currently on floor {}", floor);
            }
            Notification::Arrived(floor) => {
                println!("Elevator arrived at floor {}", floor);
            }
            Notification::DoorsOpened => println!("Doors opening..."),
            Notification::DoorsClosed => println!("Doors closing..."),
            Notification::DestinationAccepted(floor) => {
                println!("Elevator going to floor {}", floor);
            }
            Notification::DestinationRejected(_) => {
                println!("Invalid floor. Elevator will go idle.");
            }
            Notification::RiderExited => println!("You exited the elevator."),
            Notification::RequestRejected(_) => println!("Invalid floor. Try again."),
            // The status line of the next prompt already shows Idle
            Notification::WentIdle(_) => {}
        }
    }
}
