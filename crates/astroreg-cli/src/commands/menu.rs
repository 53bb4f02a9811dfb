//! Interactive menu command
//!
//! Usage: astroreg menu [--config <PATH>] [--reject-duplicates] [--log-profile <PROFILE>]
//!
//! Reads one answer per line. Every state change goes through `apply()` on a
//! clone of the current agency, so a rejected command leaves it untouched.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use astroreg_core::render::{render_astronauts, render_deceased, render_flights};
use astroreg_core::{
    apply, logging_facility, Agency, AgencyError, Command, DuplicateKeyPolicy, ExError,
};
use astroreg_core_types::RequestId;
use clap::Args;
use thiserror::Error;

use super::config::SettingsArgs;

#[derive(Debug, Default, Args)]
pub struct MenuArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Execute menu command
pub fn execute(args: MenuArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.settings.resolve()?;
    logging_facility::init(config.log_profile);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(stdin.lock(), stdout.lock(), config.duplicate_keys.policy())?;
    Ok(())
}

const MENU: &str = "\
Main menu:
1. Register astronaut
2. Register flight
3. Assign astronaut to flight
4. Remove astronaut from flight
5. Launch flight
6. Report flight accident
7. Finish flight
8. List astronauts
9. List flights
10. List deceased astronauts
11. Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    RegisterAstronaut,
    RegisterFlight,
    Assign,
    Unassign,
    Launch,
    ReportAccident,
    Finish,
    ListAstronauts,
    ListFlights,
    ListDeceased,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().parse::<u32>().ok()? {
            1 => MenuChoice::RegisterAstronaut,
            2 => MenuChoice::RegisterFlight,
            3 => MenuChoice::Assign,
            4 => MenuChoice::Unassign,
            5 => MenuChoice::Launch,
            6 => MenuChoice::ReportAccident,
            7 => MenuChoice::Finish,
            8 => MenuChoice::ListAstronauts,
            9 => MenuChoice::ListFlights,
            10 => MenuChoice::ListDeceased,
            11 => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

#[derive(Debug, Error)]
enum MenuError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("end of input")]
    Eof,

    #[error(transparent)]
    Agency(#[from] AgencyError),
}

struct Menu<'a, R, W> {
    input: R,
    output: W,
    agency: Agency,
    policy: &'a dyn DuplicateKeyPolicy,
}

/// Run the menu loop until Exit or end of input, returning the final state
///
/// # Errors
/// Returns an I/O error if reading input or writing output fails.
pub fn run_menu<R: BufRead, W: Write>(
    input: R,
    output: W,
    policy: &dyn DuplicateKeyPolicy,
) -> io::Result<Agency> {
    let mut menu = Menu {
        input,
        output,
        agency: Agency::new(),
        policy,
    };
    menu.run()?;
    Ok(menu.agency)
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid option. Try again.")?;
                continue;
            };

            match self.handle(choice) {
                Ok(true) => {}
                Ok(false) | Err(MenuError::Eof) => return Ok(()),
                Err(MenuError::Agency(e)) => writeln!(self.output, "Error: {}", e)?,
                Err(MenuError::Io(e)) => return Err(e),
            }
        }
    }

    /// Returns `false` once the user asked to exit
    fn handle(&mut self, choice: MenuChoice) -> Result<bool, MenuError> {
        match choice {
            MenuChoice::RegisterAstronaut => {
                let id = self.ask_identifier()?;
                let name = self.ask("Astronaut name: ")?;
                let age = self.ask_number::<i32>("Astronaut age: ")?;
                self.execute(Command::RegisterAstronaut { id, name, age })?;
            }
            MenuChoice::RegisterFlight => {
                let code = self.ask_number("Flight code: ")?;
                self.execute(Command::RegisterFlight { code })?;
            }
            MenuChoice::Assign => {
                let astronaut_id = self.ask_identifier()?;
                let flight_code = self.ask_number("Flight code: ")?;
                self.execute(Command::Assign {
                    astronaut_id,
                    flight_code,
                })?;
            }
            MenuChoice::Unassign => {
                let astronaut_id = self.ask_identifier()?;
                let flight_code = self.ask_number("Flight code: ")?;
                self.execute(Command::Unassign {
                    astronaut_id,
                    flight_code,
                })?;
            }
            MenuChoice::Launch => {
                let flight_code = self.ask_number("Flight code: ")?;
                self.execute(Command::Launch { flight_code })?;
            }
            MenuChoice::ReportAccident => {
                let flight_code = self.ask_number("Flight code: ")?;
                self.execute(Command::ReportAccident { flight_code })?;
            }
            MenuChoice::Finish => {
                let flight_code = self.ask_number("Flight code: ")?;
                let succeeded = self.ask_outcome()?;
                self.execute(Command::Finish {
                    flight_code,
                    succeeded,
                })?;
            }
            MenuChoice::ListAstronauts => {
                write!(self.output, "{}", render_astronauts(&self.agency))?;
            }
            MenuChoice::ListFlights => {
                write!(self.output, "{}", render_flights(&self.agency))?;
            }
            MenuChoice::ListDeceased => {
                write!(self.output, "{}", render_deceased(&self.agency))?;
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting.")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn execute(&mut self, cmd: Command) -> Result<(), MenuError> {
        let request_id = RequestId::new();
        let op = cmd.op_name();
        let span = tracing::info_span!("menu_command", request_id = %request_id, op = op);
        let _guard = span.enter();

        let confirmation = self.confirmation(&cmd);
        match apply(self.agency.clone(), cmd, self.policy) {
            Ok(agency) => {
                self.agency = agency;
                writeln!(self.output, "{}", confirmation)?;
                Ok(())
            }
            Err(e) => {
                let report = failure_report(&e, op, request_id);
                tracing::warn!(
                    err_code = report.code(),
                    error = %report,
                    "menu command rejected"
                );
                Err(e.into())
            }
        }
    }

    /// Success message, worded from the state before the command runs
    fn confirmation(&self, cmd: &Command) -> String {
        match cmd {
            Command::RegisterAstronaut { id, .. } => format!("Astronaut {} registered.", id),
            Command::RegisterFlight { code } => format!("Flight {} registered.", code),
            Command::Assign {
                astronaut_id,
                flight_code,
            } => format!("Astronaut {} assigned to flight {}.", astronaut_id, flight_code),
            Command::Unassign {
                astronaut_id,
                flight_code,
            } => {
                let on_roster = self
                    .agency
                    .flights()
                    .find(*flight_code)
                    .is_ok_and(|f| f.passengers.iter().any(|p| p == astronaut_id));
                if on_roster {
                    format!("Astronaut {} removed from flight {}.", astronaut_id, flight_code)
                } else {
                    format!("Astronaut {} was not on flight {}.", astronaut_id, flight_code)
                }
            }
            Command::Launch { flight_code } => format!("Flight {} launched.", flight_code),
            Command::ReportAccident { flight_code } => {
                format!("Flight {} lost. Crew marked deceased.", flight_code)
            }
            Command::Finish {
                flight_code,
                succeeded,
            } => {
                let outcome = if *succeeded { "success" } else { "failure" };
                format!("Flight {} finished: {}.", flight_code, outcome)
            }
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask(&mut self, label: &str) -> Result<String, MenuError> {
        self.prompt(label)?.ok_or(MenuError::Eof)
    }

    fn ask_identifier(&mut self) -> Result<String, MenuError> {
        let id = self.ask("Astronaut identifier: ")?;
        if id.is_empty() {
            return Err(AgencyError::InvalidInput {
                reason: "identifier must not be empty".to_string(),
            }
            .into());
        }
        Ok(id)
    }

    fn ask_number<T: FromStr>(&mut self, label: &str) -> Result<T, MenuError> {
        let answer = self.ask(label)?;
        answer.parse().map_err(|_| {
            AgencyError::InvalidInput {
                reason: format!("expected a number, got '{}'", answer),
            }
            .into()
        })
    }

    fn ask_outcome(&mut self) -> Result<bool, MenuError> {
        let answer = self.ask("Was the flight successful? (1 = yes, 0 = no): ")?;
        match answer.as_str() {
            "1" => Ok(true),
            "0" => Ok(false),
            other => Err(AgencyError::InvalidInput {
                reason: format!("expected 1 or 0, got '{}'", other),
            }
            .into()),
        }
    }
}

/// Structured form of a rejected command, tagged with its op and request id
fn failure_report(err: &AgencyError, op: &str, request_id: RequestId) -> ExError {
    ExError::from(err.clone())
        .with_op(op)
        .with_request_id(request_id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use astroreg_core::{AcceptDuplicatesPolicy, FlightStatus, RejectDuplicatesPolicy};
    use std::io::Cursor;

    fn run_script(script: &str, policy: &dyn DuplicateKeyPolicy) -> (Agency, String) {
        let mut output = Vec::new();
        let agency = run_menu(Cursor::new(script), &mut output, policy).unwrap();
        (agency, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::RegisterAstronaut));
        assert_eq!(MenuChoice::parse(" 11 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("12"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
    }

    #[test]
    fn test_register_and_list_astronaut() {
        let (agency, output) = run_script(
            "1\n111\nYuri Gagarin\n27\n8\n11\n",
            &AcceptDuplicatesPolicy,
        );

        assert_eq!(agency.astronauts().len(), 1);
        assert!(output.contains("Astronaut 111 registered."));
        assert!(output.contains("Id: 111, Name: Yuri Gagarin, Age: 27"));
        assert!(output.contains("Exiting."));
    }

    #[test]
    fn test_full_mission() {
        let script = "1\n111\nYuri\n27\n2\n1\n3\n111\n1\n5\n1\n7\n1\n1\n9\n11\n";
        let (agency, output) = run_script(script, &AcceptDuplicatesPolicy);

        let flight = agency.flights().find(1).unwrap();
        assert_eq!(flight.status, FlightStatus::Finished);
        assert!(output.contains("Flight 1 finished: success."));
        assert!(output.contains("Flight code: 1, Status: Finished, Outcome: success"));
    }

    #[test]
    fn test_invalid_option_reprompts() {
        let (_, output) = run_script("42\n11\n", &AcceptDuplicatesPolicy);

        assert!(output.contains("Invalid option. Try again."));
        assert_eq!(output.matches("Main menu:").count(), 2);
    }

    #[test]
    fn test_non_numeric_code_is_invalid_input() {
        let (agency, output) = run_script("2\nabc\n11\n", &AcceptDuplicatesPolicy);

        assert!(agency.flights().is_empty());
        assert!(output.contains("Error: Invalid input: expected a number, got 'abc'"));
    }

    #[test]
    fn test_outcome_must_be_one_or_zero() {
        let script = "1\n111\nYuri\n27\n2\n1\n3\n111\n1\n5\n1\n7\n1\nyes\n11\n";
        let (agency, output) = run_script(script, &AcceptDuplicatesPolicy);

        assert!(output.contains("Error: Invalid input: expected 1 or 0, got 'yes'"));
        assert!(agency.flights().find(1).unwrap().is_in_flight());
    }

    #[test]
    fn test_rejected_command_prints_error_and_continues() {
        let (agency, output) = run_script("2\n1\n5\n1\n9\n11\n", &AcceptDuplicatesPolicy);

        assert!(output.contains("Error: Flight 1 cannot be launched: no passengers assigned"));
        assert!(output.contains("Flight code: 1, Status: Planned"));
        assert!(agency.flights().find(1).unwrap().is_planned());
    }

    #[test]
    fn test_end_of_input_exits() {
        let (agency, output) = run_script("2\n5\n", &AcceptDuplicatesPolicy);

        assert_eq!(agency.flights().len(), 1);
        assert!(!output.contains("Exiting."));
    }

    #[test]
    fn test_end_of_input_mid_prompt_exits() {
        let (agency, _) = run_script("1\n111\n", &AcceptDuplicatesPolicy);

        assert!(agency.astronauts().is_empty());
    }

    #[test]
    fn test_unassign_absent_astronaut_message() {
        let (_, output) = run_script("2\n1\n4\n999\n1\n11\n", &AcceptDuplicatesPolicy);

        assert!(output.contains("Astronaut 999 was not on flight 1."));
    }

    #[test]
    fn test_failure_report_carries_op_and_request_id() {
        let err = AgencyError::NoPassengers { flight_code: 4 };
        let request_id = RequestId::from_string("req-menu".to_string());

        let report = failure_report(&err, "launch", request_id.clone());

        assert_eq!(report.code(), "ERR_INVALID_TRANSITION");
        assert_eq!(report.op(), Some("launch"));
        assert_eq!(report.entity_id(), Some("4"));
        assert_eq!(report.request_id(), Some(&request_id));
    }

    #[test]
    fn test_reject_duplicates_policy() {
        let (agency, output) = run_script("2\n1\n2\n1\n11\n", &RejectDuplicatesPolicy);

        assert_eq!(agency.flights().len(), 1);
        assert!(output.contains("Error: Flight already registered: 1"));
    }
}
