/// A single line of input.
///
/// Arguments are kept as they were typed. Numeric arguments are parsed by
/// the runner so that a malformed number is reported like any other
/// rejected command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    CreateParkingLot { capacity: &'a str },
    Park { registration_number: &'a str, color: &'a str },
    Leave { slot_number: &'a str },
    Status,
    RegistrationNumbersForColor { color: &'a str },
    SlotNumbersForColor { color: &'a str },
    SlotNumberForRegistrationNumber { registration_number: &'a str },
    Exit,
    Unknown,
}

impl<'a> Command<'a> {
    /// Parses a line. The command name and the number of space-separated
    /// fields must both match, otherwise the line is `Unknown`.
    pub fn parse(line: &'a str) -> Command<'a> {
        let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
        let args: Vec<&str> = line.split(' ').collect();
        match *args.as_slice() {
            ["create_parking_lot", capacity] => Command::CreateParkingLot { capacity },
            ["park", registration_number, color] => Command::Park {
                registration_number,
                color,
            },
            ["leave", slot_number] => Command::Leave { slot_number },
            ["status"] => Command::Status,
            ["registration_numbers_for_cars_with_colour", color] => {
                Command::RegistrationNumbersForColor { color }
            }
            ["slot_numbers_for_cars_with_colour", color] => Command::SlotNumbersForColor { color },
            ["slot_number_for_registration_number", registration_number] => {
                Command::SlotNumberForRegistrationNumber {
                    registration_number,
                }
            }
            ["exit"] => Command::Exit,
            _ => Command::Unknown,
        }
    }
}
