use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::{
    command::Command,
    parking_lot::{ParkingLot, ParkingLotError},
    printer::{write_numbers, write_status, write_strings},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Feeds commands into a parking lot and writes one response per command.
pub struct Session {
    lot: ParkingLot,
    address: String,
}

impl Session {
    /// `address` is given to the lot when `create_parking_lot` succeeds.
    pub fn new(address: &str) -> Session {
        Session {
            lot: ParkingLot::new(),
            address: address.to_owned(),
        }
    }

    pub fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    /// Processes lines until EOF or `exit`. Rejected commands are reported
    /// on `output` and do not stop the loop.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read a command")?;
            if self.execute(&line, output)? == Flow::Exit {
                trace!("exit requested");
                break;
            }
        }

        output.flush().context("failed to flush the output")?;
        Ok(())
    }

    /// Runs a single command. Returns an error only if `output` fails.
    pub fn execute<W: Write>(&mut self, line: &str, output: &mut W) -> Result<Flow> {
        let command = Command::parse(line);
        trace!("{:?} => {:?}", line, command);
        if command == Command::Unknown {
            warn!("unknown command: {:?}", line);
        }

        match self.dispatch(command, output) {
            Ok(flow) => Ok(flow),
            Err(err) => match err.downcast_ref::<ParkingLotError>() {
                Some(lot_err) => {
                    warn!("{:?}: {}", command, lot_err);
                    writeln!(output, "{}", lot_err)?;
                    Ok(Flow::Continue)
                }
                None => Err(err),
            },
        }
    }

    fn dispatch<W: Write>(&mut self, command: Command, output: &mut W) -> Result<Flow> {
        match command {
            Command::CreateParkingLot { capacity } => {
                let capacity = parse_number(capacity, ParkingLotError::InvalidCapacity)?;
                self.lot.create_parking_lot(&self.address, capacity)?;
                writeln!(output, "Created a parking lot with {} slots", capacity)?;
            }
            Command::Park {
                registration_number,
                color,
            } => {
                let slot_number = self.lot.park(registration_number, color)?;
                writeln!(output, "Allocated slot number: {}", slot_number)?;
            }
            Command::Leave { slot_number } => {
                let slot_number = parse_number(slot_number, ParkingLotError::InvalidSlot)?;
                self.lot.leave(slot_number)?;
                writeln!(output, "Slot number {} is free", slot_number)?;
            }
            Command::Status => {
                write_status(output, &self.lot.get_status())?;
            }
            Command::RegistrationNumbersForColor { color } => {
                let (_, registration_numbers) = self.lot.get_vehicles_by_color(color)?;
                write_strings(output, &registration_numbers)?;
            }
            Command::SlotNumbersForColor { color } => {
                let (slot_numbers, _) = self.lot.get_vehicles_by_color(color)?;
                write_numbers(output, &slot_numbers)?;
            }
            Command::SlotNumberForRegistrationNumber {
                registration_number,
            } => {
                let slot_number = self
                    .lot
                    .get_vehicle_by_registration_number(registration_number)?;
                writeln!(output, "{}", slot_number)?;
            }
            Command::Exit => return Ok(Flow::Exit),
            Command::Unknown => {
                writeln!(output, "Unknown input command")?;
            }
        }

        Ok(Flow::Continue)
    }
}

/// Parses a positive integer argument. Anything else is reported as `err`.
fn parse_number(arg: &str, err: ParkingLotError) -> Result<usize, ParkingLotError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(err),
    }
}
