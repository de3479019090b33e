use thiserror::Error;

use crate::{free_slots::FreeSlotQueue, slot::Slot, vehicle::Vehicle};

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParkingLotError {
    #[error("Parking lot already created")]
    AlreadyCreated,
    #[error("Parking lot is not created")]
    NotCreated,
    #[error("Invalid capacity")]
    InvalidCapacity,
    #[error("Sorry, parking lot is full")]
    LotFull,
    #[error("Invalid slot number")]
    InvalidSlot,
    #[error("Vehicle is not found in parking lot")]
    VehicleNotFound,
    #[error("Not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, ParkingLotError>;

/// A fixed-capacity parking lot.
///
/// Slots above `high_water_mark` have never been handed out. Slots at or
/// below it are either occupied or sitting in `free_slots`, so the lowest
/// free slot is either the lowest one in `free_slots` or `high_water_mark + 1`.
#[derive(Debug, Default)]
pub struct ParkingLot {
    address: String,
    capacity: usize,
    slots: Vec<Slot>,
    free_slots: FreeSlotQueue,
    high_water_mark: usize,
}

impl ParkingLot {
    /// Returns an empty lot. `create_parking_lot` must be called before
    /// any vehicle can be parked.
    pub fn new() -> ParkingLot {
        ParkingLot::default()
    }

    pub fn is_created(&self) -> bool {
        self.capacity > 0
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn high_water_mark(&self) -> usize {
        self.high_water_mark
    }

    pub fn num_occupied(&self) -> usize {
        self.high_water_mark - self.free_slots.len()
    }

    pub fn num_available(&self) -> usize {
        self.capacity - self.num_occupied()
    }

    pub fn create_parking_lot(&mut self, address: &str, capacity: usize) -> Result<()> {
        if self.is_created() {
            return Err(ParkingLotError::AlreadyCreated);
        }

        if capacity == 0 {
            return Err(ParkingLotError::InvalidCapacity);
        }

        let mut slots = Vec::new();
        if let Err(err) = slots.try_reserve_exact(capacity) {
            warn!("failed to allocate {} slots: {}", capacity, err);
            return Err(ParkingLotError::InvalidCapacity);
        }
        slots.extend((1..=capacity).map(Slot::new));

        self.address = address.to_owned();
        self.capacity = capacity;
        self.slots = slots;
        self.free_slots = FreeSlotQueue::new();
        self.high_water_mark = 0;

        info!("created a parking lot at {} with {} slots", address, capacity);
        Ok(())
    }

    /// Parks a vehicle in the nearest free slot and returns its number.
    pub fn park(&mut self, registration_number: &str, color: &str) -> Result<usize> {
        self.check_created()?;
        let slot_number = self.allocate_slot()?;
        self.slots[slot_number - 1].park_vehicle(Vehicle::new(registration_number, color));
        debug!("{} slots left", self.num_available());
        Ok(slot_number)
    }

    fn allocate_slot(&mut self) -> Result<usize> {
        if let Some(slot_number) = self.free_slots.pop_min() {
            debug!("reusing slot {}", slot_number);
            return Ok(slot_number);
        }

        if self.high_water_mark < self.capacity {
            self.high_water_mark += 1;
            debug!("allocating new slot {}", self.high_water_mark);
            return Ok(self.high_water_mark);
        }

        Err(ParkingLotError::LotFull)
    }

    pub fn leave(&mut self, slot_number: usize) -> Result<()> {
        self.check_created()?;
        if slot_number == 0 || slot_number > self.capacity {
            return Err(ParkingLotError::InvalidSlot);
        }

        match self.slots[slot_number - 1].remove_vehicle() {
            Some(_) => {
                self.free_slots.push(slot_number);
                trace!("free slots: {:?}", self.free_slots.to_sorted_vec());
                Ok(())
            }
            None => Err(ParkingLotError::VehicleNotFound),
        }
    }

    /// Occupied slots in ascending order. Empty if the lot is not created.
    pub fn get_status(&self) -> Vec<&Slot> {
        self.occupied_slots().collect()
    }

    /// Returns the slot numbers and registration numbers of vehicles whose
    /// color matches `color` exactly (case-sensitive).
    pub fn get_vehicles_by_color(&self, color: &str) -> Result<(Vec<usize>, Vec<&str>)> {
        let mut slot_numbers = Vec::new();
        let mut registration_numbers = Vec::new();
        for slot in self.occupied_slots() {
            if let Some(vehicle) = slot.vehicle() {
                if vehicle.color() == color {
                    slot_numbers.push(slot.slot_number());
                    registration_numbers.push(vehicle.registration_number());
                }
            }
        }

        if slot_numbers.is_empty() {
            return Err(ParkingLotError::NotFound);
        }

        Ok((slot_numbers, registration_numbers))
    }

    pub fn get_vehicle_by_registration_number(&self, registration_number: &str) -> Result<usize> {
        self.occupied_slots()
            .find(|slot| {
                slot.vehicle()
                    .map(|v| v.registration_number() == registration_number)
                    .unwrap_or(false)
            })
            .map(|slot| slot.slot_number())
            .ok_or(ParkingLotError::NotFound)
    }

    fn check_created(&self) -> Result<()> {
        if self.is_created() {
            Ok(())
        } else {
            Err(ParkingLotError::NotCreated)
        }
    }

    fn occupied_slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots[..self.high_water_mark]
            .iter()
            .filter(|slot| slot.is_occupied())
    }
}
