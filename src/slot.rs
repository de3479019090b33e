use crate::vehicle::Vehicle;

/// A parking space. The slot number is 1-origin and fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    slot_number: usize,
    vehicle: Option<Vehicle>,
}

impl Slot {
    pub fn new(slot_number: usize) -> Slot {
        Slot {
            slot_number,
            vehicle: None,
        }
    }

    pub fn slot_number(&self) -> usize {
        self.slot_number
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.vehicle.is_some()
    }

    /// Puts `vehicle` into the slot. The slot must be free.
    pub fn park_vehicle(&mut self, vehicle: Vehicle) {
        debug_assert!(self.vehicle.is_none());
        self.vehicle = Some(vehicle);
    }

    pub fn remove_vehicle(&mut self) -> Option<Vehicle> {
        self.vehicle.take()
    }
}
