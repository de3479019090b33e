/// A parked car. Never changes once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    registration_number: String,
    color: String,
}

impl Vehicle {
    pub fn new(registration_number: &str, color: &str) -> Vehicle {
        Vehicle {
            registration_number: registration_number.to_owned(),
            color: color.to_owned(),
        }
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_vehicle() {
        let v = Vehicle::new("KA-01-HH-1234", "White");
        assert_eq!(v.registration_number(), "KA-01-HH-1234");
        assert_eq!(v.color(), "White");
    }
}
