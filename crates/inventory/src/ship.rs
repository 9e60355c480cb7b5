use std::collections::HashSet;

use kontener_core::{DomainError, DomainResult, SerialNumber, ShipId};

use crate::container::Container;
use crate::storage::Storage;

/// A ship carrying containers in its own [`Storage`].
///
/// `capacity` (container count) and `max_tonnage` are reported against, not
/// enforced: loading never fails because a ship is full.
#[derive(Debug)]
pub struct Ship {
    id: ShipId,
    max_speed: f64,
    capacity: usize,
    max_tonnage: f64,
    storage: Storage,
}

impl Ship {
    pub fn new(max_speed: f64, capacity: usize, max_tonnage: f64) -> DomainResult<Self> {
        let max_speed = DomainError::ensure_positive("max_speed", max_speed)?;
        let max_tonnage = DomainError::ensure_positive("max_tonnage", max_tonnage)?;
        if capacity == 0 {
            return Err(DomainError::invalid_argument(
                "capacity must be at least one container",
            ));
        }
        let ship = Self {
            id: ShipId::new(),
            max_speed,
            capacity,
            max_tonnage,
            storage: Storage::new(),
        };
        tracing::debug!(ship_id = %ship.id, max_speed, capacity, max_tonnage, "ship created");
        Ok(ship)
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Maximum speed in knots.
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Maximum number of containers.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_tonnage(&self) -> f64 {
        self.max_tonnage
    }

    /// Total mass currently carried (dry + loaded mass of every container).
    pub fn current_tonnage(&self) -> f64 {
        self.storage.total_mass()
    }

    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.storage.len())
    }

    pub fn is_within_limits(&self) -> bool {
        self.storage.len() <= self.capacity && self.current_tonnage() <= self.max_tonnage
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut Storage {
        &mut self.storage
    }

    pub fn load_container(&mut self, container: Container) -> DomainResult<()> {
        tracing::info!(
            ship_id = %self.id,
            serial_number = %container.serial_number(),
            "loading container onto ship"
        );
        self.storage.add(container)
    }

    /// Load several containers at once. Nothing is loaded if any serial number
    /// clashes with the hold or with another container in the group.
    pub fn load_container_group(&mut self, containers: Vec<Container>) -> DomainResult<()> {
        let mut seen = HashSet::with_capacity(containers.len());
        for container in &containers {
            let serial_number = container.serial_number();
            if self.storage.contains(serial_number) || !seen.insert(serial_number) {
                return Err(DomainError::duplicate(serial_number));
            }
        }
        for container in containers {
            self.load_container(container)?;
        }
        Ok(())
    }

    pub fn unload_container(&mut self, serial_number: &SerialNumber) -> DomainResult<Container> {
        tracing::info!(
            ship_id = %self.id,
            serial_number = %serial_number,
            "unloading container from ship"
        );
        self.storage.remove(serial_number)
    }

    /// Unload every container, handing them back to the caller.
    pub fn unload_ship(&mut self) -> Vec<Container> {
        tracing::info!(ship_id = %self.id, "unloading ship");
        self.storage.clear()
    }

    pub fn replace_container(
        &mut self,
        serial_number: &SerialNumber,
        new_container: Container,
    ) -> DomainResult<Container> {
        self.storage.replace(serial_number, new_container)
    }

    /// Move a container from this ship to `destination`.
    ///
    /// Fails without touching either ship when the container is not aboard or the
    /// destination already holds its serial number.
    pub fn transport_container(
        &mut self,
        serial_number: &SerialNumber,
        destination: &mut Ship,
    ) -> DomainResult<()> {
        self.storage.transfer_to(serial_number, &mut destination.storage)?;
        tracing::info!(
            from = %self.id,
            to = %destination.id,
            serial_number = %serial_number,
            "container transported between ships"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cargo, ContainerKind, Dimensions};

    fn container(serial: &str) -> Container {
        Container::with_serial_number(
            ContainerKind::Standard,
            Dimensions::new(1000.0, 200.0, 500.0, 100.0).unwrap(),
            serial,
        )
        .unwrap()
    }

    fn serial(value: &str) -> SerialNumber {
        SerialNumber::parse(value).unwrap()
    }

    #[test]
    fn ship_rejects_invalid_limits() {
        assert!(matches!(Ship::new(0.0, 10, 10_000.0), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(Ship::new(30.0, 0, 10_000.0), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(Ship::new(30.0, 10, -1.0), Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn load_single_and_group() {
        let mut ship = Ship::new(30.0, 10, 10_000.0).unwrap();
        ship.load_container(container("KON-C-1")).unwrap();
        assert_eq!(ship.storage().len(), 1);

        ship.load_container_group(vec![container("KON-LIQ-1"), container("KON-GAS-1")])
            .unwrap();
        assert_eq!(ship.storage().len(), 3);
        assert!(ship.storage().contains(&serial("KON-LIQ-1")));
        assert!(ship.storage().contains(&serial("KON-GAS-1")));
        assert_eq!(ship.free_slots(), 7);
    }

    #[test]
    fn group_load_is_all_or_nothing() {
        let mut ship = Ship::new(30.0, 10, 10_000.0).unwrap();
        ship.load_container(container("KON-C-1")).unwrap();

        let err = ship
            .load_container_group(vec![container("KON-C-2"), container("KON-C-1")])
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateSerialNumber("KON-C-1".to_string()));
        assert_eq!(ship.storage().len(), 1);

        let err = ship
            .load_container_group(vec![container("KON-C-3"), container("KON-C-3")])
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateSerialNumber("KON-C-3".to_string()));
        assert_eq!(ship.storage().len(), 1);
    }

    #[test]
    fn unload_container_hands_it_back() {
        let mut ship = Ship::new(30.0, 10, 10_000.0).unwrap();
        ship.load_container_group(vec![
            container("KON-C-1"),
            container("KON-C-2"),
            container("KON-C-3"),
        ])
        .unwrap();

        let unloaded = ship.unload_container(&serial("KON-C-2")).unwrap();
        assert_eq!(unloaded.serial_number().as_str(), "KON-C-2");
        assert_eq!(ship.storage().len(), 2);
        assert!(!ship.storage().contains(&serial("KON-C-2")));

        assert!(matches!(
            ship.unload_container(&serial("KON-C-2")),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn unload_ship_empties_the_hold() {
        let mut ship = Ship::new(30.0, 10, 10_000.0).unwrap();
        ship.load_container(container("KON-C-1")).unwrap();
        let containers = ship.unload_ship();
        assert_eq!(containers.len(), 1);
        assert!(ship.storage().is_empty());
    }

    #[test]
    fn replace_container_on_ship() {
        let mut ship = Ship::new(30.0, 10, 10_000.0).unwrap();
        ship.load_container(container("KON-OLD-1")).unwrap();

        let old = ship
            .replace_container(&serial("KON-OLD-1"), container("KON-NEW-1"))
            .unwrap();

        assert_eq!(old.serial_number().as_str(), "KON-OLD-1");
        assert!(!ship.storage().contains(&serial("KON-OLD-1")));
        assert!(ship.storage().contains(&serial("KON-NEW-1")));
    }

    #[test]
    fn transport_moves_container_between_ships() {
        let mut ship1 = Ship::new(30.0, 10, 10_000.0).unwrap();
        let mut ship2 = Ship::new(25.0, 8, 8_000.0).unwrap();
        ship1.load_container(container("KON-TRANS-1")).unwrap();

        ship1
            .transport_container(&serial("KON-TRANS-1"), &mut ship2)
            .unwrap();

        assert!(!ship1.storage().contains(&serial("KON-TRANS-1")));
        assert!(ship2.storage().contains(&serial("KON-TRANS-1")));
        assert_eq!(ship2.storage().len(), 1);
    }

    #[test]
    fn failed_transport_does_not_lose_the_container() {
        let mut ship1 = Ship::new(30.0, 10, 10_000.0).unwrap();
        let mut ship2 = Ship::new(25.0, 8, 8_000.0).unwrap();
        ship1.load_container(container("KON-C-1")).unwrap();
        ship2.load_container(container("KON-C-1")).unwrap();

        let err = ship1
            .transport_container(&serial("KON-C-1"), &mut ship2)
            .unwrap_err();

        assert_eq!(err, DomainError::DuplicateSerialNumber("KON-C-1".to_string()));
        assert!(ship1.storage().contains(&serial("KON-C-1")));
        assert_eq!(ship2.storage().len(), 1);
    }

    #[test]
    fn tonnage_is_derived_from_held_containers() {
        let mut ship = Ship::new(30.0, 1, 1_200.0).unwrap();
        let mut loaded = container("KON-C-1");
        loaded.load_container(Cargo::safe(600.0).unwrap()).unwrap();
        ship.load_container(loaded).unwrap();

        assert_eq!(ship.current_tonnage(), 1_100.0);
        assert!(ship.is_within_limits());

        // Limits are reported, not enforced.
        ship.load_container(container("KON-C-2")).unwrap();
        assert_eq!(ship.free_slots(), 0);
        assert!(!ship.is_within_limits());
    }
}
