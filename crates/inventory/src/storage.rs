//! Serial-number-unique container storage (warehouse or ship hold).

use std::collections::HashMap;

use kontener_core::{DomainError, DomainResult, Entity, SerialNumber};

use crate::container::{Container, ContainerKind, Dimensions};

/// Ordered collection of containers, unique by serial number.
///
/// Containers keep their insertion order; a positional index keyed by serial
/// number makes lookups and in-place replacement O(1).
#[derive(Debug, Default)]
pub struct Storage {
    containers: Vec<Container>,
    index: HashMap<SerialNumber, usize>,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a container.
    pub fn add(&mut self, container: Container) -> DomainResult<()> {
        if self.index.contains_key(container.id()) {
            return Err(DomainError::duplicate(container.id()));
        }
        tracing::info!(serial_number = %container.serial_number(), "container added to storage");
        self.index
            .insert(container.id().clone(), self.containers.len());
        self.containers.push(container);
        Ok(())
    }

    /// Build a container with a generated serial number and store it.
    pub fn create_container(
        &mut self,
        kind: ContainerKind,
        dimensions: Dimensions,
    ) -> DomainResult<&mut Container> {
        let position = self.containers.len();
        self.add(Container::new(kind, dimensions))?;
        Ok(&mut self.containers[position])
    }

    /// Remove the container with this serial number and hand it back.
    pub fn remove(&mut self, serial_number: &SerialNumber) -> DomainResult<Container> {
        let position = self
            .index
            .remove(serial_number)
            .ok_or_else(|| DomainError::not_found(serial_number))?;
        let container = self.containers.remove(position);
        self.reindex_from(position);
        tracing::info!(serial_number = %serial_number, "container removed from storage");
        Ok(container)
    }

    /// Put `new_container` where the container with `serial_number` was and return
    /// the replaced container.
    pub fn replace(
        &mut self,
        serial_number: &SerialNumber,
        new_container: Container,
    ) -> DomainResult<Container> {
        let position = *self
            .index
            .get(serial_number)
            .ok_or_else(|| DomainError::not_found(serial_number))?;

        let new_serial = new_container.serial_number().clone();
        if new_serial != *serial_number && self.index.contains_key(&new_serial) {
            return Err(DomainError::duplicate(&new_serial));
        }

        let old = std::mem::replace(&mut self.containers[position], new_container);
        self.index.remove(serial_number);
        self.index.insert(new_serial.clone(), position);
        tracing::info!(
            serial_number = %serial_number,
            replacement = %new_serial,
            "container replaced in storage"
        );
        Ok(old)
    }

    /// Empty the storage, handing back everything it held.
    pub fn clear(&mut self) -> Vec<Container> {
        self.index.clear();
        let removed = std::mem::take(&mut self.containers);
        tracing::info!(removed = removed.len(), "storage emptied");
        removed
    }

    /// Move a container into `destination`.
    ///
    /// The destination is checked before anything is removed, so a failed move
    /// leaves both storages untouched.
    pub fn transfer_to(
        &mut self,
        serial_number: &SerialNumber,
        destination: &mut Storage,
    ) -> DomainResult<()> {
        if !self.contains(serial_number) {
            return Err(DomainError::not_found(serial_number));
        }
        if destination.contains(serial_number) {
            return Err(DomainError::duplicate(serial_number));
        }
        let container = self.remove(serial_number)?;
        destination.add(container)
    }

    pub fn get(&self, serial_number: &SerialNumber) -> Option<&Container> {
        self.index.get(serial_number).map(|&i| &self.containers[i])
    }

    pub fn get_mut(&mut self, serial_number: &SerialNumber) -> Option<&mut Container> {
        let position = *self.index.get(serial_number)?;
        self.containers.get_mut(position)
    }

    pub fn contains(&self, serial_number: &SerialNumber) -> bool {
        self.index.contains_key(serial_number)
    }

    pub fn position(&self, serial_number: &SerialNumber) -> Option<usize> {
        self.index.get(serial_number).copied()
    }

    pub fn get_index(&self, position: usize) -> Option<&Container> {
        self.containers.get(position)
    }

    pub fn get_index_mut(&mut self, position: usize) -> Option<&mut Container> {
        self.containers.get_mut(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter()
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Sum of dry + loaded mass of every held container.
    pub fn total_mass(&self) -> f64 {
        self.containers.iter().map(Container::total_mass).sum()
    }

    fn reindex_from(&mut self, start: usize) {
        for (position, container) in self.containers.iter().enumerate().skip(start) {
            self.index.insert(container.id().clone(), position);
        }
    }
}

impl<'a> IntoIterator for &'a Storage {
    type Item = &'a Container;
    type IntoIter = std::slice::Iter<'a, Container>;

    fn into_iter(self) -> Self::IntoIter {
        self.containers.iter()
    }
}
