//! Interactive text menu over the inventory core.
//!
//! The menu owns a warehouse [`Storage`] and a fleet of [`Ship`]s and drives them
//! only through their public operations. Input and output are generic so a
//! session can be scripted in tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;

use kontener_core::SerialNumber;
use kontener_inventory::{Cargo, ContainerKind, Dimensions, LoadOutcome, Ship, Storage};

use crate::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    warehouse: Storage,
    ships: Vec<Ship>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            warehouse: Storage::new(),
            ships: Vec::new(),
        }
    }

    pub fn warehouse(&self) -> &Storage {
        &self.warehouse
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Output written so far (e.g. to inspect a scripted session).
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_header()?;
            let Some(choice) = self.ask("\nChoose an action: ")? else {
                writeln!(self.output)?;
                break;
            };
            if self.dispatch(choice.as_str())? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    fn print_header(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== CONTAINER MANAGEMENT SYSTEM ===")?;
        writeln!(self.output, "\nContainers in warehouse:")?;
        write!(self.output, "{}", report::render_storage_listing(&self.warehouse))?;
        writeln!(self.output, "\nActions:")?;
        writeln!(self.output, "1. Add container")?;
        writeln!(self.output, "2. Remove container")?;
        writeln!(self.output, "3. Modify container")?;
        writeln!(self.output, "4. Show container details")?;
        writeln!(self.output, "5. Add ship")?;
        writeln!(self.output, "6. Load container onto ship")?;
        writeln!(self.output, "7. Transfer container between ships")?;
        writeln!(self.output, "8. Ship overview")?;
        writeln!(self.output, "9. Exit")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.add_container()?,
            "2" => self.remove_container()?,
            "3" => self.modify_container()?,
            "4" => self.show_container()?,
            "5" => self.add_ship()?,
            "6" => self.load_onto_ship()?,
            "7" => self.transfer_between_ships()?,
            "8" => self.ship_overview()?,
            "9" | "q" => {
                writeln!(self.output, "Thank you for using the system. Goodbye!")?;
                return Ok(Flow::Exit);
            }
            _ => writeln!(self.output, "Invalid action. Try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn add_container(&mut self) -> Result<()> {
        writeln!(self.output, "Container types:")?;
        writeln!(self.output, "1. Standard container")?;
        writeln!(self.output, "2. Container for liquids")?;
        writeln!(self.output, "3. Gas container")?;
        writeln!(self.output, "4. Chilled container")?;
        let Some(choice) = self.ask("Choose a container type: ")? else {
            return Ok(());
        };
        if !matches!(choice.as_str(), "1" | "2" | "3" | "4") {
            writeln!(self.output, "Invalid choice. Try again.")?;
            return Ok(());
        }

        let Some(capacity) = self.ask_parsed::<f64>("Capacity (kg): ")? else {
            return Ok(());
        };
        let Some(height) = self.ask_parsed::<f64>("Height (cm): ")? else {
            return Ok(());
        };
        let Some(dry_mass) = self.ask_parsed::<f64>("Dry mass (kg): ")? else {
            return Ok(());
        };
        let Some(depth) = self.ask_parsed::<f64>("Depth (cm): ")? else {
            return Ok(());
        };

        let kind = match choice.as_str() {
            "1" => Ok(ContainerKind::Standard),
            "2" => Ok(ContainerKind::Liquid),
            "3" => Ok(ContainerKind::Gas),
            _ => {
                let Some(type_of_cargo) = self.ask("Cargo type: ")? else {
                    return Ok(());
                };
                let Some(temperature) = self.ask_parsed::<f64>("Temperature (°C): ")? else {
                    return Ok(());
                };
                ContainerKind::chilled(type_of_cargo, temperature)
            }
        };

        let created = kind.and_then(|kind| {
            let dimensions = Dimensions::new(capacity, height, dry_mass, depth)?;
            let container = self.warehouse.create_container(kind, dimensions)?;
            Ok(container.serial_number().clone())
        });
        match created {
            Ok(serial_number) => writeln!(self.output, "Added container {serial_number}")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn remove_container(&mut self) -> Result<()> {
        let Some(serial_number) = self.select_warehouse_container("to remove")? else {
            return Ok(());
        };
        match self.warehouse.remove(&serial_number) {
            Ok(_) => writeln!(self.output, "Removed container {serial_number}")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn modify_container(&mut self) -> Result<()> {
        let Some(serial_number) = self.select_warehouse_container("to modify")? else {
            return Ok(());
        };
        writeln!(self.output, "Modifying container {serial_number}")?;
        writeln!(self.output, "1. Load cargo")?;
        writeln!(self.output, "2. Empty container")?;
        let Some(action) = self.ask("Choose an action: ")? else {
            return Ok(());
        };
        match action.as_str() {
            "1" => self.load_cargo(&serial_number),
            "2" => {
                if let Some(container) = self.warehouse.get_mut(&serial_number) {
                    container.empty_container();
                    writeln!(
                        self.output,
                        "Container emptied. Current mass: {} kg",
                        container.loaded_mass()
                    )?;
                }
                Ok(())
            }
            _ => {
                writeln!(self.output, "Invalid action.")?;
                Ok(())
            }
        }
    }

    fn load_cargo(&mut self, serial_number: &SerialNumber) -> Result<()> {
        let Some(mass) = self.ask_parsed::<f64>("Cargo mass (kg): ")? else {
            return Ok(());
        };
        let Some(safe) = self.ask("Is the cargo safe? [y/n]: ")? else {
            return Ok(());
        };
        let safe = matches!(safe.to_ascii_lowercase().as_str(), "y" | "yes");

        let is_chilled = self
            .warehouse
            .get(serial_number)
            .is_some_and(|c| c.chilled_profile().is_some());
        let requirements = if is_chilled {
            let Some(type_of_cargo) = self.ask("Cargo type: ")? else {
                return Ok(());
            };
            let Some(temperature) = self.ask_parsed::<f64>("Required temperature (°C): ")? else {
                return Ok(());
            };
            Some((type_of_cargo, temperature))
        } else {
            None
        };

        let Some(container) = self.warehouse.get_mut(serial_number) else {
            return Ok(());
        };
        let outcome = Cargo::new(safe, mass).and_then(|cargo| match &requirements {
            Some((type_of_cargo, temperature)) => {
                container.load_chilled(cargo, type_of_cargo, *temperature)
            }
            None => container.load_container(cargo),
        });

        match outcome {
            Ok(LoadOutcome::Accepted { loaded_mass }) => writeln!(
                self.output,
                "Loaded {mass} kg. Current mass: {loaded_mass} kg"
            )?,
            Ok(LoadOutcome::Rejected { hazard, .. }) => writeln!(
                self.output,
                "Warning! Container {serial_number} has suffered a hazard: {hazard}"
            )?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn show_container(&mut self) -> Result<()> {
        let Some(serial_number) = self.select_warehouse_container("to show")? else {
            return Ok(());
        };
        if let Some(container) = self.warehouse.get(&serial_number) {
            write!(self.output, "{}", report::render_container(&container.describe()))?;
        }
        Ok(())
    }

    fn add_ship(&mut self) -> Result<()> {
        let Some(max_speed) = self.ask_parsed::<f64>("Max speed (knots): ")? else {
            return Ok(());
        };
        let Some(capacity) = self.ask_parsed::<usize>("Capacity (containers): ")? else {
            return Ok(());
        };
        let Some(max_tonnage) = self.ask_parsed::<f64>("Max tonnage (kg): ")? else {
            return Ok(());
        };
        match Ship::new(max_speed, capacity, max_tonnage) {
            Ok(ship) => {
                self.ships.push(ship);
                writeln!(self.output, "Added ship {}", self.ships.len() - 1)?;
            }
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn load_onto_ship(&mut self) -> Result<()> {
        let Some(serial_number) = self.select_warehouse_container("to load")? else {
            return Ok(());
        };
        let Some(ship) = self.select_ship("Ship number: ")? else {
            return Ok(());
        };
        match self
            .warehouse
            .transfer_to(&serial_number, self.ships[ship].storage_mut())
        {
            Ok(()) => writeln!(self.output, "Loaded container {serial_number} onto ship {ship}")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn transfer_between_ships(&mut self) -> Result<()> {
        if self.ships.len() < 2 {
            writeln!(self.output, "At least two ships are needed for a transfer.")?;
            return Ok(());
        }
        let Some(from) = self.select_ship("Source ship number: ")? else {
            return Ok(());
        };
        let listing = report::render_storage_listing(self.ships[from].storage());
        write!(self.output, "{listing}")?;
        let Some(index) = self.ask_parsed::<usize>("Container number: ")? else {
            return Ok(());
        };
        let Some(serial_number) = self.ships[from]
            .storage()
            .get_index(index)
            .map(|c| c.serial_number().clone())
        else {
            writeln!(self.output, "Invalid container number.")?;
            return Ok(());
        };
        let Some(to) = self.select_ship("Destination ship number: ")? else {
            return Ok(());
        };
        let Some((source, destination)) = pair_mut(&mut self.ships, from, to) else {
            writeln!(self.output, "Source and destination must differ.")?;
            return Ok(());
        };
        match source.transport_container(&serial_number, destination) {
            Ok(()) => writeln!(
                self.output,
                "Transferred container {serial_number} from ship {from} to ship {to}"
            )?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }

    fn ship_overview(&mut self) -> Result<()> {
        if self.ships.is_empty() {
            writeln!(self.output, "No ships available.")?;
            return Ok(());
        }
        for (i, ship) in self.ships.iter().enumerate() {
            write!(
                self.output,
                "{}",
                report::render_ship_manifest(&format!("Ship {i}"), ship)
            )?;
        }
        Ok(())
    }

    fn select_warehouse_container(&mut self, purpose: &str) -> Result<Option<SerialNumber>> {
        if self.warehouse.is_empty() {
            writeln!(self.output, "No containers in storage.")?;
            return Ok(None);
        }
        write!(self.output, "{}", report::render_storage_listing(&self.warehouse))?;
        let Some(index) = self.ask_parsed::<usize>(&format!("Container number {purpose}: "))? else {
            return Ok(None);
        };
        match self.warehouse.get_index(index) {
            Some(container) => Ok(Some(container.serial_number().clone())),
            None => {
                writeln!(self.output, "Invalid container number.")?;
                Ok(None)
            }
        }
    }

    fn select_ship(&mut self, label: &str) -> Result<Option<usize>> {
        if self.ships.is_empty() {
            writeln!(self.output, "No ships available.")?;
            return Ok(None);
        }
        let Some(index) = self.ask_parsed::<usize>(label)? else {
            return Ok(None);
        };
        if index < self.ships.len() {
            Ok(Some(index))
        } else {
            writeln!(self.output, "Invalid ship number.")?;
            Ok(None)
        }
    }

    /// Prompt and read one trimmed line; `None` once input is exhausted.
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_parsed<T: FromStr>(&mut self, label: &str) -> Result<Option<T>> {
        let Some(raw) = self.ask(label)? else {
            return Ok(None);
        };
        match raw.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "Invalid input: {raw:?}. Try again.")?;
                Ok(None)
            }
        }
    }
}

/// Two distinct mutable ships out of the fleet.
fn pair_mut(ships: &mut [Ship], a: usize, b: usize) -> Option<(&mut Ship, &mut Ship)> {
    if a == b || a >= ships.len() || b >= ships.len() {
        return None;
    }
    if a < b {
        let (left, right) = ships.split_at_mut(b);
        Some((&mut left[a], &mut right[0]))
    } else {
        let (left, right) = ships.split_at_mut(a);
        Some((&mut right[0], &mut left[b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_mut_returns_ships_in_requested_order() {
        let mut ships = vec![
            Ship::new(10.0, 1, 100.0).unwrap(),
            Ship::new(20.0, 1, 100.0).unwrap(),
        ];
        let (a, b) = pair_mut(&mut ships, 1, 0).unwrap();
        assert_eq!(a.max_speed(), 20.0);
        assert_eq!(b.max_speed(), 10.0);
        assert!(pair_mut(&mut ships, 0, 0).is_none());
        assert!(pair_mut(&mut ships, 0, 2).is_none());
    }
}
