//! Scripted walkthrough of the whole container lifecycle.

use std::io::Write;

use anyhow::Result;

use kontener_inventory::{Cargo, Container, ContainerKind, Dimensions, Ship, Storage};

use crate::report;

/// Run the walkthrough, writing reports to `out`. With `json` the container
/// reports are emitted as JSON instead of tables.
pub fn run<W: Write>(out: &mut W, json: bool) -> Result<()> {
    writeln!(out, "=== CONTAINER MANAGEMENT WALKTHROUGH ===")?;

    writeln!(out, "\n--- Creating containers ---")?;
    let mut warehouse = Storage::new();
    let regular = warehouse
        .create_container(
            ContainerKind::Standard,
            Dimensions::new(1000.0, 250.0, 300.0, 600.0)?,
        )?
        .serial_number()
        .clone();
    let mut liquid = Container::with_serial_number(
        ContainerKind::Liquid,
        Dimensions::new(800.0, 200.0, 250.0, 500.0)?,
        "KON-LIQ-001",
    )?;
    let mut gas = Container::with_serial_number(
        ContainerKind::Gas,
        Dimensions::new(500.0, 180.0, 200.0, 450.0)?,
        "KON-GAS-001",
    )?;
    let mut chilled = Container::with_serial_number(
        ContainerKind::chilled("Frozen Food", -18.0)?,
        Dimensions::new(1200.0, 280.0, 350.0, 650.0)?,
        "KON-CHL-001",
    )?;
    writeln!(
        out,
        "Created {regular}, {}, {}, {}",
        liquid.serial_number(),
        gas.serial_number(),
        chilled.serial_number()
    )?;

    writeln!(out, "\n--- Loading cargo ---")?;
    let mut regular_container = warehouse.remove(&regular)?;
    regular_container.load_container(Cargo::safe(500.0)?)?;
    liquid.load_container(Cargo::safe(400.0)?)?;
    gas.load_container(Cargo::safe(300.0)?)?;
    match chilled.load_chilled(Cargo::safe(600.0)?, "Frozen Food", -20.0) {
        Ok(_) => {}
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    let overfill = regular_container.load_container(Cargo::safe(900.0)?)?;
    writeln!(out, "Overfill attempt on {regular}: {overfill:?}")?;

    writeln!(out, "\n--- Creating ships and loading containers ---")?;
    let mut ship1 = Ship::new(30.0, 10, 10_000.0)?;
    let mut ship2 = Ship::new(25.0, 8, 8_000.0)?;
    let liquid_serial = liquid.serial_number().clone();
    let gas_serial = gas.serial_number().clone();
    ship1.load_container(regular_container)?;
    ship1.load_container_group(vec![liquid, gas])?;

    writeln!(out, "\n--- Removing a container from ship 1 ---")?;
    let liquid = ship1.unload_container(&liquid_serial)?;
    warehouse.add(liquid)?;

    writeln!(out, "\n--- Emptying containers ---")?;
    for serial_number in [&regular, &gas_serial] {
        if let Some(container) = ship1.storage_mut().get_mut(serial_number) {
            container.empty_container();
            writeln!(
                out,
                "{serial_number}: {} kg left",
                container.loaded_mass()
            )?;
        }
    }

    writeln!(out, "\n--- Replacing a container on ship 1 ---")?;
    let replaced = ship1.replace_container(&gas_serial, chilled)?;
    warehouse.add(replaced)?;

    writeln!(out, "\n--- Transferring a container between ships ---")?;
    ship1.transport_container(&regular, &mut ship2)?;

    writeln!(out, "\n--- Container information ---")?;
    let summaries: Vec<_> = ship1
        .storage()
        .iter()
        .chain(ship2.storage().iter())
        .chain(warehouse.iter())
        .map(Container::describe)
        .collect();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
    } else {
        for summary in &summaries {
            writeln!(out, "{}", report::render_container(summary))?;
        }
    }

    writeln!(out, "\n--- Ship information ---")?;
    write!(out, "{}", report::render_ship_manifest("Ship 1", &ship1))?;
    write!(out, "{}", report::render_ship_manifest("Ship 2", &ship2))?;

    writeln!(out, "\n--- Warehouse ---")?;
    write!(out, "{}", report::render_storage_listing(&warehouse))?;

    tracing::info!(
        ship1 = ship1.storage().len(),
        ship2 = ship2.storage().len(),
        warehouse = warehouse.len(),
        "walkthrough finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkthrough_moves_containers_where_expected() {
        let mut out = Vec::new();
        run(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Overfill attempt on KON-C-"));
        assert!(text.contains("Rejected"));
        assert!(text.contains("KON-GAS-001: 15 kg left"));
        // Ship 1 ends up with only the chilled container that replaced the gas one.
        assert!(text.contains("  1. Container KON-CHL-001 - 950 kg"));
        assert!(text.contains("0. Serial number: KON-LIQ-001"));
        assert!(text.contains("1. Serial number: KON-GAS-001"));
        assert!(text.contains("| Cargo Type    | Frozen Food"));
    }

    #[test]
    fn walkthrough_can_emit_json_summaries() {
        let mut out = Vec::new();
        run(&mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\"serial_number\": \"KON-CHL-001\""));
        assert!(text.contains("\"container_type\": \"GasContainer\""));
        assert!(!text.contains("| Property"));
    }
}
