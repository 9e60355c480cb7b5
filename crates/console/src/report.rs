//! Plain-text reports: grid tables, warehouse listings and ship manifests.

use std::fmt::Write as _;

use kontener_inventory::{ContainerSummary, Ship, Storage};

/// Grid table in the style of
///
/// ```text
/// +----------+-------+
/// | Property | Value |
/// +==========+=======+
/// | Type     | Gas   |
/// +----------+-------+
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn render(&self) -> String {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0usize; columns];
        for line in std::iter::once(&self.headers).chain(&self.rows) {
            for (i, cell) in line.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let border = |fill: char| {
            let mut s = String::from("+");
            for w in &widths {
                s.extend(std::iter::repeat_n(fill, w + 2));
                s.push('+');
            }
            s.push('\n');
            s
        };
        let line = |cells: &[String]| {
            let mut s = String::from("|");
            for (i, w) in widths.iter().enumerate() {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = w - cell.chars().count();
                let _ = write!(s, " {cell}{} |", " ".repeat(pad));
            }
            s.push('\n');
            s
        };

        let mut out = border('-');
        out.push_str(&line(&self.headers));
        out.push_str(&border('='));
        for row in &self.rows {
            out.push_str(&line(row));
            out.push_str(&border('-'));
        }
        out
    }
}

/// Property table of a container, followed by its cargo listing when it holds any.
pub fn render_container(summary: &ContainerSummary) -> String {
    let mut properties = Table::new(["Property", "Value"]);
    properties
        .row(["Serial Number".to_string(), summary.serial_number.to_string()])
        .row(["Type", summary.container_type])
        .row(["Capacity".to_string(), format!("{} kg", summary.capacity)])
        .row([
            "Loaded Mass".to_string(),
            format!("{} kg ({:.2}%)", summary.loaded_mass, summary.fill_percent),
        ])
        .row(["Height".to_string(), format!("{} cm", summary.height)])
        .row(["Depth".to_string(), format!("{} cm", summary.depth)])
        .row(["Dry Mass".to_string(), format!("{} kg", summary.dry_mass)])
        .row(["Total Mass".to_string(), format!("{} kg", summary.total_mass)]);

    if let Some(profile) = &summary.chilled {
        properties
            .row(["Cargo Type", profile.type_of_cargo()])
            .row(["Temperature".to_string(), format!("{}°C", profile.temperature())]);
    }

    let mut out = properties.render();

    if !summary.cargo.is_empty() {
        let mut cargo = Table::new(["Item #", "Mass (kg)", "Safety Status"]);
        for line in &summary.cargo {
            cargo.row([
                line.item.to_string(),
                line.mass.to_string(),
                line.safety.to_string(),
            ]);
        }
        out.push_str("\nCargo Contents:\n");
        out.push_str(&cargo.render());
    }

    out
}

/// Numbered listing of a storage's containers.
pub fn render_storage_listing(storage: &Storage) -> String {
    if storage.is_empty() {
        return "No containers in storage.\n".to_string();
    }
    let mut out = String::new();
    for (i, container) in storage.iter().enumerate() {
        let _ = writeln!(out, "{i}. Serial number: {}", container.serial_number());
        let _ = writeln!(out, "   Type: {}", container.kind().label());
        let _ = writeln!(out, "   Capacity: {} kg", container.capacity());
        let _ = writeln!(out, "   Loaded mass: {} kg", container.loaded_mass());
    }
    out
}

/// Ship limits, derived tonnage and the containers aboard.
pub fn render_ship_manifest(label: &str, ship: &Ship) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{label} - Max Speed: {} knots, Capacity: {} containers, Max Tonnage: {} kg",
        ship.max_speed(),
        ship.capacity(),
        ship.max_tonnage()
    );
    let _ = writeln!(
        out,
        "  Current tonnage: {} kg, free slots: {}{}",
        ship.current_tonnage(),
        ship.free_slots(),
        if ship.is_within_limits() { "" } else { " (LIMITS EXCEEDED)" }
    );
    if ship.storage().is_empty() {
        out.push_str("  No containers aboard.\n");
        return out;
    }
    out.push_str("  Containers aboard:\n");
    for (i, container) in ship.storage().iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. Container {} - {} kg",
            i + 1,
            container.serial_number(),
            container.total_mass()
        );
    }
    out
}
