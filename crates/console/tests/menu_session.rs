//! Black-box menu sessions driven by scripted input.

use kontener_console::Menu;

fn run_session(script: &str) -> (String, Menu<&[u8], Vec<u8>>) {
    let mut menu = Menu::new(script.as_bytes(), Vec::new());
    menu.run().unwrap();
    let output = String::from_utf8(menu.output().clone()).unwrap();
    (output, menu)
}

#[test]
fn load_overfill_and_ship_a_container() {
    let script = "\
1\n1\n1000\n200\n500\n100\n\
3\n0\n1\n200\ny\n\
3\n0\n1\n900\ny\n\
5\n30\n10\n10000\n\
6\n0\n0\n\
8\n\
9\n";
    let (output, menu) = run_session(script);

    assert!(output.contains("Added container KON-C-"));
    assert!(output.contains("Loaded 200 kg. Current mass: 200 kg"));
    assert!(output.contains("has suffered a hazard: Overfill"));
    assert!(output.contains("Added ship 0"));
    assert!(output.contains("onto ship 0"));
    assert!(output.contains("Ship 0 - Max Speed: 30 knots"));
    assert!(output.contains("1. Container KON-C-"));
    assert!(output.contains("Goodbye!"));

    assert!(menu.warehouse().is_empty());
    assert_eq!(menu.ships().len(), 1);
    let ship = &menu.ships()[0];
    assert_eq!(ship.storage().len(), 1);
    assert_eq!(ship.storage().get_index(0).unwrap().loaded_mass(), 200.0);
}

#[test]
fn chilled_container_reports_incompatible_cargo() {
    let script = "\
1\n4\n1000\n200\n500\n100\nFruits\n5\n\
3\n0\n1\n100\ny\nVegetables\n5\n\
3\n0\n1\n100\ny\nFruits\n6\n\
3\n0\n1\n100\nn\nFruits\n4\n\
4\n0\n\
q\n";
    let (output, menu) = run_session(script);

    assert!(output.contains("Added container KON-R-"));
    assert!(
        output.contains("Error: incompatible cargo type: expected Fruits, received Vegetables")
    );
    assert!(output.contains("Error: incompatible temperature"));
    assert!(output.contains("Loaded 100 kg. Current mass: 100 kg"));
    assert!(output.contains("| Cargo Type    | Fruits"));
    assert!(output.contains("Hazardous"));
    assert_eq!(menu.warehouse().get_index(0).unwrap().cargo().len(), 1);
}

#[test]
fn gas_container_keeps_residue_after_emptying_and_can_be_removed() {
    let script = "\
1\n3\n1000\n200\n500\n100\n\
3\n0\n1\n500\ny\n\
3\n0\n2\n\
2\n0\n\
9\n";
    let (output, menu) = run_session(script);

    assert!(output.contains("Container emptied. Current mass: 25 kg"));
    assert!(output.contains("Removed container KON-G-"));
    assert!(menu.warehouse().is_empty());
}

#[test]
fn transfer_between_ships_moves_the_container() {
    let script = "\
1\n2\n800\n200\n250\n500\n\
5\n30\n10\n10000\n\
5\n25\n8\n8000\n\
6\n0\n0\n\
7\n0\n0\n1\n\
9\n";
    let (output, menu) = run_session(script);

    assert!(output.contains("from ship 0 to ship 1"));
    assert!(menu.ships()[0].storage().is_empty());
    assert_eq!(menu.ships()[1].storage().len(), 1);
}

#[test]
fn invalid_input_returns_to_the_menu_and_eof_ends_the_session() {
    let script = "\
1\n1\nabc\n\
1\n1\n-5\n200\n500\n100\n\
7\n\
42\n";
    let (output, menu) = run_session(script);

    assert!(output.contains("Invalid input: \"abc\""));
    assert!(output.contains("Error: invalid argument: capacity must be a positive number"));
    assert!(output.contains("At least two ships are needed"));
    assert!(output.contains("Invalid action. Try again."));
    assert!(menu.warehouse().is_empty());
}
