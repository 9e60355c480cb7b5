//! Console front end: reports, the interactive menu and the scripted walkthrough.

pub mod cli;
pub mod demo;
pub mod menu;
pub mod report;

pub use menu::Menu;
