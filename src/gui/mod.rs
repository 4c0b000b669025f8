//! GUI module - User interface components

mod app;
mod home;
mod household_panel;
mod impact_viewer;
mod menu_panel;
mod parameter_editor;
mod results_panel;

pub use app::PolicyExplorerApp;
pub use home::{HomePage, Page};
pub use household_panel::{HouseholdAction, HouseholdPanel};
pub use impact_viewer::ImpactViewer;
pub use menu_panel::{MenuAction, MenuPanel};
pub use parameter_editor::{EditorAction, ParameterEdit, ParameterEditor};
pub use results_panel::ResultsPanel;
