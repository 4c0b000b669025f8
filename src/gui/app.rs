//! Policy Explorer Main Application
//! Main window with the parameter menu, page area and status bar.

use crate::backend::PolicyBackend;
use crate::config::AppConfig;
use crate::data::{DocumentLoader, Metadata};
use crate::gui::home::{HomePage, Page};
use crate::gui::household_panel::{HouseholdAction, HouseholdPanel};
use crate::gui::impact_viewer::ImpactViewer;
use crate::gui::menu_panel::{MenuAction, MenuPanel};
use crate::gui::parameter_editor::{EditorAction, ParameterEdit, ParameterEditor};
use crate::household::{ChildRules, Household};
use crate::impact::Impact;
use crate::menu::MenuTree;
use crate::policy::Reform;
use crate::query::{SearchParams, FOCUS, HOUSEHOLD, REFORM};
use crate::theme::Theme;
use egui::{RichText, SidePanel, TopBottomPanel};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

/// Kind of document to read in the background
#[derive(Debug, Clone, Copy)]
enum DocumentKind {
    Metadata,
    Impact,
    Household,
}

/// Document loading result from background thread
enum LoadResult {
    Metadata(Metadata, PathBuf),
    Impact(Impact),
    Household(Household),
    Error(String),
    Done,
}

/// Backend result from background thread
enum BackendResult {
    Policy { id: String, reform: Reform },
    Household { id: String, household: Household },
    Error(String),
}

/// Main application window.
pub struct PolicyExplorerApp {
    config: AppConfig,
    theme: Theme,
    loader: DocumentLoader,
    backend: Arc<dyn PolicyBackend>,

    page: Page,
    menu: MenuPanel,
    menu_tree: MenuTree,
    editor: ParameterEditor,
    impact_viewer: ImpactViewer,

    search: SearchParams,
    reform: Reform,
    household: Option<Household>,
    status: String,

    // Async document loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,

    // Async backend submission
    backend_rx: Option<Receiver<BackendResult>>,
    is_submitting: bool,
}

impl PolicyExplorerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        backend: Arc<dyn PolicyBackend>,
    ) -> Self {
        let mut app = Self {
            editor: ParameterEditor::new(config.reform_start, config.reform_end),
            config,
            theme: Theme::default(),
            loader: DocumentLoader::new(),
            backend,
            page: Page::Home,
            menu: MenuPanel::new(),
            menu_tree: MenuTree::default(),
            impact_viewer: ImpactViewer::new(),
            search: SearchParams::new(),
            reform: Reform::default(),
            household: None,
            status: "Ready".to_string(),
            load_rx: None,
            is_loading: false,
            backend_rx: None,
            is_submitting: false,
        };

        let startup: Vec<(DocumentKind, PathBuf)> = [
            (DocumentKind::Metadata, app.config.metadata_path.clone()),
            (DocumentKind::Household, app.config.household_path.clone()),
            (DocumentKind::Impact, app.config.impact_path.clone()),
        ]
        .into_iter()
        .filter_map(|(kind, path)| path.map(|p| (kind, p)))
        .collect();
        if !startup.is_empty() {
            app.start_loading(startup);
        }

        app
    }

    fn selected(&self) -> &str {
        self.search.get(FOCUS).unwrap_or("")
    }

    /// Ask for a file, then load it in the background.
    fn handle_open(&mut self, kind: DocumentKind) {
        if self.is_loading {
            return; // Already loading
        }

        let title = match kind {
            DocumentKind::Metadata => "Open metadata",
            DocumentKind::Impact => "Open impact results",
            DocumentKind::Household => "Open household",
        };
        if let Some(path) = rfd::FileDialog::new()
            .set_title(title)
            .add_filter("JSON Files", &["json"])
            .pick_file()
        {
            self.start_loading(vec![(kind, path)]);
        }
    }

    /// Read documents on a background thread, in order.
    fn start_loading(&mut self, requests: Vec<(DocumentKind, PathBuf)>) {
        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        self.is_loading = true;
        self.status = "Loading...".to_string();

        thread::spawn(move || {
            for (kind, path) in requests {
                let result = match kind {
                    DocumentKind::Metadata => DocumentLoader::read_metadata(&path)
                        .map(|meta| LoadResult::Metadata(meta, path.clone())),
                    DocumentKind::Impact => {
                        DocumentLoader::load_impact(&path).map(LoadResult::Impact)
                    }
                    DocumentKind::Household => {
                        DocumentLoader::load_household(&path).map(LoadResult::Household)
                    }
                };
                let message = result.unwrap_or_else(|e| LoadResult::Error(e.to_string()));
                if tx.send(message).is_err() {
                    return;
                }
            }
            let _ = tx.send(LoadResult::Done);
        });
    }

    /// Check for document loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Metadata(metadata, path) => self.apply_metadata(metadata, path),
                    LoadResult::Impact(impact) => {
                        self.impact_viewer.set_impact(impact);
                        self.status = "Impact results loaded".to_string();
                    }
                    LoadResult::Household(household) => {
                        tracing::info!(people = household.people.len(), "household loaded");
                        self.household = Some(household);
                        self.status = "Household loaded".to_string();
                    }
                    LoadResult::Error(error) => {
                        tracing::warn!(%error, "document load failed");
                        self.status = format!("Error: {}", error);
                    }
                    LoadResult::Done => {
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    fn apply_metadata(&mut self, metadata: Metadata, path: PathBuf) {
        tracing::info!(
            path = %path.display(),
            country = %metadata.country_id,
            "metadata applied"
        );
        self.menu_tree = metadata.menu_tree();
        self.menu.state.reset();
        self.impact_viewer.clear();
        self.reform = Reform::default();
        self.search = SearchParams::new();
        self.household = Some(Household::starting(metadata.country_id, &self.config.year));
        let parameters = metadata.parameters.len();
        let country = metadata.country_id;
        self.loader.set_metadata(metadata, path);

        let file_name = self
            .loader
            .file_path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.status = format!(
            "Loaded {} parameters for {} from {}",
            parameters, country, file_name
        );
    }

    /// Run a backend call on a background thread.
    fn submit<F>(&mut self, call: F)
    where
        F: FnOnce(&dyn PolicyBackend) -> BackendResult + Send + 'static,
    {
        if self.is_submitting {
            return;
        }
        let (tx, rx) = channel();
        self.backend_rx = Some(rx);
        self.is_submitting = true;
        self.status = "Submitting...".to_string();

        let backend = Arc::clone(&self.backend);
        thread::spawn(move || {
            let _ = tx.send(call(backend.as_ref()));
        });
    }

    fn handle_parameter_edit(&mut self, edit: ParameterEdit) {
        let Some(country) = self.loader.metadata().map(|m| m.country_id) else {
            return;
        };
        tracing::info!(
            parameter = %edit.parameter,
            period = %edit.period,
            value = %edit.value,
            "reform edited"
        );
        let reform = edit.apply(&self.reform);
        self.submit(move |backend| match backend.new_policy_id(country, &reform) {
            Ok(id) => BackendResult::Policy { id, reform },
            Err(e) => BackendResult::Error(e.to_string()),
        });
    }

    fn handle_set_children(&mut self, count: usize) {
        let Some(metadata) = self.loader.metadata() else {
            return;
        };
        let Some(household) = self.household.clone() else {
            return;
        };
        let country = metadata.country_id;
        let rules = ChildRules::for_country(country);

        match rules.set_count_children(
            household,
            count,
            &metadata.variables,
            &metadata.entities,
            &self.config.year,
        ) {
            Ok(household) => {
                self.submit(move |backend| match backend.new_household_id(country, &household) {
                    Ok(id) => BackendResult::Household { id, household },
                    Err(e) => BackendResult::Error(e.to_string()),
                });
            }
            Err(e) => self.status = format!("Error: {}", e),
        }
    }

    /// Check for backend results
    fn check_backend_results(&mut self) {
        let rx = self.backend_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    BackendResult::Policy { id, reform } => {
                        self.reform = reform;
                        self.search = self.search.with(REFORM, id.as_str());
                        self.status = format!("Reform saved as policy {}", id);
                    }
                    BackendResult::Household { id, household } => {
                        self.household = Some(household);
                        self.search = self.search.with(HOUSEHOLD, id.as_str());
                        self.status = format!("Household saved as {}", id);
                    }
                    BackendResult::Error(error) => {
                        tracing::warn!(%error, "backend call failed");
                        self.status = format!("Error: {}", error);
                    }
                }
                self.is_submitting = false;
                should_keep_receiver = false;
            }

            if should_keep_receiver {
                self.backend_rx = Some(rx);
            }
        }
    }

    fn show_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Policy Explorer")
                    .size(18.0)
                    .strong()
                    .color(self.theme.accent),
            );
            ui.separator();
            for (page, label) in [
                (Page::Home, "Home"),
                (Page::Household, "Household"),
                (Page::Policy, "Policy"),
                (Page::Impact, "Impact"),
            ] {
                ui.selectable_value(&mut self.page, page, label);
            }
            ui.separator();
            ui.add_enabled_ui(!self.is_loading, |ui| {
                if ui.button("📂 Metadata").clicked() {
                    self.handle_open(DocumentKind::Metadata);
                }
                if ui.button("📂 Household").clicked() {
                    self.handle_open(DocumentKind::Household);
                }
                if ui.button("📂 Impact").clicked() {
                    self.handle_open(DocumentKind::Impact);
                }
            });
        });
    }

    fn show_status_bar(&self, ui: &mut egui::Ui) {
        let status_color = if self.status.starts_with("Error") {
            self.theme.error
        } else {
            self.theme.dark_gray
        };
        ui.horizontal(|ui| {
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
            let query = self.search.to_query_string();
            if !query.is_empty() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(format!("?{}", query)).size(11.0).monospace());
                });
            }
        });
    }

    fn show_policy_page(&mut self, ui: &mut egui::Ui) {
        let Some(metadata) = self.loader.metadata() else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Open a metadata file to edit policy").size(20.0));
            });
            return;
        };
        let selected = self.search.get(FOCUS).unwrap_or("");
        let Some(parameter) = metadata.parameter(selected) else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Select a parameter from the menu").size(20.0));
            });
            return;
        };

        if let EditorAction::Submit(edit) =
            self.editor.show(ui, parameter, &self.reform, &self.theme)
        {
            self.handle_parameter_edit(edit);
        }
    }

    fn show_household_page(&mut self, ui: &mut egui::Ui) {
        let (Some(metadata), Some(household)) = (self.loader.metadata(), &self.household) else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Open a metadata file to describe a household").size(20.0));
            });
            return;
        };
        let rules = ChildRules::for_country(metadata.country_id);
        if let HouseholdAction::SetChildren(count) =
            HouseholdPanel::show(ui, &rules, household, &self.config.year, &self.theme)
        {
            self.handle_set_children(count);
        }
    }
}

impl eframe::App for PolicyExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();
        self.check_backend_results();

        // Request repaint while loading or submitting
        if self.is_loading || self.is_submitting {
            ctx.request_repaint();
        }

        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.show_top_bar(ui);
        });

        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.show_status_bar(ui);
        });

        // Left panel - Parameter menu
        if self.page == Page::Policy {
            SidePanel::left("parameter_menu")
                .min_width(260.0)
                .max_width(360.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        let selected = self.selected().to_string();
                        let action = self.menu.show(ui, &self.menu_tree, &selected, &self.theme);
                        match action {
                            MenuAction::Select(name) => {
                                tracing::debug!(parameter = %name, "parameter selected");
                                self.search = self.search.with(FOCUS, name);
                            }
                            MenuAction::Toggled(_) | MenuAction::None => {}
                        }
                    });
                });
        }

        // Central panel - Current page
        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Home => {
                if let Some(page) = HomePage::show(ui, &self.theme) {
                    self.page = page;
                }
            }
            Page::Household => self.show_household_page(ui),
            Page::Policy => {
                egui::ScrollArea::vertical().show(ui, |ui| self.show_policy_page(ui));
            }
            Page::Impact => {
                self.impact_viewer
                    .show(ui, &self.config.policy_label, &self.theme);
            }
        });
    }
}
