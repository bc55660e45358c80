use shared_types::{Employee, FetchError, ViewMode};

/// The employee currently opened in the detail modal, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    current: Option<Employee>,
}

impl Selection {
    /// No check that `employee` belongs to any particular collection.
    pub fn select(&mut self, employee: Employee) {
        self.current = Some(employee);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Employee> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

/// Open/closed state of the slide-out navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// All session state of the dashboard, held in one signal by the shell.
///
/// Fields are private; every change goes through a method so the
/// collection and the selection cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    employees: Vec<Employee>,
    loading: bool,
    view_mode: ViewMode,
    selection: Selection,
    menu: MenuState,
    last_error: Option<FetchError>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Fresh state: loading, empty, list view, nothing selected, menu closed.
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            loading: true,
            view_mode: ViewMode::default(),
            selection: Selection::default(),
            menu: MenuState::default(),
            last_error: None,
        }
    }

    /// Apply the outcome of a fetch. Loading always ends here.
    ///
    /// Success replaces the collection wholesale; failure leaves it empty.
    /// Either way the selection is dropped since it may point at a record
    /// that is no longer in the collection.
    pub fn finish_load(&mut self, outcome: Result<Vec<Employee>, FetchError>) {
        self.loading = false;
        self.selection.clear();
        match outcome {
            Ok(employees) => {
                self.employees = employees;
                self.last_error = None;
            }
            Err(err) => {
                self.employees.clear();
                self.last_error = Some(err);
            }
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The failure behind an empty directory, kept for diagnostics only.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select(&mut self, employee: Employee) {
        self.selection.select(employee);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The detail modal is shown exactly when something is selected.
    pub fn modal_visible(&self) -> bool {
        self.selection.is_active()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }
}
