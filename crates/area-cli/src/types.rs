use area_model::{AreaCode, DropdownLevel, IndexError, IndexReport, SelectionPath};

#[derive(Debug)]
pub struct CheckOutcome {
    pub tenant: String,
    pub nodes: usize,
    pub types: usize,
    pub roots: usize,
    pub max_depth: usize,
    pub report: IndexReport,
    pub fatal: Option<IndexError>,
}

impl CheckOutcome {
    pub fn has_errors(&self) -> bool {
        self.fatal.is_some() || self.report.has_errors()
    }
}

#[derive(Debug)]
pub struct LevelsOutcome {
    pub levels: Vec<DropdownLevel>,
    pub path: SelectionPath,
    pub leaf: Option<AreaCode>,
    /// Selections performed by auto-advance.
    pub auto_selected: Vec<AreaCode>,
}

#[derive(Debug)]
pub struct PathOutcome {
    pub leaf: String,
    pub selections: Vec<AreaCode>,
    pub path: SelectionPath,
}
