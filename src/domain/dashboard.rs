// Dashboard domain model
use super::chart::LineChart;
use super::repository::Repository;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub repository: Repository,
    pub year: i32,
    pub charts: Vec<LineChart>,
}

impl Dashboard {
    pub fn new(repository: Repository, year: i32, charts: Vec<LineChart>) -> Self {
        Self {
            repository,
            year,
            charts,
        }
    }
}
