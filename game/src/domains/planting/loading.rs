use crate::planting::{PlantingDomain, Plot};

impl PlantingDomain {
    pub fn load_field(&mut self, grid: Vec<Vec<Plot>>, size: usize) {
        self.grid = grid;
        self.size = size;
    }
}
