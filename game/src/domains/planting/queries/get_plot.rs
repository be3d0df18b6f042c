use crate::math::{Tile, TileMath};
use crate::planting::{PlantingDomain, PlantingError, Plot};

impl PlantingDomain {
    pub fn get_plot(&self, tile: Tile) -> Result<&Plot, PlantingError> {
        if !tile.inside(self.size) {
            return Err(PlantingError::PlotNotFound { tile });
        }
        let [x, y] = tile;
        Ok(&self.grid[y][x])
    }

    pub fn get_plot_mut(&mut self, tile: Tile) -> Result<&mut Plot, PlantingError> {
        if !tile.inside(self.size) {
            return Err(PlantingError::PlotNotFound { tile });
        }
        let [x, y] = tile;
        Ok(&mut self.grid[y][x])
    }

    pub fn plots(&self) -> impl Iterator<Item = (Tile, &Plot)> {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, plot)| ([x, y], plot))
        })
    }
}
