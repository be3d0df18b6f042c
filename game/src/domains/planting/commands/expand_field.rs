use crate::planting::Planting::FieldExpanded;
use crate::planting::PlantingError::FieldAtMaxSize;
use crate::planting::{Planting, PlantingDomain, PlantingError, Plot};

impl PlantingDomain {
    pub fn expand_field(
        &mut self,
        max: usize,
    ) -> Result<impl FnOnce() -> Vec<Planting> + '_, PlantingError> {
        if self.size >= max {
            return Err(FieldAtMaxSize { max });
        }
        let command = move || {
            for row in self.grid.iter_mut() {
                row.push(Plot::default());
            }
            self.size += 1;
            self.grid.push(vec![Plot::default(); self.size]);
            vec![FieldExpanded { size: self.size }]
        };
        Ok(command)
    }
}
