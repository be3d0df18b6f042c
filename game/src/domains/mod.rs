pub mod economy;
pub mod planting;
pub mod timing;
pub mod weather;
