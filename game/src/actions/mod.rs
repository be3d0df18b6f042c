mod buy_item;
mod buy_upgrade;
mod clear_plot;
mod dig_plot;
mod fertilize_plot;
mod harvest_plot;
mod rename_farm;
mod sell_potatoes;
mod sow_plot;
mod use_tool;
mod water_plot;
