pub mod event_grid;
