pub mod switcher;
