pub mod modes_controller;
pub mod static_controller;
pub mod system_controller;
pub mod translate_controller;
