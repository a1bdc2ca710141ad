pub mod completion_data;
pub mod generation_settings;
