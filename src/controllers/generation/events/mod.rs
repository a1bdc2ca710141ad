pub mod generation_event;
