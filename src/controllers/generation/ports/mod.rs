pub mod completion_port;
