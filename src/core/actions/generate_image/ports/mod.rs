pub mod escape_kernel;
