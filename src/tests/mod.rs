mod boundary_tests;
mod decimal_tests;
pub mod test_utils;
