mod schema_printer_tests;
mod test_utils;
