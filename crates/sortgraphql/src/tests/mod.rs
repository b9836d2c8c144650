mod sort_cmd_tests;
mod test_utils;
