mod input_object_type_validator_tests;
mod object_type_builder_tests;
