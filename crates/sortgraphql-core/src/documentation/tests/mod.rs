mod source_text_tests;
