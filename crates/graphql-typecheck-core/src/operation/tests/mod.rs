mod query_parser_tests;
mod validation_tests;
