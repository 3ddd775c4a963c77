mod schema_cache_tests;
