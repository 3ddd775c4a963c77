mod annotation_property_tests;
