mod annotation_target_tests;
mod reconcile_tests;
