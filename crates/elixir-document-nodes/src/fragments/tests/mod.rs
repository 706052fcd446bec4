mod fragment_registry_builder_tests;
