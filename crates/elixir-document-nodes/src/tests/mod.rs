mod plugin_tests;
