mod plugin_args_tests;
