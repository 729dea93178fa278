mod session_options;
