mod foundation_options;
