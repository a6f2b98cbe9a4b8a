use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_internal_error!(WriteError, "Error writing {target}.", { target: &str });

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_internal_error!(InvalidJson, "Could not serialize {json_type} as JSON.", { json_type: &str });

// Run configuration.
define_client_error!(
    MissingConfigField,
    "Run configuration field '{field}' must not be empty.",
    { field: &str }
);
